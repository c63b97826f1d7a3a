pub mod error;
pub mod severity;

use std::collections::HashMap;

use parking_lot::RwLock;

use error::LabelError;
use severity::SeverityLevel;

/// Mapping from severity level to its current display text.
///
/// Seeded with the uppercased variant names and mutated in place by
/// [`register_display_text`](Self::register_display_text) and
/// [`restore_default_text`](Self::restore_default_text). The map always
/// holds exactly one entry per defined level, and every value is non-empty
/// and not whitespace-only.
///
/// The map sits behind an `RwLock`, so a shared instance can be read and
/// mutated from multiple threads.
pub struct LevelLabelRegistry {
    labels: RwLock<HashMap<SeverityLevel, String>>,
}

impl LevelLabelRegistry {
    pub fn new() -> Self {
        let mut labels = HashMap::with_capacity(SeverityLevel::ALL.len());
        for level in SeverityLevel::ALL {
            labels.insert(level, level.default_label());
        }
        debug_assert_eq!(labels.len(), SeverityLevel::ALL.len());

        LevelLabelRegistry {
            labels: RwLock::new(labels),
        }
    }

    /// Returns the current display text for `level`, default or overridden.
    pub fn display_text(&self, level: SeverityLevel) -> Result<String, LabelError> {
        let labels = self.labels.read();
        Self::ensure_known(&labels, level)?;
        Ok(labels[&level].clone())
    }

    /// Replaces the display text for `level` with `text`.
    ///
    /// Fails with `InvalidOverride` if `text` is empty or whitespace-only,
    /// leaving the current label in place. The change is visible to every
    /// subsequent lookup on this registry.
    pub fn register_display_text(
        &self,
        level: SeverityLevel,
        text: impl Into<String>,
    ) -> Result<(), LabelError> {
        let mut labels = self.labels.write();
        Self::ensure_known(&labels, level)?;

        let text = text.into();
        if text.trim().is_empty() {
            return Err(LabelError::InvalidOverride { param: "text" });
        }

        labels.insert(level, text);
        Ok(())
    }

    /// Puts the default label for `level` back, discarding any override.
    pub fn restore_default_text(&self, level: SeverityLevel) -> Result<(), LabelError> {
        let mut labels = self.labels.write();
        Self::ensure_known(&labels, level)?;

        labels.insert(level, level.default_label());
        Ok(())
    }

    // Containment check against the live map rather than the enum, so a
    // missing entry surfaces the same way an undefined level does.
    fn ensure_known(
        labels: &HashMap<SeverityLevel, String>,
        level: SeverityLevel,
    ) -> Result<(), LabelError> {
        if labels.contains_key(&level) {
            Ok(())
        } else {
            Err(LabelError::InvalidLevel {
                value: level.ordinal(),
            })
        }
    }
}

impl Default for LevelLabelRegistry {
    fn default() -> Self {
        LevelLabelRegistry::new()
    }
}
