use lazy_static::lazy_static;

use crate::labels::error::LabelError;
use crate::labels::severity::SeverityLevel;
use crate::labels::LevelLabelRegistry;

lazy_static! {
    static ref GLOBAL_LABELS: LevelLabelRegistry = LevelLabelRegistry::new();
}

/// Current display text for `level` in the process-wide registry.
pub fn display_text(level: SeverityLevel) -> Result<String, LabelError> {
    GLOBAL_LABELS.display_text(level)
}

/// Overrides the display text for `level` in the process-wide registry.
/// The change is visible to every thread.
pub fn register_display_text(
    level: SeverityLevel,
    text: impl Into<String>,
) -> Result<(), LabelError> {
    GLOBAL_LABELS.register_display_text(level, text)
}

/// Restores the default display text for `level` in the process-wide
/// registry.
pub fn restore_default_text(level: SeverityLevel) -> Result<(), LabelError> {
    GLOBAL_LABELS.restore_default_text(level)
}
