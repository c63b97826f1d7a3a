use std::fmt;

use super::error::LabelError;

/// Severity of a log entry, ordered from fully disabled to most severe.
///
/// The ordinals are fixed: `Disabled` is 0 and `Critical` is 8. Raw numbers
/// coming from configuration or FFI go through `try_from`, which is the only
/// place an out-of-range value can appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeverityLevel {
    Disabled = 0,
    Trace = 1,
    Debug = 2,
    Verbose = 3,
    Message = 4,
    Warning = 5,
    Error = 6,
    Fatal = 7,
    Critical = 8,
}

impl SeverityLevel {
    /// Every variant, in ordinal order.
    pub const ALL: [SeverityLevel; 9] = [
        SeverityLevel::Disabled,
        SeverityLevel::Trace,
        SeverityLevel::Debug,
        SeverityLevel::Verbose,
        SeverityLevel::Message,
        SeverityLevel::Warning,
        SeverityLevel::Error,
        SeverityLevel::Fatal,
        SeverityLevel::Critical,
    ];

    /// The symbolic name of the variant.
    ///
    /// Adding a variant without listing it here fails the build, so the
    /// registry can never be seeded with a level it doesn't know a name for.
    pub fn name(&self) -> &'static str {
        match self {
            SeverityLevel::Disabled => "Disabled",
            SeverityLevel::Trace => "Trace",
            SeverityLevel::Debug => "Debug",
            SeverityLevel::Verbose => "Verbose",
            SeverityLevel::Message => "Message",
            SeverityLevel::Warning => "Warning",
            SeverityLevel::Error => "Error",
            SeverityLevel::Fatal => "Fatal",
            SeverityLevel::Critical => "Critical",
        }
    }

    /// The default display label: the symbolic name, uppercased.
    pub fn default_label(&self) -> String {
        self.name().to_uppercase()
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for SeverityLevel {
    type Error = LabelError;

    fn try_from(value: u8) -> Result<Self, LabelError> {
        SeverityLevel::ALL
            .get(value as usize)
            .copied()
            .ok_or(LabelError::InvalidLevel { value })
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
