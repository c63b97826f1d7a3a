use thiserror::Error;

/// Contract violations raised by the label registry.
///
/// Both variants mean the caller broke the API contract; there is no
/// recovery path inside the registry and no partial mutation precedes them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The value is not a defined `SeverityLevel` (or, equivalently, has no
    /// entry in the registry's key set).
    #[error("{value} is not a valid SeverityLevel")]
    InvalidLevel { value: u8 },

    /// The replacement label was empty or whitespace-only.
    #[error("`{param}` must not be empty or whitespace-only")]
    InvalidOverride { param: &'static str },
}
