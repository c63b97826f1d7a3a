mod global;
mod labels;

pub use global::{display_text, register_display_text, restore_default_text};
pub use labels::error::LabelError;
pub use labels::severity::SeverityLevel;
pub use labels::LevelLabelRegistry;
