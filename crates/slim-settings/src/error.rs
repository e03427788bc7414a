//! Error types for the settings system

use thiserror::Error;

/// Errors raised when validating shell settings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingError {
    /// A window dimension was zero
    #[error("Invalid window size for '{name}': {width}x{height}")]
    EmptySize {
        name: &'static str,
        width: u32,
        height: u32,
    },

    /// The minimum window size does not fit inside the initial size
    #[error("Minimum window size {min_width}x{min_height} exceeds initial size {width}x{height}")]
    MinimumExceedsInitial {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    /// Invalid value for a setting
    #[error("Invalid value for setting '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}
