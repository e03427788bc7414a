//! slimulation Settings
//!
//! Typed configuration for the desktop shell. The values are compiled in;
//! nothing is read from disk. Groups:
//!
//! - [`WindowSettings`] - title, initial and minimum size
//! - [`FontSettings`] - font file and startup size
//! - [`GlSettings`] - pixel format and swap interval
//! - [`AppearanceSettings`] - clear colour
//!
//! # Example
//!
//! ```rust
//! use slim_settings::ShellSettings;
//!
//! let settings = ShellSettings::default();
//! settings.validate().unwrap();
//! assert_eq!(settings.window.title, "slimulation");
//! ```

mod error;
mod shell;

pub use error::SettingError;
pub use shell::{
    AppearanceSettings, FontSettings, GlSettings, ShellSettings, WindowSettings, FONT_SIZE_CHOICES,
};
