//! Shell Settings
//!
//! Grouped configuration values for window creation, fonts, the GL pixel
//! format and appearance.

use std::path::PathBuf;

use crate::SettingError;

/// Font sizes offered by the Settings panel
pub const FONT_SIZE_CHOICES: [f32; 3] = [12.0, 14.0, 18.0];

/// Window creation settings (sizes are logical pixels)
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    /// Window title
    pub title: String,
    /// Initial inner width
    pub width: u32,
    /// Initial inner height
    pub height: u32,
    /// Smallest width the user can resize to
    pub min_width: u32,
    /// Smallest height the user can resize to
    pub min_height: u32,
    /// Allow the user to resize the window
    pub resizable: bool,
    /// Center the window on the primary monitor at creation
    pub centered: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "slimulation".to_string(),
            width: 1280,
            height: 720,
            min_width: 500,
            min_height: 300,
            resizable: true,
            centered: true,
        }
    }
}

/// Font settings
#[derive(Debug, Clone, PartialEq)]
pub struct FontSettings {
    /// Font file, relative to the working directory
    pub path: PathBuf,
    /// Text size in points at startup
    pub size: f32,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("../NimbusSans-Regular.otf"),
            size: 18.0,
        }
    }
}

/// OpenGL pixel format and presentation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlSettings {
    pub double_buffer: bool,
    pub depth_bits: u8,
    pub stencil_bits: u8,
    /// Synchronize buffer swaps with the display refresh
    pub vsync: bool,
}

impl Default for GlSettings {
    fn default() -> Self {
        Self {
            double_buffer: true,
            depth_bits: 24,
            stencil_bits: 8,
            vsync: true,
        }
    }
}

/// Appearance settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppearanceSettings {
    /// Framebuffer clear colour, RGBA in `0.0..=1.0`
    pub clear_color: [f32; 4],
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        let grey = 35.0 / 255.0;
        Self {
            clear_color: [grey, grey, grey, 1.0],
        }
    }
}

/// All settings the shell needs at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellSettings {
    pub window: WindowSettings,
    pub font: FontSettings,
    pub gl: GlSettings,
    pub appearance: AppearanceSettings,
}

impl ShellSettings {
    /// Check the settings for values the shell cannot start with
    pub fn validate(&self) -> Result<(), SettingError> {
        let window = &self.window;
        if window.width == 0 || window.height == 0 {
            return Err(SettingError::EmptySize {
                name: "window",
                width: window.width,
                height: window.height,
            });
        }
        if window.min_width == 0 || window.min_height == 0 {
            return Err(SettingError::EmptySize {
                name: "window_min",
                width: window.min_width,
                height: window.min_height,
            });
        }
        if window.min_width > window.width || window.min_height > window.height {
            return Err(SettingError::MinimumExceedsInitial {
                width: window.width,
                height: window.height,
                min_width: window.min_width,
                min_height: window.min_height,
            });
        }

        if !(self.font.size.is_finite() && self.font.size > 0.0) {
            return Err(SettingError::InvalidValue {
                name: "font_size",
                reason: format!("{} is not a positive size", self.font.size),
            });
        }

        if let Some(c) = self
            .appearance
            .clear_color
            .iter()
            .find(|c| !(0.0..=1.0).contains(*c))
        {
            return Err(SettingError::InvalidValue {
                name: "clear_color",
                reason: format!("component {} outside 0..=1", c),
            });
        }

        Ok(())
    }
}
