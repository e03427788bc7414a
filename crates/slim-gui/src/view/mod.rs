//! View Management
//!
//! This module contains all windowing and display resources:
//! - `AppView` - GL window, egui context and its winit/glow backends
//! - `GlWindow` - window, GL surface and context, glow function table
//! - `GlRequest` - per-platform OpenGL version request
//! - `UiConfig` - panel visibility and font size
//! - `PanelLayout` - per-frame panel geometry

mod app_view;
mod gl_profile;
mod gl_window;
mod layout;
mod ui_config;

pub use app_view::AppView;
pub use gl_profile::{GlRequest, TargetPlatform};
pub use gl_window::GlWindow;
pub use layout::PanelLayout;
pub use ui_config::{MenuAction, UiConfig};
