//! UI Components Module
//!
//! The egui panels of the shell and the per-frame declaration that ties
//! them together.

pub mod controls;
pub mod frame;
pub mod menu_bar;
pub mod panel;
pub mod settings;
pub mod style;
pub mod viewer;

pub use controls::{ControlAction, ControlsPanel};
pub use frame::{draw_frame, FrameReport};
pub use menu_bar::MainMenuBar;
pub use panel::close_button_id;
pub use settings::SettingsPanel;
pub use viewer::ViewerPanel;
