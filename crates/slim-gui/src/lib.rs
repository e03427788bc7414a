//! slimulation GUI Shell
//!
//! Opens a window with an OpenGL core-profile context and draws the egui
//! panels of the simulation front end.
//!
//! ## Panels
//!
//! - Menu bar (File, Edit, View)
//! - Viewer - placeholder for the simulation view
//! - Controls - platform facts and the start button
//! - Settings - font size selection

pub mod app;
pub mod error;
pub mod input;
pub mod platform;
pub mod state;
pub mod ui;
pub mod view;

use slim_settings::ShellSettings;
use winit::event_loop::{ControlFlow, EventLoop};

pub use app::App;
pub use error::GuiError;
pub use state::{RunState, ShellState};

/// Run the shell until the window is closed or Escape is pressed
pub fn run(settings: ShellSettings) -> Result<(), GuiError> {
    settings.validate()?;

    let event_loop = EventLoop::new().map_err(GuiError::VideoInit)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app).map_err(GuiError::EventLoop)?;

    match app.take_fault() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
