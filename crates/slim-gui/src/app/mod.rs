//! Main Application
//!
//! The App struct owns the frame-loop state, the view (window, GL, egui) and
//! the platform facts shown in the Controls panel.

mod event_loop;
mod render;
mod ui;

use slim_settings::ShellSettings;

use crate::error::GuiError;
use crate::platform::PlatformInfo;
use crate::state::{EventEffect, ShellEvent, ShellState, WindowSize};
use crate::view::AppView;

/// Main application state
pub struct App {
    // =========================================================================
    // Core Components
    // =========================================================================
    /// Startup settings
    settings: ShellSettings,
    /// Window dimensions and run state
    pub state: ShellState,
    /// Application view (window, GL, egui)
    pub view: AppView,
    /// Host facts for the Controls panel
    platform: PlatformInfo,

    // =========================================================================
    // Application Lifecycle
    // =========================================================================
    /// Error that stopped the event loop, reported by `run`
    fault: Option<GuiError>,
}

impl App {
    /// Create a new application; the window is created on `resumed`
    pub fn new(settings: ShellSettings) -> Self {
        let window = WindowSize::new(settings.window.width, settings.window.height);
        Self {
            view: AppView::new(&settings),
            state: ShellState::new(window),
            platform: PlatformInfo::detect(),
            settings,
            fault: None,
        }
    }

    /// Take the error that stopped the event loop, if any
    pub fn take_fault(&mut self) -> Option<GuiError> {
        self.fault.take()
    }

    /// Apply a frame-loop event and carry out its GL side effect
    pub(crate) fn handle_shell_event(&mut self, event: ShellEvent) -> EventEffect {
        let effect = self.state.apply(event);
        match effect {
            EventEffect::Viewport(size) => {
                log::debug!("Window size: {}x{}", size.width, size.height);
                self.view.resize(size);
            }
            EventEffect::Exit => log::info!("Quit requested ({:?})", event),
            EventEffect::None => {}
        }
        effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RunState;

    #[test]
    fn test_no_frame_after_quit() {
        let mut app = App::new(ShellSettings::default());
        let events = [
            ShellEvent::Resized(WindowSize::new(800, 600)),
            ShellEvent::Resized(WindowSize::new(1024, 768)),
            ShellEvent::Quit,
            ShellEvent::Resized(WindowSize::new(640, 480)),
        ];

        let mut effects = Vec::new();
        for event in events {
            effects.push(app.handle_shell_event(event));
            app.render_frame().expect("headless frame");
        }

        assert_eq!(
            effects,
            vec![
                EventEffect::Viewport(WindowSize::new(800, 600)),
                EventEffect::Viewport(WindowSize::new(1024, 768)),
                EventEffect::Exit,
                EventEffect::None,
            ]
        );
        assert_eq!(app.state.frame_count(), 2);
        assert_eq!(app.state.run_state(), RunState::Terminating);
        assert_eq!(app.state.window, WindowSize::new(640, 480));
    }

    #[test]
    fn test_escape_stops_frames() {
        let mut app = App::new(ShellSettings::default());
        app.render_frame().expect("headless frame");
        assert_eq!(app.handle_shell_event(ShellEvent::EscapePressed), EventEffect::Exit);
        for _ in 0..3 {
            app.render_frame().expect("headless frame");
        }
        assert_eq!(app.state.frame_count(), 1);
        assert!(app.take_fault().is_none());
    }
}
