//! Event Loop
//!
//! winit ApplicationHandler implementation: window creation, event dispatch
//! and per-frame orchestration.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::App;
use crate::input::translate_window_event;
use crate::state::{EventEffect, ShellEvent};

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.view.gl_window.is_some() {
            return;
        }

        if let Err(e) = self.view.init(event_loop, &self.settings) {
            log::error!("{}", e);
            self.fault = Some(e);
            event_loop.exit();
            return;
        }

        // The platform may have adjusted the requested size
        if let Some(size) = self.view.gl_window.as_ref().map(|w| w.inner_size()) {
            self.handle_shell_event(ShellEvent::Resized(size));
        }
        self.view.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        // egui sees every event first, for its own input bookkeeping
        self.view.on_window_event(&event);

        if let Some(shell_event) = translate_window_event(&event) {
            if self.handle_shell_event(shell_event) == EventEffect::Exit {
                event_loop.exit();
                return;
            }
        }

        if let WindowEvent::RedrawRequested = event {
            if self.fault.is_some() {
                return;
            }
            if let Err(e) = self.render_frame() {
                log::error!("{}", e);
                self.fault = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Queue drained: draw the next frame
        if self.state.is_running() && self.fault.is_none() {
            self.view.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("Shutting down after {} frames", self.state.frame_count());
        self.view.shutdown();
    }
}
