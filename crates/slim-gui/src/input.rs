//! Translation from `winit` window events to the shell's [`ShellEvent`]s.
//!
//! Only events with a side effect on the frame loop are translated; all
//! events are still forwarded to egui separately.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::state::{ShellEvent, WindowSize};

/// Translates a `winit::event::WindowEvent` into a `ShellEvent`.
///
/// Returns `None` for events the frame loop does not react to.
pub fn translate_window_event(event: &WindowEvent) -> Option<ShellEvent> {
    match event {
        WindowEvent::CloseRequested => Some(ShellEvent::Quit),
        WindowEvent::Resized(size) => Some(ShellEvent::Resized(WindowSize::new(
            size.width,
            size.height,
        ))),
        WindowEvent::KeyboardInput { event, .. } => translate_key(&event.logical_key, event.state),
        _ => None,
    }
}

/// Maps a key transition to a `ShellEvent`
pub fn translate_key(key: &Key, state: ElementState) -> Option<ShellEvent> {
    match (key, state) {
        (Key::Named(NamedKey::Escape), ElementState::Pressed) => Some(ShellEvent::EscapePressed),
        _ => None,
    }
}
