//! Viewer Panel
//!
//! Placeholder for the simulation view. Always visible, undecorated.

use egui::{Context, Rect};

use super::panel;

/// Text shown until the simulation renderer exists
pub const VIEWER_TEXT: &str = "Slime simulation through OpenGL goes here";

pub struct ViewerPanel;

impl ViewerPanel {
    pub fn show(ctx: &Context, rect: Rect) {
        panel::show_docked(ctx, "Viewer", rect, |ui| {
            ui.label(VIEWER_TEXT);
        });
    }
}
