//! Controls Panel
//!
//! Left-hand panel with platform facts and the simulation start button.

use egui::{Color32, Context, Rect};

use super::panel;
use crate::platform::PlatformInfo;

const HEADING_COLOR: Color32 = Color32::from_rgb(255, 0, 255);

/// Control action to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Start button clicked
    Start,
}

/// Controls panel
pub struct ControlsPanel;

impl ControlsPanel {
    /// Draw the controls panel and return any action to take
    ///
    /// The close button clears `open`.
    pub fn show(
        ctx: &Context,
        rect: Rect,
        open: &mut bool,
        platform: &PlatformInfo,
    ) -> Vec<ControlAction> {
        let mut actions = Vec::new();

        panel::show_docked(ctx, "Controls", rect, |ui| {
            panel::header(ui, "Controls", open);

            ui.colored_label(HEADING_COLOR, "Platform");
            for line in platform.lines() {
                ui.label(line);
            }

            if ui.button("Start").clicked() {
                actions.push(ControlAction::Start);
            }
        });

        actions
    }
}
