//! egui UI Construction
//!
//! Runs one egui pass over the shell's panels and carries out the actions
//! they report.

use crate::ui::{draw_frame, ControlAction};

use super::App;

/// Tessellated egui output ready to paint
pub(crate) struct EguiFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

impl App {
    /// Run the egui UI and return the output for rendering
    pub(crate) fn run_egui_ui(&mut self) -> Option<EguiFrame> {
        let raw_input = {
            let (egui_state, gl_window) = match (&mut self.view.egui_state, &self.view.gl_window) {
                (Some(state), Some(gl_window)) => (state, gl_window),
                _ => return None,
            };
            egui_state.take_egui_input(gl_window.window())
        };
        let window = self.view.logical_size()?;

        let mut report = None;
        let full_output = {
            let ui_config = &mut self.view.ui_config;
            let platform = &self.platform;
            self.view.egui_ctx.run(raw_input, |ctx| {
                report = Some(draw_frame(ctx, ui_config, platform, window));
            })
        };

        if let (Some(egui_state), Some(gl_window)) = (&mut self.view.egui_state, &self.view.gl_window) {
            egui_state.handle_platform_output(gl_window.window(), full_output.platform_output);
        }

        for action in report.map(|r| r.control_actions).unwrap_or_default() {
            match action {
                ControlAction::Start => log::info!("Start button clicked"),
            }
        }

        self.view.sync_font_size();

        let primitives = self
            .view
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        Some(EguiFrame {
            primitives,
            textures_delta: full_output.textures_delta,
            pixels_per_point: full_output.pixels_per_point,
        })
    }
}
