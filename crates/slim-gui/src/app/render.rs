//! Frame Rendering
//!
//! Clear, egui pass, paint and present.

use super::ui::EguiFrame;
use super::App;
use crate::error::GuiError;

impl App {
    /// Render a frame; does nothing once the loop is terminating
    pub(crate) fn render_frame(&mut self) -> Result<(), GuiError> {
        if !self.state.begin_frame() {
            return Ok(());
        }

        if let Some(gl_window) = &self.view.gl_window {
            gl_window.clear(self.view.clear_color());
        }

        let Some(frame) = self.run_egui_ui() else {
            return Ok(());
        };
        self.paint_egui(frame);

        match &self.view.gl_window {
            Some(gl_window) => gl_window.swap_buffers(),
            None => Ok(()),
        }
    }

    /// Upload textures and draw the tessellated egui output
    fn paint_egui(&mut self, frame: EguiFrame) {
        let (Some(painter), Some(gl_window)) = (&mut self.view.painter, &self.view.gl_window) else {
            return;
        };

        let size = gl_window.inner_size();
        painter.paint_and_update_textures(
            [size.width, size.height],
            frame.pixels_per_point,
            &frame.primitives,
            &frame.textures_delta,
        );
    }
}
