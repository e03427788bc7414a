//! Settings Window
//!
//! Floating window with the font size selector.

use egui::Context;
use slim_settings::FONT_SIZE_CHOICES;

use super::panel;

pub struct SettingsPanel;

impl SettingsPanel {
    /// Draw the settings window; the close button clears `open`
    pub fn show(ctx: &Context, open: &mut bool, font_size: &mut f32) {
        egui::Window::new("Settings")
            .title_bar(false)
            .collapsible(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                panel::header(ui, "Settings", open);
                egui::ComboBox::from_label("Font Size")
                    .selected_text(size_label(*font_size))
                    .show_ui(ui, |ui| {
                        for size in FONT_SIZE_CHOICES {
                            ui.selectable_value(&mut *font_size, size, size_label(size));
                        }
                    });
            });
    }
}

fn size_label(size: f32) -> String {
    format!("{}", size)
}
