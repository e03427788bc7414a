//! Main Menu Bar
//!
//! File / Edit / View menus along the top of the window.

use egui::containers::menu::MenuBar;
use egui::{Button, Context};

use crate::view::MenuAction;

/// Main menu bar
pub struct MainMenuBar;

impl MainMenuBar {
    /// Draw the menu bar; returns the chosen actions and the bar's height
    pub fn show(ctx: &Context, show_controls: bool) -> (Vec<MenuAction>, f32) {
        let mut actions = Vec::new();

        let response = egui::TopBottomPanel::top("main_menu_bar").show(ctx, |ui| {
            MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Test").clicked() {
                        actions.push(MenuAction::Test);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui.add(Button::new("Undo").shortcut_text("Ctrl+Z")).clicked() {
                        actions.push(MenuAction::Undo);
                    }
                    // Redo is never available
                    ui.add_enabled(false, Button::new("Redo").shortcut_text("Ctrl+Y"));
                    ui.separator();
                    if ui.button("Settings").clicked() {
                        actions.push(MenuAction::OpenSettings);
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut checked = show_controls;
                    if ui.checkbox(&mut checked, "Controls").clicked() {
                        actions.push(MenuAction::ToggleControls);
                    }
                });
            });
        });

        (actions, response.response.rect.height())
    }
}
