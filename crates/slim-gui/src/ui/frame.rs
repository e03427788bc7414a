//! Frame Declaration
//!
//! One immediate-mode pass: menu bar first, then Viewer, Controls and
//! Settings in that order. Menu actions are applied before the panels are
//! declared, so a toggle shows up in the same frame.

use egui::Context;

use super::{ControlAction, ControlsPanel, MainMenuBar, SettingsPanel, ViewerPanel};
use crate::platform::PlatformInfo;
use crate::state::WindowSize;
use crate::view::{MenuAction, PanelLayout, UiConfig};

/// What happened while declaring one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Height of the menu bar measured this frame
    pub menubar_height: f32,
    /// Geometry used for the docked panels this frame
    pub layout: PanelLayout,
    /// Menu items chosen this frame (already applied)
    pub menu_actions: Vec<MenuAction>,
    /// Controls panel actions for the caller to carry out
    pub control_actions: Vec<ControlAction>,
}

/// Declare the whole UI for one frame
///
/// `window` is the window size in logical points.
pub fn draw_frame(
    ctx: &Context,
    ui_config: &mut UiConfig,
    platform: &PlatformInfo,
    window: WindowSize,
) -> FrameReport {
    let (menu_actions, menubar_height) = MainMenuBar::show(ctx, ui_config.show_controls);
    for action in &menu_actions {
        ui_config.apply(*action);
    }

    let layout = PanelLayout::compute(window, menubar_height, ui_config.show_controls);

    ViewerPanel::show(ctx, layout.viewer);

    let mut control_actions = Vec::new();
    if ui_config.show_controls {
        control_actions =
            ControlsPanel::show(ctx, layout.controls, &mut ui_config.show_controls, platform);
    }

    if ui_config.show_settings {
        SettingsPanel::show(ctx, &mut ui_config.show_settings, &mut ui_config.font_size);
    }

    FrameReport {
        menubar_height,
        layout,
        menu_actions,
        control_actions,
    }
}
