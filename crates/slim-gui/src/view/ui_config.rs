//! UI Configuration
//!
//! Panel visibility flags and the selected font size, plus the menu actions
//! that change them.

/// Actions produced by the main menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// File > Test
    Test,
    /// Edit > Undo
    Undo,
    /// Edit > Settings
    OpenSettings,
    /// View > Controls
    ToggleControls,
}

/// UI layout configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Show the Controls panel on the left
    pub show_controls: bool,
    /// Show the floating Settings window
    pub show_settings: bool,
    /// Text size chosen in the Settings window
    pub font_size: f32,
}

impl UiConfig {
    /// Create a new UI config with the given startup font size
    pub fn new(font_size: f32) -> Self {
        Self {
            show_controls: true,
            show_settings: false,
            font_size,
        }
    }

    /// Apply a menu action to the flags
    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::Test | MenuAction::Undo => {
                log::debug!("Menu item {:?} has no action", action);
            }
            MenuAction::OpenSettings => self.show_settings = true,
            MenuAction::ToggleControls => self.show_controls = !self.show_controls,
        }
    }
}
