//! Panel Layout
//!
//! Fixed-ratio split of the window below the menu bar: Controls takes the
//! left quarter, Viewer the rest (all of it when Controls is hidden).
//! Recomputed every frame; nothing is cached.

use egui::{pos2, vec2, Rect};

use crate::state::WindowSize;

/// Screen rectangles for the docked panels of one frame (logical points)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub controls: Rect,
    pub viewer: Rect,
}

impl PanelLayout {
    pub fn compute(window: WindowSize, menubar_height: f32, show_controls: bool) -> Self {
        let height = (window.height as f32 - menubar_height).max(0.0);

        Self {
            controls: Rect::from_min_size(
                pos2(0.0, menubar_height),
                vec2(Self::controls_width(window) as f32, height),
            ),
            viewer: Rect::from_min_size(
                pos2(
                    (window.width - Self::viewer_width(window, show_controls)) as f32,
                    menubar_height,
                ),
                vec2(Self::viewer_width(window, show_controls) as f32, height),
            ),
        }
    }

    /// Controls width: a quarter of the window, integer division
    pub fn controls_width(window: WindowSize) -> u32 {
        window.width / 4
    }

    /// Viewer width: three quarters of the window (truncated), or all of it
    pub fn viewer_width(window: WindowSize, show_controls: bool) -> u32 {
        if show_controls {
            (window.width as f64 * 0.75) as u32
        } else {
            window.width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_three_quarters_with_controls() {
        let layout = PanelLayout::compute(WindowSize::new(1280, 720), 20.0, true);
        assert_eq!(layout.viewer.width(), 960.0);
        assert_eq!(layout.viewer.min.x, 320.0);
        assert_eq!(layout.controls.width(), 320.0);
        assert_eq!(layout.controls.min, pos2(0.0, 20.0));
        assert_eq!(layout.viewer.height(), 700.0);
    }

    #[test]
    fn test_viewer_full_width_without_controls() {
        let layout = PanelLayout::compute(WindowSize::new(1280, 720), 20.0, false);
        assert_eq!(layout.viewer.width(), 1280.0);
        assert_eq!(layout.viewer.min.x, 0.0);
    }

    #[test]
    fn test_truncation() {
        let window = WindowSize::new(501, 300);
        assert_eq!(PanelLayout::viewer_width(window, true), 375);
        assert_eq!(PanelLayout::controls_width(window), 125);
        assert_eq!(PanelLayout::viewer_width(window, false), 501);
    }

    #[test]
    fn test_viewer_width_over_range() {
        for width in 0..2000u32 {
            let window = WindowSize::new(width, 300);
            assert_eq!(
                PanelLayout::viewer_width(window, true),
                width * 3 / 4,
                "width {width}"
            );
        }
    }

    #[test]
    fn test_menubar_taller_than_window() {
        let layout = PanelLayout::compute(WindowSize::new(500, 10), 24.0, true);
        assert_eq!(layout.viewer.height(), 0.0);
        assert_eq!(layout.controls.height(), 0.0);
    }
}
