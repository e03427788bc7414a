//! Application View
//!
//! Contains all windowing and rendering resources: the GL window, the egui
//! context and its winit/glow backends, and the UI configuration.

use std::sync::Arc;

use egui::ViewportId;
use slim_settings::ShellSettings;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;

use super::{GlRequest, GlWindow, UiConfig};
use crate::error::GuiError;
use crate::state::WindowSize;
use crate::ui::style;

/// Application view containing all rendering resources
pub struct AppView {
    // =========================================================================
    // Window State
    // =========================================================================
    /// Window, GL surface and context
    pub gl_window: Option<GlWindow>,

    // =========================================================================
    // egui Integration
    // =========================================================================
    /// egui context
    pub egui_ctx: egui::Context,
    /// egui-winit state
    pub egui_state: Option<egui_winit::State>,
    /// egui-glow painter
    pub painter: Option<egui_glow::Painter>,

    // =========================================================================
    // UI Configuration
    // =========================================================================
    /// UI layout configuration
    pub ui_config: UiConfig,
    /// Font size currently applied to the egui style
    applied_font_size: f32,
    /// Framebuffer clear colour
    clear_color: [f32; 4],
}

impl AppView {
    /// Create a view with no window yet
    pub fn new(settings: &ShellSettings) -> Self {
        Self {
            gl_window: None,
            egui_ctx: egui::Context::default(),
            egui_state: None,
            painter: None,
            ui_config: UiConfig::new(settings.font.size),
            applied_font_size: settings.font.size,
            clear_color: settings.appearance.clear_color,
        }
    }

    /// Create the window and GL context, then bring up egui on top of it
    pub fn init(
        &mut self,
        event_loop: &ActiveEventLoop,
        settings: &ShellSettings,
    ) -> Result<(), GuiError> {
        let request = GlRequest::native();
        let gl_window = GlWindow::create(event_loop, settings, request)?;

        // No shader version: egui_glow reads it from the live context
        let painter = egui_glow::Painter::new(Arc::clone(gl_window.gl()), "", None, false)
            .map_err(|e| GuiError::Painter(e.to_string()))?;

        let window = gl_window.window();
        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(painter.max_texture_side()),
        );

        style::configure(&self.egui_ctx);
        style::install_font(&self.egui_ctx, &settings.font);
        style::apply_font_size(&self.egui_ctx, self.applied_font_size);

        log::info!("GUI initialized");

        self.gl_window = Some(gl_window);
        self.egui_state = Some(egui_state);
        self.painter = Some(painter);

        Ok(())
    }

    /// Forward a window event to egui; returns whether egui consumed it
    pub fn on_window_event(&mut self, event: &WindowEvent) -> bool {
        match (&mut self.egui_state, &self.gl_window) {
            (Some(state), Some(gl_window)) => state.on_window_event(gl_window.window(), event).consumed,
            _ => false,
        }
    }

    /// Handle window resize
    pub fn resize(&mut self, size: WindowSize) {
        if size.is_empty() {
            return;
        }
        if let Some(gl_window) = &self.gl_window {
            gl_window.resize(size);
        }
    }

    /// Window size in logical points, as the panels see it
    pub fn logical_size(&self) -> Option<WindowSize> {
        self.gl_window
            .as_ref()
            .map(|w| w.inner_size().to_logical(w.scale_factor()))
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Apply the font size chosen in the Settings panel if it changed
    pub fn sync_font_size(&mut self) {
        if self.ui_config.font_size != self.applied_font_size {
            style::apply_font_size(&self.egui_ctx, self.ui_config.font_size);
            self.applied_font_size = self.ui_config.font_size;
            log::info!("Font size set to {}", self.applied_font_size);
        }
    }

    /// Request a window redraw
    pub fn request_redraw(&self) {
        if let Some(gl_window) = &self.gl_window {
            gl_window.request_redraw();
        }
    }

    /// Release resources: GUI backend, GUI platform state, GL context, window
    pub fn shutdown(&mut self) {
        if let Some(mut painter) = self.painter.take() {
            painter.destroy();
        }
        self.egui_state = None;
        // GlWindow drops its GL surface and context before the window.
        self.gl_window = None;
        log::info!("Window and GL context released");
    }
}
