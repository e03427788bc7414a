//! GL Window
//!
//! Window creation with a matching GL config, context creation for the
//! platform's [`GlRequest`], surface binding, vsync and function loading.

use std::ffi::CStr;
use std::num::NonZeroU32;
use std::sync::Arc;

use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextAttributesBuilder, GlProfile, NotCurrentContext, PossiblyCurrentContext,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use raw_window_handle::HasWindowHandle;
use slim_settings::{GlSettings, ShellSettings, WindowSettings};
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use super::GlRequest;
use crate::error::GuiError;
use crate::state::WindowSize;

/// Entry point looked up to confirm the function loader works
const LOADER_CHECK_SYMBOL: &CStr = c"glClear";

/// Window with a current GL context and loaded GL functions
///
/// Fields drop in declaration order: functions, surface, context, window.
pub struct GlWindow {
    gl: Arc<glow::Context>,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlWindow {
    /// Create the window, GL context and surface and load GL functions
    pub fn create(
        event_loop: &ActiveEventLoop,
        settings: &ShellSettings,
        request: GlRequest,
    ) -> Result<Self, GuiError> {
        log::info!(
            "Creating window '{}' ({}x{}, min {}x{})",
            settings.window.title,
            settings.window.width,
            settings.window.height,
            settings.window.min_width,
            settings.window.min_height
        );

        let window_attributes = window_attributes(event_loop, &settings.window);
        let template = config_template(&settings.gl);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes.clone()))
            .build(event_loop, template, |configs| pick_config(configs, &settings.gl))
            .map_err(|e| GuiError::Display(e.to_string()))?;

        log::debug!(
            "Picked GL config: depth {}, stencil {}, samples {}",
            gl_config.depth_size(),
            gl_config.stencil_size(),
            gl_config.num_samples()
        );

        let window = match window {
            Some(window) => window,
            None => glutin_winit::finalize_window(event_loop, window_attributes, &gl_config)?,
        };

        let not_current = create_context(&window, &gl_config, request)?;

        let surface_attributes = window.build_surface_attributes(SurfaceAttributesBuilder::default())?;
        let surface = unsafe {
            gl_config
                .display()
                .create_window_surface(&gl_config, &surface_attributes)?
        };
        let context = not_current.make_current(&surface)?;

        if settings.gl.vsync {
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
                log::warn!("Couldn't enable vsync: {}", e);
            }
        }

        let gl = load_functions(&gl_config)?;
        log::info!("OpenGL functions loaded");
        unsafe {
            log::info!("GL_VERSION: {}", gl.get_parameter_string(glow::VERSION));
            log::info!("GL_RENDERER: {}", gl.get_parameter_string(glow::RENDERER));
        }

        let gl_window = Self {
            gl: Arc::new(gl),
            surface,
            context,
            window,
        };
        let size = gl_window.window.inner_size();
        gl_window.set_viewport(WindowSize::new(size.width, size.height));

        Ok(gl_window)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn gl(&self) -> &Arc<glow::Context> {
        &self.gl
    }

    /// Current inner size in physical pixels
    pub fn inner_size(&self) -> WindowSize {
        let size = self.window.inner_size();
        WindowSize::new(size.width, size.height)
    }

    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    /// Resize the GL surface and viewport
    pub fn resize(&self, size: WindowSize) {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        self.surface.resize(&self.context, width, height);
        self.set_viewport(size);
    }

    fn set_viewport(&self, size: WindowSize) {
        unsafe {
            self.gl.viewport(0, 0, size.width as i32, size.height as i32);
        }
    }

    /// Clear colour, depth and stencil buffers
    pub fn clear(&self, color: [f32; 4]) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT | glow::STENCIL_BUFFER_BIT);
        }
    }

    /// Present the back buffer
    pub fn swap_buffers(&self) -> Result<(), GuiError> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(GuiError::Present)
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn window_attributes(
    event_loop: &ActiveEventLoop,
    settings: &WindowSettings,
) -> winit::window::WindowAttributes {
    let size = LogicalSize::new(settings.width, settings.height);
    let mut attributes = Window::default_attributes()
        .with_title(settings.title.clone())
        .with_inner_size(size)
        .with_min_inner_size(LogicalSize::new(settings.min_width, settings.min_height))
        .with_resizable(settings.resizable)
        .with_visible(true);

    if settings.centered {
        if let Some(monitor) = event_loop.primary_monitor() {
            let physical: PhysicalSize<u32> = size.to_physical(monitor.scale_factor());
            let position = centered_origin(monitor.position(), monitor.size(), physical);
            attributes = attributes.with_position(position);
        }
    }

    attributes
}

/// Top-left corner that centers `window` on a monitor
fn centered_origin(
    monitor_position: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let dx = (monitor_size.width as i64 - window.width as i64) / 2;
    let dy = (monitor_size.height as i64 - window.height as i64) / 2;
    PhysicalPosition::new(
        (monitor_position.x as i64 + dx.max(0)) as i32,
        (monitor_position.y as i64 + dy.max(0)) as i32,
    )
}

fn config_template(settings: &GlSettings) -> ConfigTemplateBuilder {
    ConfigTemplateBuilder::new()
        .with_depth_size(settings.depth_bits)
        .with_stencil_size(settings.stencil_bits)
        .with_single_buffering(!settings.double_buffer)
}

/// Prefer configs meeting the requested depth and stencil sizes, then fewer samples
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>, settings: &GlSettings) -> Config {
    let meets = |config: &Config| {
        config.depth_size() >= settings.depth_bits && config.stencil_size() >= settings.stencil_bits
    };

    configs
        .reduce(|best, config| {
            let better = match (meets(&config), meets(&best)) {
                (true, false) => true,
                (false, true) => false,
                _ => config.num_samples() < best.num_samples(),
            };
            if better {
                config
            } else {
                best
            }
        })
        .expect("glutin offers at least one config")
}

fn create_context(
    window: &Window,
    gl_config: &Config,
    request: GlRequest,
) -> Result<NotCurrentContext, GuiError> {
    let raw_window_handle = window.window_handle().ok().map(|handle| handle.as_raw());
    let display = gl_config.display();

    let requested = ContextAttributesBuilder::new()
        .with_profile(GlProfile::Core)
        .with_context_api(request.context_api())
        .build(raw_window_handle);

    log::info!("Requesting {}", request);
    match unsafe { display.create_context(gl_config, &requested) } {
        Ok(context) => Ok(context),
        Err(e) => {
            log::warn!("{} unavailable ({}), using the driver default", request, e);
            let fallback = ContextAttributesBuilder::new()
                .with_profile(GlProfile::Core)
                .build(raw_window_handle);
            Ok(unsafe { display.create_context(gl_config, &fallback)? })
        }
    }
}

fn load_functions(gl_config: &Config) -> Result<glow::Context, GuiError> {
    let display = gl_config.display();
    if display.get_proc_address(LOADER_CHECK_SYMBOL).is_null() {
        return Err(GuiError::GlLoader(format!(
            "{} not found",
            LOADER_CHECK_SYMBOL.to_string_lossy()
        )));
    }
    Ok(unsafe { glow::Context::from_loader_function_cstr(|symbol| display.get_proc_address(symbol)) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_origin() {
        let origin = centered_origin(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(1920, 1080),
            PhysicalSize::new(1280, 720),
        );
        assert_eq!(origin, PhysicalPosition::new(320, 180));
    }

    #[test]
    fn test_centered_origin_offset_monitor() {
        let origin = centered_origin(
            PhysicalPosition::new(1920, -200),
            PhysicalSize::new(2560, 1440),
            PhysicalSize::new(1280, 720),
        );
        assert_eq!(origin, PhysicalPosition::new(1920 + 640, -200 + 360));
    }

    #[test]
    fn test_centered_origin_window_larger_than_monitor() {
        let origin = centered_origin(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(1024, 600),
            PhysicalSize::new(2560, 1440),
        );
        assert_eq!(origin, PhysicalPosition::new(0, 0));
    }
}
