//! Error types for the GUI shell

use slim_settings::SettingError;
use thiserror::Error;
use winit::error::{EventLoopError, OsError};

/// Errors that stop the shell
#[derive(Error, Debug)]
pub enum GuiError {
    /// Settings failed validation
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingError),

    /// The platform event loop (video subsystem) could not be created
    #[error("Video subsystem unavailable: {0}")]
    VideoInit(EventLoopError),

    /// No window or GL config could be created
    #[error("Failed to create window: {0}")]
    Display(String),

    /// The window was created but is unusable
    #[error("Failed to create window: {0}")]
    Window(#[from] OsError),

    /// The window handle needed by the GL surface was unavailable
    #[error("Window handle unavailable: {0}")]
    WindowHandle(#[from] raw_window_handle::HandleError),

    /// GL context or surface creation failed
    #[error("OpenGL context error: {0}")]
    GlContext(#[from] glutin::error::Error),

    /// GL function pointers could not be loaded
    #[error("Couldn't load OpenGL functions: {0}")]
    GlLoader(String),

    /// The GUI renderer failed to initialize
    #[error("Couldn't initialize GUI renderer: {0}")]
    Painter(String),

    /// Presenting a frame failed
    #[error("Failed to swap buffers: {0}")]
    Present(glutin::error::Error),

    /// The event loop terminated abnormally
    #[error("Event loop error: {0}")]
    EventLoop(EventLoopError),
}

impl GuiError {
    /// Whether this error happened while bringing the shell up
    pub fn is_bootstrap(&self) -> bool {
        !matches!(self, GuiError::Present(_) | GuiError::EventLoop(_))
    }

    /// Process exit code to report for this error
    ///
    /// Bootstrap failures exit with -1; faults in a running shell exit with 1.
    pub fn exit_code(&self) -> i32 {
        if self.is_bootstrap() {
            -1
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_errors_exit_minus_one() {
        let errors = [
            GuiError::VideoInit(EventLoopError::RecreationAttempt),
            GuiError::Display("no config".to_string()),
            GuiError::GlLoader("glClear".to_string()),
            GuiError::Painter("shader".to_string()),
            GuiError::Settings(SettingError::InvalidValue {
                name: "font_size",
                reason: "0".to_string(),
            }),
        ];
        for err in errors {
            assert!(err.is_bootstrap(), "{err}");
            assert_eq!(err.exit_code(), -1);
        }
    }

    #[test]
    fn test_runtime_errors_exit_one() {
        let err = GuiError::EventLoop(EventLoopError::ExitFailure(3));
        assert!(!err.is_bootstrap());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_display_message() {
        let err = GuiError::GlLoader("glClear missing".to_string());
        assert_eq!(
            err.to_string(),
            "Couldn't load OpenGL functions: glClear missing"
        );
    }
}
