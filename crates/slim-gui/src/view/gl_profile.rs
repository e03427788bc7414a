//! OpenGL version requested per target platform.
//!
//! macOS core contexts are always forward-compatible, so only the version
//! varies here. The GUI painter picks its shader dialect from the live
//! context.

use glutin::context::{ContextApi, Version};

/// Platform families with distinct GL requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPlatform {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl TargetPlatform {
    /// The platform this binary was compiled for
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            TargetPlatform::MacOs
        } else if cfg!(target_os = "linux") {
            TargetPlatform::Linux
        } else if cfg!(target_os = "windows") {
            TargetPlatform::Windows
        } else {
            TargetPlatform::Other
        }
    }
}

/// A core-profile OpenGL context request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlRequest {
    pub major: u8,
    pub minor: u8,
}

impl GlRequest {
    pub const fn for_target(target: TargetPlatform) -> Self {
        match target {
            TargetPlatform::MacOs => Self { major: 4, minor: 1 },
            TargetPlatform::Windows => Self { major: 3, minor: 2 },
            TargetPlatform::Linux | TargetPlatform::Other => Self { major: 4, minor: 3 },
        }
    }

    /// Request for the platform this binary runs on
    pub const fn native() -> Self {
        Self::for_target(TargetPlatform::current())
    }

    pub fn context_api(&self) -> ContextApi {
        ContextApi::OpenGl(Some(Version::new(self.major, self.minor)))
    }
}

impl std::fmt::Display for GlRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OpenGL {}.{} core", self.major, self.minor)
    }
}
