//! Shell State
//!
//! The frame loop's state machine: stored window dimensions and whether the
//! loop is still running. Events are applied here; the caller carries out
//! the returned effect on the GL side.

/// Window dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert physical pixels to logical points, truncating
    pub fn to_logical(self, scale_factor: f64) -> WindowSize {
        if scale_factor <= 0.0 {
            return self;
        }
        WindowSize {
            width: (self.width as f64 / scale_factor) as u32,
            height: (self.height as f64 / scale_factor) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Terminating,
}

/// Platform events with a side effect on the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// The window was asked to close
    Quit,
    /// The window's inner size changed (physical pixels)
    Resized(WindowSize),
    /// Escape was pressed
    EscapePressed,
}

/// What the caller must do after an event was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventEffect {
    /// Nothing to do
    None,
    /// Resize the GL surface and viewport to this size
    Viewport(WindowSize),
    /// Stop the event loop; no further frame may be drawn
    Exit,
}

/// Frame loop state: window dimensions and run state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    /// Current window dimensions (physical pixels)
    pub window: WindowSize,
    run_state: RunState,
    frame_count: u64,
}

impl ShellState {
    pub fn new(window: WindowSize) -> Self {
        Self {
            window,
            run_state: RunState::Running,
            frame_count: 0,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Number of frames drawn so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Apply one platform event
    pub fn apply(&mut self, event: ShellEvent) -> EventEffect {
        match event {
            ShellEvent::Quit | ShellEvent::EscapePressed => {
                self.run_state = RunState::Terminating;
                EventEffect::Exit
            }
            ShellEvent::Resized(size) => {
                self.window = size;
                if self.is_running() {
                    EventEffect::Viewport(size)
                } else {
                    EventEffect::None
                }
            }
        }
    }

    /// Begin a frame; returns false once the loop is terminating
    pub fn begin_frame(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.frame_count = self.frame_count.saturating_add(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_running() {
        let state = ShellState::new(WindowSize::new(1280, 720));
        assert_eq!(state.run_state(), RunState::Running);
        assert_eq!(state.frame_count(), 0);
    }

    #[test]
    fn test_last_resize_wins() {
        let mut state = ShellState::new(WindowSize::new(1280, 720));
        let sizes = [(800, 600), (1920, 1080), (640, 480)];
        for (w, h) in sizes {
            let effect = state.apply(ShellEvent::Resized(WindowSize::new(w, h)));
            assert_eq!(effect, EventEffect::Viewport(WindowSize::new(w, h)));
        }
        assert_eq!(state.window, WindowSize::new(640, 480));
    }

    #[test]
    fn test_quit_terminates() {
        let mut state = ShellState::new(WindowSize::new(1280, 720));
        assert_eq!(state.apply(ShellEvent::Quit), EventEffect::Exit);
        assert_eq!(state.run_state(), RunState::Terminating);
        assert!(!state.begin_frame());
    }

    #[test]
    fn test_escape_terminates() {
        let mut state = ShellState::new(WindowSize::new(1280, 720));
        assert!(state.begin_frame());
        assert_eq!(state.apply(ShellEvent::EscapePressed), EventEffect::Exit);
        assert!(!state.begin_frame());
        assert_eq!(state.frame_count(), 1);
    }

    #[test]
    fn test_resize_after_termination_has_no_viewport_effect() {
        let mut state = ShellState::new(WindowSize::new(1280, 720));
        state.apply(ShellEvent::Quit);
        let effect = state.apply(ShellEvent::Resized(WindowSize::new(10, 10)));
        assert_eq!(effect, EventEffect::None);
        assert_eq!(state.window, WindowSize::new(10, 10));
    }

    #[test]
    fn test_to_logical() {
        let size = WindowSize::new(2560, 1440);
        assert_eq!(size.to_logical(2.0), WindowSize::new(1280, 720));
        assert_eq!(size.to_logical(1.0), size);
        assert_eq!(WindowSize::new(1001, 3).to_logical(1.5), WindowSize::new(667, 2));
    }
}
