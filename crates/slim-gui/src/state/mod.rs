//! State Management
//!
//! Frame-loop state owned by the application:
//! - `ShellState` - window dimensions and the running/terminating state
//! - `ShellEvent` - the platform events the loop reacts to

mod shell_state;

pub use shell_state::{EventEffect, RunState, ShellEvent, ShellState, WindowSize};
