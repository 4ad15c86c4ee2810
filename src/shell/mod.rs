//! Shell command execution.
//!
//! - [`command`] - The [`CommandRunner`] seam and the real [`ShellRunner`]
//! - [`platform`] - Shell and CI detection
//! - [`scripted`] - [`ScriptedRunner`], canned outcomes for tests

pub mod command;
pub mod platform;
pub mod scripted;

pub use command::{CommandOutcome, CommandRunner, ShellRunner, DEFAULT_TIMEOUT, TIMEOUT_MESSAGE};
pub use platform::{detect_shell, is_ci, quote_arg, shell_flag};
pub use scripted::ScriptedRunner;
