//! Run settings for a verification pass.
//!
//! There is no configuration file: the checklist is fixed. The only knobs
//! are the interpreter used for the Python checks (from `--python` or
//! `WORKSHOP_CHECK_PYTHON`) and, for tests, the per-command deadline.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use workshop_check::config::VerifierConfig;
//!
//! let config = VerifierConfig::default();
//! assert_eq!(config.timeout, Duration::from_secs(30));
//! assert_eq!(config.python, "python3");
//! assert_eq!(config.min_python, (3, 9));
//! ```

use std::time::Duration;

use crate::shell::DEFAULT_TIMEOUT;

/// Interpreter used when none is given.
pub const DEFAULT_PYTHON: &str = "python3";

/// Oldest Python the workshop material supports.
pub const MIN_PYTHON: (u32, u32) = (3, 9);

/// Settings shared by every check phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Deadline for each external command.
    pub timeout: Duration,

    /// Python interpreter to version-check and probe libraries with.
    pub python: String,

    /// Minimum acceptable Python version as (major, minor).
    pub min_python: (u32, u32),
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            python: DEFAULT_PYTHON.to_string(),
            min_python: MIN_PYTHON,
        }
    }
}

impl VerifierConfig {
    /// Use a different Python interpreter.
    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    /// Use a different per-command deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Human-readable minimum version, e.g. `3.9`.
    pub fn min_python_label(&self) -> String {
        format!("{}.{}", self.min_python.0, self.min_python.1)
    }
}
