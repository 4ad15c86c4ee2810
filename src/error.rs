//! Error types for workshop-check.
//!
//! This module defines [`VerifyError`] and a [`Result`] alias.
//!
//! Check outcomes are never errors: every failure mode of a check (missing
//! binary, non-zero exit, timeout, unparseable output) becomes a failed
//! [`CheckResult`](crate::checks::CheckResult). `VerifyError` only covers the
//! plumbing around the checks, such as spawning processes and writing output.

use thiserror::Error;

/// Core error type for workshop-check plumbing.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A shell command could not be started or waited on.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for workshop-check operations.
pub type Result<T> = std::result::Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_spawn_displays_command_and_message() {
        let err = VerifyError::CommandSpawn {
            command: "node --version".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("node --version"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: VerifyError = io_err.into();
        assert!(matches!(err, VerifyError::Io(_)));
    }
}
