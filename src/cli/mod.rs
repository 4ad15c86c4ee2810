//! Command-line interface for workshop-check.
//!
//! - [`args`] - Argument definitions using clap's derive macros
//! - [`verify`] - The verification run wired to a writer

pub mod args;
pub mod verify;

pub use args::Cli;
