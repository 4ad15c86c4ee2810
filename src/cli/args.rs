//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Running without arguments
//! performs every check.

use clap::Parser;

use crate::config::{VerifierConfig, DEFAULT_PYTHON};

/// Verify this workstation is ready for the cloud AI workshop.
#[derive(Debug, Parser)]
#[command(name = "workshop-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Python interpreter to version-check and import libraries with
    #[arg(long, env = "WORKSHOP_CHECK_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Build run settings from the parsed arguments.
    pub fn config(&self) -> VerifierConfig {
        VerifierConfig::default().with_python(self.python.clone())
    }
}
