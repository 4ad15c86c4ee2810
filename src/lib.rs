//! workshop-check - Verify a workstation is ready for a hands-on cloud workshop.
//!
//! The checker runs a fixed checklist of external commands (runtime versions,
//! CLI tools, cloud logins, service access), prints a pass/fail report, and
//! suggests commands to fix what is missing. It never installs anything.
//!
//! # Modules
//!
//! - [`checks`] - The five check phases and their result types
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run settings
//! - [`error`] - Error types and result aliases
//! - [`fixes`] - Remediation commands for failed checks
//! - [`shell`] - Shell command execution with a deadline
//! - [`ui`] - Report rendering and styling
//!
//! # Example
//!
//! ```
//! use workshop_check::checks::Verifier;
//! use workshop_check::config::VerifierConfig;
//! use workshop_check::shell::ScriptedRunner;
//! use workshop_check::ui::{render_report, Theme};
//!
//! let runner = ScriptedRunner::new().succeed("git --version", "git version 2.43.0");
//! let config = VerifierConfig::default();
//! let report = Verifier::new(&runner, &config).run_all(&mut std::io::sink()).unwrap();
//!
//! let text = render_report(&report, &Theme::plain());
//! assert!(text.contains("SUMMARY: 1/21 checks passed"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixes;
pub mod shell;
pub mod ui;

pub use error::{Result, VerifyError};
