//! Workstation prerequisite checks.
//!
//! Five phases run one after another, each producing a list of
//! [`CheckResult`]s for its [`Category`]:
//!
//! - [`system`] - Python version, Node.js, Git, Docker
//! - [`dependencies`] - Python libraries importable by the interpreter
//! - [`cloud_cli`] - AWS, Google Cloud and Azure CLIs, CDK, Terraform
//! - [`auth`] - Which identity each cloud CLI is logged in as
//! - [`permissions`] - Access to the hosted model services
//!
//! [`Verifier`] threads them into a single [`CheckReport`].
//!
//! # Example
//!
//! ```
//! use workshop_check::checks::{Category, Verifier};
//! use workshop_check::config::VerifierConfig;
//! use workshop_check::shell::ScriptedRunner;
//!
//! // Nothing installed: every command fails.
//! let runner = ScriptedRunner::new();
//! let config = VerifierConfig::default();
//! let report = Verifier::new(&runner, &config).run_all(&mut std::io::sink()).unwrap();
//!
//! assert_eq!(report.category(Category::System).len(), 4);
//! assert_eq!(report.totals().0, 0);
//! ```

pub mod auth;
pub mod cloud_cli;
pub mod dependencies;
pub mod permissions;
pub mod result;
pub mod system;
pub mod verifier;

pub use result::{Category, CheckReport, CheckResult, Tone};
pub use verifier::{phase_for, Phase, Verifier};
