//! Sequential verifier that runs every phase into one report.

use std::io::Write;

use crate::config::VerifierConfig;
use crate::error::Result;
use crate::shell::CommandRunner;

use super::result::{Category, CheckReport, CheckResult};
use super::{auth, cloud_cli, dependencies, permissions, system};

/// Signature shared by every check phase.
pub type Phase = fn(&dyn CommandRunner, &VerifierConfig) -> Vec<CheckResult>;

/// The phase that fills each category.
pub fn phase_for(category: Category) -> Phase {
    match category {
        Category::System => system::check,
        Category::Python => dependencies::check,
        Category::CloudCli => cloud_cli::check,
        Category::Authentication => auth::check,
        Category::Permissions => permissions::check,
    }
}

/// Runs the checklist, one phase after another.
pub struct Verifier<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a VerifierConfig,
}

impl<'a> Verifier<'a> {
    /// Create a verifier over the given runner.
    pub fn new(runner: &'a dyn CommandRunner, config: &'a VerifierConfig) -> Self {
        Self { runner, config }
    }

    /// Run a single phase.
    pub fn run_phase(&self, category: Category) -> Vec<CheckResult> {
        let results = phase_for(category)(self.runner, self.config);
        let passed = results.iter().filter(|r| r.passed).count();
        tracing::info!(
            "{}: {}/{} checks passed",
            category.key(),
            passed,
            results.len()
        );
        results
    }

    /// Run every phase in order, writing a banner to `out` before each.
    pub fn run_all(&self, out: &mut dyn Write) -> Result<CheckReport> {
        writeln!(out, "Starting Workshop Setup Verification...")?;
        writeln!(out)?;

        let mut report = CheckReport::new();
        for category in Category::ALL {
            writeln!(out, "{}", category.banner())?;
            report.extend(category, self.run_phase(category));
        }
        Ok(report)
    }
}
