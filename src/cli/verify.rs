//! The verification run: checks, report, fix commands.

use std::io::Write;

use crate::checks::{CheckReport, Verifier};
use crate::config::VerifierConfig;
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::{render_fixes, render_report, Theme};

/// Run every check and write the full report to `out`.
///
/// Check failures only show up in the text; the returned report is for
/// callers that want the structured results.
pub fn run(
    runner: &dyn CommandRunner,
    config: &VerifierConfig,
    theme: &Theme,
    out: &mut dyn Write,
) -> Result<CheckReport> {
    let report = Verifier::new(runner, config).run_all(out)?;

    let (passed, total) = report.totals();
    tracing::info!("verification finished: {}/{} checks passed", passed, total);

    write!(out, "{}", render_report(&report, theme))?;
    write!(out, "{}", render_fixes(&report, theme))?;
    out.flush()?;

    Ok(report)
}
