//! Report and fix-command rendering.
//!
//! Both renderers are pure: they turn a [`CheckReport`] into text and leave
//! printing to the caller.

use std::fmt::Write;

use crate::checks::CheckReport;
use crate::fixes::fix_commands;

use super::icons::StatusKind;
use super::theme::Theme;

const WIDE_RULE: usize = 60;
const SECTION_RULE: usize = 40;
const FIX_RULE: usize = 30;
const NAME_WIDTH: usize = 20;

/// Overall readiness derived from the pass ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every check passed.
    Ready,
    /// At least 80% passed.
    MostlyReady,
    /// Fewer than 80% passed.
    Incomplete,
}

impl Verdict {
    /// Classify `passed` out of `total` checks.
    ///
    /// ```
    /// use workshop_check::ui::Verdict;
    ///
    /// assert_eq!(Verdict::from_counts(10, 10), Verdict::Ready);
    /// assert_eq!(Verdict::from_counts(8, 10), Verdict::MostlyReady);
    /// assert_eq!(Verdict::from_counts(7, 10), Verdict::Incomplete);
    /// ```
    pub fn from_counts(passed: usize, total: usize) -> Self {
        if passed == total {
            Self::Ready
        } else if passed * 5 >= total * 4 {
            Self::MostlyReady
        } else {
            Self::Incomplete
        }
    }

    /// Message shown under the summary line.
    pub fn message(self) -> &'static str {
        match self {
            Self::Ready => "Excellent! You're ready for the workshop!",
            Self::MostlyReady => "Most requirements met. Check failed items above.",
            Self::Incomplete => {
                "Several requirements missing. Please install missing components."
            }
        }
    }

    /// The verdict line, coloured by tier.
    pub fn render(self, theme: &Theme) -> String {
        match self {
            Self::Ready => theme.format_success(self.message()),
            Self::MostlyReady => theme.format_warning(self.message()),
            Self::Incomplete => theme.format_error(self.message()),
        }
    }
}

/// Render the results table, summary line and verdict.
pub fn render_report(report: &CheckReport, theme: &Theme) -> String {
    let mut out = String::new();
    let wide = theme.format_rule('=', WIDE_RULE);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", wide);
    let _ = writeln!(
        out,
        "{}",
        theme.format_header("WORKSHOP SETUP VERIFICATION RESULTS")
    );
    let _ = writeln!(out, "{}", wide);

    for (category, checks) in report.sections() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", theme.format_header(&format!("{}:", category.title())));
        let _ = writeln!(out, "{}", theme.format_rule('-', SECTION_RULE));

        for check in checks {
            let name = format!("{:<width$}", check.name, width = NAME_WIDTH);
            let _ = writeln!(
                out,
                "  {} {}",
                theme.key.apply_to(name),
                StatusKind::from(check).format(theme, &check.message)
            );
        }
    }

    let (passed, total) = report.totals();
    let verdict = Verdict::from_counts(passed, total);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", wide);
    let _ = writeln!(
        out,
        "SUMMARY: {} checks passed",
        theme.highlight.apply_to(format!("{}/{}", passed, total))
    );
    let _ = writeln!(out, "{}", verdict.render(theme));
    let _ = writeln!(out, "{}", wide);

    out
}

/// Render suggested commands for failed checks.
///
/// Failed checks without a table entry are left out silently.
pub fn render_fixes(report: &CheckReport, theme: &Theme) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", theme.format_header("QUICK FIX COMMANDS:"));
    let _ = writeln!(out, "{}", theme.format_rule('-', FIX_RULE));

    if report.failed().is_empty() {
        let _ = writeln!(out, "{}", theme.format_success("No fixes needed!"));
        return out;
    }

    for (name, command) in fix_commands(report) {
        let _ = writeln!(out, "{}: {}", name, theme.command.apply_to(command));
    }

    out
}
