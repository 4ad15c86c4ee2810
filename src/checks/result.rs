//! Check result types.
//!
//! Each check produces a [`CheckResult`]; the results of a run are collected
//! per [`Category`] in a [`CheckReport`].

use std::collections::BTreeMap;

/// A named grouping of related checks.
///
/// Variants are declared in report order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    System,
    Python,
    CloudCli,
    Authentication,
    Permissions,
}

impl Category {
    /// Every category, in report order.
    pub const ALL: [Category; 5] = [
        Category::System,
        Category::Python,
        Category::CloudCli,
        Category::Authentication,
        Category::Permissions,
    ];

    /// Snake-case key, as used by the fix-command table.
    pub fn key(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Python => "python",
            Self::CloudCli => "cloud_cli",
            Self::Authentication => "authentication",
            Self::Permissions => "permissions",
        }
    }

    /// Title shown as the section header in the report.
    pub fn title(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Python => "Python",
            Self::CloudCli => "Cloud Cli",
            Self::Authentication => "Authentication",
            Self::Permissions => "Permissions",
        }
    }

    /// Banner printed when the phase for this category starts.
    pub fn banner(self) -> &'static str {
        match self {
            Self::System => "Checking System Requirements...",
            Self::Python => "Checking Python Dependencies...",
            Self::CloudCli => "Checking Cloud CLI Tools...",
            Self::Authentication => "Checking Cloud Authentication...",
            Self::Permissions => "Checking Service Permissions...",
        }
    }
}

/// How a result should be presented. Has no bearing on pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Warning,
    Error,
}

/// The outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Check name, unique within its category.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Detail shown next to the name (version, identity, or what is missing).
    pub message: String,
    /// Presentation tone.
    pub tone: Tone,
}

impl CheckResult {
    /// A passing result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
            tone: Tone::Ok,
        }
    }

    /// A failing result.
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: message.into(),
            tone: Tone::Error,
        }
    }

    /// A failing result presented as a warning.
    ///
    /// Still counts as a failure in the summary.
    pub fn warn(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tone: Tone::Warning,
            ..Self::fail(name, message)
        }
    }

    /// Pass with `ok_message` or fail with `fail_message` depending on `passed`.
    pub fn from_bool(
        name: impl Into<String>,
        passed: bool,
        ok_message: impl Into<String>,
        fail_message: impl Into<String>,
    ) -> Self {
        if passed {
            Self::pass(name, ok_message)
        } else {
            Self::fail(name, fail_message)
        }
    }
}

/// All results of one run, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    results: BTreeMap<Category, Vec<CheckResult>>,
}

impl CheckReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append results to a category, keeping their order.
    pub fn extend(&mut self, category: Category, results: impl IntoIterator<Item = CheckResult>) {
        self.results.entry(category).or_default().extend(results);
    }

    /// Results for one category (empty if none ran).
    pub fn category(&self, category: Category) -> &[CheckResult] {
        self.results
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Non-empty categories with their results, in report order.
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[CheckResult])> {
        self.results
            .iter()
            .filter(|(_, checks)| !checks.is_empty())
            .map(|(category, checks)| (*category, checks.as_slice()))
    }

    /// Find a result by category and name.
    pub fn get(&self, category: Category, name: &str) -> Option<&CheckResult> {
        self.category(category).iter().find(|c| c.name == name)
    }

    /// (passed, total) across every category.
    pub fn totals(&self) -> (usize, usize) {
        self.results
            .values()
            .flatten()
            .fold((0, 0), |(passed, total), check| {
                (passed + usize::from(check.passed), total + 1)
            })
    }

    /// Every failed check with its category, in report order.
    pub fn failed(&self) -> Vec<(Category, &CheckResult)> {
        self.sections()
            .flat_map(|(category, checks)| {
                checks
                    .iter()
                    .filter(|c| !c.passed)
                    .map(move |c| (category, c))
            })
            .collect()
    }

    /// Whether no check has been recorded.
    pub fn is_empty(&self) -> bool {
        self.sections().next().is_none()
    }
}
