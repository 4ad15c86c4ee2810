//! Status icons for check rows.

use crate::checks::{CheckResult, Tone};

use super::theme::Theme;

/// Status kinds shown next to a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed but is only advisory.
    Warning,
    /// Check failed.
    Failed,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Failed => "✗",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

impl From<Tone> for StatusKind {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Ok => Self::Success,
            Tone::Warning => Self::Warning,
            Tone::Error => Self::Failed,
        }
    }
}

impl From<&CheckResult> for StatusKind {
    fn from(result: &CheckResult) -> Self {
        result.tone.into()
    }
}
