//! Cloud and infrastructure CLI tools.

use crate::config::VerifierConfig;
use crate::shell::{CommandOutcome, CommandRunner};

use super::result::CheckResult;

/// A CLI probed with `<binary> --version`.
#[derive(Debug, Clone, Copy)]
pub struct CliTool {
    /// Display name, also the fix-table key.
    pub name: &'static str,
    /// Binary invoked.
    pub binary: &'static str,
    /// Optional tools fail with a warning tone. They still count as failures.
    pub optional: bool,
    show: ShowVersion,
}

#[derive(Debug, Clone, Copy)]
enum ShowVersion {
    /// Nth whitespace-separated token of the output.
    Token(usize),
    /// Whole trimmed output.
    Trimmed,
    /// Just say "Installed".
    Installed,
}

/// The tools checked, in report order.
pub const TOOLS: &[CliTool] = &[
    CliTool {
        name: "AWS CLI",
        binary: "aws",
        optional: false,
        show: ShowVersion::Token(0),
    },
    CliTool {
        name: "Google Cloud CLI",
        binary: "gcloud",
        optional: false,
        show: ShowVersion::Installed,
    },
    CliTool {
        name: "Azure CLI",
        binary: "az",
        optional: false,
        show: ShowVersion::Installed,
    },
    CliTool {
        name: "AWS CDK",
        binary: "cdk",
        optional: true,
        show: ShowVersion::Trimmed,
    },
    CliTool {
        name: "Terraform",
        binary: "terraform",
        optional: true,
        show: ShowVersion::Token(1),
    },
];

impl CliTool {
    fn success_message(&self, outcome: &CommandOutcome) -> String {
        let shown = match self.show {
            ShowVersion::Token(n) => outcome.output.split_whitespace().nth(n),
            ShowVersion::Trimmed => Some(outcome.trimmed()).filter(|s| !s.is_empty()),
            ShowVersion::Installed => None,
        };
        shown.unwrap_or("Installed").to_string()
    }
}

/// Run the cloud CLI checks.
pub fn check(runner: &dyn CommandRunner, _config: &VerifierConfig) -> Vec<CheckResult> {
    TOOLS
        .iter()
        .map(|tool| {
            let outcome = runner.run(&format!("{} --version", tool.binary));
            if outcome.success {
                CheckResult::pass(tool.name, tool.success_message(&outcome))
            } else if tool.optional {
                CheckResult::warn(tool.name, "Optional - not installed")
            } else {
                CheckResult::fail(tool.name, "Not installed")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::result::Tone;
    use crate::shell::ScriptedRunner;

    fn all_present() -> ScriptedRunner {
        ScriptedRunner::new()
            .succeed(
                "aws --version",
                "aws-cli/2.15.30 Python/3.11.8 Linux/6.5.0 exe/x86_64.ubuntu.22\n",
            )
            .succeed("gcloud --version", "Google Cloud SDK 467.0.0\n")
            .succeed("az --version", "azure-cli 2.58.0\n")
            .succeed("cdk --version", "2.133.0 (build dcc1e75)\n")
            .succeed("terraform --version", "Terraform v1.7.5\non linux_amd64\n")
    }

    #[test]
    fn versions_are_extracted_per_tool() {
        let results = check(&all_present(), &VerifierConfig::default());

        let messages: Vec<_> = results.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "aws-cli/2.15.30",
                "Installed",
                "Installed",
                "2.133.0 (build dcc1e75)",
                "v1.7.5",
            ]
        );
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn missing_required_tool_is_an_error() {
        let runner = all_present().fail("az --version", "az: not found");
        let results = check(&runner, &VerifierConfig::default());

        let az = &results[2];
        assert!(!az.passed);
        assert_eq!(az.message, "Not installed");
        assert_eq!(az.tone, Tone::Error);
    }

    #[test]
    fn optional_tools_warn_but_still_count_as_failed() {
        let runner = all_present()
            .fail("cdk --version", "")
            .fail("terraform --version", "");
        let results = check(&runner, &VerifierConfig::default());

        for r in &results[3..] {
            assert!(!r.passed, "{} should count as failed", r.name);
            assert_eq!(r.tone, Tone::Warning);
            assert_eq!(r.message, "Optional - not installed");
        }
        assert_eq!(results.iter().filter(|r| r.passed).count(), 3);
    }

    #[test]
    fn short_output_falls_back_to_installed() {
        let runner = all_present().succeed("terraform --version", "Terraform");
        let results = check(&runner, &VerifierConfig::default());
        assert_eq!(results[4].message, "Installed");
    }
}
