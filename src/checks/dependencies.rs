//! Python library dependencies.
//!
//! Each package is probed by importing it in the configured interpreter.
//! Only importability is checked, not versions.

use crate::config::VerifierConfig;
use crate::shell::{quote_arg, CommandRunner};

use super::result::CheckResult;

/// Packages the workshop notebooks import, by distribution name.
pub const REQUIRED_PACKAGES: &[&str] = &[
    "boto3",
    "google-cloud-aiplatform",
    "azure-functions",
    "requests",
    "openai",
    "azure-identity",
];

/// Module name tried for a package: hyphens become underscores.
pub fn module_name(package: &str) -> String {
    package.replace('-', "_")
}

/// Command that succeeds iff `package` can be imported by `python`.
pub fn import_command(python: &str, package: &str) -> String {
    format!("{} -c \"import {}\"", quote_arg(python), module_name(package))
}

/// Run the dependency checks.
pub fn check(runner: &dyn CommandRunner, config: &VerifierConfig) -> Vec<CheckResult> {
    REQUIRED_PACKAGES
        .iter()
        .map(|&package| {
            let outcome = runner.run(&import_command(&config.python, package));
            CheckResult::from_bool(package, outcome.success, "Installed", "Not installed")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{CommandOutcome, ScriptedRunner};

    #[test]
    fn module_name_translates_hyphens() {
        assert_eq!(module_name("google-cloud-aiplatform"), "google_cloud_aiplatform");
        assert_eq!(module_name("boto3"), "boto3");
    }

    #[test]
    fn import_command_uses_interpreter() {
        assert_eq!(
            import_command("python3", "azure-identity"),
            "python3 -c \"import azure_identity\""
        );
    }

    #[cfg(unix)]
    #[test]
    fn import_command_quotes_interpreter_with_spaces() {
        assert_eq!(
            import_command("/opt/my tools/python", "boto3"),
            "'/opt/my tools/python' -c \"import boto3\""
        );
    }

    #[test]
    fn one_result_per_package_in_order() {
        let runner = ScriptedRunner::new().otherwise(CommandOutcome::success(""));
        let results = check(&runner, &VerifierConfig::default());

        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, REQUIRED_PACKAGES.to_vec());
        assert!(results.iter().all(|r| r.passed && r.message == "Installed"));
    }

    #[test]
    fn failed_import_is_not_installed() {
        let runner = ScriptedRunner::new()
            .otherwise(CommandOutcome::success(""))
            .fail(
                "python3 -c \"import openai\"",
                "ModuleNotFoundError: No module named 'openai'",
            );
        let results = check(&runner, &VerifierConfig::default());

        let openai = results.iter().find(|r| r.name == "openai").unwrap();
        assert!(!openai.passed);
        assert_eq!(openai.message, "Not installed");
        assert_eq!(results.iter().filter(|r| r.passed).count(), 5);
    }
}
