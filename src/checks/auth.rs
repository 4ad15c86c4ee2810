//! Cloud authentication: who is each CLI logged in as.

use serde::Deserialize;

use crate::config::VerifierConfig;
use crate::shell::CommandRunner;

use super::result::CheckResult;

pub const AWS_IDENTITY: &str = "aws sts get-caller-identity";
pub const GCP_IDENTITY: &str = "gcloud auth list --filter=status:ACTIVE --format='value(account)'";
pub const AZURE_IDENTITY: &str = "az account show --query 'user.name' -o tsv";

/// The part of `aws sts get-caller-identity` we care about.
#[derive(Debug, Deserialize)]
struct CallerIdentity {
    #[serde(rename = "Arn")]
    arn: Option<String>,
}

/// Run the authentication checks.
pub fn check(runner: &dyn CommandRunner, _config: &VerifierConfig) -> Vec<CheckResult> {
    vec![
        check_aws(runner),
        check_identity(runner, "Google Cloud", GCP_IDENTITY, "gcloud auth login"),
        check_identity(runner, "Azure", AZURE_IDENTITY, "az login"),
    ]
}

fn check_aws(runner: &dyn CommandRunner) -> CheckResult {
    let outcome = runner.run(AWS_IDENTITY);
    if !outcome.success {
        return CheckResult::fail("AWS", "Not authenticated - run 'aws configure'");
    }

    match serde_json::from_str::<CallerIdentity>(&outcome.output) {
        Ok(identity) => {
            let arn = identity.arn.as_deref().unwrap_or("Unknown");
            CheckResult::pass("AWS", format!("Authenticated as {}", arn))
        }
        Err(e) => {
            tracing::debug!("unparseable caller identity: {}", e);
            CheckResult::fail("AWS", "Authentication response invalid")
        }
    }
}

/// Pass iff the command succeeds and prints a non-empty identity.
fn check_identity(
    runner: &dyn CommandRunner,
    name: &str,
    command: &str,
    login_hint: &str,
) -> CheckResult {
    let outcome = runner.run(command);
    let identity = outcome.trimmed();
    if outcome.success && !identity.is_empty() {
        CheckResult::pass(name, format!("Authenticated as {}", identity))
    } else {
        CheckResult::fail(name, format!("Not authenticated - run '{}'", login_hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;

    const CALLER_JSON: &str = r#"{
    "UserId": "AIDAEXAMPLE",
    "Account": "123456789012",
    "Arn": "arn:aws:iam::123456789012:user/workshop"
}
"#;

    fn authenticated() -> ScriptedRunner {
        ScriptedRunner::new()
            .succeed(AWS_IDENTITY, CALLER_JSON)
            .succeed(GCP_IDENTITY, "dev@example.com\n")
            .succeed(AZURE_IDENTITY, "dev@example.onmicrosoft.com\n")
    }

    #[test]
    fn all_providers_authenticated() {
        let results = check(&authenticated(), &VerifierConfig::default());

        assert!(results.iter().all(|r| r.passed));
        assert_eq!(
            results[0].message,
            "Authenticated as arn:aws:iam::123456789012:user/workshop"
        );
        assert_eq!(results[1].message, "Authenticated as dev@example.com");
        assert_eq!(
            results[2].message,
            "Authenticated as dev@example.onmicrosoft.com"
        );
    }

    #[test]
    fn aws_non_json_output_fails_despite_exit_zero() {
        let runner = authenticated().succeed(AWS_IDENTITY, "You are logged in!");
        let results = check(&runner, &VerifierConfig::default());

        assert_eq!(results[0].name, "AWS");
        assert!(!results[0].passed);
        assert_eq!(results[0].message, "Authentication response invalid");
    }

    #[test]
    fn aws_json_without_arn_reports_unknown() {
        let runner = authenticated().succeed(AWS_IDENTITY, r#"{"Account": "1"}"#);
        let results = check(&runner, &VerifierConfig::default());

        assert!(results[0].passed);
        assert_eq!(results[0].message, "Authenticated as Unknown");
    }

    #[test]
    fn aws_failure_suggests_configure() {
        let runner = authenticated().fail(AWS_IDENTITY, "Unable to locate credentials");
        let results = check(&runner, &VerifierConfig::default());

        assert!(!results[0].passed);
        assert_eq!(results[0].message, "Not authenticated - run 'aws configure'");
    }

    #[test]
    fn empty_identity_counts_as_unauthenticated() {
        let runner = authenticated().succeed(GCP_IDENTITY, "  \n");
        let results = check(&runner, &VerifierConfig::default());

        assert!(!results[1].passed);
        assert_eq!(results[1].message, "Not authenticated - run 'gcloud auth login'");
    }

    #[test]
    fn azure_failure_suggests_login() {
        let runner = authenticated().fail(AZURE_IDENTITY, "Please run 'az login'");
        let results = check(&runner, &VerifierConfig::default());

        assert!(!results[2].passed);
        assert_eq!(results[2].message, "Not authenticated - run 'az login'");
    }
}
