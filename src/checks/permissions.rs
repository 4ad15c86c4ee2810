//! Service permissions: can the authenticated identity reach the AI services.
//!
//! A failed listing is reported the same way whether the CLI is missing,
//! logged out, or forbidden.

use crate::config::VerifierConfig;
use crate::shell::CommandRunner;

use super::result::CheckResult;

/// (name, command, success message, failure message), in report order.
pub const PROBES: &[(&str, &str, &str, &str)] = &[
    (
        "AWS Bedrock Access",
        "aws bedrock list-foundation-models --region us-east-1",
        "Can list models",
        "No access or not enabled",
    ),
    (
        "GCP Vertex AI Access",
        "gcloud ai models list --region=us-central1 --limit=1",
        "Can list models",
        "No access or API not enabled",
    ),
    (
        "Azure OpenAI Access",
        "az cognitiveservices account list --query '[?kind==`OpenAI`]'",
        "Can list OpenAI resources",
        "No access or not approved",
    ),
];

/// Run the permission checks.
pub fn check(runner: &dyn CommandRunner, _config: &VerifierConfig) -> Vec<CheckResult> {
    PROBES
        .iter()
        .map(|&(name, command, ok, fail)| {
            CheckResult::from_bool(name, runner.run(command).success, ok, fail)
        })
        .collect()
}
