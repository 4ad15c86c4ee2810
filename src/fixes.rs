//! Remediation commands for failed checks.
//!
//! A static table maps (category, check name) to a shell command the user
//! can paste. The table has no entries for service permissions or for the
//! Python version check; failures there get no suggestion.

use crate::checks::{Category, CheckReport};

/// Look up the suggested command for a failed check.
pub fn fix_command(category: Category, name: &str) -> Option<&'static str> {
    let command = match (category, name) {
        (Category::Python, "boto3") => "pip install boto3",
        (Category::Python, "google-cloud-aiplatform") => "pip install google-cloud-aiplatform",
        (Category::Python, "azure-functions") => "pip install azure-functions",
        (Category::Python, "requests") => "pip install requests",
        (Category::Python, "openai") => "pip install openai",
        (Category::Python, "azure-identity") => "pip install azure-identity",

        (Category::System, "Node.js") => {
            "curl -fsSL https://deb.nodesource.com/setup_18.x | sudo -E bash - && sudo apt install -y nodejs"
        }
        (Category::System, "Git") => "sudo apt install -y git",
        (Category::System, "Docker") => {
            "curl -fsSL https://get.docker.com -o get-docker.sh && sudo sh get-docker.sh"
        }

        (Category::CloudCli, "AWS CLI") => {
            "curl 'https://awscli.amazonaws.com/awscli-exe-linux-x86_64.zip' -o 'awscliv2.zip' && unzip awscliv2.zip && sudo ./aws/install"
        }
        (Category::CloudCli, "Google Cloud CLI") => {
            "curl https://sdk.cloud.google.com | bash && exec -l $SHELL"
        }
        (Category::CloudCli, "Azure CLI") => "curl -sL https://aka.ms/InstallAzureCLIDeb | sudo bash",
        (Category::CloudCli, "AWS CDK") => "npm install -g aws-cdk",
        (Category::CloudCli, "Terraform") => {
            "wget https://releases.hashicorp.com/terraform/1.6.0/terraform_1.6.0_linux_amd64.zip && unzip terraform_1.6.0_linux_amd64.zip && sudo mv terraform /usr/local/bin/"
        }

        (Category::Authentication, "AWS") => "aws configure",
        (Category::Authentication, "Google Cloud") => {
            "gcloud auth login && gcloud auth application-default login"
        }
        (Category::Authentication, "Azure") => "az login",

        _ => return None,
    };
    Some(command)
}

/// (check name, command) for every failed check that has a table entry,
/// in report order.
pub fn fix_commands(report: &CheckReport) -> Vec<(&str, &'static str)> {
    report
        .failed()
        .into_iter()
        .filter_map(|(category, check)| {
            fix_command(category, &check.name).map(|cmd| (check.name.as_str(), cmd))
        })
        .collect()
}
