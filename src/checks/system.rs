//! System requirements: Python runtime version and core tooling.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::VerifierConfig;
use crate::shell::{quote_arg, CommandRunner};

use super::result::CheckResult;

/// Tools probed with `<binary> --version`, with how their output is shown.
const TOOLS: &[(&str, &str, ShowVersion)] = &[
    ("Node.js", "node", ShowVersion::Trimmed),
    ("Git", "git", ShowVersion::Installed),
    ("Docker", "docker", ShowVersion::Trimmed),
];

#[derive(Debug, Clone, Copy)]
enum ShowVersion {
    /// Echo the trimmed `--version` output.
    Trimmed,
    /// Just say "Installed".
    Installed,
}

/// Regex for `Python X.Y[.Z]` in `--version` output.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").expect("VERSION_REGEX must compile")
});

/// A parsed `major.minor.micro` interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl PythonVersion {
    /// Extract the version from `python --version` output.
    ///
    /// ```
    /// use workshop_check::checks::system::PythonVersion;
    ///
    /// let v = PythonVersion::parse("Python 3.11.4\n").unwrap();
    /// assert_eq!((v.major, v.minor, v.micro), (3, 11, 4));
    /// assert!(PythonVersion::parse("command not found").is_none());
    /// ```
    pub fn parse(output: &str) -> Option<Self> {
        let caps = VERSION_REGEX.captures(output)?;
        let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
        Some(Self {
            major: number(1)?,
            minor: number(2)?,
            micro: number(3).unwrap_or(0),
        })
    }

    /// Whether this version is at least `(major, minor)`.
    pub fn at_least(&self, min: (u32, u32)) -> bool {
        (self.major, self.minor) >= min
    }
}

impl std::fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Run the system requirement checks.
pub fn check(runner: &dyn CommandRunner, config: &VerifierConfig) -> Vec<CheckResult> {
    let mut results = vec![check_python(runner, config)];

    for &(name, binary, show) in TOOLS {
        let outcome = runner.run(&format!("{} --version", binary));
        let result = if outcome.success {
            match show {
                ShowVersion::Trimmed => CheckResult::pass(name, outcome.trimmed()),
                ShowVersion::Installed => CheckResult::pass(name, "Installed"),
            }
        } else {
            CheckResult::fail(name, "Not installed")
        };
        results.push(result);
    }

    results
}

fn check_python(runner: &dyn CommandRunner, config: &VerifierConfig) -> CheckResult {
    let need = format!("Need Python {}+", config.min_python_label());
    let outcome = runner.run(&format!("{} --version", quote_arg(&config.python)));

    let version = outcome
        .success
        .then(|| PythonVersion::parse(&outcome.output))
        .flatten();

    match version {
        Some(v) if v.at_least(config.min_python) => {
            CheckResult::pass(format!("Python {}", v), "Compatible")
        }
        Some(v) => CheckResult::fail(format!("Python {}", v), need),
        None => {
            tracing::debug!("could not determine Python version from {:?}", outcome.output);
            CheckResult::fail("Python", need)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;

    fn all_present() -> ScriptedRunner {
        ScriptedRunner::new()
            .succeed("python3 --version", "Python 3.11.4\n")
            .succeed("node --version", "v20.11.1\n")
            .succeed("git --version", "git version 2.43.0\n")
            .succeed("docker --version", "Docker version 24.0.7, build afdd53b\n")
    }

    #[test]
    fn all_tools_present_pass() {
        let results = check(&all_present(), &VerifierConfig::default());

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(results[0].name, "Python 3.11.4");
        assert_eq!(results[0].message, "Compatible");
        assert_eq!(results[1].message, "v20.11.1");
        assert_eq!(results[2].message, "Installed");
        assert_eq!(results[3].message, "Docker version 24.0.7, build afdd53b");
    }

    #[test]
    fn nothing_on_path_fails_every_check() {
        let results = check(&ScriptedRunner::new(), &VerifierConfig::default());

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| !r.passed));
        assert_eq!(results[0].name, "Python");
        assert_eq!(results[0].message, "Need Python 3.9+");
        for r in &results[1..] {
            assert_eq!(r.message, "Not installed");
        }
    }

    #[test]
    fn old_python_fails_with_detected_name() {
        let runner = all_present().succeed("python3 --version", "Python 3.8.10");
        let results = check(&runner, &VerifierConfig::default());

        assert!(!results[0].passed);
        assert_eq!(results[0].name, "Python 3.8.10");
        assert_eq!(results[0].message, "Need Python 3.9+");
    }

    #[test]
    fn minimum_python_is_inclusive() {
        let runner = all_present().succeed("python3 --version", "Python 3.9.0");
        let results = check(&runner, &VerifierConfig::default());
        assert!(results[0].passed);
    }

    #[test]
    fn uses_configured_interpreter() {
        let runner = all_present().succeed("/opt/py/bin/python --version", "Python 3.12.1");
        let config = VerifierConfig::default().with_python("/opt/py/bin/python");
        let results = check(&runner, &config);

        assert!(results[0].passed);
        assert_eq!(results[0].name, "Python 3.12.1");
    }

    #[cfg(unix)]
    #[test]
    fn interpreter_path_with_spaces_is_quoted() {
        let runner = all_present().succeed("'/opt/my tools/python' --version", "Python 3.12.1");
        let config = VerifierConfig::default().with_python("/opt/my tools/python");
        let results = check(&runner, &config);

        assert!(results[0].passed);
    }

    #[test]
    fn timed_out_tool_is_not_installed() {
        let runner = all_present().time_out("docker --version");
        let results = check(&runner, &VerifierConfig::default());

        assert!(!results[3].passed);
        assert_eq!(results[3].message, "Not installed");
    }

    #[test]
    fn parse_handles_two_part_versions() {
        let v = PythonVersion::parse("Python 3.13").unwrap();
        assert_eq!(v.to_string(), "3.13.0");
    }

    #[test]
    fn at_least_compares_major_then_minor() {
        let v = PythonVersion::parse("Python 4.0.0").unwrap();
        assert!(v.at_least((3, 9)));
        let v = PythonVersion::parse("Python 3.10.2").unwrap();
        assert!(v.at_least((3, 9)));
        assert!(!v.at_least((3, 11)));
    }
}
