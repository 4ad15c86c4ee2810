//! Platform-specific shell detection.

use std::borrow::Cow;

/// Shell used to interpret check commands.
///
/// Always the POSIX `/bin/sh` on Unix rather than the user's `$SHELL`, so
/// quoting in the check commands behaves the same on every workstation.
pub fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Get the flag to pass a command string to the shell.
pub fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

/// Quote `arg` as a single word for [`detect_shell`].
///
/// Plain words such as `python3` or `/usr/bin/python3` pass through untouched.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,@%".contains(c));
    if plain {
        return Cow::Borrowed(arg);
    }

    if cfg!(target_os = "windows") {
        Cow::Owned(format!("\"{}\"", arg.replace('"', "\"\"")))
    } else {
        Cow::Owned(format!("'{}'", arg.replace('\'', "'\\''")))
    }
}

/// Check if running in a CI environment.
///
/// Used to default to plain (uncoloured) output.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn unix_uses_posix_sh() {
        assert_eq!(detect_shell(), "/bin/sh");
        assert_eq!(shell_flag(), "-c");
    }

    #[test]
    fn quote_arg_leaves_plain_words_alone() {
        assert_eq!(quote_arg("python3"), "python3");
        assert_eq!(quote_arg("/opt/py-3.12/bin/python"), "/opt/py-3.12/bin/python");
    }

    #[cfg(unix)]
    #[test]
    fn quote_arg_wraps_spaces_and_quotes() {
        assert_eq!(quote_arg("/opt/my tools/python"), "'/opt/my tools/python'");
        assert_eq!(quote_arg("it's"), "'it'\\''s'");
        assert_eq!(quote_arg(""), "''");
    }

    #[test]
    fn detect_shell_is_not_empty() {
        assert!(!detect_shell().is_empty());
    }

    #[test]
    fn is_ci_detects_environment() {
        // Just ensure function doesn't panic
        let _ = is_ci();
    }
}
