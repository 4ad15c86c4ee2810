//! Scripted command runner for testing.
//!
//! `ScriptedRunner` implements [`CommandRunner`] by looking commands up in a
//! table of canned outcomes, and records every command it was asked to run.
//!
//! # Example
//!
//! ```
//! use workshop_check::shell::{CommandRunner, ScriptedRunner};
//!
//! let runner = ScriptedRunner::new()
//!     .succeed("git --version", "git version 2.43.0")
//!     .fail("docker --version", "docker: not found");
//!
//! assert!(runner.run("git --version").success);
//! assert!(!runner.run("docker --version").success);
//! assert!(!runner.run("node --version").success);
//! assert_eq!(runner.commands().len(), 3);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use super::command::{CommandOutcome, CommandRunner};

/// Output reported for commands the script does not know about.
pub const NOT_FOUND_OUTPUT: &str = "command not found";

/// Command runner that answers from a fixed script.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    outcomes: HashMap<String, CommandOutcome>,
    fallback: Option<CommandOutcome>,
    commands: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Create an empty script; every command fails as not found.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit 0 with `output`.
    pub fn succeed(self, command: &str, output: &str) -> Self {
        self.respond(command, CommandOutcome::success(output))
    }

    /// Make `command` exit non-zero with `output`.
    pub fn fail(self, command: &str, output: &str) -> Self {
        self.respond(command, CommandOutcome::failure(output))
    }

    /// Make `command` hit its deadline.
    pub fn time_out(self, command: &str) -> Self {
        self.respond(command, CommandOutcome::timeout())
    }

    /// Answer `command` with an arbitrary outcome.
    pub fn respond(mut self, command: &str, outcome: CommandOutcome) -> Self {
        self.outcomes.insert(command.to_string(), outcome);
        self
    }

    /// Answer every unscripted command with `outcome`.
    pub fn otherwise(mut self, outcome: CommandOutcome) -> Self {
        self.fallback = Some(outcome);
        self
    }

    /// Commands run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str) -> CommandOutcome {
        self.commands.borrow_mut().push(command.to_string());
        self.outcomes
            .get(command)
            .or(self.fallback.as_ref())
            .cloned()
            .unwrap_or_else(|| CommandOutcome::failure(NOT_FOUND_OUTPUT))
    }
}
