//! Shell command execution with a deadline.

use crate::error::{Result, VerifyError};
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use super::platform::{detect_shell, shell_flag};

/// Message reported when a command outlives its deadline.
pub const TIMEOUT_MESSAGE: &str = "Command timeout";

/// Default deadline for a single command.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Outcome of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Whether the command exited with status 0 before the deadline.
    pub success: bool,

    /// Standard output followed by standard error, or an error description.
    pub output: String,
}

impl CommandOutcome {
    /// Create a success outcome.
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
        }
    }

    /// Create a failure outcome.
    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }

    /// Create the outcome reported for a command that hit its deadline.
    pub fn timeout() -> Self {
        Self::failure(TIMEOUT_MESSAGE)
    }

    /// Output with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.output.trim()
    }
}

/// Anything that can run a shell command string and report how it went.
///
/// Check phases only talk to this trait so they can be driven by canned
/// outcomes in tests.
pub trait CommandRunner {
    /// Run `command` and report its outcome. Never panics, never errors.
    fn run(&self, command: &str) -> CommandOutcome;
}

/// Runs commands through the platform shell with a fixed deadline.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    timeout: Duration,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl ShellRunner {
    /// Create a runner with the given per-command deadline.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Get the per-command deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute a command, surfacing spawn and wait failures as errors.
    pub fn execute(&self, command: &str) -> Result<CommandOutcome> {
        let start = Instant::now();
        let deadline = start + self.timeout;

        let shell = detect_shell();
        let mut cmd = Command::new(&shell);
        cmd.arg(shell_flag());
        cmd.arg(command);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        // Own process group so a timeout can take the whole pipeline down.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let mut child = cmd.spawn().map_err(|e| spawn_error(command, &e))?;

        let (tx, rx) = mpsc::channel();
        if let Some(stdout) = child.stdout.take() {
            spawn_reader(stdout, Stream::Stdout, tx.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            spawn_reader(stderr, Stream::Stderr, tx);
        }

        let status = loop {
            if let Some(status) = child.try_wait().map_err(|e| spawn_error(command, &e))? {
                break status;
            }
            if Instant::now() >= deadline {
                kill_tree(&mut child);
                tracing::debug!(
                    "'{}' timed out after {:?}",
                    command,
                    start.elapsed()
                );
                return Ok(CommandOutcome::timeout());
            }
            thread::sleep(POLL_INTERVAL);
        };

        // A backgrounded grandchild can hold a pipe open after the shell exits.
        let Some((stdout, stderr)) = collect_output(&rx, deadline) else {
            kill_tree(&mut child);
            tracing::debug!(
                "'{}' left output open past the deadline after {:?}",
                command,
                start.elapsed()
            );
            return Ok(CommandOutcome::timeout());
        };
        let mut output = stdout;
        output.push_str(&stderr);

        tracing::debug!(
            "'{}' exited with {:?} in {:?}",
            command,
            status.code(),
            start.elapsed()
        );

        if status.success() {
            Ok(CommandOutcome::success(output))
        } else {
            Ok(CommandOutcome::failure(output))
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> CommandOutcome {
        match self.execute(command) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!("{}", e);
                CommandOutcome::failure(e.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

fn spawn_reader<R>(mut pipe: R, stream: Stream, tx: mpsc::Sender<(Stream, String)>)
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send((stream, String::from_utf8_lossy(&buf).into_owned()));
    });
}

/// Gather both streams, or `None` if either is still open at the deadline.
fn collect_output(
    rx: &mpsc::Receiver<(Stream, String)>,
    deadline: Instant,
) -> Option<(String, String)> {
    let mut stdout = None;
    let mut stderr = None;

    while stdout.is_none() || stderr.is_none() {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining).ok()? {
            (Stream::Stdout, text) => stdout = Some(text),
            (Stream::Stderr, text) => stderr = Some(text),
        }
    }

    stdout.zip(stderr)
}

fn kill_tree(child: &mut Child) {
    #[cfg(unix)]
    {
        if let Ok(pgid) = i32::try_from(child.id()) {
            // SAFETY: kill(2) with a negative pid signals the process group we created.
            unsafe {
                libc::kill(-pgid, libc::SIGKILL);
            }
        }
    }
    let _ = child.kill();
    let _ = child.wait();
}

fn spawn_error(command: &str, err: &std::io::Error) -> VerifyError {
    VerifyError::CommandSpawn {
        command: command.to_string(),
        message: err.to_string(),
    }
}
