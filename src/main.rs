//! workshop-check CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use workshop_check::cli::{verify, Cli};
use workshop_check::shell::ShellRunner;
use workshop_check::ui::{should_use_colors, Theme};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so the report on stdout is all a user sees
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("workshop_check=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("workshop_check=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("workshop-check starting with args: {:?}", cli);

    let config = cli.config();
    let runner = ShellRunner::new(config.timeout);
    let theme = Theme::for_terminal(!cli.no_color && should_use_colors());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Check outcomes never change the exit status.
    if let Err(e) = verify::run(&runner, &config, &theme, &mut out) {
        tracing::error!("Failed to write report: {}", e);
    }

    ExitCode::SUCCESS
}
