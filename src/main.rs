//! Pomodoro Timer CLI - a terminal productivity tool
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of rest
//! - 15 minutes of extended rest after 4 work intervals

use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod sound;
pub mod timer;
pub mod types;

use cli::{display, Cli, StatusLine};
use sound::try_create_player;
use timer::PomodoroTimer;
use types::CycleConfig;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Run the timer
    if let Err(e) = run().await {
        display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they never clobber the status line on stdout.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Builds the timer and runs it until interrupted.
async fn run() -> Result<()> {
    let config = CycleConfig::default();
    config.validate().map_err(anyhow::Error::msg)?;

    let player = try_create_player();
    let mut timer = PomodoroTimer::new(config, StatusLine::new(), player);

    // The cycle never stops on its own; ctrl-c is the only exit
    tokio::select! {
        result = timer.run() => result,
        _ = tokio::signal::ctrl_c() => {
            println!();
            println!("タイマーを停止しました");
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
