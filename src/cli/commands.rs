//! Command definition for the Pomodoro timer CLI.
//!
//! Uses clap derive macro for argument parsing. The timer takes no
//! subcommands: running the binary starts the cycle immediately and it
//! runs until interrupted. Durations are fixed (25/5/15 minutes).

use clap::Parser;

/// Pomodoro timer CLI
#[derive(Parser, Debug)]
#[command(
    name = "tomato",
    version,
    about = "ターミナル上で動作するシンプルなポモドーロタイマー",
    long_about = "ターミナル上で動作するシンプルなポモドーロタイマー。\n\
                  25分の作業と5分の休憩を繰り返し、4周ごとに15分の長い休憩が入ります。\n\
                  各フェーズの開始時に通知音を再生します。Ctrl-Cで終了します。"
)]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

// ============================================================================
// Tests
// ============================================================================
