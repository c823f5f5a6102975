//! CLI module for the Pomodoro timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definition using clap derive
//! - `display`: Status-line rendering and error output

pub mod commands;
pub mod display;

pub use commands::Cli;
pub use display::{show_error, MockStatusSink, StatusLine, StatusSink};
