//! Status-line rendering for the Pomodoro timer.
//!
//! The whole UI is a single terminal line that is overwritten in place
//! once per second:
//!
//! ```text
//! WORK - 24:59 - Lap: 0 - Round: 0
//! ```
//!
//! A trailing carriage return (no newline) rewinds the cursor so the next
//! render replaces the previous one. A zero remaining time renders the
//! blank `00:00` clock shown just before a phase starts ticking and again
//! after it ends.

use std::io::{self, Write};

use crate::types::Phase;

/// Formats one status line: `{phase} - {mm}:{ss} - Lap: {lap} - Round: {round}`.
///
/// Minutes and seconds are zero-padded to two digits.
#[must_use]
pub fn format_status(phase: Phase, remaining_seconds: u32, lap: u32, round: u32) -> String {
    let (minutes, seconds) = format_clock(remaining_seconds);
    format!(
        "{} - {:02}:{:02} - Lap: {} - Round: {}",
        phase.as_str(),
        minutes,
        seconds,
        lap,
        round
    )
}

/// Splits remaining seconds into (minutes, seconds).
fn format_clock(total_seconds: u32) -> (u32, u32) {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    (minutes, seconds)
}

/// Prints an error message to stderr.
pub fn show_error(message: &str) {
    eprintln!("エラー: {}", message);
}

// ============================================================================
// StatusSink
// ============================================================================

/// Sink for countdown status renders.
///
/// The controller calls this once per second plus once before the first
/// tick and once after the last one (both with zero remaining seconds).
pub trait StatusSink {
    /// Renders the current countdown status.
    fn render(&mut self, phase: Phase, remaining_seconds: u32, lap: u32, round: u32);
}

/// Status sink that overwrites a single stdout line in place.
#[derive(Debug, Default)]
pub struct StatusLine;

impl StatusLine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl StatusSink for StatusLine {
    fn render(&mut self, phase: Phase, remaining_seconds: u32, lap: u32, round: u32) {
        let line = format_status(phase, remaining_seconds, lap, round);
        let mut stdout = io::stdout();
        // A failed write leaves a stale line at worst; the timer keeps going
        let _ = write!(stdout, "{}\r", line);
        let _ = stdout.flush();
    }
}

/// Mock status sink for testing.
///
/// Records every render so tests can assert on counts, ordering, and the
/// exact formatted lines.
#[derive(Debug, Default)]
pub struct MockStatusSink {
    renders: Vec<(Phase, u32, u32, u32)>,
}

impl MockStatusSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of renders recorded.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders.len()
    }

    /// Raw `(phase, remaining_seconds, lap, round)` records.
    #[must_use]
    pub fn renders(&self) -> &[(Phase, u32, u32, u32)] {
        &self.renders
    }

    /// Formatted lines, as the terminal sink would have printed them.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.renders
            .iter()
            .map(|&(phase, remaining, lap, round)| format_status(phase, remaining, lap, round))
            .collect()
    }

    pub fn clear(&mut self) {
        self.renders.clear();
    }
}

impl StatusSink for MockStatusSink {
    fn render(&mut self, phase: Phase, remaining_seconds: u32, lap: u32, round: u32) {
        self.renders.push((phase, remaining_seconds, lap, round));
    }
}

// ============================================================================
// Tests
// ============================================================================
