//! Timer engine for the Pomodoro cycle.
//!
//! This module provides the core controller:
//! - Phase transitions (Work → Rest → ... → ExtendedRest, repeating)
//! - Per-second countdown with tokio::time::interval
//! - Best-effort chime playback at each phase start
//! - Lap and round bookkeeping

use anyhow::Result;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::debug;

use crate::cli::display::StatusSink;
use crate::sound::{SoundBank, SoundPlayer};
use crate::types::{CycleConfig, CycleState, Phase};

// ============================================================================
// PomodoroTimer
// ============================================================================

/// Controller that drives the Pomodoro cycle.
///
/// Owns the cycle state and two collaborators: a status sink that renders
/// the countdown line and an optional sound player for phase chimes. The
/// player is optional because the timer keeps running on machines without
/// an audio device.
pub struct PomodoroTimer<D, S> {
    /// Cycle state (phase, lap, round, durations)
    state: CycleState,
    /// Phase to enter on the next step
    next_phase: Phase,
    /// Countdown render target
    status: D,
    /// Phase-to-sound-file mapping
    chimes: SoundBank,
    /// Sound player, if audio is available
    player: Option<S>,
}

impl<D, S> PomodoroTimer<D, S>
where
    D: StatusSink,
    S: SoundPlayer,
{
    /// Creates a new timer with the given durations and collaborators.
    ///
    /// The first step always enters the work phase.
    pub fn new(config: CycleConfig, status: D, player: Option<S>) -> Self {
        Self {
            state: CycleState::new(config),
            next_phase: Phase::Work,
            status,
            chimes: SoundBank::default(),
            player,
        }
    }

    /// Runs the cycle forever.
    ///
    /// Enters the work phase immediately and never stops on its own; the
    /// only way out is an external interrupt, which the caller races
    /// against this future (see `main`).
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.advance_phase().await;
        }
    }

    /// Runs one full step of the cycle.
    ///
    /// Enters the pending phase, chimes, counts the phase down, then folds
    /// the completion into the lap and round counters. The counters are
    /// therefore up to date the moment a phase's final blank render is out.
    pub async fn advance_phase(&mut self) {
        self.state.begin(self.next_phase);
        self.play_chime();
        let minutes = self.state.phase_minutes();
        self.countdown(minutes).await;
        self.next_phase = self.state.complete_phase();
    }

    /// Counts down the given number of minutes, rendering once per second.
    ///
    /// The blank `00:00` clock is rendered before the first tick and after
    /// the last one, so a phase of `m` minutes produces `m * 60 + 2`
    /// renders. Zero minutes renders the blank clock twice and ticks not
    /// at all.
    async fn countdown(&mut self, minutes: u32) {
        self.render(0);

        let mut remaining = minutes * 60;
        if remaining > 0 {
            let mut ticker = interval(Duration::from_secs(1));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of an interval completes immediately
            ticker.tick().await;

            while remaining > 0 {
                self.render(remaining);
                ticker.tick().await;
                remaining -= 1;
            }
        }

        self.render(0);
    }

    /// Plays the chime for the current phase, best-effort.
    ///
    /// No-op before the first phase starts or when audio is unavailable.
    /// Failures are swallowed; sound is cosmetic and must never stall the
    /// countdown.
    fn play_chime(&self) {
        let path = match self.chimes.chime_for(self.state.phase) {
            Some(path) => path,
            None => return,
        };
        let player = match &self.player {
            Some(player) => player,
            None => return,
        };

        if let Err(e) = player.play(&path) {
            debug!(
                "Failed to play chime for {}: {}",
                self.state.phase.as_str(),
                e
            );
        }
    }

    /// Pauses the timer.
    ///
    /// Present in the public contract but not implemented.
    ///
    /// # Errors
    ///
    /// Always returns an error; the cycle state is left untouched.
    pub fn pause(&mut self) -> Result<()> {
        anyhow::bail!("一時停止はサポートされていません")
    }

    /// Returns a reference to the current cycle state.
    pub fn state(&self) -> &CycleState {
        &self.state
    }

    /// Returns a reference to the status sink.
    pub fn status(&self) -> &D {
        &self.status
    }

    /// Returns a reference to the sound player, if any.
    pub fn player(&self) -> Option<&S> {
        self.player.as_ref()
    }

    fn render(&mut self, remaining_seconds: u32) {
        self.status.render(
            self.state.phase,
            remaining_seconds,
            self.state.lap,
            self.state.round,
        );
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::display::MockStatusSink;
    use crate::sound::MockSoundPlayer;
    use std::path::Path;

    fn create_timer(
        config: CycleConfig,
    ) -> PomodoroTimer<MockStatusSink, MockSoundPlayer> {
        PomodoroTimer::new(config, MockStatusSink::new(), Some(MockSoundPlayer::new()))
    }

    /// One-minute phases keep virtual-time tests small.
    fn fast_config() -> CycleConfig {
        CycleConfig::default()
            .with_work_minutes(1)
            .with_rest_minutes(1)
            .with_extended_rest_minutes(1)
    }

    // ------------------------------------------------------------------------
    // Countdown Tests
    // ------------------------------------------------------------------------

    mod countdown_tests {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_render_count_for_one_minute() {
            let mut timer = create_timer(fast_config());

            timer.advance_phase().await;

            // Two blank renders bounding 60 ticking renders
            assert_eq!(timer.status().render_count(), 62);
        }

        #[tokio::test(start_paused = true)]
        async fn test_clock_strictly_decreases() {
            let mut timer = create_timer(fast_config());

            timer.advance_phase().await;

            let renders = timer.status().renders();
            assert_eq!(renders.first().unwrap().1, 0);
            assert_eq!(renders.last().unwrap().1, 0);

            let ticking: Vec<u32> = renders[1..renders.len() - 1]
                .iter()
                .map(|r| r.1)
                .collect();
            assert_eq!(ticking.first(), Some(&60));
            assert_eq!(ticking.last(), Some(&1));
            for pair in ticking.windows(2) {
                assert!(pair[0] > pair[1], "clock did not decrease: {:?}", pair);
            }
        }

        #[tokio::test(start_paused = true)]
        async fn test_zero_minutes_renders_blank_twice() {
            let config = fast_config().with_work_minutes(0);
            let mut timer = create_timer(config);

            timer.advance_phase().await;

            assert_eq!(timer.status().render_count(), 2);
            assert_eq!(timer.status().renders()[0], (Phase::Work, 0, 0, 0));
            assert_eq!(timer.status().renders()[1], (Phase::Work, 0, 0, 0));
        }

        #[tokio::test(start_paused = true)]
        async fn test_first_phase_is_work_with_full_clock() {
            let mut timer = create_timer(fast_config());

            timer.advance_phase().await;

            assert_eq!(timer.state().phase, Phase::Work);
            let lines = timer.status().lines();
            assert_eq!(lines[0], "WORK - 00:00 - Lap: 0 - Round: 0");
            assert_eq!(lines[1], "WORK - 01:00 - Lap: 0 - Round: 0");
        }
    }

    // ------------------------------------------------------------------------
    // Chime Tests
    // ------------------------------------------------------------------------

    mod chime_tests {
        use super::*;

        #[test]
        fn test_chime_before_first_phase_is_noop() {
            let timer = create_timer(fast_config());
            assert_eq!(timer.state().phase, Phase::Idle);

            timer.play_chime();

            assert_eq!(timer.player().unwrap().play_count(), 0);
        }

        #[test]
        fn test_chime_plays_current_phase_sound() {
            let mut timer = create_timer(fast_config());
            timer.state.begin(Phase::Work);

            timer.play_chime();

            let calls = timer.player().unwrap().get_play_calls();
            assert_eq!(calls, vec![Path::new("sounds/work.wav").to_path_buf()]);
        }

        #[tokio::test(start_paused = true)]
        async fn test_chime_failure_does_not_skip_ticks() {
            let mut timer = create_timer(fast_config());
            timer.player().unwrap().set_should_fail(true);

            timer.advance_phase().await;

            // Chime was attempted, failed, and the countdown ran in full
            assert_eq!(timer.player().unwrap().play_count(), 1);
            assert_eq!(timer.status().render_count(), 62);
        }

        #[tokio::test(start_paused = true)]
        async fn test_missing_player_is_silent() {
            let mut timer: PomodoroTimer<MockStatusSink, MockSoundPlayer> =
                PomodoroTimer::new(fast_config(), MockStatusSink::new(), None);

            timer.advance_phase().await;

            assert_eq!(timer.status().render_count(), 62);
        }
    }

    // ------------------------------------------------------------------------
    // Pause Tests
    // ------------------------------------------------------------------------

    mod pause_tests {
        use super::*;

        #[test]
        fn test_pause_is_unsupported() {
            let mut timer = create_timer(fast_config());

            let result = timer.pause();

            assert!(result.is_err());
            assert!(result
                .unwrap_err()
                .to_string()
                .contains("サポートされていません"));
        }

        #[test]
        fn test_pause_leaves_state_untouched() {
            let mut timer = create_timer(fast_config());
            timer.state.begin(Phase::Work);
            timer.state.lap = 2;

            let _ = timer.pause();

            assert_eq!(timer.state().phase, Phase::Work);
            assert_eq!(timer.state().lap, 2);
        }
    }
}
