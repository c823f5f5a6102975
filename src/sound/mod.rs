//! Sound playback for phase notifications.
//!
//! This module provides audio notification capabilities, including:
//!
//! - Phase-to-file mapping over the `sounds` directory
//! - Non-blocking audio playback via rodio
//! - Graceful degradation when audio is unavailable
//!
//! Playback is strictly best-effort: a missing file, an undecodable
//! format, or a missing audio device must never interrupt the countdown.
//! The controller swallows every error this module returns.

mod bank;
mod error;
mod player;

pub use bank::{SoundBank, SOUND_DIR};
pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};

use std::path::Path;

/// Trait for sound playback implementations.
///
/// This trait abstracts the sound playback functionality, allowing for
/// different implementations (e.g., rodio-based, mock for testing).
pub trait SoundPlayer {
    /// Plays a sound from the given file path.
    ///
    /// This method should be non-blocking; the sound plays in the
    /// background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, path: &Path) -> Result<(), SoundError>;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, path: &Path) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, path)
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: std::sync::Mutex<Vec<std::path::PathBuf>>,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<std::path::PathBuf> {
        self.play_calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.play_calls.lock().unwrap().clear();
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, path: &Path) -> Result<(), SoundError> {
        self.play_calls.lock().unwrap().push(path.to_path_buf());
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        Ok(())
    }
}
