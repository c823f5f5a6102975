//! Notification sound lookup.
//!
//! Each phase has a fixed audio file under the `sounds` directory. The
//! files are plain PCM containers (WAV); whether they exist or decode is
//! the player's problem, not the bank's.

use std::path::{Path, PathBuf};

use crate::types::Phase;

/// Default directory searched for phase sounds, relative to the working
/// directory.
pub const SOUND_DIR: &str = "sounds";

const WORK_SOUND: &str = "work.wav";
const REST_SOUND: &str = "rest.wav";
const EXTENDED_REST_SOUND: &str = "extended_rest.wav";

/// Maps cycle phases to their notification sound files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundBank {
    base: PathBuf,
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new(SOUND_DIR)
    }
}

impl SoundBank {
    /// Creates a bank rooted at the given directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Returns the base directory of the bank.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the sound file for the given phase.
    ///
    /// `Idle` has no sound; phases only chime once they start.
    #[must_use]
    pub fn chime_for(&self, phase: Phase) -> Option<PathBuf> {
        let file = match phase {
            Phase::Idle => return None,
            Phase::Work => WORK_SOUND,
            Phase::Rest => REST_SOUND,
            Phase::ExtendedRest => EXTENDED_REST_SOUND,
        };
        Some(self.base.join(file))
    }
}
