//! Collaborator interfaces the engine drives.
//!
//! Rendering is not listed here: renderers only read snapshots.

use crate::store::StoreError;
use crate::types::Sound;

/// Paces the frame loop.
pub trait Clock {
    /// Block until the next frame at `rate` frames per second and return the
    /// milliseconds elapsed since the previous tick.
    fn tick(&mut self, rate: u32) -> u32;
}

/// Fire-and-forget sound notifications. Implementations swallow their own failures.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

/// Single-integer high score persistence.
pub trait HighscoreStore {
    /// Stored high score; `Ok(0)` when nothing has been stored yet.
    fn load_highscore(&mut self) -> Result<u32, StoreError>;
    fn save_highscore(&mut self, value: u32) -> Result<(), StoreError>;
}

impl<T: AudioSink + ?Sized> AudioSink for Box<T> {
    fn play(&mut self, sound: Sound) {
        (**self).play(sound)
    }
}

impl<T: HighscoreStore + ?Sized> HighscoreStore for Box<T> {
    fn load_highscore(&mut self) -> Result<u32, StoreError> {
        (**self).load_highscore()
    }

    fn save_highscore(&mut self, value: u32) -> Result<(), StoreError> {
        (**self).save_highscore(value)
    }
}

/// Records every notification; handy for tests and replays.
impl AudioSink for Vec<Sound> {
    fn play(&mut self, sound: Sound) {
        self.push(sound);
    }
}
