//! Audio sinks.
//!
//! A terminal has no mixer; the bell is the closest thing to a sound effect.

use std::io::{self, Write};

use crate::ports::AudioSink;
use crate::types::Sound;

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: Sound) {}
}

/// Rings the terminal bell for fruit and collisions. Move and click sounds
/// are too frequent for a bell and are skipped.
#[derive(Debug)]
pub struct BellAudio<W: Write = io::Stdout> {
    out: W,
}

impl BellAudio {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> BellAudio<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for BellAudio<W> {
    fn play(&mut self, sound: Sound) {
        if matches!(sound, Sound::Fruit | Sound::Collision) {
            let _ = self.out.write_all(b"\x07");
            let _ = self.out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_only_for_fruit_and_collision() {
        let mut bell = BellAudio::new(Vec::new());
        bell.play(Sound::Move);
        bell.play(Sound::Fruit);
        bell.play(Sound::Click);
        bell.play(Sound::Collision);
        assert_eq!(bell.into_inner(), b"\x07\x07".to_vec());
    }

    #[test]
    fn test_recorder_keeps_order() {
        let mut sounds: Vec<Sound> = Vec::new();
        sounds.play(Sound::Click);
        sounds.play(Sound::Move);
        assert_eq!(sounds, vec![Sound::Click, Sound::Move]);
    }
}
