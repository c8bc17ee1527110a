//! Session score and persisted high score.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    score: u32,
    highscore: u32,
}

impl ScoreBoard {
    /// Start a session with a previously persisted high score.
    pub fn new(highscore: u32) -> Self {
        Self {
            score: 0,
            highscore,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn record_fruit(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Fold the session score into the high score and return the value to persist.
    pub fn end_session(&mut self) -> u32 {
        self.highscore = self.highscore.max(self.score);
        self.highscore
    }

    /// Zero the session score. The high score is never reset.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}
