//! Scene state machine
//!
//! ```text
//! Start --play--> Playing --toggle_pause--> Playing(paused) --toggle_pause--> Playing
//! Playing --end--> GameOver --replay--> Playing
//! ```
//!
//! Every method returns whether the transition was applied; anything not in
//! the graph above is rejected and leaves the scene untouched.

use crate::types::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneMachine {
    scene: Scene,
    /// Replay prompt phase; only meaningful in `GameOver`.
    blink_visible: bool,
}

impl SceneMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn blink_visible(&self) -> bool {
        self.blink_visible
    }

    pub fn play(&mut self) -> bool {
        if self.scene != Scene::Start {
            return false;
        }
        self.scene = Scene::Playing { paused: false };
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.scene {
            Scene::Playing { paused } => {
                self.scene = Scene::Playing { paused: !paused };
                true
            }
            _ => false,
        }
    }

    pub fn end(&mut self) -> bool {
        if !self.scene.is_playing() {
            return false;
        }
        self.scene = Scene::GameOver;
        self.blink_visible = true;
        true
    }

    pub fn replay(&mut self) -> bool {
        if self.scene != Scene::GameOver {
            return false;
        }
        self.scene = Scene::Playing { paused: false };
        self.blink_visible = false;
        true
    }

    /// Flip the replay prompt. Ignored outside `GameOver`.
    pub fn toggle_blink(&mut self) -> bool {
        if self.scene != Scene::GameOver {
            return false;
        }
        self.blink_visible = !self.blink_visible;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_start_screen() {
        let machine = SceneMachine::new();
        assert_eq!(machine.scene(), Scene::Start);
    }

    #[test]
    fn test_play_only_from_start() {
        let mut machine = SceneMachine::new();
        assert!(machine.play());
        assert_eq!(machine.scene(), Scene::Playing { paused: false });
        assert!(!machine.play());
    }

    #[test]
    fn test_pause_toggles_within_playing() {
        let mut machine = SceneMachine::new();
        assert!(!machine.toggle_pause());

        machine.play();
        assert!(machine.toggle_pause());
        assert_eq!(machine.scene(), Scene::Playing { paused: true });
        assert!(machine.toggle_pause());
        assert_eq!(machine.scene(), Scene::Playing { paused: false });
    }

    #[test]
    fn test_end_and_replay() {
        let mut machine = SceneMachine::new();
        assert!(!machine.end());
        assert!(!machine.replay());

        machine.play();
        assert!(machine.end());
        assert_eq!(machine.scene(), Scene::GameOver);
        assert!(machine.blink_visible());

        // Nothing but replay leaves GameOver.
        assert!(!machine.play());
        assert!(!machine.toggle_pause());
        assert!(!machine.end());
        assert_eq!(machine.scene(), Scene::GameOver);

        assert!(machine.replay());
        assert_eq!(machine.scene(), Scene::Playing { paused: false });
    }

    #[test]
    fn test_end_while_paused() {
        let mut machine = SceneMachine::new();
        machine.play();
        machine.toggle_pause();
        assert!(machine.end());
        assert_eq!(machine.scene(), Scene::GameOver);
    }

    #[test]
    fn test_blink_only_in_game_over() {
        let mut machine = SceneMachine::new();
        assert!(!machine.toggle_blink());

        machine.play();
        machine.end();
        assert!(machine.toggle_blink());
        assert!(!machine.blink_visible());
        assert!(machine.toggle_blink());
        assert!(machine.blink_visible());
    }
}
