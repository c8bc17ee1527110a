//! Scene-aware mapping from raw events to intents.

use crate::map::{key_intent, RawEvent};
use crate::types::{Intent, Position, Rect, Scene};

/// Turns raw events into intents and tracks play-button hover.
#[derive(Debug, Clone)]
pub struct InputMapper {
    play_button: Rect,
    pointer: Option<Position>,
    hovered: bool,
}

impl InputMapper {
    pub fn new(play_button: Rect) -> Self {
        Self {
            play_button,
            pointer: None,
            hovered: false,
        }
    }

    /// Whether the pointer is over the play button.
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Recompute hover from the last known pointer position. Call once per frame.
    pub fn begin_frame(&mut self) {
        self.hovered = self
            .pointer
            .map(|p| self.play_button.contains(p))
            .unwrap_or(false);
    }

    /// Map one event. Pointer presses only activate the play button on the
    /// start screen, and only while it is hovered.
    pub fn map(&mut self, event: RawEvent, scene: Scene) -> Option<Intent> {
        match event {
            RawEvent::Quit => Some(Intent::Quit),
            RawEvent::KeyDown(code) => key_intent(code, scene),
            RawEvent::PointerMotion(p) => {
                self.pointer = Some(p);
                self.begin_frame();
                None
            }
            RawEvent::PointerDown(p) => {
                self.pointer = Some(p);
                self.begin_frame();
                if scene == Scene::Start && self.hovered {
                    Some(Intent::Play)
                } else {
                    None
                }
            }
            RawEvent::TimerFired(id) => Some(Intent::Timer(id)),
        }
    }
}
