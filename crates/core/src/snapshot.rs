use crate::types::{Position, Scene};

/// Read-only view of a session, consumed by renderers every frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    /// Snake segments, head first.
    pub segments: Vec<Position>,
    pub fruit: Position,
    pub score: u32,
    pub highscore: u32,
    pub scene: Scene,
    /// The snake has received its first direction this session.
    pub started: bool,
    /// Filled in by the input layer, which owns pointer tracking.
    pub play_hovered: bool,
    pub blink_visible: bool,
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Position> {
        self.segments.first().copied()
    }

    pub fn paused(&self) -> bool {
        self.scene.is_paused()
    }
}
