//! Core types shared across the workspace.
//! This crate contains pure data types with no external dependencies.

/// Board dimensions (pixel units)
pub const DEFAULT_BOARD_WIDTH: i32 = 300;
pub const DEFAULT_BOARD_HEIGHT: i32 = 200;
pub const DEFAULT_CELL_SIZE: i32 = 10;

/// Largest board along either axis, in cells. Keeps the terminal frame
/// addressable in `u16` columns and rows.
pub const MAX_BOARD_CELLS: i32 = 1000;

/// Fruit is never placed inside this many outer rings of cells.
pub const DEFAULT_SPAWN_MARGIN: i32 = 1;

/// Timing
pub const BLINK_INTERVAL_MS: u32 = 500;
pub const DEFAULT_SPEED: u32 = 1;
/// Frames per second at speed 1 is `BASE_TICK_CELLS / cell_size`.
pub const BASE_TICK_CELLS: u32 = 150;

/// Start-screen play button size (pixel units)
pub const PLAY_BUTTON_WIDTH: i32 = 80;
pub const PLAY_BUTTON_HEIGHT: i32 = 30;

/// A grid cell position in pixel units.
///
/// Snake segments and fruit always sit on multiples of the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned rectangle in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Left/top edges are inside, right/bottom edges are outside.
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

/// Movement direction of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Velocity for one step with the given cell size.
    pub fn delta(&self, size: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -size),
            Direction::Down => (0, size),
            Direction::Left => (-size, 0),
            Direction::Right => (size, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Top-level screen. `paused` only exists while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    #[default]
    Start,
    Playing {
        paused: bool,
    },
    GameOver,
}

impl Scene {
    pub fn is_playing(&self) -> bool {
        matches!(self, Scene::Playing { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Scene::Playing { paused: true })
    }

    /// Playing and not paused: the only state in which the snake moves.
    pub fn is_running(&self) -> bool {
        matches!(self, Scene::Playing { paused: false })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scene::Start => "start",
            Scene::Playing { paused: false } => "playing",
            Scene::Playing { paused: true } => "paused",
            Scene::GameOver => "game_over",
        }
    }
}

/// Timers the host schedules on behalf of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// Replay prompt blink on the game-over screen.
    Blink,
}

/// Normalized commands, independent of the physical key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    TogglePause,
    Play,
    Replay,
    Timer(TimerId),
    Quit,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Turn(Direction::Up) => "turnUp",
            Intent::Turn(Direction::Down) => "turnDown",
            Intent::Turn(Direction::Left) => "turnLeft",
            Intent::Turn(Direction::Right) => "turnRight",
            Intent::TogglePause => "togglePause",
            Intent::Play => "play",
            Intent::Replay => "replay",
            Intent::Timer(TimerId::Blink) => "timerBlink",
            Intent::Quit => "quit",
        }
    }
}

/// Terminal collision kinds. These end the game; they are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    Boundary,
    SelfBite,
}

/// Sound notifications sent to the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Move,
    Fruit,
    Collision,
    Click,
}

/// Board geometry and pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    /// Outer rings of cells excluded from fruit placement.
    pub spawn_margin: i32,
    pub blink_interval_ms: u32,
    pub speed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            spawn_margin: DEFAULT_SPAWN_MARGIN,
            blink_interval_ms: BLINK_INTERVAL_MS,
            speed: DEFAULT_SPEED,
        }
    }
}

impl GameConfig {
    pub fn with_board(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
            ..Self::default()
        }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Grid center, snapped down to the cell grid.
    pub fn center(&self) -> Position {
        let s = self.cell_size;
        Position::new((self.width / 2) / s * s, (self.height / 2) / s * s)
    }

    /// Frames per second for the simulation clock.
    pub fn tick_rate(&self) -> u32 {
        let cell = self.cell_size.max(1) as u32;
        (self.speed.saturating_mul(BASE_TICK_CELLS) / cell).max(1)
    }

    /// Bounds of the start-screen play button, centered below the middle row.
    pub fn play_button(&self) -> Rect {
        let x = (self.width - PLAY_BUTTON_WIDTH) / 2;
        let y = self.height / 2;
        Rect::new(x, y, PLAY_BUTTON_WIDTH, PLAY_BUTTON_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(d.opposite().opposite(), d);
            let (dx, dy) = d.delta(10);
            let (ox, oy) = d.opposite().delta(10);
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_center_snaps_to_grid() {
        let config = GameConfig::with_board(500, 400, 10);
        assert_eq!(config.center(), Position::new(250, 200));

        let odd = GameConfig::with_board(310, 210, 20);
        assert_eq!(odd.center(), Position::new(140, 100));
    }

    #[test]
    fn test_tick_rate_scales_with_speed() {
        let mut config = GameConfig::default();
        assert_eq!(config.tick_rate(), 15);
        config.speed = 2;
        assert_eq!(config.tick_rate(), 30);
        config.cell_size = 1000;
        assert_eq!(config.tick_rate(), 1);
    }

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(10, 10, 20, 10);
        assert!(r.contains(Position::new(10, 10)));
        assert!(r.contains(Position::new(29, 19)));
        assert!(!r.contains(Position::new(30, 10)));
        assert!(!r.contains(Position::new(10, 20)));
    }

    #[test]
    fn test_scene_flags() {
        assert!(!Scene::Start.is_playing());
        assert!(Scene::Playing { paused: true }.is_paused());
        assert!(!Scene::Playing { paused: true }.is_running());
        assert!(Scene::Playing { paused: false }.is_running());
        assert_eq!(Scene::GameOver.as_str(), "game_over");
    }
}
