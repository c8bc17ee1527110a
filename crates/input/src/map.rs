//! Key mapping from terminal events to game intents.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::types::{Direction, Intent, Position, Scene, TimerId};

/// Input as delivered by the host, before any scene-dependent mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    Quit,
    KeyDown(KeyCode),
    /// Pointer position in game (pixel) coordinates.
    PointerMotion(Position),
    PointerDown(Position),
    TimerFired(TimerId),
}

/// Adapt a crossterm event.
///
/// `to_game` converts a terminal cell (column, row) into game coordinates and
/// returns `None` for cells outside the board. Key repeats and releases are
/// ignored.
pub fn from_crossterm(
    event: &Event,
    to_game: impl Fn(u16, u16) -> Option<Position>,
) -> Option<RawEvent> {
    match event {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            if should_quit(*key) {
                Some(RawEvent::Quit)
            } else {
                Some(RawEvent::KeyDown(key.code))
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                to_game(mouse.column, mouse.row).map(RawEvent::PointerMotion)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                to_game(mouse.column, mouse.row).map(RawEvent::PointerDown)
            }
            _ => None,
        },
        _ => None,
    }
}

/// Map a key press to an intent for the given scene.
///
/// Each direction has an arrow and a WASD binding. Enter and Space play on
/// the start screen and replay on the game-over screen.
pub fn key_intent(code: KeyCode, scene: Scene) -> Option<Intent> {
    match code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Intent::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::Turn(Direction::Right))
        }

        // Pause
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::TogglePause),

        // Scene
        KeyCode::Enter | KeyCode::Char(' ') => match scene {
            Scene::Start => Some(Intent::Play),
            Scene::GameOver => Some(Intent::Replay),
            Scene::Playing { .. } => None,
        },
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Replay),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
