//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the snake rules, scene handling and scoring. It has
//! **zero dependencies** on rendering, audio, persistence or terminal I/O:
//!
//! - **Deterministic**: the same seed places the same fruit in the same order
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: hosts drive it with intents and one `step` per frame
//!
//! # Module Structure
//!
//! - [`snake`]: the ordered chain of segments, movement, growth and collisions
//! - [`fruit`]: placement on free cells inside the spawn margin
//! - [`scene`]: Start / Playing (+ paused) / GameOver transitions
//! - [`score`]: session score and high score
//! - [`game_state`]: the session aggregate and its event queue
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, GameConfig, Intent, Position};
//!
//! let mut game = GameState::new(GameConfig::with_board(500, 400, 10), 12345, 0).unwrap();
//! game.apply_intent(Intent::Play);
//! game.apply_intent(Intent::Turn(Direction::Right));
//! game.set_fruit(Position::new(400, 300));
//!
//! let outcome = game.step();
//! assert!(outcome.moved);
//! assert_eq!(game.snake().head(), Position::new(260, 200));
//! ```
//!
//! # Timing
//!
//! One [`GameState::step`] per paced frame. The host paces frames at
//! [`GameState::tick_rate`] frames per second.

pub mod config;
pub mod error;
pub mod fruit;
pub mod game_state;
pub mod rng;
pub mod scene;
pub mod score;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use error::{ConfigError, GameError, SpawnError};
pub use fruit::{Bounds, FruitSpawner};
pub use game_state::{GameEvent, GameState, StepOutcome};
pub use rng::SimpleRng;
pub use scene::SceneMachine;
pub use score::ScoreBoard;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
