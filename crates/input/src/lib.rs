//! Terminal input module (engine-facing).
//!
//! This crate is independent of the game core. It turns `crossterm` events
//! into [`RawEvent`]s, maps those into [`crate::types::Intent`]s for the
//! current scene, tracks the pointer for the start-screen play button, and
//! provides the periodic timer used for the replay prompt blink.

pub mod map;
pub mod mapper;
pub mod timer;

pub use tui_snake_types as types;

pub use crossterm::event::KeyCode;

pub use map::{from_crossterm, key_intent, should_quit, RawEvent};
pub use mapper::InputMapper;
pub use timer::PeriodicTimer;
