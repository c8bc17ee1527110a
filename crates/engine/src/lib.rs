//! Engine: the frame loop and its collaborators.
//!
//! [`Engine`] owns a [`tui_snake_core::GameState`] and the host-side pieces
//! the core must not know about: the input mapper, the blink timer, audio and
//! high score persistence. Hosts feed it raw input once per frame, render its
//! snapshot and pace with a [`Clock`].

pub mod audio;
pub mod clock;
pub mod config;
pub mod engine;
pub mod ports;
pub mod store;

pub use tui_snake_types as types;

pub use audio::{BellAudio, NullAudio};
pub use clock::{FixedClock, FrameClock};
pub use config::{AudioMode, RuntimeConfig};
pub use engine::{Engine, FrameStatus};
pub use ports::{AudioSink, Clock, HighscoreStore};
pub use store::{JsonFileStore, MemoryStore, StoreError};
