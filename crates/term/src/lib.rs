//! Terminal renderer for the snake game.
//!
//! Views draw snapshots into a [`FrameBuffer`]; [`TerminalRenderer`] flushes
//! the changed cells with crossterm. Nothing here mutates game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
