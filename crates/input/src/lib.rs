//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm`
//! key and mouse events into [`types::InputEvent`]s and provides
//! [`TerminalInput`], an [`types::InputSource`] that drains the terminal's
//! event queue once per frame without blocking.

pub mod map;
pub mod source;

pub use egg_catch_types as types;

pub use map::{map_key_event, map_mouse_event, should_quit};
pub use source::{Ack, CrosstermEvents, EventReader, TerminalInput};
