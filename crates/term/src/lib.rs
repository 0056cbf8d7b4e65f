//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and renders into a simple framebuffer
//! that is flushed to a terminal backend.
//!
//! Pipeline:
//! - the simulation projects its state onto a [`SceneSurface`]
//! - [`GameView`] fits the play surface into the viewport and draws the scene
//! - [`TerminalRenderer`] diffs against the previous frame and writes the changes

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod scene;

pub use egg_catch_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_frame, ChangedRuns, Run, TerminalRenderer};
pub use scene::{Element, SceneSurface};
