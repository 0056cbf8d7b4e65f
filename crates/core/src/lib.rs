//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, timing, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Testable**: A test harness can drive it at fixed steps instead of real time
//! - **Portable**: Any frame driver and any [`Surface`](types::Surface) can host it
//!
//! # Module Structure
//!
//! - [`falling_item`]: The labelled item falling down the surface
//! - [`catcher`]: The horizontally movable receiver, always clamped to the surface
//! - [`drag`]: Pointer drag gesture with once-per-frame coalescing
//! - [`round`]: Per-frame simulation, scoring, difficulty, and end of round
//! - [`rng`]: Seeded item placement and label draws
//! - [`config`]: Tunable constants with validation
//!
//! # Game Rules
//!
//! - The item falls `fall_speed` units per tick (3 at the start)
//! - Reaching the catch line over the catcher scores a point
//! - Every 5th point makes the item fall one unit per tick faster
//! - Reaching the floor counts a miss; the fifth miss ends the round
//! - Typing the item's letter snaps the catcher under it
//!
//! # Example
//!
//! ```
//! use egg_catch_core::{Flow, GameConfig, RoundController};
//! use egg_catch_types::Key;
//!
//! let mut round = RoundController::new(GameConfig::default(), 12345)?;
//!
//! // Snap the catcher under the item by typing its letter.
//! let label = round.item().label();
//! round.handle_key(Key::Char(label));
//!
//! // Run until the item lands in the catcher.
//! while round.score() == 0 {
//!     assert_eq!(round.tick().flow, Flow::Continue);
//! }
//! assert_eq!(round.misses(), 0);
//! # Ok::<(), egg_catch_core::ConfigError>(())
//! ```

pub mod catcher;
pub mod config;
pub mod drag;
pub mod falling_item;
pub mod rng;
pub mod round;

pub use egg_catch_types as types;

// Re-export commonly used types for convenience
pub use catcher::Catcher;
pub use config::{ConfigError, GameConfig};
pub use drag::{DragGesture, DragState, DragUpdate};
pub use falling_item::FallingItem;
pub use rng::ItemRng;
pub use round::{Flow, RoundController, RoundEvent, RoundStatus, TickOutcome};
