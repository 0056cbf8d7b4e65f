//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping, tests).
//!
//! # Surface Dimensions
//!
//! The play surface is measured in abstract surface units, one per pixel of
//! an 800x600 canvas:
//!
//! - **Width**: 800 units
//! - **Height**: 600 units
//! - **Catch line**: 560 (the catcher's receiving zone)
//! - **Miss line**: 600 (the floor)
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ITEM_SIZE` | 60 | Horizontal span reserved when placing a new item |
//! | `CATCHER_WIDTH` | 80 | Width of the catcher |
//! | `CATCHER_START_X` | 360 | Catcher starts centered |
//! | `CATCHER_STEP` | 20 | Distance moved per directional command |
//! | `INITIAL_FALL_SPEED` | 3 | Units fallen per tick at session start |
//! | `SPEED_INCREMENT_INTERVAL` | 5 | Every Nth point speeds the item up by 1 |
//! | `MISS_LIMIT` | 5 | Misses that end the session |
//! | `MISS_NOTICE_MS` | 1000 | Lifetime of the "missed" banner |
//! | `FRAME_MS` | 16 | Frame budget (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use egg_catch_types::{ElementId, Key, InputEvent, SURFACE_WIDTH, CATCHER_WIDTH};
//!
//! assert_eq!(ElementId::Catcher.as_str(), "catcher");
//! assert_eq!(Key::from_char('a'), Key::Char('a'));
//! assert!(matches!(InputEvent::Key(Key::ArrowLeft), InputEvent::Key(_)));
//! assert_eq!(SURFACE_WIDTH - CATCHER_WIDTH, 720.0);
//! ```

/// Play surface width in surface units (800)
pub const SURFACE_WIDTH: f32 = 800.0;

/// Play surface height in surface units (600)
pub const SURFACE_HEIGHT: f32 = 600.0;

/// Horizontal span reserved for the falling item when drawing its x (60)
pub const ITEM_SIZE: f32 = 60.0;

/// Catcher width (80)
pub const CATCHER_WIDTH: f32 = 80.0;

/// Catcher starting x: centered on the surface (360)
pub const CATCHER_START_X: f32 = (SURFACE_WIDTH - CATCHER_WIDTH) / 2.0;

/// Distance moved by one directional command (20)
pub const CATCHER_STEP: f32 = 20.0;

/// Vertical coordinate of the catcher's receiving zone (560)
pub const CATCH_LINE: f32 = 560.0;

/// Vertical coordinate past which an item counts as missed (600)
pub const MISS_LINE: f32 = 600.0;

/// Falling speed at session start, in units per tick (3)
pub const INITIAL_FALL_SPEED: f32 = 3.0;

/// Every Nth point increases the falling speed by one (5)
pub const SPEED_INCREMENT_INTERVAL: u32 = 5;

/// Number of misses that ends the session (5)
pub const MISS_LIMIT: u32 = 5;

/// Lifetime of the "missed" banner in milliseconds (1000)
pub const MISS_NOTICE_MS: u32 = 1000;

/// Host x coordinate where the surface starts, used to map pointer positions (360)
pub const POINTER_ORIGIN_X: f32 = 360.0;

/// Frame budget in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_parity_defaults() {
        assert_eq!(SURFACE_WIDTH, 800.0);
        assert_eq!(CATCHER_START_X, 360.0);
        assert_eq!(CATCH_LINE, 560.0);
        assert_eq!(MISS_LINE, 600.0);
        assert_eq!(CATCHER_STEP, 20.0);
        assert_eq!(INITIAL_FALL_SPEED, 3.0);
        assert_eq!(SPEED_INCREMENT_INTERVAL, 5);
        assert_eq!(MISS_LIMIT, 5);
        assert_eq!(MISS_NOTICE_MS, 1000);
        assert!(CATCH_LINE < MISS_LINE);
    }

    #[test]
    fn element_ids_index_their_slot() {
        for (i, id) in ElementId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn geometry_maps_columns_to_host_units() {
        let geo = SurfaceGeometry {
            origin_col: 1,
            origin_row: 2,
            cols: 80,
            rows: 30,
            units_per_col: 10.0,
            units_per_row: 20.0,
            host_origin_x: 360.0,
        };

        // Column 1 is the first interior column; its center is 5 units in.
        assert_eq!(geo.host_x(1), 365.0);
        assert_eq!(geo.host_x(11), 465.0);
        assert_eq!(geo.col_of(0.0), Some(0));
        assert_eq!(geo.col_of(799.0), Some(79));
        assert_eq!(geo.col_of(800.0), None);
        assert_eq!(geo.row_of(560.0), Some(28));
        assert_eq!(geo.row_of(600.0), None);
    }
}

/// Visual elements the simulation projects onto a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// The falling item (position + label)
    Item,
    /// The catcher (position)
    Catcher,
    /// Score counter text
    Score,
    /// Miss counter text
    Misses,
    /// Transient "missed" banner
    MissNotice,
    /// Session-ended overlay
    GameOver,
}

impl ElementId {
    /// Number of distinct elements.
    pub const COUNT: usize = 6;

    /// All elements, in slot order.
    pub const ALL: [ElementId; Self::COUNT] = [
        ElementId::Item,
        ElementId::Catcher,
        ElementId::Score,
        ElementId::Misses,
        ElementId::MissNotice,
        ElementId::GameOver,
    ];

    /// Stable slot index, usable for fixed-size element tables.
    pub fn index(&self) -> usize {
        match self {
            ElementId::Item => 0,
            ElementId::Catcher => 1,
            ElementId::Score => 2,
            ElementId::Misses => 3,
            ElementId::MissNotice => 4,
            ElementId::GameOver => 5,
        }
    }

    /// Convert to a lowercase identifier (for logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::Item => "item",
            ElementId::Catcher => "catcher",
            ElementId::Score => "score",
            ElementId::Misses => "misses",
            ElementId::MissNotice => "miss_notice",
            ElementId::GameOver => "game_over",
        }
    }
}

/// A key press as seen by the game.
///
/// Only the keys the game reacts to are distinguished; everything else is
/// dropped by the input mapping before it reaches the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character, case preserved
    Char(char),
    ArrowLeft,
    ArrowRight,
}

impl Key {
    pub fn from_char(ch: char) -> Self {
        Key::Char(ch)
    }

    /// Whether this key is one of the "move left" bindings (ArrowLeft, `a`, `A`).
    pub fn is_left(&self) -> bool {
        matches!(self, Key::ArrowLeft | Key::Char('a') | Key::Char('A'))
    }

    /// Whether this key is one of the "move right" bindings (ArrowRight, `d`, `D`).
    pub fn is_right(&self) -> bool {
        matches!(self, Key::ArrowRight | Key::Char('d') | Key::Char('D'))
    }
}

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A pointer event in host coordinates.
///
/// `x` is measured in surface units from the host's left edge; the surface
/// itself starts at the configured pointer origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn new(x: f32, phase: PointerPhase) -> Self {
        Self { x, phase }
    }
}

/// Discrete events delivered by an [`InputSource`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(Key),
    Pointer(PointerEvent),
    /// The user asked to leave the game
    Quit,
}

/// Visual surface the simulation projects its state onto.
///
/// Writes are one-way: nothing in the simulation reads back from a surface.
pub trait Surface {
    fn set_position(&mut self, element: ElementId, x: f32, y: f32);
    fn set_text(&mut self, element: ElementId, text: &str);
    fn set_visible(&mut self, element: ElementId, visible: bool);
}

/// Source of discrete input events.
///
/// Each call hands every event that arrived since the previous call to
/// `handler`, in arrival order, and returns without waiting for new input.
pub trait InputSource {
    fn dispatch(&mut self, handler: &mut dyn FnMut(InputEvent)) -> std::io::Result<()>;
}

/// Placement of the play surface inside a character grid.
///
/// Shared by the renderer (surface → cells) and the pointer mapping
/// (cells → host coordinates) so both agree on the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    /// Column of the first interior (playfield) cell
    pub origin_col: u16,
    /// Row of the first interior (playfield) cell
    pub origin_row: u16,
    /// Interior width in columns
    pub cols: u16,
    /// Interior height in rows
    pub rows: u16,
    pub units_per_col: f32,
    pub units_per_row: f32,
    /// Host x where the surface starts
    pub host_origin_x: f32,
}

impl SurfaceGeometry {
    /// Interior column for a surface x, or `None` when outside the surface.
    pub fn col_of(&self, x: f32) -> Option<u16> {
        if x < 0.0 {
            return None;
        }
        let col = (x / self.units_per_col) as u32;
        if col >= self.cols as u32 {
            return None;
        }
        Some(col as u16)
    }

    /// Interior row for a surface y, or `None` when outside the surface.
    pub fn row_of(&self, y: f32) -> Option<u16> {
        if y < 0.0 {
            return None;
        }
        let row = (y / self.units_per_row) as u32;
        if row >= self.rows as u32 {
            return None;
        }
        Some(row as u16)
    }

    /// Host x at the center of an absolute terminal column.
    pub fn host_x(&self, column: u16) -> f32 {
        let rel = column as f32 - self.origin_col as f32;
        self.host_origin_x + rel * self.units_per_col + self.units_per_col / 2.0
    }
}
