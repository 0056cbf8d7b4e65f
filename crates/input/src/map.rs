//! Mapping from terminal events to game input events.

use crate::types::{InputEvent, Key, PointerEvent, PointerPhase, SurfaceGeometry};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map keyboard input to game input.
///
/// Auto-repeat is kept: holding an arrow keeps the catcher moving, the
/// same way a browser keeps firing keydown.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(InputEvent::Key(Key::ArrowLeft)),
        KeyCode::Right => Some(InputEvent::Key(Key::ArrowRight)),
        KeyCode::Char(ch) => Some(InputEvent::Key(Key::from_char(ch))),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Letters are never quit keys: any of them can be the falling item's label.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map mouse input to a pointer event in host coordinates.
///
/// Presses only start a gesture on the catcher's row (one row of slack on
/// each side); `catcher_row` is the absolute terminal row the catcher is
/// drawn on, if visible.
pub fn map_mouse_event(
    mouse: MouseEvent,
    geometry: &SurfaceGeometry,
    catcher_row: Option<u16>,
) -> Option<PointerEvent> {
    let x = geometry.host_x(mouse.column);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let row = catcher_row?;
            if mouse.row.abs_diff(row) <= 1 {
                Some(PointerEvent::new(x, PointerPhase::Down))
            } else {
                None
            }
        }
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(PointerEvent::new(x, PointerPhase::Move))
        }
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::new(x, PointerPhase::Up)),
        _ => None,
    }
}
