//! Pointer drag gesture for the catcher.
//!
//! idle → (down on catcher) → dragging → (up, anywhere) → idle
//!
//! Moves are coalesced per frame: the first move after a frame flush is
//! queued and later ones are dropped until [`DragGesture::take_update`]
//! runs again.

use crate::catcher::Catcher;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        /// Grab point measured from the catcher's left edge
        grab_offset: f32,
    },
}

/// A coalesced catcher update: feed into [`Catcher::track_pointer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    pub pointer_x: f32,
    pub grab_offset: f32,
}

#[derive(Debug, Clone)]
pub struct DragGesture {
    state: DragState,
    pending: Option<DragUpdate>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer pressed at surface-relative `x`. Starts a drag when the
    /// press lands on the catcher; returns whether it did.
    pub fn pointer_down(&mut self, x: f32, catcher: &Catcher) -> bool {
        if !catcher.covers(x) {
            return false;
        }
        self.state = DragState::Dragging {
            grab_offset: x - catcher.x(),
        };
        true
    }

    /// Pointer moved to surface-relative `x`. Returns whether an update
    /// was queued.
    pub fn pointer_move(&mut self, x: f32) -> bool {
        let DragState::Dragging { grab_offset } = self.state else {
            return false;
        };
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(DragUpdate {
            pointer_x: x,
            grab_offset,
        });
        true
    }

    /// Pointer released. An update queued before the release still applies.
    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }

    /// Take the update queued for this frame, if any.
    pub fn take_update(&mut self) -> Option<DragUpdate> {
        self.pending.take()
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}
