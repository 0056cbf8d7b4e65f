//! Frame schedulers: decide when the next frame runs.

use std::thread;
use std::time::{Duration, Instant};

/// Drives the frame loop.
pub trait FrameScheduler {
    /// Wait for the next frame and return the milliseconds elapsed since the
    /// previous one, or `None` when no more frames will be scheduled.
    fn next_frame(&mut self) -> Option<u32>;
}

/// Real-time scheduler with a fixed frame budget.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    frame: Duration,
    last: Instant,
}

impl IntervalScheduler {
    pub fn new(frame_ms: u32) -> Self {
        Self {
            frame: Duration::from_millis(frame_ms.max(1) as u64),
            last: Instant::now(),
        }
    }
}

impl FrameScheduler for IntervalScheduler {
    fn next_frame(&mut self) -> Option<u32> {
        if let Some(wait) = self.frame.checked_sub(self.last.elapsed()) {
            thread::sleep(wait);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        Some(elapsed.as_millis().min(u32::MAX as u128) as u32)
    }
}

/// Deterministic scheduler: every frame is `step_ms` long and nothing sleeps.
#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    step_ms: u32,
    remaining: Option<u64>,
}

impl FixedStepScheduler {
    /// Unlimited frames.
    pub fn new(step_ms: u32) -> Self {
        Self {
            step_ms,
            remaining: None,
        }
    }

    /// At most `frames` more frames after the first.
    pub fn with_limit(step_ms: u32, frames: u64) -> Self {
        Self {
            step_ms,
            remaining: Some(frames),
        }
    }
}

impl FrameScheduler for FixedStepScheduler {
    fn next_frame(&mut self) -> Option<u32> {
        match self.remaining {
            Some(0) => None,
            Some(ref mut n) => {
                *n -= 1;
                Some(self.step_ms)
            }
            None => Some(self.step_ms),
        }
    }
}
