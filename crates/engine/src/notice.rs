//! Countdown for the transient "missed" banner.
//!
//! The banner is time-based while ticks are frame-based, so the countdown
//! is fed the elapsed frame time and never holds up a tick.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissNotice {
    remaining_ms: Option<u32>,
}

impl MissNotice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the banner for `duration_ms`. Arming again while it is up
    /// restarts the countdown.
    pub fn arm(&mut self, duration_ms: u32) {
        self.remaining_ms = Some(duration_ms);
    }

    pub fn is_visible(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Count down by `elapsed_ms`. Returns `true` on the call where the
    /// banner expires, and only then.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        match self.remaining_ms {
            Some(left) if elapsed_ms >= left => {
                self.remaining_ms = None;
                true
            }
            Some(left) => {
                self.remaining_ms = Some(left - elapsed_ms);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_duration() {
        let mut notice = MissNotice::new();
        notice.arm(1000);
        assert!(notice.is_visible());

        assert!(!notice.advance(600));
        assert!(notice.advance(400));
        assert!(!notice.is_visible());
        assert!(!notice.advance(16));
    }

    #[test]
    fn rearm_restarts_countdown() {
        let mut notice = MissNotice::new();
        notice.arm(1000);
        assert!(!notice.advance(900));

        notice.arm(1000);
        assert!(!notice.advance(900));
        assert!(notice.is_visible());
        assert!(notice.advance(100));
    }

    #[test]
    fn idle_notice_never_fires() {
        let mut notice = MissNotice::new();
        assert!(!notice.advance(5000));
    }
}
