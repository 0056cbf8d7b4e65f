//! Session: one game from the first frame to the end of the round.
//!
//! A session owns its [`RoundController`] together with the injected
//! surface and input source, so any number of sessions can coexist (the
//! terminal front end runs one at a time; tests run many).
//!
//! Per frame:
//! 1. dispatch pending input to the round
//! 2. apply the coalesced drag update
//! 3. tick
//! 4. count down the miss banner, then apply the tick's notifications
//! 5. project the round onto the surface

use anyhow::Result;

use crate::core::{ConfigError, Flow, GameConfig, RoundController, RoundEvent};
use crate::notice::MissNotice;
use crate::scheduler::FrameScheduler;
use crate::types::{ElementId, InputEvent, InputSource, Surface};

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The miss limit was reached
    Lost { score: u32, misses: u32 },
    /// The player asked to quit
    Quit { score: u32 },
    /// The scheduler stopped handing out frames
    Stopped { score: u32 },
}

pub struct Session<S: Surface, I: InputSource> {
    round: RoundController,
    surface: S,
    input: I,
    notice: MissNotice,
    quit: bool,
    frames: u64,
}

impl<S: Surface, I: InputSource> Session<S, I> {
    /// Start a session and show its initial state on `surface`.
    pub fn new(
        config: GameConfig,
        seed: u64,
        mut surface: S,
        input: I,
    ) -> Result<Self, ConfigError> {
        let round = RoundController::new(config, seed)?;
        surface.set_visible(ElementId::MissNotice, false);
        surface.set_visible(ElementId::GameOver, false);
        round.project(&mut surface);
        log::info!("session started (seed {seed})");

        Ok(Self {
            round,
            surface,
            input,
            notice: MissNotice::new(),
            quit: false,
            frames: 0,
        })
    }

    pub fn round(&self) -> &RoundController {
        &self.round
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn miss_notice_visible(&self) -> bool {
        self.notice.is_visible()
    }

    /// Hand back the surface and input source.
    pub fn into_parts(self) -> (S, I) {
        (self.surface, self.input)
    }

    /// Run one frame. `elapsed_ms` is the time since the previous frame.
    pub fn frame(&mut self, elapsed_ms: u32) -> Result<Flow> {
        if self.round.is_terminal() || self.quit {
            return Ok(Flow::Terminal);
        }
        self.frames += 1;

        let round = &mut self.round;
        let quit = &mut self.quit;
        self.input.dispatch(&mut |event| match event {
            InputEvent::Quit => *quit = true,
            other => round.handle_input(other),
        })?;
        if self.quit {
            log::info!("quit requested at frame {}", self.frames);
            return Ok(Flow::Terminal);
        }

        self.round.apply_drag();
        let outcome = self.round.tick();

        if self.notice.advance(elapsed_ms) {
            self.surface.set_visible(ElementId::MissNotice, false);
        }

        for event in &outcome.events {
            match *event {
                RoundEvent::Caught {
                    score,
                    speed_increased,
                } => {
                    log::debug!("caught (score {score}, speed up: {speed_increased})");
                }
                RoundEvent::Missed { misses } => {
                    log::debug!("missed ({misses}/{})", self.round.config().miss_limit);
                    self.notice.arm(self.round.config().miss_notice_ms);
                    self.surface.set_visible(ElementId::MissNotice, true);
                }
                RoundEvent::Ended { score, .. } => {
                    let text = format!("You lose! Score: {score}");
                    self.surface.set_text(ElementId::GameOver, &text);
                    self.surface.set_visible(ElementId::GameOver, true);
                }
            }
        }

        self.round.project(&mut self.surface);
        Ok(outcome.flow)
    }

    /// Drive frames from `scheduler` until the round ends, the player
    /// quits, or the scheduler stops. `present` runs after every frame.
    pub fn run<F, P>(&mut self, scheduler: &mut F, mut present: P) -> Result<SessionEnd>
    where
        F: FrameScheduler + ?Sized,
        P: FnMut(&mut S, &mut I) -> Result<()>,
    {
        let mut elapsed_ms = 0;
        loop {
            let flow = self.frame(elapsed_ms)?;
            present(&mut self.surface, &mut self.input)?;

            let score = self.round.score();
            if self.quit {
                return Ok(SessionEnd::Quit { score });
            }
            if flow == Flow::Terminal {
                return Ok(SessionEnd::Lost {
                    score,
                    misses: self.round.misses(),
                });
            }

            match scheduler.next_frame() {
                Some(ms) => elapsed_ms = ms,
                None => return Ok(SessionEnd::Stopped { score }),
            }
        }
    }
}
