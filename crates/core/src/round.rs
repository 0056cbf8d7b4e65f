//! Round controller - ties the falling item and the catcher together
//!
//! One call to [`RoundController::tick`] advances the simulation by one
//! frame: the item falls, a catch or a miss is resolved, difficulty is
//! adjusted, and the round decides whether it goes on.
//!
//! The controller never touches a display. After mutating state, callers
//! project it onto a [`Surface`] with [`RoundController::project`].

use arrayvec::ArrayVec;

use crate::catcher::Catcher;
use crate::config::{ConfigError, GameConfig};
use crate::drag::DragGesture;
use crate::falling_item::FallingItem;
use crate::rng::ItemRng;
use crate::types::{ElementId, InputEvent, Key, PointerEvent, PointerPhase, Surface};

/// Lifecycle of a round. There is no way back from `Terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Terminal,
}

/// What the frame driver should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminal,
}

/// Notifications produced by a tick, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    Caught { score: u32, speed_increased: bool },
    Missed { misses: u32 },
    Ended { score: u32, misses: u32 },
}

/// Result of one [`RoundController::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub flow: Flow,
    pub events: ArrayVec<RoundEvent, 2>,
}

impl TickOutcome {
    fn terminal() -> Self {
        Self {
            flow: Flow::Terminal,
            events: ArrayVec::new(),
        }
    }
}

/// Complete round state.
#[derive(Debug, Clone)]
pub struct RoundController {
    config: GameConfig,
    item: FallingItem,
    catcher: Catcher,
    drag: DragGesture,
    rng: ItemRng,
    score: u32,
    misses: u32,
    status: RoundStatus,
    /// Ticks simulated so far
    ticks: u64,
}

impl RoundController {
    /// Create a new round with the given RNG seed.
    ///
    /// The config is validated first; the tick relies on a non-zero speed
    /// interval and miss limit.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ItemRng::new(seed);
        let item = FallingItem::new(&config, &mut rng);
        let catcher = Catcher::new(&config);

        Ok(Self {
            config,
            item,
            catcher,
            drag: DragGesture::new(),
            rng,
            score: 0,
            misses: 0,
            status: RoundStatus::Active,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn item(&self) -> &FallingItem {
        &self.item
    }

    pub fn catcher(&self) -> &Catcher {
        &self.catcher
    }

    pub fn drag(&self) -> &DragGesture {
        &self.drag
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status == RoundStatus::Terminal
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Advance the simulation by one frame.
    ///
    /// Once the round is terminal, further ticks change nothing and keep
    /// returning [`Flow::Terminal`].
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_terminal() {
            return TickOutcome::terminal();
        }

        self.ticks += 1;
        let mut events = ArrayVec::new();

        self.item.advance();

        if self.item.is_caught(&self.catcher) {
            self.score += 1;
            let speed_increased = self.score % self.config.speed_increment_interval == 0;
            if speed_increased {
                self.item.increase_speed();
                log::debug!(
                    "score {} reached, fall speed now {}",
                    self.score,
                    self.item.fall_speed()
                );
            }
            self.item.reset(&mut self.rng);
            events.push(RoundEvent::Caught {
                score: self.score,
                speed_increased,
            });
        } else if self.item.is_missed() {
            self.misses += 1;
            self.item.reset(&mut self.rng);
            events.push(RoundEvent::Missed {
                misses: self.misses,
            });
        }

        if self.misses >= self.config.miss_limit {
            self.status = RoundStatus::Terminal;
            log::info!(
                "round over after {} ticks: score {}, misses {}",
                self.ticks,
                self.score,
                self.misses
            );
            events.push(RoundEvent::Ended {
                score: self.score,
                misses: self.misses,
            });
            return TickOutcome {
                flow: Flow::Terminal,
                events,
            };
        }

        TickOutcome {
            flow: Flow::Continue,
            events,
        }
    }

    /// Route one input event. `Quit` is the session's business and is
    /// ignored here, as is everything after the round ended.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key) => {
                self.handle_key(key);
            }
            InputEvent::Pointer(pointer) => self.handle_pointer(pointer),
            InputEvent::Quit => {}
        }
    }

    /// Apply a key press. Returns whether the catcher was commanded.
    ///
    /// Typing the item's letter snaps the catcher under the item; this
    /// takes precedence over the directional bindings.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.is_terminal() {
            return false;
        }

        if key == Key::Char(self.item.label()) {
            self.catcher.move_to_position(self.item.x());
        } else if key.is_left() {
            self.catcher.move_by(-self.config.catcher_step);
        } else if key.is_right() {
            self.catcher.move_by(self.config.catcher_step);
        } else {
            return false;
        }
        true
    }

    /// Feed a pointer event (host coordinates) into the drag gesture.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if self.is_terminal() {
            return;
        }

        let x = event.x - self.config.pointer_origin_x;
        match event.phase {
            PointerPhase::Down => {
                if self.drag.pointer_down(x, &self.catcher) {
                    log::trace!("drag started at {x}");
                }
            }
            PointerPhase::Move => {
                self.drag.pointer_move(x);
            }
            PointerPhase::Up => self.drag.pointer_up(),
        }
    }

    /// Apply this frame's coalesced drag update. Call once per frame.
    pub fn apply_drag(&mut self) -> bool {
        match self.drag.take_update() {
            Some(update) => {
                self.catcher
                    .track_pointer(update.pointer_x, update.grab_offset);
                true
            }
            None => false,
        }
    }

    /// Write the current state onto `surface`.
    pub fn project<S: Surface + ?Sized>(&self, surface: &mut S) {
        let mut label = [0u8; 4];
        surface.set_position(ElementId::Item, self.item.x(), self.item.y());
        surface.set_text(ElementId::Item, self.item.label().encode_utf8(&mut label));
        surface.set_position(ElementId::Catcher, self.catcher.x(), self.config.catch_line);

        let mut text = CounterText::new();
        surface.set_text(ElementId::Score, text.format("Score: ", self.score));
        surface.set_text(ElementId::Misses, text.format("Misses: ", self.misses));
    }
}

/// Stack buffer for "<prefix><n>" counter labels.
struct CounterText {
    buf: arrayvec::ArrayString<32>,
}

impl CounterText {
    fn new() -> Self {
        Self {
            buf: arrayvec::ArrayString::new(),
        }
    }

    fn format(&mut self, prefix: &str, n: u32) -> &str {
        use std::fmt::Write;

        self.buf.clear();
        let _ = write!(self.buf, "{prefix}{n}");
        self.buf.as_str()
    }
}
