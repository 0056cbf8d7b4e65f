//! Frame driver for egg-catch.
//!
//! [`Session`] wires a [`RoundController`](crate::core::RoundController) to
//! an injected [`Surface`](crate::types::Surface) and
//! [`InputSource`](crate::types::InputSource), and a [`FrameScheduler`]
//! decides when frames run. Nothing here touches the terminal.
//!
//! ```
//! use egg_catch_engine::{FixedStepScheduler, Session, SessionEnd};
//! use egg_catch_engine::core::GameConfig;
//! use egg_catch_engine::types::{ElementId, InputEvent, InputSource, Surface};
//!
//! struct Blank;
//! impl Surface for Blank {
//!     fn set_position(&mut self, _: ElementId, _: f32, _: f32) {}
//!     fn set_text(&mut self, _: ElementId, _: &str) {}
//!     fn set_visible(&mut self, _: ElementId, _: bool) {}
//! }
//!
//! struct Idle;
//! impl InputSource for Idle {
//!     fn dispatch(&mut self, _: &mut dyn FnMut(InputEvent)) -> std::io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut session = Session::new(GameConfig::default(), 1, Blank, Idle).unwrap();
//! let mut sched = FixedStepScheduler::with_limit(16, 99);
//! let end = session.run(&mut sched, |_, _| Ok(())).unwrap();
//! assert_eq!(end, SessionEnd::Stopped { score: 0 });
//! assert_eq!(session.round().ticks(), 100);
//! ```

pub mod notice;
pub mod scheduler;
pub mod session;
pub mod settings;

pub use egg_catch_core as core;
pub use egg_catch_types as types;

pub use notice::MissNotice;
pub use scheduler::{FixedStepScheduler, FrameScheduler, IntervalScheduler};
pub use session::{Session, SessionEnd};
pub use settings::Settings;
