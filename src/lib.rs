//! Egg catch (workspace facade crate).
//!
//! Re-exports the `egg_catch::{core,engine,input,term,types}` API while the
//! implementation lives in dedicated crates under `crates/`.

pub use egg_catch_core as core;
pub use egg_catch_engine as engine;
pub use egg_catch_input as input;
pub use egg_catch_term as term;
pub use egg_catch_types as types;
