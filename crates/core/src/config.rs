//! Game configuration.
//!
//! Every tunable number of a session lives here. The values are independent:
//! changing the surface size does not rescale the catch line or the speeds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{
    CATCHER_STEP, CATCHER_WIDTH, CATCH_LINE, INITIAL_FALL_SPEED, ITEM_SIZE, MISS_LIMIT, MISS_LINE,
    MISS_NOTICE_MS, POINTER_ORIGIN_X, SPEED_INCREMENT_INTERVAL, SURFACE_HEIGHT, SURFACE_WIDTH,
};

/// Session configuration.
///
/// Missing fields fall back to the defaults when deserializing, so a config
/// file only needs to name the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub surface_width: f32,
    pub surface_height: f32,
    pub item_size: f32,
    pub catcher_width: f32,
    pub catch_line: f32,
    pub miss_line: f32,
    pub initial_fall_speed: f32,
    pub catcher_step: f32,
    pub speed_increment_interval: u32,
    pub miss_limit: u32,
    pub miss_notice_ms: u32,
    pub pointer_origin_x: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            item_size: ITEM_SIZE,
            catcher_width: CATCHER_WIDTH,
            catch_line: CATCH_LINE,
            miss_line: MISS_LINE,
            initial_fall_speed: INITIAL_FALL_SPEED,
            catcher_step: CATCHER_STEP,
            speed_increment_interval: SPEED_INCREMENT_INTERVAL,
            miss_limit: MISS_LIMIT,
            miss_notice_ms: MISS_NOTICE_MS,
            pointer_origin_x: POINTER_ORIGIN_X,
        }
    }
}

impl GameConfig {
    /// Check the relationships the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("catcher_width", self.catcher_width),
            ("initial_fall_speed", self.initial_fall_speed),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field: name, value });
            }
        }
        if !(self.item_size >= 0.0 && self.item_size < self.surface_width) {
            return Err(ConfigError::ItemTooWide {
                item_size: self.item_size,
                surface_width: self.surface_width,
            });
        }
        if self.catcher_width > self.surface_width {
            return Err(ConfigError::CatcherTooWide {
                catcher_width: self.catcher_width,
                surface_width: self.surface_width,
            });
        }
        if !(self.miss_line > self.catch_line) {
            return Err(ConfigError::MissLineNotBelowCatchLine {
                catch_line: self.catch_line,
                miss_line: self.miss_line,
            });
        }
        if self.speed_increment_interval == 0 {
            return Err(ConfigError::Zero {
                field: "speed_increment_interval",
            });
        }
        if self.miss_limit == 0 {
            return Err(ConfigError::Zero { field: "miss_limit" });
        }
        Ok(())
    }

    /// Rightmost catcher x.
    pub fn catcher_max_x(&self) -> f32 {
        (self.surface_width - self.catcher_width).max(0.0)
    }

    /// Exclusive upper bound for a freshly drawn item x.
    pub fn item_max_x(&self) -> f32 {
        (self.surface_width - self.item_size).max(0.0)
    }
}

/// Reasons a [`GameConfig`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NotPositive { field: &'static str, value: f32 },
    Zero { field: &'static str },
    ItemTooWide { item_size: f32, surface_width: f32 },
    CatcherTooWide { catcher_width: f32, surface_width: f32 },
    MissLineNotBelowCatchLine { catch_line: f32, miss_line: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { field, value } => {
                write!(f, "{field} must be positive (got {value})")
            }
            ConfigError::Zero { field } => write!(f, "{field} must be at least 1"),
            ConfigError::ItemTooWide {
                item_size,
                surface_width,
            } => write!(
                f,
                "item_size {item_size} must be in [0, surface_width {surface_width})"
            ),
            ConfigError::CatcherTooWide {
                catcher_width,
                surface_width,
            } => write!(
                f,
                "catcher_width {catcher_width} exceeds surface_width {surface_width}"
            ),
            ConfigError::MissLineNotBelowCatchLine {
                catch_line,
                miss_line,
            } => write!(
                f,
                "miss_line {miss_line} must be greater than catch_line {catch_line}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
