//! The falling item: one labelled target dropping down the surface.

use crate::catcher::Catcher;
use crate::config::GameConfig;
use crate::rng::ItemRng;

/// A falling target.
///
/// The item is created once per session and recycled through [`reset`]
/// after every catch or miss.
///
/// [`reset`]: FallingItem::reset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingItem {
    /// Distance fallen since the last reset
    pub(crate) y: f32,
    /// Left edge, fixed for the current drop
    pub(crate) x: f32,
    pub(crate) label: char,
    /// Units per tick; only ever grows
    fall_speed: f32,
    max_x: f32,
    catch_line: f32,
    miss_line: f32,
}

impl FallingItem {
    /// Create the session's item and place its first drop.
    pub fn new(config: &GameConfig, rng: &mut ItemRng) -> Self {
        let mut item = Self {
            y: 0.0,
            x: 0.0,
            label: 'a',
            fall_speed: config.initial_fall_speed,
            max_x: config.item_max_x(),
            catch_line: config.catch_line,
            miss_line: config.miss_line,
        };
        item.reset(rng);
        item
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn label(&self) -> char {
        self.label
    }

    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    /// Start a new drop: back to the top, new column, new letter.
    pub fn reset(&mut self, rng: &mut ItemRng) {
        self.y = 0.0;
        self.x = rng.next_x(self.max_x);
        self.label = rng.next_label();
    }

    /// Fall one tick.
    pub fn advance(&mut self) {
        self.y += self.fall_speed;
    }

    /// Reached the catch line while over the catcher.
    pub fn is_caught(&self, catcher: &Catcher) -> bool {
        self.y >= self.catch_line && catcher.covers(self.x)
    }

    /// Reached the floor.
    pub fn is_missed(&self) -> bool {
        self.y >= self.miss_line
    }

    pub fn increase_speed(&mut self) {
        self.fall_speed += 1.0;
    }
}
