//! SceneSurface: retained element state written by the simulation.
//!
//! The simulation projects onto this table through [`Surface`]; the
//! [`GameView`](crate::GameView) later turns it into a framebuffer.

use arrayvec::ArrayString;

use crate::types::{ElementId, Surface};

/// Maximum stored text length per element, in bytes.
pub const ELEMENT_TEXT_CAP: usize = 48;

/// Last known state of one visual element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub x: f32,
    pub y: f32,
    pub text: ArrayString<ELEMENT_TEXT_CAP>,
    pub visible: bool,
}

impl Element {
    fn new(text: &str, visible: bool) -> Self {
        let mut el = Self {
            x: 0.0,
            y: 0.0,
            text: ArrayString::new(),
            visible,
        };
        el.set_text(text);
        el
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        for ch in text.chars() {
            if self.text.try_push(ch).is_err() {
                break;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneSurface {
    elements: [Element; ElementId::COUNT],
}

impl SceneSurface {
    pub fn new() -> Self {
        Self {
            elements: ElementId::ALL.map(|id| match id {
                ElementId::Item => Element::new("", true),
                ElementId::Catcher => Element::new("", true),
                ElementId::Score => Element::new("Score: 0", true),
                ElementId::Misses => Element::new("Misses: 0", true),
                ElementId::MissNotice => Element::new("MISSED!", false),
                ElementId::GameOver => Element::new("You lose!", false),
            }),
        }
    }

    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.get(id).visible
    }

    pub fn text(&self, id: ElementId) -> &str {
        self.get(id).text.as_str()
    }

    fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.index()]
    }
}

impl Default for SceneSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for SceneSurface {
    fn set_position(&mut self, element: ElementId, x: f32, y: f32) {
        let el = self.get_mut(element);
        el.x = x;
        el.y = y;
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        self.get_mut(element).set_text(text);
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        self.get_mut(element).visible = visible;
    }
}
