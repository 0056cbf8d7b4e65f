//! Terminal-backed input source.
//!
//! Events are pulled from crossterm without blocking, translated, and held
//! in a fixed-capacity queue until the next [`InputSource::dispatch`].

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{map_key_event, map_mouse_event, should_quit};
use crate::types::{InputEvent, InputSource, SurfaceGeometry};

const QUEUE_CAPACITY: usize = 64;

/// Answer to the end-of-session prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    Restart,
    Quit,
}

impl Ack {
    /// The answer carried by `event`, if it is a key press.
    pub fn from_event(event: &Event) -> Option<Ack> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(if should_quit(*key) {
                Ack::Quit
            } else {
                Ack::Restart
            }),
            _ => None,
        }
    }
}

/// Where terminal events come from.
pub trait EventReader {
    /// Whether an event can be read without blocking.
    fn ready(&mut self) -> io::Result<bool>;
    /// Next event; blocks until one arrives.
    fn read(&mut self) -> io::Result<Event>;
}

/// The process terminal, through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermEvents;

impl EventReader for CrosstermEvents {
    fn ready(&mut self) -> io::Result<bool> {
        event::poll(Duration::ZERO)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

#[derive(Debug, Clone)]
pub struct TerminalInput<R: EventReader = CrosstermEvents> {
    reader: R,
    geometry: Option<SurfaceGeometry>,
    catch_line: f32,
    queue: ArrayVec<InputEvent, QUEUE_CAPACITY>,
    resized: bool,
}

impl TerminalInput {
    /// `catch_line` locates the catcher's row for pointer presses.
    pub fn new(catch_line: f32) -> Self {
        Self::with_reader(catch_line, CrosstermEvents)
    }
}

impl<R: EventReader> TerminalInput<R> {
    pub fn with_reader(catch_line: f32, reader: R) -> Self {
        Self {
            reader,
            geometry: None,
            catch_line,
            queue: ArrayVec::new(),
            resized: false,
        }
    }

    /// Update the layout used to translate mouse positions.
    ///
    /// Until a geometry is set, mouse events are dropped.
    pub fn set_geometry(&mut self, geometry: SurfaceGeometry) {
        self.geometry = Some(geometry);
    }

    /// Whether the terminal was resized since the last call.
    pub fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }

    /// Translate one terminal event into the queue.
    ///
    /// Events beyond the queue capacity are dropped.
    pub fn translate(&mut self, event: Event) {
        let mapped = match event {
            Event::Key(key) => map_key_event(key),
            Event::Mouse(mouse) => self.geometry.and_then(|geo| {
                let catcher_row = geo
                    .row_of(self.catch_line)
                    .map(|row| geo.origin_row + row);
                map_mouse_event(mouse, &geo, catcher_row).map(InputEvent::Pointer)
            }),
            Event::Resize(_, _) => {
                self.resized = true;
                None
            }
            _ => None,
        };

        if let Some(ev) = mapped {
            let _ = self.queue.try_push(ev);
        }
    }

    /// Block until the player acknowledges the end of a session.
    ///
    /// Input that was already waiting when the session ended (held arrows,
    /// labels typed during the last drop) does not count as an answer.
    pub fn wait_for_ack(&mut self) -> io::Result<Ack> {
        self.queue.clear();
        while self.reader.ready()? {
            if let Event::Resize(_, _) = self.reader.read()? {
                self.resized = true;
            }
        }

        loop {
            let ev = self.reader.read()?;
            if let Some(ack) = Ack::from_event(&ev) {
                return Ok(ack);
            }
            if let Event::Resize(_, _) = ev {
                self.resized = true;
            }
        }
    }

    fn pump(&mut self) -> io::Result<()> {
        while self.reader.ready()? {
            let ev = self.reader.read()?;
            self.translate(ev);
        }
        Ok(())
    }
}

impl<R: EventReader> InputSource for TerminalInput<R> {
    fn dispatch(&mut self, handler: &mut dyn FnMut(InputEvent)) -> io::Result<()> {
        self.pump()?;
        for ev in self.queue.drain(..) {
            handler(ev);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::types::{Key, PointerPhase};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    /// `waiting` is readable right away; `later` only arrives once the
    /// reader blocks.
    #[derive(Debug, Default)]
    struct Scripted {
        waiting: VecDeque<Event>,
        later: VecDeque<Event>,
    }

    impl EventReader for Scripted {
        fn ready(&mut self) -> io::Result<bool> {
            Ok(!self.waiting.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.waiting
                .pop_front()
                .or_else(|| self.later.pop_front())
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    fn scripted(waiting: Vec<Event>, later: Vec<Event>) -> TerminalInput<Scripted> {
        TerminalInput::with_reader(
            560.0,
            Scripted {
                waiting: waiting.into(),
                later: later.into(),
            },
        )
    }

    fn geometry() -> SurfaceGeometry {
        SurfaceGeometry {
            origin_col: 1,
            origin_row: 2,
            cols: 80,
            rows: 30,
            units_per_col: 10.0,
            units_per_row: 20.0,
            host_origin_x: 360.0,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_translate_queues_in_order() {
        let mut input = TerminalInput::new(560.0);
        input.translate(Event::Key(KeyEvent::from(KeyCode::Left)));
        input.translate(Event::Key(KeyEvent::from(KeyCode::Char('x'))));

        assert_eq!(
            input.queue.as_slice(),
            &[
                InputEvent::Key(Key::ArrowLeft),
                InputEvent::Key(Key::Char('x'))
            ]
        );
    }

    #[test]
    fn test_mouse_needs_geometry() {
        let mut input = TerminalInput::new(560.0);
        input.translate(mouse(MouseEventKind::Moved, 10, 10));
        assert!(input.queue.is_empty());

        input.set_geometry(geometry());
        input.translate(mouse(MouseEventKind::Moved, 10, 10));
        assert_eq!(input.queue.len(), 1);
    }

    #[test]
    fn test_press_uses_catch_line_row() {
        let mut input = TerminalInput::new(560.0);
        input.set_geometry(geometry());

        // 560 / 20 = row 28 inside the playfield, row 30 on screen.
        input.translate(mouse(MouseEventKind::Down(MouseButton::Left), 40, 30));
        input.translate(mouse(MouseEventKind::Down(MouseButton::Left), 40, 10));

        assert_eq!(input.queue.len(), 1);
        assert!(matches!(
            input.queue[0],
            InputEvent::Pointer(p) if p.phase == PointerPhase::Down
        ));
    }

    #[test]
    fn test_resize_is_flagged_once() {
        let mut input = TerminalInput::new(560.0);
        input.translate(Event::Resize(100, 40));
        assert!(input.take_resized());
        assert!(!input.take_resized());
    }

    #[test]
    fn test_queue_overflow_drops_extra_events() {
        let mut input = TerminalInput::new(560.0);
        for _ in 0..(QUEUE_CAPACITY + 10) {
            input.translate(Event::Key(KeyEvent::from(KeyCode::Right)));
        }
        assert_eq!(input.queue.len(), QUEUE_CAPACITY);
    }

    #[test]
    fn test_ack_ignores_keys_pending_at_game_over() {
        let held = vec![key(KeyCode::Left), key(KeyCode::Left), key(KeyCode::Char('q'))];
        let mut input = scripted(held, vec![key(KeyCode::Esc)]);

        assert_eq!(input.wait_for_ack().unwrap(), Ack::Quit);
        assert!(input.reader.waiting.is_empty());
    }

    #[test]
    fn test_ack_waits_for_a_fresh_press() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('y'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        let mut input = scripted(
            vec![key(KeyCode::Char('x'))],
            vec![release, Event::Resize(90, 40), key(KeyCode::Char('y'))],
        );

        assert_eq!(input.wait_for_ack().unwrap(), Ack::Restart);
        assert!(input.take_resized());
    }

    #[test]
    fn test_ack_never_answers_from_stale_input_alone() {
        let mut input = scripted(vec![key(KeyCode::Right)], vec![]);
        assert!(input.wait_for_ack().is_err());
    }

    #[test]
    fn test_ack_from_event() {
        assert_eq!(Ack::from_event(&key(KeyCode::Esc)), Some(Ack::Quit));
        assert_eq!(Ack::from_event(&key(KeyCode::Char('r'))), Some(Ack::Restart));
        assert_eq!(Ack::from_event(&mouse(MouseEventKind::Moved, 1, 1)), None);
    }

    #[test]
    fn test_dispatch_drains_reader_in_order() {
        let mut input = scripted(
            vec![key(KeyCode::Left), Event::Resize(10, 10), key(KeyCode::Char('k'))],
            vec![key(KeyCode::Right)],
        );

        let mut seen = Vec::new();
        input.dispatch(&mut |ev| seen.push(ev)).unwrap();

        assert_eq!(
            seen,
            vec![
                InputEvent::Key(Key::ArrowLeft),
                InputEvent::Key(Key::Char('k'))
            ]
        );
        // Nothing blocks: the later event stays unread.
        assert_eq!(input.reader.later.len(), 1);
        assert!(input.take_resized());
    }
}
