//! TerminalRenderer: puts game frames on a real terminal.
//!
//! `enter` switches to the alternate screen with mouse reporting on, so
//! drags on the catcher reach the input source; `exit` undoes all of it.
//! Each [`TerminalRenderer::present`] writes only the cells that differ
//! from the frame on screen, or the whole frame after a size change or
//! [`TerminalRenderer::invalidate`].

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// Frame currently on screen; `None` forces a full repaint.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Raw mode, alternate screen, hidden cursor, mouse capture.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        write_setup(&mut self.buf)?;
        self.flush()?;
        self.shown = None;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        write_teardown(&mut self.buf)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Repaint everything on the next present (the terminal was resized or
    /// its contents can no longer be trusted).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Put `fb` on screen.
    ///
    /// `fb` is swapped with the renderer's copy of the previous frame, so
    /// the caller gets a spare buffer back to render the next frame into.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let shown = self.shown.take();
        let base = shown
            .as_ref()
            .filter(|s| s.width() == fb.width() && s.height() == fb.height());

        self.buf.clear();
        encode_frame(base, fb, &mut self.buf)?;
        self.flush()?;

        let mut spare = shown.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut spare, fb);
        self.shown = Some(spare);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

fn write_setup(out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    out.queue(EnableMouseCapture)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    Ok(())
}

fn write_teardown(out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(DisableMouseCapture)?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Encode the commands that turn `base` into `next` on screen.
///
/// With no `base` the screen is cleared and every row is written. Nothing
/// is written when the frames are equal. Returns the number of runs.
pub fn encode_frame(
    base: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> io::Result<usize> {
    if base.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    let mut runs = 0;
    for run in ChangedRuns::new(base, next) {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        for x in run.x..run.x + run.len {
            let cell = next.get(x, run.y).unwrap_or_default();
            pen.apply(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        runs += 1;
    }

    if runs > 0 {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(ResetColor)?;
    }
    Ok(runs)
}

/// Horizontal stretch of cells to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// Row-major runs of cells that differ between two equally sized frames.
/// Without a base frame every row is one run.
pub struct ChangedRuns<'a> {
    base: Option<&'a FrameBuffer>,
    next: &'a FrameBuffer,
    x: u16,
    y: u16,
}

impl<'a> ChangedRuns<'a> {
    pub fn new(base: Option<&'a FrameBuffer>, next: &'a FrameBuffer) -> Self {
        Self {
            base,
            next,
            x: 0,
            y: 0,
        }
    }

    fn dirty(&self, x: u16, y: u16) -> bool {
        self.base.map_or(true, |base| base.get(x, y) != self.next.get(x, y))
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let width = self.next.width();
        while self.y < self.next.height() {
            while self.x < width && !self.dirty(self.x, self.y) {
                self.x += 1;
            }
            if self.x < width {
                let start = self.x;
                while self.x < width && self.dirty(self.x, self.y) {
                    self.x += 1;
                }
                return Some(Run {
                    x: start,
                    y: self.y,
                    len: self.x - start,
                });
            }
            self.x = 0;
            self.y += 1;
        }
        None
    }
}

/// Terminal style state while encoding one frame. Only the parts of a
/// style that differ from the last cell are sent.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    /// (bold, dim) once known
    attrs: Option<(bool, bool)>,
}

impl Pen {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
        let attrs = (style.bold, style.dim);
        if self.attrs != Some(attrs) {
            // SGR reset also drops both colors.
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.attrs = Some(attrs);
            self.fg = None;
            self.bg = None;
        }
        if self.fg != Some(style.fg) {
            out.queue(SetForegroundColor(color(style.fg)))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            out.queue(SetBackgroundColor(color(style.bg)))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
