//! GameView: maps a [`SceneSurface`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::scene::SceneSurface;
use crate::types::{
    ElementId, SurfaceGeometry, CATCHER_WIDTH, POINTER_ORIGIN_X, SURFACE_HEIGHT, SURFACE_WIDTH,
};

const ACK_HINT: &str = "any key: play again   Esc: quit";

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const MISS_BG: Rgb = Rgb::new(90, 20, 24);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the play surface.
#[derive(Debug, Clone)]
pub struct GameView {
    surface_width: f32,
    surface_height: f32,
    catcher_width: f32,
    pointer_origin_x: f32,
    /// Finest scale: surface units per terminal column.
    units_per_col: f32,
    /// Finest scale: surface units per terminal row.
    units_per_row: f32,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 10x20 gives an 80x30 playfield and roughly square cells.
        Self::new(SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

impl GameView {
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        Self {
            surface_width,
            surface_height,
            catcher_width: CATCHER_WIDTH,
            pointer_origin_x: POINTER_ORIGIN_X,
            units_per_col: 10.0,
            units_per_row: 20.0,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_catcher_width(mut self, width: f32) -> Self {
        self.catcher_width = width;
        self
    }

    pub fn with_pointer_origin_x(mut self, x: f32) -> Self {
        self.pointer_origin_x = x;
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the playfield goes in `viewport`, or `None` if it cannot fit.
    ///
    /// The playfield shrinks (coarser units per cell) when the terminal is
    /// smaller than the preferred size. One row above the frame is kept for
    /// the score line.
    pub fn geometry(&self, viewport: Viewport) -> Option<SurfaceGeometry> {
        let want_cols = (self.surface_width / self.units_per_col).ceil() as u16;
        let want_rows = (self.surface_height / self.units_per_row).ceil() as u16;
        let cols = want_cols.min(viewport.width.saturating_sub(2));
        let rows = want_rows.min(viewport.height.saturating_sub(3));
        if cols < 8 || rows < 4 {
            return None;
        }

        let frame_w = cols + 2;
        let total_h = rows + 3;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        Some(SurfaceGeometry {
            origin_col: start_x + 1,
            origin_row: start_y + 2,
            cols,
            rows,
            units_per_col: self.surface_width / cols as f32,
            units_per_row: self.surface_height / rows as f32,
            host_origin_x: self.pointer_origin_x,
        })
    }

    /// Render the scene into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, scene: &SceneSurface, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let Some(geo) = self.geometry(viewport) else {
            fb.put_str(0, 0, "Terminal too small", CellStyle::default().bold());
            return;
        };

        let missed = scene.is_visible(ElementId::MissNotice);
        let bg = CellStyle::new(Rgb::new(80, 80, 90), if missed { MISS_BG } else { FIELD_BG });
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let frame_x = geo.origin_col - 1;
        let frame_y = geo.origin_row - 1;
        let frame_w = geo.cols + 2;
        let frame_h = geo.rows + 2;

        fb.fill_rect(geo.origin_col, geo.origin_row, geo.cols, geo.rows, ' ', bg);
        self.draw_border(fb, frame_x, frame_y, frame_w, frame_h, border);
        self.draw_hud(fb, scene, frame_x, frame_y - 1, frame_w);

        if scene.is_visible(ElementId::Catcher) {
            self.draw_catcher(fb, scene, &geo, bg.bg);
        }
        if scene.is_visible(ElementId::Item) {
            self.draw_item(fb, scene, &geo, bg.bg);
        }

        if scene.is_visible(ElementId::GameOver) {
            let mid = frame_y + frame_h / 2;
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            self.draw_centered(fb, frame_x, frame_w, mid.saturating_sub(1), scene.text(ElementId::GameOver), style);
            let hint = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)).dim();
            self.draw_centered(fb, frame_x, frame_w, mid + 1, ACK_HINT, hint);
        } else if missed {
            let style = CellStyle::new(Rgb::new(255, 90, 90), MISS_BG).bold();
            let y = geo.origin_row + geo.rows / 3;
            self.draw_centered(fb, frame_x, frame_w, y, scene.text(ElementId::MissNotice), style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &SceneSurface, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Score on the left, misses on the right, on the row above the frame.
    fn draw_hud(&self, fb: &mut FrameBuffer, scene: &SceneSurface, x: u16, y: u16, w: u16) {
        let style = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let right = x + w;

        if scene.is_visible(ElementId::Score) {
            fb.put_str_clipped(x, y, scene.text(ElementId::Score), style, right);
        }
        if scene.is_visible(ElementId::Misses) {
            let text = scene.text(ElementId::Misses);
            let len = text.chars().count() as u16;
            fb.put_str_clipped(right.saturating_sub(len).max(x), y, text, style, right);
        }
    }

    fn draw_catcher(&self, fb: &mut FrameBuffer, scene: &SceneSurface, geo: &SurfaceGeometry, bg: Rgb) {
        let el = scene.get(ElementId::Catcher);
        let Some(row) = geo.row_of(el.y) else {
            return;
        };

        let last_col = geo.cols - 1;
        let c0 = geo.col_of(el.x).unwrap_or(0);
        let right_edge = (el.x + self.catcher_width - 0.001).max(el.x);
        let c1 = geo.col_of(right_edge).unwrap_or(last_col).max(c0);

        let style = CellStyle::new(Rgb::new(230, 170, 90), bg).bold();
        let y = geo.origin_row + row;
        for c in c0..=c1 {
            let ch = if c1 == c0 {
                '▀'
            } else if c == c0 {
                '╰'
            } else if c == c1 {
                '╯'
            } else {
                '─'
            };
            fb.put_char(geo.origin_col + c, y, ch, style);
        }
    }

    fn draw_item(&self, fb: &mut FrameBuffer, scene: &SceneSurface, geo: &SurfaceGeometry, bg: Rgb) {
        let el = scene.get(ElementId::Item);
        let (Some(row), Some(col)) = (geo.row_of(el.y), geo.col_of(el.x)) else {
            return;
        };

        let shell = CellStyle::new(Rgb::new(240, 235, 210), bg);
        let label = CellStyle::new(Rgb::new(255, 220, 80), bg).bold();
        let y = geo.origin_row + row;
        let x = geo.origin_col + col;
        let right = geo.origin_col + geo.cols;

        fb.put_str_clipped(x, y, "(", shell, right);
        fb.put_str_clipped(x + 1, y, scene.text(ElementId::Item), label, right);
        fb.put_str_clipped(x + 2, y, ")", shell, right);
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, frame_x: u16, frame_w: u16, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = frame_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str_clipped(x, y, text, style, frame_x + frame_w);
    }
}
