/// Character-cell canvas that stands in for a pixel window
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wirecube_core::{Rgba, ScreenPoint, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    character: char,
    fg: Rgba,
    bg: Rgba,
}

impl Cell {
    fn blank(bg: Rgba) -> Self {
        Self {
            character: ' ',
            fg: bg,
            bg,
        }
    }
}

fn to_color(color: Rgba) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Maps a logical pixel area (e.g. 800x600) onto the terminal's cells and
/// writes the result through `out` on `present`.
pub struct TerminalCanvas<W: Write> {
    width: u32,
    height: u32,
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    background: Rgba,
    draw_color: Rgba,
    out: W,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(width: u32, height: u32, cols: u16, rows: u16, out: W) -> Self {
        let background = Rgba::rgb(0, 0, 0);
        let (cols, rows) = (cols.max(1) as usize, rows.max(1) as usize);
        Self {
            width: width.max(1),
            height: height.max(1),
            cols,
            rows,
            cells: vec![Cell::blank(background); cols * rows],
            background,
            draw_color: Rgba::rgb(255, 255, 255),
            out,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1) as usize;
        self.rows = rows.max(1) as usize;
        self.cells = vec![Cell::blank(self.background); self.cols * self.rows];
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Character at a cell, for inspection
    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col].character)
        } else {
            None
        }
    }

    /// Logical pixel to fractional cell coordinates
    fn to_cell(&self, point: ScreenPoint) -> (f64, f64) {
        (
            point.x as f64 * self.cols as f64 / self.width as f64,
            point.y as f64 * self.rows as f64 / self.height as f64,
        )
    }

    fn plot(&mut self, col: i64, row: i64, character: char, fg: Rgba) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        let cell = &mut self.cells[row as usize * self.cols + col as usize];
        cell.character = character;
        cell.fg = fg;
    }

    /// Write the whole canvas out, one terminal row at a time
    pub fn draw(&mut self) -> std::io::Result<()> {
        let mut current: Option<(Rgba, Rgba)> = None;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                let cell = self.cells[row * self.cols + col];
                if current != Some((cell.fg, cell.bg)) {
                    self.out.queue(SetForegroundColor(to_color(cell.fg)))?;
                    self.out.queue(SetBackgroundColor(to_color(cell.bg)))?;
                    current = Some((cell.fg, cell.bg));
                }
                self.out.queue(Print(cell.character))?;
            }
        }
        self.out.queue(ResetColor)?;
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalCanvas<W> {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// One terminal cell, rounded up so text always fits
    fn text_metrics(&self) -> (i32, i32) {
        let glyph_width = (self.width as usize).div_ceil(self.cols);
        let line_height = (self.height as usize).div_ceil(self.rows);
        (glyph_width as i32, line_height as i32)
    }

    fn clear(&mut self, color: Rgba) {
        self.background = color;
        for cell in &mut self.cells {
            *cell = Cell::blank(color);
        }
    }

    fn set_draw_color(&mut self, color: Rgba) {
        self.draw_color = color;
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint) {
        let max_col = (self.cols - 1) as f64;
        let max_row = (self.rows - 1) as f64;
        let Some(((x0, y0), (x1, y1))) =
            clip_line(self.to_cell(from), self.to_cell(to), max_col, max_row)
        else {
            return;
        };

        let (x0, y0) = (x0.round() as i64, y0.round() as i64);
        let (x1, y1) = (x1.round() as i64, y1.round() as i64);
        let character = line_glyph(x1 - x0, y1 - y0);
        let color = self.draw_color;

        // Bresenham
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.plot(x, y, character, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Rgba, bg: Rgba) {
        let (col, row) = self.to_cell(ScreenPoint::new(x, y));
        let (col, row) = (col.floor() as i64, row.floor() as i64);
        if row < 0 || row >= self.rows as i64 {
            return;
        }
        for (offset, character) in text.chars().enumerate() {
            let col = col + offset as i64;
            if col < 0 || col >= self.cols as i64 {
                continue;
            }
            let cell = &mut self.cells[row as usize * self.cols + col as usize];
            *cell = Cell { character, fg, bg };
        }
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.draw()?;
        Ok(())
    }
}

/// Pick a line-drawing character from a cell-space direction.
/// Rows grow downward, so a down-right line is `\`.
fn line_glyph(dx: i64, dy: i64) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax == 0 && ay == 0 {
        '+'
    } else if ay * 2 < ax {
        '-'
    } else if ax * 2 < ay {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

fn outcode(x: f64, y: f64, max_x: f64, max_y: f64) -> u8 {
    let mut code = INSIDE;
    if x < 0.0 {
        code |= LEFT;
    } else if x > max_x {
        code |= RIGHT;
    }
    if y < 0.0 {
        code |= TOP;
    } else if y > max_y {
        code |= BOTTOM;
    }
    code
}

/// Cohen-Sutherland clip of a segment to `[0, max_x] x [0, max_y]`
fn clip_line(
    mut p0: (f64, f64),
    mut p1: (f64, f64),
    max_x: f64,
    max_y: f64,
) -> Option<((f64, f64), (f64, f64))> {
    let mut code0 = outcode(p0.0, p0.1, max_x, max_y);
    let mut code1 = outcode(p1.0, p1.1, max_x, max_y);

    loop {
        if (code0 | code1) == INSIDE {
            return Some((p0, p1));
        }
        if (code0 & code1) != INSIDE {
            return None;
        }

        let out = if code0 != INSIDE { code0 } else { code1 };
        let (dx, dy) = (p1.0 - p0.0, p1.1 - p0.1);
        let point = if out & BOTTOM != 0 {
            (p0.0 + dx * (max_y - p0.1) / dy, max_y)
        } else if out & TOP != 0 {
            (p0.0 + dx * (0.0 - p0.1) / dy, 0.0)
        } else if out & RIGHT != 0 {
            (max_x, p0.1 + dy * (max_x - p0.0) / dx)
        } else {
            (0.0, p0.1 + dy * (0.0 - p0.0) / dx)
        };

        if out == code0 {
            p0 = point;
            code0 = outcode(p0.0, p0.1, max_x, max_y);
        } else {
            p1 = point;
            code1 = outcode(p1.0, p1.1, max_x, max_y);
        }
    }
}
