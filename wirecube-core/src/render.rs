/// Draw-surface abstraction and scene drawing
use crate::geometry::EdgeGroup;
use crate::overlay::overlay_lines;
use crate::projection::ScreenPoint;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

pub const BACKGROUND: Rgba = Rgba::rgb(255, 200, 200);
pub const TEXT_FG: Rgba = Rgba::rgb(0, 0, 0);
pub const TEXT_BG: Rgba = BACKGROUND;

/// Overlay glyph cell in logical pixels
pub const GLYPH_WIDTH: i32 = 10;
pub const LINE_HEIGHT: i32 = 30;

pub fn edge_color(group: EdgeGroup) -> Rgba {
    match group {
        EdgeGroup::Front => Rgba::rgb(255, 0, 0),
        EdgeGroup::Back => Rgba::rgb(0, 255, 0),
        EdgeGroup::Connector => Rgba::rgb(0, 0, 255),
    }
}

/// A window-like target that can draw lines and text in logical pixels
pub trait Surface {
    /// Logical size in pixels
    fn size(&self) -> (u32, u32);

    /// Glyph width and line height for overlay text, in logical pixels
    fn text_metrics(&self) -> (i32, i32) {
        (GLYPH_WIDTH, LINE_HEIGHT)
    }

    fn clear(&mut self, color: Rgba);

    fn set_draw_color(&mut self, color: Rgba);

    /// Draw a line in the current draw colour
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint);

    /// Draw `text` with its top-left corner at `(x, y)`
    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Rgba, bg: Rgba);

    fn present(&mut self) -> anyhow::Result<()>;
}

/// Clear, draw every cube's edges grouped by colour, then the overlay.
pub fn draw_scene<S: Surface>(state: &AppState, surface: &mut S) -> anyhow::Result<()> {
    surface.clear(BACKGROUND);

    for cube in &state.cubes {
        let edges = state.camera.project_cube(cube);
        for group in [EdgeGroup::Front, EdgeGroup::Back, EdgeGroup::Connector] {
            surface.set_draw_color(edge_color(group));
            for edge in edges.iter().filter(|edge| edge.group == group) {
                surface.draw_line(edge.from, edge.to);
            }
        }
    }

    draw_overlay(state, surface);
    surface.present()
}

/// Overlay lines right-aligned against the surface edge, one row each
fn draw_overlay<S: Surface>(state: &AppState, surface: &mut S) {
    let (width, _) = surface.size();
    let (glyph_width, line_height) = surface.text_metrics();
    for (row, line) in overlay_lines(state).iter().enumerate() {
        let text_width = line.chars().count() as i32 * glyph_width;
        let x = width as i32 - text_width;
        let y = row as i32 * line_height;
        surface.draw_text(x, y, line, TEXT_FG, TEXT_BG);
    }
}
