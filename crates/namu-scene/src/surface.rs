//! The per-frame cell surface the layers paint into.

use namu_core::Rgba;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// One terminal cell: a glyph plus resolved foreground and background.
#[derive(Debug, Clone, Copy)]
struct Cell {
    ch: char,
    fg: Rgba,
    bg: Rgba,
}

impl Cell {
    const EMPTY: Self = Self {
        ch: ' ',
        fg: Rgba::WHITE,
        bg: Rgba::BLACK,
    };
}

/// A width × height grid of cells built fresh every frame.
///
/// Painting is in painter's order: backgrounds first, then glyphs, each
/// glyph blended over whatever background its cell already holds (the
/// terminal has no alpha channel, so blending happens here). Continuous
/// coordinates round to the nearest cell; out-of-bounds paints are
/// silently dropped, which keeps every layer total under any size.
#[derive(Debug)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Surface {
    /// Create an empty black surface.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * usize::from(self.width) + x as usize)
    }

    /// Set the background of a cell outright.
    pub fn set_bg(&mut self, x: u16, y: u16, bg: Rgba) {
        if let Some(i) = self.index(i64::from(x), i64::from(y)) {
            self.cells[i].bg = bg;
        }
    }

    /// Blend a cell's background toward `color` by `amount`.
    pub fn tint_bg(&mut self, x: i64, y: i64, color: Rgba, amount: f64) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].bg = self.cells[i].bg.mix(color, amount);
        }
    }

    /// Paint a glyph at a continuous position, blending its color over the
    /// cell's background by the color's alpha.
    pub fn put(&mut self, x: f64, y: f64, ch: char, color: Rgba) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let (cx, cy) = (x.round() as i64, y.round() as i64);
        if let Some(i) = self.index(cx, cy) {
            let cell = &mut self.cells[i];
            cell.fg = color.over(cell.bg);
            cell.ch = ch;
        }
    }

    /// Paint a string left-to-right starting at a continuous position.
    pub fn put_str(&mut self, x: f64, y: f64, text: &str, color: Rgba) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as f64, y, ch, color);
        }
    }

    /// Convert the surface into one styled `Line` per row.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let width = usize::from(self.width);
        (0..usize::from(self.height))
            .map(|y| {
                let spans: Vec<Span> = (0..width)
                    .map(|x| {
                        let cell = self.cells[y * width + x];
                        let bg = rgb(cell.bg);
                        if cell.ch == ' ' {
                            Span::styled(" ", Style::new().bg(bg))
                        } else {
                            Span::styled(
                                cell.ch.to_string(),
                                Style::new().fg(rgb(cell.fg)).bg(bg),
                            )
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

fn rgb(color: Rgba) -> Color {
    let (r, g, b) = color.to_rgb8();
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_blank() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.width(), 4);
        assert_eq!(surface.height(), 3);
        assert!(surface.cells.iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn test_put_rounds_to_nearest_cell() {
        let mut surface = Surface::new(4, 4);
        surface.put(1.4, 2.6, 'x', Rgba::WHITE);
        assert_eq!(surface.cells[3 * 4 + 1].ch, 'x');
    }

    #[test]
    fn test_put_out_of_bounds_is_dropped() {
        let mut surface = Surface::new(4, 4);
        surface.put(-1.0, 0.0, 'x', Rgba::WHITE);
        surface.put(0.0, 99.0, 'x', Rgba::WHITE);
        surface.put(f64::NAN, 0.0, 'x', Rgba::WHITE);
        assert!(surface.cells.iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn test_put_blends_over_background() {
        let mut surface = Surface::new(1, 1);
        surface.set_bg(0, 0, Rgba::BLACK);
        surface.put(0.0, 0.0, '1', Rgba::new(1.0, 1.0, 1.0, 0.5));
        let fg = surface.cells[0].fg;
        assert!((fg.r - 0.5).abs() < 1e-12);
        assert!((fg.g - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_tint_bg_mixes() {
        let mut surface = Surface::new(1, 1);
        surface.tint_bg(0, 0, Rgba::WHITE, 0.5);
        assert!((surface.cells[0].bg.r - 0.5).abs() < 1e-12);
        // Out of bounds is a no-op.
        surface.tint_bg(5, 5, Rgba::WHITE, 1.0);
    }

    #[test]
    fn test_put_str_advances_columns() {
        let mut surface = Surface::new(5, 1);
        surface.put_str(1.0, 0.0, "ab", Rgba::WHITE);
        assert_eq!(surface.cells[1].ch, 'a');
        assert_eq!(surface.cells[2].ch, 'b');
    }

    #[test]
    fn test_into_lines_dimensions() {
        let lines = Surface::new(3, 2).into_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 3);
    }

    #[test]
    fn test_zero_size_surface() {
        let mut surface = Surface::new(0, 0);
        surface.put(0.0, 0.0, 'x', Rgba::WHITE);
        assert!(surface.into_lines().is_empty());
    }
}
