//! The glowing binary tree layer.
//!
//! A triangular field of '0'/'1' glyphs widening toward the bottom. The
//! layout is a pure function of the container size, so the tree holds
//! perfectly still between frames; only brightness, flicker and lamps
//! follow the clock and the glow progress.

use namu_core::{Palette, hashed, unit};

use crate::surface::Surface;

/// Number of glyph rows in the tree.
pub const ROWS: usize = 26;

/// Glyph count ramp for rows 4..=25.
const MIN_BITS: f64 = 4.0;
const MAX_BITS: f64 = 18.0;

/// Fraction of the container width the bottom row spans.
const WIDTH_SHARE: f64 = 0.6;

/// Position jitter at the top row, in cells; doubles by the bottom row.
const BASE_JITTER: f64 = 6.0;

/// Per-seed threshold above which a glyph carries a lamp.
const LAMP_THRESHOLD: f64 = 0.88;

/// One glyph slot in the tree layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub row: usize,
    pub col: usize,
    /// Deterministic seed every per-glyph attribute derives from.
    pub seed: f64,
    /// Horizontal position before jitter.
    pub base_x: f64,
    /// Jittered position.
    pub x: f64,
    pub y: f64,
}

/// Number of glyphs in row `row`.
///
/// Rows 0 and 1 hold a single glyph, rows 2 and 3 hold two and three, and
/// from row 4 the count ramps linearly to 18 at the bottom row.
pub fn bits_for_row(row: usize) -> usize {
    match row {
        0 | 1 => 1,
        2 => 2,
        3 => 3,
        _ => {
            let t = (row as f64 - 4.0) / (ROWS as f64 - 5.0);
            (MIN_BITS + t * (MAX_BITS - MIN_BITS)).round() as usize
        }
    }
}

/// Compute the glyph layout for a `(w, h)` container.
///
/// The tree's bounding box is `min(0.6h, 1.05w)` tall and vertically
/// centered; each row spans `0.6w · row/25` around the horizontal center.
/// Jitter comes from the seed alone, never the clock.
pub fn layout(w: f64, h: f64) -> Vec<Glyph> {
    let tree_height = (h * 0.6).min(w * 1.05);
    let top_y = (h - tree_height) / 2.0;
    let center_x = w / 2.0;

    let mut glyphs = Vec::new();
    for row in 0..ROWS {
        let t_row = row as f64 / (ROWS as f64 - 1.0);
        let y = top_y + t_row * tree_height;
        let row_width = w * WIDTH_SHARE * t_row;
        let jitter = BASE_JITTER + 6.0 * t_row;
        let bits = bits_for_row(row);

        for col in 0..bits {
            let col_norm = if bits == 1 {
                0.5
            } else {
                col as f64 / (bits as f64 - 1.0)
            };
            let base_x = center_x + (col_norm - 0.5) * row_width;

            let seed = (row * 10_000 + col) as f64;
            let jx = unit(seed, 12.98) * jitter - jitter / 2.0;
            let jy = unit(seed, 33.21) * jitter - jitter / 2.0;

            glyphs.push(Glyph {
                row,
                col,
                seed,
                base_x,
                x: base_x + jx,
                y: y + jy * 0.7,
            });
        }
    }
    glyphs
}

/// Paint the tree for the current glow progress and time.
pub fn render(surface: &mut Surface, palette: &Palette, glow_progress: f64, time: f64) {
    let p = glow_progress.clamp(0.0, 1.0);
    let (w, h) = (f64::from(surface.width()), f64::from(surface.height()));

    for glyph in layout(w, h) {
        draw_bit(surface, palette, &glyph, p, time);
    }
}

fn draw_bit(surface: &mut Surface, palette: &Palette, glyph: &Glyph, p: f64, time: f64) {
    let seed = glyph.seed;
    let r_bit = hashed(seed, 1.2345, 99_999.123);
    let r_lamp = hashed(seed, 9.4321, 34_567.654);
    let r_blink = hashed(seed, 7.7777, 123_456.0);

    let bit = if r_bit > 0.5 { '1' } else { '0' };

    // Each glyph flickers at its own rate, visible only while glowing.
    let flick = ((time * (1.3 + r_blink * 1.4) + seed).sin() + 1.0) / 2.0;
    let brightness = (1.0 - p) * 0.25 + p * (0.3 + flick * 0.7);
    let color = palette
        .glyph_base
        .mix(palette.glyph_glow, p)
        .opacity(brightness);

    if r_lamp > LAMP_THRESHOLD && p > 0.05 {
        let lamp_flick = ((time * (3.0 + r_lamp * 5.0)).sin() + 1.0) / 2.0;
        let lamp_opacity = 0.4 + lamp_flick * 0.6;
        let size = 5.0 + lamp_flick * 4.0;

        let cx = glyph.x.round() as i64;
        let cy = glyph.y.round() as i64;
        surface.tint_bg(cx, cy, palette.lamp, lamp_opacity);
        // Larger pulses spill into the neighboring cells.
        if size > 7.0 {
            surface.tint_bg(cx - 1, cy, palette.lamp, lamp_opacity * 0.5);
            surface.tint_bg(cx + 1, cy, palette.lamp, lamp_opacity * 0.5);
        }
    }

    surface.put(glyph.x, glyph.y, bit, color);
}
