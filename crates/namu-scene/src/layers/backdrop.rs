//! Backdrop layer: radial night gradient and the floor shadow.

use namu_core::Rgba;

use crate::surface::Surface;

/// Gradient color at the center.
const INNER: Rgba = Rgba::BLACK;

/// Gradient color at the edges, a deep night blue.
const OUTER: Rgba = Rgba::opaque(0.02, 0.06, 0.12);

/// Widest the floor shadow gets, in columns.
const FLOOR_CAP: f64 = 110.0;

/// Paint the backdrop into the cell backgrounds.
pub fn paint(surface: &mut Surface) {
    let (w, h) = (f64::from(surface.width()), f64::from(surface.height()));
    if w < 1.0 || h < 1.0 {
        return;
    }

    let cx = w / 2.0;
    let cy = h / 2.0;
    let radius = w.max(h);

    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let dx = f64::from(x) - cx;
            // Terminal cells are about twice as tall as they are wide.
            let dy = (f64::from(y) - cy) * 2.0;
            let t = ((dx * dx + dy * dy).sqrt() / radius).clamp(0.0, 1.0);
            surface.set_bg(x, y, INNER.mix(OUTER, t));
        }
    }

    paint_floor_shadow(surface, w, h);
}

/// Darken an ellipse of cells under the tree, fading toward the rim so
/// the shadow reads as blurred.
fn paint_floor_shadow(surface: &mut Surface, w: f64, h: f64) {
    let half_w = (w * 0.75).min(FLOOR_CAP) / 2.0;
    let half_h = (half_w * 0.115).max(1.0);
    if half_w < 1.0 {
        return;
    }

    let cx = w / 2.0;
    let cy = h * 0.83;

    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let ex = (f64::from(x) - cx) / half_w;
            let ey = (f64::from(y) - cy) / half_h;
            let e = ex * ex + ey * ey;
            if e < 1.0 {
                surface.tint_bg(i64::from(x), i64::from(y), Rgba::BLACK, 0.9 * (1.0 - e));
            }
        }
    }
}
