//! Falling snow layer.
//!
//! No flake state is stored anywhere: each flake's position is a pure
//! function of its index and the clock, wrapping vertically with
//! `rem_euclid` so it re-enters 20 cells above the top edge.

use namu_core::{Rgba, hashed};

use crate::chars::{SNOW_LARGE, SNOW_MEDIUM, SNOW_SMALL};
use crate::surface::Surface;

/// Default number of snowflakes.
pub const FLAKE_COUNT: usize = 140;

/// A snowflake's derived state for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flake {
    pub x: f64,
    pub y: f64,
    /// Visual size in `[1.0, 3.3]`.
    pub radius: f64,
    /// Opacity in `[0.18, 0.5]`; larger flakes are more transparent.
    pub alpha: f64,
}

/// Snowflake `i` at `time` in a `(w, h)` container.
pub fn flake(i: usize, time: f64, w: f64, h: f64) -> Flake {
    let fi = i as f64;
    let r1 = hashed(fi, 12.3456, 54_321.987);
    let r2 = hashed(fi, 98.7654, 12_345.678);

    // Fixed base column plus a slow sway.
    let x = r1 * w + (time * 0.5 + fi).sin() * 10.0;
    // Fall speed scales with r2; the wrap keeps y in [-20, h + 20).
    let y = (time * (14.0 + 18.0 * r2)).rem_euclid(h + 40.0) - 20.0;

    Flake {
        x,
        y,
        radius: 1.0 + r2 * 2.3,
        alpha: 0.18 + 0.32 * (1.0 - r2),
    }
}

/// Paint `count` snowflakes over whatever is already on the surface.
pub fn render(surface: &mut Surface, count: usize, time: f64) {
    let (w, h) = (f64::from(surface.width()), f64::from(surface.height()));
    for i in 0..count {
        let f = flake(i, time, w, h);
        surface.put(f.x, f.y, flake_char(i, f.radius), Rgba::WHITE.opacity(f.alpha));
    }
}

/// Pick a character by size class, varied per flake index.
fn flake_char(i: usize, radius: f64) -> char {
    let chars: &[char] = if radius < 1.8 {
        SNOW_SMALL
    } else if radius < 2.6 {
        SNOW_MEDIUM
    } else {
        SNOW_LARGE
    };
    chars[i.wrapping_mul(19) % chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flake_is_deterministic() {
        for i in 0..FLAKE_COUNT {
            assert_eq!(flake(i, 7.5, 300.0, 600.0), flake(i, 7.5, 300.0, 600.0));
        }
    }

    #[test]
    fn test_vertical_position_stays_in_band() {
        let h = 600.0;
        for i in 0..FLAKE_COUNT {
            for step in -50..200 {
                let y = flake(i, step as f64 * 0.37, 300.0, h).y;
                assert!((-20.0..h + 20.0).contains(&y), "flake {i} at y {y}");
            }
        }
    }

    #[test]
    fn test_vertical_position_is_periodic() {
        let (w, h) = (300.0, 600.0);
        for i in 0..20 {
            let r2 = hashed(i as f64, 98.7654, 12_345.678);
            let period = (h + 40.0) / (14.0 + 18.0 * r2);
            let a = flake(i, 3.0, w, h).y;
            let b = flake(i, 3.0 + period, w, h).y;
            assert!((a - b).abs() < 1e-6, "flake {i}: {a} vs {b}");
        }
    }

    #[test]
    fn test_radius_and_alpha_ranges() {
        for i in 0..FLAKE_COUNT {
            let f = flake(i, 0.0, 300.0, 600.0);
            assert!((1.0..3.3).contains(&f.radius));
            assert!((0.18..=0.5).contains(&f.alpha));
        }
    }

    #[test]
    fn test_flake_char_size_classes() {
        assert!(SNOW_SMALL.contains(&flake_char(0, 1.0)));
        assert!(SNOW_MEDIUM.contains(&flake_char(0, 2.0)));
        assert!(SNOW_LARGE.contains(&flake_char(0, 3.0)));
    }

    #[test]
    fn test_render_is_total_for_degenerate_sizes() {
        let mut surface = Surface::new(0, 0);
        render(&mut surface, FLAKE_COUNT, -12.5);
        let mut line = Surface::new(80, 0);
        render(&mut line, FLAKE_COUNT, 0.0);
    }
}
