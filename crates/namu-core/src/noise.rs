//! Seeded sin-hash noise.
//!
//! Every random-looking attribute in the scene (glyph jitter, bit values,
//! lamp placement, snow columns) is a pure function of an integer seed fed
//! through one of these hashes. The constants are part of the visual
//! contract: changing them rearranges the whole tree.

/// Fractional part of `x`.
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Map `sin(seed * k)` from `[-1, 1]` to `[0, 1]`.
///
/// Used where a smooth, low-frequency spread is wanted (position jitter).
pub fn unit(seed: f64, k: f64) -> f64 {
    (seed * k).sin() * 0.5 + 0.5
}

/// Decorrelated hash: `fract(sin(seed * k) * m)`.
///
/// The large multiplier shreds the sine's continuity, so nearby seeds give
/// unrelated values. Result is in `[0, 1)`.
pub fn hashed(seed: f64, k: f64, m: f64) -> f64 {
    fract((seed * k).sin() * m)
}
