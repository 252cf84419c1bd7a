//! Core math and shared types for the namu particle tree.
//!
//! Everything in this crate is pure: seeded noise, color interpolation,
//! the eased glow state, and the small enums the app cycles through.
//! No I/O and no terminal types; rendering lives in `namu-scene`.

mod color;
mod glow;
mod noise;
mod types;

pub use color::Rgba;
pub use glow::{Glow, GLOW_DURATION, ease_in_out};
pub use noise::{fract, hashed, unit};
pub use types::{AnimationSpeed, ColorTheme, Palette};
