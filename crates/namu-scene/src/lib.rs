//! Scene rendering for the namu particle tree.
//!
//! A [`Scene`] owns the tap-driven glow state and paints, bottom to top:
//! a radial night gradient with a floor shadow, the glowing binary tree,
//! falling snow, and a caption. Layers paint into a cell [`Surface`] that
//! blends alpha colors over the backdrop, then the surface becomes one
//! ratatui `Paragraph` per frame. Every layer is a pure function of
//! `(size, time, glow progress)` — nothing persists between frames.

mod chars;
pub mod layers;
mod scene;
mod surface;

pub use scene::Scene;
pub use surface::Surface;
