//! The scene's render layers, painted bottom to top.

pub mod backdrop;
pub mod snow;
pub mod tree;
