//! Character constants for the scene layers.

/// Small snowflakes (radius under 1.8 cells).
pub const SNOW_SMALL: &[char] = &['·', '.', '°'];

/// Medium snowflakes.
pub const SNOW_MEDIUM: &[char] = &['*', '•', '+'];

/// Large snowflakes (radius above 2.6 cells).
pub const SNOW_LARGE: &[char] = &['❄', '❅', '❆'];
