//! Shared enums the app cycles through.

use crate::color::Rgba;

/// Animation speed applied as a scale on the animation clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to per-frame elapsed time.
    pub fn factor(self) -> f64 {
        match self {
            Self::Slow => 0.5,
            Self::Medium => 1.0,
            Self::Fast => 1.75,
        }
    }

    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            Self::Slow => Self::Medium,
            Self::Medium => Self::Fast,
            Self::Fast => Self::Slow,
        }
    }

    /// Parse a config name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "slow" => Some(Self::Slow),
            "medium" => Some(Self::Medium),
            "fast" => Some(Self::Fast),
            _ => None,
        }
    }
}

/// Colors the tree layer draws with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Glyph color when idle.
    pub glyph_base: Rgba,
    /// Glyph color the glow transition mixes toward.
    pub glyph_glow: Rgba,
    /// Lamp highlight color.
    pub lamp: Rgba,
}

/// Color theme for the glowing tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    /// Grey digits glowing neon green, yellow lamps.
    #[default]
    Classic,
    /// Warm orange glow, red lamps.
    Ember,
    /// Cold cyan glow, white lamps.
    Ice,
}

impl ColorTheme {
    pub fn palette(self) -> Palette {
        let grey = Rgba::new(0.5, 0.5, 0.5, 0.55);
        match self {
            Self::Classic => Palette {
                glyph_base: grey,
                glyph_glow: Rgba::opaque(0.22, 1.0, 0.50),
                lamp: Rgba::opaque(1.0, 0.85, 0.10),
            },
            Self::Ember => Palette {
                glyph_base: grey,
                glyph_glow: Rgba::opaque(1.0, 0.55, 0.15),
                lamp: Rgba::opaque(1.0, 0.25, 0.20),
            },
            Self::Ice => Palette {
                glyph_base: grey,
                glyph_glow: Rgba::opaque(0.35, 0.85, 1.0),
                lamp: Rgba::opaque(0.95, 0.98, 1.0),
            },
        }
    }

    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            Self::Classic => Self::Ember,
            Self::Ember => Self::Ice,
            Self::Ice => Self::Classic,
        }
    }

    /// Parse a config name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "ember" => Some(Self::Ember),
            "ice" => Some(Self::Ice),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_cycle() {
        assert_eq!(AnimationSpeed::Slow.next(), AnimationSpeed::Medium);
        assert_eq!(AnimationSpeed::Medium.next(), AnimationSpeed::Fast);
        assert_eq!(AnimationSpeed::Fast.next(), AnimationSpeed::Slow);
    }

    #[test]
    fn test_speed_from_name() {
        assert_eq!(AnimationSpeed::from_name("Fast"), Some(AnimationSpeed::Fast));
        assert_eq!(AnimationSpeed::from_name("medium"), Some(AnimationSpeed::Medium));
        assert_eq!(AnimationSpeed::from_name("warp"), None);
    }

    #[test]
    fn test_theme_cycle_covers_all() {
        let start = ColorTheme::Classic;
        let mut theme = start;
        for _ in 0..3 {
            theme = theme.next();
        }
        assert_eq!(theme, start);
    }

    #[test]
    fn test_theme_from_name() {
        assert_eq!(ColorTheme::from_name("ICE"), Some(ColorTheme::Ice));
        assert_eq!(ColorTheme::from_name("plaid"), None);
    }

    #[test]
    fn test_classic_palette_matches_defaults() {
        let p = ColorTheme::Classic.palette();
        assert_eq!(p.glyph_base.a, 0.55);
        assert_eq!(p.glyph_glow.to_rgb8(), (56, 255, 128));
    }
}
