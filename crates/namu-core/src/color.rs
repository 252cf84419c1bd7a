//! RGBA color math for the scene layers.

/// A color with floating-point channels in `[0, 1]`.
///
/// Terminal cells carry no alpha, so alpha here only feeds blending:
/// a color is composited over an opaque cell background with [`Rgba::over`]
/// before it becomes a terminal color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from raw channel values.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Linearly interpolate every channel toward `other`.
    ///
    /// `t` is clamped to `[0, 1]`; `t = 0` returns `self` exactly and
    /// `t = 1` returns `other` exactly.
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Scale the alpha channel by `f`, clamping the result to `[0, 1]`.
    pub fn opacity(self, f: f64) -> Self {
        Self {
            a: (self.a * f).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Composite this color over an opaque background.
    ///
    /// Returns the opaque color a cell shows once this color is painted
    /// on it: each channel moves from the background toward this color by
    /// this color's alpha.
    pub fn over(self, bg: Self) -> Self {
        let a = self.a.clamp(0.0, 1.0);
        Self {
            r: bg.r + (self.r - bg.r) * a,
            g: bg.g + (self.g - bg.g) * a,
            b: bg.b + (self.b - bg.b) * a,
            a: 1.0,
        }
    }

    /// Channel values as 8-bit components, for `Color::Rgb`.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let to8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (to8(self.r), to8(self.g), to8(self.b))
    }
}
