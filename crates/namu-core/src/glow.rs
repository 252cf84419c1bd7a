//! The tap-driven glow state.

/// Duration of the glow transition, in animation-time units.
pub const GLOW_DURATION: f64 = 1.2;

/// Quadratic ease-in-out over `[0, 1]`, with exact endpoints.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Glow interaction state.
///
/// An immutable-update value: a tap produces a new `Glow` via
/// [`Glow::toggled`], capturing the progress at the moment of the tap so a
/// mid-transition toggle reverses smoothly from wherever it was. Progress
/// at any instant is the pure function [`Glow::progress_at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    is_glowing: bool,
    from: f64,
    started_at: f64,
}

impl Default for Glow {
    fn default() -> Self {
        Self::new()
    }
}

impl Glow {
    /// The idle state: not glowing, progress 0.
    pub fn new() -> Self {
        Self {
            is_glowing: false,
            from: 0.0,
            started_at: 0.0,
        }
    }

    /// Whether the current target is the glowing endpoint.
    pub fn is_glowing(self) -> bool {
        self.is_glowing
    }

    /// Toggle the glow target at `time`, starting a new eased transition
    /// from the current progress.
    #[must_use]
    pub fn toggled(self, time: f64) -> Self {
        Self {
            is_glowing: !self.is_glowing,
            from: self.progress_at(time),
            started_at: time,
        }
    }

    /// Eased progress in `[0, 1]` at `time`.
    ///
    /// Reaches the target exactly once `GLOW_DURATION` has elapsed and
    /// stays there; times before `started_at` clamp to the start value.
    pub fn progress_at(self, time: f64) -> f64 {
        let target = if self.is_glowing { 1.0 } else { 0.0 };
        let phase = ((time - self.started_at) / GLOW_DURATION).clamp(0.0, 1.0);
        (self.from + (target - self.from) * ease_in_out(phase)).clamp(0.0, 1.0)
    }
}
