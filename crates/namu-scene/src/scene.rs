//! Scene composer.

use namu_core::{ColorTheme, Glow, Rgba};
use ratatui::{Frame, widgets::Paragraph};

use crate::layers::{backdrop, snow, tree};
use crate::surface::Surface;

/// Caption color: dim white over the backdrop.
const CAPTION_COLOR: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.6);

/// The composed scene: backdrop, tree, snow, caption.
///
/// Owns the only mutable state in the system — the tap-driven [`Glow`]
/// and the active theme. Everything else is recomputed from the frame
/// area and the clock on every draw.
#[derive(Debug)]
pub struct Scene {
    glow: Glow,
    theme: ColorTheme,
    snowflakes: usize,
    caption: String,
}

impl Scene {
    pub fn new(theme: ColorTheme, snowflakes: usize, caption: String) -> Self {
        Self {
            glow: Glow::new(),
            theme,
            snowflakes,
            caption,
        }
    }

    /// A tap anywhere in the scene: toggle the glow at `time`.
    pub fn tap(&mut self, time: f64) {
        self.glow = self.glow.toggled(time);
    }

    /// Switch to the next color theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
    }

    pub fn glow(&self) -> Glow {
        self.glow
    }

    pub fn theme(&self) -> ColorTheme {
        self.theme
    }

    /// Draw one frame at `time`.
    pub fn render(&self, frame: &mut Frame<'_>, time: f64) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut surface = Surface::new(area.width, area.height);
        backdrop::paint(&mut surface);
        tree::render(
            &mut surface,
            &self.theme.palette(),
            self.glow.progress_at(time),
            time,
        );
        snow::render(&mut surface, self.snowflakes, time);

        if area.height > 4 && !self.caption.is_empty() {
            let y = f64::from(area.height) - 3.0;
            let x = (f64::from(area.width) - self.caption.chars().count() as f64) / 2.0;
            surface.put_str(x, y, &self.caption, CAPTION_COLOR);
        }

        frame.render_widget(Paragraph::new(surface.into_lines()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn test_scene() -> Scene {
        Scene::new(ColorTheme::Classic, 140, "tap to glow".to_string())
    }

    #[test]
    fn test_tap_round_trips_glow() {
        let mut scene = test_scene();
        assert_eq!(scene.glow().progress_at(0.0), 0.0);
        scene.tap(0.0);
        assert_eq!(scene.glow().progress_at(5.0), 1.0);
        scene.tap(5.0);
        assert_eq!(scene.glow().progress_at(10.0), 0.0);
    }

    #[test]
    fn test_cycle_theme() {
        let mut scene = test_scene();
        scene.cycle_theme();
        assert_eq!(scene.theme(), ColorTheme::Ember);
    }

    #[test]
    fn test_render_smoke() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let scene = test_scene();
        terminal.draw(|frame| scene.render(frame, 1.5)).unwrap();

        // The caption should land centered three rows above the bottom.
        let buffer = terminal.backend().buffer();
        let row: String = (0..80u16)
            .map(|x| buffer.cell((x, 21)).map_or(" ", |c| c.symbol()))
            .collect();
        assert!(row.contains("tap to glow"));
    }

    #[test]
    fn test_render_zero_area() {
        let mut terminal = Terminal::new(TestBackend::new(0, 0)).unwrap();
        let scene = test_scene();
        terminal.draw(|frame| scene.render(frame, 0.0)).unwrap();
    }
}
