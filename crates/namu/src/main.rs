use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use namu_config::Config;
use namu_core::{AnimationSpeed, ColorTheme};
use namu_scene::Scene;
use ratatui::{
    DefaultTerminal, Frame,
    layout::Rect,
    style::{Color, Stylize},
    text::Line,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    // Mouse capture turns clicks into taps; without it the keys still work.
    let mouse = config.mouse && execute!(stdout(), EnableMouseCapture).is_ok();
    let result = App::new(&config).run(terminal);
    if mouse {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The composed scene.
    scene: Scene,
    /// Current animation speed.
    speed: AnimationSpeed,
    /// Accumulated animation time, already speed-scaled.
    time: f64,
    /// Poll timeout derived from the configured fps.
    frame_budget: Duration,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: &Config) -> Self {
        let theme = ColorTheme::from_name(&config.theme).unwrap_or_default();
        let speed = AnimationSpeed::from_name(&config.speed).unwrap_or_default();
        Self {
            running: false,
            scene: Scene::new(theme, config.snowflakes, config.caption.clone()),
            speed,
            time: 0.0,
            frame_budget: Duration::from_millis(1000 / u64::from(config.fps.max(1))),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut last_frame = Instant::now();
        while self.running {
            let now = Instant::now();
            self.time += now.duration_since(last_frame).as_secs_f64() * self.speed.factor();
            last_frame = now;

            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        self.scene.render(frame, self.time);

        let area = frame.area();
        if area.height < 2 {
            return;
        }
        let (r, g, b) = self.scene.theme().palette().glyph_glow.to_rgb8();
        let accent = Color::Rgb(r, g, b);
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "space".bold().fg(accent),
            " glow  ".dark_gray(),
            "s".bold().fg(accent),
            " speed  ".dark_gray(),
            "c".bold().fg(accent),
            " theme".dark_gray(),
        ])
        .centered();
        let bottom = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        frame.render_widget(help, bottom);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame budget as timeout so the scene keeps animating.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_budget)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                // Layers recompute from the frame area, so nothing to do.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('g')) => self.tap(),
            (_, KeyCode::Char('s')) => self.speed = self.speed.next(),
            (_, KeyCode::Char('c')) => self.scene.cycle_theme(),
            _ => {}
        }
    }

    /// A click anywhere in the terminal is a tap; position does not matter.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.tap();
        }
    }

    /// Toggle the glow at the current animation time.
    fn tap(&mut self) {
        self.scene.tap(self.time);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_honors_config() {
        let config = Config {
            theme: "ice".to_string(),
            speed: "fast".to_string(),
            fps: 60,
            ..Config::default()
        };
        let app = App::new(&config);
        assert_eq!(app.scene.theme(), ColorTheme::Ice);
        assert_eq!(app.speed, AnimationSpeed::Fast);
        assert_eq!(app.frame_budget, Duration::from_millis(16));
    }

    #[test]
    fn test_app_falls_back_on_unknown_names() {
        let config = Config {
            theme: "plaid".to_string(),
            speed: "warp".to_string(),
            fps: 0,
            ..Config::default()
        };
        let app = App::new(&config);
        assert_eq!(app.scene.theme(), ColorTheme::Classic);
        assert_eq!(app.speed, AnimationSpeed::Medium);
        assert_eq!(app.frame_budget, Duration::from_millis(1000));
    }

    #[test]
    fn test_space_taps_and_q_quits() {
        let mut app = App::new(&Config::default());
        app.running = true;
        app.on_key_event(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert!(app.scene.glow().is_glowing());
        app.on_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.running);
    }

    #[test]
    fn test_click_taps() {
        let mut app = App::new(&Config::default());
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        app.on_mouse_event(click);
        assert!(app.scene.glow().is_glowing());
    }
}
