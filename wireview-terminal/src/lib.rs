/// Terminal wireframe viewer built on crossterm
use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
    tty::IsTty,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use wireview_core::{render_frame, Error, InputSource, RotationState, WireframeProjector};

pub mod input;
pub mod renderer;
pub mod surface;

pub use input::{Command, KeyboardInput};
pub use renderer::AsciiRenderer;
pub use surface::CharGrid;

/// How long to wait for input when nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Viewer settings, filled from the command line
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Cells per object-space unit
    pub scale: f32,
    pub cell_aspect: f32,
    /// Initial angles in degrees
    pub initial_degrees: [f32; 3],
    /// Degrees per key press
    pub step_degrees: f32,
    /// Degrees of Y rotation per tick; `None` redraws only on input
    pub spin_degrees: Option<f32>,
    pub fps: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scale: 10.0,
            cell_aspect: 2.0,
            initial_degrees: [0.0; 3],
            step_degrees: 5.0,
            spin_degrees: None,
            fps: 30,
        }
    }
}

impl ViewerConfig {
    fn tick(&self) -> Option<Duration> {
        self.spin_degrees
            .map(|_| Duration::from_millis(1000 / u64::from(self.fps.max(1))))
    }
}

/// Main application struct for terminal wireframe viewing
pub struct TerminalApp {
    projector: WireframeProjector,
    input: KeyboardInput,
    renderer: AsciiRenderer,
    grid: CharGrid,
    config: ViewerConfig,
    running: bool,
    dirty: bool,
}

impl TerminalApp {
    pub fn new(projector: WireframeProjector, config: ViewerConfig) -> Result<Self, Error> {
        if !stdout().is_tty() {
            return Err(Error::missing("terminal on stdout"));
        }
        let (width, height) = terminal::size()?;

        Ok(Self::with_size(projector, config, width, height))
    }

    /// Build the app for a known surface size without touching the terminal
    fn with_size(
        projector: WireframeProjector,
        config: ViewerConfig,
        width: u16,
        height: u16,
    ) -> Self {
        Self {
            projector,
            input: KeyboardInput::new(config.initial_degrees, config.step_degrees),
            renderer: AsciiRenderer::new(config.cell_aspect),
            grid: CharGrid::new(width as usize, height as usize),
            config,
            running: true,
            dirty: true,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let tick = self.config.tick();
        let mut last_tick = Instant::now();
        info!(?tick, "viewer started");

        while self.running {
            if self.dirty {
                self.render()?;
                self.dirty = false;
            }

            let timeout = match tick {
                Some(tick) => tick.saturating_sub(last_tick.elapsed()),
                None => IDLE_POLL,
            };
            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }

            if let (Some(tick), Some(degrees)) = (tick, self.config.spin_degrees) {
                if last_tick.elapsed() >= tick {
                    self.input.spin(degrees);
                    self.dirty = true;
                    last_tick = Instant::now();
                }
            }
        }

        info!("viewer stopped");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => match self.input.handle_key(key) {
                Command::Redraw => self.dirty = true,
                Command::Quit => self.running = false,
                Command::Ignore => {}
            },
            Event::Resize(width, height) => {
                self.grid.resize(width as usize, height as usize);
                self.dirty = true;
            }
            _ => {}
        }
    }

    /// Re-project with the current rotation into the grid
    fn draw_frame(&mut self) -> RotationState {
        let rotation = self.input.rotation().unwrap_or_else(|never| match never {});
        debug!(?rotation, "redrawing");

        render_frame(
            &self.projector,
            &self.renderer,
            &mut self.grid,
            rotation,
            self.config.scale,
        )
        .unwrap_or_else(|never| match never {});
        rotation
    }

    fn render(&mut self) -> io::Result<()> {
        let rotation = self.draw_frame();

        let mut stdout = stdout();
        self.grid.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(status_line(&rotation)),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Top-row overlay showing the current angles and key bindings
pub fn status_line(rotation: &RotationState) -> String {
    let [x, y, z] = rotation.to_degrees();
    format!(
        "Wireview | X {:.0}° Y {:.0}° Z {:.0}° | W/S A/D E/R rotate, 0 reset, Q quit",
        x, y, z
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app(width: u16, height: u16) -> TerminalApp {
        let config = ViewerConfig {
            scale: 4.0,
            ..ViewerConfig::default()
        };
        TerminalApp::with_size(WireframeProjector::cube(), config, width, height)
    }

    fn expected_grid(width: usize, height: usize, degrees: [f32; 3]) -> Vec<String> {
        let [x, y, z] = degrees;
        let mut grid = CharGrid::new(width, height);
        render_frame(
            &WireframeProjector::cube(),
            &AsciiRenderer::new(2.0),
            &mut grid,
            RotationState::from_degrees(x, y, z),
            4.0,
        )
        .unwrap();
        grid.to_text()
    }

    #[test]
    fn test_resize_refits_grid_and_marks_dirty() {
        let mut app = app(40, 20);
        app.draw_frame();
        app.dirty = false;

        app.handle_event(Event::Resize(60, 24));

        assert!(app.dirty);
        assert_eq!((app.grid.width(), app.grid.height()), (60, 24));
        assert!(app.grid.to_text().iter().all(|row| row.trim().is_empty()));
    }

    #[test]
    fn test_resize_redraws_with_last_rotation() {
        let mut app = app(40, 20);
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE)));
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)));
        app.draw_frame();

        app.handle_event(Event::Resize(50, 16));
        let rotation = app.draw_frame();

        let [x, y, _] = rotation.to_degrees();
        assert!((x - 5.0).abs() < 1e-3);
        assert!((y - 5.0).abs() < 1e-3);
        assert_eq!(app.grid.to_text(), expected_grid(50, 16, [5.0, 5.0, 0.0]));
    }

    #[test]
    fn test_quit_key_stops_app() {
        let mut app = app(10, 5);
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!app.running);
    }

    #[test]
    fn test_status_line_shows_angles() {
        let line = status_line(&RotationState::from_degrees(90.0, -45.0, 360.0));
        assert!(line.contains("X 90°"));
        assert!(line.contains("Y -45°"));
        assert!(line.contains("Z 360°"));
    }

    #[test]
    fn test_tick_only_when_spinning() {
        let config = ViewerConfig::default();
        assert_eq!(config.tick(), None);

        let spinning = ViewerConfig {
            spin_degrees: Some(2.0),
            fps: 20,
            ..ViewerConfig::default()
        };
        assert_eq!(spinning.tick(), Some(Duration::from_millis(50)));

        let zero_fps = ViewerConfig {
            spin_degrees: Some(2.0),
            fps: 0,
            ..ViewerConfig::default()
        };
        assert_eq!(zero_fps.tick(), Some(Duration::from_secs(1)));
    }
}
