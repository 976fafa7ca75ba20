/// Keyboard-driven rotation input
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::convert::Infallible;
use wireview_core::{InputSource, RotationState};

/// What the app should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Redraw,
    Quit,
    Ignore,
}

/// Holds the three angles in degrees and steps them from key presses
#[derive(Debug, Clone)]
pub struct KeyboardInput {
    degrees: [f32; 3],
    initial: [f32; 3],
    step: f32,
}

impl KeyboardInput {
    pub fn new(initial: [f32; 3], step: f32) -> Self {
        Self {
            degrees: initial,
            initial,
            step,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Command {
        if key.kind == KeyEventKind::Release {
            return Command::Ignore;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Command::Quit;
        }

        let step = self.step;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Command::Quit,
            KeyCode::Char('w') | KeyCode::Up => self.degrees[0] += step,
            KeyCode::Char('s') | KeyCode::Down => self.degrees[0] -= step,
            KeyCode::Char('a') | KeyCode::Left => self.degrees[1] -= step,
            KeyCode::Char('d') | KeyCode::Right => self.degrees[1] += step,
            KeyCode::Char('e') => self.degrees[2] += step,
            KeyCode::Char('r') => self.degrees[2] -= step,
            KeyCode::Char('0') => self.degrees = self.initial,
            _ => return Command::Ignore,
        }
        Command::Redraw
    }

    /// Advance the Y angle, for continuous spinning
    pub fn spin(&mut self, degrees: f32) {
        self.degrees[1] += degrees;
    }
}

impl InputSource for KeyboardInput {
    type Error = Infallible;

    fn rotation(&self) -> Result<RotationState, Infallible> {
        let [x, y, z] = self.degrees;
        Ok(RotationState::from_degrees(x, y, z))
    }
}
