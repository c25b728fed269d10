// Game command definitions and key mappings

use glam::Vec2;
use winit::keyboard::KeyCode;

/// The four cardinal walk directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Unit vector for this direction in screen coordinates (y grows down)
    pub fn vector(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Down => Vec2::new(0.0, 1.0),
        }
    }
}

/// Represents all possible in-game commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Walk(Direction),
    Fire,
}

/// Default key bindings for Player 1 (WASD + Space)
pub fn default_p1_bindings() -> Vec<(KeyCode, Command)> {
    vec![
        (KeyCode::KeyA, Command::Walk(Direction::Left)),
        (KeyCode::KeyW, Command::Walk(Direction::Up)),
        (KeyCode::KeyD, Command::Walk(Direction::Right)),
        (KeyCode::KeyS, Command::Walk(Direction::Down)),
        (KeyCode::Space, Command::Fire),
    ]
}

/// Default key bindings for Player 2 (arrows + Right Shift)
pub fn default_p2_bindings() -> Vec<(KeyCode, Command)> {
    vec![
        (KeyCode::ArrowLeft, Command::Walk(Direction::Left)),
        (KeyCode::ArrowUp, Command::Walk(Direction::Up)),
        (KeyCode::ArrowRight, Command::Walk(Direction::Right)),
        (KeyCode::ArrowDown, Command::Walk(Direction::Down)),
        (KeyCode::ShiftRight, Command::Fire),
    ]
}

/// Key that restarts the round once it has ended
pub const RESTART_KEY: KeyCode = KeyCode::KeyR;
