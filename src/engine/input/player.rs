// Per-player input state

use super::action::Direction;
use super::buffer::DirectionBuffer;

/// Input state for a single player: held directions plus a pending shot.
///
/// Fire is edge-triggered. A key-down queues exactly one shot; holding
/// the key does not queue more. The orchestrator consumes the pending
/// shot once per tick via `take_fire`.
#[derive(Debug, Default)]
pub struct PlayerInput {
    player_id: usize,
    directions: DirectionBuffer,
    fire_pending: bool,
}

impl PlayerInput {
    /// Create input state for a player
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            directions: DirectionBuffer::new(),
            fire_pending: false,
        }
    }

    /// The player this state belongs to
    #[allow(dead_code)]
    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Record a direction key-down
    pub fn press_direction(&mut self, dir: Direction) {
        self.directions.press(dir);
    }

    /// Record a direction key-up
    pub fn release_direction(&mut self, dir: Direction) {
        self.directions.release(dir);
    }

    /// Queue a shot for the next tick
    pub fn press_fire(&mut self) {
        self.fire_pending = true;
    }

    /// The direction to walk this tick, if any
    pub fn direction(&self) -> Option<Direction> {
        self.directions.current()
    }

    /// Consume the pending shot, if one was queued
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire_pending)
    }

    /// Drop all held directions and any pending shot
    pub fn reset(&mut self) {
        self.directions.clear();
        self.fire_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_is_consumed_once() {
        let mut input = PlayerInput::new(0);
        input.press_fire();
        assert!(input.take_fire());
        assert!(!input.take_fire());
    }

    #[test]
    fn test_direction_follows_buffer() {
        let mut input = PlayerInput::new(1);
        assert_eq!(input.direction(), None);
        input.press_direction(Direction::Up);
        input.press_direction(Direction::Right);
        input.release_direction(Direction::Up);
        assert_eq!(input.direction(), Some(Direction::Right));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut input = PlayerInput::new(0);
        input.press_direction(Direction::Down);
        input.press_fire();
        input.reset();
        assert_eq!(input.direction(), None);
        assert!(!input.take_fire());
    }
}
