// Input manager - routes window key events to per-player state

use super::action::{self, Command, Direction};
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Main input manager coordinating all players' input
pub struct InputManager {
    /// Key bindings per player
    bindings: Vec<Vec<(KeyCode, Command)>>,

    /// Input state for each player
    players: Vec<PlayerInput>,

    /// Whether the restart key was pressed since last consumed
    restart_pending: bool,
}

impl InputManager {
    /// Create an input manager with the default two-player bindings
    pub fn new() -> Self {
        Self::with_bindings(vec![
            action::default_p1_bindings(),
            action::default_p2_bindings(),
        ])
    }

    /// Create an input manager with explicit per-player bindings
    pub fn with_bindings(bindings: Vec<Vec<(KeyCode, Command)>>) -> Self {
        let players = (0..bindings.len()).map(PlayerInput::new).collect();
        Self {
            bindings,
            players,
            restart_pending: false,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.handle_key(event.state, key_code, event.repeat);
        }
    }

    /// Handle a single key transition.
    ///
    /// Split out from `process_keyboard_event` because winit's `KeyEvent`
    /// cannot be constructed outside the event loop; tests and headless
    /// drivers call this directly.
    pub fn handle_key(&mut self, state: ElementState, key_code: KeyCode, repeat: bool) {
        if repeat {
            // Held keys are tracked by press/release, OS repeats are noise
            return;
        }

        if key_code == action::RESTART_KEY && state == ElementState::Pressed {
            self.restart_pending = true;
            return;
        }

        for (player_id, bindings) in self.bindings.iter().enumerate() {
            let Some(&(_, command)) = bindings.iter().find(|(key, _)| *key == key_code) else {
                continue;
            };
            let Some(player) = self.players.get_mut(player_id) else {
                continue;
            };
            match (command, state) {
                (Command::Walk(dir), ElementState::Pressed) => player.press_direction(dir),
                (Command::Walk(dir), ElementState::Released) => player.release_direction(dir),
                (Command::Fire, ElementState::Pressed) => player.press_fire(),
                (Command::Fire, ElementState::Released) => {}
            }
        }
    }

    /// Get input state for a specific player
    #[allow(dead_code)]
    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    /// Get mutable input state for a specific player
    #[allow(dead_code)]
    pub fn player_mut(&mut self, player_id: usize) -> Option<&mut PlayerInput> {
        self.players.get_mut(player_id)
    }

    /// The direction a player is holding this tick
    pub fn direction(&self, player_id: usize) -> Option<Direction> {
        self.players.get(player_id).and_then(PlayerInput::direction)
    }

    /// Consume a player's pending shot
    pub fn take_fire(&mut self, player_id: usize) -> bool {
        self.players
            .get_mut(player_id)
            .is_some_and(PlayerInput::take_fire)
    }

    /// Consume a pending restart request
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_pending)
    }

    /// Reset all player input states
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.restart_pending = false;
    }

    /// Get the number of players
    #[allow(dead_code)]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_creation() {
        let manager = InputManager::new();
        assert_eq!(manager.num_players(), 2);
        assert!(manager.player(0).is_some());
        assert!(manager.player(1).is_some());
        assert!(manager.player(2).is_none());
    }

    #[test]
    fn test_keys_route_to_the_right_player() {
        let mut manager = InputManager::new();
        manager.handle_key(ElementState::Pressed, KeyCode::KeyW, false);
        manager.handle_key(ElementState::Pressed, KeyCode::ArrowDown, false);

        assert_eq!(manager.direction(0), Some(Direction::Up));
        assert_eq!(manager.direction(1), Some(Direction::Down));
    }

    #[test]
    fn test_release_promotes_second_held_key() {
        let mut manager = InputManager::new();
        manager.handle_key(ElementState::Pressed, KeyCode::KeyW, false);
        manager.handle_key(ElementState::Pressed, KeyCode::KeyD, false);
        manager.handle_key(ElementState::Released, KeyCode::KeyW, false);

        assert_eq!(manager.direction(0), Some(Direction::Right));
    }

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut manager = InputManager::new();
        manager.handle_key(ElementState::Pressed, KeyCode::Space, false);
        manager.handle_key(ElementState::Pressed, KeyCode::Space, true); // OS repeat
        assert!(manager.take_fire(0));
        assert!(!manager.take_fire(0));
    }

    #[test]
    fn test_repeats_are_ignored_for_directions() {
        let mut manager = InputManager::new();
        manager.handle_key(ElementState::Pressed, KeyCode::KeyA, true);
        assert_eq!(manager.direction(0), None);
    }

    #[test]
    fn test_restart_key() {
        let mut manager = InputManager::new();
        assert!(!manager.take_restart());
        manager.handle_key(ElementState::Pressed, action::RESTART_KEY, false);
        assert!(manager.take_restart());
        assert!(!manager.take_restart());
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let mut manager = InputManager::new();
        manager.handle_key(ElementState::Pressed, KeyCode::KeyQ, false);
        assert_eq!(manager.direction(0), None);
        assert_eq!(manager.direction(1), None);
        assert!(!manager.take_fire(0));
    }

    #[test]
    fn test_reset_all() {
        let mut manager = InputManager::new();
        manager.handle_key(ElementState::Pressed, KeyCode::KeyW, false);
        manager.handle_key(ElementState::Pressed, KeyCode::ShiftRight, false);
        manager.reset_all();
        assert_eq!(manager.direction(0), None);
        assert!(!manager.take_fire(1));
    }
}
