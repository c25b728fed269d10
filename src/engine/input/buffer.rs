// Held-direction buffering for reliable walk input

use super::action::Direction;

/// Maximum number of simultaneously held directions that are tracked
const MAX_HELD: usize = 2;

/// FIFO of the directions a player is currently holding.
///
/// The front entry is the direction applied each tick. Holding a second
/// key buffers it behind the first; releasing the front key promotes the
/// buffered one without requiring a fresh press, which is what makes
/// rolling from one direction into another feel smooth. A third held
/// direction is ignored until a slot frees up.
#[derive(Debug, Default)]
pub struct DirectionBuffer {
    held: Vec<Direction>,
}

impl DirectionBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            held: Vec::with_capacity(MAX_HELD),
        }
    }

    /// Record a key-down for a direction
    pub fn press(&mut self, dir: Direction) {
        if self.held.len() < MAX_HELD && !self.held.contains(&dir) {
            self.held.push(dir);
        }
    }

    /// Record a key-up for a direction, promoting any buffered entry
    pub fn release(&mut self, dir: Direction) {
        self.held.retain(|&d| d != dir);
    }

    /// The direction to apply this tick, if any key is held
    pub fn current(&self) -> Option<Direction> {
        self.held.first().copied()
    }

    /// Forget all held directions
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Number of tracked directions
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.held.len()
    }

    /// Check if no direction is held
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
