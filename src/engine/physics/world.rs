// Playfield boundaries

use crate::engine::input::Direction;
use glam::Vec2;

/// Margin between a sprite origin and the top edge
const MARGIN_TOP: f32 = 16.0;
/// Margin between a sprite origin and the right edge
const MARGIN_RIGHT: f32 = 90.0;
/// Margin between a sprite origin and the bottom edge
const MARGIN_BOTTOM: f32 = 95.0;
/// Margin between a sprite origin and the left edge
const MARGIN_LEFT: f32 = 0.0;

/// The rectangular play area.
///
/// Sprite positions are top-left origins, so the margins are asymmetric:
/// the right and bottom margins account for the sprite extending beyond
/// its origin, the top margin for the transparent strip above the head.
#[derive(Debug, Clone, Copy)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Create a playfield from the current surface dimensions
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Would a step of `speed` in `dir` from `origin` leave the field?
    pub fn blocks(&self, dir: Direction, origin: Vec2, speed: f32) -> bool {
        match dir {
            Direction::Up => origin.y - speed < MARGIN_TOP,
            Direction::Left => origin.x - speed < MARGIN_LEFT,
            Direction::Right => origin.x + speed > self.width - MARGIN_RIGHT,
            Direction::Down => origin.y + speed > self.height - MARGIN_BOTTOM,
        }
    }

    /// Is a point further than `margin` outside the field on any side?
    pub fn well_outside(&self, point: Vec2, margin: f32) -> bool {
        point.x < -margin
            || point.y < -margin
            || point.x > self.width + margin
            || point.y > self.height + margin
    }
}

impl Default for Playfield {
    /// The classic 700x700 battlefield
    fn default() -> Self {
        Self::new(700.0, 700.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_never_blocked() {
        let field = Playfield::default();
        let center = Vec2::new(350.0, 350.0);
        for dir in [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ] {
            assert!(!field.blocks(dir, center, 3.0));
        }
    }

    #[test]
    fn test_top_margin() {
        let field = Playfield::default();
        assert!(field.blocks(Direction::Up, Vec2::new(350.0, 18.0), 3.0));
        assert!(!field.blocks(Direction::Up, Vec2::new(350.0, 19.0), 3.0));
    }

    #[test]
    fn test_left_margin() {
        let field = Playfield::default();
        assert!(field.blocks(Direction::Left, Vec2::new(2.0, 350.0), 3.0));
        assert!(!field.blocks(Direction::Left, Vec2::new(3.0, 350.0), 3.0));
    }

    #[test]
    fn test_right_margin_accounts_for_sprite_width() {
        let field = Playfield::default();
        assert!(field.blocks(Direction::Right, Vec2::new(608.0, 350.0), 3.0));
        assert!(!field.blocks(Direction::Right, Vec2::new(607.0, 350.0), 3.0));
    }

    #[test]
    fn test_bottom_margin_accounts_for_sprite_height() {
        let field = Playfield::default();
        assert!(field.blocks(Direction::Down, Vec2::new(350.0, 603.0), 3.0));
        assert!(!field.blocks(Direction::Down, Vec2::new(350.0, 602.0), 3.0));
    }

    #[test]
    fn test_well_outside() {
        let field = Playfield::default();
        assert!(!field.well_outside(Vec2::new(-50.0, 350.0), 100.0));
        assert!(field.well_outside(Vec2::new(-101.0, 350.0), 100.0));
        assert!(field.well_outside(Vec2::new(350.0, 900.0), 100.0));
    }
}
