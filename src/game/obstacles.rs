// Battlefield obstacles: barrels and sandbags
//
// Obstacles never move once placed. Each type carries two kinds of
// collision data: per-direction blocking zones tested against a walking
// soldier's origin, and a reduced hitbox for projectile impacts (full
// sprite width, shorter than the sprite so shots can fly over the top
// edge of the artwork).
//
// The blocking-zone constants are empirical. They describe a footprint
// narrower than the sprite, asymmetric around the origin because sprite
// origins sit at the top-left corner.

use crate::core::math::Rect;
use crate::engine::input::Direction;
use glam::Vec2;

/// Barrel sprite width
const BARREL_WIDTH: f32 = 60.0;
/// Height of the barrel's projectile hitbox (reduced from the sprite)
const BARREL_HIT_HEIGHT: f32 = 45.0;

/// Sandbag sprite width
const SANDBAG_WIDTH: f32 = 85.0;
/// Height of the sandbag's projectile hitbox (reduced from the sprite)
const SANDBAG_HIT_HEIGHT: f32 = 40.0;

/// An explosive barrel.
///
/// Destroyed barrels stay in the collection for the rest of the round
/// but become non-blocking and non-drawn. Visibility only ever goes
/// from true to false.
#[derive(Debug, Clone)]
pub struct Barrel {
    pos: Vec2,
    visible: bool,
}

impl Barrel {
    /// Place a barrel
    pub fn new(pos: Vec2) -> Self {
        Self { pos, visible: true }
    }

    /// Barrel position (sprite origin)
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Whether the barrel still stands
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Knock the barrel out. Idempotent; it never comes back this round.
    pub fn destroy(&mut self) {
        self.visible = false;
    }

    /// Zone of soldier origins blocked from stepping `dir` by this barrel
    pub fn block_zone(&self, dir: Direction, speed: f32) -> Rect {
        let o = self.pos;
        match dir {
            Direction::Up => Rect::new(o.x - 55.0, o.y, 75.0, 25.0 + speed),
            Direction::Down => Rect::new(o.x - 55.0, o.y - 80.0 - speed, 75.0, 80.0 + speed),
            Direction::Left => Rect::new(o.x, o.y - 70.0, 40.0 + speed, 80.0),
            Direction::Right => Rect::new(o.x - 75.0 - speed, o.y - 70.0, 75.0 + speed, 80.0),
        }
    }

    /// Hitbox for projectile impacts
    pub fn hitbox(&self) -> Rect {
        Rect::from_pos(self.pos, BARREL_WIDTH, BARREL_HIT_HEIGHT)
    }
}

/// A sandbag emplacement. Blocks movement and stops shots, but shots
/// never destroy it.
#[derive(Debug, Clone)]
pub struct Sandbag {
    pos: Vec2,
}

impl Sandbag {
    /// Place a sandbag
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Sandbag position (sprite origin)
    #[allow(dead_code)]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Zone of soldier origins blocked from stepping `dir` by this sandbag
    pub fn block_zone(&self, dir: Direction, speed: f32) -> Rect {
        let o = self.pos;
        match dir {
            Direction::Up => Rect::new(o.x - 60.0, o.y, 90.0, 20.0 + speed),
            Direction::Down => Rect::new(o.x - 60.0, o.y - 75.0 - speed, 90.0, 75.0 + speed),
            Direction::Left => Rect::new(o.x, o.y - 65.0, 55.0 + speed, 75.0),
            Direction::Right => Rect::new(o.x - 80.0 - speed, o.y - 65.0, 80.0 + speed, 75.0),
        }
    }

    /// Hitbox for projectile impacts
    pub fn hitbox(&self) -> Rect {
        Rect::from_pos(self.pos, SANDBAG_WIDTH, SANDBAG_HIT_HEIGHT)
    }
}
