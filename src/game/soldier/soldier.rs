// Soldier entity

use super::animation;
use super::state::{self, Pose};
use crate::core::math::Rect;
use crate::engine::input::Direction;
use crate::engine::physics::{self, Playfield};
use crate::game::obstacles::{Barrel, Sandbag};
use glam::Vec2;

/// Unique identifier for a soldier (index into the round's roster)
pub type SoldierId = usize;

/// A player-controlled soldier on the battlefield
#[derive(Debug)]
pub struct Soldier {
    /// Roster index
    pub id: SoldierId,
    /// Sprite origin (top-left) on the field
    pos: Vec2,
    /// Current pose
    pose: Pose,
    /// Leg toggle for the walk cycle
    toggle: bool,
    /// Points scored this round
    score: u32,
}

impl Soldier {
    /// Place a new soldier, resting and facing up
    pub fn new(id: SoldierId, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            pose: Pose::FaceUp,
            toggle: false,
            score: 0,
        }
    }

    /// Current position (sprite origin)
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Move the soldier somewhere, pose untouched
    #[allow(dead_code)]
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Current pose
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Sprite frame to display this tick
    pub fn frame(&self) -> usize {
        self.pose.frame()
    }

    /// Points scored this round
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Award a point
    pub fn add_point(&mut self) {
        self.score += 1;
    }

    /// Hitbox used for projectile collision, specific to the current frame
    pub fn hitbox(&self) -> Rect {
        animation::frame_hitbox(self.frame(), self.pos)
    }

    /// Soldiers can only fire from a resting cardinal pose; mid-pivot
    /// and mid-step the weapon is not lined up.
    pub fn can_shoot(&self) -> bool {
        self.pose.is_facing()
    }

    /// The direction the soldier currently aims in
    #[allow(dead_code)]
    pub fn aim(&self) -> Direction {
        self.pose.aim()
    }

    /// Advance the pose automaton one tick and apply its displacement
    /// unless collision vetoes it.
    ///
    /// The pose and leg toggle always update; only the position is
    /// subject to the veto. Invisible barrels never block.
    pub fn walk(
        &mut self,
        speed: f32,
        dir: Option<Direction>,
        field: &Playfield,
        barrels: &[Barrel],
        sandbags: &[Sandbag],
    ) {
        let t = state::transition(self.pose, self.toggle, dir);

        if let Some(step_dir) = t.step {
            let zones = barrels
                .iter()
                .filter(|b| b.is_visible())
                .map(|b| b.block_zone(step_dir, speed))
                .chain(sandbags.iter().map(|s| s.block_zone(step_dir, speed)));

            if !physics::move_blocked(field, step_dir, self.pos, speed, zones) {
                self.pos += step_dir.vector() * speed;
            }
        }

        self.pose = t.pose;
        self.toggle = t.toggle;
    }

    /// Reset for a new round at a fresh spawn point
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.pose = Pose::FaceUp;
        self.toggle = false;
        self.score = 0;
    }
}
