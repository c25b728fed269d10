// Projectiles and the registry that owns them
//
// The registry is an ordered Vec: iteration order is spawn order, and
// that order is part of the semantics (it decides which entity registers
// a hit when several overlap a shot in the same tick). Removal is an
// index-based structural update, never a flag.

use crate::core::math::Rect;
use crate::engine::input::Direction;
use crate::engine::physics::Playfield;
use crate::game::obstacles::{Barrel, Sandbag};
use crate::game::soldier::{Pose, Soldier};
use glam::Vec2;
use log::{debug, info};

/// How much faster a shot travels than the soldier who fired it
const SHOT_SPEED_BONUS: f32 = 25.0;

/// Bullet sprite edge length
const SHOT_SIZE: f32 = 12.0;

/// Shots further than this outside the field are culled
const CULL_MARGIN: f32 = 100.0;

/// Muzzle offset from the sprite origin when firing upward
const MUZZLE_UP: Vec2 = Vec2::new(38.0, -6.0);
/// Muzzle offset when firing right
const MUZZLE_RIGHT: Vec2 = Vec2::new(84.0, 40.0);
/// Muzzle offset when firing downward
const MUZZLE_DOWN: Vec2 = Vec2::new(36.0, 88.0);
/// Muzzle offset when firing left
const MUZZLE_LEFT: Vec2 = Vec2::new(-12.0, 40.0);

fn muzzle_offset(dir: Direction) -> Vec2 {
    match dir {
        Direction::Up => MUZZLE_UP,
        Direction::Right => MUZZLE_RIGHT,
        Direction::Down => MUZZLE_DOWN,
        Direction::Left => MUZZLE_LEFT,
    }
}

/// A shot in flight. Direction and speed are fixed at spawn.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pos: Vec2,
    dir: Direction,
    speed: f32,
}

impl Projectile {
    /// Current position
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Travel direction
    #[allow(dead_code)]
    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Distance travelled per tick
    #[allow(dead_code)]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Move one tick along the travel direction
    fn advance(&mut self) {
        self.pos += self.dir.vector() * self.speed;
    }

    /// Bullet hitbox
    pub fn hitbox(&self) -> Rect {
        Rect::from_pos(self.pos, SHOT_SIZE, SHOT_SIZE)
    }
}

/// Owns every shot in flight, in spawn order
#[derive(Debug, Default)]
pub struct ProjectileRegistry {
    shots: Vec<Projectile>,
}

impl ProjectileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { shots: Vec::new() }
    }

    /// Spawn a shot from a soldier's pose and origin.
    ///
    /// The travel direction comes from the pose's aim bucket, the muzzle
    /// offset is fixed per bucket, and the shot flies faster than the
    /// soldier walks.
    pub fn spawn(&mut self, pose: Pose, origin: Vec2, base_speed: f32) {
        let dir = pose.aim();
        let shot = Projectile {
            pos: origin + muzzle_offset(dir),
            dir,
            speed: base_speed + SHOT_SPEED_BONUS,
        };
        debug!("shot spawned at {:?} travelling {:?}", shot.pos, dir);
        self.shots.push(shot);
    }

    /// Move every shot one tick. Never removes anything.
    pub fn advance(&mut self) {
        for shot in &mut self.shots {
            shot.advance();
        }
    }

    /// Test every shot against the field in spawn order and apply impact
    /// side effects.
    ///
    /// Per shot the passes run soldiers, then sandbags, then barrels,
    /// each in collection order, and stop at the first impact, so a shot
    /// is removed at most once per call. Hitting a soldier awards the
    /// point to the other one; hitting a visible barrel knocks it out;
    /// sandbags just soak the shot. Shots far outside the field are
    /// culled here as well.
    pub fn resolve_collisions(
        &mut self,
        soldiers: &mut [Soldier],
        sandbags: &[Sandbag],
        barrels: &mut [Barrel],
        field: &Playfield,
    ) {
        let mut i = 0;
        while i < self.shots.len() {
            let hitbox = self.shots[i].hitbox();

            if field.well_outside(self.shots[i].position(), CULL_MARGIN) {
                self.shots.remove(i);
                continue;
            }

            if let Some(hit) = soldiers
                .iter()
                .position(|s| s.hitbox().intersects(&hitbox))
            {
                let scorer = (hit + 1) % soldiers.len();
                soldiers[scorer].add_point();
                info!(
                    "player {} hit, point to player {} (score {})",
                    hit,
                    scorer,
                    soldiers[scorer].score()
                );
                self.shots.remove(i);
                continue;
            }

            if sandbags.iter().any(|s| s.hitbox().intersects(&hitbox)) {
                debug!("shot absorbed by a sandbag");
                self.shots.remove(i);
                continue;
            }

            if let Some(barrel) = barrels
                .iter_mut()
                .find(|b| b.is_visible() && b.hitbox().intersects(&hitbox))
            {
                barrel.destroy();
                info!("barrel at {:?} destroyed", barrel.position());
                self.shots.remove(i);
                continue;
            }

            i += 1;
        }
    }

    /// Shots currently in flight, in spawn order
    pub fn shots(&self) -> &[Projectile] {
        &self.shots
    }

    /// Number of shots in flight
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// Check if no shot is in flight
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Drop every shot (round teardown)
    pub fn clear(&mut self) {
        self.shots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BASE_SPEED: f32 = 3.0;

    fn field() -> Playfield {
        Playfield::default()
    }

    #[test]
    fn test_spawn_facing_right_travels_plus_x() {
        let mut registry = ProjectileRegistry::new();
        registry.spawn(Pose::FaceRight, Vec2::new(100.0, 100.0), BASE_SPEED);

        assert_eq!(registry.len(), 1);
        let shot = registry.shots()[0];
        assert_eq!(shot.direction(), Direction::Right);
        assert_relative_eq!(shot.speed(), BASE_SPEED + 25.0);

        let before = shot.position();
        registry.advance();
        let after = registry.shots()[0].position();
        assert_relative_eq!(after.x - before.x, BASE_SPEED + 25.0);
        assert_relative_eq!(after.y, before.y);
    }

    #[test]
    fn test_advance_is_exact_every_tick() {
        let mut registry = ProjectileRegistry::new();
        registry.spawn(Pose::FaceUp, Vec2::new(300.0, 300.0), BASE_SPEED);
        let start = registry.shots()[0].position();

        for ticks in 1..=5 {
            registry.advance();
            let pos = registry.shots()[0].position();
            assert_relative_eq!(pos.y, start.y - ticks as f32 * (BASE_SPEED + 25.0));
            assert_relative_eq!(pos.x, start.x);
        }
    }

    #[test]
    fn test_muzzle_offset_depends_on_aim() {
        let mut registry = ProjectileRegistry::new();
        let origin = Vec2::new(200.0, 200.0);
        registry.spawn(Pose::FaceUp, origin, BASE_SPEED);
        registry.spawn(Pose::FaceLeft, origin, BASE_SPEED);
        assert_ne!(
            registry.shots()[0].position(),
            registry.shots()[1].position()
        );
    }

    #[test]
    fn test_hit_awards_point_to_the_other_player() {
        let mut registry = ProjectileRegistry::new();
        let mut soldiers = [
            Soldier::new(0, Vec2::new(600.0, 600.0)),
            Soldier::new(1, Vec2::new(300.0, 300.0)),
        ];

        // shot placed right on top of player 1's hitbox
        registry.spawn(Pose::FaceDown, Vec2::new(300.0, 232.0), BASE_SPEED);
        registry.resolve_collisions(&mut soldiers, &[], &mut [], &field());

        assert!(registry.is_empty());
        assert_eq!(soldiers[0].score(), 1);
        assert_eq!(soldiers[1].score(), 0, "the hit player never scores");
    }

    #[test]
    fn test_sandbag_soaks_shot_without_side_effects() {
        let mut registry = ProjectileRegistry::new();
        let mut soldiers = [
            Soldier::new(0, Vec2::new(600.0, 600.0)),
            Soldier::new(1, Vec2::new(600.0, 100.0)),
        ];
        let sandbags = [Sandbag::new(Vec2::new(300.0, 300.0))];

        registry.spawn(Pose::FaceRight, Vec2::new(220.0, 270.0), BASE_SPEED);
        registry.resolve_collisions(&mut soldiers, &sandbags, &mut [], &field());

        assert!(registry.is_empty());
        assert_eq!(soldiers[0].score(), 0);
        assert_eq!(soldiers[1].score(), 0);
    }

    #[test]
    fn test_barrel_destroyed_exactly_once() {
        let mut registry = ProjectileRegistry::new();
        let mut soldiers = [
            Soldier::new(0, Vec2::new(600.0, 600.0)),
            Soldier::new(1, Vec2::new(600.0, 100.0)),
        ];
        let mut barrels = [Barrel::new(Vec2::new(300.0, 300.0))];

        registry.spawn(Pose::FaceRight, Vec2::new(230.0, 270.0), BASE_SPEED);
        registry.resolve_collisions(&mut soldiers, &[], &mut barrels, &field());
        assert!(!barrels[0].is_visible());
        assert!(registry.is_empty());

        // a second shot through the same spot flies on: the dead barrel
        // neither blocks nor collides
        registry.spawn(Pose::FaceRight, Vec2::new(230.0, 270.0), BASE_SPEED);
        registry.resolve_collisions(&mut soldiers, &[], &mut barrels, &field());
        assert_eq!(registry.len(), 1);
        assert!(!barrels[0].is_visible());
    }

    #[test]
    fn test_at_most_one_impact_per_shot_per_call() {
        let mut registry = ProjectileRegistry::new();
        // soldier and barrel both overlap the shot; the soldier pass
        // wins and the barrel survives this call
        let mut soldiers = [
            Soldier::new(0, Vec2::new(600.0, 600.0)),
            Soldier::new(1, Vec2::new(300.0, 300.0)),
        ];
        let mut barrels = [Barrel::new(Vec2::new(300.0, 320.0))];

        registry.spawn(Pose::FaceDown, Vec2::new(300.0, 232.0), BASE_SPEED);
        registry.resolve_collisions(&mut soldiers, &[], &mut barrels, &field());

        assert!(registry.is_empty());
        assert_eq!(soldiers[0].score(), 1);
        assert!(barrels[0].is_visible());
    }

    #[test]
    fn test_tie_break_first_soldier_in_roster_order() {
        let mut registry = ProjectileRegistry::new();
        // both soldiers stacked on the same spot
        let mut soldiers = [
            Soldier::new(0, Vec2::new(300.0, 300.0)),
            Soldier::new(1, Vec2::new(300.0, 300.0)),
        ];

        registry.spawn(Pose::FaceDown, Vec2::new(300.0, 232.0), BASE_SPEED);
        registry.resolve_collisions(&mut soldiers, &[], &mut [], &field());

        // player 0 registers the hit, so player 1 scores
        assert_eq!(soldiers[0].score(), 0);
        assert_eq!(soldiers[1].score(), 1);
    }

    #[test]
    fn test_shots_far_outside_the_field_are_culled() {
        let mut registry = ProjectileRegistry::new();
        registry.spawn(Pose::FaceUp, Vec2::new(300.0, 20.0), BASE_SPEED);
        let mut soldiers = [
            Soldier::new(0, Vec2::new(600.0, 600.0)),
            Soldier::new(1, Vec2::new(600.0, 100.0)),
        ];

        for _ in 0..10 {
            registry.advance();
        }
        registry.resolve_collisions(&mut soldiers, &[], &mut [], &field());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_registry_operations_are_noops() {
        let mut registry = ProjectileRegistry::new();
        let mut soldiers = [
            Soldier::new(0, Vec2::new(100.0, 100.0)),
            Soldier::new(1, Vec2::new(500.0, 500.0)),
        ];
        registry.advance();
        registry.resolve_collisions(&mut soldiers, &[], &mut [], &field());
        assert!(registry.is_empty());
    }
}
