// Movement blocking tests

use super::world::Playfield;
use crate::core::math::Rect;
use crate::engine::input::Direction;
use glam::Vec2;

/// Decide whether a one-step move is blocked.
///
/// A move is blocked when it would cross the playfield boundary or when
/// the mover's origin currently lies inside any of the supplied blocking
/// zones for that direction. Zones are directional rectangles computed
/// by whoever owns the obstacles; this function only evaluates them.
///
/// Pure: callers must check before mutating the position. Any overlap
/// counts as blocking, staying put is always the safe outcome.
pub fn move_blocked(
    field: &Playfield,
    dir: Direction,
    origin: Vec2,
    speed: f32,
    zones: impl IntoIterator<Item = Rect>,
) -> bool {
    if field.blocks(dir, origin, speed) {
        return true;
    }
    zones.into_iter().any(|zone| zone.contains(origin))
}
