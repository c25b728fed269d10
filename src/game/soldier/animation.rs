// Sprite frames and per-frame hitboxes

use crate::core::math::Rect;
use glam::Vec2;

/// Number of soldier sprite frames
pub const FRAME_COUNT: usize = 14;

/// Projectile hitbox per sprite frame, relative to the sprite origin.
///
/// The frames have very different limb extents (a sideways soldier is
/// wide and short, an upright one narrow and tall), so each frame gets
/// its own rectangle, all of them tighter than the full 90x95 sprite.
/// Empirical, tuned frame by frame against the sprite sheet.
const FRAME_HITBOXES: [Rect; FRAME_COUNT] = [
    Rect::new(30.0, 10.0, 32.0, 78.0), // 0: facing up
    Rect::new(26.0, 12.0, 42.0, 74.0), // 1: NE diagonal
    Rect::new(24.0, 18.0, 58.0, 60.0), // 2: facing right
    Rect::new(22.0, 16.0, 46.0, 66.0), // 3: SE diagonal / down lead step
    Rect::new(30.0, 8.0, 32.0, 80.0),  // 4: facing down
    Rect::new(22.0, 16.0, 46.0, 66.0), // 5: SW diagonal
    Rect::new(10.0, 18.0, 58.0, 60.0), // 6: facing left
    Rect::new(24.0, 12.0, 42.0, 74.0), // 7: NW diagonal / up lead step
    Rect::new(28.0, 10.0, 34.0, 78.0), // 8: up trail step
    Rect::new(24.0, 18.0, 58.0, 62.0), // 9: right trail step
    Rect::new(24.0, 18.0, 58.0, 62.0), // 10: right lead step
    Rect::new(28.0, 8.0, 34.0, 80.0),  // 11: down trail step
    Rect::new(8.0, 18.0, 58.0, 62.0),  // 12: left trail step
    Rect::new(8.0, 18.0, 58.0, 62.0),  // 13: left lead step
];

/// Hitbox for a sprite frame, placed at a soldier origin
pub fn frame_hitbox(frame: usize, origin: Vec2) -> Rect {
    FRAME_HITBOXES[frame].translated(origin)
}

/// Texture file name for a sprite frame, for the rendering layer
#[allow(dead_code)]
pub fn frame_texture_name(frame: usize) -> String {
    format!("soldier{frame}.png")
}
