// Soldier system
//
// Everything related to the player-controlled soldiers:
// - The directional pose automaton (pure transition logic)
// - Sprite frame indices and per-frame hitboxes
// - The soldier entity combining pose, position and score

pub mod animation;
pub mod soldier;
pub mod state;

// Re-export commonly used types
pub use soldier::{Soldier, SoldierId};
pub use state::Pose;

// Re-export for the rendering layer and future expansion
#[allow(unused_imports)]
pub use animation::{frame_hitbox, frame_texture_name, FRAME_COUNT};
#[allow(unused_imports)]
pub use state::{transition, Transition};
