// Physics: playfield bounds and axis-aligned blocking tests
//
// No solver and no velocities here. Movement in this game is discrete
// one-step displacements, so collision is a set of rectangle tests
// evaluated before a step is applied.

mod collision;
mod world;

pub use collision::move_blocked;
pub use world::Playfield;
