// Game layer: battlefield entities and the round orchestrator

pub mod layout;
pub mod obstacles;
pub mod projectile;
pub mod round;
pub mod soldier;

// Re-export commonly used types
pub use round::{Phase, PlayerCommand, Round, RoundConfig};

// Re-export for the rendering layer and future expansion
#[allow(unused_imports)]
pub use obstacles::{Barrel, Sandbag};
#[allow(unused_imports)]
pub use projectile::{Projectile, ProjectileRegistry};
#[allow(unused_imports)]
pub use soldier::{Pose, Soldier};
