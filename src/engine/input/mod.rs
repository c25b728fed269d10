// Input handling system
//
// Event-buffered keyboard input for two players. Key transitions are
// recorded as they arrive from the window system rather than polled, so
// a press and release inside the same tick is never lost.
//
// - `action`: walk/fire commands and default key bindings
// - `buffer`: two-slot FIFO of currently held directions
// - `player`: per-player input state (held directions + pending shot)
// - `manager`: routes winit key events to the right player

pub mod action;
pub mod buffer;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Direction;
pub use manager::InputManager;

// Re-export for remapping front-ends and future expansion
#[allow(unused_imports)]
pub use action::Command;
#[allow(unused_imports)]
pub use buffer::DirectionBuffer;
#[allow(unused_imports)]
pub use player::PlayerInput;
