/// Game loop timing and control system
///
/// Implements a fixed timestep game loop: the simulation advances in
/// discrete ticks at a constant rate regardless of how fast the window
/// pumps events. All game logic is tick-atomic, so a tick either runs
/// completely or not at all.
use std::time::{Duration, Instant};

/// Target logic rate (10 ticks per second, one tick per displayed frame)
pub const TICK_RATE: u32 = 10;
const TICK_DURATION: Duration = Duration::from_millis(100);

/// Maximum number of logic ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    tick_count: u64,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of logic ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        // Drop the backlog if we hit the clamp, otherwise we never catch up
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += u64::from(ticks);
        ticks
    }

    /// Tick period in seconds
    #[allow(dead_code)]
    pub fn tick_seconds(&self) -> f32 {
        1.0 / TICK_RATE as f32
    }

    /// Total frames seen so far
    #[allow(dead_code)]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total logic ticks executed so far
    #[allow(dead_code)]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
