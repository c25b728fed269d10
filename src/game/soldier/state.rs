// Directional pose automaton
//
// A soldier is always in exactly one pose. The four cardinal facings are
// the resting poses; the four diagonal turning poses model the one-tick
// pivot cost when the requested direction differs from the facing; the
// stepping poses last one tick, request a displacement and snap back to
// their facing. Sprite frames 3 and 7 are shared between a turning pose
// and one stepping leg, so the automaton keeps them as distinct variants
// that render with the same frame.
//
// The transition function is pure. It never moves anything: it reports
// the displacement it wants and the caller applies it only if collision
// allows. The pose and leg toggle change either way.

use crate::engine::input::Direction;

/// One of the soldier's poses.
///
/// Variant order follows the sprite sheet; `frame` maps back onto the
/// 14 soldier frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pose {
    /// Resting, facing up (frame 0)
    FaceUp,
    /// Pivoting between up and right (frame 1)
    TurnNorthEast,
    /// Resting, facing right (frame 2)
    FaceRight,
    /// Pivoting between right and down (frame 3)
    TurnSouthEast,
    /// Resting, facing down (frame 4)
    FaceDown,
    /// Pivoting between down and left (frame 5)
    TurnSouthWest,
    /// Resting, facing left (frame 6)
    FaceLeft,
    /// Pivoting between left and up (frame 7)
    TurnNorthWest,
    /// Stepping up, leading leg (frame 7)
    StepUpLead,
    /// Stepping up, trailing leg (frame 8)
    StepUpTrail,
    /// Stepping right, leading leg (frame 10)
    StepRightLead,
    /// Stepping right, trailing leg (frame 9)
    StepRightTrail,
    /// Stepping down, leading leg (frame 3)
    StepDownLead,
    /// Stepping down, trailing leg (frame 11)
    StepDownTrail,
    /// Stepping left, leading leg (frame 13)
    StepLeftLead,
    /// Stepping left, trailing leg (frame 12)
    StepLeftTrail,
}

impl Default for Pose {
    fn default() -> Self {
        Self::FaceUp
    }
}

impl Pose {
    /// Sprite frame index for this pose, always in [0, 13]
    pub fn frame(self) -> usize {
        match self {
            Self::FaceUp => 0,
            Self::TurnNorthEast => 1,
            Self::FaceRight => 2,
            Self::TurnSouthEast | Self::StepDownLead => 3,
            Self::FaceDown => 4,
            Self::TurnSouthWest => 5,
            Self::FaceLeft => 6,
            Self::TurnNorthWest | Self::StepUpLead => 7,
            Self::StepUpTrail => 8,
            Self::StepRightTrail => 9,
            Self::StepRightLead => 10,
            Self::StepDownTrail => 11,
            Self::StepLeftTrail => 12,
            Self::StepLeftLead => 13,
        }
    }

    /// Is this one of the four resting cardinal poses?
    pub fn is_facing(self) -> bool {
        matches!(
            self,
            Self::FaceUp | Self::FaceRight | Self::FaceDown | Self::FaceLeft
        )
    }

    /// Is this a one-tick pivot pose?
    #[allow(dead_code)]
    pub fn is_turning(self) -> bool {
        matches!(
            self,
            Self::TurnNorthEast | Self::TurnSouthEast | Self::TurnSouthWest | Self::TurnNorthWest
        )
    }

    /// Is this a one-tick stepping pose?
    #[allow(dead_code)]
    pub fn is_stepping(self) -> bool {
        !self.is_facing() && !self.is_turning()
    }

    /// The cardinal direction this pose aims in.
    ///
    /// Poses are grouped into four buckets matching the facings; the
    /// diagonal poses count towards the facing they share a shoulder
    /// with. Used for projectile spawning.
    pub fn aim(self) -> Direction {
        match self {
            Self::FaceUp | Self::TurnNorthWest | Self::StepUpLead | Self::StepUpTrail => {
                Direction::Up
            }
            Self::TurnNorthEast | Self::FaceRight | Self::StepRightLead | Self::StepRightTrail => {
                Direction::Right
            }
            Self::TurnSouthEast | Self::FaceDown | Self::StepDownLead | Self::StepDownTrail => {
                Direction::Down
            }
            Self::TurnSouthWest | Self::FaceLeft | Self::StepLeftLead | Self::StepLeftTrail => {
                Direction::Left
            }
        }
    }
}

/// Result of one automaton tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Pose after this tick
    pub pose: Pose,
    /// Leg toggle after this tick (false = leading leg next)
    pub toggle: bool,
    /// Displacement direction the automaton wants, if any
    pub step: Option<Direction>,
}

impl Transition {
    fn to(pose: Pose, toggle: bool) -> Self {
        Self {
            pose,
            toggle,
            step: None,
        }
    }

    fn step(pose: Pose, toggle: bool, dir: Direction) -> Self {
        Self {
            pose,
            toggle,
            step: Some(dir),
        }
    }
}

/// Advance the pose automaton by one tick.
///
/// `dir` is the buffered walk request, `None` meaning no key held.
/// Branch priority within a facing pose: same-direction step first, then
/// clockwise turn, then counter-clockwise turn; the opposite direction
/// turns clockwise.
pub fn transition(pose: Pose, toggle: bool, dir: Option<Direction>) -> Transition {
    use Direction::{Down, Left, Right, Up};
    use Pose::*;

    let Some(dir) = dir else {
        // Stepping poses are one tick long and resolve even without
        // input; everything else holds its pose.
        return match pose {
            StepUpLead | StepRightLead | StepDownLead | StepLeftLead => {
                Transition::to(pose_facing_of_step(pose), true)
            }
            StepUpTrail | StepRightTrail | StepDownTrail | StepLeftTrail => {
                Transition::to(pose_facing_of_step(pose), false)
            }
            _ => Transition::to(pose, toggle),
        };
    };

    match pose {
        FaceUp => match dir {
            Up if toggle => Transition::step(StepUpTrail, toggle, Up),
            Up => Transition::step(StepUpLead, toggle, Up),
            Right | Down => Transition::to(TurnNorthEast, toggle),
            Left => Transition::to(TurnNorthWest, toggle),
        },

        TurnNorthEast => match dir {
            Up | Left => Transition::to(FaceUp, toggle),
            Down | Right => Transition::to(FaceRight, toggle),
        },

        FaceRight => match dir {
            Right if toggle => Transition::step(StepRightTrail, toggle, Right),
            Right => Transition::step(StepRightLead, toggle, Right),
            Left | Down => Transition::to(TurnSouthEast, toggle),
            Up => Transition::to(TurnNorthEast, toggle),
        },

        // Processing a south-east pivot always arms the trailing leg
        TurnSouthEast => match dir {
            Down | Left | Up => Transition::to(FaceDown, true),
            Right => Transition::to(FaceRight, true),
        },

        FaceDown => match dir {
            Down if toggle => Transition::step(StepDownTrail, toggle, Down),
            Down => Transition::step(StepDownLead, toggle, Down),
            Left | Up => Transition::to(TurnSouthWest, toggle),
            Right => Transition::to(TurnSouthEast, toggle),
        },

        TurnSouthWest => match dir {
            Left | Up => Transition::to(FaceLeft, toggle),
            Right | Down => Transition::to(FaceDown, toggle),
        },

        FaceLeft => match dir {
            Left if toggle => Transition::step(StepLeftTrail, toggle, Left),
            Left => Transition::step(StepLeftLead, toggle, Left),
            Up | Right => Transition::to(TurnNorthWest, toggle),
            Down => Transition::to(TurnSouthWest, toggle),
        },

        // Processing a north-west pivot always arms the trailing leg
        TurnNorthWest => match dir {
            Up | Right => Transition::to(FaceUp, true),
            Left | Down => Transition::to(FaceLeft, true),
        },

        // Stepping poses snap back to their facing; the displacement is
        // only re-applied while the same direction is still held.
        StepUpLead => snap(FaceUp, true, Up, dir),
        StepUpTrail => snap(FaceUp, false, Up, dir),
        StepRightLead => snap(FaceRight, true, Right, dir),
        StepRightTrail => snap(FaceRight, false, Right, dir),
        StepDownLead => snap(FaceDown, true, Down, dir),
        StepDownTrail => snap(FaceDown, false, Down, dir),
        StepLeftLead => snap(FaceLeft, true, Left, dir),
        StepLeftTrail => snap(FaceLeft, false, Left, dir),
    }
}

fn snap(facing: Pose, toggle: bool, step_dir: Direction, requested: Direction) -> Transition {
    if requested == step_dir {
        Transition::step(facing, toggle, step_dir)
    } else {
        Transition::to(facing, toggle)
    }
}

fn pose_facing_of_step(pose: Pose) -> Pose {
    match pose {
        Pose::StepUpLead | Pose::StepUpTrail => Pose::FaceUp,
        Pose::StepRightLead | Pose::StepRightTrail => Pose::FaceRight,
        Pose::StepDownLead | Pose::StepDownTrail => Pose::FaceDown,
        Pose::StepLeftLead | Pose::StepLeftTrail => Pose::FaceLeft,
        other => other,
    }
}
