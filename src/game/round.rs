// Round orchestrator
//
// Owns everything on the field and drives one logic tick at a time:
// walk both soldiers from their buffered input, apply pending shots,
// resolve projectile impacts, advance the shots, then check the win
// condition. All mutation happens inside `tick`, so a round is always
// observed between ticks in a consistent state.

use crate::engine::input::Direction;
use crate::engine::physics::Playfield;
use crate::game::layout::{self, LayoutError};
use crate::game::obstacles::{Barrel, Sandbag};
use crate::game::projectile::{Projectile, ProjectileRegistry};
use crate::game::soldier::{Soldier, SoldierId};
use log::info;
use rand::Rng;

/// First score to reach this wins the round
pub const WIN_SCORE: u32 = 10;

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ticks are being simulated
    Active,
    /// Someone reached the winning score; terminal until an explicit
    /// restart
    Ended { winner: SoldierId },
}

/// One player's buffered input for a tick
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerCommand {
    /// Front of the player's direction buffer, if any key is held
    pub dir: Option<Direction>,
    /// Whether a shot was queued since the last tick
    pub fire: bool,
}

/// Setup parameters for a round
#[derive(Debug, Clone, Copy)]
pub struct RoundConfig {
    /// Walk distance per step, in pixels
    pub speed: f32,
    /// Number of barrels scattered on the field
    pub num_barrels: usize,
    /// Number of sandbags scattered on the field
    pub num_sandbags: usize,
    /// Play area
    pub field: Playfield,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            num_barrels: 4,
            num_sandbags: 4,
            field: Playfield::default(),
        }
    }
}

/// A single round of the match
pub struct Round {
    config: RoundConfig,
    soldiers: Vec<Soldier>,
    barrels: Vec<Barrel>,
    sandbags: Vec<Sandbag>,
    shots: ProjectileRegistry,
    phase: Phase,
}

impl Round {
    /// Set up a fresh round with a random layout
    pub fn new(config: RoundConfig, rng: &mut impl Rng) -> Result<Self, LayoutError> {
        let mut positions = layout::scatter(
            &config.field,
            2 + config.num_barrels + config.num_sandbags,
            rng,
        )?;

        let sandbags = positions
            .split_off(2 + config.num_barrels)
            .into_iter()
            .map(Sandbag::new)
            .collect();
        let barrels = positions.split_off(2).into_iter().map(Barrel::new).collect();
        let soldiers = positions
            .into_iter()
            .enumerate()
            .map(|(id, pos)| Soldier::new(id, pos))
            .collect();

        Ok(Self {
            config,
            soldiers,
            barrels,
            sandbags,
            shots: ProjectileRegistry::new(),
            phase: Phase::Active,
        })
    }

    /// Run one logic tick with each player's buffered command.
    ///
    /// Does nothing once the round has ended; restarting is an explicit
    /// action, never a side effect of ticking.
    pub fn tick(&mut self, commands: [PlayerCommand; 2]) {
        if matches!(self.phase, Phase::Ended { .. }) {
            return;
        }

        for (i, command) in commands.iter().enumerate() {
            self.soldiers[i].walk(
                self.config.speed,
                command.dir,
                &self.config.field,
                &self.barrels,
                &self.sandbags,
            );
        }

        for (i, command) in commands.iter().enumerate() {
            let soldier = &self.soldiers[i];
            if command.fire && soldier.can_shoot() {
                self.shots
                    .spawn(soldier.pose(), soldier.position(), self.config.speed);
            }
        }

        self.shots.resolve_collisions(
            &mut self.soldiers,
            &self.sandbags,
            &mut self.barrels,
            &self.config.field,
        );
        self.shots.advance();

        if let Some(winner) = self
            .soldiers
            .iter()
            .find(|s| s.score() >= WIN_SCORE)
            .map(|s| s.id)
        {
            info!("player {winner} wins the round");
            self.phase = Phase::Ended { winner };
        }
    }

    /// Tear the field down and set up a new round: fresh layout, reset
    /// scores and poses, no shots in flight.
    pub fn restart(&mut self, rng: &mut impl Rng) -> Result<(), LayoutError> {
        let mut positions = layout::scatter(
            &self.config.field,
            2 + self.config.num_barrels + self.config.num_sandbags,
            rng,
        )?;

        let sandbag_positions = positions.split_off(2 + self.config.num_barrels);
        let barrel_positions = positions.split_off(2);
        for (soldier, pos) in self.soldiers.iter_mut().zip(positions) {
            soldier.reset(pos);
        }
        self.barrels = barrel_positions.into_iter().map(Barrel::new).collect();
        self.sandbags = sandbag_positions.into_iter().map(Sandbag::new).collect();
        self.shots.clear();
        self.phase = Phase::Active;
        info!("round restarted");
        Ok(())
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Soldiers in roster order (positions, frames and scores for the
    /// rendering layer)
    #[allow(dead_code)]
    pub fn soldiers(&self) -> &[Soldier] {
        &self.soldiers
    }

    /// Barrels, including destroyed ones (check visibility when drawing)
    #[allow(dead_code)]
    pub fn barrels(&self) -> &[Barrel] {
        &self.barrels
    }

    /// Sandbags
    #[allow(dead_code)]
    pub fn sandbags(&self) -> &[Sandbag] {
        &self.sandbags
    }

    /// Shots in flight, in spawn order
    #[allow(dead_code)]
    pub fn shots(&self) -> &[Projectile] {
        self.shots.shots()
    }

    /// Both players' scores in roster order
    pub fn scores(&self) -> [u32; 2] {
        [self.soldiers[0].score(), self.soldiers[1].score()]
    }
}
