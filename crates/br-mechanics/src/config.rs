//! Configuration for a rolling session.

use crate::dice::{MAX_POOL_DICE, SeededRoller};
use crate::error::{MechError, MechResult};
use crate::rules::{Effect, Position};

/// Configuration for rolling dice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollConfig {
    /// RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Largest pool the prompt offers (choices run from 0 to this).
    pub max_dice: u32,
    /// Position used when none is given.
    pub position: Position,
    /// Effect used when none is given.
    pub effect: Effect,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_dice: 10,
            position: Position::default(),
            effect: Effect::default(),
        }
    }
}

impl RollConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the largest pool on offer (clamped to 1-20).
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice.clamp(1, MAX_POOL_DICE);
        self
    }

    /// Set the default position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the default effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// Build the roller this configuration describes.
    pub fn roller(&self) -> SeededRoller {
        match self.seed {
            Some(seed) => SeededRoller::from_seed(seed),
            None => SeededRoller::from_os(),
        }
    }

    /// Parse a prompted pool size, accepting 0 through `max_dice`.
    pub fn parse_pool_choice(&self, input: &str) -> MechResult<i32> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| MechError::InvalidChoice(input.trim().to_string()))?;
        if !(0..=i64::from(self.max_dice)).contains(&value) {
            return Err(MechError::PromptRange {
                value,
                max: self.max_dice,
            });
        }
        i32::try_from(value).map_err(|_| MechError::PromptRange {
            value,
            max: self.max_dice,
        })
    }
}
