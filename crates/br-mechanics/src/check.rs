//! Performing a roll end to end.
//!
//! [`perform_roll`] clamps the requested pool, rolls it, reads the
//! status, and for resistance rolls also the stress cost.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dice::{DiceRoller, MAX_POOL_DICE, PoolSize, RollPool};
use crate::error::{MechError, MechResult};
use crate::resolution::{self, RollStatus, Stress};
use crate::rules::{Effect, Position, attribute_label, is_attribute_action};

/// What the player asked to roll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollRequest {
    /// Requested pool size; zero or less is a zero-dice roll.
    pub dice: i32,
    /// Action or attribute being rolled, empty for a plain roll.
    pub attribute: String,
    /// Position for action rolls.
    pub position: Position,
    /// Effect for action rolls.
    pub effect: Effect,
}

impl RollRequest {
    /// A plain roll of `dice` dice.
    pub fn new(dice: i32) -> Self {
        Self {
            dice,
            ..Self::default()
        }
    }

    /// Set the action or attribute name.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    /// Set the position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }
}

/// Which kind of roll was made, with its kind-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RollKind {
    /// An action roll.
    Action {
        /// Position the action was made from.
        position: Position,
        /// Effect level of the action.
        effect: Effect,
    },
    /// A resistance roll.
    Resistance {
        /// Stress the resistance costs.
        stress: Stress,
    },
}

/// Everything a presenter needs to show a finished roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollReport {
    /// Faces in roll order.
    pub dice: Vec<u32>,
    /// Whether the pool was a zero-dice roll.
    pub zero_mode: bool,
    /// Status tier.
    pub status: RollStatus,
    /// Action or resistance data.
    #[serde(flatten)]
    pub kind: RollKind,
    /// Name that was rolled, as requested.
    pub attribute: String,
    /// Display label for `attribute`.
    pub attribute_label: String,
}

impl RollReport {
    /// True for action rolls.
    pub fn is_action(&self) -> bool {
        matches!(self.kind, RollKind::Action { .. })
    }

    /// Stress cost, present only on resistance rolls.
    pub fn stress(&self) -> Option<Stress> {
        match self.kind {
            RollKind::Resistance { stress } => Some(stress),
            RollKind::Action { .. } => None,
        }
    }
}

/// Roll a request with the given roller.
pub fn perform_roll(request: &RollRequest, roller: &mut impl DiceRoller) -> MechResult<RollReport> {
    let size = PoolSize::from_requested(request.dice);
    if size.dice > MAX_POOL_DICE {
        return Err(MechError::PoolTooLarge {
            requested: request.dice,
            max: MAX_POOL_DICE,
        });
    }
    let faces = roller.roll_d6(size.dice);

    let pool = RollPool::new(faces, size.zero_mode).inspect_err(|e| {
        warn!(requested = request.dice, error = %e, "roller produced an unusable pool");
    })?;

    let status = resolution::classify(pool.dice(), pool.zero_mode())?;
    let kind = if is_attribute_action(&request.attribute) {
        RollKind::Action {
            position: request.position,
            effect: request.effect,
        }
    } else {
        RollKind::Resistance {
            stress: resolution::stress(pool.dice(), pool.zero_mode())?,
        }
    };

    debug!(
        attribute = %request.attribute,
        pool = %pool,
        count = pool.count(),
        zero_mode = pool.zero_mode(),
        %status,
        "roll complete"
    );

    Ok(RollReport {
        zero_mode: pool.zero_mode(),
        dice: pool.into_dice(),
        status,
        kind,
        attribute: request.attribute.clone(),
        attribute_label: attribute_label(&request.attribute),
    })
}
