//! Pool sizing and validated roll pools.

use serde::{Deserialize, Serialize};

use super::is_d6_face;
use crate::error::{MechError, MechResult};

/// Physical dice in a zero-dice roll.
pub const ZERO_MODE_DICE: u32 = 2;

/// Largest pool that will be rolled.
pub const MAX_POOL_DICE: u32 = 20;

/// How many dice to physically roll for a requested pool size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSize {
    /// Dice to roll.
    pub dice: u32,
    /// True when the requested pool was empty and the worst of two counts.
    pub zero_mode: bool,
}

impl PoolSize {
    /// Clamp a requested (possibly negative) dice count.
    ///
    /// Negative counts are treated as zero, and a zero count becomes two
    /// dice read in zero mode.
    pub fn from_requested(requested: i32) -> Self {
        match u32::try_from(requested) {
            Ok(dice) if dice > 0 => Self {
                dice,
                zero_mode: false,
            },
            _ => Self {
                dice: ZERO_MODE_DICE,
                zero_mode: true,
            },
        }
    }
}

/// Check that `dice` is something the outcome engine can read.
pub(crate) fn validate(dice: &[u32], zero_mode: bool) -> MechResult<()> {
    if dice.is_empty() {
        return Err(MechError::InvalidPool("no dice were rolled".to_string()));
    }
    if zero_mode && dice.len() != ZERO_MODE_DICE as usize {
        return Err(MechError::InvalidPool(format!(
            "a zero-dice roll needs exactly {ZERO_MODE_DICE} dice, got {}",
            dice.len()
        )));
    }
    if let Some(bad) = dice.iter().find(|&&d| !is_d6_face(d)) {
        return Err(MechError::InvalidPool(format!("{bad} is not a d6 face")));
    }
    Ok(())
}

/// The faces of one roll together with its zero-mode flag.
///
/// Construction validates the pool, so a `RollPool` can always be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollPool {
    dice: Vec<u32>,
    zero_mode: bool,
}

impl RollPool {
    /// Build a pool from rolled faces.
    pub fn new(dice: Vec<u32>, zero_mode: bool) -> MechResult<Self> {
        validate(&dice, zero_mode)?;
        Ok(Self { dice, zero_mode })
    }

    /// Faces in roll order.
    pub fn dice(&self) -> &[u32] {
        &self.dice
    }

    /// Whether this is a zero-dice roll.
    pub fn zero_mode(&self) -> bool {
        self.zero_mode
    }

    /// The highest face.
    pub fn highest(&self) -> u32 {
        self.dice.iter().copied().max().unwrap_or_default()
    }

    /// The lowest face.
    pub fn lowest(&self) -> u32 {
        self.dice.iter().copied().min().unwrap_or_default()
    }

    /// Number of dice in the pool.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Give back the faces.
    pub fn into_dice(self) -> Vec<u32> {
        self.dice
    }
}

impl std::fmt::Display for RollPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_request_rolls_that_many() {
        assert_eq!(
            PoolSize::from_requested(3),
            PoolSize {
                dice: 3,
                zero_mode: false
            }
        );
        assert_eq!(PoolSize::from_requested(1).dice, 1);
    }

    #[test]
    fn zero_request_rolls_two_in_zero_mode() {
        assert_eq!(
            PoolSize::from_requested(0),
            PoolSize {
                dice: 2,
                zero_mode: true
            }
        );
    }

    #[test]
    fn negative_request_clamps_to_zero_mode() {
        assert_eq!(PoolSize::from_requested(-4), PoolSize::from_requested(0));
        assert_eq!(PoolSize::from_requested(i32::MIN), PoolSize::from_requested(0));
    }

    #[test]
    fn empty_pool_rejected() {
        let err = RollPool::new(vec![], false).unwrap_err();
        assert!(matches!(err, MechError::InvalidPool(_)));
    }

    #[test]
    fn zero_mode_needs_two_dice() {
        assert!(RollPool::new(vec![4], true).is_err());
        assert!(RollPool::new(vec![4, 5, 6], true).is_err());
        assert!(RollPool::new(vec![4, 5], true).is_ok());
    }

    #[test]
    fn out_of_range_faces_rejected() {
        assert!(RollPool::new(vec![0, 3], false).is_err());
        assert!(RollPool::new(vec![7], false).is_err());
        let err = RollPool::new(vec![2, 9], false).unwrap_err();
        assert_eq!(err.to_string(), "invalid pool: 9 is not a d6 face");
    }

    #[test]
    fn accessors() {
        let pool = RollPool::new(vec![3, 6, 1], false).unwrap();
        assert_eq!(pool.dice(), &[3, 6, 1]);
        assert_eq!(pool.highest(), 6);
        assert_eq!(pool.lowest(), 1);
        assert_eq!(pool.count(), 3);
        assert!(!pool.zero_mode());
        assert_eq!(pool.to_string(), "[3, 6, 1]");
        assert_eq!(pool.into_dice(), vec![3, 6, 1]);
    }
}
