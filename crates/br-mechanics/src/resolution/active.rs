//! Active-die selection shared by status and stress.
//!
//! In a normal roll the highest die counts, with the second-highest
//! checked for a double six. In a zero-dice roll the lowest of the two
//! dice counts and there is no second die, except that two sixes are
//! still a critical.

use crate::dice::pool::validate;
use crate::error::MechResult;

/// The face that decides a crit.
const CRIT_FACE: u32 = 6;

/// How a pool reads once the active die has been picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DieReading {
    /// Zero-dice roll whose lowest die is a six.
    AutoCritical,
    /// The die that decides the outcome.
    Active {
        /// Face of the active die.
        active: u32,
        /// Second-highest face; only normal rolls with two or more dice have one.
        secondary: Option<u32>,
    },
}

impl DieReading {
    /// Whether the reading is a critical: the zero-mode double six, or an
    /// active six backed by a second six.
    pub fn is_critical(self) -> bool {
        match self {
            Self::AutoCritical => true,
            Self::Active { active, secondary } => {
                active == CRIT_FACE && secondary == Some(CRIT_FACE)
            }
        }
    }
}

/// Validate `dice` and pick its active die.
pub fn read_pool(dice: &[u32], zero_mode: bool) -> MechResult<DieReading> {
    validate(dice, zero_mode)?;

    if zero_mode {
        let lowest = dice.iter().copied().min().unwrap_or_default();
        if lowest == CRIT_FACE {
            return Ok(DieReading::AutoCritical);
        }
        return Ok(DieReading::Active {
            active: lowest,
            secondary: None,
        });
    }

    let (highest, secondary) = top_two(dice);
    Ok(DieReading::Active {
        active: highest,
        secondary,
    })
}

/// Highest and second-highest faces; duplicates count separately.
fn top_two(dice: &[u32]) -> (u32, Option<u32>) {
    let mut highest = 0;
    let mut second = None;
    for &face in dice {
        if face >= highest {
            if highest > 0 {
                second = Some(highest);
            }
            highest = face;
        } else if second.is_none_or(|s| face > s) {
            second = Some(face);
        }
    }
    (highest, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MechError;

    fn active(active: u32, secondary: Option<u32>) -> DieReading {
        DieReading::Active { active, secondary }
    }

    #[test]
    fn single_die_has_no_secondary() {
        assert_eq!(read_pool(&[3], false).unwrap(), active(3, None));
    }

    #[test]
    fn highest_and_second_highest() {
        assert_eq!(read_pool(&[2, 5, 4], false).unwrap(), active(5, Some(4)));
        assert_eq!(read_pool(&[6, 1, 6], false).unwrap(), active(6, Some(6)));
        assert_eq!(read_pool(&[1, 1], false).unwrap(), active(1, Some(1)));
    }

    #[test]
    fn order_does_not_matter() {
        let a = read_pool(&[6, 3, 5], false).unwrap();
        let b = read_pool(&[5, 6, 3], false).unwrap();
        let c = read_pool(&[3, 5, 6], false).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn zero_mode_uses_lowest() {
        assert_eq!(read_pool(&[6, 2], true).unwrap(), active(2, None));
        assert_eq!(read_pool(&[5, 4], true).unwrap(), active(4, None));
    }

    #[test]
    fn zero_mode_double_six_is_auto_critical() {
        assert_eq!(read_pool(&[6, 6], true).unwrap(), DieReading::AutoCritical);
    }

    #[test]
    fn critical_readings() {
        assert!(DieReading::AutoCritical.is_critical());
        assert!(active(6, Some(6)).is_critical());
        assert!(!active(6, Some(5)).is_critical());
        assert!(!active(6, None).is_critical());
        assert!(!active(5, Some(5)).is_critical());
    }

    #[test]
    fn caller_slice_untouched() {
        let dice = vec![4, 1, 6, 2];
        read_pool(&dice, false).unwrap();
        assert_eq!(dice, vec![4, 1, 6, 2]);
    }

    #[test]
    fn invalid_pools_rejected() {
        assert!(matches!(
            read_pool(&[], false),
            Err(MechError::InvalidPool(_))
        ));
        assert!(read_pool(&[6], true).is_err());
        assert!(read_pool(&[3, 0], false).is_err());
    }
}
