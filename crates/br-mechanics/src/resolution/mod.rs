//! Reading a roll: status tier and stress cost.
//!
//! Both [`classify`] and [`stress`] go through [`active::read_pool`], so
//! they always agree on which die counts and on what makes a critical.
//!
//! | active die | status            | stress      |
//! |------------|-------------------|-------------|
//! | 1-3        | failure           | 6 - active  |
//! | 4-5        | partial success   | 6 - active  |
//! | 6          | success           | 0           |
//! | 6 and 6    | critical success  | none (-1)   |

pub mod active;

pub use active::{DieReading, read_pool};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::D6_SIDES;
use crate::error::{MechError, MechResult};

/// Highest active face that still fails.
const FAILURE_MAX: u32 = 3;

/// The narrative tier of a roll, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RollStatus {
    /// Things go badly.
    Failure,
    /// Success at a cost.
    PartialSuccess,
    /// Clean success.
    Success,
    /// Two sixes: success with increased effect.
    CriticalSuccess,
}

impl RollStatus {
    /// All tiers, worst first.
    pub const ALL: [Self; 4] = [
        Self::Failure,
        Self::PartialSuccess,
        Self::Success,
        Self::CriticalSuccess,
    ];

    /// The machine name (`failure`, `partial-success`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Failure => "failure",
            Self::PartialSuccess => "partial-success",
            Self::Success => "success",
            Self::CriticalSuccess => "critical-success",
        }
    }

    /// Human-readable headline.
    pub fn label(self) -> &'static str {
        match self {
            Self::Failure => "Failure",
            Self::PartialSuccess => "Partial Success",
            Self::Success => "Success",
            Self::CriticalSuccess => "Critical Success",
        }
    }
}

impl std::fmt::Display for RollStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RollStatus {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| MechError::UnknownStatus(s.to_string()))
    }
}

/// Stress taken on a resistance roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Stress {
    /// A critical: the roll costs nothing.
    None,
    /// Stress points taken.
    Points(u32),
}

impl Stress {
    /// Integer form: `-1` for no stress, otherwise the points.
    pub fn value(self) -> i32 {
        match self {
            Self::None => -1,
            Self::Points(n) => i32::try_from(n).unwrap_or(i32::MAX),
        }
    }
}

impl From<Stress> for i32 {
    fn from(stress: Stress) -> Self {
        stress.value()
    }
}

impl TryFrom<i32> for Stress {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::None),
            0..=6 => Ok(Self::Points(value as u32)),
            other => Err(format!("stress out of range: {other}")),
        }
    }
}

impl std::fmt::Display for Stress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Classify a pool into its status tier.
pub fn classify(dice: &[u32], zero_mode: bool) -> MechResult<RollStatus> {
    let reading = read_pool(dice, zero_mode)?;
    let status = status_of(reading);
    debug!(?dice, zero_mode, %status, "classified roll");
    Ok(status)
}

/// Stress cost of a pool: `6 - active`, or none on a critical.
pub fn stress(dice: &[u32], zero_mode: bool) -> MechResult<Stress> {
    let reading = read_pool(dice, zero_mode)?;
    let stress = stress_of(reading);
    debug!(?dice, zero_mode, %stress, "computed stress");
    Ok(stress)
}

fn status_of(reading: DieReading) -> RollStatus {
    match reading {
        r if r.is_critical() => RollStatus::CriticalSuccess,
        DieReading::Active { active, .. } if active <= FAILURE_MAX => RollStatus::Failure,
        DieReading::Active {
            active: D6_SIDES, ..
        } => RollStatus::Success,
        DieReading::Active { .. } => RollStatus::PartialSuccess,
        DieReading::AutoCritical => RollStatus::CriticalSuccess,
    }
}

fn stress_of(reading: DieReading) -> Stress {
    match reading {
        r if r.is_critical() => Stress::None,
        DieReading::Active { active, .. } => Stress::Points(D6_SIDES - active),
        DieReading::AutoCritical => Stress::None,
    }
}
