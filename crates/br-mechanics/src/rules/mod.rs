//! Roll context: position, effect, and which names are actions.
//!
//! Position and effect only shape how an action roll is presented; they
//! never change the dice or the status tier.

pub mod catalog;

pub use catalog::{Attribute, attribute_label, is_attribute_action};

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// How dangerous the situation is for an action roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Acting from a position of strength.
    Controlled,
    /// The usual case.
    #[default]
    Risky,
    /// Serious trouble if it goes wrong.
    Desperate,
}

impl Position {
    /// Every position, safest first.
    pub const ALL: [Self; 3] = [Self::Controlled, Self::Risky, Self::Desperate];

    /// Lenient lookup: unknown or empty names fall back to [`Position::Risky`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// The machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Controlled => "controlled",
            Self::Risky => "risky",
            Self::Desperate => "desperate",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Controlled => "Controlled",
            Self::Risky => "Risky",
            Self::Desperate => "Desperate",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Position {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| MechError::UnknownPosition(s.to_string()))
    }
}

/// How much an action roll can achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Less than hoped for.
    Limited,
    /// The usual case.
    #[default]
    Standard,
    /// More than usual.
    Great,
}

impl Effect {
    /// Every effect level, weakest first.
    pub const ALL: [Self; 3] = [Self::Limited, Self::Standard, Self::Great];

    /// Lenient lookup: unknown or empty names fall back to [`Effect::Standard`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// The machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Limited => "limited",
            Self::Standard => "standard",
            Self::Great => "great",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Limited => "Limited",
            Self::Standard => "Standard",
            Self::Great => "Great",
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Effect {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted)
            .ok_or_else(|| MechError::UnknownEffect(s.to_string()))
    }
}
