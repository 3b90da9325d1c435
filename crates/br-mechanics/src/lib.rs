//! Action and resistance roll engine for Beamroll.
//!
//! Rolls pools of d6, reads them into a status tier (failure, partial
//! success, success, critical success) and, for resistance rolls, a
//! stress cost. Pools of zero dice roll two and keep the worse one.

pub mod check;
pub mod config;
pub mod dice;
pub mod error;
pub mod resolution;
pub mod rules;

pub use check::{RollKind, RollReport, RollRequest, perform_roll};
pub use config::RollConfig;
pub use dice::{DiceRoller, FixedRoller, PoolSize, RollPool, SeededRoller};
pub use error::{MechError, MechResult};
pub use resolution::{RollStatus, Stress, classify, stress};
pub use rules::{Attribute, Effect, Position, attribute_label, is_attribute_action};
