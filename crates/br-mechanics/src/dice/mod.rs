//! Six-sided dice and the rollers that produce them.
//!
//! The engine never draws random numbers itself. Anything that can hand
//! back a batch of d6 faces implements [`DiceRoller`]; [`SeededRoller`]
//! is the production implementation and [`FixedRoller`] replays scripted
//! faces for tests and demos.

pub mod pool;

pub use pool::{MAX_POOL_DICE, PoolSize, RollPool};

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of faces on the only die the engine knows about.
pub const D6_SIDES: u32 = 6;

/// The smallest face of a d6.
pub const D6_MIN: u32 = 1;

/// Returns true if `value` is a face a d6 can show.
pub fn is_d6_face(value: u32) -> bool {
    (D6_MIN..=D6_SIDES).contains(&value)
}

/// Source of d6 results.
pub trait DiceRoller {
    /// Roll `count` independent d6 and return the faces in roll order.
    fn roll_d6(&mut self, count: u32) -> Vec<u32>;
}

/// A [`DiceRoller`] backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct SeededRoller {
    rng: StdRng,
}

impl SeededRoller {
    /// A reproducible roller: the same seed always yields the same faces.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A roller seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl DiceRoller for SeededRoller {
    fn roll_d6(&mut self, count: u32) -> Vec<u32> {
        (0..count)
            .map(|_| self.rng.random_range(D6_MIN..=D6_SIDES))
            .collect()
    }
}

/// A [`DiceRoller`] that hands out pre-scripted faces in order.
///
/// Once the script runs dry it returns short batches, which the engine
/// rejects as an invalid pool.
#[derive(Debug, Clone, Default)]
pub struct FixedRoller {
    faces: VecDeque<u32>,
}

impl FixedRoller {
    /// Script the faces this roller will return.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Faces not yet handed out.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceRoller for FixedRoller {
    fn roll_d6(&mut self, count: u32) -> Vec<u32> {
        let take = (count as usize).min(self.faces.len());
        self.faces.drain(..take).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d6_faces() {
        assert!(!is_d6_face(0));
        assert!(is_d6_face(1));
        assert!(is_d6_face(6));
        assert!(!is_d6_face(7));
    }

    #[test]
    fn seeded_roll_produces_valid_faces() {
        let mut roller = SeededRoller::from_seed(42);
        let faces = roller.roll_d6(10);
        assert_eq!(faces.len(), 10);
        assert!(faces.iter().all(|&f| is_d6_face(f)));
    }

    #[test]
    fn seeded_roll_deterministic() {
        let mut a = SeededRoller::from_seed(99);
        let mut b = SeededRoller::from_seed(99);
        assert_eq!(a.roll_d6(5), b.roll_d6(5));
    }

    #[test]
    fn os_roller_produces_valid_faces() {
        let mut roller = SeededRoller::from_os();
        assert!(roller.roll_d6(20).iter().all(|&f| is_d6_face(f)));
    }

    #[test]
    fn zero_count_rolls_nothing() {
        let mut roller = SeededRoller::from_seed(1);
        assert!(roller.roll_d6(0).is_empty());
    }

    #[test]
    fn fixed_roller_replays_in_order() {
        let mut roller = FixedRoller::new([3, 6, 1, 4]);
        assert_eq!(roller.roll_d6(2), vec![3, 6]);
        assert_eq!(roller.remaining(), 2);
        assert_eq!(roller.roll_d6(2), vec![1, 4]);
        assert_eq!(roller.remaining(), 0);
    }

    #[test]
    fn fixed_roller_runs_dry() {
        let mut roller = FixedRoller::new([5]);
        assert_eq!(roller.roll_d6(3), vec![5]);
        assert!(roller.roll_d6(1).is_empty());
    }
}
