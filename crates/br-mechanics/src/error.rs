//! Error types for the roll engine.

/// Errors that can occur while evaluating or setting up a roll.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// The die results handed to the engine do not form a valid pool.
    #[error("invalid pool: {0}")]
    InvalidPool(String),

    /// More dice were requested than a pool may hold.
    #[error("cannot roll {requested} dice (at most {max})")]
    PoolTooLarge {
        /// The requested pool size.
        requested: i32,
        /// The largest pool allowed.
        max: u32,
    },

    /// A position name did not match any known position.
    #[error("unknown position: {0} (expected controlled, risky or desperate)")]
    UnknownPosition(String),

    /// An effect name did not match any known effect level.
    #[error("unknown effect: {0} (expected limited, standard or great)")]
    UnknownEffect(String),

    /// A status name did not match any roll status.
    #[error("unknown roll status: {0}")]
    UnknownStatus(String),

    /// A prompted pool size was not a number.
    #[error("'{0}' is not a number of dice")]
    InvalidChoice(String),

    /// A prompted pool size was outside the offered range.
    #[error("pool size {value} is out of range (choose 0 to {max})")]
    PromptRange {
        /// The value that was entered.
        value: i64,
        /// The largest pool size on offer.
        max: u32,
    },
}

/// Convenience result type for roll operations.
pub type MechResult<T> = Result<T, MechError>;
