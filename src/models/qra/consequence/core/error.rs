use thiserror::Error;

use super::ConsequenceType;

/// Errors that can occur while computing event consequences.
#[derive(Debug, Error)]
pub enum ConsequenceError {
    /// The consequence type is not one this crate models.
    #[error("unsupported consequence type {0:?}; expected \"thermal\" or \"overp\"")]
    UnsupportedConsequenceType(String),

    /// An array does not have the length its dimensions require.
    #[error("dimension mismatch in {context}: expected {expected} values, got {actual}")]
    DimensionMismatch {
        /// Which array or reduction was checked.
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The leak-size by occupant table is too large to index.
    #[error("{num_leak_sizes} leak sizes × {total_occupants} occupants overflows the position count")]
    TableOverflow {
        num_leak_sizes: usize,
        total_occupants: usize,
    },

    /// The physical responses lack the array the consequence type needs.
    #[error("missing {0} for {1} consequences")]
    MissingResponse(&'static str, ConsequenceType),

    /// The probit backend failed for one position.
    #[error("{consequence_type} probit {probit:?} failed at position {position}")]
    Probit {
        consequence_type: ConsequenceType,
        probit: String,

        /// Index into the flat per-position array.
        position: usize,

        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConsequenceError {
    /// Returns true if the error comes from configuration, not from data.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnsupportedConsequenceType(_))
    }
}
