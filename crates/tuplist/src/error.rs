//! Error types for container construction and growth

use thiserror::Error;

/// Main error type for Tuplist operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TuplistError {
    /// The allocator could not provide a backing buffer
    #[error("Allocation error: could not reserve a buffer of {requested} slots")]
    Allocation {
        /// Total slot count that was requested
        requested: usize,
    },

    /// Doubling the capacity would overflow `usize`
    #[error("Allocation error: capacity {current} cannot be doubled")]
    CapacityOverflow {
        /// Capacity at the time of the failed grow
        current: usize,
    },

    /// A list was asked to start with no slots at all
    #[error("Capacity error: a list needs a starting capacity of at least 1")]
    ZeroCapacity,

    /// Raw tag outside the closed set of scalar kinds
    #[error("Unknown tag: {0}")]
    UnknownTag(u32),
}

impl TuplistError {
    /// Whether this error came from the allocation boundary.
    pub fn is_allocation(&self) -> bool {
        matches!(
            self,
            TuplistError::Allocation { .. } | TuplistError::CapacityOverflow { .. }
        )
    }
}

/// Result type alias for Tuplist operations
pub type Result<T> = std::result::Result<T, TuplistError>;
