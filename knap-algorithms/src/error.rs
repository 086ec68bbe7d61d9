//! Error types for the knapsack solvers

use thiserror::Error;

/// Reasons a solve is rejected. A rejected solve never yields a partial solution.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    /// The instance breaks a model invariant (negative capacity, duplicate names, ...)
    #[error("Invalid instance: {0}")]
    InvalidInstance(String),

    /// A weight cannot be made integral with the allowed number of decimal digits
    #[error("Item {index} ({name}) weight {weight} needs more than {digits} decimal digits")]
    Precision {
        index: usize,
        name: String,
        weight: f64,
        digits: u32,
    },

    /// The DP table would exceed the configured cell ceiling
    #[error("DP table of {rows} x {columns} cells exceeds the limit of {limit} cells")]
    CapacityTooLarge {
        rows: usize,
        columns: u128,
        limit: usize,
    },

    /// The sum of all item values does not fit the table's value type
    #[error("Total item value overflows u64")]
    ValueOverflow,
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, SolveError>;
