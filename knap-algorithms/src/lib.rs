mod error;
pub use error::{Result, SolveError};
pub mod knapsack;
