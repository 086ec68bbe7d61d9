use anyhow::Result;
use serde_json::{Map, Value};
mod params;
pub mod scale;
mod solver;
mod table;
pub use params::Params;
pub use solver::Solver;
pub use table::Table;
use knap_challenges::knapsack::*;

pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let params = Params::initialize(hyperparameters);
    let solution = Solver::solve(challenge, &params)?;
    save_solution(&solution)
}

pub fn help() {
    println!("Exact 0/1 knapsack by dynamic programming over integer-scaled weights.");
    println!();
    println!("Hyperparameters:");
    println!("  precision_digits      fixed decimal digits kept from each weight (default: smallest that fits)");
    println!("  max_precision_digits  upper bound for the automatic search (default: 9)");
    println!("  max_table_cells       ceiling on (items + 1) x (scaled capacity + 1) (default: 10000000)");
}
