use super::params::Params;
use super::scale::scale_challenge;
use super::table::Table;
use crate::{Result, SolveError};
use knap_challenges::knapsack::{Challenge, Solution};
use log::{debug, info};

pub struct Solver;

impl Solver {
    pub fn solve(challenge: &Challenge, params: &Params) -> Result<Solution> {
        challenge
            .validate()
            .map_err(|e| SolveError::InvalidInstance(e.to_string()))?;

        if challenge.num_items() == 0 {
            debug!("empty instance, nothing to select");
            return Ok(Solution::new(0));
        }

        let values: Vec<u64> = challenge.items.iter().map(|item| item.value).collect();
        // bounds every cell, so the fill below can add without checks
        values
            .iter()
            .try_fold(0u64, |acc, &v| acc.checked_add(v))
            .ok_or(SolveError::ValueOverflow)?;

        let scaled = scale_challenge(challenge, params)?;
        debug!("building DP table with {} cells", scaled.num_cells());

        let table = Table::build(&values, &scaled.weights, scaled.capacity);
        let included = table.reconstruct(&scaled.weights);

        let total_weight: f64 = challenge
            .items
            .iter()
            .zip(&included)
            .filter(|(_, included)| **included)
            .map(|(item, _)| item.weight)
            .sum();
        let solution = Solution {
            included,
            value: table.optimal_value(),
            total_weight,
        };

        info!(
            "optimal value {} with {} of {} items ({} of capacity {})",
            solution.value,
            solution.items().len(),
            challenge.num_items(),
            solution.total_weight,
            challenge.capacity
        );
        Ok(solution)
    }
}
