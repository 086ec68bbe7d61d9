use crate::knapsack::{Challenge, Solution, WEIGHT_EPSILON};
use anyhow::Result;
use std::cmp::Ordering;

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    challenge.validate()?;

    // Rank items by value-weight ratio in descending order, keeping item order on ties
    let mut item_ratios: Vec<(usize, f64)> = challenge
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| (i, item.density()))
        .collect();
    item_ratios.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut selected_items = Vec::with_capacity(challenge.num_items());
    let mut total_weight = 0.0;
    for &(item, _) in &item_ratios {
        let weight = challenge.items[item].weight;
        if total_weight + weight <= challenge.capacity + WEIGHT_EPSILON {
            total_weight += weight;
            selected_items.push(item);
        }
    }

    Solution::from_items(challenge, &selected_items)
}
