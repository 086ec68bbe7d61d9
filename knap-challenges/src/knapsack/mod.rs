pub mod baselines;
pub mod dataset;
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tolerance used when comparing accumulated `f64` weights against the capacity.
pub const WEIGHT_EPSILON: f64 = 1e-9;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub weight: f64,
    pub value: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f64, value: u64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }

    /// Value per unit of weight. Zero-weight items are infinitely dense.
    pub fn density(&self) -> f64 {
        if self.weight == 0.0 {
            f64::INFINITY
        } else {
            self.value as f64 / self.weight
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Track {
    pub n_items: usize,
    /// Capacity as a percentage of the total item weight.
    pub budget: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub included: Vec<bool>,
    pub value: u64,
    pub total_weight: f64,
}

/// What a host receives after a solve: selected names in item order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionReport {
    pub optimal_value: u64,
    pub selected_identifiers: Vec<String>,
    pub total_weight: f64,
    pub capacity: f64,
    pub remaining_capacity: f64,
}

impl Solution {
    pub fn new(num_items: usize) -> Self {
        Self {
            included: vec![false; num_items],
            value: 0,
            total_weight: 0.0,
        }
    }

    pub fn from_items(challenge: &Challenge, items: &[usize]) -> Result<Self> {
        let mut solution = Self::new(challenge.num_items());
        for &item in items {
            if item >= challenge.num_items() {
                return Err(anyhow!("Item ({}) is out of bounds", item));
            }
            if solution.included[item] {
                return Err(anyhow!("Duplicate items selected."));
            }
            solution.included[item] = true;
            solution.value = solution
                .value
                .checked_add(challenge.items[item].value)
                .ok_or_else(|| anyhow!("Total value overflows"))?;
            solution.total_weight += challenge.items[item].weight;
        }
        Ok(solution)
    }

    /// Indices of the included items, ascending.
    pub fn items(&self) -> Vec<usize> {
        self.included
            .iter()
            .enumerate()
            .filter_map(|(i, &included)| if included { Some(i) } else { None })
            .collect()
    }

    pub fn selected_names<'a>(&self, challenge: &'a Challenge) -> Vec<&'a str> {
        self.items()
            .into_iter()
            .filter_map(|i| challenge.items.get(i).map(|item| item.name.as_str()))
            .collect()
    }

    pub fn report(&self, challenge: &Challenge) -> SolutionReport {
        SolutionReport {
            optimal_value: self.value,
            selected_identifiers: self
                .selected_names(challenge)
                .into_iter()
                .map(String::from)
                .collect(),
            total_weight: self.total_weight,
            capacity: challenge.capacity,
            remaining_capacity: (challenge.capacity - self.total_weight).max(0.0),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Challenge {
    pub items: Vec<Item>,
    pub capacity: f64,
}

impl Challenge {
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self> {
        let challenge = Self { items, capacity };
        challenge.validate()?;
        Ok(challenge)
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.capacity.is_finite() || self.capacity < 0.0 {
            return Err(anyhow!(
                "Capacity ({}) must be a finite non-negative number",
                self.capacity
            ));
        }
        let mut names = HashSet::with_capacity(self.items.len());
        for (i, item) in self.items.iter().enumerate() {
            if !item.weight.is_finite() || item.weight < 0.0 {
                return Err(anyhow!(
                    "Item {} ({}) has invalid weight {}",
                    i,
                    item.name,
                    item.weight
                ));
            }
            if !names.insert(item.name.as_str()) {
                return Err(anyhow!("Duplicate item name ({})", item.name));
            }
        }
        Ok(())
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.budget > 100 {
            return Err(anyhow!("Budget ({}) must be at most 100", track.budget));
        }
        let mut rng = SmallRng::from_seed(seed.clone());

        // Weights carry one decimal digit, in [0.1, 8.0]
        let tenths: Vec<u32> = (0..track.n_items)
            .map(|_| rng.gen_range(1..=80))
            .collect();
        let values: Vec<u64> = (0..track.n_items)
            .map(|_| rng.gen_range(1..=1000))
            .collect();

        let items = tenths
            .iter()
            .zip(&values)
            .enumerate()
            .map(|(i, (&t, &v))| Item::new(format!("item_{}", i), t as f64 / 10.0, v))
            .collect();

        let total_tenths: u64 = tenths.iter().map(|&t| t as u64).sum();
        let capacity = (total_tenths * track.budget as u64 / 100) as f64 / 10.0;

        Self::new(items, capacity)
    }

    pub fn evaluate_total_weight(&self, solution: &Solution) -> Result<f64> {
        if solution.included.len() != self.items.len() {
            return Err(anyhow!(
                "Solution has {} flags but challenge has {} items",
                solution.included.len(),
                self.items.len()
            ));
        }
        Ok(self
            .items
            .iter()
            .zip(&solution.included)
            .filter(|(_, included)| **included)
            .map(|(item, _)| item.weight)
            .sum())
    }

    pub fn evaluate_total_value(&self, solution: &Solution) -> Result<u64> {
        let total_weight = self.evaluate_total_weight(solution)?;
        if total_weight > self.capacity + WEIGHT_EPSILON {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }
        let total_value: u64 = self
            .items
            .iter()
            .zip(&solution.included)
            .filter(|(_, included)| **included)
            .map(|(item, _)| item.value)
            .sum();
        if total_value != solution.value {
            return Err(anyhow!(
                "Reported value ({}) does not match selected items ({})",
                solution.value,
                total_value
            ));
        }
        Ok(total_value)
    }

    pub fn compute_greedy_baseline(&self) -> Result<Solution> {
        baselines::greedy::solve_challenge(self)
    }

    /// Value gained by `solution` over the greedy baseline.
    pub fn evaluate_solution(&self, solution: &Solution) -> Result<i128> {
        let total_value = self.evaluate_total_value(solution)?;
        let greedy_solution = self.compute_greedy_baseline()?;
        let greedy_total_value = self.evaluate_total_value(&greedy_solution)?;
        Ok(total_value as i128 - greedy_total_value as i128)
    }
}
