use super::params::Params;
use crate::{Result, SolveError};
use knap_challenges::knapsack::Challenge;
use log::{debug, warn};

/// Relative slack, in ulps, for treating a scaled weight as an integer
pub const SCALE_ULPS: f64 = 8.0;

/// Beyond this many digits an `f64` weight carries no further information
pub const MAX_DIGITS: u32 = 15;

/// Integer view of a challenge: every fitting weight and the capacity in units of `1 / factor`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaled {
    pub digits: u32,
    pub factor: u64,
    /// `None` for items heavier than the capacity, which can never be selected
    pub weights: Vec<Option<usize>>,
    pub capacity: usize,
}

impl Scaled {
    pub fn num_cells(&self) -> u128 {
        (self.weights.len() as u128 + 1) * (self.capacity as u128 + 1)
    }
}

/// A few ulps of `scaled`: absorbs decimal-to-binary noise, never a real digit.
fn tolerance(scaled: f64) -> f64 {
    SCALE_ULPS * f64::EPSILON * scaled.abs().max(1.0)
}

fn as_integer(x: f64, factor: f64) -> Option<f64> {
    let scaled = x * factor;
    let rounded = scaled.round();
    if (scaled - rounded).abs() <= tolerance(scaled) {
        Some(rounded)
    } else {
        None
    }
}

/// Index of the first fitting item whose weight is not integral at `digits`.
fn first_unrepresentable(challenge: &Challenge, digits: u32) -> Option<usize> {
    let factor = 10f64.powi(digits as i32);
    challenge
        .items
        .iter()
        .position(|item| {
            item.weight <= challenge.capacity && as_integer(item.weight, factor).is_none()
        })
}

fn choose_digits(challenge: &Challenge, params: &Params) -> Result<u32> {
    let precision_error = |index: usize, digits: u32| {
        let item = &challenge.items[index];
        SolveError::Precision {
            index,
            name: item.name.clone(),
            weight: item.weight,
            digits,
        }
    };

    match params.precision_digits {
        Some(digits) => {
            let digits = digits.min(MAX_DIGITS);
            match first_unrepresentable(challenge, digits) {
                Some(index) => Err(precision_error(index, digits)),
                None => Ok(digits),
            }
        }
        None => {
            let max_digits = params.max_precision_digits.min(MAX_DIGITS);
            let mut offender = None;
            for digits in 0..=max_digits {
                offender = first_unrepresentable(challenge, digits);
                if offender.is_none() {
                    return Ok(digits);
                }
            }
            Err(precision_error(offender.unwrap_or(0), max_digits))
        }
    }
}

/// Converts the challenge weights and capacity into a common integer unit.
///
/// Only items that can fit the capacity constrain the precision. The capacity
/// is floored to the grid, which loses nothing once every fitting weight is
/// integral. Fails with [`SolveError::Precision`] when some weight needs more
/// digits than allowed, and with [`SolveError::CapacityTooLarge`] when the
/// resulting table would exceed `params.max_table_cells`.
pub fn scale_challenge(challenge: &Challenge, params: &Params) -> Result<Scaled> {
    let digits = choose_digits(challenge, params)?;
    let factor = 10u64.pow(digits);
    let factor_f = factor as f64;

    let capacity_f = challenge.capacity * factor_f;
    let snapped = (capacity_f + tolerance(capacity_f)).floor();
    // snapping up is only allowed when the grid point is not above the real capacity
    let capacity_f = if snapped / factor_f <= challenge.capacity {
        snapped
    } else {
        capacity_f.floor()
    };

    let rows = challenge.num_items() + 1;
    // float to int casts saturate, so an absurd capacity still compares as too large
    let columns = (capacity_f as u128).saturating_add(1);
    let cells = (rows as u128).checked_mul(columns).unwrap_or(u128::MAX);
    if cells > params.max_table_cells as u128 {
        warn!(
            "rejecting DP table of {} x {} cells (limit {})",
            rows, columns, params.max_table_cells
        );
        return Err(SolveError::CapacityTooLarge {
            rows,
            columns,
            limit: params.max_table_cells,
        });
    }
    let capacity = capacity_f as usize;

    let weights = challenge
        .items
        .iter()
        .map(|item| {
            if item.weight > challenge.capacity {
                return None;
            }
            let weight = (item.weight * factor_f).round() as usize;
            (weight <= capacity).then_some(weight)
        })
        .collect();

    debug!(
        "scaled {} items by {} (digits {}), capacity {} -> {}",
        challenge.num_items(),
        factor,
        digits,
        challenge.capacity,
        capacity
    );

    Ok(Scaled {
        digits,
        factor,
        weights,
        capacity,
    })
}
