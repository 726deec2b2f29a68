use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Deterministic weighted chooser over a closed category set.
///
/// `select(i, n)` maps position `i` of a sequence of length `n` to the
/// category whose cumulative weight range contains `i / n`. Category counts
/// therefore track their weight-proportional share of `n` exactly, and the
/// same `(weights, i, n)` always yields the same category, so repeated runs
/// are byte-identical. Weights need not be pre-normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Distribution<T> {
    entries: Vec<(T, f64)>,
}

impl<T: Copy> Distribution<T> {
    /// Builds a distribution from ordered (category, weight) pairs. The
    /// entry list must be non-empty; [`Distribution::validate`] checks the
    /// remaining weight invariants.
    pub fn new(entries: Vec<(T, f64)>) -> Self {
        Self { entries }
    }

    /// Category for position `index` in a sequence of `total` selections.
    /// Never invoked with `total == 0`; `index` must be below `total`.
    pub fn select(&self, index: usize, total: usize) -> T {
        let weight_sum: f64 = self.entries.iter().map(|(_, weight)| weight).sum();
        let position = index as f64 / total as f64;

        let mut cumulative = 0.0;
        for (category, weight) in &self.entries {
            cumulative += weight / weight_sum;
            if position < cumulative {
                return *category;
            }
        }

        // Accumulated rounding can leave the last positions just past 1.0;
        // they belong to the final category.
        self.entries[self.entries.len() - 1].0
    }

    pub fn entries(&self) -> &[(T, f64)] {
        &self.entries
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.entries.is_empty() {
            return Err(ProfileError::Distribution(
                "at least one category is required".to_string(),
            ));
        }
        for (_, weight) in &self.entries {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ProfileError::Distribution(format!(
                    "weights must be finite and non-negative, got {weight}"
                )));
            }
        }
        let weight_sum: f64 = self.entries.iter().map(|(_, weight)| weight).sum();
        if weight_sum <= 0.0 {
            return Err(ProfileError::Distribution(
                "weights must not sum to zero".to_string(),
            ));
        }
        Ok(())
    }
}
