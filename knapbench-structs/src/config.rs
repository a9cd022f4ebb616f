use crate::serializable_struct_with_getters;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LABEL: &str = "rust";
pub const DEFAULT_CAPACITIES: [usize; 5] = [5_000, 10_000, 20_000, 40_000, 80_000];
pub const DEFAULT_REPEATS: usize = 5;
pub const DEFAULT_BASE_SEED: u64 = 12345;

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_capacities() -> Vec<usize> {
    DEFAULT_CAPACITIES.to_vec()
}

fn default_repeats() -> usize {
    DEFAULT_REPEATS
}

fn default_base_seed() -> u64 {
    DEFAULT_BASE_SEED
}

serializable_struct_with_getters! {
    BenchmarkSettings {
        #[serde(default = "default_label")]
        label: String,
        #[serde(default = "default_capacities")]
        capacities: Vec<usize>,
        #[serde(default = "default_repeats")]
        repeats: usize,
        #[serde(default = "default_base_seed")]
        base_seed: u64,
    }
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            label: default_label(),
            capacities: default_capacities(),
            repeats: default_repeats(),
            base_seed: default_base_seed(),
        }
    }
}

impl BenchmarkSettings {
    /// Total number of runs in the sweep, `None` if it does not fit in a `u64`.
    pub fn num_runs(&self) -> Option<u64> {
        let capacities = u64::try_from(self.capacities.len()).ok()?;
        let repeats = u64::try_from(self.repeats).ok()?;
        capacities.checked_mul(repeats)
    }

    /// Seeds for every run of the sweep in order. The counter carries on
    /// across capacities rather than restarting for each one.
    pub fn seeds(&self) -> Option<impl Iterator<Item = u64>> {
        let base_seed = self.base_seed;
        let num_runs = self.num_runs()?;
        Some((1..=num_runs).map(move |i| base_seed.wrapping_add(i)))
    }
}
