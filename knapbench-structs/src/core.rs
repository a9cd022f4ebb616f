use crate::serializable_struct_with_getters;
use knapbench_challenges::knapsack::Solution;
use serde::{Deserialize, Serialize};

serializable_struct_with_getters! {
    BenchmarkRecord {
        label: String,
        capacity: usize,
        seeds: Vec<u64>,
        values: Vec<u64>,
        times: Vec<f64>,
        median_secs: f64,
    }
}

impl BenchmarkRecord {
    /// `<label>, <capacity>, <median seconds>`
    pub fn to_line(&self) -> String {
        format!("{}, {}, {:.6}", self.label, self.capacity, self.median_secs)
    }
}

serializable_struct_with_getters! {
    OutputData {
        capacity: usize,
        seed: u64,
        num_items: usize,
        value: u64,
        elapsed_secs: f64,
        solution: Option<Solution>,
    }
}
