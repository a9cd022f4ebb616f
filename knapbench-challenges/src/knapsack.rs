use anyhow::{anyhow, Result};
use knapbench_utils::XorShift64;
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};
use std::collections::HashSet;

/// Capacities at or below this are rejected by the generator.
pub const MIN_CAPACITY: usize = 1000;
/// Capacities above this are rejected by the generator. Two DP rows at this
/// size already take 1.6 GB.
pub const MAX_CAPACITY: usize = 100_000_000;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub value: u64,
    pub weight: usize,
}

impl Item {
    pub fn new(value: u64, weight: usize) -> Self {
        Self { value, weight }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub items: Vec<usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub seed: u64,
    pub max_weight: usize,
    pub items: Vec<Item>,
}

impl Challenge {
    pub fn generate_instance(max_weight: usize, seed: u64) -> Result<Challenge> {
        let (max_weight, items) = make_random_data(max_weight, seed)?;
        Ok(Challenge {
            seed,
            max_weight,
            items,
        })
    }

    pub fn solve(&self) -> u64 {
        opt_value(self.max_weight, &self.items)
    }

    pub fn compute_solution(&self) -> Solution {
        compute_solution(self.max_weight, &self.items)
    }

    pub fn evaluate_total_value(&self, solution: &Solution) -> Result<u64> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let mut total_weight = 0usize;
        let mut total_value = 0u64;
        for &i in &solution.items {
            let item = self
                .items
                .get(i)
                .ok_or_else(|| anyhow!("Item ({}) is out of bounds", i))?;
            total_weight += item.weight;
            total_value += item.value;
        }

        if total_weight > self.max_weight {
            return Err(anyhow!(
                "Total weight ({}) exceeded max weight ({})",
                total_weight,
                self.max_weight
            ));
        }
        Ok(total_value)
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<u64> {
        let total_value = self.evaluate_total_value(solution)?;
        let optimal_value = self.solve();
        if total_value < optimal_value {
            return Err(anyhow!(
                "Total value ({}) is less than optimal value ({})",
                total_value,
                optimal_value
            ));
        }
        Ok(total_value)
    }
}

/// Draws `max_weight / 100` items from a xorshift stream seeded with `seed`.
///
/// Each item consumes exactly two draws, value first: `value = draw % 1000`
/// and `weight = 1 + draw % (2 * max_weight)`.
pub fn make_random_data(max_weight: usize, seed: u64) -> Result<(usize, Vec<Item>)> {
    if max_weight <= MIN_CAPACITY {
        return Err(anyhow!(
            "Invalid argument: capacity ({}) must be greater than {}",
            max_weight,
            MIN_CAPACITY
        ));
    }
    if max_weight > MAX_CAPACITY {
        return Err(anyhow!(
            "Invalid argument: capacity ({}) must not exceed {}",
            max_weight,
            MAX_CAPACITY
        ));
    }
    let mut rng = XorShift64::new(seed)?;
    let num_items = max_weight / 100;
    let weight_range = 2 * max_weight as u64;

    let items = (0..num_items)
        .map(|_| {
            let value = rng.next() % 1000;
            let weight = 1 + (rng.next() % weight_range) as usize;
            Item { value, weight }
        })
        .collect();

    Ok((max_weight, items))
}

/// Best total value of a subset of `items` whose weight fits in `max_weight`.
///
/// `v[w - 1]` holds the best value at capacity `w` over the items seen so far.
/// Only the previous item's row is read, so two rows are swapped instead of
/// keeping the full table.
pub fn opt_value(max_weight: usize, items: &[Item]) -> u64 {
    if max_weight == 0 || items.is_empty() {
        return 0;
    }

    let mut v = vec![0u64; max_weight];
    let mut v_prev = vec![0u64; max_weight];

    let first = &items[0];
    for w in first.weight.max(1)..=max_weight {
        v[w - 1] = first.value;
    }

    for item in &items[1..] {
        std::mem::swap(&mut v, &mut v_prev);

        for w in 1..=max_weight {
            let without_item = v_prev[w - 1];
            let with_item = if w < item.weight {
                without_item
            } else if w == item.weight {
                item.value
            } else {
                item.value + v_prev[w - 1 - item.weight]
            };
            v[w - 1] = with_item.max(without_item);
        }
    }

    v[max_weight - 1]
}

/// Same recurrence as [`opt_value`], but records which items are taken so an
/// optimal subset can be read back. Uses `items.len() * max_weight` bits.
pub fn compute_solution(max_weight: usize, items: &[Item]) -> Solution {
    if max_weight == 0 || items.is_empty() {
        return Solution::new();
    }

    let words_per_row = (max_weight + 63) / 64;
    let mut taken = vec![0u64; words_per_row * items.len()];
    let mut mark = |j: usize, w: usize| {
        let bit = j * words_per_row * 64 + (w - 1);
        taken[bit / 64] |= 1u64 << (bit % 64);
    };

    let mut v = vec![0u64; max_weight];
    let mut v_prev = vec![0u64; max_weight];

    let first = &items[0];
    if first.value > 0 {
        for w in first.weight.max(1)..=max_weight {
            v[w - 1] = first.value;
            mark(0, w);
        }
    }

    for (j, item) in items.iter().enumerate().skip(1) {
        std::mem::swap(&mut v, &mut v_prev);

        for w in 1..=max_weight {
            let without_item = v_prev[w - 1];
            let with_item = if w < item.weight {
                without_item
            } else if w == item.weight {
                item.value
            } else {
                item.value + v_prev[w - 1 - item.weight]
            };
            if with_item > without_item {
                v[w - 1] = with_item;
                mark(j, w);
            } else {
                v[w - 1] = without_item;
            }
        }
    }

    let is_taken = |j: usize, w: usize| {
        let bit = j * words_per_row * 64 + (w - 1);
        taken[bit / 64] & (1u64 << (bit % 64)) != 0
    };

    let mut solution = Solution::new();
    let mut w = max_weight;
    for j in (0..items.len()).rev() {
        if w == 0 {
            break;
        }
        if is_taken(j, w) {
            solution.items.push(j);
            w -= items[j].weight;
        }
    }
    solution.items.reverse();
    solution
}
