use anyhow::{anyhow, Result};
use knapbench_challenges::knapsack::{opt_value, Challenge, Solution};
use knapbench_structs::{config::BenchmarkSettings, core::*};
use knapbench_utils::{dejsonify, median};
use serde_json::{Map, Value};
use std::time::Instant;

/// Parses a settings json string. Missing fields, or no string at all, fall
/// back to the defaults.
pub fn load_settings(settings: Option<&str>) -> Result<BenchmarkSettings> {
    match settings {
        Some(s) => dejsonify::<BenchmarkSettings>(s)
            .map_err(|e| anyhow!("Failed to parse settings: {}", e)),
        None => Ok(BenchmarkSettings::default()),
    }
}

/// Runs the capacity sweep described by `settings`.
///
/// For every capacity the generator and solver run `settings.repeats` times
/// on fresh data. Only `opt_value` is timed. `on_record` is called as soon as
/// a capacity finishes so callers can print results while the sweep goes on.
pub fn run_benchmark<F>(
    settings: &BenchmarkSettings,
    mut on_record: F,
) -> Result<Vec<BenchmarkRecord>>
where
    F: FnMut(&BenchmarkRecord),
{
    if settings.repeats == 0 {
        return Err(anyhow!("Invalid argument: repeats must be at least 1"));
    }
    if settings.capacities.is_empty() {
        return Err(anyhow!("Invalid argument: no capacities to benchmark"));
    }

    let mut seeds = settings.seeds().ok_or_else(|| {
        anyhow!(
            "Invalid argument: {} capacities x {} repeats is too many runs",
            settings.capacities.len(),
            settings.repeats
        )
    })?;
    let mut records = Vec::with_capacity(settings.capacities.len());
    for &capacity in &settings.capacities {
        let mut record = BenchmarkRecord {
            label: settings.label.clone(),
            capacity,
            seeds: Vec::new(),
            values: Vec::new(),
            times: Vec::new(),
            median_secs: 0.0,
        };

        for _ in 0..settings.repeats {
            let seed = seeds
                .next()
                .ok_or_else(|| anyhow!("Ran out of seeds at capacity {}", capacity))?;
            let challenge = Challenge::generate_instance(capacity, seed)?;

            let start = Instant::now();
            let value = opt_value(challenge.max_weight, &challenge.items);
            let elapsed = start.elapsed().as_secs_f64();

            record.seeds.push(seed);
            record.values.push(value);
            record.times.push(elapsed);
        }

        record.median_secs = median(&record.times).unwrap_or_default();
        on_record(&record);
        records.push(record);
    }
    Ok(records)
}

/// Generates a single instance and solves it, optionally recovering the
/// selected items as well.
pub fn solve_instance(capacity: usize, seed: u64, with_items: bool) -> Result<OutputData> {
    let challenge = Challenge::generate_instance(capacity, seed)?;

    let start = Instant::now();
    let value = challenge.solve();
    let elapsed_secs = start.elapsed().as_secs_f64();

    let solution = if with_items {
        Some(challenge.compute_solution())
    } else {
        None
    };

    Ok(OutputData {
        capacity,
        seed,
        num_items: challenge.items.len(),
        value,
        elapsed_secs,
        solution,
    })
}

/// Regenerates the instance for `capacity` and `seed` and checks a solution
/// json string such as `{"items": [0, 3]}` against it. Returns the solution's
/// total value.
pub fn verify_solution(capacity: usize, seed: u64, solution: &str) -> Result<u64> {
    let challenge = Challenge::generate_instance(capacity, seed)?;
    let solution = dejsonify::<Map<String, Value>>(solution)
        .map_err(|e| anyhow!("Failed to parse solution: {}", e))?;
    let solution = Solution::try_from(solution)
        .map_err(|_| anyhow!("Invalid solution. Cannot convert to knapsack::Solution"))?;

    challenge
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))
}
