use knapbench_challenges::knapsack::Solution;
use knapbench_structs::{config::BenchmarkSettings, core::*};
use knapbench_utils::{dejsonify, jsonify};

#[test]
fn test_default_settings() {
    let settings = BenchmarkSettings::default();
    assert_eq!(settings.label, "rust");
    assert_eq!(settings.capacities, vec![5000, 10000, 20000, 40000, 80000]);
    assert_eq!(settings.repeats, 5);
    assert_eq!(settings.base_seed, 12345);
}

#[test]
fn test_settings_missing_fields_use_defaults() {
    let settings: BenchmarkSettings = dejsonify(r#"{"repeats": 3}"#).unwrap();
    assert_eq!(
        settings,
        BenchmarkSettings {
            repeats: 3,
            ..BenchmarkSettings::default()
        }
    );
    let settings: BenchmarkSettings = dejsonify("{}").unwrap();
    assert_eq!(settings, BenchmarkSettings::default());
}

#[test]
fn test_seeds_continue_across_capacities() {
    let settings = BenchmarkSettings {
        capacities: vec![2000, 3000],
        repeats: 3,
        ..BenchmarkSettings::default()
    };
    assert_eq!(
        settings.seeds().unwrap().collect::<Vec<_>>(),
        vec![12346, 12347, 12348, 12349, 12350, 12351]
    );
}

#[test]
fn test_num_runs_overflow() {
    let settings = BenchmarkSettings {
        repeats: usize::MAX,
        ..BenchmarkSettings::default()
    };
    assert_eq!(settings.num_runs(), None);
    assert!(settings.seeds().is_none());
    assert_eq!(BenchmarkSettings::default().num_runs(), Some(25));
}

#[test]
fn test_record_line() {
    let record = BenchmarkRecord {
        label: "rust".to_string(),
        capacity: 5000,
        seeds: vec![12346],
        values: vec![3725],
        times: vec![0.0123456],
        median_secs: 0.0123456,
    };
    assert_eq!(record.to_line(), "rust, 5000, 0.012346");
}

#[test]
fn test_output_data_optional_solution() {
    let mut output_data = OutputData {
        capacity: 50,
        seed: 1,
        num_items: 3,
        value: 220,
        elapsed_secs: 0.5,
        solution: None,
    };
    assert_eq!(output_data.solution(), None);
    assert_eq!(
        jsonify(&output_data),
        r#"{"capacity":50,"elapsed_secs":0.5,"num_items":3,"seed":1,"value":220}"#
    );

    output_data.solution = Some(Solution { items: vec![1, 2] });
    let json = jsonify(&output_data);
    assert!(json.contains(r#""solution":{"items":[1,2]}"#));
    let parsed: OutputData = dejsonify(&json).unwrap();
    assert_eq!(parsed.solution().map(|s| s.items.len()), Some(2));
}
