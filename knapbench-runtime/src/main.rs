use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use knapbench_challenges::knapsack::Challenge;
use knapbench_runtime::{load_settings, run_benchmark, solve_instance};
use knapbench_utils::jsonify;

fn cli() -> Command {
    Command::new("knapbench-runtime")
        .about("Benchmarks the 0/1 knapsack DP on generated item sets")
        .subcommand(
            Command::new("benchmark")
                .about("Runs the capacity sweep and prints the median time per capacity")
                .arg(
                    arg!([SETTINGS] "Settings json string, missing fields use the defaults")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--verbose "Print every run to stderr")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("compute_solution")
                .about("Generates one instance and solves it")
                .arg(arg!(<CAPACITY> "Knapsack capacity").value_parser(clap::value_parser!(usize)))
                .arg(arg!(<SEED> "Generator seed").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--items "Also output the selected item indices")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution against a generated instance")
                .arg(arg!(<CAPACITY> "Knapsack capacity").value_parser(clap::value_parser!(usize)))
                .arg(arg!(<SEED> "Generator seed").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(<SOLUTION> "Solution json string, e.g. {\"items\":[0,3]}")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Prints a generated instance as json")
                .arg(arg!(<CAPACITY> "Knapsack capacity").value_parser(clap::value_parser!(usize)))
                .arg(arg!(<SEED> "Generator seed").value_parser(clap::value_parser!(u64))),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        None => benchmark(None, false),
        Some(("benchmark", sub_m)) => benchmark(
            sub_m.get_one::<String>("SETTINGS").cloned(),
            sub_m.get_flag("verbose"),
        ),
        Some(("compute_solution", sub_m)) => compute_solution(
            capacity_arg(sub_m),
            seed_arg(sub_m),
            sub_m.get_flag("items"),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            capacity_arg(sub_m),
            seed_arg(sub_m),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        Some(("generate", sub_m)) => generate(capacity_arg(sub_m), seed_arg(sub_m)),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn capacity_arg(sub_m: &ArgMatches) -> usize {
    *sub_m.get_one::<usize>("CAPACITY").unwrap()
}

fn seed_arg(sub_m: &ArgMatches) -> u64 {
    *sub_m.get_one::<u64>("SEED").unwrap()
}

pub fn benchmark(settings: Option<String>, verbose: bool) -> Result<()> {
    let settings = load_settings(settings.as_deref())?;
    if verbose {
        eprintln!("[benchmark] settings: {}", jsonify(&settings));
    }

    run_benchmark(&settings, |record| {
        if verbose {
            for ((seed, value), time) in record
                .seeds
                .iter()
                .zip(&record.values)
                .zip(&record.times)
            {
                eprintln!(
                    "[benchmark] W = {}, seed = {}, V = {}, time = {:.6}",
                    record.capacity, seed, value, time
                );
            }
        }
        println!("{}", record.to_line());
    })?;
    Ok(())
}

pub fn compute_solution(capacity: usize, seed: u64, with_items: bool) -> Result<()> {
    let output_data = solve_instance(capacity, seed, with_items)?;
    println!("{}", jsonify(&output_data));
    Ok(())
}

pub fn verify_solution(capacity: usize, seed: u64, solution: String) -> Result<()> {
    let total_value = knapbench_runtime::verify_solution(capacity, seed, &solution)?;
    println!("Solution is valid (value = {})", total_value);
    Ok(())
}

pub fn generate(capacity: usize, seed: u64) -> Result<()> {
    let challenge = Challenge::generate_instance(capacity, seed)?;
    println!("{}", jsonify(&challenge));
    Ok(())
}
