use anyhow::{anyhow, Context, Result};
use clap::{arg, Command};
use knap_algorithms::knapsack::dynamic;
use knap_challenges::knapsack::{dataset, Challenge, Solution};
use log::info;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::{cell::RefCell, fs, io::Read, path::PathBuf};

fn cli() -> Command {
    Command::new("knap-runtime")
        .about("Computes, verifies or compares knapsack solutions")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compute_solution")
                .about("Computes an optimal solution")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, '-' for stdin, or 'reference'")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the solution will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, '-' for stdin, or 'reference'")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("compare_greedy")
                .about("Compares the optimal solution against the greedy baseline")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, '-' for stdin, or 'reference'")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(Command::new("help_algorithm").about("Prints the solver hyperparameters"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("compute_solution", sub_m)) => compute_solution(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("hyperparameters").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        Some(("compare_greedy", sub_m)) => compare_greedy(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("hyperparameters").cloned(),
        ),
        Some(("help_algorithm", _)) => {
            dynamic::help();
            Ok(())
        }
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn compute_solution(
    instance: String,
    hyperparameters: Option<String>,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let challenge = load_challenge(&instance)?;
    let hyperparameters = load_hyperparameters(hyperparameters.as_deref())?;
    let solution = run_solver(&challenge, &hyperparameters)?;

    let report = solution.report(&challenge);
    match output_file {
        Some(path) => {
            fs::write(&path, serde_json::to_string(&solution)?)
                .with_context(|| format!("Failed to write solution file: {}", path.display()))?;
            info!("solution saved to {}", path.display());
            println!("{}", serde_json::to_string(&report)?);
        }
        None => println!("{}", serde_json::to_string(&report)?),
    }
    Ok(())
}

pub fn verify_solution(instance: String, solution: String) -> Result<()> {
    let challenge = load_challenge(&instance)?;
    let solution: Solution = load_json(&solution).context("Failed to parse solution")?;
    let total_value = challenge
        .evaluate_total_value(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("Solution is valid (value {})", total_value);
    Ok(())
}

pub fn compare_greedy(instance: String, hyperparameters: Option<String>) -> Result<()> {
    let challenge = load_challenge(&instance)?;
    let hyperparameters = load_hyperparameters(hyperparameters.as_deref())?;
    let solution = run_solver(&challenge, &hyperparameters)?;
    let greedy = challenge.compute_greedy_baseline()?;
    let gap = challenge.evaluate_solution(&solution)?;

    let mut comparison = Map::new();
    comparison.insert("optimal".to_string(), serde_json::to_value(solution.report(&challenge))?);
    comparison.insert("greedy".to_string(), serde_json::to_value(greedy.report(&challenge))?);
    comparison.insert("gap".to_string(), serde_json::to_value(gap)?);
    println!("{}", serde_json::to_string(&comparison)?);
    Ok(())
}

fn run_solver(challenge: &Challenge, hyperparameters: &Option<Map<String, Value>>) -> Result<Solution> {
    let solution = RefCell::new(None);
    let save_solution_fn = |s: &Solution| -> Result<()> {
        *solution.borrow_mut() = Some(s.clone());
        Ok(())
    };
    dynamic::solve_challenge(challenge, &save_solution_fn, hyperparameters)?;
    solution
        .into_inner()
        .ok_or_else(|| anyhow!("Solver finished without saving a solution"))
}

fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else if source.ends_with(".json") {
        fs::read_to_string(source).with_context(|| format!("Failed to read file: {}", source))
    } else {
        Ok(source.to_string())
    }
}

fn load_json<T: DeserializeOwned>(source: &str) -> Result<T> {
    Ok(serde_json::from_str(&read_source(source)?)?)
}

fn load_challenge(instance: &str) -> Result<Challenge> {
    let challenge = if instance == "reference" {
        dataset::reference_challenge()
    } else {
        load_json::<Challenge>(instance).context("Failed to parse instance")?
    };
    challenge.validate()?;
    Ok(challenge)
}

fn load_hyperparameters(hyperparameters: Option<&str>) -> Result<Option<Map<String, Value>>> {
    hyperparameters
        .map(|h| load_json::<Map<String, Value>>(h).context("Failed to parse hyperparameters"))
        .transpose()
}
