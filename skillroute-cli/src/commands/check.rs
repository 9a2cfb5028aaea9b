#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, Command};
use skillroute_cli::extensions::check::check_pragmatic_solution;
use skillroute_cli::extensions::solve::config::create_config_from_file;
use skillroute_core::models::problem::DimensionLimits;
use std::io::BufReader;

const PROBLEM_ARG_NAME: &str = "problem-file";
const SOLUTION_ARG_NAME: &str = "solution-file";
const CONFIG_ARG_NAME: &str = "config";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check solution feasibility")
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets input file which contains a problem definition")
                .short('p')
                .long(PROBLEM_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets solution file")
                .short('s')
                .long(SOLUTION_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file used to produce the solution")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
}

/// Runs check command.
pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let problem_path =
        matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or_else(|| "problem file is not specified".to_string())?;
    let solution_path =
        matches.get_one::<String>(SOLUTION_ARG_NAME).ok_or_else(|| "solution file is not specified".to_string())?;
    let limits = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => {
            create_config_from_file(BufReader::new(open_file(path, "config")?))
                .map_err(|err| format!("cannot read config: '{err}'"))?
                .limits
        }
        None => DimensionLimits::default(),
    };

    check_pragmatic_solution(
        BufReader::new(open_file(problem_path, "problem")?),
        BufReader::new(open_file(solution_path, "solution")?),
        &limits,
    )
    .map_err(|errors| format!("checker found {} errors:\n{}", errors.len(), errors.join("\n")))?;

    println!("solution feasibility check is completed successfully");

    Ok(())
}
