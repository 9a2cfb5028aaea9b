#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use skillroute_cli::extensions::check::check_pragmatic_solution;
use skillroute_cli::extensions::solve::config::{create_config_from_file, with_logging};
use skillroute_pragmatic::format::solution::serialize_response;
use skillroute_pragmatic::{SolveSettings, get_status_code, solve_request};
use std::io::{BufReader, Read};
use std::sync::Arc;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const TIME_ARG_NAME: &str = "max-time";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";
const RANDOM_SEED_NAME: &str = "seed";

/// Amount of local optima between progress messages when logging is enabled from command line.
const LOG_BEST: usize = 100;

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves a vehicle routing problem with skills and time windows")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether final solution should be checked for feasibility")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_NAME)
                .required(false),
        )
}

/// Runs solver command. Fails if the response has not success status.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    // required
    let problem_path =
        matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or_else(|| "problem file is not specified".to_string())?;

    // optional
    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_NAME, "seed")?;
    let is_logging_enabled = matches.get_flag(LOG_ARG_NAME);
    let is_check_requested = matches.get_flag(CHECK_ARG_NAME);
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME);

    if max_time == Some(0) {
        return Err("max time should be positive".to_string());
    }

    let settings = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => create_config_from_file(BufReader::new(open_file(path, "config")?))
            .map_err(|err| format!("cannot read config: '{err}'"))?,
        None => SolveSettings { logger: Arc::new(|msg: &str| eprintln!("{msg}")), ..SolveSettings::default() },
    };
    let settings = override_settings(settings, max_time, seed, is_logging_enabled);

    let mut request = String::new();
    open_file(problem_path, "problem")?
        .read_to_string(&mut request)
        .map_err(|err| format!("cannot read problem from '{problem_path}': '{err}'"))?;

    let response = solve_request(request.as_str(), &settings);

    let out_file = out_result.map(|path| create_file(path, "out result")).transpose()?;
    serialize_response(out_writer_func(out_file), &response).map_err(|err| format!("cannot write result: '{err}'"))?;

    if get_status_code(&response) != 200 {
        return Err(format!(
            "cannot solve problem: '{}'",
            response.message.as_deref().unwrap_or("unknown error")
        ));
    }

    match (is_check_requested, out_result) {
        (true, Some(out_result)) => check_pragmatic_solution(
            BufReader::new(open_file(problem_path, "problem")?),
            BufReader::new(open_file(out_result, "result")?),
            &settings.limits,
        )
        .map_err(|errors| format!("checker found {} errors:\n{}", errors.len(), errors.join("\n"))),
        (true, None) => Err("check requires result to be written into a file".to_string()),
        (false, _) => Ok(()),
    }
}

fn override_settings(
    settings: SolveSettings,
    max_time: Option<usize>,
    seed: Option<u64>,
    is_logging_enabled: bool,
) -> SolveSettings {
    let mut settings = if is_logging_enabled { with_logging(settings, LOG_BEST) } else { settings };

    if max_time.is_some() {
        settings.config.max_time = max_time;
    }

    if seed.is_some() {
        settings.config.seed = seed;
    }

    settings
}
