//! A command line interface to the skill-aware vehicle routing solver.
//!

mod commands;

use clap::Command;
use std::process;

use self::commands::check::{get_check_app, run_check};
use self::commands::create_write_buffer;
use self::commands::solve::{get_solve_app, run_solve};

fn main() {
    let matches = Command::new("Skill-aware Vehicle Routing Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to the vehicle routing solver with skills and time windows")
        .subcommand(get_solve_app())
        .subcommand(get_check_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("check", check_matches)) => run_check(check_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
