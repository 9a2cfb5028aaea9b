use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SIMPLE_PROBLEM_PATH: &str = "../data/simple.json";
const SKILLS_PROBLEM_PATH: &str = "../data/skills.json";
const TIME_WINDOWS_PROBLEM_PATH: &str = "../data/time_windows.json";

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_solve_with_out_writer(matches: &ArgMatches) -> Result<(), String> {
    run_solve(matches, |_| BufWriter::new(Box::new(DummyWrite {})))
}

fn get_matches(args: &[&str]) -> ArgMatches {
    get_solve_app().try_get_matches_from([&["solve"][..], args].concat()).expect("cannot parse arguments")
}

#[test]
fn can_solve_problem_with_time_limit() {
    let matches = get_matches(&[SIMPLE_PROBLEM_PATH, "--max-time", "1", "--seed", "3"]);

    assert_eq!(run_solve_with_out_writer(&matches), Ok(()));
}

#[test]
fn can_solve_problems_and_check_results() {
    for problem_path in [SIMPLE_PROBLEM_PATH, SKILLS_PROBLEM_PATH, TIME_WINDOWS_PROBLEM_PATH] {
        let out_file = NamedTempFile::new().expect("cannot create temp file");
        let out_path = out_file.path().to_str().expect("cannot get temp file path");
        let matches = get_matches(&[problem_path, "--max-time", "2", "--out-result", out_path, "--check"]);

        assert_eq!(run_solve(&matches, create_write_buffer), Ok(()));

        let response = std::fs::read_to_string(out_path).expect("cannot read result");
        assert!(response.contains("\"status\": \"success\""));
    }
}

#[test]
fn can_solve_problem_with_config() {
    let matches = get_matches(&[SIMPLE_PROBLEM_PATH, "--config", "../data/config/config.full.json", "--max-time", "1"]);

    assert_eq!(run_solve_with_out_writer(&matches), Ok(()));
}

#[test]
fn can_require_problem_path() {
    get_solve_app().try_get_matches_from(vec!["solve"]).unwrap_err();
}

#[test]
fn can_parse_flags() {
    let matches = get_matches(&[SIMPLE_PROBLEM_PATH, "--log", "--check"]);

    assert!(matches.get_flag(LOG_ARG_NAME));
    assert!(matches.get_flag(CHECK_ARG_NAME));
}

#[test]
fn can_reject_invalid_numbers() {
    for args in [[SIMPLE_PROBLEM_PATH, "--max-time", "ten"], [SIMPLE_PROBLEM_PATH, "--seed", "abc"]] {
        let result = run_solve_with_out_writer(&get_matches(&args));

        assert!(result.is_err_and(|err| err.starts_with("cannot get integer value")));
    }
}

#[test]
fn can_reject_zero_max_time() {
    let matches = get_matches(&[SIMPLE_PROBLEM_PATH, "--max-time", "0"]);

    assert_eq!(run_solve_with_out_writer(&matches), Err("max time should be positive".to_string()));
}

#[test]
fn can_fail_on_error_response() {
    let mut problem_file = NamedTempFile::new().expect("cannot create temp file");
    problem_file.write_all(br#"{"nodes": [{"id": 0, "x": 0, "y": 0}], "num_vehicles": 1}"#).expect("cannot write");
    let problem_path = problem_file.path().to_str().expect("cannot get temp file path");

    let result = run_solve_with_out_writer(&get_matches(&[problem_path]));

    assert_eq!(result, Err("cannot solve problem: 'First node must be the depot.'".to_string()));
}

#[test]
fn can_fail_on_missing_problem_file() {
    let result = run_solve_with_out_writer(&get_matches(&["../data/not-existing.json"]));

    assert!(result.is_err_and(|err| err.starts_with("cannot open problem file")));
}

#[test]
fn can_require_out_result_for_check() {
    let result = run_solve_with_out_writer(&get_matches(&[SIMPLE_PROBLEM_PATH, "--max-time", "1", "--check"]));

    assert_eq!(result, Err("check requires result to be written into a file".to_string()));
}
