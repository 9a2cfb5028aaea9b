//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use serde::Deserialize;
use skillroute_core::models::common::Cost;
use skillroute_core::solver::TelemetryMode;
use skillroute_core::utils::{Float, InfoLogger};
use skillroute_pragmatic::SolveSettings;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies search configuration.
    pub search: Option<SearchConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A termination configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max time in seconds. Default is 10.
    pub max_time: Option<usize>,
    /// Max amount of local optima in a row without improvement. Default is 200.
    pub max_stagnation: Option<usize>,
}

/// A search configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// A random seed. Default is 0.
    pub seed: Option<u64>,
    /// A weight of the longest route in the objective. Default is 100.
    pub span_cost_coefficient: Option<Cost>,
    /// A weight of arc penalties in guided local search. Default is 0.1.
    pub penalty_factor: Option<Float>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// A logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies how often, in local optima, progress is logged. Default is 100.
    pub log_best: Option<usize>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates solve settings from config file.
pub fn create_config_from_file<R: Read>(reader: BufReader<R>) -> Result<SolveSettings, String> {
    read_config(reader).and_then(|config| create_settings_from_config(&config))
}

/// Creates solve settings from config.
pub fn create_settings_from_config(config: &Config) -> Result<SolveSettings, String> {
    let settings = SolveSettings::default();
    let settings = configure_from_termination(settings, &config.termination)?;
    let settings = configure_from_search(settings, &config.search)?;
    let settings = configure_from_telemetry(settings, &config.telemetry);

    Ok(settings)
}

/// Creates a logger which writes to stdout.
pub fn create_stdout_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

/// Enables logging in given settings.
pub fn with_logging(mut settings: SolveSettings, log_best: usize) -> SolveSettings {
    let logger = create_stdout_logger();
    settings.config.telemetry_mode = TelemetryMode::OnlyLogging { logger: logger.clone(), log_best };
    settings.logger = logger;

    settings
}

fn configure_from_termination(
    mut settings: SolveSettings,
    config: &Option<TerminationConfig>,
) -> Result<SolveSettings, String> {
    if let Some(config) = config {
        if config.max_time == Some(0) {
            return Err("max time should be positive".to_string());
        }

        if config.max_time.is_some() {
            settings.config.max_time = config.max_time;
        }

        if let Some(max_stagnation) = config.max_stagnation {
            settings.config.max_stagnation = max_stagnation;
        }
    }

    Ok(settings)
}

fn configure_from_search(mut settings: SolveSettings, config: &Option<SearchConfig>) -> Result<SolveSettings, String> {
    if let Some(config) = config {
        if config.seed.is_some() {
            settings.config.seed = config.seed;
        }

        match config.span_cost_coefficient {
            Some(coefficient) if coefficient < 0 => {
                return Err(format!("span cost coefficient should not be negative, got: {coefficient}"));
            }
            Some(coefficient) => settings.limits.span_cost_coefficient = coefficient,
            None => {}
        }

        match config.penalty_factor {
            Some(factor) if !(factor.is_finite() && factor > 0.) => {
                return Err(format!("penalty factor should be positive, got: {factor}"));
            }
            Some(factor) => settings.config.penalty_factor = factor,
            None => {}
        }
    }

    Ok(settings)
}

fn configure_from_telemetry(settings: SolveSettings, config: &Option<TelemetryConfig>) -> SolveSettings {
    const LOG_BEST: usize = 100;

    match config.as_ref().and_then(|config| config.logging.as_ref()) {
        Some(LoggingConfig { enabled: true, log_best }) => with_logging(settings, log_best.unwrap_or(LOG_BEST)),
        _ => settings,
    }
}
