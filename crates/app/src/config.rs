use std::fmt;

use maestro_core::model::{ProgressError, ProgressState, SEED_HISTORY, SEED_TARGET_AP};
use tracing::warn;

pub const DEFAULT_SLIDER_MAX: u32 = 1000;
pub const DEFAULT_WINDOW_TITLE: &str = "MAESTRO";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidHistory { raw: String },
    TargetAboveSlider { target: u32, slider_max: u32 },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidHistory { raw } => write!(f, "invalid --history value: {raw}"),
            ArgsError::TargetAboveSlider { target, slider_max } => {
                write!(f, "target {target} exceeds slider maximum {slider_max}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub target_ap: u32,
    pub history: Vec<i64>,
    pub start_in_admin: bool,
    pub slider_max: u32,
    pub window_title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            target_ap: SEED_TARGET_AP,
            history: SEED_HISTORY.to_vec(),
            start_in_admin: false,
            slider_max: DEFAULT_SLIDER_MAX,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(DashboardConfig),
    Help,
}

impl DashboardConfig {
    /// Defaults, overridden by environment, overridden by flags.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for malformed flags. Malformed environment values are
    /// logged and skipped.
    pub fn resolve(
        env: impl Fn(&str) -> Option<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Result<Invocation, ArgsError> {
        let mut config = Self::default();
        config.apply_env(env);

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--target" => {
                    let value = require_value(&mut args, "--target")?;
                    config.target_ap = parse_u32("--target", &value)?;
                }
                "--slider-max" => {
                    let value = require_value(&mut args, "--slider-max")?;
                    config.slider_max = parse_u32("--slider-max", &value)?;
                }
                "--history" => {
                    let value = require_value(&mut args, "--history")?;
                    config.history = parse_history(&value)?;
                }
                "--admin" => config.start_in_admin = true,
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if config.target_ap > config.slider_max {
            return Err(ArgsError::TargetAboveSlider {
                target: config.target_ap,
                slider_max: config.slider_max,
            });
        }

        Ok(Invocation::Run(config))
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = env("MAESTRO_TARGET_AP") {
            match parse_u32("MAESTRO_TARGET_AP", &raw) {
                Ok(value) => self.target_ap = value,
                Err(err) => warn!(%err, "ignoring environment override"),
            }
        }
        if let Some(raw) = env("MAESTRO_SLIDER_MAX") {
            match parse_u32("MAESTRO_SLIDER_MAX", &raw) {
                Ok(value) => self.slider_max = value,
                Err(err) => warn!(%err, "ignoring environment override"),
            }
        }
        if let Some(raw) = env("MAESTRO_HISTORY") {
            match parse_history(&raw) {
                Ok(history) => self.history = history,
                Err(err) => warn!(%err, "ignoring environment override"),
            }
        }
        if let Some(raw) = env("MAESTRO_ADMIN") {
            self.start_in_admin = matches!(raw.trim(), "1" | "true" | "yes");
        }
    }

    /// # Errors
    ///
    /// Returns `ProgressError::EmptyHistory` if the configured history is empty.
    pub fn initial_progress(&self) -> Result<ProgressState, ProgressError> {
        ProgressState::new(self.target_ap, self.history.clone())
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_u32(flag: &'static str, raw: &str) -> Result<u32, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidNumber {
        flag,
        raw: raw.to_string(),
    })
}

fn parse_history(raw: &str) -> Result<Vec<i64>, ArgsError> {
    let invalid = || ArgsError::InvalidHistory {
        raw: raw.to_string(),
    };
    let history = raw
        .split(',')
        .map(|part| part.trim().parse::<i64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;
    if history.is_empty() {
        return Err(invalid());
    }
    Ok(history)
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--target <ap>] [--history <csv>] [--slider-max <ap>] [--admin]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --target {SEED_TARGET_AP}");
    eprintln!("  --history 10,45,80,120,150,180,210");
    eprintln!("  --slider-max {DEFAULT_SLIDER_MAX}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MAESTRO_TARGET_AP, MAESTRO_HISTORY, MAESTRO_SLIDER_MAX, MAESTRO_ADMIN, RUST_LOG");
}
