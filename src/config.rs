//! Command line configuration of the `toruslife` binary.

use std::{path::PathBuf, time::Duration};

use thiserror::Error;

/// Side of the universe pattern files are loaded into.
pub const EXTENT: usize = 32;

pub const USAGE: &str =
    "usage: toruslife [PATTERN] [--generations N] [--delay-ms MS] [--animate] [--until-cycle]";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),

    #[error("missing value for '{0}'")]
    MissingValue(&'static str),

    #[error("invalid value '{value}' for '{flag}': expected a non-negative integer")]
    InvalidNumber { flag: &'static str, value: String },

    #[error("only one pattern may be given, got '{0}' as well")]
    ExtraPattern(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pattern file to load. `None` runs the built-in demo.
    pub pattern: Option<PathBuf>,
    pub generations: u64,
    pub delay: Duration,
    pub animate: bool,
    pub until_cycle: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: None,
            generations: 10,
            delay: Duration::from_millis(100),
            animate: false,
            until_cycle: false,
        }
    }
}

impl Config {
    /// Parses the arguments following the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--generations" => {
                    config.generations = number("--generations", args.next())?;
                }
                "--delay-ms" => {
                    config.delay = Duration::from_millis(number("--delay-ms", args.next())?);
                }
                "--animate" => config.animate = true,
                "--until-cycle" => config.until_cycle = true,
                _ if arg.starts_with("--") => {
                    return Err(ConfigError::UnknownArgument(arg));
                }
                _ if config.pattern.is_some() => return Err(ConfigError::ExtraPattern(arg)),
                _ => config.pattern = Some(PathBuf::from(arg)),
            }
        }
        Ok(config)
    }
}

fn number(flag: &'static str, value: Option<String>) -> Result<u64, ConfigError> {
    let value = value.ok_or(ConfigError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { flag, value })
}
