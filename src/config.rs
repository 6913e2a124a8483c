// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::{fs::File, io::Read, path::Path};
use thiserror::Error;

pub(crate) const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*";

/// Largest accepted weight magnitude.
pub(crate) const MAX_WEIGHT: i32 = 1_000;

const DEFAULT_BLACKLIST: [&str; 10] = [
    "password",
    "python",
    "12345678",
    "qwerty",
    "12345",
    "123456789",
    "mahnoor123",
    "1234567",
    "football",
    "iloveyou",
];

#[derive(Error, Debug)]
pub(crate) enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Points added (or subtracted) per check.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Weights {
    pub(crate) length: i32,
    pub(crate) case_mix: i32,
    pub(crate) digit: i32,
    pub(crate) special_char: i32,
    pub(crate) blacklist: i32,
}

impl Weights {
    fn entries(&self) -> [(&'static str, i32); 5] {
        [
            ("length", self.length),
            ("case_mix", self.case_mix),
            ("digit", self.digit),
            ("special_char", self.special_char),
            ("blacklist", self.blacklist),
        ]
    }
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            length: 2,
            case_mix: 2,
            digit: 1,
            special_char: 2,
            blacklist: -3,
        }
    }
}

/// Constant tables shared by the scorer and the generator.
///
/// Built once at startup and handed out by reference; never mutated afterwards.
#[derive(Clone, Deserialize, Debug)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) weights: Weights,
    pub(crate) blacklist: HashSet<String>,
    pub(crate) min_length: usize,
    pub(crate) generated_length: usize,
    pub(crate) special_chars: String,
    pub(crate) suggestion_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            weights: Weights::default(),
            blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
            min_length: 12,
            generated_length: 16,
            special_chars: String::from(DEFAULT_SPECIAL_CHARS),
            suggestion_count: 5,
        }
    }
}

impl Config {
    fn normalize(mut self) -> Self {
        self.blacklist = self
            .blacklist
            .into_iter()
            .map(|entry| entry.to_lowercase())
            .collect();
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if let Some((name, weight)) = self
            .weights
            .entries()
            .into_iter()
            .find(|(_, weight)| weight.unsigned_abs() > MAX_WEIGHT.unsigned_abs())
        {
            return Err(ConfigError::Invalid(format!(
                "weights.{name} must be between -{MAX_WEIGHT} and {MAX_WEIGHT}, found {weight}"
            )));
        }
        if self.special_chars.is_empty() {
            return Err(ConfigError::Invalid(
                "special_chars must not be empty".to_string(),
            ));
        }
        if let Some(c) = self
            .special_chars
            .chars()
            .find(|c| !c.is_ascii_punctuation())
        {
            return Err(ConfigError::Invalid(format!(
                "special_chars may only contain ASCII punctuation, found '{c}'"
            )));
        }
        if self.generated_length == 0 {
            return Err(ConfigError::Invalid(
                "generated_length must be greater than 0".to_string(),
            ));
        }
        if self.suggestion_count == 0 {
            return Err(ConfigError::Invalid(
                "suggestion_count must be greater than 0".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Loads the configuration at `config_path`, or the built-in tables if none is given.
pub(crate) fn load_config(config_path: Option<&Path>) -> Result<Config, ConfigError> {
    match config_path {
        Some(path) => read_config(path),
        None => {
            debug!("No configuration file given, using built-in defaults");
            Ok(Config::default())
        }
    }
}

pub(crate) fn read_config(config_path: &Path) -> Result<Config, ConfigError> {
    let path_string = config_path.display().to_string();
    debug!("Reading config at: {path_string}");

    let mut config_data: String = String::new();
    File::open(config_path)
        .and_then(|mut config_file| config_file.read_to_string(&mut config_data))
        .map_err(|source| ConfigError::Read {
            path: path_string.clone(),
            source,
        })?;

    let config: Config =
        serde_yaml::from_str(&config_data).map_err(|source| ConfigError::Parse {
            path: path_string,
            source,
        })?;

    config.normalize().validate()
}
