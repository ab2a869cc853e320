//! Game configuration
//!
//! Every option has a default; a JSON file named by `SNAKE_CONFIG` and
//! per-field environment variables can override them:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `SNAKE_CONFIG` | path to a JSON file with any subset of the fields |
//! | `SNAKE_BOARD_WIDTH` | `boardWidth` |
//! | `SNAKE_BOARD_HEIGHT` | `boardHeight` |
//! | `SNAKE_INITIAL_LENGTH` | `initialSnakeLength` |
//! | `SNAKE_BASE_SPEED` | `baseSpeed` |
//! | `SNAKE_MAX_SPEED` | `maxSpeed` |
//! | `SNAKE_FOOD_REWARD` | `foodReward` |
//! | `SNAKE_WARNING_FRAMES` | `warningFrameAllowance` |
//! | `SNAKE_WRAP` | `wrapAround` ("1" or "true") |
//! | `SNAKE_SEED` | `seed` |
//!
//! Values that fail to parse are reported as errors rather than replaced by
//! defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    DEFAULT_BASE_SPEED, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_FOOD_REWARD,
    DEFAULT_INITIAL_LENGTH, DEFAULT_MAX_SPEED, DEFAULT_WARNING_FRAMES, MIN_SPEED,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
    #[error("initial snake length must be at least 1")]
    EmptySnake,
    #[error("initial snake length {length} must be smaller than the board capacity {capacity}")]
    SnakeTooLong { length: u16, capacity: u32 },
    #[error("initial snake length {length} does not fit left of the midpoint of a {width}-wide board")]
    SnakeDoesNotFit { length: u16, width: u16 },
    #[error("speed range {base}..={max} is invalid (base must be >= 1 and <= max)")]
    InvalidSpeed { base: u32, max: u32 },
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnakeConfig {
    pub board_width: u16,
    pub board_height: u16,
    pub initial_snake_length: u16,
    /// Movement ticks per second at the initial length
    pub base_speed: u32,
    pub max_speed: u32,
    pub food_reward: u32,
    /// Grace ticks granted before a collision becomes fatal
    pub warning_frame_allowance: u32,
    /// Wrap at the edges instead of treating them as fatal
    pub wrap_around: bool,
    /// Fixed RNG seed; fresh entropy when absent
    pub seed: Option<u64>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            initial_snake_length: DEFAULT_INITIAL_LENGTH,
            base_speed: DEFAULT_BASE_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            food_reward: DEFAULT_FOOD_REWARD,
            warning_frame_allowance: DEFAULT_WARNING_FRAMES,
            wrap_around: false,
            seed: None,
        }
    }
}

impl SnakeConfig {
    /// Create a configuration with a custom board size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            board_width: width,
            board_height: height,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load from the process environment (see module docs)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup("SNAKE_CONFIG").map(|s| s.trim().to_string()) {
            Some(path) if !path.is_empty() => Self::from_json_file(path)?,
            _ => Self::default(),
        };

        override_from(&lookup, "SNAKE_BOARD_WIDTH", &mut config.board_width)?;
        override_from(&lookup, "SNAKE_BOARD_HEIGHT", &mut config.board_height)?;
        override_from(&lookup, "SNAKE_INITIAL_LENGTH", &mut config.initial_snake_length)?;
        override_from(&lookup, "SNAKE_BASE_SPEED", &mut config.base_speed)?;
        override_from(&lookup, "SNAKE_MAX_SPEED", &mut config.max_speed)?;
        override_from(&lookup, "SNAKE_FOOD_REWARD", &mut config.food_reward)?;
        override_from(&lookup, "SNAKE_WARNING_FRAMES", &mut config.warning_frame_allowance)?;

        if let Some(raw) = lookup("SNAKE_WRAP") {
            config.wrap_around = parse_flag("SNAKE_WRAP", &raw)?;
        }
        if lookup("SNAKE_SEED").is_some() {
            let mut seed = 0u64;
            override_from(&lookup, "SNAKE_SEED", &mut seed)?;
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check that a game can be started with this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.board_width, self.board_height);
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }

        let length = self.initial_snake_length;
        if length == 0 {
            return Err(ConfigError::EmptySnake);
        }
        let capacity = width as u32 * height as u32;
        if length as u32 >= capacity {
            return Err(ConfigError::SnakeTooLong { length, capacity });
        }
        // The body extends left from the midpoint column (width / 2).
        if length > width / 2 + 1 {
            return Err(ConfigError::SnakeDoesNotFit { length, width });
        }

        if self.base_speed < MIN_SPEED || self.max_speed < self.base_speed {
            return Err(ConfigError::InvalidSpeed {
                base: self.base_speed,
                max: self.max_speed,
            });
        }
        Ok(())
    }
}

fn override_from<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    slot: &mut T,
) -> Result<(), ConfigError> {
    if let Some(raw) = lookup(name) {
        *slot = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            name,
            value: raw.clone(),
        })?;
    }
    Ok(())
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            name,
            value: raw.to_string(),
        }),
    }
}
