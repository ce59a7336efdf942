use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::palette::SnakeColor;

pub const DEFAULT_CONFIG_FILE: &str = "snake.json";
pub const DEFAULT_HIGH_SCORE_FILE: &str = "highscore.txt";
pub const DEFAULT_TICK_MS: u64 = 60;

#[derive(Parser, Debug)]
#[command(name = "classic_snake", about = "Classic Snake with a persisted high score")]
pub struct Cli {
    /// JSON settings file; ignored when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Milliseconds between snake moves
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// File the high score is read from and written to
    #[arg(long)]
    pub high_score_file: Option<PathBuf>,

    /// Snake colour; skips the colour selection screen
    #[arg(long, value_enum)]
    pub color: Option<SnakeColor>,

    /// Keep the high score in memory only
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub tick_ms: u64,
    pub high_score_file: PathBuf,
    pub snake_color: Option<SnakeColor>,
    #[serde(skip)]
    pub persist_high_score: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick_ms: DEFAULT_TICK_MS,
            high_score_file: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
            snake_color: None,
            persist_high_score: true,
        }
    }
}

impl Config {
    /// Reads `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(?path, "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file named on the command line, with any flags layered on
    /// top.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::load(&cli.config)?;
        config.apply(cli);
        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, cli: &Cli) {
        if let Some(tick_ms) = cli.tick_ms {
            self.tick_ms = tick_ms;
        }
        if let Some(path) = &cli.high_score_file {
            self.high_score_file = path.clone();
        }
        if cli.color.is_some() {
            self.snake_color = cli.color;
        }
        if cli.no_save {
            self.persist_high_score = false;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
