//! Classic Snake: a snake on a 30 by 30 grid, one piece of food at a time, and
//! a best score that survives between runs.

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod high_score;
pub mod palette;
pub mod snake;
pub mod ticker;

pub use app::SnakeApp;
pub use config::{Cli, Config};
pub use error::{ConfigError, HighScoreError};
pub use game::{Game, Snapshot, TickOutcome};
pub use high_score::{FileScoreStore, HighScore, MemoryScoreStore, ScoreStore};
pub use palette::SnakeColor;
pub use snake::{Direction, Position, Snake};
