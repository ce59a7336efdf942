use clap::Parser;
use ggez::{event, GameError, GameResult};
use tracing_subscriber::EnvFilter;

use classic_snake::game::{HEIGHT, WIDTH};
use classic_snake::{Cli, Config, FileScoreStore, Game, HighScore, MemoryScoreStore, ScoreStore, SnakeApp};

fn main() -> GameResult {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli).map_err(|e| GameError::CustomError(e.to_string()))?;
    tracing::debug!(?config, "starting");

    let store: Box<dyn ScoreStore> = if config.persist_high_score {
        let store = FileScoreStore::new(&config.high_score_file);
        tracing::debug!(path = ?store.path(), "high score kept on disk");
        Box::new(store)
    } else {
        Box::new(MemoryScoreStore::default())
    };
    let high_score = HighScore::load(store);

    let window_setup = ggez::conf::WindowSetup::default().title("Snake").vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(WIDTH as f32, HEIGHT as f32)
        .resizable(false);

    let (ctx, event_loop) = ggez::ContextBuilder::new("classic_snake", "classic_snake")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let game = Game::new(high_score, config.tick_interval());
    let app = SnakeApp::new(game, config.snake_color);
    event::run(ctx, event_loop, app)
}
