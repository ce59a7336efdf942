use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use classic_snake::{
    Direction, FileScoreStore, Game, HighScore, MemoryScoreStore, Position, TickOutcome,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TICK: Duration = Duration::from_millis(60);

fn scratch_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "classic_snake-it-{}-{}.txt",
        std::process::id(),
        name
    ));
    let _ = fs::remove_file(&path);
    path
}

fn seeded_game(high_score: HighScore, seed: u64) -> Game {
    Game::with_rng(high_score, TICK, StdRng::seed_from_u64(seed))
}

#[test]
fn first_tick_follows_the_documented_layout() {
    let mut game = seeded_game(HighScore::load(Box::new(MemoryScoreStore::default())), 11);
    let before = game.snapshot().snake.to_vec();
    assert_eq!(before[0], Position::new(50, 50));
    assert_eq!(before[3], Position::new(20, 50));

    let outcome = game.tick();
    let after = game.snapshot().snake;

    assert_eq!(after[0], Position::new(60, 50));
    for i in 1..before.len() {
        assert_eq!(after[i], before[i - 1]);
    }
    if outcome == TickOutcome::Ate {
        assert_eq!(after.len(), 5);
        assert_eq!(after[4], Position::new(20, 50));
    } else {
        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(after.len(), 4);
    }
}

#[test]
fn every_tick_moves_the_head_one_cell() {
    let mut game = seeded_game(HighScore::load(Box::new(MemoryScoreStore::default())), 5);
    let turns = [Direction::Down, Direction::Right, Direction::Down, Direction::Left];

    for step in 0..40 {
        if !game.is_running() {
            break;
        }
        if step % 5 == 0 {
            game.steer(turns[(step / 5) % turns.len()]);
        }
        let head = game.snapshot().snake[0];
        game.tick();
        let new_head = game.snapshot().snake[0];
        let moved = (new_head.x - head.x).abs() + (new_head.y - head.y).abs();
        assert_eq!(moved, 10, "head jumped from {:?} to {:?}", head, new_head);
        assert_eq!(new_head, head.shifted(game.direction(), 10));
    }
}

#[test]
fn better_score_overwrites_the_file() {
    let path = scratch_file("better");
    fs::write(&path, "3\n").unwrap();

    let mut high_score = HighScore::load(Box::new(FileScoreStore::new(&path)));
    assert!(high_score.submit(5));
    assert_eq!(fs::read_to_string(&path).unwrap(), "5");

    // A later, lower score in the same process leaves the maximum in place.
    assert!(!high_score.submit(4));
    assert_eq!(fs::read_to_string(&path).unwrap(), "5");

    // And the next run picks it up.
    let reloaded = HighScore::load(Box::new(FileScoreStore::new(&path)));
    assert_eq!(reloaded.best(), 5);
    fs::remove_file(path).unwrap();
}
