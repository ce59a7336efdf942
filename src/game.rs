use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::food::place_food;
use crate::high_score::HighScore;
use crate::snake::{Direction, Position, Snake};
use crate::ticker::Ticker;

pub const WIDTH: i32 = 300;
pub const HEIGHT: i32 = 300;
pub const DOT_SIZE: i32 = 10;

pub const INITIAL_LENGTH: usize = 4;
pub const RESTART_LENGTH: usize = 6;
pub const START_HEAD: Position = Position::new(50, 50);

/// Segments within this many places of the head are never treated as a hit.
const SELF_COLLISION_GRACE: usize = 4;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TickOutcome {
    /// The game was already over; nothing moved.
    Idle,
    Moved,
    Ate,
    GameOver { new_high_score: bool },
}

/// Read-only view of everything the renderer needs.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub snake: &'a [Position],
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
    pub running: bool,
}

pub struct Game {
    snake: Snake,
    direction: Direction,
    next_direction: Direction,
    food: Position,
    score: u32,
    high_score: HighScore,
    running: bool,
    ticker: Ticker,
    rng: StdRng,
}

impl Game {
    /// Starts a fresh game: snake of four heading right, food placed, timer
    /// running.
    pub fn new(high_score: HighScore, tick: Duration) -> Self {
        Self::with_rng(high_score, tick, StdRng::from_entropy())
    }

    pub fn with_rng(high_score: HighScore, tick: Duration, rng: StdRng) -> Self {
        let mut game = Game {
            snake: Snake::horizontal(START_HEAD, INITIAL_LENGTH, DOT_SIZE),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: Position::new(0, 0),
            score: 0,
            high_score,
            running: false,
            ticker: Ticker::new(tick),
            rng,
        };
        game.reset(INITIAL_LENGTH);
        game
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: self.snake.segments(),
            food: self.food,
            score: self.score,
            high_score: self.high_score.best(),
            running: self.running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Requests a turn for the next move. Reversing onto the snake's own neck
    /// is ignored, as is any input while the game is over. Returns whether the
    /// request was taken.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if !self.running || direction == self.direction.opposite() {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Feeds frame time to the timer and runs every tick that came due.
    /// Returns how many ticks ran.
    pub fn update(&mut self, dt: Duration) -> u32 {
        let due = self.ticker.advance(dt);
        let mut ran = 0;
        for _ in 0..due {
            if self.tick() == TickOutcome::Idle {
                break;
            }
            ran += 1;
        }
        ran
    }

    /// One step of the game: move, eat, then check for a crash.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.direction = self.next_direction;
        self.snake.advance(self.direction, DOT_SIZE);

        let ate = self.snake.head() == self.food;
        if ate {
            self.snake.grow();
            self.score += 1;
            self.food = self.place_food();
            tracing::debug!(score = self.score, length = self.snake.len(), "ate food");
        }

        if self.crashed() {
            self.running = false;
            self.ticker.stop();
            let new_high_score = self.high_score.submit(self.score);
            tracing::info!(score = self.score, new_high_score, "game over");
            return TickOutcome::GameOver { new_high_score };
        }

        if ate {
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Starts over after a game over with a longer snake. Ignored while a
    /// game is in progress.
    pub fn restart(&mut self) -> bool {
        self.start_over(RESTART_LENGTH)
    }

    /// Starts over after a game over with the initial snake. Ignored while a
    /// game is in progress.
    pub fn play_again(&mut self) -> bool {
        self.start_over(INITIAL_LENGTH)
    }

    fn start_over(&mut self, length: usize) -> bool {
        if self.running {
            return false;
        }
        self.reset(length);
        true
    }

    fn reset(&mut self, length: usize) {
        self.snake = Snake::horizontal(START_HEAD, length, DOT_SIZE);
        self.score = 0;
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.food = self.place_food();
        self.ticker.start();
        self.running = true;
        tracing::debug!(length, interval = ?self.ticker.interval(), "new game");
    }

    fn place_food(&mut self) -> Position {
        place_food(&mut self.rng, WIDTH, HEIGHT, DOT_SIZE)
    }

    fn crashed(&self) -> bool {
        let head = self.snake.head();
        let outside = head.x < 0 || head.x >= WIDTH || head.y < 0 || head.y >= HEIGHT;
        outside || self.snake.bites_itself(SELF_COLLISION_GRACE)
    }
}
