use ggez::event::EventHandler;
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::mint::Point2;
use ggez::{graphics, Context, GameResult};

use crate::game::{Game, Snapshot, DOT_SIZE, HEIGHT, WIDTH};
use crate::palette::SnakeColor;
use crate::snake::{Direction, Position};

/// Scores above this get the congratulations line on the game over screen.
const CONGRATS_THRESHOLD: u32 = 9;

const TEXT_SCALE: f32 = 14.0;
const LINE_HEIGHT: f32 = 20.0;

// Colors
const BACKGROUND_COLOR: graphics::Color = graphics::Color::new(0.75, 0.75, 0.75, 1.0);
const FOOD_COLOR: graphics::Color = graphics::Color::new(1.0, 0.0, 0.0, 1.0);
const TEXT_COLOR: graphics::Color = graphics::Color::new(0.0, 0.0, 0.0, 1.0);

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Screen {
    ChooseColor { selection: usize },
    Playing,
    Farewell,
}

/// What a key means while a game is on screen.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Command {
    Steer(Direction),
    Restart,
    PlayAgain,
    Quit,
}

/// Arrow keys and WASD steer; R, P and Q act on the game over screen.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Command::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::S => Some(Command::Steer(Direction::Down)),
        KeyCode::Left | KeyCode::A => Some(Command::Steer(Direction::Left)),
        KeyCode::Right | KeyCode::D => Some(Command::Steer(Direction::Right)),
        KeyCode::R => Some(Command::Restart),
        KeyCode::P => Some(Command::PlayAgain),
        KeyCode::Q => Some(Command::Quit),
        _ => None,
    }
}

pub struct SnakeApp {
    game: Game,
    screen: Screen,
    color: SnakeColor,
}

impl SnakeApp {
    /// With no colour given the player picks one before the first game.
    pub fn new(game: Game, color: Option<SnakeColor>) -> Self {
        let screen = match color {
            Some(_) => Screen::Playing,
            None => Screen::ChooseColor {
                selection: SnakeColor::default().index(),
            },
        };
        SnakeApp {
            game,
            screen,
            color: color.unwrap_or_default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn color(&self) -> SnakeColor {
        self.color
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reacts to a key press. Returns true once the player has acknowledged
    /// the farewell and the window should close.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.screen {
            Screen::ChooseColor { selection } => {
                self.choose_color(selection, key);
                false
            }
            Screen::Playing => {
                if let Some(command) = command_for(key) {
                    self.apply(command);
                }
                false
            }
            Screen::Farewell => matches!(key, KeyCode::Return | KeyCode::Space | KeyCode::Escape),
        }
    }

    fn choose_color(&mut self, selection: usize, key: KeyCode) {
        let count = SnakeColor::ALL.len();
        match key {
            KeyCode::Up | KeyCode::W => {
                self.screen = Screen::ChooseColor {
                    selection: selection.checked_sub(1).unwrap_or(count - 1),
                };
            }
            KeyCode::Down | KeyCode::S => {
                self.screen = Screen::ChooseColor {
                    selection: (selection + 1) % count,
                };
            }
            KeyCode::Return | KeyCode::Space => {
                self.color = SnakeColor::ALL[selection];
                self.screen = Screen::Playing;
                tracing::info!(color = self.color.name(), "snake colour chosen");
            }
            KeyCode::Escape => {
                self.color = SnakeColor::default();
                self.screen = Screen::Playing;
            }
            _ => {}
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Steer(direction) => {
                self.game.steer(direction);
            }
            Command::Restart => {
                self.game.restart();
            }
            Command::PlayAgain => {
                self.game.play_again();
            }
            Command::Quit => {
                if !self.game.is_running() {
                    tracing::info!(high_score = self.game.high_score(), "quitting");
                    self.screen = Screen::Farewell;
                }
            }
        }
    }

    fn draw_color_menu(&self, ctx: &mut Context, canvas: &mut graphics::Canvas, selection: usize) -> GameResult {
        draw_text(canvas, "Select the color of your snake:", 20.0, 20.0, TEXT_COLOR);

        for (i, color) in SnakeColor::ALL.iter().enumerate() {
            let y = 60.0 + i as f32 * 30.0;
            let (r, g, b) = color.rgb();
            let swatch = graphics::Rect::new(40.0, y, DOT_SIZE as f32 * 2.0, DOT_SIZE as f32 * 2.0);
            canvas.draw(
                &graphics::Mesh::new_rectangle(
                    ctx,
                    graphics::DrawMode::fill(),
                    swatch,
                    graphics::Color::from_rgb(r, g, b),
                )?,
                graphics::DrawParam::default(),
            );

            let label = if i == selection {
                format!("> {}", color.name())
            } else {
                color.name().to_string()
            };
            draw_text(canvas, &label, 70.0, y + 2.0, TEXT_COLOR);
        }

        draw_text(
            canvas,
            "Up/Down to choose, Enter to start",
            20.0,
            HEIGHT as f32 - 30.0,
            TEXT_COLOR,
        );
        Ok(())
    }

    fn draw_board(&self, ctx: &mut Context, canvas: &mut graphics::Canvas, snapshot: &Snapshot) -> GameResult {
        draw_cell(ctx, canvas, snapshot.food, FOOD_COLOR)?;

        let (r, g, b) = self.color.rgb();
        let head_color = graphics::Color::from_rgb(r, g, b);
        let (r, g, b) = self.color.body_rgb();
        let body_color = graphics::Color::from_rgb(r, g, b);

        for (i, segment) in snapshot.snake.iter().enumerate() {
            let color = if i == 0 { head_color } else { body_color };
            draw_cell(ctx, canvas, *segment, color)?;
        }
        Ok(())
    }

    fn draw_game_over(&self, canvas: &mut graphics::Canvas, snapshot: &Snapshot) {
        let red = graphics::Color::RED;
        let center_x = WIDTH as f32 / 2.0;
        let center_y = HEIGHT as f32 / 2.0;

        let verdict = if snapshot.score > CONGRATS_THRESHOLD {
            "Congrats you had a high score!"
        } else {
            "Better luck next time!"
        };
        draw_text(canvas, verdict, center_x - 100.0, center_y - 70.0, red);
        draw_text(canvas, "Game Over", center_x - 50.0, center_y - 30.0, red);
        draw_text(
            canvas,
            &format!("Points: {}", snapshot.score),
            center_x - 50.0,
            center_y - 30.0 + LINE_HEIGHT,
            red,
        );
        draw_text(
            canvas,
            &format!("High Score: {}", snapshot.high_score),
            center_x - 50.0,
            center_y - 30.0 + LINE_HEIGHT * 2.0,
            red,
        );
        draw_text(
            canvas,
            "Press 'P' to Play Again or 'Q' to Quit",
            center_x - 135.0,
            center_y - 30.0 + LINE_HEIGHT * 3.0,
            red,
        );
        draw_text(
            canvas,
            "('R' restarts with a longer snake)",
            center_x - 115.0,
            center_y - 30.0 + LINE_HEIGHT * 4.0,
            red,
        );
    }

    fn draw_farewell(&self, canvas: &mut graphics::Canvas) {
        let center_y = HEIGHT as f32 / 2.0;
        draw_text(canvas, "Goodbye", 20.0, center_y - 40.0, TEXT_COLOR);
        draw_text(
            canvas,
            "Thank you for playing, come back soon!",
            20.0,
            center_y - 10.0,
            TEXT_COLOR,
        );
        draw_text(canvas, "Press Enter to exit", 20.0, center_y + 20.0, TEXT_COLOR);
    }
}

fn draw_text(canvas: &mut graphics::Canvas, line: &str, x: f32, y: f32, color: graphics::Color) {
    let mut text = graphics::Text::new(line);
    text.set_scale(TEXT_SCALE);
    canvas.draw(
        &text,
        graphics::DrawParam::default()
            .dest(Point2 { x, y })
            .color(color),
    );
}

fn draw_cell(ctx: &mut Context, canvas: &mut graphics::Canvas, pos: Position, color: graphics::Color) -> GameResult {
    let rect = graphics::Rect::new(pos.x as f32, pos.y as f32, DOT_SIZE as f32, DOT_SIZE as f32);
    canvas.draw(
        &graphics::Mesh::new_rectangle(ctx, graphics::DrawMode::fill(), rect, color)?,
        graphics::DrawParam::default(),
    );
    Ok(())
}

impl EventHandler for SnakeApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        if self.screen == Screen::Playing {
            self.game.update(ctx.time.delta());
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR);

        match self.screen {
            Screen::ChooseColor { selection } => self.draw_color_menu(ctx, &mut canvas, selection)?,
            Screen::Playing => {
                let snapshot = self.game.snapshot();
                if snapshot.running {
                    self.draw_board(ctx, &mut canvas, &snapshot)?;
                } else {
                    self.draw_game_over(&mut canvas, &snapshot);
                }
                draw_text(
                    &mut canvas,
                    &format!("Points: {}", snapshot.score),
                    10.0,
                    8.0,
                    TEXT_COLOR,
                );
            }
            Screen::Farewell => self.draw_farewell(&mut canvas),
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        if let Some(keycode) = input.keycode {
            if self.handle_key(keycode) {
                ctx.request_quit();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::high_score::{HighScore, MemoryScoreStore};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn app(color: Option<SnakeColor>) -> SnakeApp {
        let high_score = HighScore::load(Box::new(MemoryScoreStore::default()));
        let game = Game::with_rng(high_score, Duration::from_millis(60), StdRng::seed_from_u64(3));
        SnakeApp::new(game, color)
    }

    /// Runs the game straight into the right-hand wall.
    fn crash(app: &mut SnakeApp) {
        while app.game.is_running() {
            app.game.tick();
        }
    }

    #[test]
    fn arrows_and_wasd_steer_alike() {
        for (arrow, letter, direction) in [
            (KeyCode::Up, KeyCode::W, Direction::Up),
            (KeyCode::Down, KeyCode::S, Direction::Down),
            (KeyCode::Left, KeyCode::A, Direction::Left),
            (KeyCode::Right, KeyCode::D, Direction::Right),
        ] {
            assert_eq!(command_for(arrow), Some(Command::Steer(direction)));
            assert_eq!(command_for(letter), command_for(arrow));
        }
        assert_eq!(command_for(KeyCode::R), Some(Command::Restart));
        assert_eq!(command_for(KeyCode::P), Some(Command::PlayAgain));
        assert_eq!(command_for(KeyCode::Q), Some(Command::Quit));
        assert_eq!(command_for(KeyCode::Z), None);
    }

    #[test]
    fn colour_screen_wraps_and_confirms() {
        let mut app = app(None);
        assert_eq!(app.screen(), Screen::ChooseColor { selection: 2 });

        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.screen(), Screen::ChooseColor { selection: 5 });

        app.handle_key(KeyCode::Down);
        assert_eq!(app.screen(), Screen::ChooseColor { selection: 0 });

        app.handle_key(KeyCode::Return);
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.color(), SnakeColor::Blue);
    }

    #[test]
    fn configured_colour_skips_the_menu() {
        let app = app(Some(SnakeColor::Orange));
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.color(), SnakeColor::Orange);
    }

    #[test]
    fn quit_only_works_after_game_over() {
        let mut app = app(Some(SnakeColor::Green));

        assert!(!app.handle_key(KeyCode::Q));
        assert_eq!(app.screen(), Screen::Playing);

        crash(&mut app);
        assert!(!app.handle_key(KeyCode::Q));
        assert_eq!(app.screen(), Screen::Farewell);

        assert!(!app.handle_key(KeyCode::Q));
        assert!(app.handle_key(KeyCode::Return));
    }

    #[test]
    fn restart_key_gives_a_longer_snake_than_play_again() {
        let mut app = app(Some(SnakeColor::Green));

        crash(&mut app);
        app.handle_key(KeyCode::R);
        assert!(app.game().is_running());
        assert_eq!(app.game().snake().len(), 6);

        crash(&mut app);
        app.handle_key(KeyCode::P);
        assert!(app.game().is_running());
        assert_eq!(app.game().snake().len(), 4);
    }
}
