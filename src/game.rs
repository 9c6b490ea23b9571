use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::apple::Apple;
use crate::geometry::{Direction, Size};
use crate::snake::Snake;
use crate::snapshot::Snapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Init,
    Running,
    Paused,
    GameOver,
    Exited,
}

/// Everything the player can ask for in one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Pause,
    Restart,
    Quit,
}

/// What ended the last game. Kept for diagnostics only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
}

#[derive(Debug, PartialEq)]
enum StepResult {
    Moved,
    Nommed,
    Crashed(Collision),
}

pub struct Game<R> {
    size: Size,
    delay: Duration,
    state: GameState,
    snake: Snake,
    apple: Apple,
    collision: Option<Collision>,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(size: Size, delay: Duration, mut rng: R) -> Self {
        let snake = Snake::new(size.midpoint());
        let apple = Apple::respawn(size, snake.body(), &mut rng);

        Game {
            size,
            delay,
            state: GameState::Init,
            snake,
            apple,
            collision: None,
            rng,
        }
    }

    /// Runs one tick: apply the command, move at most once, then judge where
    /// the head landed.
    pub fn tick(&mut self, command: Option<Command>) -> Snapshot {
        let next_state = self.handle_command(command);
        let moves = matches!(
            (self.state, next_state),
            (GameState::Init | GameState::Running, GameState::Running)
        );
        self.transition(next_state);

        if moves {
            match self.slither_on() {
                StepResult::Crashed(collision) => {
                    info!(
                        "Snake crashed ({:?}) at {:?} with length {}",
                        collision,
                        self.snake.head(),
                        self.snake.len()
                    );
                    self.collision = Some(collision);
                    self.transition(GameState::GameOver);
                }
                StepResult::Nommed => {
                    self.apple = Apple::respawn(self.size, self.snake.body(), &mut self.rng);
                    info!(
                        "Apple eaten, length {}, next apple at {:?}",
                        self.snake.len(),
                        self.apple.pos()
                    );
                }
                StepResult::Moved => {
                    debug!("Snake moved to {:?}", self.snake.head());
                }
            }
        }

        self.snapshot()
    }

    fn handle_command(&mut self, command: Option<Command>) -> GameState {
        match (self.state, command) {
            (GameState::Exited, _) => GameState::Exited,
            (_, Some(Command::Quit)) => GameState::Exited,
            (GameState::Init | GameState::Running, Some(Command::Turn(direction))) => {
                if !self.snake.set_direction(direction) {
                    debug!("Ignored turn {:?}", direction);
                }
                GameState::Running
            }
            (GameState::Running, Some(Command::Pause)) => GameState::Paused,
            (GameState::Paused, Some(Command::Pause)) => GameState::Running,
            (GameState::GameOver, Some(Command::Restart)) => {
                self.restart();
                GameState::Init
            }
            (state, _) => state,
        }
    }

    fn transition(&mut self, next: GameState) {
        if next != self.state {
            info!("{:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    fn restart(&mut self) {
        self.snake = Snake::new(self.size.midpoint());
        self.apple = Apple::respawn(self.size, self.snake.body(), &mut self.rng);
        self.collision = None;
    }

    fn slither_on(&mut self) -> StepResult {
        let apple = self.apple.pos();
        let head = self.snake.advance(apple);

        if self.size.is_wall(head) {
            return StepResult::Crashed(Collision::Wall);
        }

        if self.snake.bit_itself() {
            return StepResult::Crashed(Collision::SelfBite);
        }

        if head == apple {
            StepResult::Nommed
        } else {
            StepResult::Moved
        }
    }
}

impl<R> Game<R> {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.size, self.state, &self.snake, self.apple.pos())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Apple {
        self.apple
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }
}
