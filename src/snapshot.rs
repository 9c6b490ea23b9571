use std::collections::HashSet;

use crate::game::GameState;
use crate::geometry::{Coord, Direction, Size};
use crate::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    SnakeHead,
    SnakeBody,
    Apple,
    Empty,
}

/// A read-only picture of the board, walls included, taken after a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub size: Size,
    pub state: GameState,
    pub head: Coord,
    /// Tail first, head last.
    pub body: Vec<Coord>,
    pub length: usize,
    pub direction: Option<Direction>,
    pub apple: Coord,
    pub message: &'static str,
    /// Row-major over `0..=width+1` x `0..=height+1`.
    cells: Vec<Cell>,
}

impl Snapshot {
    pub fn new(size: Size, state: GameState, snake: &Snake, apple: Coord) -> Self {
        let body: HashSet<Coord> = snake.body().iter().copied().collect();
        let head = snake.head();

        let mut cells = Vec::with_capacity(Self::stride(size) * (size.height as usize + 2));
        for y in 0..=size.height as i32 + 1 {
            for x in 0..=size.width as i32 + 1 {
                let pos = Coord { x, y };
                let cell = if size.is_wall(pos) {
                    Cell::Wall
                } else if pos == head {
                    Cell::SnakeHead
                } else if body.contains(&pos) {
                    Cell::SnakeBody
                } else if pos == apple {
                    Cell::Apple
                } else {
                    Cell::Empty
                };
                cells.push(cell);
            }
        }

        Snapshot {
            size,
            state,
            head,
            body: snake.body().iter().copied().collect(),
            length: snake.len(),
            direction: snake.direction(),
            apple,
            message: status_message(state),
            cells,
        }
    }

    fn stride(size: Size) -> usize {
        size.width as usize + 2
    }

    /// Anything outside the wall ring reads as `Wall`.
    pub fn cell(&self, pos: Coord) -> Cell {
        if pos.x < 0
            || pos.y < 0
            || pos.x > self.size.width as i32 + 1
            || pos.y > self.size.height as i32 + 1
        {
            return Cell::Wall;
        }
        self.cells[pos.y as usize * Self::stride(self.size) + pos.x as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(Self::stride(self.size))
    }
}

pub fn status_message(state: GameState) -> &'static str {
    match state {
        GameState::Init => "Press w/a/s/d or arrows to start moving",
        GameState::Running => "Press p to pause",
        GameState::Paused => "Paused. Press p to resume",
        GameState::GameOver => "Game over! Press r to restart",
        GameState::Exited => "Bye!",
    }
}
