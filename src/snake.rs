use std::collections::VecDeque;

use crate::geometry::{Coord, Direction};

/// The snake body is stored tail-first, so the head is always the back.
#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    body: VecDeque<Coord>,
    direction: Option<Direction>,
    /// Set until the first step, which stretches the snake out to two cells.
    unmoved: bool,
}

impl Snake {
    /// A single-cell snake that doesn't move until it is given a direction.
    pub fn new(start: Coord) -> Self {
        Snake {
            body: VecDeque::from([start]),
            direction: None,
            unmoved: true,
        }
    }

    pub fn head(&self) -> Coord {
        // body is never empty: it starts with one cell and advance pushes before it pops
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<Coord> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns whether the direction changed. Reversals are dropped.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        match self.direction {
            Some(current) if current == requested || current.opposes(requested) => false,
            _ => {
                self.direction = Some(requested);
                true
            }
        }
    }

    /// Steps the head one cell along the current direction. Landing on the
    /// apple keeps the tail (growth), anything else drops it (translation).
    /// The very first step keeps the starting cell as the tail either way.
    /// A snake without a direction stays put.
    pub fn advance(&mut self, apple: Coord) -> Coord {
        let Some(direction) = self.direction else {
            return self.head();
        };

        let new_head = self.head() + direction;
        self.body.push_back(new_head);
        if new_head != apple && !self.unmoved {
            self.body.pop_front();
        }
        self.unmoved = false;
        new_head
    }

    /// True when the head shares a cell with any other body segment.
    pub fn bit_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().rev().skip(1).any(|&pos| pos == head)
    }

    pub fn occupies(&self, pos: Coord) -> bool {
        self.body.contains(&pos)
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: impl IntoIterator<Item = Coord>, direction: Direction) -> Self {
        Snake {
            body: body.into_iter().collect(),
            direction: Some(direction),
            unmoved: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_from(body: &[(i32, i32)], direction: Direction) -> Snake {
        Snake::from_body(body.iter().map(|&(x, y)| Coord::new(x, y)), direction)
    }

    const NOWHERE: Coord = Coord { x: -10, y: -10 };

    #[test]
    fn test_new_snake_is_one_cell_without_direction() {
        let snake = Snake::new(Coord::new(3, 3));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Coord::new(3, 3));
        assert_eq!(snake.direction(), None);
    }

    #[test]
    fn test_advance_without_direction_stays_put() {
        let mut snake = Snake::new(Coord::new(3, 3));
        assert_eq!(snake.advance(NOWHERE), Coord::new(3, 3));
        assert_eq!(snake.len(), 1);

        // Standing still doesn't use up the first step
        snake.set_direction(Direction::Left);
        snake.advance(NOWHERE);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_first_direction_always_accepted() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut snake = Snake::new(Coord::new(3, 3));
            assert!(snake.set_direction(dir));
            assert_eq!(snake.direction(), Some(dir));
        }
    }

    #[test]
    fn test_reversal_rejected() {
        let mut snake = snake_from(&[(2, 3), (3, 3)], Direction::Right);
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Some(Direction::Right));

        let mut snake = snake_from(&[(4, 3), (3, 3)], Direction::Left);
        assert!(!snake.set_direction(Direction::Right));
        assert_eq!(snake.direction(), Some(Direction::Left));

        let mut snake = snake_from(&[(3, 2), (3, 3)], Direction::Down);
        assert!(!snake.set_direction(Direction::Up));
        assert_eq!(snake.direction(), Some(Direction::Down));

        let mut snake = snake_from(&[(3, 4), (3, 3)], Direction::Up);
        assert!(!snake.set_direction(Direction::Down));
        assert_eq!(snake.direction(), Some(Direction::Up));

        // Perpendicular turns go through, repeating the current one is not a change
        assert!(snake.set_direction(Direction::Left));
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Some(Direction::Left));
    }

    #[test]
    fn test_translation_keeps_length() {
        let mut snake = snake_from(&[(1, 3), (2, 3), (3, 3)], Direction::Right);

        let new_head = snake.advance(NOWHERE);

        assert_eq!(new_head, Coord::new(4, 3));
        assert_eq!(snake.head(), new_head);
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Coord::new(1, 3)), "Tail was removed");
        assert_eq!(snake.body()[0], Coord::new(2, 3));
    }

    #[test]
    fn test_growth_keeps_tail() {
        let mut snake = snake_from(&[(1, 3), (2, 3), (3, 3)], Direction::Right);

        let new_head = snake.advance(Coord::new(4, 3));

        assert_eq!(new_head, Coord::new(4, 3));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.body()[0], Coord::new(1, 3));
    }

    #[test]
    fn test_first_move_keeps_start_cell() {
        let mut snake = Snake::new(Coord::new(3, 3));
        snake.set_direction(Direction::Right);
        snake.advance(NOWHERE);
        assert_eq!(
            snake.body(),
            &VecDeque::from([Coord::new(3, 3), Coord::new(4, 3)])
        );
        assert!(!snake.is_empty());

        // Later steps translate as usual
        snake.advance(NOWHERE);
        assert_eq!(
            snake.body(),
            &VecDeque::from([Coord::new(4, 3), Coord::new(5, 3)])
        );
    }

    #[test]
    fn test_first_move_onto_apple() {
        let mut snake = Snake::new(Coord::new(3, 3));
        snake.set_direction(Direction::Up);
        snake.advance(Coord::new(3, 2));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Coord::new(3, 2));
    }

    #[test]
    fn test_self_bite() {
        // Turning up runs the head into the segment above it
        let mut snake = snake_from(
            &[(2, 4), (2, 3), (2, 2), (3, 2), (4, 2), (4, 3), (3, 3)],
            Direction::Left,
        );
        assert!(!snake.bit_itself());

        snake.set_direction(Direction::Up);
        snake.advance(NOWHERE);
        assert_eq!(snake.head(), Coord::new(3, 2));
        assert!(snake.bit_itself());
    }

    #[test]
    fn test_chasing_tail_is_not_a_bite() {
        // 2x2 loop: the head moves into the cell the tail leaves this tick
        let mut snake = snake_from(&[(1, 1), (2, 1), (2, 2), (1, 2)], Direction::Left);
        snake.set_direction(Direction::Up);
        snake.advance(NOWHERE);
        assert_eq!(snake.head(), Coord::new(1, 1));
        assert!(!snake.bit_itself());
    }
}
