use std::ops::Add;

/// Board dimensions. The playable region is `1..=width` x `1..=height`,
/// surrounded by a ring of wall cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn new(width: u16, height: u16) -> Self {
        Size { width, height }
    }

    pub fn is_wall(&self, pos: Coord) -> bool {
        pos.x == 0
            || pos.y == 0
            || pos.x == self.width as i32 + 1
            || pos.y == self.height as i32 + 1
    }

    pub fn is_playable(&self, pos: Coord) -> bool {
        (1..=self.width as i32).contains(&pos.x) && (1..=self.height as i32).contains(&pos.y)
    }

    pub fn midpoint(&self) -> Coord {
        Coord {
            x: (self.width as i32 + 1) / 2,
            y: (self.height as i32 + 1) / 2,
        }
    }

    pub fn playable_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when both directions lie on one axis and point away from each other.
    pub fn opposes(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn delta(&self) -> Coord {
        match self {
            Direction::Up => Coord { x: 0, y: -1 },
            Direction::Down => Coord { x: 0, y: 1 },
            Direction::Left => Coord { x: -1, y: 0 },
            Direction::Right => Coord { x: 1, y: 0 },
        }
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add<Direction> for Coord {
    type Output = Coord;

    fn add(self, dir: Direction) -> Coord {
        self + dir.delta()
    }
}
