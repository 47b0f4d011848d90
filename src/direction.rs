//! Facing directions and the mirror tables that reflect them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

    /// Unit step as `(dx, dy)`; y grows downwards.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }

    pub fn from_u8(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    /// `#`
    pub fn reversed(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    /// `/`
    pub fn slash(self) -> Self {
        match self {
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Up => Direction::Right,
        }
    }

    /// `\`
    pub fn backslash(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Left,
        }
    }

    /// `|` only turns horizontal movement around.
    pub fn vertical_mirror(self) -> Self {
        match self {
            Direction::Right | Direction::Left => self.reversed(),
            vertical => vertical,
        }
    }

    /// `_` only turns vertical movement around.
    pub fn horizontal_mirror(self) -> Self {
        match self {
            Direction::Up | Direction::Down => self.reversed(),
            horizontal => horizontal,
        }
    }
}
