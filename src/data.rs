#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

#[derive(Debug, Clone)]
pub struct Factory {
    pub player: usize,
    pub pos: Point,
}

#[derive(Debug, Clone)]
pub struct Dropoff {
    pub player: usize,
    pub pos: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    pub player: usize,
    pub ship_id: usize,
    pub pos: Point,
    pub halite: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    North, East, South, West, Still,
}

impl Direction {
    pub fn get_char_encoding(&self) -> char {
        match self {
            Direction::North => 'n',
            Direction::East => 'e',
            Direction::South => 's',
            Direction::West => 'w',
            Direction::Still => 'o',
        }
    }

    /// The four moves in tie-break order: North, South, East, West.
    pub fn cardinals() -> [Direction; 4] {
        [Direction::North, Direction::South,
        Direction::East, Direction::West]
    }

    pub fn invert(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Still => Direction::Still,
        }
    }

    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Still => (0, 0),
        }
    }
}
