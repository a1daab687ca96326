//! Basic dig-plan types.
//!
//! - `Direction`: one of the four axis-aligned unit steps, with its letter and
//!   hex code spellings.
//! - `Move`: a `(direction, distance)` instruction.
//! - `Turn`: convexity of the corner between two consecutive moves.
//! - `DecodeMode`: which half of an input line carries the move.

use nalgebra::Vector2;

/// Lattice point `(row, column)`.
pub type Position = Vector2<i64>;

/// Axis-aligned move direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step in `(row, column)` coordinates.
    #[inline]
    pub fn delta(self) -> Position {
        match self {
            Direction::Up => Vector2::new(-1, 0),
            Direction::Right => Vector2::new(0, 1),
            Direction::Down => Vector2::new(1, 0),
            Direction::Left => Vector2::new(0, -1),
        }
    }

    /// Direction after a 90° clockwise turn.
    #[inline]
    pub fn clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Classify the corner where a move in `self` is followed by one in `next`.
    ///
    /// Only the four clockwise quarter turns are convex; every other pair is
    /// concave, including reversals and repeats (which well-formed loops do
    /// not contain).
    #[inline]
    pub fn turn_to(self, next: Direction) -> Turn {
        if self.clockwise() == next {
            Turn::Convex
        } else {
            Turn::Concave
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'U' => Some(Direction::Up),
            'R' => Some(Direction::Right),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Right => 'R',
            Direction::Down => 'D',
            Direction::Left => 'L',
        }
    }

    /// Hex-payload code table: `0→Right, 1→Down, 2→Left, 3→Up`.
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            '0' => Some(Direction::Right),
            '1' => Some(Direction::Down),
            '2' => Some(Direction::Left),
            '3' => Some(Direction::Up),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Direction::Right => '0',
            Direction::Down => '1',
            Direction::Left => '2',
            Direction::Up => '3',
        }
    }
}

/// Corner convexity. For a clockwise loop, convex corners point outward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Convex,
    Concave,
}

/// One straight leg of the trench centerline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub direction: Direction,
    pub distance: u32,
}

impl Move {
    /// Largest distance expressible in the five-digit hex payload.
    pub const MAX_HEX_DISTANCE: u32 = 0xF_FFFF;

    #[inline]
    pub fn new(direction: Direction, distance: u32) -> Self {
        Self {
            direction,
            distance,
        }
    }

    /// Render as an input line whose literal and hex halves encode the same move.
    ///
    /// Distances above `MAX_HEX_DISTANCE` do not fit the payload and are
    /// truncated to their low five hex digits there.
    pub fn render(&self) -> String {
        format!(
            "{} {} (#{:05x}{})",
            self.direction.letter(),
            self.distance,
            self.distance & Self::MAX_HEX_DISTANCE,
            self.direction.code()
        )
    }
}

/// Which part of an input line describes the move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Literal direction letter and decimal distance.
    #[default]
    Primary,
    /// Six-digit hex payload: five distance digits, one direction code.
    Alternate,
}

impl DecodeMode {
    /// Puzzle part number used in reports (`1` or `2`).
    pub fn part(self) -> u8 {
        match self {
            DecodeMode::Primary => 1,
            DecodeMode::Alternate => 2,
        }
    }
}
