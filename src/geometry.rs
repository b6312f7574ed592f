//! Grid geometry: cells, headings and the room that bounds them.

use crate::error::{Result, SimulationError};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the grid. Both coordinates are non-negative.
///
/// Positions are values: a move produces a new `Position` rather than editing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IVec2", into = "IVec2")]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Creates a position, rejecting negative coordinates.
    pub fn new(x: i32, y: i32) -> Result<Self> {
        if x < 0 || y < 0 {
            tracing::error!(x, y, "invalid position coordinates");
            return Err(SimulationError::InvalidPosition { x, y });
        }
        tracing::trace!(x, y, "created position");
        Ok(Self { x, y })
    }

    /// Column, counted from the west wall.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row, counted from the south wall.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// The same cell as a `glam` vector.
    pub fn as_ivec2(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// The raw cell one `delta` away. May have negative coordinates.
    pub fn offset_cell(&self, delta: IVec2) -> IVec2 {
        IVec2::new(
            self.x.saturating_add(delta.x),
            self.y.saturating_add(delta.y),
        )
    }

    /// The position one `delta` away, or `None` if it would leave the non-negative quadrant.
    pub fn offset(&self, delta: IVec2) -> Option<Self> {
        let cell = self.offset_cell(delta);
        (cell.x >= 0 && cell.y >= 0).then_some(Self {
            x: cell.x,
            y: cell.y,
        })
    }
}

impl TryFrom<IVec2> for Position {
    type Error = SimulationError;

    fn try_from(v: IVec2) -> Result<Self> {
        Self::new(v.x, v.y)
    }
}

impl From<Position> for IVec2 {
    fn from(p: Position) -> Self {
        p.as_ivec2()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four compass headings.
///
/// Right turns cycle `North -> East -> South -> West -> North`; left turns run the other way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in right-turn order, starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Parses `N`, `E`, `S` or `W`, ignoring case.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        tracing::debug!(%symbol, "converting symbol to direction");
        match symbol.to_ascii_uppercase() {
            'N' => Ok(Self::North),
            'E' => Ok(Self::East),
            'S' => Ok(Self::South),
            'W' => Ok(Self::West),
            _ => {
                tracing::error!(%symbol, "invalid direction symbol");
                Err(SimulationError::InvalidDirectionSymbol(symbol))
            }
        }
    }

    /// The canonical upper-case symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Rotates 90 degrees counter-clockwise.
    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Rotates 90 degrees clockwise.
    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step for one forward move. North is `+Y`.
    pub fn displacement(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The rectangle every robot must stay inside: `x` in `[0, width)`, `y` in `[0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Room {
    width: i32,
    height: i32,
}

impl Room {
    /// Creates a room, rejecting a non-positive width or height.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            tracing::error!(width, height, "invalid room dimensions");
            return Err(SimulationError::InvalidDimensions { width, height });
        }
        tracing::debug!(width, height, "created room");
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `position` lies inside the room.
    pub fn is_within_bounds(&self, position: Position) -> bool {
        self.contains_cell(position.as_ivec2())
    }

    /// Bounds test on a raw cell, which may carry negative coordinates.
    pub fn contains_cell(&self, cell: IVec2) -> bool {
        let inside = cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height;
        tracing::trace!(x = cell.x, y = cell.y, inside, "bounds check");
        inside
    }
}

impl TryFrom<(i32, i32)> for Room {
    type Error = SimulationError;

    fn try_from((width, height): (i32, i32)) -> Result<Self> {
        Self::new(width, height)
    }
}

impl From<Room> for (i32, i32) {
    fn from(room: Room) -> Self {
        (room.width, room.height)
    }
}
