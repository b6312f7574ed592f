//! Robot state and the operations a command letter can map to.

use crate::geometry::{Direction, Position};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a robot, handed out by [`RobotRegistry::spawn`](crate::RobotRegistry::spawn).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RobotId(pub u64);

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Robot{}", self.0)
    }
}

/// A robot on the grid.
///
/// `Robot` only holds state. It never checks whether a move is legal; that policy belongs to
/// [`CommandInterpreter`](crate::CommandInterpreter).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    id: RobotId,
    position: Position,
    direction: Direction,
}

impl Robot {
    /// Places a robot. The caller has already checked the cell against the room and registry.
    pub fn new(id: RobotId, position: Position, direction: Direction) -> Self {
        tracing::debug!(%id, %position, %direction, "created robot");
        Self {
            id,
            position,
            direction,
        }
    }

    /// Identity assigned at spawn time.
    pub fn id(&self) -> RobotId {
        self.id
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The raw cell directly ahead. Can be negative at the room's lower edges.
    pub fn next_cell(&self) -> IVec2 {
        self.position.offset_cell(self.direction.displacement())
    }

    /// The position one step ahead, without moving.
    ///
    /// Returns `None` when the step would produce a negative coordinate.
    pub fn calculate_next_position(&self) -> Option<Position> {
        let next = self.position.offset(self.direction.displacement());
        tracing::trace!(id = %self.id, ?next, "calculated next position");
        next
    }

    /// Rotates in place, 90 degrees counter-clockwise.
    pub fn turn_left(&mut self) {
        let old = self.direction;
        self.direction = old.turn_left();
        tracing::debug!(id = %self.id, from = %old, to = %self.direction, "turned left");
    }

    /// Rotates in place, 90 degrees clockwise.
    pub fn turn_right(&mut self) {
        let old = self.direction;
        self.direction = old.turn_right();
        tracing::debug!(id = %self.id, from = %old, to = %self.direction, "turned right");
    }

    /// Steps forward with no bounds or collision check.
    ///
    /// A step into a negative coordinate has no `Position` to land on, so the robot stays put
    /// and `None` is returned.
    pub fn move_forward(&mut self) -> Option<Position> {
        let next = self.calculate_next_position()?;
        let old = std::mem::replace(&mut self.position, next);
        tracing::debug!(id = %self.id, from = %old, to = %next, "moved forward");
        Some(next)
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} facing {}",
            self.id, self.position, self.direction
        )
    }
}

/// Operations that a command letter can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RobotOp {
    /// Rotate 90 degrees counter-clockwise (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise (`R`).
    TurnRight,
    /// Advance one cell after bounds and collision checks (`F`).
    MoveForward,
}
