//! Error type shared by every layer of the simulator.

use crate::geometry::Position;
use crate::robot::RobotId;
use glam::IVec2;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Everything that can go wrong while building a world or driving a robot.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A room was requested with a non-positive side.
    #[error("invalid room dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    /// A position was requested with a negative coordinate.
    #[error("invalid position ({x}, {y}): coordinates cannot be negative")]
    InvalidPosition { x: i32, y: i32 },

    /// A direction symbol outside `N`, `E`, `S`, `W`.
    #[error("invalid direction symbol '{0}': valid directions are N, E, S, W")]
    InvalidDirectionSymbol(char),

    /// A forward move would leave the room.
    #[error("{robot} would move outside the room to ({}, {})", .target.x, .target.y)]
    OutOfBounds { robot: RobotId, target: IVec2 },

    /// A forward move would land on a cell held by another robot.
    #[error("{robot} would collide with {occupant} at {target}")]
    Collision {
        robot: RobotId,
        target: Position,
        occupant: RobotId,
    },

    /// A command character with no registered operation.
    #[error("unknown command '{0}'")]
    UnknownCommand(char),

    /// A robot was placed outside the room.
    #[error("position {0} is outside the room")]
    OutsideRoom(Position),

    /// A robot was placed on a cell another robot already holds.
    #[error("position {position} is already occupied by {occupant}")]
    Occupied {
        position: Position,
        occupant: RobotId,
    },

    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
