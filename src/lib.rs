//! # gridbot
//!
//! A deterministic grid-world robot simulator.
//!
//! A [`Room`] bounds the grid, a [`RobotRegistry`] tracks which robots are present and
//! where, and a [`CommandInterpreter`] drives one robot at a time through a string of
//! `L`/`R`/`F` commands. Every forward move is checked against the room and the other
//! robots before it is applied; the first failing command stops the string.
//!
//! ```
//! use gridbot::{CommandInterpreter, Direction, Position, RobotRegistry, Room};
//!
//! let room = Room::new(5, 5)?;
//! let registry = RobotRegistry::new();
//! let mut robot = registry.spawn(Position::new(0, 0)?, Direction::North);
//! registry.save(&robot);
//!
//! CommandInterpreter::standard(room).execute_commands(&mut robot, &registry, "RF")?;
//! assert_eq!(robot.position(), Position::new(1, 0)?);
//! assert_eq!(robot.direction(), Direction::East);
//! # Ok::<(), gridbot::SimulationError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod interpreter;
pub mod registry;
pub mod robot;
pub mod shell;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use interpreter::*;
pub use registry::*;
pub use robot::*;
pub use shell::run_session;
