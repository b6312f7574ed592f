//! Interpreter that drives one robot through a command string.
//!
//! The entry point is [`CommandInterpreter`]. Build it for a [`Room`], register
//! letter-to-operation mappings via [`CommandInterpreter::set_op`] or
//! [`CommandInterpreter::populate_standard_commands`], then call
//! [`CommandInterpreter::execute_commands`] once per robot.

use crate::error::{Result, SimulationError};
use crate::geometry::Room;
use crate::registry::RobotRegistry;
use crate::robot::{Robot, RobotOp};
use std::collections::HashMap;

/// Executes command strings against robots in a fixed room.
#[derive(Clone, Debug)]
pub struct CommandInterpreter {
    op_map: HashMap<char, RobotOp>,
    room: Room,
}

impl CommandInterpreter {
    /// Creates an interpreter with an empty command table.
    ///
    /// Register operations with [`set_op`](Self::set_op) or
    /// [`populate_standard_commands`](Self::populate_standard_commands) before running commands.
    pub fn new(room: Room) -> Self {
        tracing::info!(
            width = room.width(),
            height = room.height(),
            "interpreter initialized"
        );
        Self {
            op_map: HashMap::new(),
            room,
        }
    }

    /// Creates an interpreter that understands `L`, `R` and `F`.
    pub fn standard(room: Room) -> Self {
        let mut interpreter = Self::new(room);
        interpreter.populate_standard_commands();
        interpreter
    }

    /// Replaces the whole command table in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, RobotOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Binds `symbol` to `op`, replacing any earlier binding.
    pub fn set_op(&mut self, symbol: char, op: RobotOp) {
        tracing::info!(%symbol, ?op, "command registered");
        self.op_map.insert(symbol, op);
    }

    /// Registers `L` (turn left), `R` (turn right) and `F` (move forward).
    pub fn populate_standard_commands(&mut self) {
        let mappings = [
            ('L', RobotOp::TurnLeft),
            ('R', RobotOp::TurnRight),
            ('F', RobotOp::MoveForward),
        ];
        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// The room every move is checked against.
    pub fn room(&self) -> Room {
        self.room
    }

    /// Looks up the operation bound to `symbol`.
    pub fn op_for(&self, symbol: char) -> Result<RobotOp> {
        match self.op_map.get(&symbol) {
            Some(op) => {
                tracing::trace!(%symbol, ?op, "command resolved");
                Ok(*op)
            }
            None => {
                tracing::error!(%symbol, "unknown command");
                Err(SimulationError::UnknownCommand(symbol))
            }
        }
    }

    /// Runs `commands` against `robot`, one letter at a time, stopping at the first failure.
    ///
    /// `robot` must already be registered. Turns always succeed. A forward move is checked
    /// first against the room, then against every *other* robot in `registry`; a move that
    /// fails either check is not applied and nothing after it runs.
    ///
    /// Work done before a failure is kept: the robot may end up facing a new way while still
    /// standing on the last safe cell. Whatever the outcome, the robot's entry in `registry` is
    /// updated so the next robot sees it; a robot that is not registered is never added.
    pub fn execute_commands(
        &self,
        robot: &mut Robot,
        registry: &RobotRegistry,
        commands: &str,
    ) -> Result<()> {
        tracing::debug!(id = %robot.id(), commands, position = %robot.position(), "executing commands");
        let outcome = commands
            .chars()
            .try_for_each(|symbol| self.apply(self.op_for(symbol)?, robot, registry));
        registry.update(robot);
        match &outcome {
            Ok(()) => tracing::debug!(robot = %robot, "commands completed"),
            Err(err) => tracing::debug!(robot = %robot, %err, "commands aborted"),
        }
        outcome
    }

    /// Applies a single operation, validating moves before committing them.
    pub fn apply(&self, op: RobotOp, robot: &mut Robot, registry: &RobotRegistry) -> Result<()> {
        match op {
            RobotOp::TurnLeft => robot.turn_left(),
            RobotOp::TurnRight => robot.turn_right(),
            RobotOp::MoveForward => {
                let target = robot.next_cell();
                let next = robot
                    .calculate_next_position()
                    .filter(|p| self.room.is_within_bounds(*p))
                    .ok_or_else(|| {
                        tracing::warn!(id = %robot.id(), x = target.x, y = target.y, "move blocked by room bounds");
                        SimulationError::OutOfBounds {
                            robot: robot.id(),
                            target,
                        }
                    })?;

                if let Some(occupant) = registry.occupant(next, Some(robot.id())) {
                    tracing::warn!(id = %robot.id(), %occupant, position = %next, "collision detected");
                    return Err(SimulationError::Collision {
                        robot: robot.id(),
                        target: next,
                        occupant,
                    });
                }

                let moved = robot.move_forward();
                debug_assert_eq!(moved, Some(next));
            }
        }
        Ok(())
    }
}
