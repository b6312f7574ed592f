//! In-memory store of the robots currently in the room.

use crate::geometry::{Direction, Position};
use crate::robot::{Robot, RobotId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe map from [`RobotId`] to [`Robot`], plus the id counter for new robots.
///
/// Reads hand out clones, so a caller checking for collisions works on a consistent snapshot
/// even if another thread saves a robot in the meantime.
#[derive(Debug)]
pub struct RobotRegistry {
    robots: RwLock<HashMap<RobotId, Robot>>,
    next_id: AtomicU64,
}

impl Default for RobotRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RobotRegistry {
    pub fn new() -> Self {
        Self {
            robots: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Builds a robot with a fresh id. The robot is not registered until [`save`](Self::save).
    pub fn spawn(&self, position: Position, direction: Direction) -> Robot {
        let id = RobotId(self.next_id.fetch_add(1, Ordering::Relaxed));
        Robot::new(id, position, direction)
    }

    /// Inserts the robot, replacing any previous entry with the same id.
    pub fn save(&self, robot: &Robot) {
        tracing::debug!(id = %robot.id(), position = %robot.position(), "saving robot");
        self.write().insert(robot.id(), robot.clone());
    }

    /// Replaces the entry for an already registered robot.
    ///
    /// Returns `false`, leaving the registry untouched, when the id is not present.
    pub fn update(&self, robot: &Robot) -> bool {
        let mut robots = self.write();
        match robots.get_mut(&robot.id()) {
            Some(entry) => {
                tracing::debug!(id = %robot.id(), position = %robot.position(), "updating robot");
                *entry = robot.clone();
                true
            }
            None => {
                tracing::warn!(id = %robot.id(), "update for unregistered robot ignored");
                false
            }
        }
    }

    /// Looks up a copy of the robot registered under `id`.
    pub fn find_by_id(&self, id: RobotId) -> Option<Robot> {
        let robot = self.read().get(&id).cloned();
        tracing::debug!(%id, found = robot.is_some(), "looked up robot");
        robot
    }

    /// Point-in-time copy of every registered robot.
    pub fn find_all(&self) -> HashMap<RobotId, Robot> {
        let snapshot = self.read().clone();
        tracing::debug!(count = snapshot.len(), "retrieved all robots");
        snapshot
    }

    /// Removes and returns the robot registered under `id`.
    pub fn delete(&self, id: RobotId) -> Option<Robot> {
        tracing::debug!(%id, "deleting robot");
        self.write().remove(&id)
    }

    /// Number of registered robots.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no robot is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the id of a robot other than `except` standing on `position`, if any.
    pub fn occupant(&self, position: Position, except: Option<RobotId>) -> Option<RobotId> {
        self.read()
            .values()
            .find(|r| Some(r.id()) != except && r.position() == position)
            .map(Robot::id)
    }

    /// Whether a robot other than `except` stands on `position`.
    pub fn is_occupied(&self, position: Position, except: Option<RobotId>) -> bool {
        self.occupant(position, except).is_some()
    }

    // A panic while holding the lock cannot leave the map half-written, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<RobotId, Robot>> {
        self.robots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<RobotId, Robot>> {
        self.robots.write().unwrap_or_else(PoisonError::into_inner)
    }
}
