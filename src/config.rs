//! Settings for an interactive simulation session.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the interactive shell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Most robots a session will place. Default: 3.
    pub max_robots: usize,
    /// Room `(width, height)` to use instead of prompting for one.
    pub default_room: Option<(i32, i32)>,
    /// Upper-case command input before it reaches the interpreter.
    pub case_insensitive_commands: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_robots: 3,
            default_room: None,
            case_insensitive_commands: true,
        }
    }
}

impl SimulationConfig {
    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), "loaded configuration");
        Self::from_json_str(&text)
    }
}
