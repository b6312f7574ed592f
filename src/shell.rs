//! Line-oriented interactive session around the interpreter.
//!
//! The shell owns everything the core does not: prompting, parsing raw text, re-asking on
//! malformed input and turning errors into readable messages. It works on any
//! `BufRead`/`Write` pair so it can be driven from tests as well as a terminal.

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::geometry::{Direction, Position, Room};
use crate::interpreter::CommandInterpreter;
use crate::registry::RobotRegistry;
use crate::robot::Robot;
use std::io::{BufRead, Write};

const BANNER: &str = "\
=================================
Welcome to the grid robot simulator
=================================
- Create a room with custom dimensions
- Place robots in the room
- Drive them with L (left), R (right) and F (forward)
- Robots never leave the room or run into each other
=================================";

struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line. `None` means the input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Runs one full session and returns the robots left in the room, ordered by id.
///
/// Running out of input ends the session early without an error.
pub fn run_session(
    config: &SimulationConfig,
    input: impl BufRead,
    output: impl Write,
) -> Result<Vec<Robot>> {
    let mut io = Prompter { input, output };
    io.say(BANNER)?;

    let Some(room) = setup_room(config, &mut io)? else {
        return Ok(Vec::new());
    };
    let registry = RobotRegistry::new();
    let interpreter = CommandInterpreter::standard(room);

    if let Some(count) = ask_robot_count(config, &mut io)? {
        for number in 1..=count {
            io.say(format!("\nSetting up Robot{number} of {count}"))?;
            if !handle_robot(config, &interpreter, &registry, &mut io, number)? {
                break;
            }
        }
    }

    let mut robots: Vec<Robot> = registry.find_all().into_values().collect();
    robots.sort_by_key(Robot::id);
    io.say("\nSimulation ended")?;
    for robot in &robots {
        io.say(robot)?;
    }
    Ok(robots)
}

fn setup_room<R: BufRead, W: Write>(
    config: &SimulationConfig,
    io: &mut Prompter<R, W>,
) -> Result<Option<Room>> {
    if let Some((width, height)) = config.default_room {
        let room = Room::new(width, height)?;
        io.say(format!("Room created with dimensions: {width}x{height}"))?;
        return Ok(Some(room));
    }

    loop {
        let Some(line) = io.ask("\nEnter room dimensions (width height), e.g. '5 5':")? else {
            return Ok(None);
        };
        let dims = match line
            .split_whitespace()
            .map(str::parse::<i32>)
            .collect::<std::result::Result<Vec<_>, _>>()
        {
            Ok(dims) => dims,
            Err(_) => {
                io.say("Room dimensions must be two whole numbers")?;
                continue;
            }
        };
        let [width, height] = dims[..] else {
            io.say("Room dimensions must be two whole numbers")?;
            continue;
        };
        match Room::new(width, height) {
            Ok(room) => {
                io.say(format!("Room created with dimensions: {width}x{height}"))?;
                return Ok(Some(room));
            }
            Err(err) => io.say(err)?,
        }
    }
}

fn ask_robot_count<R: BufRead, W: Write>(
    config: &SimulationConfig,
    io: &mut Prompter<R, W>,
) -> Result<Option<usize>> {
    let max = config.max_robots.max(1);
    let prompt = format!("\nHow many robots would you like to add? (1-{max}):");
    loop {
        let Some(line) = io.ask(&prompt)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(Some(n)),
            Ok(_) => io.say(format!("Please enter a number between 1 and {max}"))?,
            Err(_) => io.say(format!("Please enter a valid number (1-{max})"))?,
        }
    }
}

/// Places one robot and runs its commands. Returns `false` once input is exhausted.
fn handle_robot<R: BufRead, W: Write>(
    config: &SimulationConfig,
    interpreter: &CommandInterpreter,
    registry: &RobotRegistry,
    io: &mut Prompter<R, W>,
    number: usize,
) -> Result<bool> {
    let Some((x, y, symbol)) = ask_placement(io, number)? else {
        return Ok(false);
    };

    let mut robot = match place_robot(interpreter.room(), registry, x, y, symbol) {
        Ok(robot) => robot,
        Err(err) => {
            tracing::debug!(number, %err, "robot setup failed");
            io.say(format!("\nInvalid input for Robot{number}: {err}"))?;
            return Ok(true);
        }
    };
    registry.save(&robot);

    let Some(commands) = ask_commands(config, io, number)? else {
        return Ok(false);
    };

    match interpreter.execute_commands(&mut robot, registry, &commands) {
        Ok(()) => {
            io.say("\nMovement completed successfully!")?;
            io.say(format!("Position of the robot: {robot}"))?;
        }
        Err(err) => {
            tracing::debug!(id = %robot.id(), %err, "movement stopped");
            io.say(format!("\nMovement stopped - robot is at safe position ({err})"))?;
            io.say(format!("Position of the robot: {robot}"))?;
        }
    }
    Ok(true)
}

/// Reads `x y D`, re-asking until the line has the right shape.
///
/// Only the first character of the direction word is used, so `2 3 north` works.
fn ask_placement<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    number: usize,
) -> Result<Option<(i32, i32, char)>> {
    let prompt = format!(
        "\nRobot{number} - enter position and direction as 'x y direction' (example: '2 3 N')"
    );
    loop {
        let Some(line) = io.ask(&prompt)? else {
            return Ok(None);
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        // Tokens from `split_whitespace` are never empty, so the direction has a first char.
        let [x, y, dir] = parts[..] else {
            io.say(format!("Robot{number} needs three values. Example: '2 3 N'"))?;
            continue;
        };
        let (Ok(x), Ok(y), Some(symbol)) =
            (x.parse::<i32>(), y.parse::<i32>(), dir.chars().next())
        else {
            io.say(format!("Robot{number} position needs numbers. Example: '2 3 N'"))?;
            continue;
        };
        return Ok(Some((x, y, symbol)));
    }
}

/// Validates a placement against the room and the robots already present, then spawns.
fn place_robot(
    room: Room,
    registry: &RobotRegistry,
    x: i32,
    y: i32,
    symbol: char,
) -> Result<Robot> {
    let direction = Direction::from_symbol(symbol)?;
    let position = Position::new(x, y)?;
    if !room.is_within_bounds(position) {
        return Err(SimulationError::OutsideRoom(position));
    }
    if let Some(occupant) = registry.occupant(position, None) {
        return Err(SimulationError::Occupied { position, occupant });
    }
    Ok(registry.spawn(position, direction))
}

fn ask_commands<R: BufRead, W: Write>(
    config: &SimulationConfig,
    io: &mut Prompter<R, W>,
    number: usize,
) -> Result<Option<String>> {
    let prompt = format!(
        "\nRobot{number} - enter movement commands (L turn left, R turn right, F move forward):"
    );
    loop {
        let Some(line) = io.ask(&prompt)? else {
            return Ok(None);
        };
        let commands = if config.case_insensitive_commands {
            line.to_ascii_uppercase()
        } else {
            line
        };
        tracing::debug!(number, %commands, "received commands");
        if !commands.is_empty() && commands.chars().all(|c| matches!(c, 'L' | 'R' | 'F')) {
            return Ok(Some(commands));
        }
        io.say(format!(
            "Invalid command for Robot{number}! Please use only L, R, or F (examples: 'LRF', 'FFRL')"
        ))?;
    }
}
