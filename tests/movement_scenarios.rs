// tests/movement_scenarios.rs
use glam::IVec2;
use gridbot::{
    CommandInterpreter, Direction, Position, Robot, RobotOp, RobotRegistry, Room,
    SimulationError,
};

fn setup() -> (CommandInterpreter, RobotRegistry) {
    let room = Room::new(5, 5).unwrap();
    (CommandInterpreter::standard(room), RobotRegistry::new())
}

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y).unwrap()
}

fn place(registry: &RobotRegistry, x: i32, y: i32, direction: Direction) -> Robot {
    let robot = registry.spawn(pos(x, y), direction);
    registry.save(&robot);
    robot
}

#[test]
fn test_turn_then_move() {
    let (interpreter, registry) = setup();
    let mut robot = place(&registry, 0, 0, Direction::North);

    interpreter
        .execute_commands(&mut robot, &registry, "RF")
        .unwrap();

    assert_eq!(robot.position(), pos(1, 0));
    assert_eq!(robot.direction(), Direction::East);
    // Registry sees the settled state.
    assert_eq!(registry.find_by_id(robot.id()), Some(robot));
}

#[test]
fn test_move_past_wall_is_rejected() {
    let (interpreter, registry) = setup();
    let mut robot = place(&registry, 4, 4, Direction::North);

    let err = interpreter
        .execute_commands(&mut robot, &registry, "F")
        .unwrap_err();

    assert!(matches!(
        err,
        SimulationError::OutOfBounds { target, .. } if target == IVec2::new(4, 5)
    ));
    assert_eq!(robot.position(), pos(4, 4));
}

#[test]
fn test_move_below_origin_is_out_of_bounds() {
    let (interpreter, registry) = setup();
    let mut robot = place(&registry, 0, 0, Direction::South);

    let err = interpreter
        .execute_commands(&mut robot, &registry, "F")
        .unwrap_err();

    assert!(matches!(
        err,
        SimulationError::OutOfBounds { target, .. } if target == IVec2::new(0, -1)
    ));
    assert_eq!(robot.position(), pos(0, 0));
}

#[test]
fn test_move_into_occupied_cell_collides() {
    let (interpreter, registry) = setup();
    let blocker = place(&registry, 2, 2, Direction::North);
    let _a = place(&registry, 2, 3, Direction::South);
    let mut b = place(&registry, 2, 1, Direction::North);

    let err = interpreter
        .execute_commands(&mut b, &registry, "F")
        .unwrap_err();

    match err {
        SimulationError::Collision {
            robot,
            target,
            occupant,
        } => {
            assert_eq!(robot, b.id());
            assert_eq!(target, pos(2, 2));
            assert_eq!(occupant, blocker.id());
        }
        other => panic!("expected collision, got {other:?}"),
    }
    assert_eq!(b.position(), pos(2, 1));
}

#[test]
fn test_robot_never_collides_with_its_own_stale_entry() {
    let (interpreter, registry) = setup();
    let mut robot = place(&registry, 1, 1, Direction::East);

    interpreter
        .execute_commands(&mut robot, &registry, "FLLF")
        .unwrap();

    assert_eq!(robot.position(), pos(1, 1));
    assert_eq!(robot.direction(), Direction::West);
}

#[test]
fn test_three_robots_in_sequence() {
    let (interpreter, registry) = setup();
    let mut a = place(&registry, 0, 0, Direction::North);
    let mut b = place(&registry, 2, 2, Direction::East);
    let mut c = place(&registry, 4, 0, Direction::West);

    interpreter.execute_commands(&mut a, &registry, "RF").unwrap();
    interpreter.execute_commands(&mut b, &registry, "LF").unwrap();
    interpreter.execute_commands(&mut c, &registry, "RF").unwrap();

    assert_eq!((a.position(), a.direction()), (pos(1, 0), Direction::East));
    assert_eq!((b.position(), b.direction()), (pos(2, 3), Direction::North));
    assert_eq!((c.position(), c.direction()), (pos(4, 1), Direction::North));
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_turn_table() {
    let (interpreter, registry) = setup();
    let cases = [
        (Direction::North, "R", Direction::East),
        (Direction::East, "R", Direction::South),
        (Direction::South, "R", Direction::West),
        (Direction::West, "R", Direction::North),
        (Direction::North, "L", Direction::West),
        (Direction::West, "L", Direction::South),
        (Direction::South, "L", Direction::East),
        (Direction::East, "L", Direction::North),
    ];

    for (initial, command, expected) in cases {
        let mut robot = place(&registry, 2, 2, initial);
        interpreter
            .execute_commands(&mut robot, &registry, command)
            .unwrap();
        assert_eq!(robot.direction(), expected, "{initial:?} + {command}");
        registry.delete(robot.id());
    }
}

#[test]
fn test_fail_fast_keeps_prior_work() {
    let (interpreter, registry) = setup();
    let mut robot = place(&registry, 3, 3, Direction::North);

    // F to (3,4), R, F to (4,4), F blocked by the east wall, trailing L never runs.
    let err = interpreter
        .execute_commands(&mut robot, &registry, "FRFFL")
        .unwrap_err();

    assert!(matches!(err, SimulationError::OutOfBounds { .. }));
    assert_eq!(robot.position(), pos(4, 4));
    assert_eq!(robot.direction(), Direction::East);
    assert_eq!(registry.find_by_id(robot.id()), Some(robot));
}

#[test]
fn test_unknown_command_stops_execution() {
    let (interpreter, registry) = setup();
    let mut robot = place(&registry, 0, 0, Direction::North);

    let err = interpreter
        .execute_commands(&mut robot, &registry, "FxF")
        .unwrap_err();

    assert!(matches!(err, SimulationError::UnknownCommand('x')));
    assert_eq!(robot.position(), pos(0, 1));
}

#[test]
fn test_lower_case_commands_are_not_canonical() {
    let (interpreter, registry) = setup();
    let mut robot = place(&registry, 0, 0, Direction::North);

    let err = interpreter
        .execute_commands(&mut robot, &registry, "f")
        .unwrap_err();

    assert!(matches!(err, SimulationError::UnknownCommand('f')));
    assert_eq!(robot.position(), pos(0, 0));
}

#[test]
fn test_custom_command_letters() {
    let (mut interpreter, registry) = setup();
    interpreter.set_op('M', RobotOp::MoveForward);
    let mut robot = place(&registry, 0, 0, Direction::North);

    interpreter
        .execute_commands(&mut robot, &registry, "MMF")
        .unwrap();
    assert_eq!(robot.position(), pos(0, 3));

    let bare = CommandInterpreter::new(Room::new(5, 5).unwrap());
    assert!(matches!(
        bare.op_for('F'),
        Err(SimulationError::UnknownCommand('F'))
    ));
}

#[test]
fn test_empty_command_string_is_a_no_op() {
    let (interpreter, registry) = setup();
    let mut robot = place(&registry, 2, 2, Direction::West);

    interpreter.execute_commands(&mut robot, &registry, "").unwrap();

    assert_eq!(robot.position(), pos(2, 2));
    assert_eq!(robot.direction(), Direction::West);
}

#[test]
fn test_direction_symbols() {
    assert_eq!(Direction::from_symbol('n').unwrap(), Direction::North);
    assert_eq!(Direction::from_symbol('W').unwrap(), Direction::West);
    assert!(matches!(
        Direction::from_symbol('x'),
        Err(SimulationError::InvalidDirectionSymbol('x'))
    ));
}

#[test]
fn test_invalid_construction() {
    assert!(matches!(
        Room::new(0, 5),
        Err(SimulationError::InvalidDimensions {
            width: 0,
            height: 5
        })
    ));
    assert!(Room::new(5, -1).is_err());
    assert!(matches!(
        Position::new(-1, 0),
        Err(SimulationError::InvalidPosition { x: -1, y: 0 })
    ));
}

#[test]
fn test_registry_operations() {
    let registry = RobotRegistry::new();
    assert!(registry.is_empty());

    let a = registry.spawn(pos(0, 0), Direction::North);
    let b = registry.spawn(pos(1, 1), Direction::South);
    assert_ne!(a.id(), b.id());
    // Spawning alone does not register.
    assert!(registry.find_by_id(a.id()).is_none());

    registry.save(&a);
    registry.save(&b);
    assert_eq!(registry.len(), 2);
    assert!(registry.is_occupied(pos(1, 1), None));
    assert!(!registry.is_occupied(pos(1, 1), Some(b.id())));

    let snapshot = registry.find_all();
    assert_eq!(registry.delete(a.id()), Some(a.clone()));
    assert_eq!(snapshot.len(), 2, "snapshot is unaffected by later deletes");
    assert_eq!(registry.find_by_id(a.id()), None);
    assert_eq!(registry.delete(a.id()), None);
}

#[test]
fn test_robot_display() {
    let registry = RobotRegistry::new();
    let robot = registry.spawn(pos(1, 0), Direction::East);
    assert_eq!(robot.to_string(), "Robot1 at (1, 0) facing E");
}

#[test]
fn test_replacing_the_command_table() {
    let room = Room::new(5, 5).unwrap();
    let interpreter = CommandInterpreter::new(room).with_map(
        [('<', RobotOp::TurnLeft), ('^', RobotOp::MoveForward)]
            .into_iter()
            .collect(),
    );
    let registry = RobotRegistry::new();
    let mut robot = place(&registry, 2, 2, Direction::North);

    interpreter
        .execute_commands(&mut robot, &registry, "<^")
        .unwrap();
    assert_eq!(robot.position(), pos(1, 2));

    let err = interpreter
        .execute_commands(&mut robot, &registry, "L")
        .unwrap_err();
    assert!(matches!(err, SimulationError::UnknownCommand('L')));
}

#[test]
fn test_execution_never_registers_a_deleted_robot() {
    let (interpreter, registry) = setup();
    let mut robot = place(&registry, 1, 1, Direction::North);
    let _other = place(&registry, 3, 3, Direction::North);
    registry.delete(robot.id());
    let before = registry.len();

    interpreter.execute_commands(&mut robot, &registry, "LF").unwrap();

    assert_eq!(registry.len(), before);
    assert_eq!(registry.find_by_id(robot.id()), None);
    assert_eq!(robot.position(), pos(0, 1));
}
