// tests/mission_scenarios.rs
use martian_robots::{
    Axis, Coordinate, Driver, DriverConfig, Instruction, InstructionTable, Orientation,
    ParseConfig, Position, Report, Scent, SimulationEngine, parse_boundary, parse_instructions,
    parse_position,
};

fn instructions(line: &str) -> Vec<Instruction> {
    parse_instructions(line, &InstructionTable::default(), &ParseConfig::default()).unwrap()
}

fn play(engine: &mut SimulationEngine, boundary: Coordinate, start: &str, line: &str) -> String {
    let start = parse_position(start).unwrap();
    engine.run(boundary, start, &instructions(line)).to_string()
}

#[test]
fn test_sample_mission() {
    let mut engine = SimulationEngine::new();
    let boundary = parse_boundary("5 3").unwrap();

    assert_eq!(play(&mut engine, boundary, "1 1 E", "RFRFRFRF"), "1 1 E");
    assert_eq!(play(&mut engine, boundary, "3 2 N", "FRRFLLFFRRFLL"), "3 3 N LOST");
    // Robot 3 walks along the top edge; the scent from robot 2 saves it.
    assert_eq!(play(&mut engine, boundary, "0 3 W", "LLFFFLFLFL"), "2 3 S");
    assert_eq!(play(&mut engine, boundary, "0 0 W", "LF"), "0 0 S LOST");

    assert!(engine.scents().contains(&Scent::new(Axis::Y, 4)));
    assert!(engine.scents().contains(&Scent::new(Axis::Y, -1)));
    assert_eq!(engine.scents().len(), 2);
}

#[test]
fn test_robot_order_matters() {
    let boundary = parse_boundary("5 3").unwrap();

    // Without robot 2 going first, robot 3 falls off the top.
    let mut fresh = SimulationEngine::new();
    assert_eq!(play(&mut fresh, boundary, "0 3 W", "LLFFFLFLFL"), "3 3 N LOST");
}

#[test]
fn test_scent_protects_same_offset_elsewhere_on_edge() {
    let mut engine = SimulationEngine::new();
    let boundary = parse_boundary("5 3").unwrap();

    assert_eq!(play(&mut engine, boundary, "5 0 E", "F"), "5 0 E LOST");
    // X = 6 is scented; a robot on another row is stopped at the same edge.
    assert_eq!(play(&mut engine, boundary, "4 2 E", "FFFL"), "5 2 N");
}

#[test]
fn test_instruction_cap() {
    let boundary = parse_boundary("5 3").unwrap();
    let start = parse_position("0 0 N").unwrap();

    // 100 right turns leave the robot facing north; the 50 moves after them never run.
    let program = format!("{}{}", "R".repeat(100), "F".repeat(50));
    let mut a = SimulationEngine::new();
    let mut b = SimulationEngine::new();
    let capped = a.run(boundary, start, &instructions(&program));
    let first_hundred = b.run(boundary, start, &instructions(&program[..100]));

    assert_eq!(capped, first_hundred);
    assert_eq!(capped, Report::Ok(start));
    assert!(a.scents().is_empty());
}

#[test]
fn test_ok_reports_stay_in_bounds_and_scents_only_grow() {
    let boundary = parse_boundary("4 4").unwrap();
    let mut engine = SimulationEngine::new();
    let mut last_len = 0;

    let programs = ["FFFFFF", "RFFFFFF", "LFF", "RRFFFFFF", "FRFLFRFLFRF", "LLLFFRFFRFF"];
    for (i, program) in programs.iter().enumerate() {
        for orientation in Orientation::ALL {
            let start = Position::new(
                Coordinate::new((i % 5) as i32, (i % 5) as i32).unwrap(),
                orientation,
            );
            let report = engine.run(boundary, start, &instructions(program));
            if let Report::Ok(pos) = report {
                assert!(pos.coordinate.within(boundary), "{pos} outside grid");
            }
            assert!(engine.scents().len() >= last_len);
            last_len = engine.scents().len();
        }
    }

    for scent in engine.scents().iter() {
        let limit = boundary.component(scent.axis);
        assert!(scent.offset < 0 || scent.offset > limit);
    }
}

#[test]
fn test_driver_sample_session() {
    let input = "5 3\n1 1 E\nRFRFRFRF\n\n3 2 N\nFRRFLLFFRRFLL\n\n0 3 W\nLLFFFLFLFL\n";
    let mut out = Vec::new();
    let summary = Driver::new(DriverConfig::default())
        .run(input.as_bytes(), &mut out)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "1 1 E\n3 3 N LOST\n2 3 S\n");
    assert_eq!(summary.robots, 3);
    assert_eq!(summary.lost, 1);
    assert_eq!(summary.scents, 1);
}

#[test]
fn test_driver_strict_mode_reports_bad_robot() {
    let config = DriverConfig {
        parse: ParseConfig { strict: true },
        ..Default::default()
    };
    let input = "5 3\n1 1 E\nRFXRFRFRF\n1 1 E\nRFRFRFRF\n";
    let mut out = Vec::new();
    let summary = Driver::new(config).run(input.as_bytes(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "error: invalid instruction found: X\n1 1 E\n");
    assert_eq!(summary.errors, 1);
}

#[test]
fn test_driver_rejects_oversized_grid() {
    let err = Driver::new(DriverConfig::default())
        .run("60 3\n1 1 E\nF\n".as_bytes(), Vec::new())
        .unwrap_err();
    assert!(err.to_string().contains("exceeds the boundary limit"));
}

#[test]
fn test_driver_keeps_robots_on_the_grid() {
    // A robot that only turns would otherwise report a position off the grid.
    let input = "5 3\n10 10 N\nL\n0 0 N\n\n5 3 E\nL\n";
    let mut out = Vec::new();
    let summary = Driver::new(DriverConfig::default())
        .run(input.as_bytes(), &mut out)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "error: start 10 10 lies outside the grid bounded by 5 3");
    assert_eq!(lines[1], "0 0 N");
    assert_eq!(lines[2], "5 3 N");
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.robots, 2);
}
