use std::process::Command;

use shape_info::{print_shape_info, write_report, Circle, Rectangle, Shape};

const EXPECTED: &str = "Rectangle:\nArea: 15.00\nPerimeter: 16.00\n\nCircle:\nArea: 12.56\nPerimeter: 12.56\n";

#[test]
fn sample_report_matches_reference_output() {
    let rect = Rectangle::new(5.0, 3.0);
    let circle = Circle::new(2.0);
    let mut buf = Vec::new();
    write_report(&mut buf, &[&rect, &circle]).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), EXPECTED);
}

#[test]
fn circle_position_does_not_change_report() {
    let rect = Rectangle::new(5.0, 3.0);
    let moved = Circle::new(2.0).with_position(1_000);
    let mut buf = Vec::new();
    write_report(&mut buf, &[&rect, &moved]).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), EXPECTED);
}

#[test]
fn print_to_stdout_succeeds() {
    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Rectangle::new(5.0, 3.0)), Box::new(Circle::new(2.0))];
    for shape in &shapes {
        print_shape_info(shape.as_ref()).unwrap();
    }
}

#[test]
fn binary_prints_reference_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_shape_info"))
        .output()
        .expect("failed to run shape_info");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED);
    assert!(output.stderr.is_empty());
}
