use approx::assert_relative_eq;
use polygon_calc::InvalidInputReason;
use polygon_calc::core::{PolygonSpec, compute, compute_from_text, parse_polygon_input};

#[test]
fn square_scenario_matches_closed_form() {
    let metrics = compute(4, 5.0).expect("square");
    assert_eq!(metrics.perimeter, 20.0);
    assert_relative_eq!(metrics.area, 25.0, max_relative = 1e-9);
}

#[test]
fn equilateral_triangle_scenario_matches_closed_form() {
    let metrics = compute(3, 1.0).expect("triangle");
    assert_eq!(metrics.perimeter, 3.0);
    assert_relative_eq!(metrics.area, 3.0_f64.sqrt() / 4.0, max_relative = 1e-9);
}

#[test]
fn hexagon_scenario_matches_closed_form() {
    let metrics = compute(6, 2.0).expect("hexagon");
    assert_eq!(metrics.perimeter, 12.0);
    assert_relative_eq!(
        metrics.area,
        (3.0 * 3.0_f64.sqrt() / 2.0) * 4.0,
        max_relative = 1e-9
    );
}

#[test]
fn non_numeric_sides_are_rejected() {
    let err = compute_from_text("abc", "5").expect_err("sides is not a number");
    assert_eq!(err.input_reason(), Some(InvalidInputReason::NotANumber));
    assert_eq!(
        InvalidInputReason::NotANumber.user_message(),
        "Please enter valid numbers!"
    );
}

#[test]
fn negative_length_is_rejected() {
    let err = compute_from_text("5", "-3").expect_err("negative length");
    assert_eq!(err.input_reason(), Some(InvalidInputReason::NonPositiveLength));
    assert_eq!(
        InvalidInputReason::NonPositiveLength.user_message(),
        "Side length must be positive!"
    );
}

#[test]
fn triangle_is_the_smallest_valid_polygon() {
    assert!(compute(3, 1.0).is_ok());

    let err = compute(2, 1.0).expect_err("two sides");
    assert_eq!(err.input_reason(), Some(InvalidInputReason::TooFewSides));
    assert_eq!(format!("{err}"), "invalid input: too few sides");
}

#[test]
fn zero_and_negative_lengths_share_one_reason() {
    for length in [0.0, -0.0, -1.0, -1e-300] {
        let err = compute(5, length).expect_err("non-positive length");
        assert_eq!(err.input_reason(), Some(InvalidInputReason::NonPositiveLength));
    }
}

#[test]
fn empty_fields_are_not_numbers() {
    let err = parse_polygon_input("", "").expect_err("blank input");
    assert_eq!(err.input_reason(), Some(InvalidInputReason::NotANumber));
}

#[test]
fn scientific_notation_length_is_accepted() {
    let spec = parse_polygon_input("4", "2.5e1").expect("valid input");
    assert_eq!(spec.side_length(), 25.0);
}

#[test]
fn repeated_compute_is_bit_identical() {
    let first = compute(7, 3.3).expect("first");
    let second = compute(7, 3.3).expect("second");
    assert_eq!(first.area.to_bits(), second.area.to_bits());
    assert_eq!(first.perimeter.to_bits(), second.perimeter.to_bits());
}

#[test]
fn spec_exposes_validated_fields() {
    let spec = PolygonSpec::new(8, 1.5).expect("octagon");
    assert_eq!(spec.sides(), 8);
    assert_eq!(spec.side_length(), 1.5);
    assert_eq!(spec.metrics(), compute(8, 1.5).expect("octagon"));
}
