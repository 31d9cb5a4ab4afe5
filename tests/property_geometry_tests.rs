use std::f64::consts::PI;

use polygon_calc::core::{Point2D, compute, generate_vertices};
use proptest::prelude::*;

proptest! {
    #[test]
    fn perimeter_is_sides_times_length(
        sides in 3i32..10_000,
        length in 1e-6f64..1e6
    ) {
        let metrics = compute(sides, length).expect("valid input");
        prop_assert_eq!(metrics.perimeter, f64::from(sides) * length);
    }

    #[test]
    fn area_is_positive_and_matches_closed_form(
        sides in 3i32..10_000,
        length in 1e-6f64..1e6
    ) {
        let metrics = compute(sides, length).expect("valid input");
        let n = f64::from(sides);
        let expected = n * length * length / (4.0 * (PI / n).tan());

        prop_assert!(metrics.area > 0.0);
        prop_assert!(((metrics.area - expected) / expected).abs() <= 1e-9);
    }

    #[test]
    fn compute_is_deterministic(
        sides in 3i32..1_000,
        length in 1e-3f64..1e3
    ) {
        let first = compute(sides, length).expect("first");
        let second = compute(sides, length).expect("second");
        prop_assert_eq!(first.area.to_bits(), second.area.to_bits());
        prop_assert_eq!(first.perimeter.to_bits(), second.perimeter.to_bits());
    }

    #[test]
    fn vertices_lie_on_circumcircle(
        sides in 3u32..512,
        center_x in -1_000.0f64..1_000.0,
        center_y in -1_000.0f64..1_000.0,
        radius in 0.0f64..1_000.0
    ) {
        let center = Point2D::new(center_x, center_y);
        let vertices = generate_vertices(sides, center, radius);

        prop_assert_eq!(vertices.len(), sides as usize);
        for vertex in &vertices {
            prop_assert!((vertex.distance_to(center) - radius).abs() <= 1e-9 * radius.max(1.0));
        }
    }
}
