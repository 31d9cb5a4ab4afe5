use polygon_calc::api::{CalculatorConfig, PolygonCalculator};
use polygon_calc::core::Viewport;
use polygon_calc::render::NullRenderer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn render_frame_build_is_deterministic_and_valid(
        sides in 3u32..256,
        length in 1e-3f64..1e3,
        width in 80u32..2048,
        height in 80u32..2048,
        show_spokes in any::<bool>()
    ) {
        let config = CalculatorConfig::new(Viewport::new(width, height)).with_spokes(show_spokes);
        let mut calculator =
            PolygonCalculator::new(NullRenderer::default(), config).expect("calculator init");
        calculator
            .calculate_from(sides.to_string(), length.to_string())
            .expect("valid input");

        let first = calculator.build_render_frame().expect("first frame");
        let second = calculator.build_render_frame().expect("second frame");
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(first.polygons[0].vertices.len(), sides as usize);
        prop_assert_eq!(first.dots.len(), sides as usize + 1);
        prop_assert_eq!(first.lines.len(), if show_spokes { sides as usize } else { 0 });

        let (w, h) = (f64::from(width), f64::from(height));
        prop_assert!(first.polygons[0].vertices.iter().all(|vertex|
            vertex.x >= 0.0 && vertex.x <= w && vertex.y >= 0.0 && vertex.y <= h
        ));
    }
}
