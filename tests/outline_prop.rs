use std::f64::consts::TAU;

use bubbler::{ArrowDirection, BubbleConfig, KeyPoints, Point, Size, bubble_path, fillet_corner, key_points};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = ArrowDirection> {
    prop::sample::select(ArrowDirection::ALL.to_vec())
}

/// True when no two fillets reach past each other on a shared edge.
fn fillets_fit(points: &KeyPoints, config: &BubbleConfig) -> bool {
    let reach = |i: usize| {
        let corner = points[i];
        let fillet = fillet_corner(
            points[KeyPoints::prev(i)],
            corner,
            points[KeyPoints::next(i)],
            config.radius_at(i),
        );
        (
            corner.distance(fillet.tangent_in()),
            corner.distance(fillet.tangent_out()),
        )
    };
    (0..7).all(|i| {
        let j = KeyPoints::next(i);
        reach(i).1 + reach(j).0 <= points[i].distance(points[j])
    })
}

fn shoelace(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}

proptest! {
    #[test]
    fn roomy_bubbles_turn_once_clockwise(
        width in 80.0f64..400.0,
        height in 80.0f64..400.0,
        corner_radius in 0.0f64..10.0,
        arrow_radius in 0.0f64..3.0,
        arrow_height in 4.0f64..20.0,
        arrow_width in 8.0f64..20.0,
        position in 0.1f64..0.9,
        dir in direction(),
    ) {
        let size = Size::new(width, height);
        let config = BubbleConfig::new()
            .with_corner_radius(corner_radius)
            .with_arrow_radius(arrow_radius)
            .with_arrow_height(arrow_height)
            .with_arrow_width(arrow_width)
            .with_arrow_direction(dir)
            .with_arrow_position(position);

        let points = key_points(size, &config).unwrap();
        prop_assume!(fillets_fit(&points, &config));
        prop_assert!(points.is_clockwise());

        let path = bubble_path(size, &config).unwrap();
        prop_assert!(path.is_closed());
        prop_assert!((path.total_turning() - TAU).abs() < 1e-6);

        let flat = path.flatten(0.05);
        prop_assert!(shoelace(&flat) > 0.0);

        let (min, max) = path.bounds().unwrap();
        prop_assert!(min.x >= -1e-9 && min.y >= -1e-9);
        prop_assert!(max.x <= width + 1e-9 && max.y <= height + 1e-9);
    }

    #[test]
    fn arrow_tip_sits_on_the_outer_edge(
        width in 60.0f64..300.0,
        height in 60.0f64..300.0,
        position in 0.0f64..=1.0,
        dir in direction(),
    ) {
        let size = Size::new(width, height);
        let config = BubbleConfig::new()
            .with_arrow_direction(dir)
            .with_arrow_position(position);
        let points = key_points(size, &config).unwrap();
        let tip = points.arrow_tip();
        let on_edge = match dir {
            ArrowDirection::Right => tip.x == width,
            ArrowDirection::Bottom => tip.y == height,
            ArrowDirection::Left => tip.x == 0.0,
            ArrowDirection::Top => tip.y == 0.0,
        };
        prop_assert!(on_edge);

        // Base points lie one arrow height inside, one arrow width apart.
        let base = points.arrow_begin() - points.arrow_end();
        prop_assert!((base.length() - config.arrow_width).abs() < 1e-9);
        let depth = if dir.is_vertical_edge() {
            (tip.x - points.arrow_begin().x).abs()
        } else {
            (tip.y - points.arrow_begin().y).abs()
        };
        prop_assert!((depth - config.arrow_height).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_positions_clamp(
        position in prop_oneof![-5.0f64..0.0, 1.0f64..5.0],
        dir in direction(),
    ) {
        let size = Size::new(120.0, 90.0);
        let config = BubbleConfig::new().with_arrow_direction(dir);
        let clamped = key_points(size, &config.with_arrow_position(position)).unwrap();
        let expected = key_points(size, &config.with_arrow_position(position.clamp(0.0, 1.0))).unwrap();
        prop_assert_eq!(clamped, expected);
    }
}
