use perfkit_core::{Error, ParameterError, Size};
use perfkit_footprint::{
    Change, Component, Orientation, Point, Rect, Region, RegionRole, TerminalStrip,
};

/// Bounding box centers of every hole cut through `region`, sorted
fn hole_centers(region: &Region) -> Vec<[f64; 2]> {
    let mut centers: Vec<[f64; 2]> = region
        .outlines()
        .iter()
        .flat_map(|outline| outline.holes.iter())
        .map(|ring| {
            let (mut lo, mut hi) = ([f64::MAX; 2], [f64::MIN; 2]);
            for v in ring {
                lo = [lo[0].min(v[0]), lo[1].min(v[1])];
                hi = [hi[0].max(v[0]), hi[1].max(v[1])];
            }
            [(lo[0] + hi[0]) / 2.0, (lo[1] + hi[1]) / 2.0]
        })
        .collect();
    centers.sort_by(|a, b| a.partial_cmp(b).unwrap());
    centers
}

#[test]
fn test_ten_terminals_without_center_hole() {
    let strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    assert_eq!(strip.control_point_count(), 20);
    // No midpoint row: every point sits on one of the two terminal ends
    assert!(strip.control_points().iter().all(|p| p.x == 0 || p.x == 100));
}

#[test]
fn test_center_hole_adds_midpoints() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    let change = strip.update(|f| Ok(f.set_center_hole(true))).unwrap();
    assert_eq!(change, Change::Topology);
    assert_eq!(strip.control_point_count(), 30);
    for i in 0..10 {
        let a = strip.control_point(i).unwrap();
        let b = strip.control_point(i + 10).unwrap();
        let m = strip.control_point(i + 20).unwrap();
        assert_eq!(m.x, (a.x + b.x) / 2);
        assert_eq!(m.y, a.y);
    }

    strip.update(|f| Ok(f.set_center_hole(false))).unwrap();
    assert_eq!(strip.control_point_count(), 20);
}

#[test]
fn test_dragging_anchor_moves_whole_strip() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    strip.set_control_point(0, Point::new(40, 60)).unwrap();
    assert_eq!(strip.control_point(10), Some(Point::new(140, 60)));
    assert_eq!(strip.control_point(9), Some(Point::new(40, 510)));
}

#[test]
fn test_dragging_other_point_moves_only_that_point() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    let before = strip.control_points().to_vec();
    strip.set_control_point(12, Point::new(130, 100)).unwrap();

    for (i, (old, new)) in before.iter().zip(strip.control_points()).enumerate() {
        if i == 12 {
            assert_eq!(*new, Point::new(130, 100));
        } else {
            assert_eq!(old, new);
        }
    }

    // The stretched terminal now reaches the moved point
    let terminals = strip.body().get(1).unwrap().clone();
    assert!(terminals.contains(120.0, 100.0));
}

#[test]
fn test_out_of_range_control_point() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    let err = strip.set_control_point(20, Point::new(1, 1)).unwrap_err();
    assert!(err.is_parameter_error());
    assert!(strip.control_point(20).is_none());
}

#[test]
fn test_board_width_is_geometry_change() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    let points = strip.control_points().to_vec();
    let narrow = strip.body().region(RegionRole::Board).unwrap().area();

    let change = strip
        .update(|f| f.set_board_width(Size::inches(0.5)))
        .unwrap();
    assert_eq!(change, Change::Geometry);
    assert_eq!(strip.control_points(), points.as_slice());
    assert!(!strip.is_body_fresh());
    assert!(strip.body().region(RegionRole::Board).unwrap().area() > narrow);
}

#[test]
fn test_board_placement_per_orientation() {
    // Ten terminals 50 px apart, 100 px between rows, 70 px board width
    let cases = [
        (
            Orientation::Default,
            Rect::new(15.0, -70.0, 70.0, 590.0),
            [[50.0, -35.0], [50.0, 485.0]],
        ),
        (
            Orientation::Deg90,
            Rect::new(-520.0, 15.0, 590.0, 70.0),
            [[-485.0, 50.0], [35.0, 50.0]],
        ),
        (
            Orientation::Deg180,
            Rect::new(-85.0, -520.0, 70.0, 590.0),
            [[-50.0, -485.0], [-50.0, 35.0]],
        ),
        (
            Orientation::Deg270,
            Rect::new(-70.0, -85.0, 590.0, 70.0),
            [[-35.0, -50.0], [485.0, -50.0]],
        ),
    ];

    for (orientation, expected_board, expected_holes) in cases {
        let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
        strip
            .update(|f| Ok(f.set_orientation(orientation)))
            .unwrap();

        let board = strip.body().region(RegionRole::Board).unwrap().clone();
        let bounds = board.bounds().unwrap();
        assert!(
            bounds.approx_eq(&expected_board, 1e-6),
            "{:?}: board {:?}",
            orientation,
            bounds
        );

        let holes = hole_centers(&board);
        assert_eq!(holes.len(), 2, "{:?}", orientation);
        for (hole, expected) in holes.iter().zip(expected_holes) {
            assert!(
                (hole[0] - expected[0]).abs() < 1e-6 && (hole[1] - expected[1]).abs() < 1e-6,
                "{:?}: mounting hole {:?}, expected {:?}",
                orientation,
                hole,
                expected
            );
        }
    }
}

#[test]
fn test_oversized_spacing_is_rejected() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    let before = strip.control_points().to_vec();

    let err = strip
        .update(|f| f.set_terminal_spacing(Size::inches(1e7)))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Parameter(ParameterError::TooLarge { .. })
    ));
    assert_eq!(strip.control_points(), before.as_slice());

    // The largest accepted spacing still lays out 200 terminals
    strip
        .update(|f| f.set_terminal_spacing(Size::px(1_000_000.0)))
        .unwrap();
    strip.update(|f| f.set_terminal_count(200)).unwrap();
    assert_eq!(strip.control_point(199), Some(Point::new(0, 199_000_000)));
}
