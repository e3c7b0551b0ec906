use perfkit_footprint::{
    Body, Component, Family, Leaded, LeadedStyle, PerfBoard, Point, Region, TerminalStrip,
};
use perfkit_settings::LeadedDefaults;

fn assert_same_region(a: &Region, b: &Region) {
    assert!((a.area() - b.area()).abs() < 1e-3, "{} vs {}", a.area(), b.area());
    match (a.bounds(), b.bounds()) {
        (Some(x), Some(y)) => assert!(x.approx_eq(&y, 1e-6), "{:?} vs {:?}", x, y),
        (x, y) => assert_eq!(x.is_none(), y.is_none()),
    }
}

fn assert_same_body(a: &Body, b: &Body) {
    assert_eq!(a.roles(), b.roles());
    for (i, (_, region)) in a.iter().enumerate() {
        assert_same_region(region, b.get(i).unwrap());
    }
}

#[test]
fn test_terminal_pair_order_does_not_matter() {
    let strip = TerminalStrip::default();
    let points = strip.regenerate_control_points(Point::new(0, 0));
    let mut swapped = points.clone();
    for i in 0..strip.terminal_count() {
        swapped.swap(i, i + strip.terminal_count());
    }

    // Board placement follows point 0, so compare the terminal region only
    let a = strip.synthesize_body(&points);
    let b = strip.synthesize_body(&swapped);
    assert_same_region(a.get(1).unwrap(), b.get(1).unwrap());
}

#[test]
fn test_perf_board_corner_order_does_not_matter() {
    let board = PerfBoard::default();
    let a = board.synthesize_body(&[Point::new(10, 20), Point::new(210, 120)]);
    let b = board.synthesize_body(&[Point::new(210, 120), Point::new(10, 20)]);
    let c = board.synthesize_body(&[Point::new(210, 20), Point::new(10, 120)]);
    assert_same_body(&a, &b);
    assert_same_body(&a, &c);

    let mut component = Component::new(PerfBoard::default(), Point::new(0, 0));
    let grid = component.pad_grid();
    let far = component.control_point(1).unwrap();
    component.set_control_point(1, Point::new(0, 0)).unwrap();
    component.set_control_point(0, far).unwrap();
    assert_eq!(component.pad_grid(), grid);
}

#[test]
fn test_lead_end_order_does_not_matter() {
    let ends = [Point::new(20, 30), Point::new(170, 110)];
    for style in [
        LeadedStyle::AxialFilm,
        LeadedStyle::RadialFilm,
        LeadedStyle::CeramicDisk,
        LeadedStyle::CapacitorSymbol,
    ] {
        let part = Leaded::new(style, &LeadedDefaults::default());
        let a = part.synthesize_body(&ends);
        let b = part.synthesize_body(&[ends[1], ends[0]]);
        assert_same_body(&a, &b);
    }
}
