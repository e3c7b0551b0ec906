use perfkit_core::Size;
use perfkit_footprint::{Component, DipIc, Family, Orientation, Point, TerminalStrip};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

fn step(a: Point, b: Point) -> i32 {
    (b.x - a.x).abs() + (b.y - a.y).abs()
}

proptest! {
    #[test]
    fn terminal_spacing_is_exact(
        orientation in orientation(),
        count in 1usize..40,
        spacing_mm in 2.0f64..12.0,
        x in -1000i32..1000,
        y in -1000i32..1000,
    ) {
        let mut strip = TerminalStrip::default();
        strip.set_orientation(orientation);
        strip.set_terminal_count(count).unwrap();
        strip.set_terminal_spacing(Size::mm(spacing_mm)).unwrap();
        let spacing = Size::mm(spacing_mm).to_device_px();

        let points = strip.regenerate_control_points(Point::new(x, y));
        prop_assert_eq!(points.len(), count * 2);
        prop_assert_eq!(points[0], Point::new(x, y));
        for row in 0..2 {
            for i in 1..count {
                let a = points[row * count + i - 1];
                let b = points[row * count + i];
                prop_assert_eq!(step(a, b), spacing);
            }
        }
    }

    #[test]
    fn dip_rows_are_exact(
        orientation in orientation(),
        half in 2usize..25,
    ) {
        let mut ic = DipIc::default();
        ic.set_orientation(orientation);
        ic.set_pin_count(half * 2).unwrap();

        let points = ic.regenerate_control_points(Point::new(0, 0));
        for i in 0..half {
            prop_assert_eq!(step(points[i], points[i + half]), 60);
            if i > 0 {
                prop_assert_eq!(step(points[i - 1], points[i]), 20);
            }
        }
    }

    #[test]
    fn regenerate_is_idempotent(
        orientation in orientation(),
        count in 1usize..30,
        center_hole in any::<bool>(),
    ) {
        let mut strip = TerminalStrip::default();
        strip.set_orientation(orientation);
        strip.set_terminal_count(count).unwrap();
        strip.set_center_hole(center_hole);

        let first = strip.regenerate_control_points(Point::new(7, 9));
        let again = strip.regenerate_control_points(first[0]);
        prop_assert_eq!(first, again);
    }
}

#[test]
fn test_metric_and_imperial_pitch_agree() {
    let mut strip = TerminalStrip::default();
    strip.set_terminal_spacing(Size::mm(2.54)).unwrap();
    let metric = strip.regenerate_control_points(Point::default());
    strip.set_terminal_spacing(Size::inches(0.1)).unwrap();
    let imperial = strip.regenerate_control_points(Point::default());
    assert_eq!(metric, imperial);
    assert_eq!(metric[1].y - metric[0].y, 20);
}

#[test]
fn test_unchanged_topology_keeps_points() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(3, 4));
    let before = strip.control_points().to_vec();
    strip.update(|f| Ok(f.set_orientation(Orientation::Default))).unwrap();
    assert_eq!(strip.control_points(), before.as_slice());
}
