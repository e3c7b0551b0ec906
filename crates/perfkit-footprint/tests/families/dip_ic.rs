use perfkit_core::{to_device_units, SizeUnit};
use perfkit_footprint::{Component, DipIc, Orientation, Point, Rect, RegionRole};

#[test]
fn test_eight_pin_dip_scenario() {
    let mut ic = Component::new(DipIc::default(), Point::new(100, 100));
    assert_eq!(ic.control_point_count(), 8);

    let row_spacing = to_device_units(0.3, SizeUnit::In) as i32;
    for i in 0..4 {
        let a = ic.control_point(i).unwrap();
        let b = ic.control_point(i + 4).unwrap();
        assert_eq!(b.x - a.x, row_spacing);
        assert_eq!(b.y, a.y);
    }

    let body = ic.body();
    assert_eq!(
        body.roles(),
        vec![RegionRole::Outline, RegionRole::Notch, RegionRole::Pins]
    );
    let outline = body.region(RegionRole::Outline).unwrap().bounds().unwrap();
    // rowSpacing - pinSize wide, 4 x pinSpacing tall
    assert!((outline.width - 52.0).abs() < 1e-6);
    assert!((outline.height - 80.0).abs() < 1e-6);
}

#[test]
fn test_outline_rotates_with_orientation() {
    let mut ic = Component::new(DipIc::default(), Point::new(0, 0));
    ic.update(|f| Ok(f.set_orientation(Orientation::Deg90)))
        .unwrap();

    // Rows run left and the second row sits below the first
    assert_eq!(ic.control_point(1), Some(Point::new(-20, 0)));
    assert_eq!(ic.control_point(4), Some(Point::new(0, 60)));

    let outline = ic.body().get(0).unwrap().bounds().unwrap();
    assert!(outline.approx_eq(&Rect::new(-70.0, 4.0, 80.0, 52.0), 1e-6));
}

#[test]
fn test_every_orientation_keeps_pins_inside_outline() {
    for orientation in Orientation::ALL {
        let mut ic = Component::new(DipIc::default(), Point::new(500, 500));
        ic.update(|f| Ok(f.set_orientation(orientation))).unwrap();
        let points = ic.control_points().to_vec();
        let body = ic.body();
        // Pins sit exactly half a pin size outside the outline edge
        let outline = body.get(0).unwrap().bounds().unwrap().inflate(4.0 + 1e-6);
        for p in points {
            assert!(
                outline.contains(p.x as f64, p.y as f64),
                "{:?} pin {:?} outside {:?}",
                orientation,
                p,
                outline
            );
        }
    }
}

#[test]
fn test_outline_and_notch_per_orientation() {
    // 8 pins: 20 px pitch, 60 px between rows, 8 px pins, 15 px notch
    let cases = [
        (
            Orientation::Default,
            Rect::new(4.0, -10.0, 52.0, 80.0),
            Rect::new(22.5, -10.0, 15.0, 7.5),
        ),
        (
            Orientation::Deg90,
            Rect::new(-70.0, 4.0, 80.0, 52.0),
            Rect::new(2.5, 22.5, 7.5, 15.0),
        ),
        (
            Orientation::Deg180,
            Rect::new(-56.0, -70.0, 52.0, 80.0),
            Rect::new(-37.5, 2.5, 15.0, 7.5),
        ),
        (
            Orientation::Deg270,
            Rect::new(-10.0, -56.0, 80.0, 52.0),
            Rect::new(-10.0, -37.5, 7.5, 15.0),
        ),
    ];

    for (orientation, expected_outline, expected_notch) in cases {
        let mut ic = Component::new(DipIc::default(), Point::new(0, 0));
        ic.update(|f| Ok(f.set_orientation(orientation))).unwrap();
        let body = ic.body();

        let outline = body.region(RegionRole::Outline).unwrap().bounds().unwrap();
        assert!(
            outline.approx_eq(&expected_outline, 1e-6),
            "{:?}: outline {:?}",
            orientation,
            outline
        );

        let notch = body.region(RegionRole::Notch).unwrap().bounds().unwrap();
        assert!(
            notch.approx_eq(&expected_notch, 1e-6),
            "{:?}: notch {:?}",
            orientation,
            notch
        );
    }
}
