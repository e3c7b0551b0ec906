use std::sync::Arc;

use perfkit_core::{Color, Size};
use perfkit_footprint::{
    Change, Component, DipIc, Orientation, Point, PropertyValue, TerminalStrip,
};

#[test]
fn test_repeated_reads_return_same_body() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    assert!(!strip.is_body_fresh());

    let first = strip.body();
    let second = strip.body();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(strip.body_generation(), 1);
}

#[test]
fn test_topology_change_resynthesizes() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    let before = strip.body();

    strip.update(|f| f.set_terminal_count(6)).unwrap();
    assert!(!strip.is_body_fresh());

    let after = strip.body();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(strip.body_generation(), 2);
    assert_eq!(after.get(1).unwrap().outlines().len(), 6);
}

#[test]
fn test_every_size_setter_invalidates() {
    let mut ic = Component::new(DipIc::default(), Point::new(0, 0));
    let edits: Vec<(&str, PropertyValue)> = vec![
        ("pin_spacing", PropertyValue::Size(Size::mm(2.0))),
        ("row_spacing", PropertyValue::Size(Size::inches(0.6))),
        ("pin_count", PropertyValue::Number(16.0)),
        ("orientation", PropertyValue::Orientation(Orientation::Deg180)),
    ];

    for (name, value) in edits {
        ic.body();
        let generation = ic.body_generation();
        let change = ic.set_property(name, value).unwrap();
        assert!(change > Change::Style, "{} reported {:?}", name, change);
        assert!(!ic.is_body_fresh(), "{} left body fresh", name);
        ic.body();
        assert_eq!(ic.body_generation(), generation + 1);
    }
}

#[test]
fn test_color_setters_keep_body_fresh() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    let body = strip.body();

    for name in ["board_color", "border_color", "terminal_color"] {
        let change = strip
            .set_property(name, PropertyValue::Color(Color::RED))
            .unwrap();
        assert_eq!(change, Change::Style);
        assert!(strip.is_body_fresh());
    }
    assert!(Arc::ptr_eq(&body, &strip.body()));
    assert_eq!(strip.family().board_color(), Color::RED);
    assert_eq!(strip.body_generation(), 1);
}

#[test]
fn test_rejected_edit_keeps_body_fresh() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    strip.body();
    assert!(strip.update(|f| f.set_terminal_count(0)).is_err());
    assert!(strip.is_body_fresh());
    assert_eq!(strip.control_point_count(), 20);
}

#[test]
fn test_control_point_move_invalidates() {
    let mut ic = Component::new(DipIc::default(), Point::new(0, 0));
    ic.body();
    ic.set_control_point(3, Point::new(5, 65)).unwrap();
    assert!(!ic.is_body_fresh());
}

#[test]
fn test_clone_starts_stale() {
    let mut strip = Component::new(TerminalStrip::default(), Point::new(0, 0));
    let original = strip.body();
    let mut copy = strip.clone();
    assert!(!copy.is_body_fresh());
    assert!(!Arc::ptr_eq(&original, &copy.body()));
}
