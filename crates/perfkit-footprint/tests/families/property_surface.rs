use perfkit_core::{Error, ParameterError, Size};
use perfkit_footprint::{Change, FamilyKind, Footprint, Orientation, Point, PropertyValue};
use perfkit_settings::FootprintDefaults;

fn footprint(kind: FamilyKind) -> Footprint {
    Footprint::new(kind, Point::new(0, 0), &FootprintDefaults::default())
}

#[test]
fn test_every_listed_property_round_trips() {
    for kind in FamilyKind::ALL {
        let mut part = footprint(kind);
        for property in part.properties() {
            let text = property.value.to_string();
            part.set_property_str(&property.name, &text)
                .unwrap_or_else(|e| panic!("{} {} = {}: {}", kind, property.name, text, e));
        }
        assert_eq!(part.properties(), footprint(kind).properties());
    }
}

#[test]
fn test_unknown_property() {
    let mut part = footprint(FamilyKind::Turret);
    let err = part
        .set_property("pin_count", PropertyValue::Number(8.0))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Parameter(ParameterError::UnknownProperty(ref name)) if name == "pin_count"
    ));
}

#[test]
fn test_kind_mismatch() {
    let mut part = footprint(FamilyKind::TerminalStrip);
    let err = part
        .set_property("board_width", PropertyValue::Bool(true))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Parameter(ParameterError::TypeMismatch { expected: "size", .. })
    ));
}

#[test]
fn test_non_positive_size_rejected() {
    let mut part = footprint(FamilyKind::Dot);
    let before = part.properties();
    let err = part
        .set_property("size", PropertyValue::Size(Size::mm(-1.0)))
        .unwrap_err();
    assert!(err.is_parameter_error());
    assert_eq!(part.properties(), before);
}

#[test]
fn test_orientation_from_degrees() {
    let mut part = footprint(FamilyKind::TerminalStrip);
    let change = part
        .set_property("orientation", PropertyValue::Number(180.0))
        .unwrap();
    assert_eq!(change, Change::Topology);
    assert!(part
        .properties()
        .iter()
        .any(|p| p.value == PropertyValue::Orientation(Orientation::Deg180)));

    let err = part
        .set_property("orientation", PropertyValue::Number(45.0))
        .unwrap_err();
    assert!(err.is_configuration_defect());
}

#[test]
fn test_text_sizes_parse() {
    let mut part = footprint(FamilyKind::DipIc);
    part.set_property_str("pin_spacing", "2.54mm").unwrap();
    part.set_property_str("row_spacing", "6/10 in").unwrap();
    assert_eq!(part.control_point(4), Some(Point::new(120, 0)));
    assert!(part.set_property_str("row_spacing", "wide").is_err());
}
