//! Dual in-line IC package
//!
//! Pins `0..n/2` run down the first row and pins `n/2..n` face them in the
//! second row, so pin `i` and pin `i + n/2` sit opposite each other.

use perfkit_core::{Color, ParameterError, Result, Size};
use perfkit_settings::{DipIcDefaults, DIP_PIN_COUNT_RANGE};

use super::{Change, Family, FamilyKind, Property, PropertyValue};
use crate::body::{Body, RegionRole};
use crate::control_points::{row_layout, ControlPointMeta, VisibilityPolicy};
use crate::geometry::{nearest_odd, Orientation, Point, Rect, Region};
use crate::ops::union_all;

const META: ControlPointMeta = ControlPointMeta::new(true, VisibilityPolicy::Never);

#[derive(Debug, Clone, PartialEq)]
pub struct DipIc {
    orientation: Orientation,
    pin_count: usize,
    pin_spacing: Size,
    row_spacing: Size,
    pin_size: Size,
    indent_size: Size,
    edge_radius: Size,
    label: String,
    display_pin_numbers: bool,
    body_color: Color,
    border_color: Color,
    pin_color: Color,
    indent_color: Color,
    label_color: Color,
}

impl DipIc {
    pub fn new(defaults: &DipIcDefaults) -> Self {
        Self {
            orientation: Orientation::Default,
            pin_count: defaults.pin_count,
            pin_spacing: defaults.pin_spacing,
            row_spacing: defaults.row_spacing,
            pin_size: defaults.pin_size,
            indent_size: defaults.indent_size,
            edge_radius: defaults.edge_radius,
            label: String::new(),
            display_pin_numbers: defaults.display_pin_numbers,
            body_color: defaults.body_color,
            border_color: defaults.body_color.darker(),
            pin_color: defaults.pin_color,
            indent_color: defaults.indent_color,
            label_color: defaults.label_color,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn pin_count(&self) -> usize {
        self.pin_count
    }

    pub fn pin_spacing(&self) -> Size {
        self.pin_spacing
    }

    pub fn row_spacing(&self) -> Size {
        self.row_spacing
    }

    pub fn pin_size(&self) -> Size {
        self.pin_size
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn display_pin_numbers(&self) -> bool {
        self.display_pin_numbers
    }

    pub fn body_color(&self) -> Color {
        self.body_color
    }

    pub fn pin_color(&self) -> Color {
        self.pin_color
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> Change {
        self.orientation = orientation;
        Change::Topology
    }

    pub fn set_pin_count(&mut self, count: usize) -> Result<Change> {
        if !DIP_PIN_COUNT_RANGE.contains(&count) {
            return Err(ParameterError::CountOutOfRange {
                name: "pin_count".to_string(),
                value: count,
                min: *DIP_PIN_COUNT_RANGE.start(),
                max: *DIP_PIN_COUNT_RANGE.end(),
            }
            .into());
        }
        if count % 2 != 0 {
            return Err(ParameterError::OddCount {
                name: "pin_count".to_string(),
                value: count,
            }
            .into());
        }
        self.pin_count = count;
        Ok(Change::Topology)
    }

    pub fn set_pin_spacing(&mut self, spacing: Size) -> Result<Change> {
        self.pin_spacing = spacing.ensure_device_px("pin_spacing")?;
        Ok(Change::Topology)
    }

    /// Row spacing must leave room for a body between the pin pads
    pub fn set_row_spacing(&mut self, spacing: Size) -> Result<Change> {
        let spacing = spacing.ensure_device_px("row_spacing")?;
        if spacing.to_device() <= self.pin_size.to_device() {
            return Err(ParameterError::TooNarrow {
                name: "row_spacing".to_string(),
                size: spacing,
                min: self.pin_size,
            }
            .into());
        }
        self.row_spacing = spacing;
        Ok(Change::Topology)
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> Change {
        self.label = label.into();
        Change::Style
    }

    pub fn set_display_pin_numbers(&mut self, display: bool) -> Change {
        self.display_pin_numbers = display;
        Change::Style
    }

    pub fn set_body_color(&mut self, color: Color) -> Change {
        self.body_color = color;
        Change::Style
    }

    pub fn set_border_color(&mut self, color: Color) -> Change {
        self.border_color = color;
        Change::Style
    }

    pub fn set_pin_color(&mut self, color: Color) -> Change {
        self.pin_color = color;
        Change::Style
    }

    pub fn set_indent_color(&mut self, color: Color) -> Change {
        self.indent_color = color;
        Change::Style
    }

    pub fn set_label_color(&mut self, color: Color) -> Change {
        self.label_color = color;
        Change::Style
    }
}

impl Default for DipIc {
    fn default() -> Self {
        Self::new(&DipIcDefaults::default())
    }
}

impl Family for DipIc {
    fn kind(&self) -> FamilyKind {
        FamilyKind::DipIc
    }

    fn regenerate_control_points(&self, first: Point) -> Vec<Point> {
        row_layout(
            self.orientation.frame(),
            first,
            self.pin_count / 2,
            self.pin_spacing.to_device_px(),
            &[0, self.row_spacing.to_device_px()],
        )
    }

    fn synthesize_body(&self, points: &[Point]) -> Body {
        let Some(&origin) = points.first() else {
            return Body::new();
        };
        let frame = self.orientation.frame();
        let spacing = self.pin_spacing.to_device_px() as f64;
        let rows = self.row_spacing.to_device_px() as f64;
        let pin = self.pin_size.to_device();
        let per_row = (self.pin_count / 2) as f64;

        let rect = frame.place(
            origin,
            (-spacing / 2.0, per_row * spacing - spacing / 2.0),
            (pin / 2.0, rows - pin / 2.0),
        );
        let outline = Region::rounded_rect(rect, self.edge_radius.to_device());

        let indent = nearest_odd(self.indent_size.to_device()) as f64;
        let notch = Region::circle(frame.map(origin, -spacing / 2.0, rows / 2.0), indent)
            .intersect(&outline);

        let pad = nearest_odd(pin) as f64;
        let pins = union_all(
            points
                .iter()
                .map(|p| Region::rect(Rect::centered(p.to_f64(), pad, pad))),
        );

        Body::new()
            .with(RegionRole::Outline, outline)
            .with(RegionRole::Notch, notch)
            .with(RegionRole::Pins, pins)
    }

    fn control_point_meta(&self, _index: usize) -> ControlPointMeta {
        META
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("orientation", PropertyValue::Orientation(self.orientation)),
            Property::new("pin_count", PropertyValue::Number(self.pin_count as f64)),
            Property::new("pin_spacing", PropertyValue::Size(self.pin_spacing)),
            Property::new("row_spacing", PropertyValue::Size(self.row_spacing)),
            Property::new("label", PropertyValue::String(self.label.clone())),
            Property::new(
                "display_pin_numbers",
                PropertyValue::Bool(self.display_pin_numbers),
            ),
            Property::new("body_color", PropertyValue::Color(self.body_color)),
            Property::new("border_color", PropertyValue::Color(self.border_color)),
            Property::new("pin_color", PropertyValue::Color(self.pin_color)),
            Property::new("indent_color", PropertyValue::Color(self.indent_color)),
            Property::new("label_color", PropertyValue::Color(self.label_color)),
        ]
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<Change> {
        match name {
            "orientation" => Ok(self.set_orientation(value.as_orientation(name)?)),
            "pin_count" => self.set_pin_count(value.as_count(name)?),
            "pin_spacing" => self.set_pin_spacing(value.as_size(name)?),
            "row_spacing" => self.set_row_spacing(value.as_size(name)?),
            "label" => match value {
                PropertyValue::String(label) => Ok(self.set_label(label)),
                _ => Err(ParameterError::TypeMismatch {
                    name: name.to_string(),
                    expected: "string",
                }
                .into()),
            },
            "display_pin_numbers" => Ok(self.set_display_pin_numbers(value.as_bool(name)?)),
            "body_color" => Ok(self.set_body_color(value.as_color(name)?)),
            "border_color" => Ok(self.set_border_color(value.as_color(name)?)),
            "pin_color" => Ok(self.set_pin_color(value.as_color(name)?)),
            "indent_color" => Ok(self.set_indent_color(value.as_color(name)?)),
            "label_color" => Ok(self.set_label_color(value.as_color(name)?)),
            _ => Err(ParameterError::UnknownProperty(name.to_string()).into()),
        }
    }
}
