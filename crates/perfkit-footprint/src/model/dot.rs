use perfkit_core::{Color, ParameterError, Result, Size};
use perfkit_settings::DotDefaults;

use super::{Change, Family, FamilyKind, Property, PropertyValue};
use crate::body::{Body, RegionRole};
use crate::control_points::{ControlPointMeta, VisibilityPolicy};
use crate::geometry::{nearest_odd, Point, Region};

const META: ControlPointMeta = ControlPointMeta::new(true, VisibilityPolicy::Never);

/// Wire junction dot
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    size: Size,
    color: Color,
}

impl Dot {
    pub fn new(defaults: &DotDefaults) -> Self {
        Self {
            size: defaults.size,
            color: defaults.color,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_size(&mut self, size: Size) -> Result<Change> {
        self.size = size.ensure_device_px("size")?;
        Ok(Change::Geometry)
    }

    pub fn set_color(&mut self, color: Color) -> Change {
        self.color = color;
        Change::Style
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(&DotDefaults::default())
    }
}

impl Family for Dot {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Dot
    }

    fn regenerate_control_points(&self, first: Point) -> Vec<Point> {
        vec![first]
    }

    fn synthesize_body(&self, points: &[Point]) -> Body {
        let Some(center) = points.first() else {
            return Body::new();
        };
        let diameter = nearest_odd(self.size.to_device()) as f64;
        Body::new().with(RegionRole::Dot, Region::circle(center.to_f64(), diameter))
    }

    fn control_point_meta(&self, _index: usize) -> ControlPointMeta {
        META
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("size", PropertyValue::Size(self.size)),
            Property::new("color", PropertyValue::Color(self.color)),
        ]
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<Change> {
        match name {
            "size" => self.set_size(value.as_size(name)?),
            "color" => Ok(self.set_color(value.as_color(name)?)),
            _ => Err(ParameterError::UnknownProperty(name.to_string()).into()),
        }
    }
}
