use perfkit_core::{Color, ParameterError, Result, Size};
use perfkit_settings::TurretDefaults;

use super::{Change, Family, FamilyKind, Property, PropertyValue};
use crate::body::{Body, RegionRole};
use crate::control_points::{ControlPointMeta, VisibilityPolicy};
use crate::geometry::{nearest_odd, Point, Region};

const META: ControlPointMeta = ControlPointMeta::new(true, VisibilityPolicy::Never);

/// Turret lug: a round lug with a drilled center on one point
#[derive(Debug, Clone, PartialEq)]
pub struct Turret {
    size: Size,
    hole_size: Size,
    color: Color,
    border_color: Color,
}

impl Turret {
    pub fn new(defaults: &TurretDefaults) -> Self {
        Self {
            size: defaults.size,
            hole_size: defaults.hole_size,
            color: defaults.color,
            border_color: defaults.color.darker(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn hole_size(&self) -> Size {
        self.hole_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_size(&mut self, size: Size) -> Result<Change> {
        self.size = size.ensure_device_px("size")?;
        Ok(Change::Geometry)
    }

    pub fn set_hole_size(&mut self, size: Size) -> Result<Change> {
        self.hole_size = size.ensure_device_px("hole_size")?;
        Ok(Change::Geometry)
    }

    pub fn set_color(&mut self, color: Color) -> Change {
        self.color = color;
        Change::Style
    }

    pub fn set_border_color(&mut self, color: Color) -> Change {
        self.border_color = color;
        Change::Style
    }
}

impl Default for Turret {
    fn default() -> Self {
        Self::new(&TurretDefaults::default())
    }
}

impl Family for Turret {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Turret
    }

    fn regenerate_control_points(&self, first: Point) -> Vec<Point> {
        vec![first]
    }

    fn synthesize_body(&self, points: &[Point]) -> Body {
        let Some(center) = points.first().map(|p| p.to_f64()) else {
            return Body::new();
        };
        let diameter = nearest_odd(self.size.to_device()) as f64;
        let hole = Region::circle(center, nearest_odd(self.hole_size.to_device()) as f64);
        let lug = Region::circle(center, diameter).subtract(&hole);

        Body::new()
            .with(RegionRole::Lug, lug)
            .with(RegionRole::Hole, hole)
    }

    fn control_point_meta(&self, _index: usize) -> ControlPointMeta {
        META
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("size", PropertyValue::Size(self.size)),
            Property::new("hole_size", PropertyValue::Size(self.hole_size)),
            Property::new("color", PropertyValue::Color(self.color)),
            Property::new("border_color", PropertyValue::Color(self.border_color)),
        ]
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<Change> {
        match name {
            "size" => self.set_size(value.as_size(name)?),
            "hole_size" => self.set_hole_size(value.as_size(name)?),
            "color" => Ok(self.set_color(value.as_color(name)?)),
            "border_color" => Ok(self.set_border_color(value.as_color(name)?)),
            _ => Err(ParameterError::UnknownProperty(name.to_string()).into()),
        }
    }
}
