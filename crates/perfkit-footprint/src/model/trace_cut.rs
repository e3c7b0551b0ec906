use perfkit_core::{Color, ParameterError, Result, Size};
use perfkit_settings::TraceCutDefaults;

use super::{Change, Family, FamilyKind, Property, PropertyValue};
use crate::body::{Body, RegionRole};
use crate::control_points::{ControlPointMeta, VisibilityPolicy};
use crate::geometry::{nearest_odd, Point, Rect, Region};

const META: ControlPointMeta = ControlPointMeta::new(false, VisibilityPolicy::Never);

/// Stripboard trace cut.
///
/// Either drilled out at a hole (a rounded square with the hole showing
/// through) or scored between two holes (a thin bar half a hole spacing to
/// the left of the point).
#[derive(Debug, Clone, PartialEq)]
pub struct TraceCut {
    size: Size,
    cut_width: Size,
    hole_size: Size,
    hole_spacing: Size,
    cut_between_holes: bool,
    fill_color: Color,
    border_color: Color,
}

impl TraceCut {
    pub fn new(defaults: &TraceCutDefaults) -> Self {
        Self {
            size: defaults.size,
            cut_width: defaults.cut_width,
            hole_size: defaults.hole_size,
            hole_spacing: defaults.hole_spacing,
            cut_between_holes: defaults.cut_between_holes,
            fill_color: defaults.fill_color,
            border_color: defaults.border_color,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn hole_spacing(&self) -> Size {
        self.hole_spacing
    }

    pub fn cut_between_holes(&self) -> bool {
        self.cut_between_holes
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn set_size(&mut self, size: Size) -> Result<Change> {
        self.size = size.ensure_device_px("size")?;
        Ok(Change::Geometry)
    }

    pub fn set_hole_spacing(&mut self, spacing: Size) -> Result<Change> {
        self.hole_spacing = spacing.ensure_device_px("hole_spacing")?;
        Ok(Change::Geometry)
    }

    pub fn set_cut_between_holes(&mut self, between: bool) -> Change {
        self.cut_between_holes = between;
        Change::Geometry
    }

    pub fn set_fill_color(&mut self, color: Color) -> Change {
        self.fill_color = color;
        Change::Style
    }

    pub fn set_border_color(&mut self, color: Color) -> Change {
        self.border_color = color;
        Change::Style
    }
}

impl Default for TraceCut {
    fn default() -> Self {
        Self::new(&TraceCutDefaults::default())
    }
}

impl Family for TraceCut {
    fn kind(&self) -> FamilyKind {
        FamilyKind::TraceCut
    }

    fn regenerate_control_points(&self, first: Point) -> Vec<Point> {
        vec![first]
    }

    fn synthesize_body(&self, points: &[Point]) -> Body {
        let Some(&point) = points.first() else {
            return Body::new();
        };
        let size = nearest_odd(self.size.to_device());

        if self.cut_between_holes {
            let cut_width = nearest_odd(self.cut_width.to_device());
            let spacing = nearest_odd(self.hole_spacing.to_device());
            let bar = Rect::new(
                (point.x - spacing / 2 - cut_width / 2) as f64,
                (point.y - size / 2 - 1) as f64,
                cut_width as f64,
                (size + 2) as f64,
            );
            return Body::new().with(RegionRole::Cut, Region::rect(bar));
        }

        let size = size as f64;
        let center = point.to_f64();
        let hole = Region::circle(center, nearest_odd(self.hole_size.to_device()) as f64);
        let cut = Region::rounded_rect(Rect::centered(center, size, size), size).subtract(&hole);
        Body::new()
            .with(RegionRole::Cut, cut)
            .with(RegionRole::Hole, hole)
    }

    fn control_point_meta(&self, _index: usize) -> ControlPointMeta {
        META
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("size", PropertyValue::Size(self.size)),
            Property::new("hole_spacing", PropertyValue::Size(self.hole_spacing)),
            Property::new(
                "cut_between_holes",
                PropertyValue::Bool(self.cut_between_holes),
            ),
            Property::new("fill_color", PropertyValue::Color(self.fill_color)),
            Property::new("border_color", PropertyValue::Color(self.border_color)),
        ]
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<Change> {
        match name {
            "size" => self.set_size(value.as_size(name)?),
            "hole_spacing" => self.set_hole_spacing(value.as_size(name)?),
            "cut_between_holes" => Ok(self.set_cut_between_holes(value.as_bool(name)?)),
            "fill_color" => Ok(self.set_fill_color(value.as_color(name)?)),
            "border_color" => Ok(self.set_border_color(value.as_color(name)?)),
            _ => Err(ParameterError::UnknownProperty(name.to_string()).into()),
        }
    }
}
