//! Two-lead components
//!
//! The body is built around the origin with its length on the x axis, then
//! rotated to the lead direction and moved onto the lead midpoint. Leads run
//! from each control point to the nearest body edge.

use serde::{Deserialize, Serialize};

use perfkit_core::{Color, ParameterError, Result, Size};
use perfkit_settings::{BodyStyleDefaults, LeadedDefaults};

use super::{Change, Family, FamilyKind, Property, PropertyValue};
use crate::body::{Body, RegionRole};
use crate::control_points::{ControlPointMeta, VisibilityPolicy};
use crate::geometry::{nearest_odd, Point, Rect, Region};
use crate::ops::union_all;

const META: ControlPointMeta = ControlPointMeta::new(true, VisibilityPolicy::WhenSelected);

/// Body shape of a leaded component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadedStyle {
    /// Rectangular axial film capacitor
    AxialFilm,
    /// Rounded radial film capacitor
    RadialFilm,
    /// Elliptical ceramic disk capacitor
    CeramicDisk,
    /// Schematic capacitor: two plates, optionally polarized
    CapacitorSymbol,
}

impl LeadedStyle {
    pub fn kind(self) -> FamilyKind {
        match self {
            LeadedStyle::AxialFilm => FamilyKind::AxialFilm,
            LeadedStyle::RadialFilm => FamilyKind::RadialFilm,
            LeadedStyle::CeramicDisk => FamilyKind::CeramicDisk,
            LeadedStyle::CapacitorSymbol => FamilyKind::CapacitorSymbol,
        }
    }

    pub fn from_kind(kind: FamilyKind) -> Option<Self> {
        match kind {
            FamilyKind::AxialFilm => Some(LeadedStyle::AxialFilm),
            FamilyKind::RadialFilm => Some(LeadedStyle::RadialFilm),
            FamilyKind::CeramicDisk => Some(LeadedStyle::CeramicDisk),
            FamilyKind::CapacitorSymbol => Some(LeadedStyle::CapacitorSymbol),
            _ => None,
        }
    }

    /// Only axial bodies can be mounted standing on one lead
    pub fn supports_standing(self) -> bool {
        matches!(self, LeadedStyle::AxialFilm)
    }

    fn defaults(self, defaults: &LeadedDefaults) -> &BodyStyleDefaults {
        match self {
            LeadedStyle::AxialFilm => &defaults.axial_film,
            LeadedStyle::RadialFilm => &defaults.radial_film,
            LeadedStyle::CeramicDisk => &defaults.ceramic_disk,
            LeadedStyle::CapacitorSymbol => &defaults.capacitor_symbol,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leaded {
    style: LeadedStyle,
    length: Size,
    width: Size,
    span: Size,
    corner_ratio: f64,
    standing: bool,
    flip_standing: bool,
    polarized: bool,
    body_color: Color,
    border_color: Color,
    lead_color: Color,
}

impl Leaded {
    pub fn new(style: LeadedStyle, defaults: &LeadedDefaults) -> Self {
        let body = style.defaults(defaults);
        Self {
            style,
            length: body.length,
            width: body.width,
            span: defaults.span,
            corner_ratio: defaults.radial_corner_ratio,
            standing: false,
            flip_standing: false,
            polarized: false,
            body_color: body.color,
            border_color: body.color.darker(),
            lead_color: defaults.lead_color,
        }
    }

    pub fn style(&self) -> LeadedStyle {
        self.style
    }

    pub fn length(&self) -> Size {
        self.length
    }

    pub fn width(&self) -> Size {
        self.width
    }

    pub fn standing(&self) -> bool {
        self.standing
    }

    pub fn flip_standing(&self) -> bool {
        self.flip_standing
    }

    pub fn polarized(&self) -> bool {
        self.polarized
    }

    pub fn body_color(&self) -> Color {
        self.body_color
    }

    pub fn lead_color(&self) -> Color {
        self.lead_color
    }

    pub fn set_length(&mut self, length: Size) -> Result<Change> {
        self.length = length.ensure_device_px("length")?;
        Ok(Change::Geometry)
    }

    pub fn set_width(&mut self, width: Size) -> Result<Change> {
        self.width = width.ensure_device_px("width")?;
        Ok(Change::Geometry)
    }

    pub fn set_standing(&mut self, standing: bool) -> Result<Change> {
        if !self.style.supports_standing() {
            return Err(ParameterError::UnknownProperty("standing".to_string()).into());
        }
        self.standing = standing;
        Ok(Change::Geometry)
    }

    pub fn set_flip_standing(&mut self, flip: bool) -> Result<Change> {
        if !self.style.supports_standing() {
            return Err(ParameterError::UnknownProperty("flip_standing".to_string()).into());
        }
        self.flip_standing = flip;
        Ok(Change::Geometry)
    }

    pub fn set_polarized(&mut self, polarized: bool) -> Result<Change> {
        if self.style != LeadedStyle::CapacitorSymbol {
            return Err(ParameterError::UnknownProperty("polarized".to_string()).into());
        }
        self.polarized = polarized;
        Ok(Change::Geometry)
    }

    pub fn set_body_color(&mut self, color: Color) -> Change {
        self.body_color = color;
        Change::Style
    }

    pub fn set_border_color(&mut self, color: Color) -> Change {
        self.border_color = color;
        Change::Style
    }

    pub fn set_lead_color(&mut self, color: Color) -> Change {
        self.lead_color = color;
        Change::Style
    }

    /// Body centered on the origin, length along +x
    fn local_body(&self, length: f64, width: f64) -> Region {
        let rect = Rect::centered([0.0, 0.0], length, width);
        match self.style {
            LeadedStyle::AxialFilm => Region::rect(rect),
            LeadedStyle::RadialFilm => Region::rounded_rect(rect, self.corner_ratio * width),
            LeadedStyle::CeramicDisk => Region::ellipse([0.0, 0.0], length, width),
            LeadedStyle::CapacitorSymbol => {
                let (x, y) = (length / 2.0, width / 2.0);
                Region::polyline(vec![[-x, -y], [-x, y]])
                    .union(&Region::polyline(vec![[x, -y], [x, y]]))
            }
        }
    }

    /// "+" beside the top of the first plate
    fn local_marking(&self, length: f64, width: f64) -> Region {
        let plus = nearest_odd(self.width.to_device() / 4.0);
        let half = (plus / 2) as f64;
        let plus = plus as f64;
        let (cx, cy) = (-length / 2.0 - plus, -width / 2.0 + plus);
        Region::polyline(vec![[cx - half, cy], [cx + half, cy]])
            .union(&Region::polyline(vec![[cx, cy - half], [cx, cy + half]]))
    }

    fn standing_body(&self, a: Point, b: Point, width: f64) -> Body {
        let (base, other) = if self.flip_standing { (b, a) } else { (a, b) };
        let body = Region::circle(base.to_f64(), width);

        let distance = base.distance_to(&other);
        let radius = width / 2.0;
        let mut leads = Region::empty();
        if distance > radius {
            let t = radius / distance;
            let edge = [
                base.x as f64 + (other.x - base.x) as f64 * t,
                base.y as f64 + (other.y - base.y) as f64 * t,
            ];
            leads = Region::polyline(vec![other.to_f64(), edge]);
        }

        Body::new()
            .with(RegionRole::Body, body)
            .with(RegionRole::Leads, leads)
    }
}

impl Default for Leaded {
    fn default() -> Self {
        Self::new(LeadedStyle::AxialFilm, &LeadedDefaults::default())
    }
}

impl Family for Leaded {
    fn kind(&self) -> FamilyKind {
        self.style.kind()
    }

    fn regenerate_control_points(&self, first: Point) -> Vec<Point> {
        vec![first, first.offset(self.span.to_device_px(), 0)]
    }

    fn anchored_layout(&self) -> bool {
        false
    }

    fn synthesize_body(&self, points: &[Point]) -> Body {
        let (Some(&a), Some(&b)) = (points.first(), points.get(1)) else {
            return Body::new();
        };
        let length = self.length.to_device();
        let width = nearest_odd(self.width.to_device()) as f64;

        if self.standing && self.style.supports_standing() {
            return self.standing_body(a, b, width);
        }

        let (dx, dy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
        let distance = dx.hypot(dy);
        let angle = dy.atan2(dx);
        let middle = [(a.x + b.x) as f64 / 2.0, (a.y + b.y) as f64 / 2.0];
        let place = |region: Region| region.rotated([0.0, 0.0], angle).translated(middle[0], middle[1]);

        let mut leads = Vec::new();
        if distance > length {
            let reach = (distance - length) / 2.0 / distance;
            let (ax, ay) = (a.x as f64, a.y as f64);
            let (bx, by) = (b.x as f64, b.y as f64);
            leads.push(Region::polyline(vec![[ax, ay], [ax + dx * reach, ay + dy * reach]]));
            leads.push(Region::polyline(vec![[bx, by], [bx - dx * reach, by - dy * reach]]));
        }

        let mut body = Body::new()
            .with(RegionRole::Body, place(self.local_body(length, width)))
            .with(RegionRole::Leads, union_all(leads));
        if self.style == LeadedStyle::CapacitorSymbol && self.polarized {
            body.push(RegionRole::Marking, place(self.local_marking(length, width)));
        }
        body
    }

    fn control_point_meta(&self, _index: usize) -> ControlPointMeta {
        META
    }

    fn properties(&self) -> Vec<Property> {
        let mut properties = vec![
            Property::new("length", PropertyValue::Size(self.length)),
            Property::new("width", PropertyValue::Size(self.width)),
        ];
        if self.style.supports_standing() {
            properties.push(Property::new("standing", PropertyValue::Bool(self.standing)));
            properties.push(Property::new(
                "flip_standing",
                PropertyValue::Bool(self.flip_standing),
            ));
        }
        if self.style == LeadedStyle::CapacitorSymbol {
            properties.push(Property::new("polarized", PropertyValue::Bool(self.polarized)));
        }
        properties.extend([
            Property::new("body_color", PropertyValue::Color(self.body_color)),
            Property::new("border_color", PropertyValue::Color(self.border_color)),
            Property::new("lead_color", PropertyValue::Color(self.lead_color)),
        ]);
        properties
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<Change> {
        match name {
            "length" => self.set_length(value.as_size(name)?),
            "width" => self.set_width(value.as_size(name)?),
            "standing" => self.set_standing(value.as_bool(name)?),
            "flip_standing" => self.set_flip_standing(value.as_bool(name)?),
            "polarized" => self.set_polarized(value.as_bool(name)?),
            "body_color" => Ok(self.set_body_color(value.as_color(name)?)),
            "border_color" => Ok(self.set_border_color(value.as_color(name)?)),
            "lead_color" => Ok(self.set_lead_color(value.as_color(name)?)),
            _ => Err(ParameterError::UnknownProperty(name.to_string()).into()),
        }
    }
}
