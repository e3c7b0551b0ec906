use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use perfkit_core::{Color, ConfigurationError, ParameterError, Result, Size};

use crate::body::Body;
use crate::control_points::ControlPointMeta;
use crate::geometry::{Orientation, Point};

mod component;
mod dip_ic;
mod dot;
mod footprint;
mod leaded;
mod perf_board;
mod terminal_strip;
mod trace_cut;
mod turret;

pub use component::Component;
pub use dip_ic::DipIc;
pub use dot::Dot;
pub use footprint::Footprint;
pub use leaded::{Leaded, LeadedStyle};
pub use perf_board::{Pad, PadGrid, PerfBoard};
pub use terminal_strip::TerminalStrip;
pub use trace_cut::TraceCut;
pub use turret::Turret;

/// What a parameter edit invalidates, ordered by reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    /// Paint style only; the cached body stays fresh
    Style,
    /// Body geometry; the cached body is invalidated
    Geometry,
    /// Control point layout; points are regenerated and the body invalidated
    Topology,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: &str, value: PropertyValue) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Number(f64),
    String(String),
    Bool(bool),
    Size(Size),
    Color(Color),
    Orientation(Orientation),
}

impl PropertyValue {
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Number(_) => "number",
            PropertyValue::String(_) => "string",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Size(_) => "size",
            PropertyValue::Color(_) => "color",
            PropertyValue::Orientation(_) => "orientation",
        }
    }

    /// Parse text into a value of the same kind as `self`
    pub fn parse_like(&self, name: &str, input: &str) -> Result<PropertyValue> {
        let mismatch = || ParameterError::TypeMismatch {
            name: name.to_string(),
            expected: self.kind(),
        };
        let input = input.trim();
        let value = match self {
            PropertyValue::Number(_) => {
                PropertyValue::Number(input.parse::<f64>().map_err(|_| mismatch())?)
            }
            PropertyValue::String(_) => PropertyValue::String(input.to_string()),
            PropertyValue::Bool(_) => match input.to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => PropertyValue::Bool(true),
                "false" | "no" | "off" | "0" => PropertyValue::Bool(false),
                _ => return Err(mismatch().into()),
            },
            PropertyValue::Size(_) => PropertyValue::Size(input.parse::<Size>()?),
            PropertyValue::Color(_) => PropertyValue::Color(input.parse::<Color>()?),
            PropertyValue::Orientation(_) => {
                PropertyValue::Orientation(input.parse::<Orientation>()?)
            }
        };
        Ok(value)
    }

    pub fn as_bool(&self, name: &str) -> std::result::Result<bool, ParameterError> {
        match self {
            PropertyValue::Bool(b) => Ok(*b),
            _ => Err(type_mismatch(name, "bool")),
        }
    }

    pub fn as_size(&self, name: &str) -> std::result::Result<Size, ParameterError> {
        match self {
            PropertyValue::Size(size) => Ok(*size),
            _ => Err(type_mismatch(name, "size")),
        }
    }

    pub fn as_color(&self, name: &str) -> std::result::Result<Color, ParameterError> {
        match self {
            PropertyValue::Color(color) => Ok(*color),
            _ => Err(type_mismatch(name, "color")),
        }
    }

    /// Whole, non-negative number
    pub fn as_count(&self, name: &str) -> std::result::Result<usize, ParameterError> {
        match self {
            PropertyValue::Number(n) if *n >= 0.0 && n.fract() == 0.0 => Ok(*n as usize),
            _ => Err(type_mismatch(name, "whole number")),
        }
    }

    /// Orientation, or a number of degrees
    pub fn as_orientation(&self, name: &str) -> Result<Orientation> {
        match self {
            PropertyValue::Orientation(o) => Ok(*o),
            PropertyValue::Number(n) if n.fract() == 0.0 => Ok(Orientation::try_from(*n as i32)?),
            PropertyValue::Number(n) => {
                Err(ConfigurationError::UnrecognizedOrientation(n.to_string()).into())
            }
            _ => Err(type_mismatch(name, "orientation").into()),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Size(size) => write!(f, "{}", size),
            PropertyValue::Color(color) => write!(f, "{}", color),
            PropertyValue::Orientation(o) => write!(f, "{}", o),
        }
    }
}

fn type_mismatch(name: &str, expected: &'static str) -> ParameterError {
    ParameterError::TypeMismatch {
        name: name.to_string(),
        expected,
    }
}

/// The closed set of footprint families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyKind {
    TerminalStrip,
    DipIc,
    PerfBoard,
    Turret,
    Dot,
    TraceCut,
    AxialFilm,
    RadialFilm,
    CeramicDisk,
    CapacitorSymbol,
}

impl FamilyKind {
    pub const ALL: [FamilyKind; 10] = [
        FamilyKind::TerminalStrip,
        FamilyKind::DipIc,
        FamilyKind::PerfBoard,
        FamilyKind::Turret,
        FamilyKind::Dot,
        FamilyKind::TraceCut,
        FamilyKind::AxialFilm,
        FamilyKind::RadialFilm,
        FamilyKind::CeramicDisk,
        FamilyKind::CapacitorSymbol,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FamilyKind::TerminalStrip => "terminal-strip",
            FamilyKind::DipIc => "dip-ic",
            FamilyKind::PerfBoard => "perf-board",
            FamilyKind::Turret => "turret",
            FamilyKind::Dot => "dot",
            FamilyKind::TraceCut => "trace-cut",
            FamilyKind::AxialFilm => "axial-film",
            FamilyKind::RadialFilm => "radial-film",
            FamilyKind::CeramicDisk => "ceramic-disk",
            FamilyKind::CapacitorSymbol => "capacitor-symbol",
        }
    }
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FamilyKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        match wanted.as_str() {
            "dip" | "dil-ic" => return Ok(FamilyKind::DipIc),
            "perfboard" => return Ok(FamilyKind::PerfBoard),
            _ => {}
        }
        FamilyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ConfigurationError::UnknownFamily(s.to_string()))
    }
}

/// Shared capability of every footprint family.
///
/// A family owns its parameters and knows how to turn them into control
/// points and a body. It never stores derived state; [`Component`] pairs a
/// family with its control points and cached body.
pub trait Family {
    fn kind(&self) -> FamilyKind;

    /// Lay out every control point from the parameters and the first anchor.
    /// Must be deterministic: equal inputs give equal points.
    fn regenerate_control_points(&self, first: Point) -> Vec<Point>;

    /// Whether dragging control point 0 moves the whole layout. Families
    /// whose points are all free (board corners, lead ends) return false.
    fn anchored_layout(&self) -> bool {
        true
    }

    /// Build the ordered body regions from the current control points
    fn synthesize_body(&self, points: &[Point]) -> Body;

    fn control_point_meta(&self, index: usize) -> ControlPointMeta;

    fn properties(&self) -> Vec<Property>;

    /// Validate and apply a named parameter. On error nothing changes.
    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<Change>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_ordering() {
        assert!(Change::Topology > Change::Geometry);
        assert!(Change::Geometry > Change::Style);
    }

    #[test]
    fn test_parse_like() {
        let size = PropertyValue::Size(Size::inches(0.1));
        assert_eq!(
            size.parse_like("pin_spacing", "2.54mm").unwrap(),
            PropertyValue::Size(Size::mm(2.54))
        );

        let flag = PropertyValue::Bool(false);
        assert_eq!(
            flag.parse_like("center_hole", "yes").unwrap(),
            PropertyValue::Bool(true)
        );
        assert!(flag.parse_like("center_hole", "maybe").is_err());

        let orientation = PropertyValue::Orientation(Orientation::Default);
        let err = orientation.parse_like("orientation", "45").unwrap_err();
        assert!(err.is_configuration_defect());
    }

    #[test]
    fn test_as_count() {
        assert_eq!(PropertyValue::Number(12.0).as_count("n").unwrap(), 12);
        assert!(PropertyValue::Number(2.5).as_count("n").is_err());
        assert!(PropertyValue::Number(-2.0).as_count("n").is_err());
        assert!(PropertyValue::Bool(true).as_count("n").is_err());
    }

    #[test]
    fn test_as_orientation_from_degrees() {
        let value = PropertyValue::Number(270.0);
        assert_eq!(value.as_orientation("orientation").unwrap(), Orientation::Deg270);
        assert!(PropertyValue::Number(30.0)
            .as_orientation("orientation")
            .unwrap_err()
            .is_configuration_defect());
    }

    #[test]
    fn test_family_kind_names() {
        for kind in FamilyKind::ALL {
            assert_eq!(kind.name().parse::<FamilyKind>().unwrap(), kind);
        }
        assert_eq!("DIP".parse::<FamilyKind>().unwrap(), FamilyKind::DipIc);
        assert_eq!(
            "terminal_strip".parse::<FamilyKind>().unwrap(),
            FamilyKind::TerminalStrip
        );
        assert!(matches!(
            "tube-socket".parse::<FamilyKind>(),
            Err(ConfigurationError::UnknownFamily(_))
        ));
    }
}
