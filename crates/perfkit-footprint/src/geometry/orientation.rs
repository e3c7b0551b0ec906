//! Orientation transform
//!
//! Footprints are laid out in logical (along, across) coordinates: "along"
//! runs down a row of pins or terminals, "across" runs from one row to the
//! next. Each of the four supported orientations maps those two axes onto
//! screen axes. Both control point layout and body synthesis go through the
//! same [`Frame`], so they cannot disagree about direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use perfkit_core::ConfigurationError;

use super::{Point, Rect};

/// Discrete layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Orientation {
    /// Rows run down the screen (+y)
    #[default]
    Default,
    /// Rows run left (-x)
    Deg90,
    /// Rows run up the screen (-y)
    Deg180,
    /// Rows run right (+x)
    Deg270,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Default,
        Orientation::Deg90,
        Orientation::Deg180,
        Orientation::Deg270,
    ];

    pub fn degrees(self) -> i32 {
        match self {
            Orientation::Default => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }

    /// Along and across unit vectors for this orientation
    pub fn frame(self) -> Frame {
        match self {
            Orientation::Default => Frame::new((0, 1), (1, 0)),
            Orientation::Deg90 => Frame::new((-1, 0), (0, 1)),
            Orientation::Deg180 => Frame::new((0, -1), (-1, 0)),
            Orientation::Deg270 => Frame::new((1, 0), (0, -1)),
        }
    }

    /// Next orientation a quarter turn further
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Default => Orientation::Deg90,
            Orientation::Deg90 => Orientation::Deg180,
            Orientation::Deg180 => Orientation::Deg270,
            Orientation::Deg270 => Orientation::Default,
        }
    }
}

impl TryFrom<i32> for Orientation {
    type Error = ConfigurationError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Orientation::Default),
            90 => Ok(Orientation::Deg90),
            180 => Ok(Orientation::Deg180),
            270 => Ok(Orientation::Deg270),
            other => Err(ConfigurationError::UnsupportedOrientation(other)),
        }
    }
}

impl From<Orientation> for i32 {
    fn from(orientation: Orientation) -> Self {
        orientation.degrees()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

impl FromStr for Orientation {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("default") {
            return Ok(Orientation::Default);
        }
        let digits = trimmed.trim_end_matches("deg").trim_end_matches('°').trim();
        let degrees = digits
            .parse::<i32>()
            .map_err(|_| ConfigurationError::UnrecognizedOrientation(s.to_string()))?;
        Orientation::try_from(degrees)
    }
}

/// Along/across basis for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    along: (i32, i32),
    across: (i32, i32),
}

impl Frame {
    const fn new(along: (i32, i32), across: (i32, i32)) -> Self {
        Self { along, across }
    }

    pub fn along(&self) -> (i32, i32) {
        self.along
    }

    pub fn across(&self) -> (i32, i32) {
        self.across
    }

    /// Integer anchor displaced from `origin`
    pub fn offset(&self, origin: Point, along: i32, across: i32) -> Point {
        origin.offset(
            along
                .saturating_mul(self.along.0)
                .saturating_add(across.saturating_mul(self.across.0)),
            along
                .saturating_mul(self.along.1)
                .saturating_add(across.saturating_mul(self.across.1)),
        )
    }

    /// Fractional position displaced from `origin`
    pub fn map(&self, origin: Point, along: f64, across: f64) -> [f64; 2] {
        [
            origin.x as f64 + along * self.along.0 as f64 + across * self.across.0 as f64,
            origin.y as f64 + along * self.along.1 as f64 + across * self.across.1 as f64,
        ]
    }

    /// Place a logical box in device space.
    ///
    /// The box spans `along.0..along.1` and `across.0..across.1` relative to
    /// `origin`. The returned rectangle's top-left corner already includes the
    /// origin correction for orientations where either axis points negative.
    pub fn place(&self, origin: Point, along: (f64, f64), across: (f64, f64)) -> Rect {
        Rect::from_corners(
            self.map(origin, along.0, across.0),
            self.map(origin, along.1, across.1),
        )
    }
}
