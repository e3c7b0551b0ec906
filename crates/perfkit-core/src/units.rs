//! Unit conversion utilities
//!
//! Layout space is measured in device pixels at a fixed 200 pixels per inch.
//! Sizes keep the unit they were entered in and are converted when geometry
//! is synthesized. Supports decimal and fractional inch parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_DEVICE_PX, MM_PER_INCH, PIXELS_PER_INCH};
use crate::error::ParameterError;

/// Unit a [`Size`] is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    /// Device pixels
    Px,
    /// Millimeters
    Mm,
    /// Centimeters
    Cm,
    /// Inches
    In,
}

impl SizeUnit {
    /// Device pixels in one of this unit
    pub fn pixels_per_unit(self) -> f64 {
        match self {
            Self::Px => 1.0,
            Self::Mm => PIXELS_PER_INCH / MM_PER_INCH,
            Self::Cm => 10.0 * PIXELS_PER_INCH / MM_PER_INCH,
            Self::In => PIXELS_PER_INCH,
        }
    }

    /// Short label used when formatting ("px", "mm", "cm", "in")
    pub fn label(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Mm => "mm",
            Self::Cm => "cm",
            Self::In => "in",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SizeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "px" | "pixel" | "pixels" => Ok(Self::Px),
            "mm" => Ok(Self::Mm),
            "cm" => Ok(Self::Cm),
            "in" | "inch" | "inches" | "\"" => Ok(Self::In),
            _ => Err(format!("Unknown size unit: {}", s)),
        }
    }
}

/// Convert a physical measurement to device pixel units
pub fn to_device_units(value: f64, unit: SizeUnit) -> f64 {
    value * unit.pixels_per_unit()
}

/// A physical length paired with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Size {
    pub value: f64,
    pub unit: SizeUnit,
}

impl Size {
    pub const fn new(value: f64, unit: SizeUnit) -> Self {
        Self { value, unit }
    }

    pub const fn inches(value: f64) -> Self {
        Self::new(value, SizeUnit::In)
    }

    pub const fn mm(value: f64) -> Self {
        Self::new(value, SizeUnit::Mm)
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, SizeUnit::Px)
    }

    /// Size in (fractional) device pixels
    pub fn to_device(&self) -> f64 {
        to_device_units(self.value, self.unit)
    }

    /// Size in whole device pixels, rounded to the nearest integer.
    ///
    /// Rounding rather than truncating keeps `2.54mm` and `0.1in` on the
    /// same pixel count.
    pub fn to_device_px(&self) -> i32 {
        self.to_device().round() as i32
    }

    /// Reject sizes that are zero, negative or not finite once converted.
    ///
    /// * `name` - Parameter name reported in the error
    pub fn ensure_positive(self, name: &str) -> Result<Self, ParameterError> {
        let device = self.to_device();
        if device.is_finite() && device > 0.0 {
            Ok(self)
        } else {
            Err(ParameterError::NonPositive {
                name: name.to_string(),
                size: self,
            })
        }
    }

    /// Reject sizes that round to less than one whole device pixel or to more
    /// than [`MAX_DEVICE_PX`].
    ///
    /// Every spacing and diameter that feeds layout goes through this check.
    ///
    /// * `name` - Parameter name reported in the error
    pub fn ensure_device_px(self, name: &str) -> Result<Self, ParameterError> {
        let size = self.ensure_positive(name)?;
        let px = size.to_device().round();
        if px < 1.0 {
            return Err(ParameterError::NonPositive {
                name: name.to_string(),
                size,
            });
        }
        if px > MAX_DEVICE_PX as f64 {
            return Err(ParameterError::TooLarge {
                name: name.to_string(),
                size,
                max: MAX_DEVICE_PX,
            });
        }
        Ok(size)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl FromStr for Size {
    type Err = ParameterError;

    /// Parse sizes such as `0.1in`, `2.54 mm`, `1/8in` or `1 1/2 in`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = |reason: &str| ParameterError::InvalidSize {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let number = input.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '"');
        let suffix = &input[number.len()..];
        if suffix.is_empty() {
            return Err(invalid("missing unit"));
        }
        let unit = suffix.parse::<SizeUnit>().map_err(|e| invalid(&e))?;
        let value = parse_number(number).map_err(|e| invalid(&e))?;

        Ok(Self::new(value, unit))
    }
}

impl TryFrom<String> for Size {
    type Error = ParameterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Size> for String {
    fn from(size: Size) -> Self {
        size.to_string()
    }
}

/// Parse a decimal or mixed fraction ("1 1/2", "-1/4")
fn parse_number(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("missing value".to_string());
    }
    if !input.contains('/') {
        return input.parse::<f64>().map_err(|e| e.to_string());
    }

    let negative = input.starts_with('-');
    let mut total = 0.0;
    for part in input.trim_start_matches('-').split_whitespace() {
        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err("Invalid fraction format".to_string());
            }
            let num = frac_parts[0]
                .parse::<f64>()
                .map_err(|_| "Invalid numerator")?;
            let den = frac_parts[1]
                .parse::<f64>()
                .map_err(|_| "Invalid denominator")?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total += num / den;
        } else {
            total += part.parse::<f64>().map_err(|_| "Invalid number part")?;
        }
    }

    Ok(if negative { -total } else { total })
}
