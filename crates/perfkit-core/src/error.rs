//! Error handling for PerfKit
//!
//! Two classes of failure exist:
//! - Parameter errors, rejected at the setter boundary before any state changes
//! - Configuration defects, such as an orientation outside the four supported
//!   directions, which are never recovered locally
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::units::Size;

/// Invalid parameter error
///
/// Raised when a caller tries to set a size, count or control point that the
/// footprint cannot represent. The component is left unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A size or spacing converted to zero or fewer device units
    #[error("{name} must be positive, got {size}")]
    NonPositive {
        /// The parameter name.
        name: String,
        /// The rejected size.
        size: Size,
    },

    /// A size that converts to more device units than layout space allows
    #[error("{name} must be at most {max} px, got {size}")]
    TooLarge {
        /// The parameter name.
        name: String,
        /// The rejected size.
        size: Size,
        /// Largest accepted size in device pixels.
        max: i32,
    },

    /// A size that must exceed a related size did not
    #[error("{name} must be wider than {min}, got {size}")]
    TooNarrow {
        /// The parameter name.
        name: String,
        /// The rejected size.
        size: Size,
        /// The size it has to exceed.
        min: Size,
    },

    /// A count outside its allowed range
    #[error("{name} must be between {min} and {max}, got {value}")]
    CountOutOfRange {
        /// The parameter name.
        name: String,
        /// The rejected count.
        value: usize,
        /// Smallest accepted count.
        min: usize,
        /// Largest accepted count.
        max: usize,
    },

    /// A count that must be even was odd
    #[error("{name} must be even, got {value}")]
    OddCount {
        /// The parameter name.
        name: String,
        /// The rejected count.
        value: usize,
    },

    /// No property with this name exists on the family
    #[error("Unknown property '{0}'")]
    UnknownProperty(String),

    /// The property exists but the value has the wrong kind
    #[error("Property '{name}' expects a {expected} value")]
    TypeMismatch {
        /// The property name.
        name: String,
        /// The expected value kind.
        expected: &'static str,
    },

    /// Control point index past the end of the layout
    #[error("Control point {index} out of range (component has {count})")]
    ControlPointOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of control points.
        count: usize,
    },

    /// A stored layout has the wrong number of control points
    #[error("Expected {expected} control points, got {actual}")]
    ControlPointCount {
        /// The number the family lays out.
        expected: usize,
        /// The number supplied.
        actual: usize,
    },

    /// A size string could not be parsed
    #[error("Invalid size '{input}': {reason}")]
    InvalidSize {
        /// The text that failed to parse.
        input: String,
        /// The reason parsing failed.
        reason: String,
    },

    /// A color string could not be parsed
    #[error("Invalid color '{0}'")]
    InvalidColor(String),
}

/// Configuration defect
///
/// Signals a value that no footprint code path knows how to handle. These
/// are raised at conversion boundaries and propagate unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Orientation in degrees other than 0, 90, 180 or 270
    #[error("Unsupported orientation: {0} degrees")]
    UnsupportedOrientation(i32),

    /// Orientation text that is not a whole number of degrees
    #[error("Unrecognized orientation '{0}'")]
    UnrecognizedOrientation(String),

    /// Footprint family name with no implementation
    #[error("Unknown footprint family: {0}")]
    UnknownFamily(String),
}

/// Main error type for PerfKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Configuration defect
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration defect
    pub fn is_configuration_defect(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Check if this is a rejected parameter
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Error::Parameter(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
