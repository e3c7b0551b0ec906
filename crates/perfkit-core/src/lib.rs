//! # PerfKit Core
//!
//! Core types and utilities shared by the PerfKit crates.
//! Provides physical sizes and their conversion to device pixels,
//! paint colors, and the error taxonomy used by the footprint engine.

pub mod color;
pub mod constants;
pub mod error;
pub mod units;

pub use color::Color;
pub use error::{ConfigurationError, Error, ParameterError, Result};
pub use units::{to_device_units, Size, SizeUnit};
pub use constants::MAX_DEVICE_PX;
