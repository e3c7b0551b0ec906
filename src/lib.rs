//! # PerfKit
//!
//! Parametric footprint geometry for circuit-construction layouts:
//! perforated boards, terminal strips, ICs and passive components.
//!
//! ## Architecture
//!
//! PerfKit is organized as a workspace with multiple crates:
//!
//! 1. **perfkit-core** - Device units, sizes, colors and the error taxonomy
//! 2. **perfkit-settings** - Per-family default values, loaded from TOML or JSON
//! 3. **perfkit-footprint** - Control points, region synthesis, body cache and families
//! 4. **perfkit** - Logging bootstrap and the `perfkit` inspection binary
//!
//! ## Features
//!
//! - **Control points**: regenerated from orientation, count and spacing parameters
//! - **Constructive regions**: union, subtraction and intersection of primitive shapes
//! - **Lazy bodies**: synthesized on demand and cached until a parameter invalidates them
//! - **Odd-pixel rounding**: every centered diameter lands on whole pixels

pub mod inspect;

pub use perfkit_core::{Color, ConfigurationError, Error, ParameterError, Result, Size, SizeUnit};
pub use perfkit_footprint::{
    Body, Change, Component, FamilyKind, Footprint, Orientation, Point, Property, PropertyValue,
    Rect, Region, RegionRole,
};
pub use perfkit_settings::{FootprintDefaults, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting on stderr, leaving stdout for reports
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
