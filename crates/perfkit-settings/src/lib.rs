//! # PerfKit Settings
//!
//! Immutable default-value records for every footprint family, with
//! loading and saving in TOML or JSON. Records are passed explicitly to
//! footprint constructors so that family geometry and palette previews
//! read the same values.

pub mod defaults;
pub mod error;

pub use defaults::{
    BodyStyleDefaults, DipIcDefaults, DotDefaults, FootprintDefaults, LeadedDefaults,
    PerfBoardDefaults, TerminalStripDefaults, TraceCutDefaults, TurretDefaults,
    DIP_PIN_COUNT_RANGE, TERMINAL_COUNT_RANGE,
};
pub use error::{SettingsError, SettingsResult};
