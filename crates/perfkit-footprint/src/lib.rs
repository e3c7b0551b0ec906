//! # PerfKit Footprint
//!
//! Parametric footprint geometry for circuit layout components.
//!
//! Every placed component is a [`Component`]: a family's parameters, an
//! ordered list of control points derived from them, and a lazily
//! synthesized [`Body`] of constructive area regions. Parameter edits
//! report a [`Change`] that decides whether control points are regenerated
//! and whether the cached body is thrown away.
//!
//! ## Families
//!
//! - [`TerminalStrip`]: paired lugs on an insulating board
//! - [`DipIc`]: dual in-line IC package
//! - [`PerfBoard`]: perforated board with a procedural [`PadGrid`]
//! - [`Turret`], [`Dot`], [`TraceCut`]: single point connectivity marks
//! - [`Leaded`]: two-lead capacitors in several body styles
//!
//! [`Footprint`] holds any of them behind one enum.

pub mod body;
pub mod cache;
pub mod control_points;
pub mod geometry;
pub mod model;
pub mod ops;

pub use body::{Body, RegionRole};
pub use cache::BodyCache;
pub use control_points::{ControlPointMeta, VisibilityPolicy};
pub use geometry::{nearest_odd, Frame, Orientation, Outline, Point, Rect, Region};
pub use model::{
    Change, Component, DipIc, Dot, Family, FamilyKind, Footprint, Leaded, LeadedStyle, Pad,
    PadGrid, PerfBoard, Property, PropertyValue, TerminalStrip, TraceCut, Turret,
};
pub use ops::{perform_boolean, BooleanOp};
