//! Numeric constants shared across the workspace.

/// Device pixels per inch of layout space.
pub const PIXELS_PER_INCH: f64 = 200.0;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Per-channel factor applied by [`Color::darker`](crate::Color::darker).
pub const DARKER_FACTOR: f64 = 0.7;

/// Largest size, in whole device pixels, a footprint parameter may take.
///
/// 5000 inches keeps every layout sum comfortably inside `i32`.
pub const MAX_DEVICE_PX: i32 = 1_000_000;
