//! Control point metadata and row layout
//!
//! Control points are the draggable anchors of a footprint. Stickiness and
//! visibility are fixed per index for a family; instances only store
//! positions.

use serde::{Deserialize, Serialize};

use crate::geometry::{Frame, Point};

/// When the canvas should draw a control point handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityPolicy {
    Always,
    Never,
    WhenSelected,
}

/// Static per-index control point metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlPointMeta {
    /// Dragging the point snaps it to nearby connections
    pub sticky: bool,
    pub visibility: VisibilityPolicy,
}

impl ControlPointMeta {
    pub const fn new(sticky: bool, visibility: VisibilityPolicy) -> Self {
        Self { sticky, visibility }
    }
}

/// Lay out parallel rows of `count` anchors.
///
/// Each entry of `rows` is the across offset of one row. Points are emitted
/// row by row, so unit `i` of row `r` lands at index `i + r * count`. The
/// first point of the first row is `first` itself when that row's offset is
/// zero. Positions saturate at the `i32` range ends.
pub fn row_layout(frame: Frame, first: Point, count: usize, spacing: i32, rows: &[i32]) -> Vec<Point> {
    let mut points = Vec::with_capacity(count * rows.len());
    for &across in rows {
        for i in 0..count {
            let along = i32::try_from(i).unwrap_or(i32::MAX).saturating_mul(spacing);
            points.push(frame.offset(first, along, across));
        }
    }
    points
}
