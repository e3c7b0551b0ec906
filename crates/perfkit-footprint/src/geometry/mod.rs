//! Geometry primitives shared by every footprint family.

use serde::{Deserialize, Serialize};

pub mod orientation;
pub mod region;
pub mod rounding;

pub use orientation::{Frame, Orientation};
pub use region::{Outline, Region};
pub use rounding::nearest_odd;

/// A control point position in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Displace by `(dx, dy)`, saturating at the `i32` range ends
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    pub fn to_f64(self) -> [f64; 2] {
        [self.x as f64, self.y as f64]
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Sort two points into (min, max) per axis.
///
/// Features spanned by a pair of control points must not depend on the
/// order the user placed them in.
pub fn ordered_corners(a: Point, b: Point) -> (Point, Point) {
    (
        Point::new(a.x.min(b.x), a.y.min(b.y)),
        Point::new(a.x.max(b.x), a.y.max(b.y)),
    )
}

/// Axis aligned rectangle in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning two corners given in any order
    pub fn from_corners(a: [f64; 2], b: [f64; 2]) -> Self {
        let x = a[0].min(b[0]);
        let y = a[1].min(b[1]);
        Self::new(x, y, (a[0] - b[0]).abs(), (a[1] - b[1]).abs())
    }

    pub fn centered(center: [f64; 2], width: f64, height: f64) -> Self {
        Self::new(
            center[0] - width / 2.0,
            center[1] - height / 2.0,
            width,
            height,
        )
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> [f64; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x() && x <= self.max_x() && y >= self.min_y() && y <= self.max_y()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_corners(
            [self.min_x().min(other.min_x()), self.min_y().min(other.min_y())],
            [self.max_x().max(other.max_x()), self.max_y().max(other.max_y())],
        )
    }

    pub fn inflate(&self, amount: f64) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }

    /// Compare edges within `tolerance` pixels
    pub fn approx_eq(&self, other: &Rect, tolerance: f64) -> bool {
        (self.min_x() - other.min_x()).abs() <= tolerance
            && (self.min_y() - other.min_y()).abs() <= tolerance
            && (self.max_x() - other.max_x()).abs() <= tolerance
            && (self.max_y() - other.max_y()).abs() <= tolerance
    }
}
