//! Constructive area regions
//!
//! A [`Region`] is a filled area that supports union, subtraction and
//! intersection, plus any number of open polylines (leads, symbol plates)
//! that are stroked rather than filled. Open polylines are carried through
//! union by concatenation and are not clipped by subtraction or
//! intersection.

use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use lyon::math::point;
use lyon::path::{FillRule, Path};
use nalgebra::{Matrix4, Point3, Vector3};
use serde::Serialize;

use super::Rect;

/// Vertices used to approximate a full ellipse. A multiple of four puts a
/// vertex on each axis extreme so bounds are exact.
const ELLIPSE_STEPS: usize = 48;

/// Vertices per rounded corner
const CORNER_STEPS: usize = 8;

/// One filled polygon of a region with its holes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    pub exterior: Vec<[f64; 2]>,
    pub holes: Vec<Vec<[f64; 2]>>,
}

impl Outline {
    /// Enclosed area, excluding holes
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|ring| ring_area(ring)).sum();
        ring_area(&self.exterior) - holes
    }
}

/// A paintable area built from primitive shapes
#[derive(Debug, Clone)]
pub struct Region {
    area: Sketch<()>,
    strokes: Vec<Vec<[f64; 2]>>,
}

impl Default for Region {
    fn default() -> Self {
        Self::empty()
    }
}

impl Region {
    pub fn empty() -> Self {
        Self {
            area: Sketch::new(),
            strokes: Vec::new(),
        }
    }

    fn from_sketch(area: Sketch<()>) -> Self {
        Self {
            area,
            strokes: Vec::new(),
        }
    }

    pub fn rect(rect: Rect) -> Self {
        if rect.is_empty() {
            return Self::empty();
        }
        // Sketch::rectangle spans (0,0) to (w,h)
        let sketch = Sketch::rectangle(rect.width, rect.height, None);
        let translation = Matrix4::new_translation(&Vector3::new(rect.x, rect.y, 0.0));
        Self::from_sketch(sketch.transform(&translation))
    }

    /// Rectangle with rounded corners.
    ///
    /// `arc` is the corner arc diameter. It is clamped to the shorter side, so
    /// a square with `arc == side` becomes a circle.
    pub fn rounded_rect(rect: Rect, arc: f64) -> Self {
        if rect.is_empty() {
            return Self::empty();
        }
        let radius = (arc / 2.0).min(rect.width / 2.0).min(rect.height / 2.0);
        if radius <= 0.0 {
            return Self::rect(rect);
        }

        let corners = [
            ([rect.max_x() - radius, rect.max_y() - radius], 0.0),
            ([rect.min_x() + radius, rect.max_y() - radius], 0.25),
            ([rect.min_x() + radius, rect.min_y() + radius], 0.5),
            ([rect.max_x() - radius, rect.min_y() + radius], 0.75),
        ];
        let mut points: Vec<[f64; 2]> = Vec::with_capacity(4 * (CORNER_STEPS + 1));
        for (center, turn) in corners {
            for step in 0..=CORNER_STEPS {
                let theta = std::f64::consts::TAU
                    * (turn + 0.25 * step as f64 / CORNER_STEPS as f64);
                let vertex = [
                    center[0] + radius * theta.cos(),
                    center[1] + radius * theta.sin(),
                ];
                // Arcs of a full-radius corner meet; drop the shared vertex
                if points.last().is_some_and(|last| same_vertex(*last, vertex)) {
                    continue;
                }
                points.push(vertex);
            }
        }
        if points.len() > 1 && same_vertex(points[0], points[points.len() - 1]) {
            points.pop();
        }
        Self::polygon(&points)
    }

    /// Ellipse inscribed in a `width` x `height` box around `center`
    pub fn ellipse(center: [f64; 2], width: f64, height: f64) -> Self {
        if !(width > 0.0 && height > 0.0) {
            return Self::empty();
        }
        let (rx, ry) = (width / 2.0, height / 2.0);
        let points: Vec<[f64; 2]> = (0..ELLIPSE_STEPS)
            .map(|i| {
                let theta = std::f64::consts::TAU * (i as f64) / (ELLIPSE_STEPS as f64);
                [center[0] + rx * theta.cos(), center[1] + ry * theta.sin()]
            })
            .collect();
        Self::polygon(&points)
    }

    pub fn circle(center: [f64; 2], diameter: f64) -> Self {
        Self::ellipse(center, diameter, diameter)
    }

    /// Closed polygon through `points`
    pub fn polygon(points: &[[f64; 2]]) -> Self {
        if points.len() < 3 {
            return Self::empty();
        }
        Self::from_sketch(Sketch::polygon(points, None))
    }

    /// Open polyline, stroked but never filled
    pub fn polyline(points: Vec<[f64; 2]>) -> Self {
        if points.len() < 2 {
            return Self::empty();
        }
        Self {
            area: Sketch::new(),
            strokes: vec![points],
        }
    }

    pub fn union(&self, other: &Region) -> Region {
        let mut strokes = self.strokes.clone();
        strokes.extend(other.strokes.iter().cloned());
        Region {
            area: self.area.union(&other.area),
            strokes,
        }
    }

    pub fn subtract(&self, other: &Region) -> Region {
        Region {
            area: self.area.difference(&other.area),
            strokes: self.strokes.clone(),
        }
    }

    pub fn intersect(&self, other: &Region) -> Region {
        Region {
            area: self.area.intersection(&other.area),
            strokes: self.strokes.clone(),
        }
    }

    /// In-place union
    pub fn add(&mut self, other: &Region) {
        *self = self.union(other);
    }

    pub fn transformed(&self, matrix: &Matrix4<f64>) -> Region {
        let strokes = self
            .strokes
            .iter()
            .map(|line| {
                line.iter()
                    .map(|p| {
                        let moved = matrix.transform_point(&Point3::new(p[0], p[1], 0.0));
                        [moved.x, moved.y]
                    })
                    .collect()
            })
            .collect();
        Region {
            area: self.area.transform(matrix),
            strokes,
        }
    }

    /// Rotate by `angle` radians about `center`
    pub fn rotated(&self, center: [f64; 2], angle: f64) -> Region {
        let to_origin = Matrix4::new_translation(&Vector3::new(-center[0], -center[1], 0.0));
        let rotation = Matrix4::new_rotation(Vector3::new(0.0, 0.0, angle));
        let back = Matrix4::new_translation(&Vector3::new(center[0], center[1], 0.0));
        self.transformed(&(back * rotation * to_origin))
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Region {
        self.transformed(&Matrix4::new_translation(&Vector3::new(dx, dy, 0.0)))
    }

    /// Filled polygons with their holes
    pub fn outlines(&self) -> Vec<Outline> {
        self.area
            .to_multipolygon()
            .0
            .iter()
            .map(|poly| Outline {
                exterior: poly.exterior().0.iter().map(|c| [c.x, c.y]).collect(),
                holes: poly
                    .interiors()
                    .iter()
                    .map(|ring| ring.0.iter().map(|c| [c.x, c.y]).collect())
                    .collect(),
            })
            .collect()
    }

    /// Open polylines
    pub fn strokes(&self) -> &[Vec<[f64; 2]>] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.outlines().iter().all(|o| o.exterior.is_empty())
    }

    /// Filled area in square pixels
    pub fn area(&self) -> f64 {
        self.outlines().iter().map(Outline::area).sum()
    }

    /// Bounding rectangle of filled and stroked geometry
    pub fn bounds(&self) -> Option<Rect> {
        let outlines = self.outlines();
        let mut vertices = outlines
            .iter()
            .flat_map(|o| o.exterior.iter())
            .chain(self.strokes.iter().flatten());

        let first = vertices.next()?;
        let (mut min, mut max) = (*first, *first);
        for v in vertices {
            min = [min[0].min(v[0]), min[1].min(v[1])];
            max = [max[0].max(v[0]), max[1].max(v[1])];
        }
        Some(Rect::from_corners(min, max))
    }

    /// Whether the filled area covers the given position
    pub fn contains(&self, x: f64, y: f64) -> bool {
        lyon::algorithms::hit_test::hit_test_path(
            &point(x as f32, y as f32),
            self.fill_path().iter(),
            FillRule::EvenOdd,
            0.01,
        )
    }

    /// Closed rings only, for filling and hit testing
    pub fn fill_path(&self) -> Path {
        let outlines = self.outlines();
        let rings = outlines
            .iter()
            .flat_map(|o| std::iter::once(&o.exterior).chain(o.holes.iter()));
        build_path(rings.map(|ring| (ring.as_slice(), true)))
    }

    /// Closed rings followed by open strokes, for outlining
    pub fn to_path(&self) -> Path {
        let outlines = self.outlines();
        let rings = outlines
            .iter()
            .flat_map(|o| std::iter::once(&o.exterior).chain(o.holes.iter()))
            .map(|ring| (ring.as_slice(), true));
        let strokes = self.strokes.iter().map(|line| (line.as_slice(), false));
        build_path(rings.chain(strokes))
    }
}

fn build_path<'a>(lines: impl Iterator<Item = (&'a [[f64; 2]], bool)>) -> Path {
    let mut builder = Path::builder();
    for (line, closed) in lines {
        let Some((head, tail)) = line.split_first() else {
            continue;
        };
        builder.begin(point(head[0] as f32, head[1] as f32));
        for v in tail {
            builder.line_to(point(v[0] as f32, v[1] as f32));
        }
        if closed {
            builder.close();
        } else {
            builder.end(false);
        }
    }
    builder.build()
}

fn same_vertex(a: [f64; 2], b: [f64; 2]) -> bool {
    (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
}

/// Unsigned shoelace area of a ring
fn ring_area(ring: &[[f64; 2]]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        twice += a[0] * b[1] - b[0] * a[1];
    }
    (twice / 2.0).abs()
}
