use std::sync::Arc;

use tracing::{debug, trace};

use perfkit_core::{ParameterError, Result};

use super::{Change, Family, Property, PropertyValue};
use crate::body::Body;
use crate::cache::BodyCache;
use crate::control_points::{ControlPointMeta, VisibilityPolicy};
use crate::geometry::Point;

/// One placed footprint: family parameters, control points and cached body.
///
/// All parameter edits go through [`Component::update`] or
/// [`Component::set_property`], which regenerate control points and
/// invalidate the body according to the returned [`Change`].
#[derive(Debug, Clone)]
pub struct Component<F: Family> {
    family: F,
    points: Vec<Point>,
    cache: BodyCache,
}

impl<F: Family> Component<F> {
    pub fn new(family: F, anchor: Point) -> Self {
        let points = family.regenerate_control_points(anchor);
        debug!(
            "Placed {} at ({}, {}) with {} control points",
            family.kind(),
            anchor.x,
            anchor.y,
            points.len()
        );
        Self {
            family,
            points,
            cache: BodyCache::new(),
        }
    }

    /// Restore a component whose control points were stored earlier
    pub fn with_control_points(family: F, points: Vec<Point>) -> Result<Self> {
        let first = points.first().copied().unwrap_or_default();
        let expected = family.regenerate_control_points(first).len();
        if points.len() != expected {
            return Err(ParameterError::ControlPointCount {
                expected,
                actual: points.len(),
            }
            .into());
        }
        Ok(Self {
            family,
            points,
            cache: BodyCache::new(),
        })
    }

    pub fn family(&self) -> &F {
        &self.family
    }

    pub fn name(&self) -> &'static str {
        self.family.kind().name()
    }

    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    pub fn control_point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Current control points. A topology change replaces this slice.
    pub fn control_points(&self) -> &[Point] {
        &self.points
    }

    /// Move one control point.
    ///
    /// Moving the first point of an anchored layout moves the whole
    /// footprint; any other point moves alone.
    pub fn set_control_point(&mut self, index: usize, point: Point) -> Result<()> {
        if index >= self.points.len() {
            return Err(ParameterError::ControlPointOutOfRange {
                index,
                count: self.points.len(),
            }
            .into());
        }

        if index == 0 && self.family.anchored_layout() {
            self.points = self.family.regenerate_control_points(point);
        } else {
            self.points[index] = point;
        }
        self.cache.invalidate();
        Ok(())
    }

    pub fn control_point_meta(&self, index: usize) -> ControlPointMeta {
        self.family.control_point_meta(index)
    }

    pub fn is_control_point_sticky(&self, index: usize) -> bool {
        self.control_point_meta(index).sticky
    }

    pub fn control_point_visibility(&self, index: usize) -> VisibilityPolicy {
        self.control_point_meta(index).visibility
    }

    /// The synthesized body, from cache when fresh
    pub fn body(&mut self) -> Arc<Body> {
        let family = &self.family;
        let points = self.points.as_slice();
        self.cache.get_or_synthesize(|| {
            let body = family.synthesize_body(points);
            debug!(
                "Synthesized {} body with {} regions",
                family.kind(),
                body.len()
            );
            body
        })
    }

    pub fn is_body_fresh(&self) -> bool {
        self.cache.is_fresh()
    }

    /// Number of times the body has been synthesized
    pub fn body_generation(&self) -> u64 {
        self.cache.generation()
    }

    /// Apply a typed parameter edit.
    ///
    /// ```ignore
    /// strip.update(|s| s.set_terminal_count(12))?;
    /// ```
    pub fn update(&mut self, edit: impl FnOnce(&mut F) -> Result<Change>) -> Result<Change> {
        let change = edit(&mut self.family)?;
        self.apply(change);
        Ok(change)
    }

    pub fn properties(&self) -> Vec<Property> {
        self.family.properties()
    }

    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties()
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.value)
    }

    pub fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<Change> {
        self.update(|family| family.set_property(name, value))
    }

    /// Set a property from text, parsed as the property's current kind
    pub fn set_property_str(&mut self, name: &str, input: &str) -> Result<Change> {
        let current = self
            .property(name)
            .ok_or_else(|| ParameterError::UnknownProperty(name.to_string()))?;
        let value = current.parse_like(name, input)?;
        self.set_property(name, value)
    }

    fn apply(&mut self, change: Change) {
        trace!("{} parameter change: {:?}", self.family.kind(), change);
        match change {
            Change::Style => {}
            Change::Geometry => self.cache.invalidate(),
            Change::Topology => {
                let first = self.points.first().copied().unwrap_or_default();
                self.points = self.family.regenerate_control_points(first);
                self.cache.invalidate();
            }
        }
    }
}
