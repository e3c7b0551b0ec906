//! Perforated board
//!
//! The board body is just the rectangle between two free corners. Pads are
//! far too numerous to keep as one region, so [`PadGrid`] lays them out on
//! demand and only for the part of the board a caller asks about.

use std::ops::Range;

use perfkit_core::{Color, ParameterError, Result, Size};
use perfkit_settings::PerfBoardDefaults;

use super::{Change, Component, Family, FamilyKind, Property, PropertyValue};
use crate::body::{Body, RegionRole};
use crate::control_points::{ControlPointMeta, VisibilityPolicy};
use crate::geometry::{nearest_odd, ordered_corners, Point, Rect, Region};

const META: ControlPointMeta = ControlPointMeta::new(false, VisibilityPolicy::WhenSelected);

#[derive(Debug, Clone, PartialEq)]
pub struct PerfBoard {
    spacing: Size,
    pad_size: Size,
    hole_size: Size,
    width: Size,
    height: Size,
    board_color: Color,
    border_color: Color,
    pad_color: Color,
}

impl PerfBoard {
    pub fn new(defaults: &PerfBoardDefaults) -> Self {
        Self {
            spacing: defaults.spacing,
            pad_size: defaults.pad_size,
            hole_size: defaults.hole_size,
            width: defaults.width,
            height: defaults.height,
            board_color: defaults.board_color,
            border_color: defaults.board_color.darker(),
            pad_color: defaults.pad_color,
        }
    }

    pub fn spacing(&self) -> Size {
        self.spacing
    }

    pub fn pad_size(&self) -> Size {
        self.pad_size
    }

    pub fn hole_size(&self) -> Size {
        self.hole_size
    }

    pub fn board_color(&self) -> Color {
        self.board_color
    }

    pub fn pad_color(&self) -> Color {
        self.pad_color
    }

    pub fn set_spacing(&mut self, spacing: Size) -> Result<Change> {
        self.spacing = spacing.ensure_device_px("spacing")?;
        Ok(Change::Geometry)
    }

    pub fn set_pad_size(&mut self, size: Size) -> Result<Change> {
        self.pad_size = size.ensure_device_px("pad_size")?;
        Ok(Change::Geometry)
    }

    pub fn set_hole_size(&mut self, size: Size) -> Result<Change> {
        self.hole_size = size.ensure_device_px("hole_size")?;
        Ok(Change::Geometry)
    }

    pub fn set_board_color(&mut self, color: Color) -> Change {
        self.board_color = color;
        Change::Style
    }

    pub fn set_border_color(&mut self, color: Color) -> Change {
        self.border_color = color;
        Change::Style
    }

    pub fn set_pad_color(&mut self, color: Color) -> Change {
        self.pad_color = color;
        Change::Style
    }

    /// Pad lattice for a board spanning two corners given in any order
    pub fn pad_grid(&self, first: Point, second: Point) -> PadGrid {
        let (lo, hi) = ordered_corners(first, second);
        let spacing = self.spacing.to_device_px().max(1);
        let diameter = nearest_odd(self.pad_size.to_device());
        let hole_diameter = nearest_odd(self.hole_size.to_device());

        PadGrid {
            origin: lo,
            spacing,
            rows: lattice_count(
                i64::from(hi.y) - i64::from(lo.y) - i64::from(spacing),
                spacing,
            ),
            columns: lattice_count(
                i64::from(hi.x) - i64::from(lo.x) - i64::from(spacing) - i64::from(diameter),
                spacing,
            ),
            diameter,
            hole_diameter,
        }
    }
}

impl Default for PerfBoard {
    fn default() -> Self {
        Self::new(&PerfBoardDefaults::default())
    }
}

/// Number of lattice steps that start strictly before `limit`
fn lattice_count(limit: i64, spacing: i32) -> usize {
    let spacing = i64::from(spacing.max(1));
    if limit <= 0 {
        return 0;
    }
    usize::try_from((limit + spacing - 1) / spacing).unwrap_or(usize::MAX)
}

/// Coordinate of lattice index `k`, `origin + (k + 1) * spacing`, clamped to `i32`
fn lattice_coord(origin: i32, k: usize, spacing: i32) -> i32 {
    let k = i64::try_from(k).unwrap_or(i64::MAX);
    let step = k.saturating_add(1).saturating_mul(i64::from(spacing));
    let coord = i64::from(origin).saturating_add(step);
    coord.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Family for PerfBoard {
    fn kind(&self) -> FamilyKind {
        FamilyKind::PerfBoard
    }

    fn regenerate_control_points(&self, first: Point) -> Vec<Point> {
        vec![
            first,
            first.offset(self.width.to_device_px(), self.height.to_device_px()),
        ]
    }

    fn anchored_layout(&self) -> bool {
        false
    }

    fn synthesize_body(&self, points: &[Point]) -> Body {
        let (Some(&a), Some(&b)) = (points.first(), points.get(1)) else {
            return Body::new();
        };
        let board = Rect::from_corners(a.to_f64(), b.to_f64());
        Body::new().with(RegionRole::Board, Region::rect(board))
    }

    fn control_point_meta(&self, _index: usize) -> ControlPointMeta {
        META
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("spacing", PropertyValue::Size(self.spacing)),
            Property::new("pad_size", PropertyValue::Size(self.pad_size)),
            Property::new("hole_size", PropertyValue::Size(self.hole_size)),
            Property::new("board_color", PropertyValue::Color(self.board_color)),
            Property::new("border_color", PropertyValue::Color(self.border_color)),
            Property::new("pad_color", PropertyValue::Color(self.pad_color)),
        ]
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<Change> {
        match name {
            "spacing" => self.set_spacing(value.as_size(name)?),
            "pad_size" => self.set_pad_size(value.as_size(name)?),
            "hole_size" => self.set_hole_size(value.as_size(name)?),
            "board_color" => Ok(self.set_board_color(value.as_color(name)?)),
            "border_color" => Ok(self.set_border_color(value.as_color(name)?)),
            "pad_color" => Ok(self.set_pad_color(value.as_color(name)?)),
            _ => Err(ParameterError::UnknownProperty(name.to_string()).into()),
        }
    }
}

impl Component<PerfBoard> {
    /// Pad lattice for the board's current corners
    pub fn pad_grid(&self) -> PadGrid {
        let points = self.control_points();
        let first = points.first().copied().unwrap_or_default();
        let second = points.get(1).copied().unwrap_or(first);
        self.family().pad_grid(first, second)
    }
}

/// One copper pad with its drilled hole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pad {
    pub center: Point,
    pub diameter: i32,
    pub hole_diameter: i32,
}

impl Pad {
    pub fn region(&self) -> Region {
        Region::circle(self.center.to_f64(), self.diameter as f64)
            .subtract(&Region::circle(self.center.to_f64(), self.hole_diameter as f64))
    }
}

/// Procedural pad lattice of a perforated board.
///
/// Pads start one spacing in from the board's top-left corner. Nothing is
/// allocated; every query walks only the requested index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadGrid {
    origin: Point,
    spacing: i32,
    rows: usize,
    columns: usize,
    diameter: i32,
    hole_diameter: i32,
}

impl PadGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn pad(&self, row: usize, column: usize) -> Option<Pad> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.pad_unchecked(row, column))
    }

    fn pad_unchecked(&self, row: usize, column: usize) -> Pad {
        Pad {
            center: Point::new(
                lattice_coord(self.origin.x, column, self.spacing),
                lattice_coord(self.origin.y, row, self.spacing),
            ),
            diameter: self.diameter,
            hole_diameter: self.hole_diameter,
        }
    }

    /// Every pad, row by row
    pub fn iter(&self) -> impl Iterator<Item = Pad> + '_ {
        self.walk(0..self.rows, 0..self.columns)
    }

    /// Pads whose disc touches `clip`
    pub fn pads_in(&self, clip: Rect) -> impl Iterator<Item = Pad> + '_ {
        let radius = self.diameter as f64 / 2.0;
        let rows = self.index_range(clip.min_y(), clip.max_y(), self.origin.y, radius, self.rows);
        let columns = self.index_range(
            clip.min_x(),
            clip.max_x(),
            self.origin.x,
            radius,
            self.columns,
        );
        self.walk(rows, columns)
    }

    fn walk(&self, rows: Range<usize>, columns: Range<usize>) -> impl Iterator<Item = Pad> + '_ {
        rows.flat_map(move |row| {
            columns
                .clone()
                .map(move |column| self.pad_unchecked(row, column))
        })
    }

    /// Indices `k` whose pad center `origin + (k + 1) * spacing` lies within
    /// `radius` of `lo..=hi`
    fn index_range(&self, lo: f64, hi: f64, origin: i32, radius: f64, count: usize) -> Range<usize> {
        let spacing = self.spacing as f64;
        let first = ((lo - radius - origin as f64) / spacing - 1.0).ceil().max(0.0);
        let last = ((hi + radius - origin as f64) / spacing - 1.0).floor();
        if last < first || count == 0 {
            return 0..0;
        }
        let start = (first as usize).min(count);
        let end = (last as usize).saturating_add(1).min(count);
        start..end.max(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: i32, height: i32) -> PadGrid {
        PerfBoard::default().pad_grid(Point::new(0, 0), Point::new(width, height))
    }

    #[test]
    fn test_lattice_counts() {
        let grid = board(300, 240);
        assert_eq!(grid.spacing(), 20);
        assert_eq!(grid.columns(), 14);
        assert_eq!(grid.rows(), 11);
        assert_eq!(grid.len(), 154);
        assert_eq!(grid.iter().count(), 154);
    }

    #[test]
    fn test_small_board_has_no_pads() {
        assert!(board(20, 20).is_empty());
        assert!(board(0, 0).is_empty());
    }

    #[test]
    fn test_pad_positions_and_sizes() {
        let grid = board(300, 240);
        let pad = grid.pad(0, 0).unwrap();
        assert_eq!(pad.center, Point::new(20, 20));
        assert_eq!(pad.diameter, 17);
        assert_eq!(pad.hole_diameter, 5);
        assert_eq!(grid.pad(2, 3).unwrap().center, Point::new(80, 60));
        assert!(grid.pad(11, 0).is_none());
    }

    #[test]
    fn test_swapped_corners_same_grid() {
        let board = PerfBoard::default();
        let a = board.pad_grid(Point::new(10, 10), Point::new(310, 250));
        let b = board.pad_grid(Point::new(310, 250), Point::new(10, 10));
        let c = board.pad_grid(Point::new(310, 10), Point::new(10, 250));
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_clip_bounds_iteration() {
        let grid = board(300, 240);
        let clip = Rect::new(35.0, 35.0, 30.0, 10.0);
        let pads: Vec<Pad> = grid.pads_in(clip).collect();
        let centers: Vec<Point> = pads.iter().map(|p| p.center).collect();
        assert_eq!(
            centers,
            vec![Point::new(40, 40), Point::new(60, 40)]
        );

        let outside = Rect::new(1000.0, 1000.0, 50.0, 50.0);
        assert_eq!(grid.pads_in(outside).count(), 0);

        let everything = Rect::new(-100.0, -100.0, 1000.0, 1000.0);
        assert_eq!(grid.pads_in(everything).count(), grid.len());
    }

    #[test]
    fn test_clip_touching_pad_edge() {
        let grid = board(300, 240);
        // Pad (0, 0) spans 11.5..28.5
        let clip = Rect::new(0.0, 0.0, 12.0, 12.0);
        assert_eq!(grid.pads_in(clip).count(), 1);
        let clip = Rect::new(0.0, 0.0, 11.0, 11.0);
        assert_eq!(grid.pads_in(clip).count(), 0);
    }

    #[test]
    fn test_far_corners_do_not_overflow() {
        let grid = PerfBoard::default().pad_grid(
            Point::new(-2_000_000_000, -2_000_000_000),
            Point::new(2_000_000_000, 2_000_000_000),
        );
        assert_eq!(grid.rows(), 199_999_999);
        assert_eq!(grid.columns(), 199_999_999);

        let last = grid.pad(grid.rows() - 1, grid.columns() - 1).unwrap();
        assert_eq!(last.center, Point::new(1_999_999_980, 1_999_999_980));

        let near_origin: Vec<Point> = grid
            .pads_in(Rect::new(-5.0, -5.0, 10.0, 10.0))
            .map(|p| p.center)
            .collect();
        assert_eq!(near_origin, vec![Point::new(0, 0)]);
    }

    #[test]
    fn test_pad_region_has_hole() {
        let pad = board(300, 240).pad(0, 0).unwrap();
        let region = pad.region();
        assert!(region.contains(20.0, 26.0));
        assert!(!region.contains(20.0, 20.0));
    }

    #[test]
    fn test_body_is_board_only() {
        let board = PerfBoard::default();
        let points = board.regenerate_control_points(Point::new(0, 0));
        assert_eq!(points[1], Point::new(300, 240));
        let body = board.synthesize_body(&points);
        assert_eq!(body.roles(), vec![RegionRole::Board]);
        assert!((body.get(0).unwrap().area() - 72000.0).abs() < 1e-6);
    }
}
