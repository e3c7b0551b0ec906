//! Terminal strip
//!
//! A row of paired solder lugs riveted to an insulating board. Each terminal
//! spans two control points one hole spacing apart; with the center hole
//! enabled a third point marks the middle of each terminal.

use perfkit_core::{Color, ParameterError, Result, Size};
use perfkit_settings::{TerminalStripDefaults, TERMINAL_COUNT_RANGE};

use super::{Change, Family, FamilyKind, Property, PropertyValue};
use crate::body::{Body, RegionRole};
use crate::control_points::{row_layout, ControlPointMeta, VisibilityPolicy};
use crate::geometry::{nearest_odd, ordered_corners, Orientation, Point, Rect, Region};
use crate::ops::{subtract_all, union_all};

const META: ControlPointMeta = ControlPointMeta::new(true, VisibilityPolicy::Never);

#[derive(Debug, Clone, PartialEq)]
pub struct TerminalStrip {
    orientation: Orientation,
    terminal_count: usize,
    center_hole: bool,
    board_width: Size,
    terminal_spacing: Size,
    hole_spacing: Size,
    hole_size: Size,
    mounting_hole_size: Size,
    edge_radius: Size,
    board_color: Color,
    border_color: Color,
    terminal_color: Color,
}

impl TerminalStrip {
    pub fn new(defaults: &TerminalStripDefaults) -> Self {
        Self {
            orientation: Orientation::Default,
            terminal_count: defaults.terminal_count,
            center_hole: defaults.center_hole,
            board_width: defaults.board_width,
            terminal_spacing: defaults.terminal_spacing,
            hole_spacing: defaults.hole_spacing,
            hole_size: defaults.hole_size,
            mounting_hole_size: defaults.mounting_hole_size,
            edge_radius: defaults.edge_radius,
            board_color: defaults.board_color,
            border_color: defaults.board_color.darker(),
            terminal_color: defaults.terminal_color,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn terminal_count(&self) -> usize {
        self.terminal_count
    }

    pub fn center_hole(&self) -> bool {
        self.center_hole
    }

    pub fn board_width(&self) -> Size {
        self.board_width
    }

    pub fn terminal_spacing(&self) -> Size {
        self.terminal_spacing
    }

    pub fn hole_spacing(&self) -> Size {
        self.hole_spacing
    }

    pub fn board_color(&self) -> Color {
        self.board_color
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn terminal_color(&self) -> Color {
        self.terminal_color
    }

    /// Control points per terminal
    pub fn rows(&self) -> usize {
        if self.center_hole {
            3
        } else {
            2
        }
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> Change {
        self.orientation = orientation;
        Change::Topology
    }

    pub fn set_terminal_count(&mut self, count: usize) -> Result<Change> {
        if !TERMINAL_COUNT_RANGE.contains(&count) {
            return Err(ParameterError::CountOutOfRange {
                name: "terminal_count".to_string(),
                value: count,
                min: *TERMINAL_COUNT_RANGE.start(),
                max: *TERMINAL_COUNT_RANGE.end(),
            }
            .into());
        }
        self.terminal_count = count;
        Ok(Change::Topology)
    }

    pub fn set_center_hole(&mut self, center_hole: bool) -> Change {
        self.center_hole = center_hole;
        Change::Topology
    }

    pub fn set_board_width(&mut self, width: Size) -> Result<Change> {
        self.board_width = width.ensure_device_px("board_width")?;
        Ok(Change::Geometry)
    }

    pub fn set_terminal_spacing(&mut self, spacing: Size) -> Result<Change> {
        self.terminal_spacing = spacing.ensure_device_px("terminal_spacing")?;
        Ok(Change::Topology)
    }

    pub fn set_hole_spacing(&mut self, spacing: Size) -> Result<Change> {
        self.hole_spacing = spacing.ensure_device_px("hole_spacing")?;
        Ok(Change::Topology)
    }

    pub fn set_board_color(&mut self, color: Color) -> Change {
        self.board_color = color;
        Change::Style
    }

    pub fn set_border_color(&mut self, color: Color) -> Change {
        self.border_color = color;
        Change::Style
    }

    pub fn set_terminal_color(&mut self, color: Color) -> Change {
        self.terminal_color = color;
        Change::Style
    }
}

impl Default for TerminalStrip {
    fn default() -> Self {
        Self::new(&TerminalStripDefaults::default())
    }
}

impl Family for TerminalStrip {
    fn kind(&self) -> FamilyKind {
        FamilyKind::TerminalStrip
    }

    fn regenerate_control_points(&self, first: Point) -> Vec<Point> {
        let spacing = self.terminal_spacing.to_device_px();
        let hole_spacing = self.hole_spacing.to_device_px();
        let rows: &[i32] = if self.center_hole {
            &[0, hole_spacing, hole_spacing / 2]
        } else {
            &[0, hole_spacing]
        };
        row_layout(
            self.orientation.frame(),
            first,
            self.terminal_count,
            spacing,
            rows,
        )
    }

    fn synthesize_body(&self, points: &[Point]) -> Body {
        let Some(&origin) = points.first() else {
            return Body::new();
        };
        let frame = self.orientation.frame();
        let count = self.terminal_count;
        let spacing = self.terminal_spacing.to_device_px() as f64;
        let board_width = self.board_width.to_device();
        let middle = self.hole_spacing.to_device_px() as f64 / 2.0;
        let last = (count.saturating_sub(1)) as f64 * spacing;

        let outline = frame.place(
            origin,
            (-board_width, last + board_width),
            (middle - board_width / 2.0, middle + board_width / 2.0),
        );
        let board = Region::rounded_rect(outline, self.edge_radius.to_device());

        let mounting = nearest_odd(self.mounting_hole_size.to_device()) as f64;
        let mut board_cutouts = vec![
            Region::circle(frame.map(origin, -board_width / 2.0, middle), mounting),
            Region::circle(frame.map(origin, last + board_width / 2.0, middle), mounting),
        ];

        let hole = nearest_odd(self.hole_size.to_device()) as f64;
        let mut terminals = Vec::with_capacity(count);
        for i in 0..count {
            let (Some(&a), Some(&b)) = (points.get(i), points.get(i + count)) else {
                break;
            };
            let (lo, hi) = ordered_corners(a, b);
            let lug = Region::rounded_rect(
                Rect::from_corners(
                    [lo.x as f64 - hole, lo.y as f64 - hole],
                    [hi.x as f64 + hole, hi.y as f64 + hole],
                ),
                hole,
            );
            let mut holes = vec![
                Region::circle(a.to_f64(), hole),
                Region::circle(b.to_f64(), hole),
            ];
            if self.center_hole {
                if let Some(&center) = points.get(i + 2 * count) {
                    let center_hole = Region::circle(center.to_f64(), hole);
                    board_cutouts.push(center_hole.clone());
                    holes.push(center_hole);
                }
            }
            terminals.push(subtract_all(lug, &holes));
        }

        Body::new()
            .with(RegionRole::Board, subtract_all(board, &board_cutouts))
            .with(RegionRole::Terminals, union_all(terminals))
    }

    fn control_point_meta(&self, _index: usize) -> ControlPointMeta {
        META
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("orientation", PropertyValue::Orientation(self.orientation)),
            Property::new(
                "terminal_count",
                PropertyValue::Number(self.terminal_count as f64),
            ),
            Property::new("center_hole", PropertyValue::Bool(self.center_hole)),
            Property::new("board_width", PropertyValue::Size(self.board_width)),
            Property::new("terminal_spacing", PropertyValue::Size(self.terminal_spacing)),
            Property::new("hole_spacing", PropertyValue::Size(self.hole_spacing)),
            Property::new("board_color", PropertyValue::Color(self.board_color)),
            Property::new("border_color", PropertyValue::Color(self.border_color)),
            Property::new("terminal_color", PropertyValue::Color(self.terminal_color)),
        ]
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<Change> {
        match name {
            "orientation" => Ok(self.set_orientation(value.as_orientation(name)?)),
            "terminal_count" => self.set_terminal_count(value.as_count(name)?),
            "center_hole" => Ok(self.set_center_hole(value.as_bool(name)?)),
            "board_width" => self.set_board_width(value.as_size(name)?),
            "terminal_spacing" => self.set_terminal_spacing(value.as_size(name)?),
            "hole_spacing" => self.set_hole_spacing(value.as_size(name)?),
            "board_color" => Ok(self.set_board_color(value.as_color(name)?)),
            "border_color" => Ok(self.set_border_color(value.as_color(name)?)),
            "terminal_color" => Ok(self.set_terminal_color(value.as_color(name)?)),
            _ => Err(ParameterError::UnknownProperty(name.to_string()).into()),
        }
    }
}
