//! Heterogeneous footprint container
//!
//! A layout holds many families side by side. `Footprint` wraps one
//! component of each family and forwards the shared interface by `match`.

use std::sync::Arc;

use perfkit_core::Result;
use perfkit_settings::FootprintDefaults;

use super::{
    Change, Component, DipIc, Dot, FamilyKind, Leaded, LeadedStyle, PerfBoard, Property,
    PropertyValue, TerminalStrip, TraceCut, Turret,
};
use crate::body::Body;
use crate::control_points::ControlPointMeta;
use crate::geometry::Point;

#[derive(Debug, Clone)]
pub enum Footprint {
    TerminalStrip(Component<TerminalStrip>),
    DipIc(Component<DipIc>),
    PerfBoard(Component<PerfBoard>),
    Turret(Component<Turret>),
    Dot(Component<Dot>),
    TraceCut(Component<TraceCut>),
    Leaded(Component<Leaded>),
}

impl Footprint {
    /// Place a new footprint of `kind` with its first control point at `anchor`
    ///
    /// `defaults` are used as given; every loader runs
    /// [`FootprintDefaults::validate`] before handing them out.
    pub fn new(kind: FamilyKind, anchor: Point, defaults: &FootprintDefaults) -> Self {
        match kind {
            FamilyKind::TerminalStrip => Footprint::TerminalStrip(Component::new(
                TerminalStrip::new(&defaults.terminal_strip),
                anchor,
            )),
            FamilyKind::DipIc => {
                Footprint::DipIc(Component::new(DipIc::new(&defaults.dip_ic), anchor))
            }
            FamilyKind::PerfBoard => Footprint::PerfBoard(Component::new(
                PerfBoard::new(&defaults.perf_board),
                anchor,
            )),
            FamilyKind::Turret => {
                Footprint::Turret(Component::new(Turret::new(&defaults.turret), anchor))
            }
            FamilyKind::Dot => Footprint::Dot(Component::new(Dot::new(&defaults.dot), anchor)),
            FamilyKind::TraceCut => {
                Footprint::TraceCut(Component::new(TraceCut::new(&defaults.trace_cut), anchor))
            }
            FamilyKind::AxialFilm => leaded(LeadedStyle::AxialFilm, anchor, defaults),
            FamilyKind::RadialFilm => leaded(LeadedStyle::RadialFilm, anchor, defaults),
            FamilyKind::CeramicDisk => leaded(LeadedStyle::CeramicDisk, anchor, defaults),
            FamilyKind::CapacitorSymbol => leaded(LeadedStyle::CapacitorSymbol, anchor, defaults),
        }
    }

    pub fn kind(&self) -> FamilyKind {
        match self {
            Footprint::TerminalStrip(_) => FamilyKind::TerminalStrip,
            Footprint::DipIc(_) => FamilyKind::DipIc,
            Footprint::PerfBoard(_) => FamilyKind::PerfBoard,
            Footprint::Turret(_) => FamilyKind::Turret,
            Footprint::Dot(_) => FamilyKind::Dot,
            Footprint::TraceCut(_) => FamilyKind::TraceCut,
            Footprint::Leaded(c) => c.family().style().kind(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn control_points(&self) -> &[Point] {
        match self {
            Footprint::TerminalStrip(c) => c.control_points(),
            Footprint::DipIc(c) => c.control_points(),
            Footprint::PerfBoard(c) => c.control_points(),
            Footprint::Turret(c) => c.control_points(),
            Footprint::Dot(c) => c.control_points(),
            Footprint::TraceCut(c) => c.control_points(),
            Footprint::Leaded(c) => c.control_points(),
        }
    }

    pub fn control_point_count(&self) -> usize {
        self.control_points().len()
    }

    pub fn control_point(&self, index: usize) -> Option<Point> {
        self.control_points().get(index).copied()
    }

    pub fn set_control_point(&mut self, index: usize, point: Point) -> Result<()> {
        match self {
            Footprint::TerminalStrip(c) => c.set_control_point(index, point),
            Footprint::DipIc(c) => c.set_control_point(index, point),
            Footprint::PerfBoard(c) => c.set_control_point(index, point),
            Footprint::Turret(c) => c.set_control_point(index, point),
            Footprint::Dot(c) => c.set_control_point(index, point),
            Footprint::TraceCut(c) => c.set_control_point(index, point),
            Footprint::Leaded(c) => c.set_control_point(index, point),
        }
    }

    pub fn control_point_meta(&self, index: usize) -> ControlPointMeta {
        match self {
            Footprint::TerminalStrip(c) => c.control_point_meta(index),
            Footprint::DipIc(c) => c.control_point_meta(index),
            Footprint::PerfBoard(c) => c.control_point_meta(index),
            Footprint::Turret(c) => c.control_point_meta(index),
            Footprint::Dot(c) => c.control_point_meta(index),
            Footprint::TraceCut(c) => c.control_point_meta(index),
            Footprint::Leaded(c) => c.control_point_meta(index),
        }
    }

    pub fn body(&mut self) -> Arc<Body> {
        match self {
            Footprint::TerminalStrip(c) => c.body(),
            Footprint::DipIc(c) => c.body(),
            Footprint::PerfBoard(c) => c.body(),
            Footprint::Turret(c) => c.body(),
            Footprint::Dot(c) => c.body(),
            Footprint::TraceCut(c) => c.body(),
            Footprint::Leaded(c) => c.body(),
        }
    }

    pub fn is_body_fresh(&self) -> bool {
        match self {
            Footprint::TerminalStrip(c) => c.is_body_fresh(),
            Footprint::DipIc(c) => c.is_body_fresh(),
            Footprint::PerfBoard(c) => c.is_body_fresh(),
            Footprint::Turret(c) => c.is_body_fresh(),
            Footprint::Dot(c) => c.is_body_fresh(),
            Footprint::TraceCut(c) => c.is_body_fresh(),
            Footprint::Leaded(c) => c.is_body_fresh(),
        }
    }

    pub fn body_generation(&self) -> u64 {
        match self {
            Footprint::TerminalStrip(c) => c.body_generation(),
            Footprint::DipIc(c) => c.body_generation(),
            Footprint::PerfBoard(c) => c.body_generation(),
            Footprint::Turret(c) => c.body_generation(),
            Footprint::Dot(c) => c.body_generation(),
            Footprint::TraceCut(c) => c.body_generation(),
            Footprint::Leaded(c) => c.body_generation(),
        }
    }

    pub fn properties(&self) -> Vec<Property> {
        match self {
            Footprint::TerminalStrip(c) => c.properties(),
            Footprint::DipIc(c) => c.properties(),
            Footprint::PerfBoard(c) => c.properties(),
            Footprint::Turret(c) => c.properties(),
            Footprint::Dot(c) => c.properties(),
            Footprint::TraceCut(c) => c.properties(),
            Footprint::Leaded(c) => c.properties(),
        }
    }

    pub fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<Change> {
        match self {
            Footprint::TerminalStrip(c) => c.set_property(name, value),
            Footprint::DipIc(c) => c.set_property(name, value),
            Footprint::PerfBoard(c) => c.set_property(name, value),
            Footprint::Turret(c) => c.set_property(name, value),
            Footprint::Dot(c) => c.set_property(name, value),
            Footprint::TraceCut(c) => c.set_property(name, value),
            Footprint::Leaded(c) => c.set_property(name, value),
        }
    }

    pub fn set_property_str(&mut self, name: &str, input: &str) -> Result<Change> {
        match self {
            Footprint::TerminalStrip(c) => c.set_property_str(name, input),
            Footprint::DipIc(c) => c.set_property_str(name, input),
            Footprint::PerfBoard(c) => c.set_property_str(name, input),
            Footprint::Turret(c) => c.set_property_str(name, input),
            Footprint::Dot(c) => c.set_property_str(name, input),
            Footprint::TraceCut(c) => c.set_property_str(name, input),
            Footprint::Leaded(c) => c.set_property_str(name, input),
        }
    }

    pub fn is_control_point_sticky(&self, index: usize) -> bool {
        self.control_point_meta(index).sticky
    }
}

fn leaded(style: LeadedStyle, anchor: Point, defaults: &FootprintDefaults) -> Footprint {
    Footprint::Leaded(Component::new(Leaded::new(style, &defaults.leaded), anchor))
}
