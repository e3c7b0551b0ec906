//! Synthesized footprint bodies
//!
//! A body is an ordered list of regions. Each index has a fixed paint role
//! for its family (board, terminals, pins...), which external painters rely
//! on to style regions differently.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::geometry::{Rect, Region};

/// Paint role of one body region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionRole {
    /// Board outline with mounting and center holes cut out
    Board,
    /// Union of all terminal lugs
    Terminals,
    /// Package outline
    Outline,
    /// Pin 1 indent
    Notch,
    /// Union of all pin pads
    Pins,
    /// Turret lug ring
    Lug,
    /// Drilled hole
    Hole,
    /// Connection dot
    Dot,
    /// Trace cut mark
    Cut,
    /// Component body
    Body,
    /// Component leads
    Leads,
    /// Polarity marking
    Marking,
}

/// Ordered regions of one footprint
#[derive(Debug, Clone, Default)]
pub struct Body {
    parts: SmallVec<[(RegionRole, Region); 3]>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region, builder style
    pub fn with(mut self, role: RegionRole, region: Region) -> Self {
        self.push(role, region);
        self
    }

    pub fn push(&mut self, role: RegionRole, region: Region) {
        self.parts.push((role, region));
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Region at a fixed index
    pub fn get(&self, index: usize) -> Option<&Region> {
        self.parts.get(index).map(|(_, region)| region)
    }

    pub fn role(&self, index: usize) -> Option<RegionRole> {
        self.parts.get(index).map(|(role, _)| *role)
    }

    /// First region with the given role
    pub fn region(&self, role: RegionRole) -> Option<&Region> {
        self.parts
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, region)| region)
    }

    pub fn roles(&self) -> Vec<RegionRole> {
        self.parts.iter().map(|(role, _)| *role).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionRole, &Region)> {
        self.parts.iter().map(|(role, region)| (*role, region))
    }

    /// Bounds of every region together
    pub fn bounds(&self) -> Option<Rect> {
        self.parts
            .iter()
            .filter_map(|(_, region)| region.bounds())
            .reduce(|a, b| a.union(&b))
    }
}
