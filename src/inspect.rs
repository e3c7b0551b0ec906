//! Footprint inspection summaries
//!
//! Builds one footprint from a family name and `name=value` assignments and
//! reports its control points, properties and synthesized regions.

use serde::Serialize;
use tracing::debug;

use perfkit_core::{Error, Result};
use perfkit_footprint::{
    ControlPointMeta, FamilyKind, Footprint, Point, Property, Rect, RegionRole,
};
use perfkit_settings::FootprintDefaults;

/// Serializable snapshot of one footprint
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub family: FamilyKind,
    pub control_points: Vec<ControlPointSummary>,
    pub properties: Vec<Property>,
    pub regions: Vec<RegionSummary>,
    /// Pad count of a perforated board
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pads: Option<usize>,
    pub body_generation: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlPointSummary {
    pub point: Point,
    #[serde(flatten)]
    pub meta: ControlPointMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionSummary {
    pub role: RegionRole,
    pub bounds: Option<Rect>,
    pub area: f64,
    pub outlines: usize,
    pub holes: usize,
    pub strokes: usize,
}

/// Split a `name=value` argument
pub fn parse_assignment(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(Error::other(format!(
            "Expected name=value, got '{}'",
            arg
        ))),
    }
}

/// Build a footprint of `family` at the origin and apply `assignments` in order
pub fn build(
    family: &str,
    assignments: &[(String, String)],
    defaults: &FootprintDefaults,
) -> Result<Footprint> {
    let kind: FamilyKind = family.parse()?;
    let mut footprint = Footprint::new(kind, Point::default(), defaults);
    for (name, value) in assignments {
        let change = footprint.set_property_str(name, value)?;
        debug!("Set {}.{} = {} ({:?})", kind, name, value, change);
    }
    Ok(footprint)
}

/// Summarize a footprint, synthesizing its body if needed
pub fn inspect(footprint: &mut Footprint) -> Inspection {
    let body = footprint.body();
    let regions = body
        .iter()
        .map(|(role, region)| {
            let outlines = region.outlines();
            RegionSummary {
                role,
                bounds: region.bounds(),
                area: region.area(),
                holes: outlines.iter().map(|o| o.holes.len()).sum(),
                outlines: outlines.len(),
                strokes: region.strokes().len(),
            }
        })
        .collect();

    let control_points = footprint
        .control_points()
        .iter()
        .enumerate()
        .map(|(index, &point)| ControlPointSummary {
            point,
            meta: footprint.control_point_meta(index),
        })
        .collect();

    let pads = match footprint {
        Footprint::PerfBoard(board) => Some(board.pad_grid().len()),
        _ => None,
    };

    Inspection {
        family: footprint.kind(),
        control_points,
        properties: footprint.properties(),
        regions,
        pads,
        body_generation: footprint.body_generation(),
    }
}
