use crate::geometry::Region;

/// Constructive area operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Difference,
    Intersection,
}

pub fn perform_boolean(a: &Region, b: &Region, op: BooleanOp) -> Region {
    match op {
        BooleanOp::Union => a.union(b),
        BooleanOp::Difference => a.subtract(b),
        BooleanOp::Intersection => a.intersect(b),
    }
}

/// Union every region into one, so a feature class paints in a single call
pub fn union_all(regions: impl IntoIterator<Item = Region>) -> Region {
    regions
        .into_iter()
        .fold(Region::empty(), |acc, r| perform_boolean(&acc, &r, BooleanOp::Union))
}

/// Subtract every cutout from `base`
pub fn subtract_all<'a>(base: Region, cutouts: impl IntoIterator<Item = &'a Region>) -> Region {
    cutouts
        .into_iter()
        .fold(base, |acc, c| perform_boolean(&acc, c, BooleanOp::Difference))
}
