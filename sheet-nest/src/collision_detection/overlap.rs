use crate::geometry::convex_hull::convex_hull_from_points;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Outline, Point};
use serde::{Deserialize, Serialize};

/// Capability to decide whether two outlines overlap.
///
/// Every implementation first applies the inclusive bounding box test: outlines whose bounding boxes
/// do not collide never overlap. [`OverlapTest::refine`] is only consulted for pairs whose boxes collide.
/// Boundary contact always counts as overlap.
pub trait OverlapTest {
    /// If false, a bounding box collision is decisive and [`OverlapTest::refine`] never inspects the outlines.
    const SHAPE_AWARE: bool;

    /// Shape-level check for two outlines whose bounding boxes are known to collide.
    fn refine(&self, a: &Outline, b: &Outline) -> bool;

    fn overlaps(&self, a: &Outline, b: &Outline) -> bool {
        a.bbox().collides_with(&b.bbox()) && self.refine(a, b)
    }
}

/// Axis-aligned bounding box test.
///
/// Fast but conservative: rejections are sound (real overlap implies box overlap),
/// but two shapes whose boxes intersect are rejected even when the shapes themselves are disjoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct BBoxOverlap;

impl OverlapTest for BBoxOverlap {
    const SHAPE_AWARE: bool = false;

    fn refine(&self, _a: &Outline, _b: &Outline) -> bool {
        true
    }
}

/// Separating axis test between the convex hulls of both outlines.
///
/// Exact for convex outlines. For concave outlines the hull over-approximates the shape,
/// so the test stays conservative while being much tighter than [`BBoxOverlap`] for rotated or elongated shapes.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullOverlap;

impl OverlapTest for HullOverlap {
    const SHAPE_AWARE: bool = true;

    fn refine(&self, a: &Outline, b: &Outline) -> bool {
        let hull_a = convex_hull_from_points(a.points().to_vec());
        let hull_b = convex_hull_from_points(b.points().to_vec());
        hulls_overlap(&hull_a, &hull_b)
    }
}

/// Selects the [`OverlapTest`] used during the placement search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapMode {
    /// [`BBoxOverlap`]
    #[default]
    #[serde(rename = "bbox")]
    BBox,
    /// [`HullOverlap`]
    Hull,
}

/// Separating axis theorem for two convex point sets (as returned by [`convex_hull_from_points`]).
/// Hulls that only touch are considered overlapping.
pub fn hulls_overlap(a: &[Point], b: &[Point]) -> bool {
    !candidate_axes(a).chain(candidate_axes(b)).any(|axis| {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        max_a < min_b || max_b < min_a
    })
}

/// Edge normals of the hull. A hull of two points (a segment) also needs its own direction as axis.
fn candidate_axes(hull: &[Point]) -> impl Iterator<Item = (f64, f64)> + '_ {
    let n = hull.len();
    (0..n)
        .flat_map(move |i| {
            let Point(x1, y1) = hull[i];
            let Point(x2, y2) = hull[(i + 1) % n];
            let (ex, ey) = (x2 - x1, y2 - y1);
            let direction = (n == 2).then_some((ex, ey));
            std::iter::once((-ey, ex)).chain(direction)
        })
        .filter(|&(ax, ay)| ax != 0.0 || ay != 0.0)
}

fn project(hull: &[Point], (ax, ay): (f64, f64)) -> (f64, f64) {
    hull.iter()
        .map(|p| p.0 * ax + p.1 * ay)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}
