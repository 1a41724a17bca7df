use crate::geometry::DTransformation;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Rect};
use crate::util::FPA;
use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The two kinds of flat shapes found in a drawing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineKind {
    /// A single edge between exactly two points
    OpenSegment,
    /// A sequence of at least two points with an implicit edge from the last point back to the first
    ClosedPolyline,
}

/// Ordered sequence of points representing a flat shape to be nested.
///
/// Always contains at least two points. The order of the points defines the edges
/// and is preserved by every transformation.
/// Transformations never modify an outline in place, they return a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    kind: OutlineKind,
    points: Vec<Point>,
}

impl Outline {
    pub fn open_segment(start: Point, end: Point) -> Self {
        Outline {
            kind: OutlineKind::OpenSegment,
            points: vec![start, end],
        }
    }

    pub fn closed_polyline(points: Vec<Point>) -> Result<Self> {
        Outline::try_new(OutlineKind::ClosedPolyline, points)
    }

    pub fn try_new(kind: OutlineKind, points: Vec<Point>) -> Result<Self> {
        match kind {
            OutlineKind::OpenSegment => ensure!(
                points.len() == 2,
                "an open segment requires exactly 2 points, got {}",
                points.len()
            ),
            OutlineKind::ClosedPolyline => ensure!(
                points.len() >= 2,
                "a closed polyline requires at least 2 points, got {}",
                points.len()
            ),
        }
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            bail!("outline contains a non-finite point: {p:?}");
        }
        Ok(Outline { kind, points })
    }

    pub fn kind(&self) -> OutlineKind {
        self.kind
    }

    pub fn is_closed(&self) -> bool {
        self.kind == OutlineKind::ClosedPolyline
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// All edges of the outline, including the implicit closing edge of a [`OutlineKind::ClosedPolyline`]
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let closing = match self.kind {
            OutlineKind::ClosedPolyline if self.points.len() > 2 => {
                Some((self.points[self.points.len() - 1], self.points[0]))
            }
            _ => None,
        };
        self.points
            .iter()
            .copied()
            .tuple_windows()
            .chain(closing)
    }

    /// Rotates the outline by `angle` degrees about the centre of its current bounding box.
    ///
    /// The pivot is recomputed on every call, so rotating an already rotated outline is not
    /// equivalent to a single rotation by the summed angle. Always rotate from the original outline.
    pub fn rotate(&self, angle: f64) -> Self {
        self.rotate_about(angle, self.bbox().centroid())
    }

    /// Rotates the outline by `angle` degrees about `pivot`.
    pub fn rotate_about(&self, angle: f64, pivot: Point) -> Self {
        Outline {
            kind: self.kind,
            points: self
                .points
                .iter()
                .map(|p| p.rotate_about(angle, pivot))
                .collect(),
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Outline {
            kind: self.kind,
            points: self.points.iter().map(|p| p.translate((dx, dy))).collect(),
        }
    }

    /// Applies a placement transformation: rotation about the bounding-box centre, then translation.
    pub fn transform(&self, d_transf: &DTransformation) -> Self {
        let (dx, dy) = d_transf.translation();
        self.rotate(d_transf.rotation()).translate(dx, dy)
    }

    /// True if both outlines are of the same kind and all points are equal within floating point tolerance.
    pub fn almost_eq(&self, other: &Outline) -> bool {
        self.kind == other.kind
            && self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(other.points.iter())
                .all(|(a, b)| FPA(a.0) == FPA(b.0) && FPA(a.1) == FPA(b.1))
    }
}

impl Shape for Outline {
    /// Centre of the bounding box, the pivot used by [`Outline::rotate`]
    fn centroid(&self) -> Point {
        self.bbox().centroid()
    }

    /// Enclosed area of a closed polyline (shoelace formula), zero for an open segment
    fn area(&self) -> f64 {
        match self.kind {
            OutlineKind::OpenSegment => 0.0,
            OutlineKind::ClosedPolyline => {
                let n = self.points.len();
                let twice_area = (0..n)
                    .map(|i| {
                        let Point(x1, y1) = self.points[i];
                        let Point(x2, y2) = self.points[(i + 1) % n];
                        x1 * y2 - x2 * y1
                    })
                    .sum::<f64>();
                twice_area.abs() / 2.0
            }
        }
    }

    fn bbox(&self) -> Rect {
        Rect::from_points(&self.points).expect("outlines contain at least two points")
    }
}

impl Display for OutlineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutlineKind::OpenSegment => write!(f, "open segment"),
            OutlineKind::ClosedPolyline => write!(f, "closed polyline"),
        }
    }
}
