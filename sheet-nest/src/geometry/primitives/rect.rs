use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Point;
use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

///Axis-aligned rectangle, used as bounding box of outlines and as the sheet boundary.
///Degenerate rectangles (zero width or height) are allowed, the bounding box of a horizontal segment is one.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Smallest rectangle containing all `points`, `None` if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let init = Rect {
            x_min: first.0,
            y_min: first.1,
            x_max: first.0,
            y_max: first.1,
        };
        Some(points.fold(init, |r, p| Rect {
            x_min: f64::min(r.x_min, p.0),
            y_min: f64::min(r.y_min, p.1),
            x_max: f64::max(r.x_max, p.0),
            y_max: f64::max(r.y_max, p.1),
        }))
    }

    /// Returns the rectangle shifted by `(dx, dy)`.
    ///
    /// Floating point addition is monotone, so this is bit-identical to the bounding box
    /// of the same points each shifted by `(dx, dy)`.
    pub fn translate(self, (dx, dy): (f64, f64)) -> Self {
        Rect {
            x_min: self.x_min + dx,
            y_min: self.y_min + dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// True if `other` lies entirely within `self` (boundary included).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x_min >= self.x_min
            && other.y_min >= self.y_min
            && other.x_max <= self.x_max
            && other.y_max <= self.y_max
    }

    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        let dx = (self.x_max - self.x_min) * (factor - 1.0) / 2.0;
        let dy = (self.y_max - self.y_min) * (factor - 1.0) / 2.0;
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Returns the four corners, counter-clockwise starting from the bottom-left one.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Shape for Rect {
    fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    fn area(&self) -> f64 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    fn bbox(&self) -> Rect {
        *self
    }
}

impl CollidesWith<Rect> for Rect {
    /// Inclusive: rectangles sharing an edge or a corner collide.
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        !(self.x_max < other.x_min
            || self.x_min > other.x_max
            || self.y_max < other.y_min
            || self.y_min > other.y_max)
    }
}
