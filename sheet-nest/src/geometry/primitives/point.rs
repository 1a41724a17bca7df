use crate::geometry::transformation::rotate_point;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    /// Rotates the point by `angle` degrees (counter-clockwise) about `pivot`.
    pub fn rotate_about(self, angle: f64, pivot: Point) -> Self {
        rotate_point(self.0, self.1, angle, pivot.0, pivot.1).into()
    }

    pub fn translate(self, (dx, dy): (f64, f64)) -> Self {
        Point(self.0 + dx, self.1 + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}
