/// Rotates `(x, y)` counter-clockwise by `angle` degrees about the pivot `(cx, cy)`.
#[inline(always)]
pub fn rotate_point(x: f64, y: f64, angle: f64, cx: f64, cy: f64) -> (f64, f64) {
    let (sin, cos) = angle.to_radians().sin_cos();
    let (dx, dy) = (x - cx, y - cy);
    (cos * dx - sin * dy + cx, sin * dx + cos * dy + cy)
}
