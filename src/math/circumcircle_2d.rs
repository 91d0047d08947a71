//! Circumcircle math for point triples.

use super::Point2;

/// Returns the circumcenter of the triangle `(a, b, c)`: the point
/// equidistant from all three vertices.
///
/// Collinear inputs make the denominator vanish and yield non-finite
/// coordinates; callers must guard degenerate triples upstream.
#[must_use]
pub fn circumcenter(a: Point2, b: Point2, c: Point2) -> Point2 {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));

    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;

    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;

    Point2::new(ux, uy)
}
