//! 2D angle measurement and orientation predicates.

use std::f64::consts::TAU;

use super::Point2;

/// Returns the angle at `vertex` swept counter-clockwise from the ray
/// `vertex → a` to the ray `vertex → c`, in radians.
///
/// The result is always in `[0, 2π)`. Degenerate inputs (a ray endpoint
/// coinciding with the vertex) yield an angle measured against the zero
/// direction rather than an error.
#[must_use]
pub fn rad(a: Point2, vertex: Point2, c: Point2) -> f64 {
    let start = (a.y - vertex.y).atan2(a.x - vertex.x);
    let end = (c.y - vertex.y).atan2(c.x - vertex.x);

    let mut phi = end - start;
    if phi < 0.0 {
        phi += TAU;
    }
    phi
}

/// Signed-area orientation determinant of the ordered triple `(p0, p1, p2)`.
///
/// Computed as `(p0.x-p2.x)*(p0.y-p1.y) - (p0.y-p2.y)*(p0.x-p1.x)`, which
/// is minus twice the signed triangle area: negative for a counter-clockwise
/// triple, positive for a clockwise one, zero for collinear points.
#[must_use]
pub fn orientation_det(p0: Point2, p1: Point2, p2: Point2) -> f64 {
    (p0.x - p2.x) * (p0.y - p1.y) - (p0.y - p2.y) * (p0.x - p1.x)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    const TOL: f64 = 1e-10;

    // ── rad tests ──

    #[test]
    fn quarter_turn_ccw() {
        // From (1,0) to (0,1) around the origin: π/2.
        let phi = rad(
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
        );
        assert!((phi - PI / 2.0).abs() < TOL, "phi={phi}");
    }

    #[test]
    fn quarter_turn_cw_wraps_to_three_quarters() {
        // Clockwise quarter turn is reported as the CCW complement 3π/2.
        let phi = rad(
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
        );
        assert!((phi - 3.0 * PI / 2.0).abs() < TOL, "phi={phi}");
    }

    #[test]
    fn straight_angle() {
        let phi = rad(
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(-1.0, 0.0),
        );
        assert!((phi - PI).abs() < TOL, "phi={phi}");
    }

    #[test]
    fn zero_angle_on_same_ray() {
        let phi = rad(
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
        );
        assert!(phi.abs() < TOL, "phi={phi}");
    }

    #[test]
    fn rad_away_from_origin_vertex() {
        // Same quarter turn, translated so the vertex is not the origin.
        let phi = rad(
            Point2::new(3.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 3.0),
        );
        assert!((phi - PI / 2.0).abs() < TOL, "phi={phi}");
    }

    // ── orientation_det tests ──

    #[test]
    fn ccw_triple_is_negative() {
        let det = orientation_det(
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, 0.0),
        );
        assert!(det < 0.0, "det={det}");
    }

    #[test]
    fn cw_triple_is_positive() {
        let det = orientation_det(
            Point2::new(1.0, 0.0),
            Point2::new(0.0, -1.0),
            Point2::new(-1.0, 0.0),
        );
        assert!(det > 0.0, "det={det}");
    }

    #[test]
    fn collinear_triple_is_zero() {
        let det = orientation_det(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        );
        assert!(det.abs() < TOL, "det={det}");
    }
}
