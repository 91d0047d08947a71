//! 2D rotation-about-a-point math and sector boundary sampling.

use super::{Matrix3, Point2};

/// Builds the 3x3 homogeneous matrix rotating the plane by `angle` radians
/// (counter-clockwise) about an arbitrary `center`.
///
/// Equivalent to translate(-center) ∘ rotate(angle) ∘ translate(center),
/// collapsed into one matrix acting on homogeneous `(x, y, 1)` columns.
#[must_use]
pub fn rotation_about(center: Point2, angle: f64) -> Matrix3 {
    let (si, co) = angle.sin_cos();
    let (x, y) = (center.x, center.y);

    Matrix3::new(
        co,
        -si,
        x * (1.0 - co) + y * si,
        si,
        co,
        y * (1.0 - co) - x * si,
        0.0,
        0.0,
        1.0,
    )
}

/// Rotates point `p` by `angle` radians (counter-clockwise) about `center`.
#[must_use]
pub fn rotate_about(p: Point2, center: Point2, angle: f64) -> Point2 {
    rotation_about(center, angle).transform_point(&p)
}

/// Samples the boundary polyline of a circular sector wedge.
///
/// The wedge is centered at `center`, starts at `radius_point`, and spans
/// `phi` radians counter-clockwise. The result is
/// `[center, radius_point, rotated(1), …, rotated(samples), center]`:
/// the first two points are the exact inputs (the boundary touches both
/// bounding radii exactly) and the final point duplicates `center` so the
/// filled region closes. The returned path always holds `samples + 3`
/// points.
///
/// Each interior sample is an independent rotation of `radius_point` by
/// `i * phi / samples`, so floating-point error does not accumulate along
/// the arc and resampling with unchanged inputs is deterministic.
#[must_use]
pub fn sector_boundary(center: Point2, radius_point: Point2, phi: f64, samples: u32) -> Vec<Point2> {
    let delta = phi / f64::from(samples);
    let mut path = Vec::with_capacity(samples as usize + 3);

    path.push(center);
    path.push(radius_point);
    for i in 1..=samples {
        let beta = delta * f64::from(i);
        path.push(rotation_about(center, beta).transform_point(&radius_point));
    }
    path.push(center);

    path
}
