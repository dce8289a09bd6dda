//! Circle Overlap (Lens) Area

use ndarray::{Array2, ArrayView1, ArrayView2};
use std::f64::consts::PI;

use crate::error::{expect_shape, GeometryError};

/// Area of intersection of two circles with center distance `d` and radii
/// `r1`, `r2` (both non-negative).
///
/// Disjoint or externally tangent circles give 0 and a contained circle
/// gives its full area. Otherwise the lens is the sum of one circular
/// segment from each circle.
pub fn circle_overlap_area(d: f64, r1: f64, r2: f64) -> f64 {
    if d >= r1 + r2 {
        return 0.0;
    }
    if d <= (r1 - r2).abs() {
        let r = r1.min(r2);
        return PI * r * r;
    }

    // Half-angles subtended by the chord, from the law of cosines
    let alpha = ((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1))
        .clamp(-1.0, 1.0)
        .acos();
    let beta = ((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2))
        .clamp(-1.0, 1.0)
        .acos();

    let segment1 = r1 * r1 * (alpha - (2.0 * alpha).sin() / 2.0);
    let segment2 = r2 * r2 * (beta - (2.0 * beta).sin() / 2.0);
    segment1 + segment2
}

/// Overlap area between every circle of `a` and every circle of `b`.
///
/// `centers_a` is N_a×2 with radii N_a, `centers_b` is N_b×2 with radii
/// N_b. Entry `[i, j]` of the N_a×N_b result is the overlap of `a[i]` and
/// `b[j]`.
pub fn circle_overlap_matrix(
    centers_a: ArrayView2<'_, f64>,
    radii_a: ArrayView1<'_, f64>,
    centers_b: ArrayView2<'_, f64>,
    radii_b: ArrayView1<'_, f64>,
) -> Result<Array2<f64>, GeometryError> {
    let na = radii_a.len();
    let nb = radii_b.len();
    expect_shape("centers a", &[na, 2], centers_a.shape())?;
    expect_shape("centers b", &[nb, 2], centers_b.shape())?;

    Ok(Array2::from_shape_fn((na, nb), |(i, j)| {
        let dx = centers_a[[i, 0]] - centers_b[[j, 0]];
        let dy = centers_a[[i, 1]] - centers_b[[j, 1]];
        circle_overlap_area(dx.hypot(dy), radii_a[i], radii_b[j])
    }))
}
