//! Segment Intersection
//!
//! Orientation-sign straddle test. Segments are closed: touching at an
//! endpoint, or one endpoint lying on the other segment, counts as an
//! intersection. Collinear segments intersect iff their extents overlap
//! along the shared line.

use ndarray::{Array1, Array2, ArrayView2};

use crate::error::{expect_shape, GeometryError};
use crate::Point;

/// Signed area of the triangle (p, q, r); positive when r is left of p→q
#[inline]
fn orientation(p: Point, q: Point, r: Point) -> f64 {
    (q[0] - p[0]) * (r[1] - p[1]) - (q[1] - p[1]) * (r[0] - p[0])
}

/// Orientation values within this fraction of the squared segment length
/// count as collinear
const COLLINEAR_EPSILON: f64 = 1e-10;

#[inline]
fn straddles(d1: f64, d2: f64) -> bool {
    (d1 <= 0.0 && d2 >= 0.0) || (d1 >= 0.0 && d2 <= 0.0)
}

#[inline]
fn extents_overlap(a1: f64, a2: f64, b1: f64, b2: f64) -> bool {
    a1.min(a2) <= b1.max(b2) && b1.min(b2) <= a1.max(a2)
}

#[inline]
fn length_squared(p: Point, q: Point) -> f64 {
    (q[0] - p[0]).powi(2) + (q[1] - p[1]).powi(2)
}

/// Test whether closed segment `a1-a2` intersects closed segment `b1-b2`
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    // Intersecting segments always share bounding-box extents
    if !extents_overlap(a1[0], a2[0], b1[0], b2[0]) || !extents_overlap(a1[1], a2[1], b1[1], b2[1]) {
        return false;
    }

    let tolerance = COLLINEAR_EPSILON * length_squared(a1, a2).max(length_squared(b1, b2));
    let snap = |d: f64| if d.abs() <= tolerance { 0.0 } else { d };

    let d1 = snap(orientation(b1, b2, a1));
    let d2 = snap(orientation(b1, b2, a2));
    let d3 = snap(orientation(a1, a2, b1));
    let d4 = snap(orientation(a1, a2, b2));

    if d1 == 0.0 && d2 == 0.0 && d3 == 0.0 && d4 == 0.0 {
        // Collinear (or degenerate) with overlapping extents
        return true;
    }

    straddles(d1, d2) && straddles(d3, d4)
}

#[inline]
fn row(points: &ArrayView2<'_, f64>, i: usize) -> Point {
    [points[[i, 0]], points[[i, 1]]]
}

fn check_segments(
    what: &'static str,
    starts: &ArrayView2<'_, f64>,
    ends: &ArrayView2<'_, f64>,
) -> Result<usize, GeometryError> {
    let m = starts.nrows();
    expect_shape(what, &[m, 2], starts.shape())?;
    expect_shape(what, &[m, 2], ends.shape())?;
    Ok(m)
}

/// Test segment `i` of `a` against segment `i` of `b`, for every `i`.
///
/// All four inputs are M×2; a count mismatch is a `ShapeMismatch`.
pub fn intersects_pairwise(
    a1: ArrayView2<'_, f64>,
    a2: ArrayView2<'_, f64>,
    b1: ArrayView2<'_, f64>,
    b2: ArrayView2<'_, f64>,
) -> Result<Array1<bool>, GeometryError> {
    let m = check_segments("segments a", &a1, &a2)?;
    let mb = check_segments("segments b", &b1, &b2)?;
    if m != mb {
        return Err(GeometryError::shape("pairwise segment count", &[m], &[mb]));
    }

    Ok(Array1::from_shape_fn(m, |i| {
        segments_intersect(row(&a1, i), row(&a2, i), row(&b1, i), row(&b2, i))
    }))
}

/// Test every segment of `a` against every segment of `b`.
///
/// `a1`/`a2` are M_a×2 and `b1`/`b2` are M_b×2. Entry `[i, j]` of the
/// M_a×M_b result is whether `a[i]` intersects `b[j]`.
pub fn intersects_all_pairs(
    a1: ArrayView2<'_, f64>,
    a2: ArrayView2<'_, f64>,
    b1: ArrayView2<'_, f64>,
    b2: ArrayView2<'_, f64>,
) -> Result<Array2<bool>, GeometryError> {
    let ma = check_segments("segments a", &a1, &a2)?;
    let mb = check_segments("segments b", &b1, &b2)?;

    let a: Vec<(Point, Point)> = (0..ma).map(|i| (row(&a1, i), row(&a2, i))).collect();
    let b: Vec<(Point, Point)> = (0..mb).map(|j| (row(&b1, j), row(&b2, j))).collect();

    Ok(Array2::from_shape_fn((ma, mb), |(i, j)| {
        segments_intersect(a[i].0, a[i].1, b[j].0, b[j].1)
    }))
}
