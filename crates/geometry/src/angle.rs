//! Angle Normalization

use ndarray::ArrayViewMut1;
use std::f64::consts::{PI, TAU};

/// Wrap an angle into the half-open interval (-π, π]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = PI - (PI - angle).rem_euclid(TAU);
    // rem_euclid may round up to TAU for tiny negative remainders
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Normalize every angle of a batch in place
pub fn normalize_angles(mut angles: ArrayViewMut1<'_, f64>) {
    angles.mapv_inplace(normalize_angle);
}
