//! Local-to-World Corner Transform

use ndarray::{Array3, ArrayView1, ArrayView2, ArrayView3};

use crate::error::{expect_shape, GeometryError};
use crate::CORNERS;

/// Sign pattern of the local corners, walked clockwise from front-left
const CORNER_SIGNS: [[f64; 2]; CORNERS] = [[1.0, 1.0], [1.0, -1.0], [-1.0, -1.0], [-1.0, 1.0]];

/// Build the axis-aligned local rectangle of each vehicle.
///
/// `dimensions` is N×2 of (length, width). The result is N×4×2 with
/// corner `k` at `CORNER_SIGNS[k] * (length / 2, width / 2)`.
pub fn base_corners(dimensions: ArrayView2<'_, f64>) -> Result<Array3<f64>, GeometryError> {
    let n = dimensions.nrows();
    expect_shape("dimensions", &[n, 2], dimensions.shape())?;

    Ok(Array3::from_shape_fn((n, CORNERS, 2), |(i, k, c)| {
        CORNER_SIGNS[k][c] * dimensions[[i, c]] / 2.0
    }))
}

/// Rotate each local corner by its vehicle's orientation and translate it
/// by its position: `world = R(θ) · local + position`.
///
/// `local` is N×4×2, `orientation` is N, `position` is N×2.
pub fn transform_corners(
    local: ArrayView3<'_, f64>,
    orientation: ArrayView1<'_, f64>,
    position: ArrayView2<'_, f64>,
) -> Result<Array3<f64>, GeometryError> {
    let n = local.shape()[0];
    expect_shape("local corners", &[n, CORNERS, 2], local.shape())?;
    expect_shape("orientation", &[n], orientation.shape())?;
    expect_shape("position", &[n, 2], position.shape())?;

    let mut world = Array3::zeros((n, CORNERS, 2));
    for i in 0..n {
        let (sin, cos) = orientation[i].sin_cos();
        let (px, py) = (position[[i, 0]], position[[i, 1]]);
        for k in 0..CORNERS {
            let (lx, ly) = (local[[i, k, 0]], local[[i, k, 1]]);
            world[[i, k, 0]] = cos * lx - sin * ly + px;
            world[[i, k, 1]] = sin * lx + cos * ly + py;
        }
    }
    Ok(world)
}
