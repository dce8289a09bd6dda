//! Rectangle Edge Extraction

use ndarray::{Array2, Array3, ArrayView3};

use crate::error::{expect_shape, GeometryError};
use crate::CORNERS;

/// Split each rectangle into its 4 boundary segments.
///
/// Returns `(p1, p2)`, both N×4×2, where `p1[i, k]` is corner `k` and
/// `p2[i, k]` is corner `(k + 1) % 4`, so every edge follows the corner
/// winding.
pub fn extract_edges(
    corners: ArrayView3<'_, f64>,
) -> Result<(Array3<f64>, Array3<f64>), GeometryError> {
    let n = corners.shape()[0];
    expect_shape("corners", &[n, CORNERS, 2], corners.shape())?;

    let p1 = corners.to_owned();
    let p2 = Array3::from_shape_fn((n, CORNERS, 2), |(i, k, c)| {
        corners[[i, (k + 1) % CORNERS, c]]
    });
    Ok((p1, p2))
}

/// Flatten N×4×2 segment endpoints into a (4N)×2 list, vehicle-major
pub fn flatten_segments(points: ArrayView3<'_, f64>) -> Result<Array2<f64>, GeometryError> {
    let n = points.shape()[0];
    expect_shape("segment endpoints", &[n, CORNERS, 2], points.shape())?;

    Ok(Array2::from_shape_fn((n * CORNERS, 2), |(row, c)| {
        points[[row / CORNERS, row % CORNERS, c]]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn unit_square() -> Array3<f64> {
        array![[[1.0, 1.0], [1.0, -1.0], [-1.0, -1.0], [-1.0, 1.0]]]
    }

    #[test]
    fn test_edges_wrap_around() {
        let corners = unit_square();
        let (p1, p2) = extract_edges(corners.view()).unwrap();

        assert_eq!(p1, corners);
        assert_eq!(p2[[0, 0, 1]], -1.0);
        // Last edge closes back to the first corner
        assert_eq!(p2[[0, 3, 0]], 1.0);
        assert_eq!(p2[[0, 3, 1]], 1.0);
    }

    #[test]
    fn test_flatten_is_vehicle_major() {
        let mut corners = Array3::zeros((2, 4, 2));
        for i in 0..2 {
            for k in 0..4 {
                corners[[i, k, 0]] = (i * 10 + k) as f64;
            }
        }
        let flat = flatten_segments(corners.view()).unwrap();

        assert_eq!(flat.shape(), &[8, 2]);
        assert_eq!(flat[[3, 0]], 3.0);
        assert_eq!(flat[[5, 0]], 11.0);
    }

    #[test]
    fn test_rejects_triangles() {
        let triangle = Array3::<f64>::zeros((1, 3, 2));
        assert!(extract_edges(triangle.view()).is_err());
    }
}
