//! Fleet Error Types

use geometry::GeometryError;
use thiserror::Error;

/// Errors raised when building or driving a fleet
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FleetError {
    /// A batched argument disagrees with the fleet size
    #[error("{field}: expected shape {expected:?}, got {actual:?}")]
    ShapeMismatch {
        field: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Vehicle length or width is not a positive finite number
    #[error("Vehicle {index} has invalid dimensions {length} x {width}")]
    InvalidDimension { index: usize, length: f64, width: f64 },

    /// Sensor range outside its allowed interval
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Geometry kernel rejected its input
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Check that a batched argument has the expected shape
pub(crate) fn expect_shape(
    field: &'static str,
    expected: &[usize],
    actual: &[usize],
) -> Result<(), FleetError> {
    if expected == actual {
        Ok(())
    } else {
        Err(FleetError::ShapeMismatch {
            field,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        })
    }
}
