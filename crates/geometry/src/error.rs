//! Geometry Error Types

use thiserror::Error;

/// Errors raised by the batched geometry kernels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Batched inputs disagree on shape
    #[error("{what}: expected shape {expected:?}, got {actual:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}

impl GeometryError {
    pub(crate) fn shape(what: &'static str, expected: &[usize], actual: &[usize]) -> Self {
        GeometryError::ShapeMismatch {
            what,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }
}

/// Check that an array shape matches exactly
pub(crate) fn expect_shape(
    what: &'static str,
    expected: &[usize],
    actual: &[usize],
) -> Result<(), GeometryError> {
    if expected == actual {
        Ok(())
    } else {
        Err(GeometryError::shape(what, expected, actual))
    }
}
