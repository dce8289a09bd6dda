//! Cross-fleet safety-circle proximity

use geometry::circle_overlap_matrix;
use ndarray::Array2;

use crate::{FleetError, VehicleFleet};

/// Overlap area of every safety circle of `a` with every safety circle of
/// `b`, as an N_A×N_B matrix. `a` and `b` may be the same fleet.
pub fn safety_circle_overlap(
    a: &VehicleFleet,
    b: &VehicleFleet,
) -> Result<Array2<f64>, FleetError> {
    Ok(circle_overlap_matrix(
        a.position(),
        a.safety_radius(),
        b.position(),
        b.safety_radius(),
    )?)
}
