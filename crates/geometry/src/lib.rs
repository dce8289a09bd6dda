//! Batched 2D Geometry Kernels
//!
//! Whole-fleet numeric kernels for rectangular vehicles on a plane:
//! - Angle normalization to (-π, π]
//! - Local-to-world corner transforms
//! - Rectangle edge extraction
//! - Segment intersection (pairwise and all-pairs)
//! - Circle overlap (lens) area
//!
//! Batched inputs are `ndarray` arrays with the vehicle index as the
//! leading axis.

mod angle;
mod edges;
mod error;
mod intersection;
mod overlap;
mod transform;

pub use angle::{normalize_angle, normalize_angles};
pub use edges::{extract_edges, flatten_segments};
pub use error::GeometryError;
pub use intersection::{intersects_all_pairs, intersects_pairwise, segments_intersect};
pub use overlap::{circle_overlap_area, circle_overlap_matrix};
pub use transform::{base_corners, transform_corners};

/// A point or vector in the plane, `[x, y]`
pub type Point = [f64; 2];

/// Number of corners (and edges) of a vehicle rectangle
pub const CORNERS: usize = 4;
