//! World-corner cache
//!
//! Two states: `Stale` (nothing stored) and `Valid` (corners stored).
//! Writers invalidate through `&mut self`; readers fill the cache through
//! `&self`, so the cache can be shared between concurrent readers.

use ndarray::Array3;
use std::sync::OnceLock;
use tracing::trace;

/// Observable state of a [`CoordinateCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Stale,
    Valid,
}

/// Lazily recomputed N×4×2 world corners
#[derive(Debug, Clone, Default)]
pub struct CoordinateCache {
    corners: OnceLock<Array3<f64>>,
}

impl CoordinateCache {
    /// Create a cache that is already valid
    pub fn valid(corners: Array3<f64>) -> Self {
        Self {
            corners: OnceLock::from(corners),
        }
    }

    /// Create an empty (stale) cache
    pub fn stale() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CacheState {
        if self.corners.get().is_some() {
            CacheState::Valid
        } else {
            CacheState::Stale
        }
    }

    pub fn is_valid(&self) -> bool {
        self.state() == CacheState::Valid
    }

    /// Drop the stored corners (`valid -> stale`)
    pub fn invalidate(&mut self) {
        if self.corners.take().is_some() {
            trace!("Coordinate cache invalidated");
        }
    }

    /// Return the stored corners, computing them first if stale
    /// (`stale -> valid`). A failed computation leaves the cache stale.
    pub fn ensure_valid<E>(
        &self,
        compute: impl FnOnce() -> Result<Array3<f64>, E>,
    ) -> Result<&Array3<f64>, E> {
        if let Some(corners) = self.corners.get() {
            return Ok(corners);
        }

        trace!("Coordinate cache stale, recomputing");
        let corners = compute()?;
        Ok(self.corners.get_or_init(|| corners))
    }
}
