//! Grid snapping and the zoom-dependent grid size.
//!
//! Rounding is `f64::round`, i.e. half away from zero, so `snap(25.0, 50.0)`
//! is `50.0` and `snap(-25.0, 50.0)` is `-50.0`.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{COARSE_GRID, FINE_GRID, FINE_GRID_ABOVE_ZOOM};

/// Round `value` to the nearest multiple of `grid`. `grid` must be positive.
#[must_use]
pub fn snap(value: f64, grid: f64) -> f64 {
    (value / grid).round() * grid
}

/// Snap both coordinates of a world-space point independently.
#[must_use]
pub fn snap_point(pt: Point, grid: f64) -> Point {
    Point::new(snap(pt.x, grid), snap(pt.y, grid))
}

/// Two-level grid: fine when zoomed in past a threshold, coarse otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridPolicy {
    /// Quantum in world units used when `zoom > fine_above_zoom`.
    pub fine: f64,
    /// Quantum in world units used when `zoom <= fine_above_zoom`.
    pub coarse: f64,
    /// Zoom threshold; strictly greater selects the fine grid.
    pub fine_above_zoom: f64,
}

impl Default for GridPolicy {
    fn default() -> Self {
        Self { fine: FINE_GRID, coarse: COARSE_GRID, fine_above_zoom: FINE_GRID_ABOVE_ZOOM }
    }
}

impl GridPolicy {
    /// Grid size in world units for the given zoom.
    #[must_use]
    pub fn size_at(&self, zoom: f64) -> f64 {
        if zoom > self.fine_above_zoom { self.fine } else { self.coarse }
    }
}
