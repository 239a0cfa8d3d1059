//! Distance functions usable as edge cost and A* heuristic.

use searoute_core::Cell;

use crate::traits::Distance;

/// Mean earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Euclidean (L2) distance between two cells, in cell units.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Straight-line distance in cell units. The default admissible metric for
/// grids with no geographic mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

impl Distance for Euclidean {
    #[inline]
    fn cost(&self, a: Cell, b: Cell) -> f64 {
        euclidean(a, b)
    }
}

/// Chebyshev distance as a cost function: every Moore step costs 1, so
/// minimal cost equals minimal hop count. Useful for cross-checking against
/// breadth-first results.
#[derive(Debug, Default, Clone, Copy)]
pub struct Chebyshev;

impl Distance for Chebyshev {
    #[inline]
    fn cost(&self, a: Cell, b: Cell) -> f64 {
        chebyshev(a, b) as f64
    }
}

/// Geographic distance in kilometres between cell centers, for grids that
/// map onto real coordinates.
///
/// Uses the equirectangular approximation (flat projection about the mean
/// latitude), which underestimates great-circle distance only negligibly at
/// simulation scales and is therefore still admissible in practice.
#[derive(Debug, Clone, Copy)]
pub struct Equirectangular {
    /// Latitude of the center of cell (0, 0), in degrees.
    pub origin_lat: f64,
    /// Longitude of the center of cell (0, 0), in degrees.
    pub origin_lon: f64,
    /// Angular size of one cell, in degrees.
    pub cell_deg: f64,
}

impl Equirectangular {
    /// Create a mapping anchored at the given origin.
    pub fn new(origin_lat: f64, origin_lon: f64, cell_deg: f64) -> Self {
        Self {
            origin_lat,
            origin_lon,
            cell_deg,
        }
    }

    /// (latitude, longitude) of the center of `c`, in degrees.
    /// Y grows south, so latitude decreases with y.
    pub fn coordinates(&self, c: Cell) -> (f64, f64) {
        (
            self.origin_lat - c.y as f64 * self.cell_deg,
            self.origin_lon + c.x as f64 * self.cell_deg,
        )
    }
}

impl Distance for Equirectangular {
    fn cost(&self, a: Cell, b: Cell) -> f64 {
        let (lat_a, lon_a) = self.coordinates(a);
        let (lat_b, lon_b) = self.coordinates(b);
        let mean_lat = ((lat_a + lat_b) / 2.0).to_radians();
        let x = (lon_b - lon_a).to_radians() * mean_lat.cos();
        let y = (lat_b - lat_a).to_radians();
        EARTH_RADIUS_KM * (x * x + y * y).sqrt()
    }
}
