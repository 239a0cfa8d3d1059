//! The collaborator traits the search layer sees the world through.

use searoute_core::{Cell, SeaChart};

use crate::route::Route;

/// Grid/world collaborator: cell validity and navigability.
///
/// The search layer performs no bounds checking of its own beyond what this
/// trait exposes.
pub trait Terrain {
    /// Whether `c` is a valid cell of the world.
    fn contains(&self, c: Cell) -> bool;

    /// Whether a route may legally pass through `c` (water, or a port).
    fn is_navigable(&self, c: Cell) -> bool;

    /// Append the valid Moore (8-connected) neighbors of `c` into `buf`.
    /// The caller clears `buf` before calling.
    ///
    /// Neighbors are not filtered by navigability; each searcher applies its
    /// own rule (notably the destination-is-always-eligible exception).
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        for n in c.neighbors_8() {
            if self.contains(n) {
                buf.push(n);
            }
        }
    }
}

impl Terrain for SeaChart {
    #[inline]
    fn contains(&self, c: Cell) -> bool {
        SeaChart::contains(self, c)
    }

    #[inline]
    fn is_navigable(&self, c: Cell) -> bool {
        SeaChart::is_navigable(self, c)
    }
}

/// Distance collaborator: non-negative cost between two cells.
///
/// The same function is used as edge cost and as the A* heuristic. The
/// heuristic stays admissible as long as the function never overestimates
/// the true cheapest traversal cost between any two cells (any metric that
/// is a lower bound, such as straight-line distance, qualifies).
pub trait Distance {
    /// Cost between `a` and `b`. Must be >= 0.
    fn cost(&self, a: Cell, b: Cell) -> f64;
}

/// The common capability of the closed pathfinder family.
///
/// `None` means "no route exists" — a first-class outcome, never an error.
pub trait Pathfinder {
    /// Compute a route from `start` to `end`, both inclusive.
    fn route<T: Terrain>(&mut self, terrain: &T, start: Cell, end: Cell) -> Option<Route>;
}
