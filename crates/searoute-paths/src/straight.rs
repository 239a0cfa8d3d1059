//! The straight-line pathfinder — an obstacle-blind first guess.

use searoute_core::Cell;

use crate::memory::{CachedRoute, DiscardingMemory, RouteMemory, RouteStore};
use crate::route::Route;
use crate::traits::{Pathfinder, Terrain};

/// Generates a route by walking one step toward the destination on each
/// axis, preferring the diagonal, sidestepping onto a single axis when the
/// diagonal is blocked, and crossing land outright when no legal step
/// remains.
///
/// **This generator does not guarantee traversability.** Its output exists
/// to be inspected for land crossings by the caller; it must never be
/// presented as a final answer without that check.
///
/// Generated routes (and their reverses) are memoized in the pathfinder's
/// own store, which is private and never shared with the authoritative
/// cache.
#[derive(Debug, Clone)]
pub struct StraightLinePathfinder<M: RouteStore = RouteMemory> {
    memory: M,
}

impl StraightLinePathfinder<RouteMemory> {
    /// A pathfinder with its own memoizing store.
    pub fn new() -> Self {
        Self {
            memory: RouteMemory::new(),
        }
    }
}

impl Default for StraightLinePathfinder<RouteMemory> {
    fn default() -> Self {
        Self::new()
    }
}

impl StraightLinePathfinder<DiscardingMemory> {
    /// A disposable pathfinder that remembers nothing, for use as an
    /// internal helper.
    pub fn discarding() -> Self {
        Self {
            memory: DiscardingMemory,
        }
    }
}

impl<M: RouteStore> StraightLinePathfinder<M> {
    /// The pathfinder's private store.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Generate the naive route from `start` to `end`, both inclusive.
    ///
    /// Always succeeds; the result may cross land (see the type docs).
    pub fn naive_route<T: Terrain>(&mut self, terrain: &T, start: Cell, end: Cell) -> Route {
        // Symmetric reuse: a route computed in either direction serves both.
        if let CachedRoute::Found(r) = self.memory.lookup(start, end) {
            return r;
        }
        if let CachedRoute::Found(r) = self.memory.lookup(end, start) {
            return r.reversed();
        }

        let mut cells = vec![start];
        let mut cur = start;
        while cur != end {
            let sx = (end.x - cur.x).signum();
            let sy = (end.y - cur.y).signum();
            let diagonal = cur.shift(sx, sy);

            let mut next = diagonal;
            if !terrain.is_navigable(diagonal) {
                if sx != 0 && terrain.is_navigable(cur.shift(sx, 0)) {
                    next = cur.shift(sx, 0);
                } else if sy != 0 && terrain.is_navigable(cur.shift(0, sy)) {
                    next = cur.shift(0, sy);
                }
                // Otherwise keep the diagonal and cross land; the caller
                // validates the route before trusting it.
            }

            cur = next;
            cells.push(cur);
        }

        let route = Route::new(cells);
        self.memory.record(start, end, route.clone());
        self.memory.record(end, start, route.reversed());
        route
    }
}

impl<M: RouteStore> Pathfinder for StraightLinePathfinder<M> {
    fn route<T: Terrain>(&mut self, terrain: &T, start: Cell, end: Cell) -> Option<Route> {
        Some(self.naive_route(terrain, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searoute_core::SeaChart;

    #[test]
    fn open_water_walks_the_diagonal() {
        let chart = SeaChart::new(5, 5);
        let mut pf = StraightLinePathfinder::new();
        let r = pf.naive_route(&chart, Cell::new(0, 0), Cell::new(4, 4));
        let expected: Vec<Cell> = (0..5).map(|i| Cell::new(i, i)).collect();
        assert_eq!(r.cells(), &expected[..]);
    }

    #[test]
    fn degenerate_route_is_single_cell() {
        let chart = SeaChart::new(3, 3);
        let mut pf = StraightLinePathfinder::new();
        let c = Cell::new(1, 2);
        let r = pf.naive_route(&chart, c, c);
        assert_eq!(r.cells(), &[c]);
    }

    #[test]
    fn sidesteps_a_blocked_diagonal() {
        // Diagonal from (0,0) toward (2,2) is blocked at (1,1); the
        // horizontal step is open.
        let chart = SeaChart::from_ascii(
            "...\n\
             .#.\n\
             ...",
        )
        .unwrap();
        let mut pf = StraightLinePathfinder::new();
        let r = pf.naive_route(&chart, Cell::new(0, 0), Cell::new(2, 2));
        assert!(!r.iter().any(|c| c == Cell::new(1, 1)));
        assert_eq!(r.start(), Cell::new(0, 0));
        assert_eq!(r.end(), Cell::new(2, 2));
        for c in r.iter() {
            assert!(chart.is_navigable(c));
        }
    }

    #[test]
    fn crosses_land_when_no_step_is_legal() {
        // A full land column: every candidate step onto column 1 is blocked,
        // so the walk crosses it anyway.
        let chart = SeaChart::from_ascii(
            ".#.\n\
             .#.\n\
             .#.",
        )
        .unwrap();
        let mut pf = StraightLinePathfinder::new();
        let r = pf.naive_route(&chart, Cell::new(0, 1), Cell::new(2, 1));
        assert_eq!(r.start(), Cell::new(0, 1));
        assert_eq!(r.end(), Cell::new(2, 1));
        assert!(r.iter().any(|c| !chart.is_navigable(c)));
    }

    #[test]
    fn memoizes_both_directions() {
        let chart = SeaChart::new(4, 4);
        let mut pf = StraightLinePathfinder::new();
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 3);
        let forward = pf.naive_route(&chart, a, b);
        assert_eq!(pf.memory().len(), 2);

        // Reverse query is served from memory, reversed.
        let back = pf.naive_route(&chart, b, a);
        assert_eq!(back, forward.reversed());
        assert_eq!(pf.memory().len(), 2);
    }

    #[test]
    fn discarding_variant_remembers_nothing() {
        let chart = SeaChart::new(4, 4);
        let mut pf = StraightLinePathfinder::discarding();
        let r = pf.naive_route(&chart, Cell::new(0, 0), Cell::new(3, 0));
        assert_eq!(r.len(), 4);
        assert!(
            pf.memory()
                .lookup(Cell::new(0, 0), Cell::new(3, 0))
                .is_unknown()
        );
    }

    #[test]
    fn pathfinder_trait_always_succeeds() {
        let chart = SeaChart::from_ascii("#.#").unwrap();
        let mut pf = StraightLinePathfinder::new();
        let r = Pathfinder::route(&mut pf, &chart, Cell::new(0, 0), Cell::new(2, 0));
        assert!(r.is_some());
    }
}
