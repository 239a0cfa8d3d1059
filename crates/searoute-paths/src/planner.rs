//! The route planner — straight-line fast path with A* fallback.

use std::cell::RefCell;
use std::rc::Rc;

use searoute_core::Cell;

use crate::astar::AstarPathfinder;
use crate::memory::{CachedRoute, DiscardingMemory, RouteMemory, RouteStore};
use crate::route::Route;
use crate::straight::StraightLinePathfinder;
use crate::traits::{Distance, Pathfinder, Terrain};

/// The subsystem's public entry point: same contract as
/// [`AstarPathfinder::route`], with a cheaper common case.
///
/// Most queries in a simulation are between nearby, unobstructed cells,
/// where the naive diagonal walk is already correct and orders of magnitude
/// cheaper than a weighted search. The planner asks the straight-line
/// generator first and only falls back to A* when the naive route would
/// cross land.
///
/// The planner owns the authoritative [`RouteMemory`] and constructs its A*
/// pathfinder over the same instance; the straight-line helper is backed by
/// a [`DiscardingMemory`] so its naive land-crossing routes never pollute
/// the shared cache.
pub struct RoutePlanner<D: Distance> {
    memory: Rc<RefCell<RouteMemory>>,
    astar: AstarPathfinder<D>,
    straight: StraightLinePathfinder<DiscardingMemory>,
}

impl<D: Distance> RoutePlanner<D> {
    /// Create a planner with a fresh route memory.
    pub fn new(distance: D) -> Self {
        let memory = Rc::new(RefCell::new(RouteMemory::new()));
        Self {
            astar: AstarPathfinder::with_memory(distance, Rc::clone(&memory)),
            straight: StraightLinePathfinder::discarding(),
            memory,
        }
    }

    /// Handle to the authoritative route memory.
    pub fn memory(&self) -> Rc<RefCell<RouteMemory>> {
        Rc::clone(&self.memory)
    }

    /// How many A* frontier searches have run on behalf of this planner.
    pub fn search_count(&self) -> usize {
        self.astar.search_count()
    }

    /// Compute (or recall) a route from `start` to `end`, or `None` if no
    /// route exists. A negative answer is recorded permanently: the grid is
    /// assumed static, so a failed search is never repeated.
    ///
    /// The destination is always treated as reachable, even when it sits on
    /// otherwise non-navigable land. A straight-line guess whose only
    /// non-navigable cell is `end` itself is accepted without falling back
    /// to search.
    pub fn route<T: Terrain>(&mut self, terrain: &T, start: Cell, end: Cell) -> Option<Route> {
        match self.memory.borrow().lookup(start, end) {
            CachedRoute::Found(r) => return Some(r),
            CachedRoute::Impossible => return None,
            CachedRoute::Unknown => {}
        }

        // Optimistic first guess: valid whenever it stays off land. The
        // destination is exempt, mirroring the A* goal rule.
        let naive = self.straight.naive_route(terrain, start, end);
        if naive.iter().all(|c| c == end || terrain.is_navigable(c)) {
            self.memory.borrow_mut().record(start, end, naive.clone());
            return Some(naive);
        }

        // A* records its own successes in the shared memory.
        let found = self.astar.route(terrain, start, end);
        if found.is_none() {
            self.memory.borrow_mut().record_impossible(start, end);
        }
        found
    }
}

impl<D: Distance> Pathfinder for RoutePlanner<D> {
    fn route<T: Terrain>(&mut self, terrain: &T, start: Cell, end: Cell) -> Option<Route> {
        RoutePlanner::route(self, terrain, start, end)
    }
}
