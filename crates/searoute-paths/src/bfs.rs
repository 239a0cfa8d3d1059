//! Breadth-first pathfinding — the uncached, hop-minimal baseline.

use std::collections::{HashMap, VecDeque};

use searoute_core::Cell;

use crate::route::Route;
use crate::traits::{Pathfinder, Terrain};

/// Unweighted frontier search over navigable Moore neighbors.
///
/// Under uniform edge cost the result has minimal hop count, which makes
/// this the reference the weighted search is validated against. No
/// heuristic, no cost weighting, no cache.
#[derive(Debug, Default)]
pub struct BreadthFirstPathfinder {
    // Scratch buffer reused across queries.
    nbuf: Vec<Cell>,
}

impl BreadthFirstPathfinder {
    /// Create a new pathfinder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a hop-minimal route, or `None` if the frontier empties first.
    ///
    /// Land cells are excluded from expansion unless the cell *is* the
    /// destination, so a goal port on nominally blocking terrain stays
    /// reachable.
    pub fn route<T: Terrain>(&mut self, terrain: &T, start: Cell, end: Cell) -> Option<Route> {
        if start == end {
            return Some(Route::single(start));
        }

        // Predecessor map doubles as the visited set; start maps to itself.
        let mut came_from: HashMap<Cell, Cell> = HashMap::new();
        came_from.insert(start, start);
        let mut frontier: VecDeque<Cell> = VecDeque::new();
        frontier.push_back(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let mut found = false;
        'search: while let Some(cur) = frontier.pop_front() {
            nbuf.clear();
            terrain.neighbors(cur, &mut nbuf);
            for &n in nbuf.iter() {
                if came_from.contains_key(&n) {
                    continue;
                }
                if !terrain.is_navigable(n) && n != end {
                    continue;
                }
                came_from.insert(n, cur);
                if n == end {
                    found = true;
                    break 'search;
                }
                frontier.push_back(n);
            }
        }

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        let mut cells = vec![end];
        let mut cur = end;
        while cur != start {
            cur = came_from[&cur];
            cells.push(cur);
        }
        cells.reverse();
        Some(Route::new(cells))
    }
}

impl Pathfinder for BreadthFirstPathfinder {
    fn route<T: Terrain>(&mut self, terrain: &T, start: Cell, end: Cell) -> Option<Route> {
        BreadthFirstPathfinder::route(self, terrain, start, end)
    }
}
