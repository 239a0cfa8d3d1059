//! A* pathfinding — the weighted, heuristic-guided search.

use std::cell::RefCell;
use std::collections::{BinaryHeap, HashMap};
use std::rc::Rc;

use searoute_core::Cell;

use crate::memory::{CachedRoute, RouteMemory, RouteStore};
use crate::route::Route;
use crate::traits::{Distance, Pathfinder, Terrain};

/// Frontier entry, ordered so the heap pops the lowest `f` first.
///
/// Stale entries (superseded by a cheaper `g` for the same cell) stay in the
/// heap and are skipped on pop.
struct OpenNode {
    cell: Cell,
    g: f64,
    f: f64,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f) == std::cmp::Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The weighted pathfinder. Minimizes total [`Distance`] cost; the same
/// cost function doubles as the heuristic, which keeps the search optimal
/// whenever the function never overestimates true traversal cost.
///
/// Successful routes are recorded in the route memory, which is shared with
/// whatever constructed the pathfinder over it (see
/// [`with_memory`](AstarPathfinder::with_memory)). Failed searches are
/// *not* recorded here: whether "impossible" becomes permanent knowledge is
/// the memory owner's decision.
pub struct AstarPathfinder<D: Distance> {
    distance: D,
    memory: Rc<RefCell<RouteMemory>>,
    searches: usize,
    // Scratch buffer reused across queries.
    nbuf: Vec<Cell>,
}

impl<D: Distance> AstarPathfinder<D> {
    /// A standalone pathfinder owning a fresh memory.
    pub fn new(distance: D) -> Self {
        Self::with_memory(distance, Rc::new(RefCell::new(RouteMemory::new())))
    }

    /// A pathfinder recording into (and answering from) a shared memory.
    pub fn with_memory(distance: D, memory: Rc<RefCell<RouteMemory>>) -> Self {
        Self {
            distance,
            memory,
            searches: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Handle to the route memory this pathfinder populates.
    pub fn memory(&self) -> Rc<RefCell<RouteMemory>> {
        Rc::clone(&self.memory)
    }

    /// How many actual frontier searches have run (memory hits and
    /// degenerate same-cell queries excluded).
    pub fn search_count(&self) -> usize {
        self.searches
    }

    /// Compute the cheapest route from `start` to `end`, or `None` if no
    /// route exists.
    ///
    /// Land neighbors are excluded from expansion unless the neighbor *is*
    /// the destination, so a goal port on blocking terrain stays reachable.
    pub fn route<T: Terrain>(&mut self, terrain: &T, start: Cell, end: Cell) -> Option<Route> {
        match self.memory.borrow().lookup(start, end) {
            CachedRoute::Found(r) => return Some(r),
            CachedRoute::Impossible => return None,
            CachedRoute::Unknown => {}
        }

        if start == end {
            let route = Route::single(start);
            self.memory.borrow_mut().record(start, end, route.clone());
            return Some(route);
        }

        self.searches += 1;

        let mut best_g: HashMap<Cell, f64> = HashMap::new();
        let mut parent: HashMap<Cell, Cell> = HashMap::new();
        let mut open: BinaryHeap<OpenNode> = BinaryHeap::new();

        best_g.insert(start, 0.0);
        open.push(OpenNode {
            cell: start,
            g: 0.0,
            f: self.distance.cost(start, end),
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let mut found = false;
        while let Some(cur) = open.pop() {
            // Skip stale entries.
            if best_g.get(&cur.cell).is_some_and(|&g| cur.g > g) {
                continue;
            }
            if cur.cell == end {
                found = true;
                break;
            }

            nbuf.clear();
            terrain.neighbors(cur.cell, &mut nbuf);

            for &n in nbuf.iter() {
                if !terrain.is_navigable(n) && n != end {
                    continue;
                }
                let tentative = cur.g + self.distance.cost(cur.cell, n);
                // Standard relaxation: a worse g is a no-op.
                if best_g.get(&n).is_some_and(|&g| tentative >= g) {
                    continue;
                }
                best_g.insert(n, tentative);
                parent.insert(n, cur.cell);
                open.push(OpenNode {
                    cell: n,
                    g: tentative,
                    f: tentative + self.distance.cost(n, end),
                });
            }
        }

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct by walking predecessors, then reverse.
        let mut cells = vec![end];
        let mut cur = end;
        while cur != start {
            cur = parent[&cur];
            cells.push(cur);
        }
        cells.reverse();

        let route = Route::new(cells);
        self.memory.borrow_mut().record(start, end, route.clone());
        Some(route)
    }
}

impl<D: Distance> Pathfinder for AstarPathfinder<D> {
    fn route<T: Terrain>(&mut self, terrain: &T, start: Cell, end: Cell) -> Option<Route> {
        AstarPathfinder::route(self, terrain, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::BreadthFirstPathfinder;
    use crate::distance::{Chebyshev, Euclidean};
    use searoute_core::SeaChart;

    fn assert_route_valid(chart: &SeaChart, r: &Route, start: Cell, end: Cell) {
        assert_eq!(r.start(), start);
        assert_eq!(r.end(), end);
        for w in r.cells().windows(2) {
            assert_eq!(w[0].chebyshev_to(w[1]), 1, "{} -> {}", w[0], w[1]);
        }
        for &c in r.cells() {
            assert!(chart.is_navigable(c) || c == end, "route crosses land at {c}");
        }
    }

    #[test]
    fn open_water_diagonal_is_optimal() {
        let chart = SeaChart::new(5, 5);
        let mut pf = AstarPathfinder::new(Euclidean);
        let r = pf.route(&chart, Cell::new(0, 0), Cell::new(4, 4)).unwrap();
        assert_route_valid(&chart, &r, Cell::new(0, 0), Cell::new(4, 4));
        assert_eq!(r.len(), 5);
    }

    #[test]
    fn detours_around_land() {
        let chart = SeaChart::from_ascii(
            "..#..\n\
             ..#..\n\
             ..#..\n\
             .....",
        )
        .unwrap();
        let mut pf = AstarPathfinder::new(Euclidean);
        let start = Cell::new(0, 0);
        let end = Cell::new(4, 0);
        let r = pf.route(&chart, start, end).unwrap();
        assert_route_valid(&chart, &r, start, end);
    }

    #[test]
    fn port_is_a_hole_in_the_land() {
        let chart = SeaChart::from_ascii(
            "..P..\n\
             ..#..\n\
             ..#..\n\
             ..#..\n\
             ..#..",
        )
        .unwrap();
        let mut pf = AstarPathfinder::new(Euclidean);
        let start = Cell::new(0, 0);
        let end = Cell::new(4, 0);
        let r = pf.route(&chart, start, end).unwrap();
        assert_route_valid(&chart, &r, start, end);
        assert!(r.iter().any(|c| c == Cell::new(2, 0)));
    }

    #[test]
    fn blocked_destination_is_still_eligible() {
        let chart = SeaChart::from_ascii("..#").unwrap();
        let mut pf = AstarPathfinder::new(Euclidean);
        let r = pf.route(&chart, Cell::new(0, 0), Cell::new(2, 0)).unwrap();
        assert_eq!(r.end(), Cell::new(2, 0));
    }

    #[test]
    fn no_route_returns_none_without_recording() {
        let chart = SeaChart::from_ascii(
            "#####\n\
             #.#..\n\
             #####",
        )
        .unwrap();
        let mut pf = AstarPathfinder::new(Euclidean);
        let start = Cell::new(1, 1);
        let end = Cell::new(4, 1);
        assert!(pf.route(&chart, start, end).is_none());
        // Negative results are the memory owner's to record, not A*'s.
        assert!(pf.memory().borrow().lookup(start, end).is_unknown());
        // Without an orchestrator the search therefore reruns.
        assert!(pf.route(&chart, start, end).is_none());
        assert_eq!(pf.search_count(), 2);
    }

    #[test]
    fn second_query_is_served_from_memory() {
        let chart = SeaChart::new(6, 6);
        let mut pf = AstarPathfinder::new(Euclidean);
        let start = Cell::new(0, 5);
        let end = Cell::new(5, 0);
        let first = pf.route(&chart, start, end).unwrap();
        assert_eq!(pf.search_count(), 1);
        let second = pf.route(&chart, start, end).unwrap();
        assert_eq!(first, second);
        assert_eq!(pf.search_count(), 1);
    }

    #[test]
    fn degenerate_query_is_single_cell() {
        let chart = SeaChart::new(3, 3);
        let mut pf = AstarPathfinder::new(Euclidean);
        let c = Cell::new(2, 0);
        assert_eq!(pf.route(&chart, c, c).unwrap().cells(), &[c]);
        assert_eq!(pf.search_count(), 0);
    }

    #[test]
    fn matches_bfs_hop_count_under_uniform_cost() {
        // Chebyshev cost makes every Moore step cost 1, so minimal cost is
        // minimal hop count, exactly what BFS computes.
        let chart = SeaChart::from_ascii(
            "......\n\
             .##...\n\
             .#..#.\n\
             .#.##.\n\
             ......",
        )
        .unwrap();
        let mut astar = AstarPathfinder::new(Chebyshev);
        let mut bfs = BreadthFirstPathfinder::new();
        for (start, end) in [
            (Cell::new(0, 0), Cell::new(5, 4)),
            (Cell::new(0, 4), Cell::new(5, 0)),
            (Cell::new(2, 2), Cell::new(0, 0)),
        ] {
            let a = astar.route(&chart, start, end).unwrap();
            let b = bfs.route(&chart, start, end).unwrap();
            assert_eq!(a.len(), b.len(), "{start} -> {end}");
            assert_route_valid(&chart, &a, start, end);
        }
    }

    #[test]
    fn shared_memory_is_answered_by_both() {
        let chart = SeaChart::new(4, 4);
        let memory = Rc::new(RefCell::new(RouteMemory::new()));
        let mut first = AstarPathfinder::with_memory(Euclidean, Rc::clone(&memory));
        let start = Cell::new(0, 0);
        let end = Cell::new(3, 3);
        let r = first.route(&chart, start, end).unwrap();

        let mut second = AstarPathfinder::with_memory(Euclidean, memory);
        assert_eq!(second.route(&chart, start, end).unwrap(), r);
        assert_eq!(second.search_count(), 0);
    }
}
