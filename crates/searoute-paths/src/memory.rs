//! Route memory — the endpoint-pair cache shared by the pathfinders.
//!
//! The underlying grid is assumed static for the lifetime of the cache, so
//! entries are created lazily and never evicted or invalidated.

use std::collections::HashMap;

use searoute_core::Cell;

use crate::route::Route;

/// What the cache knows about an endpoint pair.
///
/// *Impossible* is distinct from *Unknown* so an expensive failed search is
/// never repeated; a missing entry can never be confused with a negative
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedRoute {
    /// A concrete, reusable route.
    Found(Route),
    /// No route exists between these endpoints.
    Impossible,
    /// Nothing recorded yet; the caller must compute.
    Unknown,
}

impl CachedRoute {
    /// Whether nothing has been recorded for the pair.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, CachedRoute::Unknown)
    }
}

/// Storage interface for route knowledge.
///
/// `(start, end)` is directionally distinct from `(end, start)` at the
/// storage level; callers wanting symmetric reuse must query both orders
/// themselves (the straight-line pathfinder does).
pub trait RouteStore {
    /// Look up the pair, without side effects.
    fn lookup(&self, start: Cell, end: Cell) -> CachedRoute;

    /// Record a concrete route for the pair.
    fn record(&mut self, start: Cell, end: Cell, route: Route);

    /// Record that no route exists for the pair.
    fn record_impossible(&mut self, start: Cell, end: Cell);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Route(Route),
    Impossible,
}

/// The authoritative map-backed route store.
#[derive(Debug, Default, Clone)]
pub struct RouteMemory {
    map: HashMap<(Cell, Cell), Slot>,
}

impl RouteMemory {
    /// Create an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded pairs (found + impossible).
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl RouteStore for RouteMemory {
    fn lookup(&self, start: Cell, end: Cell) -> CachedRoute {
        match self.map.get(&(start, end)) {
            Some(Slot::Route(r)) => CachedRoute::Found(r.clone()),
            Some(Slot::Impossible) => CachedRoute::Impossible,
            None => CachedRoute::Unknown,
        }
    }

    fn record(&mut self, start: Cell, end: Cell, route: Route) {
        self.map.insert((start, end), Slot::Route(route));
    }

    fn record_impossible(&mut self, start: Cell, end: Cell) {
        self.map.insert((start, end), Slot::Impossible);
    }
}

/// A no-op store for pathfinders used as disposable helpers: remembers
/// nothing, so a naive land-crossing route can never leak into an
/// authoritative cache.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardingMemory;

impl RouteStore for DiscardingMemory {
    fn lookup(&self, _start: Cell, _end: Cell) -> CachedRoute {
        CachedRoute::Unknown
    }

    fn record(&mut self, _start: Cell, _end: Cell, _route: Route) {}

    fn record_impossible(&mut self, _start: Cell, _end: Cell) {}
}
