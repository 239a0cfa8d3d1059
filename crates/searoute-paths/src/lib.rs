//! Route search and caching for sea travel on 2D grid worlds.
//!
//! This crate computes traversable routes between two cells of a fixed
//! water/land grid (some land cells marked as ports) and caches every answer
//! so repeated queries between the same endpoints are free:
//!
//! - **Route memory** ([`RouteMemory`]) — endpoint-pair cache distinguishing
//!   *found*, *provably impossible* and *not yet known*.
//! - **Straight-line** ([`StraightLinePathfinder`]) — obstacle-blind greedy
//!   walk used as an optimistic first guess.
//! - **Breadth-first** ([`BreadthFirstPathfinder`]) — uncached hop-minimal
//!   baseline, mainly for validating the weighted search.
//! - **A\*** ([`AstarPathfinder`]) — the weighted, heuristic-guided search.
//! - **Fallback planner** ([`RoutePlanner`]) — composes straight-line + A\*
//!   over one shared memory; the subsystem's public entry point.
//!
//! The world is only seen through the [`Terrain`] and [`Distance`] traits,
//! so any grid model can be routed over; `searoute-core`'s `SeaChart`
//! implements [`Terrain`] out of the box.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Terrain`] | navigability + Moore-neighbor enumeration |
//! | [`Distance`] | edge cost, doubling as the A* heuristic |
//! | [`Pathfinder`] | the strategy family's common `route` operation |

mod astar;
mod bfs;
mod distance;
mod memory;
mod planner;
mod route;
mod straight;
mod traits;

pub use astar::AstarPathfinder;
pub use bfs::BreadthFirstPathfinder;
pub use distance::{Chebyshev, Equirectangular, Euclidean, chebyshev, euclidean};
pub use memory::{CachedRoute, DiscardingMemory, RouteMemory, RouteStore};
pub use planner::RoutePlanner;
pub use route::Route;
pub use straight::StraightLinePathfinder;
pub use traits::{Distance, Pathfinder, Terrain};
