//! **searoute-gen** — random sea chart generation.
//!
//! Produces archipelago-style [`SeaChart`](searoute_core::SeaChart)s for
//! demos and tests: random land seeding smoothed by cellular automata into
//! island clusters, followed by port placement along the open-sea coast.

pub mod archipelago;

pub use archipelago::{ArchipelagoGen, CoastlineRule};
