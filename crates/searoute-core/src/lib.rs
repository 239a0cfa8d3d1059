//! **searoute-core** — foundational types for sea-route planning.
//!
//! This crate provides the grid geometry primitives ([`Cell`], [`Range`]) and
//! the concrete world model ([`SeaChart`]: water, land and ports) shared
//! across the *searoute* ecosystem. The path-search algorithms themselves
//! live in `searoute-paths` and only see the world through traits, so this
//! crate stays free of any search logic.

pub mod chart;
pub mod geom;

pub use chart::{ChartParseError, SeaChart};
pub use geom::{Cell, Range};
