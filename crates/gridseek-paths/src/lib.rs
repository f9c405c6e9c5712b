//! Frontier (best-first) search on gridseek worlds.
//!
//! This crate provides an A* search with an admissible Manhattan heuristic,
//! run through [`PathRange`], which owns and reuses its node array so that
//! repeated queries incur no allocations after warm-up.
//!
//! - **A\*** optimal path search ([`PathRange::astar_route`])
//! - one-call entry points ([`search`], [`deterministic_search`])
//!
//! Frontier ties on `f = g + h` are broken by the smaller `(row, col)`, so
//! identical inputs always produce identical paths.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | cost and auxiliary tally |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`CostModel`] implements all three for a [`GridWorld`](gridseek_core::GridWorld)
//! under each [`CostMode`].

mod astar;
mod cost;
mod pathrange;
mod search;
mod traits;

pub use astar::Route;
pub use cost::{CostMode, CostModel};
pub use pathrange::PathRange;
pub use search::{deterministic_search, search};
pub use traits::{AstarPather, Pather, WeightedPather};
