//! **gridseek-core**: the world model shared by the gridseek search engines.
//!
//! This crate provides the plain data types both strategies consume:
//! coordinates and moves, tile kinds, a rectangular grid, and the
//! [`GridWorld`] view that answers adjacency, passability, heuristic and
//! cell-value queries.

pub mod error;
pub mod geom;
pub mod grid;
pub mod tile;
pub mod world;

pub use error::{Endpoint, WorldError};
pub use geom::{Coord, Dir, manhattan};
pub use grid::Grid;
pub use tile::Tile;
pub use world::{GridWorld, NEIGHBOR_ORDER};
