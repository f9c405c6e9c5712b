//! Configuration errors raised before a search begins.

use std::fmt;

use crate::geom::Coord;

/// Which endpoint of a search a [`WorldError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Errors that make a [`GridWorld`](crate::GridWorld) unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The grid has no rows or no columns.
    Empty,
    /// An endpoint lies outside the grid.
    OutOfBounds {
        what: Endpoint,
        at: Coord,
        rows: usize,
        cols: usize,
    },
    /// An endpoint sits on a wall.
    Blocked { what: Endpoint, at: Coord },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("grid has no cells"),
            Self::OutOfBounds {
                what,
                at,
                rows,
                cols,
            } => write!(f, "{what} {at} is outside the {rows}x{cols} grid"),
            Self::Blocked { what, at } => write!(f, "{what} {at} is a wall"),
        }
    }
}

impl std::error::Error for WorldError {}
