//! The [`Tile`] type: what occupies a single grid position.

use std::fmt;

/// The kind of a grid position.
///
/// `Valued(n)` carries a non-negative magnitude that is read as a cost or
/// as a reward depending on the search mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Start,
    Goal,
    Wall,
    #[default]
    Empty,
    Valued(u32),
}

impl Tile {
    /// Whether a walker may stand on this tile.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// The numeric value carried by the tile, 0 for anything not `Valued`.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            Tile::Valued(n) => n,
            _ => 0,
        }
    }
}

impl From<u32> for Tile {
    fn from(n: u32) -> Self {
        Tile::Valued(n)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Start => f.write_str("S"),
            Tile::Goal => f.write_str("G"),
            Tile::Wall => f.write_str("#"),
            Tile::Empty => f.write_str("0"),
            Tile::Valued(n) => write!(f, "{n}"),
        }
    }
}
