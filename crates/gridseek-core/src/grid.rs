//! The [`Grid`] type: a fixed-size rectangle of [`Tile`]s.
//!
//! A `Grid` owns its storage. Cloning yields an independent copy, which is
//! what a search run that consumes cell values must be handed.

use crate::geom::Coord;
use crate::tile::Tile;

/// A rectangular, row-major grid of [`Tile`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with
    /// [`Tile::Empty`].
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            tiles: vec![Tile::Empty; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from row vectors.
    ///
    /// Returns `None` if the rows do not all have the same width.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Option<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != n_cols) {
            return None;
        }
        Some(Self {
            tiles: rows.into_iter().flatten().collect(),
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of positions (`rows × cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no positions at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `c` lies inside the grid on both axes.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.row as usize * self.cols + c.col as usize)
        } else {
            None
        }
    }

    /// Coordinate of a flat row-major index.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// The tile at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Tile> {
        self.index(c).map(|i| self.tiles[i])
    }

    /// Set the tile at `c`. No-op if out of bounds.
    pub fn set(&mut self, c: Coord, tile: Tile) {
        if let Some(i) = self.index(c) {
            self.tiles[i] = tile;
        }
    }

    /// Fill every position with `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Row-major iterator over `(Coord, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (self.coord(i), t))
    }
}
