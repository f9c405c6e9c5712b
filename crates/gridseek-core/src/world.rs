//! [`GridWorld`]: a grid together with its start and goal.
//!
//! Both search engines read the world through this type. The only
//! mutation it offers is [`GridWorld::consume`], used by the opt-in
//! value-consuming fitness mode of the population search.

use crate::error::{Endpoint, WorldError};
use crate::geom::{Coord, Dir, manhattan};
use crate::grid::Grid;
use crate::tile::Tile;

/// Order in which [`GridWorld::neighbors`] yields adjacent cells.
///
/// Frontier tie-breaking is keyed on coordinates, not on this order, but
/// the order is kept fixed so that runs are reproducible.
pub const NEIGHBOR_ORDER: [Dir; 4] = [Dir::Right, Dir::Down, Dir::Left, Dir::Up];

/// A grid plus the start and goal coordinates of a search.
///
/// The supplied `start` / `goal` are authoritative; any `Tile::Start` or
/// `Tile::Goal` markers embedded in the grid are only passable floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    grid: Grid,
    start: Coord,
    goal: Coord,
}

impl GridWorld {
    /// Create a world, checking that both endpoints are inside the grid
    /// and not on a wall.
    pub fn new(grid: Grid, start: Coord, goal: Coord) -> Result<Self, WorldError> {
        if grid.is_empty() {
            return Err(WorldError::Empty);
        }
        for (what, at) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            match grid.at(at) {
                None => {
                    return Err(WorldError::OutOfBounds {
                        what,
                        at,
                        rows: grid.rows(),
                        cols: grid.cols(),
                    });
                }
                Some(Tile::Wall) => return Err(WorldError::Blocked { what, at }),
                Some(_) => {}
            }
        }
        Ok(Self { grid, start, goal })
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give back the underlying grid, including any consumed values.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Upper bound on the moves of one walk: `rows × cols`.
    #[inline]
    pub fn move_budget(&self) -> usize {
        self.grid.len()
    }

    /// True iff `c` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.grid.at(c).is_some_and(Tile::is_passable)
    }

    /// Passable orthogonal neighbors of `c`, in [`NEIGHBOR_ORDER`].
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_ORDER
            .into_iter()
            .map(move |d| c.step(d))
            .filter(|&n| self.is_passable(n))
    }

    /// Manhattan distance from `c` to the goal.
    #[inline]
    pub fn heuristic(&self, c: Coord) -> u32 {
        manhattan(c, self.goal)
    }

    /// Value carried by the tile at `c`; 0 when unvalued or out of bounds.
    #[inline]
    pub fn cell_value(&self, c: Coord) -> u32 {
        self.grid.at(c).map_or(0, Tile::value)
    }

    /// Position after moving from `c` in direction `dir`. A move into a
    /// wall or off the grid leaves the walker where it is.
    #[inline]
    pub fn step(&self, c: Coord, dir: Dir) -> Coord {
        let n = c.step(dir);
        if self.is_passable(n) { n } else { c }
    }

    /// Take the value at `c`, leaving an empty tile behind.
    ///
    /// This changes the world's observable state. Callers that run several
    /// searches over the same base grid must give each run its own copy.
    pub fn consume(&mut self, c: Coord) -> u32 {
        let v = self.cell_value(c);
        if v > 0 {
            self.grid.set(c, Tile::Empty);
        }
        v
    }

    /// Smallest value over all passable cells, or `None` if there are no
    /// passable cells.
    pub fn min_passable_value(&self) -> Option<u32> {
        self.grid
            .iter()
            .filter(|(_, t)| t.is_passable())
            .map(|(_, t)| t.value())
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_3x3() -> GridWorld {
        let mut g = Grid::new(3, 3);
        g.set(Coord::new(0, 1), Tile::Wall);
        g.set(Coord::new(1, 1), Tile::Valued(5));
        GridWorld::new(g, Coord::new(0, 0), Coord::new(2, 2)).unwrap()
    }

    #[test]
    fn rejects_bad_endpoints() {
        let g = Grid::new(3, 3);
        let err = GridWorld::new(g.clone(), Coord::new(-1, 0), Coord::new(2, 2)).unwrap_err();
        assert!(matches!(
            err,
            WorldError::OutOfBounds {
                what: Endpoint::Start,
                ..
            }
        ));
        let err = GridWorld::new(g.clone(), Coord::new(0, 0), Coord::new(0, 3)).unwrap_err();
        assert!(matches!(
            err,
            WorldError::OutOfBounds {
                what: Endpoint::Goal,
                ..
            }
        ));

        let mut walled = g;
        walled.set(Coord::new(2, 2), Tile::Wall);
        let err = GridWorld::new(walled, Coord::new(0, 0), Coord::new(2, 2)).unwrap_err();
        assert_eq!(
            err,
            WorldError::Blocked {
                what: Endpoint::Goal,
                at: Coord::new(2, 2)
            }
        );

        let err = GridWorld::new(Grid::new(0, 0), Coord::ZERO, Coord::ZERO).unwrap_err();
        assert_eq!(err, WorldError::Empty);
    }

    #[test]
    fn passability_and_neighbors() {
        let w = world_3x3();
        assert!(w.is_passable(Coord::new(0, 0)));
        assert!(!w.is_passable(Coord::new(0, 1)));
        assert!(!w.is_passable(Coord::new(3, 0)));

        let n: Vec<_> = w.neighbors(Coord::new(1, 1)).collect();
        // Right, Down, Left, Up; Up is the wall at (0, 1).
        assert_eq!(
            n,
            vec![Coord::new(1, 2), Coord::new(2, 1), Coord::new(1, 0)]
        );

        let corner: Vec<_> = w.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(corner, vec![Coord::new(1, 0)]);
    }

    #[test]
    fn heuristic_and_values() {
        let w = world_3x3();
        assert_eq!(w.heuristic(Coord::new(0, 0)), 4);
        assert_eq!(w.heuristic(Coord::new(2, 2)), 0);
        assert_eq!(w.cell_value(Coord::new(1, 1)), 5);
        assert_eq!(w.cell_value(Coord::new(0, 0)), 0);
        assert_eq!(w.cell_value(Coord::new(7, 7)), 0);
        assert_eq!(w.min_passable_value(), Some(0));
        assert_eq!(w.move_budget(), 9);
    }

    #[test]
    fn step_stays_put_when_blocked() {
        let w = world_3x3();
        let s = w.start();
        assert_eq!(w.step(s, Dir::Right), s);
        assert_eq!(w.step(s, Dir::Up), s);
        assert_eq!(w.step(s, Dir::Down), Coord::new(1, 0));
    }

    #[test]
    fn consume_zeroes_value() {
        let mut w = world_3x3();
        assert_eq!(w.consume(Coord::new(1, 1)), 5);
        assert_eq!(w.consume(Coord::new(1, 1)), 0);
        assert_eq!(w.grid().at(Coord::new(1, 1)), Some(Tile::Empty));
    }

    #[test]
    fn embedded_markers_are_not_authoritative() {
        let mut g = Grid::new(2, 2);
        g.set(Coord::new(0, 0), Tile::Goal);
        g.set(Coord::new(1, 1), Tile::Start);
        let w = GridWorld::new(g, Coord::new(0, 1), Coord::new(1, 0)).unwrap();
        assert_eq!(w.start(), Coord::new(0, 1));
        assert_eq!(w.goal(), Coord::new(1, 0));
        assert!(w.is_passable(Coord::new(0, 0)));
    }
}
