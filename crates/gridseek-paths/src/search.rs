//! One-call entry points for the frontier search.

use gridseek_core::{Coord, Grid, GridWorld, WorldError};

use crate::astar::Route;
use crate::cost::{CostMode, CostModel};
use crate::pathrange::PathRange;

/// Search `world` from its start to its goal under `mode`.
///
/// `None` means the goal is walled off from the start; that is an ordinary
/// outcome, not an error.
pub fn search(world: &GridWorld, mode: CostMode) -> Option<Route> {
    let mut pr = PathRange::for_world(world);
    pr.astar_route(&CostModel::new(world, mode), world.start(), world.goal())
}

/// Validate the endpoints, then search `grid` from `start` to `goal`.
///
/// Endpoint problems are reported as a [`WorldError`] before any search
/// work is done. The grid is only read.
pub fn deterministic_search(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    mode: CostMode,
) -> Result<Option<Route>, WorldError> {
    let world = GridWorld::new(grid.clone(), start, goal)?;
    Ok(search(&world, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::Tile;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::{HashMap, VecDeque};

    fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, wall_pct: f64) -> Grid {
        let mut g = Grid::new(rows, cols);
        for r in 0..rows as i32 {
            for c in 0..cols as i32 {
                let tile = if rng.random_bool(wall_pct) {
                    Tile::Wall
                } else {
                    Tile::Valued(rng.random_range(0..6))
                };
                g.set(Coord::new(r, c), tile);
            }
        }
        g.set(Coord::new(0, 0), Tile::Start);
        g.set(Coord::new(rows as i32 - 1, cols as i32 - 1), Tile::Goal);
        g
    }

    /// Breadth-first move count from start to goal, `None` if walled off.
    fn shortest_len(world: &GridWorld) -> Option<u32> {
        let mut dist: HashMap<Coord, u32> = HashMap::from([(world.start(), 0)]);
        let mut queue = VecDeque::from([world.start()]);
        while let Some(c) = queue.pop_front() {
            let d = dist[&c];
            if c == world.goal() {
                return Some(d);
            }
            for n in world.neighbors(c) {
                if !dist.contains_key(&n) {
                    dist.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        None
    }

    #[test]
    fn unit_cost_matches_bfs_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let rows = rng.random_range(2..12);
            let cols = rng.random_range(2..12);
            let grid = random_grid(&mut rng, rows, cols, 0.3);
            let goal = Coord::new(rows as i32 - 1, cols as i32 - 1);
            let world = GridWorld::new(grid, Coord::new(0, 0), goal).unwrap();
            let expected = shortest_len(&world);

            for mode in CostMode::ALL {
                let found = search(&world, mode);
                let Some(expected) = expected else {
                    assert!(found.is_none(), "{mode:?} found a path BFS could not");
                    continue;
                };
                let route = found.unwrap();
                assert_eq!(route.path.first(), Some(&world.start()));
                assert_eq!(route.path.last(), Some(&goal));
                for w in route.path.windows(2) {
                    assert!(w[0].is_adjacent(w[1]));
                    assert!(world.is_passable(w[1]));
                }
                if mode != CostMode::ValueAsCost {
                    assert_eq!(route.moves() as u32, expected);
                    assert_eq!(route.cost, u64::from(expected));
                }
                let summed: u64 = route.path[1..]
                    .iter()
                    .map(|&c| u64::from(world.cell_value(c)))
                    .sum();
                assert_eq!(route.aux, summed);
            }
        }
    }

    #[test]
    fn value_as_cost_is_minimal() {
        // Compare against an exhaustive relaxation on small grids.
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let rows = rng.random_range(2..7);
            let cols = rng.random_range(2..7);
            let grid = random_grid(&mut rng, rows, cols, 0.2);
            let goal = Coord::new(rows as i32 - 1, cols as i32 - 1);
            let world = GridWorld::new(grid, Coord::new(0, 0), goal).unwrap();

            // Bellman-Ford style relaxation.
            let n = rows * cols;
            let mut best = vec![u64::MAX; n];
            let idx = |c: Coord| c.row as usize * cols + c.col as usize;
            best[idx(world.start())] = 0;
            for _ in 0..n {
                for (c, t) in world.grid().iter() {
                    if !t.is_passable() || best[idx(c)] == u64::MAX {
                        continue;
                    }
                    for nb in world.neighbors(c) {
                        let cand = best[idx(c)] + u64::from(world.cell_value(nb));
                        if cand < best[idx(nb)] {
                            best[idx(nb)] = cand;
                        }
                    }
                }
            }

            match search(&world, CostMode::ValueAsCost) {
                Some(route) => assert_eq!(route.cost, best[idx(goal)]),
                None => assert_eq!(best[idx(goal)], u64::MAX),
            }
        }
    }

    #[test]
    fn searches_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = random_grid(&mut rng, 15, 15, 0.25);
        let goal = Coord::new(14, 14);
        for mode in CostMode::ALL {
            let a = deterministic_search(&grid, Coord::new(0, 0), goal, mode).unwrap();
            let b = deterministic_search(&grid, Coord::new(0, 0), goal, mode).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn invalid_endpoints_fail_before_search() {
        let mut grid = Grid::new(3, 3);
        grid.set(Coord::new(1, 1), Tile::Wall);
        let mode = CostMode::UnitCost;
        let err = deterministic_search(&grid, Coord::new(1, 1), Coord::new(2, 2), mode);
        assert!(matches!(err, Err(WorldError::Blocked { .. })));
        let err = deterministic_search(&grid, Coord::new(0, 0), Coord::new(3, 3), mode);
        assert!(matches!(err, Err(WorldError::OutOfBounds { .. })));
    }

    #[test]
    fn walled_off_start_is_not_found() {
        let rows = vec![
            vec![Tile::Start, Tile::Wall, Tile::Empty],
            vec![Tile::Wall, Tile::Empty, Tile::Empty],
            vec![Tile::Empty, Tile::Empty, Tile::Goal],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        for mode in CostMode::ALL {
            let out = deterministic_search(&grid, Coord::new(0, 0), Coord::new(2, 2), mode);
            assert_eq!(out, Ok(None));
        }
    }
}
