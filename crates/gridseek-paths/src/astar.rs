use std::collections::BinaryHeap;

use gridseek_core::Coord;

use crate::PathRange;
use crate::pathrange::NodeRef;
use crate::traits::AstarPather;

/// A path found by the frontier search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Cells from start to goal, both inclusive.
    pub path: Vec<Coord>,
    /// Accumulated cost under the pather's cost function.
    pub cost: u64,
    /// Accumulated auxiliary tally along `path`.
    pub aux: u64,
}

impl Route {
    /// Number of moves (one less than the number of cells).
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl PathRange {
    /// Compute an optimal path from `from` to `to` using A*.
    ///
    /// The frontier is keyed by `f = g + h`; ties go to the lexicographically
    /// smallest `(row, col)`. Returns `None` if `to` cannot be reached or
    /// either endpoint lies outside the range.
    pub fn astar_route<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Option<Route> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(Route {
                path: vec![from],
                cost: 0,
                aux: 0,
            });
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.aux = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            {
                let cn = &self.nodes[ci];
                if cn.generation != cur_gen || !cn.open || cn.f != current.f {
                    continue;
                }
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_aux = self.nodes[ci].aux;
            let current_pos = self.coord(ci);

            nbuf.clear();
            pather.neighbors(current_pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_pos, np);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.aux = current_aux + pather.tally(current_pos, np);
                n.f = tentative_g + pather.estimate(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("astar: {from} -> {to} unreachable, {expanded} expansions");
            return None;
        }

        let path = self.reconstruct(goal_idx);
        let goal = &self.nodes[goal_idx];
        log::debug!(
            "astar: {from} -> {to} found, {} moves, cost {}, {expanded} expansions",
            path.len() - 1,
            goal.g
        );
        Some(Route {
            path,
            cost: goal.g,
            aux: goal.aux,
        })
    }

    /// Follow predecessor links back from `goal_idx` and reverse them.
    fn reconstruct(&self, goal_idx: usize) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CostMode, CostModel};
    use gridseek_core::{Grid, GridWorld, Tile};

    fn open_world(rows: usize, cols: usize, goal: Coord) -> GridWorld {
        GridWorld::new(Grid::new(rows, cols), Coord::new(0, 0), goal).unwrap()
    }

    fn route(world: &GridWorld, mode: CostMode) -> Option<Route> {
        let mut pr = PathRange::for_world(world);
        pr.astar_route(&CostModel::new(world, mode), world.start(), world.goal())
    }

    fn assert_valid(world: &GridWorld, r: &Route) {
        assert_eq!(r.path.first(), Some(&world.start()));
        assert_eq!(r.path.last(), Some(&world.goal()));
        for w in r.path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} not adjacent", w[0], w[1]);
            assert!(world.is_passable(w[1]));
        }
    }

    #[test]
    fn open_3x3_unit_cost() {
        let w = open_world(3, 3, Coord::new(2, 2));
        let r = route(&w, CostMode::UnitCost).unwrap();
        assert_eq!(r.path.len(), 5);
        assert_eq!(r.moves(), 4);
        assert_eq!(r.cost, 4);
        assert_eq!(r.aux, 0);
        assert_valid(&w, &r);
    }

    #[test]
    fn tie_break_prefers_smaller_coordinates() {
        // Among the equally short paths, the frontier always expands the
        // lexicographically smallest cell, which hugs row 0 first.
        let w = open_world(3, 3, Coord::new(2, 2));
        let r = route(&w, CostMode::UnitCost).unwrap();
        assert_eq!(
            r.path,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn value_as_cost_avoids_expensive_cell() {
        let mut g = Grid::new(3, 3);
        g.set(Coord::new(1, 1), Tile::Valued(5));
        let w = GridWorld::new(g, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        let r = route(&w, CostMode::ValueAsCost).unwrap();
        assert!(!r.path.contains(&Coord::new(1, 1)));
        assert_eq!(r.aux, 0);
        assert_eq!(r.cost, 0);
        assert_valid(&w, &r);
    }

    #[test]
    fn value_as_cost_takes_detour_when_cheaper() {
        // Straight across row 0 costs 9 per cell; the long way round is free.
        let rows = vec![
            vec![Tile::Start, Tile::Valued(9), Tile::Valued(9), Tile::Goal],
            vec![Tile::Empty, Tile::Wall, Tile::Wall, Tile::Empty],
            vec![Tile::Empty, Tile::Empty, Tile::Empty, Tile::Empty],
        ];
        let w = GridWorld::new(
            Grid::from_rows(rows).unwrap(),
            Coord::new(0, 0),
            Coord::new(0, 3),
        )
        .unwrap();

        let cheap = route(&w, CostMode::ValueAsCost).unwrap();
        assert_eq!(cheap.cost, 0);
        assert_eq!(cheap.moves(), 7);
        assert_valid(&w, &cheap);

        let short = route(&w, CostMode::UnitCost).unwrap();
        assert_eq!(short.moves(), 3);
        assert_eq!(short.aux, 18);
    }

    #[test]
    fn value_as_reward_reports_collected_values() {
        let rows = vec![
            vec![Tile::Start, Tile::Valued(2), Tile::Valued(3)],
            vec![Tile::Wall, Tile::Wall, Tile::Goal],
        ];
        let w = GridWorld::new(
            Grid::from_rows(rows).unwrap(),
            Coord::new(0, 0),
            Coord::new(1, 2),
        )
        .unwrap();
        let r = route(&w, CostMode::ValueAsReward).unwrap();
        assert_eq!(r.cost, 3);
        assert_eq!(r.aux, 5);
    }

    #[test]
    fn unreachable_goal_is_none_in_every_mode() {
        let mut g = Grid::new(3, 3);
        g.set(Coord::new(0, 1), Tile::Wall);
        g.set(Coord::new(1, 0), Tile::Wall);
        let w = GridWorld::new(g, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        for mode in CostMode::ALL {
            assert!(route(&w, mode).is_none(), "{mode:?}");
        }
    }

    #[test]
    fn start_equals_goal() {
        let w = open_world(2, 2, Coord::new(0, 0));
        let r = route(&w, CostMode::UnitCost).unwrap();
        assert_eq!(r.path, vec![Coord::new(0, 0)]);
        assert_eq!(r.cost, 0);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let mut g = Grid::new(6, 6);
        for r in 1..5 {
            g.set(Coord::new(r, 2), Tile::Wall);
        }
        let w = GridWorld::new(g, Coord::new(3, 0), Coord::new(3, 5)).unwrap();
        let model = CostModel::new(&w, CostMode::UnitCost);
        let mut pr = PathRange::for_world(&w);
        let a = pr.astar_route(&model, w.start(), w.goal()).unwrap();
        let b = pr.astar_route(&model, w.start(), w.goal()).unwrap();
        assert_eq!(a, b);
        assert_valid(&w, &a);
    }

    #[test]
    fn out_of_range_endpoint_is_none() {
        let w = open_world(2, 2, Coord::new(1, 1));
        let mut pr = PathRange::for_world(&w);
        let model = CostModel::new(&w, CostMode::UnitCost);
        let out = pr.astar_route(&model, Coord::new(0, 0), Coord::new(5, 5));
        assert!(out.is_none());
    }
}
