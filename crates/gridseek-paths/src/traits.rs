use gridseek_core::Coord;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `c` into `buf`. The caller clears `buf` before
    /// calling. Only passable cells may be appended.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Zero is allowed.
    fn cost(&self, from: Coord, to: Coord) -> u64;

    /// Auxiliary quantity picked up when moving from `from` to `to`.
    ///
    /// It is summed along the chosen path and reported, never optimized.
    fn tally(&self, _from: Coord, _to: Coord) -> u64 {
        0
    }
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible) and must satisfy
    /// `estimate(a, t) <= cost(a, b) + estimate(b, t)` (consistent).
    fn estimate(&self, from: Coord, to: Coord) -> u64;
}
