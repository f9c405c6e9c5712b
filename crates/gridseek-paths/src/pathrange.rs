use gridseek_core::{Coord, GridWorld};

// ---------------------------------------------------------------------------
// Internal search record for the A* frontier
// ---------------------------------------------------------------------------

/// Per-cell search record. Only meaningful while `generation` matches the
/// owning [`PathRange`]'s current generation.
#[derive(Clone)]
pub(crate) struct Node {
    /// Accumulated cost from the start.
    pub(crate) g: u64,
    /// Auxiliary total accumulated along the predecessor chain.
    pub(crate) aux: u64,
    pub(crate) f: u64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            aux: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry, ordered for use in a `BinaryHeap`.
///
/// The heap pops the smallest `f`; among equal `f` it pops the smallest
/// flat index, i.e. the lexicographically smallest `(row, col)`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Reusable search state for a `rows × cols` grid.
///
/// `PathRange` owns the node array and a neighbor scratch buffer so that
/// repeated queries on the same grid do not allocate after the first one.
/// Nothing in it outlives a query in any observable way.
pub struct PathRange {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl PathRange {
    /// Create a new `PathRange` for a grid of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows * cols;
        Self {
            rows,
            cols,
            nodes: vec![Node::default(); len],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Create a `PathRange` sized for `world`'s grid.
    pub fn for_world(world: &GridWorld) -> Self {
        Self::new(world.grid().rows(), world.grid().cols())
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat row-major index. `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (r, col) = (c.row as usize, c.col as usize);
        if r >= self.rows || col >= self.cols {
            return None;
        }
        Some(r * self.cols + col)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn idx_round_trip() {
        let pr = PathRange::new(3, 4);
        assert_eq!(pr.idx(Coord::new(2, 3)), Some(11));
        assert_eq!(pr.coord(11), Coord::new(2, 3));
        assert_eq!(pr.idx(Coord::new(3, 0)), None);
        assert_eq!(pr.idx(Coord::new(0, 4)), None);
        assert_eq!(pr.idx(Coord::new(-1, 0)), None);
    }

    #[test]
    fn frontier_pops_lowest_f_then_lowest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 7, f: 4 });
        heap.push(NodeRef { idx: 2, f: 5 });
        heap.push(NodeRef { idx: 3, f: 4 });
        heap.push(NodeRef { idx: 1, f: 6 });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![3, 7, 2, 1]);
    }
}
