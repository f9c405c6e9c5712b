//! Turning move sequences back into positions.

use gridseek_core::{Coord, Dir, GridWorld};

/// Positions occupied while replaying `moves` from the world's start.
///
/// The first entry is the start. Blocked moves repeat the current position,
/// so the result always has `moves.len() + 1` entries and consecutive
/// entries are identical or adjacent.
pub fn replay(world: &GridWorld, moves: &[Dir]) -> Vec<Coord> {
    let mut visited = Vec::with_capacity(moves.len() + 1);
    let mut pos = world.start();
    visited.push(pos);
    for &d in moves {
        pos = world.step(pos, d);
        visited.push(pos);
    }
    visited
}

/// Drop repeated consecutive positions, leaving one entry per actual move.
pub fn compact_path(visited: &[Coord]) -> Vec<Coord> {
    let mut out: Vec<Coord> = Vec::with_capacity(visited.len());
    for &c in visited {
        if out.last() != Some(&c) {
            out.push(c);
        }
    }
    out
}
