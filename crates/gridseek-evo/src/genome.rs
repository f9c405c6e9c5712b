//! Move-sequence genomes: random generation, crossover and mutation.

use std::collections::HashSet;

use gridseek_core::{Coord, Dir, GridWorld};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::InitWalk;

/// Generate a random move sequence by walking from the world's start.
///
/// Each step shuffles the four directions and takes the first acceptable
/// one (see [`InitWalk`]). The walk halts when the goal is reached or after
/// [`GridWorld::move_budget`] steps, so the result never exceeds the budget.
pub fn random_walk(world: &GridWorld, walk: InitWalk, rng: &mut impl Rng) -> Vec<Dir> {
    let goal = world.goal();
    let budget = world.move_budget();
    let mut pos = world.start();
    let mut moves = Vec::new();
    let mut visited: HashSet<Coord> = HashSet::from([pos]);

    let mut steps = 0;
    while pos != goal && steps < budget {
        let mut dirs = Dir::ALL;
        dirs.shuffle(rng);

        let pick = match walk {
            InitWalk::Free => dirs.iter().copied().find(|&d| world.step(pos, d) != pos),
            InitWalk::SelfAvoiding => dirs
                .iter()
                .copied()
                .find(|&d| {
                    let n = world.step(pos, d);
                    n != pos && !visited.contains(&n)
                })
                .or(Some(dirs[0])),
        };

        if let Some(d) = pick {
            moves.push(d);
            pos = world.step(pos, d);
            visited.insert(pos);
        }
        steps += 1;
    }

    moves
}

/// Single-point crossover: the head of `a` up to a random interior index of
/// the shorter parent, followed by the tail of `b` from that index.
///
/// A parent with fewer than two moves has no interior index; `a` is
/// returned unchanged in that case.
pub fn crossover(a: &[Dir], b: &[Dir], rng: &mut impl Rng) -> Vec<Dir> {
    let shorter = a.len().min(b.len());
    if shorter < 2 {
        return a.to_vec();
    }
    let cut = rng.random_range(1..shorter);
    let mut child = Vec::with_capacity(b.len());
    child.extend_from_slice(&a[..cut]);
    child.extend_from_slice(&b[cut..]);
    child
}

/// Replace each move independently, with probability `rate`, by a
/// uniformly random direction.
pub fn mutate(moves: &mut [Dir], rate: f64, rng: &mut impl Rng) {
    for m in moves.iter_mut() {
        if rng.random::<f64>() < rate {
            *m = Dir::ALL[rng.random_range(0..Dir::ALL.len())];
        }
    }
}
