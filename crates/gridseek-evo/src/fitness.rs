//! Fitness shapes for ranking move sequences. Lower scores are better.

use std::collections::HashSet;
use std::fmt;

use gridseek_core::{Coord, Dir, GridWorld, manhattan};

/// A fitness value, compared lexicographically on `(primary, secondary)`.
///
/// Single-valued shapes leave `secondary` at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub primary: i64,
    pub secondary: i64,
}

impl Score {
    #[inline]
    pub const fn single(v: i64) -> Self {
        Self {
            primary: v,
            secondary: 0,
        }
    }

    #[inline]
    pub const fn pair(primary: i64, secondary: i64) -> Self {
        Self { primary, secondary }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.secondary == 0 {
            write!(f, "{}", self.primary)
        } else {
            write!(f, "({}, {})", self.primary, self.secondary)
        }
    }
}

/// The supported fitness shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessKind {
    /// Length if the goal is reached, else length plus remaining Manhattan
    /// distance to the goal.
    #[default]
    LengthReward,
    /// `(-collected value, length)`: collect as much as possible, shorter
    /// wins ties. Replay stops counting once the goal is reached.
    PointsThenGoal,
    /// Length if the goal is reached, else length plus twice the number of
    /// distinct cells visited plus remaining Manhattan distance.
    ExplorationPenalized,
}

impl FitnessKind {
    /// Score `moves` by replaying them from the world's start.
    ///
    /// For `PointsThenGoal` each valued cell counts once per replay; the
    /// world is not touched.
    pub fn score(self, world: &GridWorld, moves: &[Dir]) -> Score {
        match self {
            FitnessKind::LengthReward => length_reward(world, moves),
            FitnessKind::ExplorationPenalized => exploration_penalized(world, moves),
            FitnessKind::PointsThenGoal => {
                let mut taken: HashSet<Coord> = HashSet::new();
                points_then_goal(world, moves, |w, c| {
                    if taken.insert(c) { w.cell_value(c) } else { 0 }
                })
            }
        }
    }

    /// Like [`score`](Self::score), but `PointsThenGoal` zeroes every cell
    /// it collects from on `world`. Later candidates find those cells
    /// empty, so the resulting scores depend on evaluation order.
    pub fn score_consuming(self, world: &mut GridWorld, moves: &[Dir]) -> Score {
        match self {
            FitnessKind::PointsThenGoal => {
                let start = world.start();
                let goal = world.goal();
                let mut pos = start;
                let mut collected: i64 = 0;
                for &d in moves {
                    pos = world.step(pos, d);
                    collected += i64::from(world.consume(pos));
                    if pos == goal {
                        break;
                    }
                }
                Score::pair(-collected, moves.len() as i64)
            }
            _ => self.score(world, moves),
        }
    }

    /// Whether a candidate of `len` moves with `score` counts as solved,
    /// ending the search early.
    ///
    /// The goal-distance shapes are solved when the score equals the
    /// candidate's own length, which happens exactly when the replay reaches
    /// the goal. `PointsThenGoal` never ends early.
    pub fn is_solved(self, score: Score, len: usize) -> bool {
        match self {
            FitnessKind::LengthReward | FitnessKind::ExplorationPenalized => {
                score == Score::single(len as i64)
            }
            FitnessKind::PointsThenGoal => false,
        }
    }
}

fn length_reward(world: &GridWorld, moves: &[Dir]) -> Score {
    let len = moves.len() as i64;
    let goal = world.goal();
    let mut pos = world.start();
    if pos == goal {
        return Score::single(len);
    }
    for &d in moves {
        pos = world.step(pos, d);
        if pos == goal {
            return Score::single(len);
        }
    }
    Score::single(len + i64::from(manhattan(pos, goal)))
}

fn exploration_penalized(world: &GridWorld, moves: &[Dir]) -> Score {
    let len = moves.len() as i64;
    let goal = world.goal();
    let mut pos = world.start();
    if pos == goal {
        return Score::single(len);
    }
    let mut visited: HashSet<Coord> = HashSet::from([pos]);
    for &d in moves {
        pos = world.step(pos, d);
        if pos == goal {
            return Score::single(len);
        }
        visited.insert(pos);
    }
    let penalty = 2 * visited.len() as i64 + i64::from(manhattan(pos, goal));
    Score::single(len + penalty)
}

fn points_then_goal(
    world: &GridWorld,
    moves: &[Dir],
    mut collect: impl FnMut(&GridWorld, Coord) -> u32,
) -> Score {
    let goal = world.goal();
    let mut pos = world.start();
    let mut collected: i64 = 0;
    for &d in moves {
        pos = world.step(pos, d);
        collected += i64::from(collect(world, pos));
        if pos == goal {
            break;
        }
    }
    Score::pair(-collected, moves.len() as i64)
}
