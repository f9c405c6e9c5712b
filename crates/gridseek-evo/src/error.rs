//! Errors surfaced by the population search.

use std::fmt;

use gridseek_core::{Coord, WorldError};

/// Errors that can occur when configuring or running an evolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionError {
    /// Start or goal is unusable.
    World(WorldError),
    /// An engine parameter is out of range.
    Config(String),
    /// Strict mode was requested and the best candidate misses the goal.
    GoalUnreached { best_len: usize, final_pos: Coord },
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World(e) => write!(f, "invalid world: {e}"),
            Self::Config(msg) => write!(f, "invalid evolution config: {msg}"),
            Self::GoalUnreached {
                best_len,
                final_pos,
            } => write!(
                f,
                "best candidate ({best_len} moves) stops at {final_pos} without reaching the goal"
            ),
        }
    }
}

impl std::error::Error for EvolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::World(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WorldError> for EvolutionError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}
