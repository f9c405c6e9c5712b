//! Evolutionary search for gridseek worlds.
//!
//! Candidates are move sequences ([`Dir`](gridseek_core::Dir) genomes)
//! seeded by random walks from the start. Every generation is ranked by a
//! [`FitnessKind`], the top candidates are carried over unchanged, and the
//! rest of the population is refilled with mutated single-point crossovers
//! of top-ranked parents.
//!
//! The search never fails for lack of a path: it returns its best
//! candidate, and [`Evolved::reached_goal`] tells whether that candidate
//! actually gets there. Set [`EvolutionConfig::require_goal`] to turn a
//! miss into [`EvolutionError::GoalUnreached`].
//!
//! ```
//! use gridseek_core::{Coord, Grid, GridWorld};
//! use gridseek_evo::{Evolution, EvolutionConfig, FitnessKind};
//!
//! let world = GridWorld::new(Grid::new(3, 3), Coord::new(0, 0), Coord::new(2, 2)).unwrap();
//! let config = EvolutionConfig::default()
//!     .with_fitness(FitnessKind::LengthReward)
//!     .with_seed(42);
//! let out = Evolution::new(world, config).unwrap().run().unwrap();
//! assert_eq!(out.visited[0], Coord::new(0, 0));
//! ```

mod config;
mod engine;
mod error;
mod fitness;
mod genome;
mod replay;

pub use config::{EvolutionConfig, InitWalk};
pub use engine::{Evolution, Evolved, evolutionary_search};
pub use error::EvolutionError;
pub use fitness::{FitnessKind, Score};
pub use genome::{crossover, mutate, random_walk};
pub use replay::{compact_path, replay};
