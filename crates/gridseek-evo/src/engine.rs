//! The generational loop.

use gridseek_core::{Coord, Dir, Grid, GridWorld};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::EvolutionConfig;
use crate::error::EvolutionError;
use crate::fitness::{FitnessKind, Score};
use crate::genome::{crossover, mutate, random_walk};
use crate::replay::{compact_path, replay};

/// Outcome of an evolution run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evolved {
    /// Best move sequence found.
    pub moves: Vec<Dir>,
    /// Positions while replaying `moves`, starting at the start cell.
    /// Blocked moves repeat the previous position.
    pub visited: Vec<Coord>,
    /// Score of `moves` when it was last ranked.
    pub score: Score,
    /// Number of generations run.
    pub generations: usize,
    /// Whether the run stopped early on a solved candidate.
    pub converged: bool,
    /// Whether `visited` passes through the goal.
    pub reached_goal: bool,
    /// Best score of every generation, in order.
    pub history: Vec<Score>,
}

impl Evolved {
    /// `visited` without the repeats left by blocked moves.
    pub fn path(&self) -> Vec<Coord> {
        compact_path(&self.visited)
    }
}

type Ranked = Vec<(Score, Vec<Dir>)>;

/// Evolutionary search over move sequences on an owned world.
///
/// The engine owns its [`GridWorld`]. With
/// [`consume_values`](EvolutionConfig::consume_values) set, collected cell
/// values are zeroed on that world for the rest of the run, so every run
/// needs its own copy of the grid.
pub struct Evolution<R: Rng> {
    world: GridWorld,
    config: EvolutionConfig,
    pub rng: R,
}

impl Evolution<StdRng> {
    /// Create an engine seeded from `config.seed`, or from the OS when no
    /// seed is given.
    pub fn new(world: GridWorld, config: EvolutionConfig) -> Result<Self, EvolutionError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(world, config, rng)
    }
}

impl<R: Rng> Evolution<R> {
    /// Create an engine drawing from `rng`. `config.seed` is ignored.
    pub fn with_rng(
        world: GridWorld,
        config: EvolutionConfig,
        rng: R,
    ) -> Result<Self, EvolutionError> {
        config.validate()?;
        Ok(Self { world, config, rng })
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Give back the world, including any values consumed during runs.
    pub fn into_world(self) -> GridWorld {
        self.world
    }

    /// Run the generational loop to completion.
    ///
    /// Each generation is ranked by fitness (lower first, stable among
    /// equals). The run stops early once the best candidate is solved;
    /// otherwise it ends after `max_generations` and returns the best
    /// candidate of the last ranking, whether or not it reaches the goal.
    /// With [`require_goal`](EvolutionConfig::require_goal) set, such a
    /// miss is an error instead.
    pub fn run(&mut self) -> Result<Evolved, EvolutionError> {
        let Self { world, config, rng } = self;
        let pop_size = config.population_size;

        let population: Vec<Vec<Dir>> = (0..pop_size)
            .map(|_| random_walk(world, config.init_walk, rng))
            .collect();
        let mut ranked = rank(world, config, population);

        let mut history = Vec::with_capacity(config.max_generations);
        let mut converged = false;

        for generation in 0..config.max_generations {
            if generation > 0 {
                ranked = rank(world, config, breed(&ranked, config, rng));
            }
            let (best_score, best_moves) = &ranked[0];
            history.push(*best_score);
            log::debug!(
                "generation {generation}: best {best_score} with {} moves",
                best_moves.len()
            );

            if config.fitness.is_solved(*best_score, best_moves.len()) {
                log::info!(
                    "solved at generation {generation}: {} moves",
                    best_moves.len()
                );
                converged = true;
                break;
            }
        }

        // Validation keeps the population at two or more, so `ranked` is
        // never empty.
        let (score, moves) = ranked.swap_remove(0);

        let visited = replay(world, &moves);
        let goal = world.goal();
        let reached_goal = visited.contains(&goal);

        if !reached_goal {
            let final_pos = visited.last().copied().unwrap_or(world.start());
            log::warn!(
                "best after {} generations misses the goal: {} moves, ends at {final_pos}",
                history.len(),
                moves.len()
            );
            if config.require_goal {
                return Err(EvolutionError::GoalUnreached {
                    best_len: moves.len(),
                    final_pos,
                });
            }
        }

        Ok(Evolved {
            moves,
            visited,
            score,
            generations: history.len(),
            converged,
            reached_goal,
            history,
        })
    }
}

/// Score every candidate once and sort ascending. The sort is stable, so
/// equal scores keep their population order.
fn rank(world: &mut GridWorld, config: &EvolutionConfig, population: Vec<Vec<Dir>>) -> Ranked {
    let fitness = config.fitness;
    let mut ranked: Ranked = population
        .into_iter()
        .map(|moves| {
            let score = if config.consume_values {
                fitness.score_consuming(world, &moves)
            } else {
                fitness.score(world, &moves)
            };
            (score, moves)
        })
        .collect();
    ranked.sort_by_key(|(score, _)| *score);
    ranked
}

/// Build the next generation: the elites unchanged, then mutated children
/// of two distinct parents from the top of the ranking.
fn breed(ranked: &Ranked, config: &EvolutionConfig, rng: &mut impl Rng) -> Vec<Vec<Dir>> {
    let pop_size = config.population_size;
    let elite = config.elite_count.min(ranked.len());
    let pool = config.parent_pool.min(ranked.len());

    let mut next: Vec<Vec<Dir>> = Vec::with_capacity(pop_size);
    next.extend(ranked[..elite].iter().map(|(_, m)| m.clone()));

    while next.len() < pop_size {
        let i = rng.random_range(0..pool);
        let mut j = rng.random_range(0..pool - 1);
        if j >= i {
            j += 1;
        }
        let mut child = crossover(&ranked[i].1, &ranked[j].1, rng);
        mutate(&mut child, config.mutation_rate, rng);
        next.push(child);
    }
    next
}

/// Build a world from `grid` and run a default-configured evolution with
/// the given fitness shape and sizes.
///
/// The grid is taken by value; pass a fresh copy for each run.
pub fn evolutionary_search(
    grid: Grid,
    start: Coord,
    goal: Coord,
    fitness: FitnessKind,
    population_size: usize,
    max_generations: usize,
) -> Result<Evolved, EvolutionError> {
    let world = GridWorld::new(grid, start, goal)?;
    let config = EvolutionConfig::default()
        .with_fitness(fitness)
        .with_population(population_size)
        .with_generations(max_generations);
    Evolution::new(world, config)?.run()
}
