//! Parameters of the population search.

use crate::error::EvolutionError;
use crate::fitness::FitnessKind;

/// How the initial random walks pick their moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitWalk {
    /// Shuffle the four directions and take the first that changes
    /// position.
    #[default]
    Free,
    /// Like `Free`, but prefer cells not yet visited by this walk. When no
    /// unvisited neighbor exists, the first shuffled direction is taken
    /// even if it revisits a cell or bumps into a wall.
    SelfAvoiding,
}

/// Configuration of an [`Evolution`](crate::Evolution) run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionConfig {
    /// Fitness shape used to rank candidates.
    pub fitness: FitnessKind,
    /// Number of candidates in every generation.
    pub population_size: usize,
    /// Upper bound on generations.
    pub max_generations: usize,
    /// Top candidates carried unchanged into the next generation. Capped at
    /// the population size.
    pub elite_count: usize,
    /// Parents are drawn from this many top-ranked candidates. Capped at
    /// the population size.
    pub parent_pool: usize,
    /// Per-move probability of replacing a child's move at random.
    pub mutation_rate: f64,
    /// Initial walk strategy.
    pub init_walk: InitWalk,
    /// Points fitness zeroes collected cells on the engine's world, so each
    /// value can be collected once per run rather than once per candidate.
    pub consume_values: bool,
    /// Fail with [`EvolutionError::GoalUnreached`] instead of returning a
    /// candidate that misses the goal.
    pub require_goal: bool,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            fitness: FitnessKind::LengthReward,
            population_size: 50,
            max_generations: 500,
            elite_count: 10,
            parent_pool: 20,
            mutation_rate: 0.2,
            init_walk: InitWalk::Free,
            consume_values: false,
            require_goal: false,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn with_fitness(mut self, fitness: FitnessKind) -> Self {
        self.fitness = fitness;
        self
    }

    pub fn with_population(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_init_walk(mut self, walk: InitWalk) -> Self {
        self.init_walk = walk;
        self
    }

    pub fn with_consume_values(mut self, on: bool) -> Self {
        self.consume_values = on;
        self
    }

    pub fn with_require_goal(mut self, on: bool) -> Self {
        self.require_goal = on;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if self.population_size < 2 {
            return Err(EvolutionError::Config(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.parent_pool < 2 {
            return Err(EvolutionError::Config(format!(
                "parent_pool must be at least 2, got {}",
                self.parent_pool
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolutionError::Config(format!(
                "mutation_rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
