//! Run the evolutionary search with every fitness shape on one board.
//!
//! Run: cargo run --bin genetic [board.txt] [--config config.json]
//!
//! The optional JSON config overrides [`EvolutionConfig`] fields; missing
//! fields keep their defaults. Every run gets a fresh copy of the board.

use std::error::Error;
use std::fs;

use gridseek_demos::{Board, load_board, render};
use gridseek_evo::{Evolution, EvolutionConfig, EvolutionError, Evolved, FitnessKind};

/// Extra attempts, each with doubled population and generations, when the
/// best candidate misses the goal.
const RETRIES: usize = 1;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut board_path: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = Some(args.next().ok_or("--config needs a path")?);
        } else {
            board_path = Some(arg);
        }
    }

    let board = load_board(board_path.as_deref())?;
    let base = match config_path {
        Some(p) => {
            let text = fs::read_to_string(&p).map_err(|e| format!("reading {p}: {e}"))?;
            serde_json::from_str::<EvolutionConfig>(&text)?
        }
        None => EvolutionConfig::default(),
    };
    base.validate()?;

    for fitness in [
        FitnessKind::LengthReward,
        FitnessKind::PointsThenGoal,
        FitnessKind::ExplorationPenalized,
    ] {
        println!("== {fitness:?} ==");
        match run_with_retries(&board, base.clone().with_fitness(fitness)) {
            Ok(out) => report(&board, &out),
            Err(e @ EvolutionError::GoalUnreached { .. }) => println!("{e}"),
            Err(e) => return Err(e.into()),
        }
        println!();
    }
    Ok(())
}

fn run_with_retries(board: &Board, mut config: EvolutionConfig) -> Result<Evolved, EvolutionError> {
    let mut attempt = 0;
    loop {
        let mut evo = Evolution::new(board.world()?, config.clone())?;
        let out = evo.run();
        let missed = match &out {
            Ok(o) => !o.reached_goal,
            Err(EvolutionError::GoalUnreached { .. }) => true,
            Err(_) => false,
        };
        if !missed || attempt == RETRIES {
            return out;
        }
        attempt += 1;
        config.population_size *= 2;
        config.max_generations *= 2;
        log::info!(
            "retrying with population {} and {} generations",
            config.population_size,
            config.max_generations
        );
    }
}

fn report(board: &Board, out: &Evolved) {
    let moves: String = out.moves.iter().map(|d| d.letter()).collect();
    println!("moves ({}): {moves}", out.moves.len());
    println!("score: {}", out.score);
    println!(
        "generations: {}{}",
        out.generations,
        if out.converged { " (converged)" } else { "" }
    );
    println!("reached goal: {}", out.reached_goal);
    let cells: Vec<String> = out.path().iter().map(ToString::to_string).collect();
    println!("path: {}", cells.join(" "));
    print!("{}", render(&board.grid, &out.visited));
}
