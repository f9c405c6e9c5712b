//! Run the frontier search under every cost mode on one board.
//!
//! Run: cargo run --bin astar [board.txt]

use std::error::Error;

use gridseek_demos::{load_board, render};
use gridseek_paths::{CostMode, deterministic_search};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = std::env::args().nth(1);
    let board = load_board(path.as_deref())?;
    log::info!(
        "board {}x{}, start {}, goal {}",
        board.grid.rows(),
        board.grid.cols(),
        board.start,
        board.goal
    );

    for mode in CostMode::ALL {
        println!("== {mode:?} ==");
        match deterministic_search(&board.grid, board.start, board.goal, mode)? {
            Some(route) => {
                println!("moves: {}", route.moves());
                println!("cost: {}", route.cost);
                println!("values along path: {}", route.aux);
                let cells: Vec<String> = route.path.iter().map(ToString::to_string).collect();
                println!("path: {}", cells.join(" "));
                print!("{}", render(&board.grid, &route.path));
            }
            None => println!("no path found"),
        }
        println!();
    }
    Ok(())
}
