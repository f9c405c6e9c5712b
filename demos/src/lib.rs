//! Shared plumbing for the gridseek demo binaries: board files and
//! text rendering.

pub mod board;
pub mod render;

pub use board::{Board, BoardError};
pub use render::{PATH_GLYPH, render};

use std::error::Error;
use std::fs;

/// Board used when no path is given on the command line.
pub const DEFAULT_BOARD: &str = include_str!("../boards/points.txt");

/// Load the board at `path`, or [`DEFAULT_BOARD`] when `path` is `None`.
pub fn load_board(path: Option<&str>) -> Result<Board, Box<dyn Error>> {
    let text = match path {
        Some(p) => fs::read_to_string(p).map_err(|e| format!("reading {p}: {e}"))?,
        None => DEFAULT_BOARD.to_string(),
    };
    Ok(Board::parse(&text)?)
}
