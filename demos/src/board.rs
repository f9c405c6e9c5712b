//! Text boards.
//!
//! A board is one row per line, glyphs separated by whitespace:
//!
//! | Glyph | Tile |
//! |---|---|
//! | `S` | start |
//! | `G` | goal |
//! | `#` | wall |
//! | `.` or `0` | empty |
//! | any other decimal | valued |
//!
//! Blank lines and lines starting with `;` are ignored.

use std::fmt;
use std::str::FromStr;

use gridseek_core::{Coord, Grid, GridWorld, Tile, WorldError};

/// A parsed board: the grid plus the positions of its `S` and `G` glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub grid: Grid,
    pub start: Coord,
    pub goal: Coord,
}

impl Board {
    /// Parse a board from text.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        let mut start: Option<Coord> = None;
        let mut goal: Option<Coord> = None;

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            let r = rows.len() as i32;
            let mut row = Vec::new();
            for (c, glyph) in line.split_whitespace().enumerate() {
                let at = Coord::new(r, c as i32);
                let tile = parse_glyph(glyph).ok_or_else(|| BoardError::InvalidGlyph {
                    glyph: glyph.to_string(),
                    at,
                })?;
                match tile {
                    Tile::Start => mark(&mut start, at, "start")?,
                    Tile::Goal => mark(&mut goal, at, "goal")?,
                    _ => {}
                }
                row.push(tile);
            }
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(BoardError::InconsistentWidth {
                        row: rows.len(),
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(BoardError::Empty);
        }
        let start = start.ok_or(BoardError::Missing("start"))?;
        let goal = goal.ok_or(BoardError::Missing("goal"))?;
        let grid = Grid::from_rows(rows).ok_or(BoardError::Empty)?;
        Ok(Self { grid, start, goal })
    }

    /// A fresh world over a copy of the board's grid.
    pub fn world(&self) -> Result<GridWorld, WorldError> {
        GridWorld::new(self.grid.clone(), self.start, self.goal)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_glyph(glyph: &str) -> Option<Tile> {
    match glyph {
        "S" => Some(Tile::Start),
        "G" => Some(Tile::Goal),
        "#" => Some(Tile::Wall),
        "." | "0" => Some(Tile::Empty),
        _ => glyph.parse::<u32>().ok().map(Tile::Valued),
    }
}

fn mark(slot: &mut Option<Coord>, at: Coord, what: &'static str) -> Result<(), BoardError> {
    if let Some(first) = *slot {
        return Err(BoardError::Duplicate {
            what,
            first,
            second: at,
        });
    }
    *slot = Some(at);
    Ok(())
}

/// Errors that can occur when parsing a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No rows.
    Empty,
    /// A row has a different number of glyphs than the first row.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A glyph that is neither a marker nor a number.
    InvalidGlyph { glyph: String, at: Coord },
    /// The board has no `S` or no `G`.
    Missing(&'static str),
    /// The board has a second `S` or `G`.
    Duplicate {
        what: &'static str,
        first: Coord,
        second: Coord,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board has no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::InvalidGlyph { glyph, at } => write!(f, "invalid glyph {glyph:?} at {at}"),
            Self::Missing(what) => write!(f, "board has no {what}"),
            Self::Duplicate {
                what,
                first,
                second,
            } => write!(f, "second {what} at {second}, first at {first}"),
        }
    }
}

impl std::error::Error for BoardError {}
