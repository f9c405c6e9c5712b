//! Plain-text rendering of grids and paths.

use std::collections::HashSet;

use gridseek_core::{Coord, Grid, Tile};

/// Glyph drawn on path cells.
pub const PATH_GLYPH: char = '*';

/// Render `grid` one row per line, glyphs separated by spaces, with every
/// cell of `path` drawn as [`PATH_GLYPH`]. Start, goal and wall tiles keep
/// their own glyph.
pub fn render(grid: &Grid, path: &[Coord]) -> String {
    let on_path: HashSet<Coord> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.len() * 2);
    for r in 0..grid.rows() as i32 {
        for c in 0..grid.cols() as i32 {
            let at = Coord::new(r, c);
            let tile = grid.at(at).unwrap_or_default();
            if c > 0 {
                out.push(' ');
            }
            match tile {
                Tile::Start | Tile::Goal | Tile::Wall => out.push_str(&tile.to_string()),
                _ if on_path.contains(&at) => out.push(PATH_GLYPH),
                _ => out.push_str(&tile.to_string()),
            }
        }
        out.push('\n');
    }
    out
}
