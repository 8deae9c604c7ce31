//! Terminal front-end for the maze generator and solvers.
//!
//! [`Session`] holds the maze, the chosen endpoints and the settings and
//! applies the selection and reset rules; [`term`] draws it with crossterm
//! and animates searches step by step. The `mazer` binary wires both to the
//! command line.

pub mod session;
pub mod term;

use mazer_core::Coord;

pub use session::{
    DEFAULT_DELAY, MAX_UI_SIZE, MIN_UI_SIZE, Selection, Session, Settings, Status, ui_size,
};

/// Parse a `row,col` pair as given on the command line.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row \u{201c}{row}\u{201d}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column \u{201c}{col}\u{201d}: {e}"))?;
    Ok(Coord::new(row, col))
}
