//! **mazer-core**: the maze grid model.
//!
//! This crate provides the data shared by the generator and the search
//! engine: [`Coord`] positions, per-cell [`CellState`]s, the owned [`Grid`],
//! solved [`Path`]s and the [`MazeError`] kinds.

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;
pub mod path;

pub use cell::CellState;
pub use coord::Coord;
pub use error::{Endpoint, EndpointIssue, MazeError, Result};
pub use grid::Grid;
pub use path::Path;
