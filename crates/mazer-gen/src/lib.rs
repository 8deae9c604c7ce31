//! Perfect-maze generators for mazer grids.
//!
//! - **Backtracking** ([`GeneratorKind::Backtracking`]): randomised
//!   depth-first carving with an explicit stack.
//! - **Aldous–Broder** ([`GeneratorKind::AldousBroder`]): a uniform random
//!   walk that opens a passage whenever it steps onto an unvisited cell.
//!
//! Both fill the grid with walls, treat odd `(row, col)` positions as cells,
//! and return a single connected, acyclic passage network enclosed by a wall
//! border. Neighbour choices always go through a full Fisher–Yates shuffle.

pub mod config;
pub mod generator;

pub use config::{GeneratorKind, MIN_SIZE, normalize_size, validate_size};
pub use generator::{MazeGen, generate_maze};
