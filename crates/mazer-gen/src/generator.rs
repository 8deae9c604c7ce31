//! Perfect-maze carving.
//!
//! Both algorithms work on the usual "cells and walls" layout: positions
//! with two odd coordinates are cells, everything else starts as wall, and
//! opening the wall between two cells two steps apart joins them. The
//! result is a spanning tree over all cells, with the border left intact.

use mazer_core::{CellState, Coord, Grid, MazeError, Result};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{GeneratorKind, validate_size};

/// Maze generator driven by a caller-supplied random number generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator around `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a `size x size` maze with the chosen algorithm.
    ///
    /// `size` must be odd and at least [`MIN_SIZE`](crate::MIN_SIZE);
    /// anything else fails with [`MazeError::InvalidConfiguration`].
    pub fn generate(&mut self, size: usize, kind: GeneratorKind) -> Result<Grid> {
        self.generate_with_dims(size, size, kind)
    }

    /// Carve a `rows x cols` maze with the chosen algorithm.
    pub fn generate_with_dims(
        &mut self,
        rows: usize,
        cols: usize,
        kind: GeneratorKind,
    ) -> Result<Grid> {
        validate_size(rows)
            .and_then(|()| validate_size(cols))
            .map_err(|e| match e {
                MazeError::InvalidConfiguration(msg) => {
                    MazeError::InvalidConfiguration(format!("{rows}x{cols} grid: {msg}"))
                }
                other => other,
            })?;
        let grid = match kind {
            GeneratorKind::Backtracking => self.backtracking(rows, cols),
            GeneratorKind::AldousBroder => self.aldous_broder(rows, cols),
        };
        Ok(grid)
    }

    /// A uniformly random cell (odd row, odd column) inside the border.
    fn random_cell(&mut self, rows: usize, cols: usize) -> Coord {
        let row = 2 * self.rng.random_range(0..(rows - 1) / 2) + 1;
        let col = 2 * self.rng.random_range(0..(cols - 1) / 2) + 1;
        Coord::new(row as i32, col as i32)
    }

    /// Cells two steps away from `c` that lie inside the border, in random
    /// order.
    fn shuffled_neighbors(&mut self, grid: &Grid, c: Coord, buf: &mut Vec<Coord>) {
        buf.clear();
        buf.extend(
            c.neighbors_at(2)
                .into_iter()
                .filter(|&n| is_interior(grid, n)),
        );
        buf.shuffle(&mut self.rng);
    }

    fn backtracking(&mut self, rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::with_dims(rows, cols, CellState::Wall);
        let seed = self.random_cell(rows, cols);
        grid.replace(seed, CellState::Space);

        let mut stack = vec![seed];
        let mut candidates = Vec::with_capacity(4);
        let mut carved = 1usize;

        while let Some(&current) = stack.last() {
            self.shuffled_neighbors(&grid, current, &mut candidates);
            candidates.retain(|&n| grid.at(n) == Some(CellState::Wall));

            match candidates.first() {
                None => {
                    stack.pop();
                }
                Some(&next) => {
                    grid.replace(next, CellState::Space);
                    grid.replace(current.midpoint(next), CellState::Space);
                    stack.push(next);
                    carved += 1;
                }
            }
        }

        log::debug!("backtracking carved {carved} cells in a {rows}x{cols} grid from {seed}");
        grid
    }

    /// Aldous–Broder as the unrestricted random walk: every move goes to a
    /// uniformly chosen neighbour cell, visited or not, and the wall between
    /// is opened only on the first entry into a cell. Unvisited neighbours
    /// get no preference and the walk never jumps, so the resulting spanning
    /// tree is uniform.
    fn aldous_broder(&mut self, rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::with_dims(rows, cols, CellState::Wall);
        let total = ((rows - 1) / 2) * ((cols - 1) / 2);

        let mut current = self.random_cell(rows, cols);
        grid.replace(current, CellState::Space);
        let mut visited = 1usize;
        let mut walked = 0usize;
        let mut candidates = Vec::with_capacity(4);

        while visited < total {
            self.shuffled_neighbors(&grid, current, &mut candidates);
            let Some(&next) = candidates.first() else {
                break;
            };
            if grid.at(next) == Some(CellState::Wall) {
                grid.replace(current.midpoint(next), CellState::Space);
                grid.replace(next, CellState::Space);
                visited += 1;
            }
            current = next;
            walked += 1;
        }

        log::debug!("aldous-broder visited {visited} cells in {walked} moves ({rows}x{cols})");
        grid
    }
}

impl MazeGen<rand::rngs::ThreadRng> {
    /// A generator seeded from the thread-local RNG.
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

#[inline]
fn is_interior(grid: &Grid, c: Coord) -> bool {
    c.row >= 1
        && c.col >= 1
        && (c.row as usize) + 1 < grid.rows()
        && (c.col as usize) + 1 < grid.cols()
}

/// Carve a `size x size` maze using the thread-local RNG.
pub fn generate_maze(size: usize, kind: GeneratorKind) -> Result<Grid> {
    MazeGen::from_thread_rng().generate(size, kind)
}
