//! Shortest-path search on maze grids.
//!
//! Two strategies are provided, both selected through [`SearchAlgorithm`]:
//!
//! - **BFS**: a single FIFO frontier grown from the start until the end is
//!   dequeued.
//! - **Bidirectional BFS**: one frontier from each end, advanced one
//!   visitation at a time in strict alternation, stopping as soon as either
//!   side dequeues a cell the other side has already visited.
//!
//! Grid cells are marked in place (`Visited` while searching, `Solution`
//! while replaying the path) and every change is reported, in order,
//! through a [`StepEmitter`]. [`solve`] runs a search to completion;
//! [`Solver`] exposes the same search one step at a time so the caller can
//! pace it or abandon it.
//!
//! # Example
//!
//! ```
//! use mazer_core::{Coord, Grid};
//! use mazer_paths::{solve, SearchAlgorithm, StepRecorder};
//!
//! let mut grid = Grid::parse("#####\n#...#\n#.#.#\n#...#\n#####").unwrap();
//! let mut steps = StepRecorder::new();
//! let outcome = solve(
//!     &mut grid,
//!     Some(Coord::new(1, 1)),
//!     Some(Coord::new(3, 3)),
//!     SearchAlgorithm::Bidirectional,
//!     &mut steps,
//! )
//! .unwrap();
//! assert_eq!(outcome.path().unwrap().len(), 5);
//! ```

mod frontier;
mod solver;
mod step;
mod tracker;

pub use solver::{Progress, SearchAlgorithm, SearchOutcome, SearchState, Solver, solve};
pub use step::{Side, Silent, Step, StepEmitter, StepKind, StepRecord, StepRecorder};
pub use tracker::VisitedTracker;
