use std::fmt;
use std::str::FromStr;

use mazer_core::{CellState, Coord, Endpoint, Grid, MazeError, Path, Result};

use crate::frontier::Frontier;
use crate::step::{Side, Step, StepEmitter, StepKind, StepRecord};

/// Search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchAlgorithm {
    /// Single-source breadth-first search.
    #[default]
    Bfs,
    /// Two breadth-first searches, from each end, advanced in lockstep.
    Bidirectional,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 2] = [SearchAlgorithm::Bfs, SearchAlgorithm::Bidirectional];

    /// The next strategy in [`ALL`](Self::ALL), wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            SearchAlgorithm::Bfs => SearchAlgorithm::Bidirectional,
            SearchAlgorithm::Bidirectional => SearchAlgorithm::Bfs,
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bfs => f.write_str("bfs"),
            Self::Bidirectional => f.write_str("bidirectional"),
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "bidirectional" | "bidirectional-bfs" | "bibfs" => Ok(Self::Bidirectional),
            other => Err(MazeError::InvalidConfiguration(format!(
                "unknown search algorithm \u{201c}{other}\u{201d}"
            ))),
        }
    }
}

/// How a finished search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A shortest path from start to end.
    Solved(Path),
    /// The queue ran dry: start and end are disconnected.
    NoPath {
        /// Visitation steps taken before giving up.
        visited: usize,
    },
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Solved(p) => Some(p),
            SearchOutcome::NoPath { .. } => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }
}

/// Coarse lifecycle of a [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Endpoints validated, nothing visited yet.
    Ready,
    /// Work queue(s) being processed.
    Running,
    /// A path was found; its cells are being (or have been) replayed.
    Solved,
    /// No path exists.
    Exhausted,
}

/// Result of a single [`Solver::advance`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// One cell changed state.
    Step(StepRecord),
    /// The search is over. Repeated calls keep returning this.
    Finished(SearchOutcome),
}

enum Engine {
    Single {
        frontier: Frontier,
        end: Coord,
    },
    Bidirectional {
        forward: Frontier,
        reverse: Frontier,
        turn: Side,
    },
}

enum Phase {
    Ready,
    Running,
    Replaying { path: Path, next: usize },
    Done(SearchOutcome),
}

/// A step-wise shortest-path search over a borrowed grid.
///
/// Every call to [`advance`](Self::advance) performs exactly one visitation
/// or one solution-marking step, so the caller controls the cadence and may
/// drop the solver at any point to abandon the search.
pub struct Solver<'g> {
    grid: &'g mut Grid,
    start: Coord,
    end: Coord,
    engine: Engine,
    phase: Phase,
    visited: usize,
}

impl<'g> Solver<'g> {
    /// Validate the endpoints and prepare a search.
    ///
    /// Fails with [`MazeError::InvalidEndpoint`] if either endpoint is
    /// unset, outside the grid or on a wall, leaving the grid untouched.
    /// Otherwise the grid is [reset](Grid::reset) so marks from a previous
    /// pass never leak into this one.
    pub fn new(
        grid: &'g mut Grid,
        start: Option<Coord>,
        end: Option<Coord>,
        algorithm: SearchAlgorithm,
    ) -> Result<Self> {
        let start = grid.endpoint(Endpoint::Start, start)?;
        let end = grid.endpoint(Endpoint::End, end)?;
        grid.reset();

        let engine = match algorithm {
            SearchAlgorithm::Bfs => Engine::Single {
                frontier: Frontier::new(start),
                end,
            },
            SearchAlgorithm::Bidirectional => Engine::Bidirectional {
                forward: Frontier::new(start),
                reverse: Frontier::new(end),
                turn: Side::Forward,
            },
        };

        log::debug!("{algorithm} search from {start} to {end}");
        Ok(Self {
            grid,
            start,
            end,
            engine,
            phase: Phase::Ready,
            visited: 0,
        })
    }

    /// The grid as of the last step.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Visitation steps taken so far.
    #[inline]
    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn state(&self) -> SearchState {
        match &self.phase {
            Phase::Ready => SearchState::Ready,
            Phase::Running => SearchState::Running,
            Phase::Replaying { .. } | Phase::Done(SearchOutcome::Solved(_)) => SearchState::Solved,
            Phase::Done(SearchOutcome::NoPath { .. }) => SearchState::Exhausted,
        }
    }

    /// The outcome, once the last step has been taken.
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        match &self.phase {
            Phase::Done(o) => Some(o),
            _ => None,
        }
    }

    /// Perform the next step.
    pub fn advance(&mut self) -> Progress {
        match std::mem::replace(&mut self.phase, Phase::Running) {
            Phase::Ready if self.start == self.end => {
                self.grid.replace(self.start, CellState::Visited);
                self.visited += 1;
                self.phase = Phase::Replaying {
                    path: Path::singleton(self.start),
                    next: 0,
                };
                Progress::Step(StepRecord {
                    kind: StepKind::Visit,
                    coord: self.start,
                    side: Side::Forward,
                })
            }
            Phase::Ready | Phase::Running => self.search_step(),
            Phase::Replaying { path, next } => {
                let coord = path[next];
                self.grid.replace(coord, CellState::Solution);
                self.phase = if next + 1 < path.len() {
                    Phase::Replaying {
                        path,
                        next: next + 1,
                    }
                } else {
                    log::debug!(
                        "solved: {} cells after {} visitation steps",
                        path.len(),
                        self.visited
                    );
                    Phase::Done(SearchOutcome::Solved(path))
                };
                Progress::Step(StepRecord {
                    kind: StepKind::Solution,
                    coord,
                    side: Side::Forward,
                })
            }
            Phase::Done(outcome) => {
                self.phase = Phase::Done(outcome.clone());
                Progress::Finished(outcome)
            }
        }
    }

    fn search_step(&mut self) -> Progress {
        let (side, cell, path) = match &mut self.engine {
            Engine::Single { frontier, end } => {
                let Some(cell) = frontier.advance(self.grid) else {
                    return self.exhaust();
                };
                let path = (cell == *end).then(|| frontier.chain(cell));
                (Side::Forward, cell, path)
            }
            Engine::Bidirectional {
                forward,
                reverse,
                turn,
            } => {
                let side = *turn;
                *turn = side.other();
                let (mine, theirs) = match side {
                    Side::Forward => (forward, reverse),
                    Side::Reverse => (reverse, forward),
                };
                let Some(cell) = mine.advance(self.grid) else {
                    return self.exhaust();
                };
                let path = theirs.visited().has(cell).then(|| {
                    log::trace!("frontiers met at {cell}");
                    let (f, r) = match side {
                        Side::Forward => (&*mine, &*theirs),
                        Side::Reverse => (&*theirs, &*mine),
                    };
                    let mut cells = f.chain(cell);
                    let mut back = r.chain(cell);
                    back.pop();
                    cells.extend(back.into_iter().rev());
                    cells
                });
                (side, cell, path)
            }
        };

        self.visited += 1;
        if let Some(cells) = path {
            self.phase = match Path::new(cells) {
                Some(path) => Phase::Replaying { path, next: 0 },
                None => Phase::Done(SearchOutcome::NoPath {
                    visited: self.visited,
                }),
            };
        }
        Progress::Step(StepRecord {
            kind: StepKind::Visit,
            coord: cell,
            side,
        })
    }

    fn exhaust(&mut self) -> Progress {
        log::debug!(
            "no path from {} to {} after {} visitation steps",
            self.start,
            self.end,
            self.visited
        );
        let outcome = SearchOutcome::NoPath {
            visited: self.visited,
        };
        self.phase = Phase::Done(outcome.clone());
        Progress::Finished(outcome)
    }
}

/// Find a shortest path from `start` to `end`, reporting every step.
///
/// The grid is reset, then mutated in place: visited cells become
/// `Visited` and the final path becomes `Solution`. `emitter` is called
/// once per visitation and once per solution cell, in order. An unreachable
/// end yields `Ok(SearchOutcome::NoPath { .. })`.
pub fn solve<E: StepEmitter + ?Sized>(
    grid: &mut Grid,
    start: Option<Coord>,
    end: Option<Coord>,
    algorithm: SearchAlgorithm,
    emitter: &mut E,
) -> Result<SearchOutcome> {
    let mut solver = Solver::new(grid, start, end, algorithm)?;
    loop {
        match solver.advance() {
            Progress::Step(r) => emitter.on_step(&Step {
                kind: r.kind,
                coord: r.coord,
                side: r.side,
                grid: solver.grid(),
            }),
            Progress::Finished(outcome) => return Ok(outcome),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        let json = serde_json::to_string(&SearchAlgorithm::Bidirectional).unwrap();
        let back: SearchAlgorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SearchAlgorithm::Bidirectional);
    }
}
