//! Front-end session state: the current maze, the chosen endpoints and the
//! user-adjustable settings.
//!
//! Everything here is independent of the terminal so the selection and
//! reset rules can be tested directly.

use std::time::Duration;

use mazer_core::{CellState, Coord, Endpoint, Grid, Result};
use mazer_gen::{GeneratorKind, MazeGen, normalize_size};
use mazer_paths::{SearchAlgorithm, SearchOutcome, Solver, StepEmitter, solve};
use rand::Rng;

/// Smallest size offered by the size control.
pub const MIN_UI_SIZE: usize = 21;
/// Largest size offered by the size control.
pub const MAX_UI_SIZE: usize = 51;
/// Pause between animation steps unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(25);

const MIN_DELAY: Duration = Duration::from_millis(1);
const MAX_DELAY: Duration = Duration::from_millis(800);

/// Clamp a requested size into the UI range and make it odd.
pub fn ui_size(size: usize) -> usize {
    normalize_size(size.clamp(MIN_UI_SIZE, MAX_UI_SIZE))
}

/// User-adjustable options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub size: usize,
    pub generator: GeneratorKind,
    pub solver: SearchAlgorithm,
    pub delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: MIN_UI_SIZE,
            generator: GeneratorKind::default(),
            solver: SearchAlgorithm::default(),
            delay: DEFAULT_DELAY,
        }
    }
}

/// What a cell selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The cell is not open space; nothing changed.
    Ignored,
    Start(Coord),
    End(Coord),
}

/// Status of the last solve attempt, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Solved { cells: usize, visited: usize },
    NoPath { visited: usize },
    Cancelled,
}

/// A maze plus everything the user has chosen about it.
pub struct Session<R: Rng> {
    maze_gen: MazeGen<R>,
    settings: Settings,
    grid: Grid,
    start: Option<Coord>,
    end: Option<Coord>,
    status: Status,
}

impl<R: Rng> Session<R> {
    /// Generate the first maze. The size is brought into the UI range.
    pub fn new(mut settings: Settings, rng: R) -> Result<Self> {
        settings.size = ui_size(settings.size);
        let mut maze_gen = MazeGen::new(rng);
        let grid = maze_gen.generate(settings.size, settings.generator)?;
        Ok(Self {
            maze_gen,
            settings,
            grid,
            start: None,
            end: None,
            status: Status::Idle,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether both endpoints are chosen.
    pub fn can_solve(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Throw the maze away, carve a new one with the current settings and
    /// forget both endpoints.
    pub fn reset(&mut self) -> Result<()> {
        self.grid = self
            .maze_gen
            .generate(self.settings.size, self.settings.generator)?;
        self.start = None;
        self.end = None;
        self.status = Status::Idle;
        log::info!(
            "new {} maze, {}x{}",
            self.settings.generator,
            self.settings.size,
            self.settings.size
        );
        Ok(())
    }

    /// Choose a cell. Only open, unmarked space can be picked: the first
    /// pick sets the start, later picks replace the end.
    pub fn select(&mut self, c: Coord) -> Selection {
        if self.grid.at(c) != Some(CellState::Space) {
            return Selection::Ignored;
        }
        if self.start.is_none() {
            self.start = Some(c);
            Selection::Start(c)
        } else {
            self.end = Some(c);
            Selection::End(c)
        }
    }

    /// Place both endpoints directly, bypassing the click rule.
    ///
    /// `None` leaves that endpoint unset. A given cell that is a wall or off
    /// the grid fails with `InvalidEndpoint` and leaves the session as it
    /// was; otherwise marks from an earlier search are cleared.
    pub fn set_endpoints(&mut self, start: Option<Coord>, end: Option<Coord>) -> Result<()> {
        let start = start
            .map(|c| self.grid.endpoint(Endpoint::Start, Some(c)))
            .transpose()?;
        let end = end
            .map(|c| self.grid.endpoint(Endpoint::End, Some(c)))
            .transpose()?;
        self.clear_marks();
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// Fill in whichever endpoint is unset: the start with the first open
    /// cell, the end with the last, never reusing the other endpoint.
    pub fn default_endpoints(&mut self) {
        let open = self.grid.open_cells();
        if self.start.is_none() {
            self.start = open.iter().copied().find(|&c| Some(c) != self.end);
        }
        if self.end.is_none() {
            self.end = open.iter().rev().copied().find(|&c| Some(c) != self.start);
        }
    }

    /// Erase visited and solution marks, keeping maze and endpoints.
    pub fn clear_marks(&mut self) {
        self.grid.reset();
        self.status = Status::Idle;
    }

    /// Change the maze size and regenerate.
    pub fn set_size(&mut self, size: usize) -> Result<()> {
        let size = ui_size(size);
        if size == self.settings.size {
            return Ok(());
        }
        self.settings.size = size;
        self.reset()
    }

    /// One size step up (next odd size).
    pub fn grow(&mut self) -> Result<()> {
        self.set_size(self.settings.size + 2)
    }

    /// One size step down.
    pub fn shrink(&mut self) -> Result<()> {
        self.set_size(self.settings.size.saturating_sub(2))
    }

    /// Switch to the next generator and regenerate.
    pub fn cycle_generator(&mut self) -> Result<()> {
        self.settings.generator = self.settings.generator.cycle();
        self.reset()
    }

    /// Switch to the next search strategy.
    pub fn cycle_solver(&mut self) {
        self.settings.solver = self.settings.solver.cycle();
    }

    /// Halve the animation delay.
    pub fn faster(&mut self) {
        self.settings.delay = (self.settings.delay / 2).max(MIN_DELAY);
    }

    /// Double the animation delay.
    pub fn slower(&mut self) {
        self.settings.delay = (self.settings.delay * 2).min(MAX_DELAY);
    }

    /// Start a step-wise search with the current endpoints and strategy.
    pub fn solver(&mut self) -> Result<Solver<'_>> {
        Solver::new(&mut self.grid, self.start, self.end, self.settings.solver)
    }

    /// Run a search to completion, reporting steps to `emitter`.
    pub fn solve<E: StepEmitter + ?Sized>(&mut self, emitter: &mut E) -> Result<SearchOutcome> {
        let outcome = solve(
            &mut self.grid,
            self.start,
            self.end,
            self.settings.solver,
            emitter,
        )?;
        self.record(&outcome, None);
        Ok(outcome)
    }

    /// Remember how a search ended. `visited` overrides the count carried
    /// by the outcome when the caller drove the search itself.
    pub fn record(&mut self, outcome: &SearchOutcome, visited: Option<usize>) {
        self.status = match outcome {
            SearchOutcome::Solved(path) => Status::Solved {
                cells: path.len(),
                visited: visited.unwrap_or_else(|| {
                    self.grid.count(CellState::Visited) + self.grid.count(CellState::Solution)
                }),
            },
            SearchOutcome::NoPath { visited: v } => Status::NoPath {
                visited: visited.unwrap_or(*v),
            },
        };
    }

    /// Note that a running search was abandoned.
    pub fn cancel(&mut self) {
        self.status = Status::Cancelled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_paths::Silent;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session<StdRng> {
        Session::new(Settings::default(), StdRng::seed_from_u64(9)).unwrap()
    }

    fn open_pair(s: &Session<StdRng>) -> (Coord, Coord) {
        let open = s.grid().open_cells();
        (open[0], open[open.len() - 1])
    }

    #[test]
    fn sizes_are_clamped_and_odd() {
        assert_eq!(ui_size(4), 21);
        assert_eq!(ui_size(30), 31);
        assert_eq!(ui_size(100), 51);
        let s = Session::new(
            Settings {
                size: 8,
                ..Settings::default()
            },
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        assert_eq!(s.grid().rows(), 21);
    }

    #[test]
    fn first_pick_is_start_then_end_is_replaced() {
        let mut s = session();
        let open = s.grid().open_cells();
        assert_eq!(s.select(open[0]), Selection::Start(open[0]));
        assert_eq!(s.select(open[1]), Selection::End(open[1]));
        assert_eq!(s.select(open[2]), Selection::End(open[2]));
        assert_eq!(s.start(), Some(open[0]));
        assert_eq!(s.end(), Some(open[2]));
    }

    #[test]
    fn walls_cannot_be_picked() {
        let mut s = session();
        assert_eq!(s.select(Coord::new(0, 0)), Selection::Ignored);
        assert_eq!(s.select(Coord::new(-3, 2)), Selection::Ignored);
        assert_eq!(s.start(), None);
    }

    #[test]
    fn end_given_alone_stays_the_end() {
        let mut s = session();
        let (a, b) = open_pair(&s);
        s.set_endpoints(None, Some(a)).unwrap();
        assert_eq!(s.start(), None);
        assert_eq!(s.end(), Some(a));

        s.default_endpoints();
        assert_eq!(s.end(), Some(a));
        assert_eq!(s.start(), Some(s.grid().open_cells()[1]));
        assert_ne!(s.start(), s.end());

        s.set_endpoints(None, Some(b)).unwrap();
        s.default_endpoints();
        assert_eq!((s.start(), s.end()), (Some(a), Some(b)));
        let outcome = s.solve(&mut Silent).unwrap();
        assert!(outcome.path().unwrap().len() > 1);
    }

    #[test]
    fn start_on_a_wall_is_reported() {
        let mut s = session();
        let (a, b) = open_pair(&s);
        s.set_endpoints(Some(a), Some(b)).unwrap();

        let wall = Coord::new(0, 0);
        let err = s.set_endpoints(Some(wall), Some(b)).unwrap_err();
        assert_eq!(
            err,
            mazer_core::MazeError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                issue: mazer_core::EndpointIssue::Wall(wall),
            }
        );
        assert!(s.set_endpoints(Some(a), Some(Coord::new(99, 1))).is_err());
        assert_eq!((s.start(), s.end()), (Some(a), Some(b)));
    }

    #[test]
    fn solve_needs_both_endpoints() {
        let mut s = session();
        let (a, _) = open_pair(&s);
        s.select(a);
        assert!(!s.can_solve());
        assert!(s.solve(&mut Silent).is_err());
    }

    #[test]
    fn solve_records_status_and_reset_clears_it() {
        let mut s = session();
        let (a, b) = open_pair(&s);
        s.select(a);
        s.select(b);
        let outcome = s.solve(&mut Silent).unwrap();
        let cells = outcome.path().unwrap().len();
        assert!(matches!(s.status(), Status::Solved { cells: c, .. } if *c == cells));

        s.reset().unwrap();
        assert_eq!(s.start(), None);
        assert_eq!(s.end(), None);
        assert_eq!(s.status(), &Status::Idle);
        assert_eq!(s.grid().count(CellState::Solution), 0);
    }

    #[test]
    fn marked_cells_are_ignored_until_cleared() {
        let mut s = session();
        let (a, b) = open_pair(&s);
        s.select(a);
        s.select(b);
        s.solve(&mut Silent).unwrap();
        assert_eq!(s.select(a), Selection::Ignored);
        s.clear_marks();
        assert_eq!(s.select(a), Selection::End(a));
    }

    #[test]
    fn settings_changes() {
        let mut s = session();
        s.grow().unwrap();
        assert_eq!(s.grid().rows(), 23);
        s.shrink().unwrap();
        s.shrink().unwrap();
        assert_eq!(s.grid().rows(), 21);

        s.cycle_generator().unwrap();
        assert_eq!(s.settings().generator, GeneratorKind::AldousBroder);
        s.cycle_solver();
        assert_eq!(s.settings().solver, SearchAlgorithm::Bidirectional);

        for _ in 0..20 {
            s.faster();
        }
        assert_eq!(s.settings().delay, MIN_DELAY);
        for _ in 0..20 {
            s.slower();
        }
        assert_eq!(s.settings().delay, MAX_DELAY);
    }

    #[test]
    fn step_wise_solver_borrows_the_session_grid() {
        let mut s = session();
        let (a, b) = open_pair(&s);
        s.select(a);
        s.select(b);
        let mut solver = s.solver().unwrap();
        let mut steps = 0;
        let outcome = loop {
            match solver.advance() {
                mazer_paths::Progress::Step(_) => steps += 1,
                mazer_paths::Progress::Finished(o) => break o,
            }
        };
        assert!(outcome.is_solved());
        assert!(steps > 0);
        assert!(s.grid().count(CellState::Solution) > 0);
    }
}
