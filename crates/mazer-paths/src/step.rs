//! Step notifications emitted while a search runs.
//!
//! The search mutates the grid in place and reports every change through a
//! [`StepEmitter`]. Each [`Step`] borrows the grid as it is right after the
//! change; an emitter that needs historical frames clones it.

use mazer_core::{Coord, Grid};

/// What a step did to its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// The cell was dequeued and marked `Visited`.
    Visit,
    /// The cell was marked `Solution` while replaying the final path.
    Solution,
}

/// Which search direction produced a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// From the start toward the end (the only side of plain BFS).
    Forward,
    /// From the end toward the start.
    Reverse,
}

impl Side {
    /// The opposing direction.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Side::Forward => Side::Reverse,
            Side::Reverse => Side::Forward,
        }
    }
}

/// One unit of search progress.
#[derive(Debug, Clone, Copy)]
pub struct Step<'g> {
    pub kind: StepKind,
    pub coord: Coord,
    pub side: Side,
    /// The grid right after this step was applied.
    pub grid: &'g Grid,
}

/// Observer of search progress.
///
/// Called once per visitation and once per solution cell, strictly in the
/// order the search makes them.
pub trait StepEmitter {
    fn on_step(&mut self, step: &Step<'_>);
}

impl<F: FnMut(&Step<'_>)> StepEmitter for F {
    #[inline]
    fn on_step(&mut self, step: &Step<'_>) {
        self(step)
    }
}

/// An emitter that ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl StepEmitter for Silent {
    #[inline]
    fn on_step(&mut self, _step: &Step<'_>) {}
}

/// A recorded step, detached from the grid borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    pub kind: StepKind,
    pub coord: Coord,
    pub side: Side,
}

/// Emitter that keeps every step, and optionally a grid snapshot per step.
#[derive(Debug, Clone, Default)]
pub struct StepRecorder {
    records: Vec<StepRecord>,
    frames: Option<Vec<Grid>>,
}

impl StepRecorder {
    /// Record steps only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record steps and a cloned grid for every step.
    pub fn with_frames() -> Self {
        Self {
            records: Vec::new(),
            frames: Some(Vec::new()),
        }
    }

    /// All recorded steps in emission order.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Grid snapshots, if requested.
    pub fn frames(&self) -> Option<&[Grid]> {
        self.frames.as_deref()
    }

    /// Number of steps of the given kind.
    pub fn count(&self, kind: StepKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Coordinates of the steps of the given kind, in order.
    pub fn coords(&self, kind: StepKind) -> Vec<Coord> {
        self.records
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.coord)
            .collect()
    }
}

impl StepEmitter for StepRecorder {
    fn on_step(&mut self, step: &Step<'_>) {
        self.records.push(StepRecord {
            kind: step.kind,
            coord: step.coord,
            side: step.side,
        });
        if let Some(frames) = self.frames.as_mut() {
            frames.push(step.grid.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::CellState;

    #[test]
    fn closures_are_emitters() {
        let grid = Grid::new(3, CellState::Space);
        let mut seen = Vec::new();
        let mut emit = |s: &Step<'_>| seen.push(s.coord);
        emit.on_step(&Step {
            kind: StepKind::Visit,
            coord: Coord::new(1, 1),
            side: Side::Forward,
            grid: &grid,
        });
        assert_eq!(seen, vec![Coord::new(1, 1)]);
    }

    #[test]
    fn recorder_keeps_frames_on_request() {
        let mut grid = Grid::new(3, CellState::Space);
        let mut rec = StepRecorder::with_frames();
        grid.set(Coord::new(1, 1), CellState::Visited).unwrap();
        rec.on_step(&Step {
            kind: StepKind::Visit,
            coord: Coord::new(1, 1),
            side: Side::Reverse,
            grid: &grid,
        });
        grid.reset();
        let frames = rec.frames().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].at(Coord::new(1, 1)), Some(CellState::Visited));
        assert_eq!(rec.records()[0].side, Side::Reverse);
        assert!(StepRecorder::new().frames().is_none());
    }
}
