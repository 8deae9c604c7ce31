//! The [`Path`] type: a solved route from start to end.

use std::ops::Deref;

use crate::coord::Coord;
use crate::error::MazeError;
use crate::grid::Grid;

/// An ordered, non-empty sequence of coordinates from start to end
/// inclusive. Built once per search and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Coord>")
)]
pub struct Path(Vec<Coord>);

impl Path {
    /// Wrap a cell sequence. Returns `None` for an empty sequence.
    pub fn new(cells: Vec<Coord>) -> Option<Self> {
        if cells.is_empty() {
            None
        } else {
            Some(Self(cells))
        }
    }

    /// The single-cell path used when start and end coincide.
    pub fn singleton(c: Coord) -> Self {
        Self(vec![c])
    }

    /// The cells in traversal order.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Coord {
        self.0[0]
    }

    /// Last cell.
    #[inline]
    pub fn end(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    /// Number of grid steps taken (one less than the cell count).
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    /// Whether every consecutive pair of cells is 4-adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Whether this path really joins `start` to `end` through passable
    /// cells of `grid`.
    pub fn is_valid_in(&self, grid: &Grid, start: Coord, end: Coord) -> bool {
        self.start() == start
            && self.end() == end
            && self.is_contiguous()
            && self.0.iter().all(|&c| grid.is_passable(c))
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = MazeError;

    fn try_from(cells: Vec<Coord>) -> Result<Self, MazeError> {
        Path::new(cells).ok_or_else(|| MazeError::InvalidConfiguration("empty path".into()))
    }
}

impl Deref for Path {
    type Target = [Coord];

    fn deref(&self) -> &[Coord] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;

    #[test]
    fn empty_sequences_are_rejected() {
        assert!(Path::new(Vec::new()).is_none());
        assert!(Path::try_from(Vec::new()).is_err());
        assert_eq!(
            Path::try_from(vec![Coord::new(2, 2)]),
            Ok(Path::singleton(Coord::new(2, 2)))
        );
    }

    #[test]
    fn singleton_has_no_steps() {
        let p = Path::singleton(Coord::new(1, 1));
        assert_eq!(p.len(), 1);
        assert_eq!(p.steps(), 0);
        assert_eq!(p.start(), p.end());
        assert!(p.is_contiguous());
    }

    #[test]
    fn validity_checks_adjacency_endpoints_and_walls() {
        let grid = Grid::parse("#####\n#...#\n#.#.#\n#####").unwrap();
        let good = Path::new(vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(1, 3)]).unwrap();
        assert!(good.is_valid_in(&grid, Coord::new(1, 1), Coord::new(1, 3)));
        assert!(!good.is_valid_in(&grid, Coord::new(1, 1), Coord::new(2, 3)));

        let jump = Path::new(vec![Coord::new(1, 1), Coord::new(1, 3)]).unwrap();
        assert!(!jump.is_contiguous());

        let through_wall =
            Path::new(vec![Coord::new(1, 2), Coord::new(2, 2), Coord::new(3, 2)]).unwrap();
        assert!(through_wall.is_contiguous());
        assert_eq!(grid.at(Coord::new(2, 2)), Some(CellState::Wall));
        assert!(!through_wall.is_valid_in(&grid, Coord::new(1, 2), Coord::new(3, 2)));
    }
}
