//! The [`Grid`] type: a rectangular array of [`CellState`]s.
//!
//! A `Grid` owns its cells outright. Stages hand it along by value or by
//! `&mut`, so only one component mutates it at a time; cloning yields an
//! independent snapshot.

use std::fmt;

use crate::cell::CellState;
use crate::coord::Coord;
use crate::error::{Endpoint, EndpointIssue, MazeError, Result};

/// A `rows x cols` maze grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a `size x size` grid with every cell set to `fill`.
    pub fn new(size: usize, fill: CellState) -> Self {
        Self::with_dims(size, size, fill)
    }

    /// Create a `rows x cols` grid with every cell set to `fill`.
    pub fn with_dims(rows: usize, cols: usize, fill: CellState) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Parse the ASCII form produced by `Display`.
    ///
    /// `#` is a wall, `.` (or a blank) is open space, `o` visited and `*`
    /// solution. Leading and trailing blank lines are ignored; every other
    /// line must have the same width.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let lines = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &lines[..=last],
            None => &[][..],
        };

        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (i, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(MazeError::Parse {
                    line: i + 1,
                    message: format!("expected {cols} cells, found {}", line.chars().count()),
                });
            }
            for ch in line.chars() {
                let state = CellState::from_glyph(ch).ok_or_else(|| MazeError::Parse {
                    line: i + 1,
                    message: format!("unknown cell glyph \u{201c}{ch}\u{201d}"),
                })?;
                cells.push(state);
            }
        }

        Ok(Self {
            rows: lines.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.index(c).is_some()
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
        {
            Some(c.row as usize * self.cols + c.col as usize)
        } else {
            None
        }
    }

    #[inline]
    fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    fn out_of_bounds(&self, c: Coord) -> MazeError {
        MazeError::OutOfBounds {
            coord: c,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Read the cell at `c`.
    pub fn get(&self, c: Coord) -> Result<CellState> {
        self.at(c).ok_or_else(|| self.out_of_bounds(c))
    }

    /// Read the cell at `c`, or `None` if outside the grid.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellState> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `c`.
    pub fn set(&mut self, c: Coord, state: CellState) -> Result<()> {
        let i = self.index(c).ok_or_else(|| self.out_of_bounds(c))?;
        self.cells[i] = state;
        Ok(())
    }

    /// Overwrite the cell at `c`, returning its previous state, or `None`
    /// (and no change) if `c` is outside the grid.
    #[inline]
    pub fn replace(&mut self, c: Coord, state: CellState) -> Option<CellState> {
        let i = self.index(c)?;
        Some(std::mem::replace(&mut self.cells[i], state))
    }

    /// Whether `c` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(CellState::is_passable)
    }

    /// Check that `c` can serve as the given search endpoint: it must be
    /// set, inside the grid and not a wall.
    pub fn endpoint(&self, endpoint: Endpoint, c: Option<Coord>) -> Result<Coord> {
        let issue = match c {
            None => EndpointIssue::Unset,
            Some(c) => match self.at(c) {
                None => EndpointIssue::OutOfBounds(c),
                Some(CellState::Wall) => EndpointIssue::Wall(c),
                Some(_) => return Ok(c),
            },
        };
        Err(MazeError::InvalidEndpoint { endpoint, issue })
    }

    /// Set every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Turn every `Visited` or `Solution` cell back into `Space`.
    ///
    /// Walls are left untouched, so the same maze can be solved again.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            if matches!(cell, CellState::Visited | CellState::Solution) {
                *cell = CellState::Space;
            }
        }
    }

    /// Count cells equal to `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterate over `(Coord, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Coord, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| (self.coord(i), s))
    }

    /// Every passable coordinate, row-major.
    pub fn open_cells(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, s)| s.is_passable())
            .map(|(c, _)| c)
            .collect()
    }

    /// Whether every border cell is a wall.
    pub fn is_enclosed(&self) -> bool {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        self.iter().all(|(c, s)| {
            let border = c.row == 0 || c.col == 0 || c.row == rows - 1 || c.col == cols - 1;
            !border || s == CellState::Wall
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for s in row {
                write!(f, "{}", s.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_fills_every_cell() {
        let g = Grid::new(5, CellState::Wall);
        assert_eq!((g.rows(), g.cols()), (5, 5));
        assert_eq!(g.count(CellState::Wall), 25);
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut g = Grid::with_dims(3, 4, CellState::Space);
        g.set(Coord::new(2, 3), CellState::Wall).unwrap();
        assert_eq!(g.get(Coord::new(2, 3)), Ok(CellState::Wall));

        let err = g.get(Coord::new(3, 0)).unwrap_err();
        assert_eq!(
            err,
            MazeError::OutOfBounds {
                coord: Coord::new(3, 0),
                rows: 3,
                cols: 4
            }
        );
        assert!(g.set(Coord::new(0, -1), CellState::Wall).is_err());
        assert!(g.set(Coord::new(0, 4), CellState::Wall).is_err());
        assert_eq!(g.at(Coord::new(-1, 0)), None);
    }

    #[test]
    fn reset_keeps_walls() {
        let mut g = Grid::parse(
            "
#####
#o*.#
#####",
        )
        .unwrap();
        g.reset();
        assert_eq!(g.count(CellState::Visited), 0);
        assert_eq!(g.count(CellState::Solution), 0);
        assert_eq!(g.count(CellState::Space), 3);
        assert_eq!(g.count(CellState::Wall), 12);
    }

    #[test]
    fn parse_and_display_agree() {
        let text = "#####\n#.#.#\n#...#\n#####";
        let g = Grid::parse(text).unwrap();
        assert_eq!((g.rows(), g.cols()), (4, 5));
        assert_eq!(g.get(Coord::new(1, 2)), Ok(CellState::Wall));
        assert_eq!(g.to_string(), text);
    }

    #[test]
    fn parse_rejects_ragged_rows_and_unknown_glyphs() {
        assert!(matches!(
            Grid::parse("###\n##"),
            Err(MazeError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            Grid::parse("#x#"),
            Err(MazeError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn open_cells_and_enclosure() {
        let g = Grid::parse("###\n#.#\n###").unwrap();
        assert_eq!(g.open_cells(), vec![Coord::new(1, 1)]);
        assert!(g.is_enclosed());
        let g = Grid::parse("#.#\n#.#\n###").unwrap();
        assert!(!g.is_enclosed());
    }

    #[test]
    fn endpoints_must_be_set_in_range_and_open() {
        let g = Grid::parse("###\n#o#\n###").unwrap();
        let open = Coord::new(1, 1);
        assert_eq!(g.endpoint(Endpoint::Start, Some(open)), Ok(open));
        assert_eq!(
            g.endpoint(Endpoint::End, None),
            Err(MazeError::InvalidEndpoint {
                endpoint: Endpoint::End,
                issue: EndpointIssue::Unset
            })
        );
        assert_eq!(
            g.endpoint(Endpoint::Start, Some(Coord::new(0, 1))),
            Err(MazeError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                issue: EndpointIssue::Wall(Coord::new(0, 1))
            })
        );
        assert_eq!(
            g.endpoint(Endpoint::Start, Some(Coord::new(5, 1))),
            Err(MazeError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                issue: EndpointIssue::OutOfBounds(Coord::new(5, 1))
            })
        );
    }

    #[test]
    fn iter_is_row_major() {
        let g = Grid::with_dims(2, 3, CellState::Space);
        let coords: Vec<_> = g.iter().map(|(c, _)| c).collect();
        assert_eq!(coords[1], Coord::new(0, 1));
        assert_eq!(coords[3], Coord::new(1, 0));
        assert_eq!(g.iter().len(), 6);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("###\n#*#\n###").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
