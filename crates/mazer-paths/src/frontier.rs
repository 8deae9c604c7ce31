//! A single breadth-first search direction.

use std::collections::{HashMap, VecDeque};

use mazer_core::{CellState, Coord, Grid};

use crate::tracker::VisitedTracker;

/// FIFO work queue plus the bookkeeping for one BFS direction.
///
/// Queue entries carry the cell they were discovered from; the first time a
/// cell is dequeued fixes its parent, which is all path reconstruction needs.
#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    origin: Coord,
    queue: VecDeque<(Coord, Option<Coord>)>,
    visited: VisitedTracker,
    parents: HashMap<Coord, Coord>,
}

impl Frontier {
    pub(crate) fn new(origin: Coord) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((origin, None));
        Self {
            origin,
            queue,
            visited: VisitedTracker::new(),
            parents: HashMap::new(),
        }
    }

    #[inline]
    pub(crate) fn visited(&self) -> &VisitedTracker {
        &self.visited
    }

    /// Dequeue until one new passable cell is found, mark it `Visited` on
    /// the grid and enqueue its unvisited neighbours in N, E, S, W order.
    ///
    /// Returns `None` once the queue is empty.
    pub(crate) fn advance(&mut self, grid: &mut Grid) -> Option<Coord> {
        while let Some((cell, parent)) = self.queue.pop_front() {
            if self.visited.has(cell) || !grid.is_passable(cell) {
                continue;
            }
            self.visited.add(cell);
            if let Some(p) = parent {
                self.parents.insert(cell, p);
            }
            grid.replace(cell, CellState::Visited);

            for n in cell.neighbors_4() {
                if !self.visited.has(n) {
                    self.queue.push_back((n, Some(cell)));
                }
            }
            return Some(cell);
        }
        None
    }

    /// Cells from this direction's origin to `to`, both inclusive.
    ///
    /// `to` must have been visited by this frontier.
    pub(crate) fn chain(&self, to: Coord) -> Vec<Coord> {
        let mut cells = vec![to];
        let mut cur = to;
        while cur != self.origin {
            match self.parents.get(&cur) {
                Some(&p) => {
                    cells.push(p);
                    cur = p;
                }
                None => break,
            }
        }
        cells.reverse();
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_in_level_order() {
        let mut grid = Grid::parse(
            "
#####
#...#
#...#
#...#
#####",
        )
        .unwrap();
        let mut f = Frontier::new(Coord::new(2, 2));
        let mut order = Vec::new();
        while let Some(c) = f.advance(&mut grid) {
            order.push(c);
        }
        assert_eq!(order.len(), 9);
        assert_eq!(order[0], Coord::new(2, 2));
        // Neighbours come next in N, E, S, W order.
        assert_eq!(
            &order[1..5],
            &[
                Coord::new(1, 2),
                Coord::new(2, 3),
                Coord::new(3, 2),
                Coord::new(2, 1)
            ]
        );
        assert_eq!(grid.count(CellState::Visited), 9);
    }

    #[test]
    fn chain_walks_back_to_origin() {
        let mut grid = Grid::parse("#####\n#...#\n#####").unwrap();
        let mut f = Frontier::new(Coord::new(1, 1));
        while f.advance(&mut grid).is_some() {}
        assert_eq!(
            f.chain(Coord::new(1, 3)),
            vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(1, 3)]
        );
        assert_eq!(f.chain(Coord::new(1, 1)), vec![Coord::new(1, 1)]);
    }

    #[test]
    fn walls_and_out_of_range_are_skipped() {
        let mut grid = Grid::parse(".#\n..").unwrap();
        let mut f = Frontier::new(Coord::new(0, 0));
        let mut n = 0;
        while f.advance(&mut grid).is_some() {
            n += 1;
        }
        assert_eq!(n, 3);
        assert!(!f.visited().has(Coord::new(0, 1)));
        assert!(!f.visited().has(Coord::new(-1, 0)));
    }
}
