//! The [`CellState`] type: what occupies a single maze position.

/// State of one grid position.
///
/// During a search pass a passable cell moves `Space -> Visited -> Solution`;
/// [`Grid::reset`](crate::Grid::reset) brings it back to `Space`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Open and untouched by the current search.
    #[default]
    Space,
    /// Impassable.
    Wall,
    /// Open and dequeued by the current search.
    Visited,
    /// Open and part of the reconstructed shortest path.
    Solution,
}

impl CellState {
    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellState::Wall)
    }

    /// ASCII glyph used by [`Grid`](crate::Grid)'s text form.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            CellState::Space => '.',
            CellState::Wall => '#',
            CellState::Visited => 'o',
            CellState::Solution => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' | ' ' => Some(CellState::Space),
            '#' => Some(CellState::Wall),
            'o' => Some(CellState::Visited),
            '*' => Some(CellState::Solution),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_walls_block() {
        assert!(CellState::Space.is_passable());
        assert!(CellState::Visited.is_passable());
        assert!(CellState::Solution.is_passable());
        assert!(!CellState::Wall.is_passable());
    }

    #[test]
    fn glyphs_are_reversible() {
        for s in [
            CellState::Space,
            CellState::Wall,
            CellState::Visited,
            CellState::Solution,
        ] {
            assert_eq!(CellState::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(CellState::from_glyph('x'), None);
    }
}
