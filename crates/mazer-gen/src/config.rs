//! Generator selection and size rules.

use std::fmt;
use std::str::FromStr;

use mazer_core::{MazeError, Result};

/// Smallest side length that still leaves a 2x2 block of cells inside the
/// border.
pub const MIN_SIZE: usize = 5;

/// Carving algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneratorKind {
    /// Randomised depth-first search with an explicit stack. Fast, biased
    /// toward long corridors.
    #[default]
    Backtracking,
    /// Random walk that carves on first entry. Slow, but every spanning tree
    /// is equally likely.
    AldousBroder,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 2] = [GeneratorKind::Backtracking, GeneratorKind::AldousBroder];

    /// The next kind in [`ALL`](Self::ALL), wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            GeneratorKind::Backtracking => GeneratorKind::AldousBroder,
            GeneratorKind::AldousBroder => GeneratorKind::Backtracking,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backtracking => f.write_str("backtracking"),
            Self::AldousBroder => f.write_str("aldous-broder"),
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "backtracking" | "backtrack" => Ok(Self::Backtracking),
            "aldous-broder" | "aldousbroder" => Ok(Self::AldousBroder),
            other => Err(MazeError::InvalidConfiguration(format!(
                "unknown generator \u{201c}{other}\u{201d}"
            ))),
        }
    }
}

/// Round a requested side length to something the generators accept:
/// at least [`MIN_SIZE`], and odd (even sizes grow by one).
pub fn normalize_size(size: usize) -> usize {
    let size = size.max(MIN_SIZE);
    if size % 2 == 0 { size + 1 } else { size }
}

/// Reject side lengths the generators cannot carve a bordered maze into.
pub fn validate_size(size: usize) -> Result<()> {
    if size < MIN_SIZE {
        return Err(MazeError::InvalidConfiguration(format!(
            "maze size {size} is below the minimum of {MIN_SIZE}"
        )));
    }
    if size % 2 == 0 {
        return Err(MazeError::InvalidConfiguration(format!(
            "maze size {size} must be odd"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rounds_up_to_odd() {
        assert_eq!(normalize_size(20), 21);
        assert_eq!(normalize_size(21), 21);
        assert_eq!(normalize_size(0), MIN_SIZE);
        assert_eq!(normalize_size(6), 7);
    }

    #[test]
    fn validate_rejects_small_and_even() {
        assert!(validate_size(5).is_ok());
        assert!(validate_size(51).is_ok());
        assert!(matches!(
            validate_size(3),
            Err(MazeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            validate_size(10),
            Err(MazeError::InvalidConfiguration(_))
        ));
        assert!(validate_size(1).is_err());
    }

    #[test]
    fn kinds_parse_and_display() {
        for k in GeneratorKind::ALL {
            assert_eq!(k.to_string().parse::<GeneratorKind>(), Ok(k));
        }
        assert_eq!(
            "Aldous_Broder".parse::<GeneratorKind>(),
            Ok(GeneratorKind::AldousBroder)
        );
        assert!("prim".parse::<GeneratorKind>().is_err());
        assert_eq!(GeneratorKind::AldousBroder.cycle(), GeneratorKind::Backtracking);
    }
}
