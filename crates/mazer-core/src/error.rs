//! Error kinds shared by every maze crate.

use std::fmt;

use crate::coord::Coord;

/// Which end of a search an [`MazeError::InvalidEndpoint`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Why an endpoint was rejected before a search started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointIssue {
    /// No coordinate was selected.
    Unset,
    /// The coordinate lies outside the grid.
    OutOfBounds(Coord),
    /// The coordinate is a wall cell.
    Wall(Coord),
}

/// Errors produced by grid access, maze generation and search setup.
///
/// An exhausted search is not an error; see the search crate's outcome type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A coordinate fell outside the grid extent.
    OutOfBounds { coord: Coord, rows: usize, cols: usize },
    /// A search endpoint is unusable.
    InvalidEndpoint {
        endpoint: Endpoint,
        issue: EndpointIssue,
    },
    /// A size or option that cannot produce a valid maze.
    InvalidConfiguration(String),
    /// Malformed text grid.
    Parse { line: usize, message: String },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, rows, cols } => {
                write!(f, "coordinate {coord} is outside the {rows}x{cols} grid")
            }
            Self::InvalidEndpoint { endpoint, issue } => match issue {
                EndpointIssue::Unset => write!(f, "{endpoint} is not set"),
                EndpointIssue::OutOfBounds(c) => {
                    write!(f, "{endpoint} {c} is outside the grid")
                }
                EndpointIssue::Wall(c) => write!(f, "{endpoint} {c} is a wall"),
            },
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Parse { line, message } => write!(f, "grid parse error on line {line}: {message}"),
        }
    }
}

impl std::error::Error for MazeError {}

/// Result alias used across the maze crates.
pub type Result<T> = std::result::Result<T, MazeError>;
