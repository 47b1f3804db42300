//! Errors surfaced by the solver.
//!
//! Every error is terminal for the call that produced it: input problems are
//! reported before the search loop starts, exhaustion is reported when the
//! frontier runs dry.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The tiles do not form a valid board: wrong length, no blank,
    /// a repeated tile, or a tile out of range.
    MalformedState { detail: String },
    /// A strategy selector outside {1, 2, 3}.
    UnsupportedStrategy { selector: String },
    /// The frontier was exhausted without reaching the goal.
    NoSolutionFound { expanded: usize },
}

impl SolveError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        SolveError::MalformedState {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::MalformedState { detail } => write!(f, "malformed board: {detail}"),
            SolveError::UnsupportedStrategy { selector } => write!(
                f,
                "unsupported strategy '{selector}' (expected 1|2|3 or uniform|misplaced|manhattan)"
            ),
            SolveError::NoSolutionFound { expanded } => {
                write!(f, "no solution found after expanding {expanded} states")
            }
        }
    }
}

impl std::error::Error for SolveError {}
