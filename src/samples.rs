//! Fixed 8-puzzle instances with known optimal depths.

use crate::{error::SolveError, state::Board};

/// `(tiles, optimal depth)`, from trivial to the 24-move case.
pub const SAMPLES: &[(&str, u32)] = &[
    ("1 2 3 4 5 6 7 8 0", 0),
    ("1 2 3 4 5 6 0 7 8", 2),
    ("1 2 3 5 0 6 4 7 8", 4),
    ("1 3 6 5 0 2 4 7 8", 8),
    ("1 3 6 5 0 7 4 8 2", 12),
    ("1 6 7 5 0 3 4 8 2", 16),
    ("7 1 2 4 8 5 6 3 0", 20),
    ("0 7 2 4 6 1 3 5 8", 24),
];

/// The samples as boards, paired with their optimal depth.
pub fn sample_boards() -> impl Iterator<Item = Result<(Board, u32), SolveError>> {
    SAMPLES
        .iter()
        .map(|&(tiles, depth)| tiles.parse::<Board>().map(|board| (board, depth)))
}
