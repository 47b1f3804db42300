use std::{
    fmt::{self, Display, Write},
    str::FromStr,
};

use itertools::Itertools;
use smallvec::SmallVec;

use crate::error::SolveError;

/// The movable empty cell.
pub const BLANK: u8 = 0;

/// Largest supported side length; tiles are stored as `u8`.
pub const MAX_SIDE: usize = 15;

/// Row-major tile storage. Boards up to 5×5 stay inline.
pub type Tiles = SmallVec<[u8; 25]>;

/// An immutable arrangement of a `side × side` sliding puzzle.
///
/// Construction through [`Board::new`] or [`Board::from_str`] guarantees the
/// tiles are a permutation of `0..side²` with exactly one [`BLANK`]. Moving
/// the blank produces a new board; nothing mutates a board in place.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    side: usize,
    tiles: Tiles,
    blank: usize,
}

impl Board {
    pub fn new(side: usize, tiles: impl IntoIterator<Item = u8>) -> Result<Board, SolveError> {
        if !(2..=MAX_SIDE).contains(&side) {
            return Err(SolveError::malformed(format!(
                "side length {side} is outside 2..={MAX_SIDE}"
            )));
        }

        let tiles: Tiles = tiles.into_iter().collect();
        let len = side * side;
        if tiles.len() != len {
            return Err(SolveError::malformed(format!(
                "expected {len} tiles for side {side}, found {}",
                tiles.len()
            )));
        }

        let mut seen = [false; MAX_SIDE * MAX_SIDE];
        for (ix, &tile) in tiles.iter().enumerate() {
            let value = tile as usize;
            if value >= len {
                return Err(SolveError::malformed(format!(
                    "tile {tile} at index {ix} is out of range 0..{len}"
                )));
            }
            if seen[value] {
                return Err(SolveError::malformed(format!(
                    "tile {tile} appears more than once"
                )));
            }
            seen[value] = true;
        }

        // all `len` values are in range and distinct, so the blank is present
        Ok(Board::from_valid(side, tiles))
    }

    /// Builds a board from a flat tile list, inferring the side from its length.
    pub fn from_tiles(tiles: &[u8]) -> Result<Board, SolveError> {
        let side = (1..=MAX_SIDE)
            .find(|s| s * s >= tiles.len())
            .filter(|s| s * s == tiles.len())
            .ok_or_else(|| {
                SolveError::malformed(format!(
                    "{} tiles do not form a square board",
                    tiles.len()
                ))
            })?;

        Board::new(side, tiles.iter().copied())
    }

    /// The canonical goal: `1..N-1` in row-major order, blank in the last cell.
    pub fn goal(side: usize) -> Result<Board, SolveError> {
        if !(2..=MAX_SIDE).contains(&side) {
            return Err(SolveError::malformed(format!(
                "side length {side} is outside 2..={MAX_SIDE}"
            )));
        }
        let len = side * side;
        Ok(Board::from_valid(
            side,
            (0..len).map(|ix| goal_tile(ix, len)).collect(),
        ))
    }

    // The blank is the first zero-valued entry.
    fn from_valid(side: usize, tiles: Tiles) -> Board {
        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or(0);
        Board { side, tiles, blank }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub(crate) fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Index of the blank in row-major order.
    pub fn blank(&self) -> usize {
        self.blank
    }

    /// `(row, column)` of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        self.position(self.blank)
    }

    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.side, index % self.side)
    }

    pub fn is_goal(&self) -> bool {
        let len = self.len();
        self.tiles
            .iter()
            .enumerate()
            .all(|(ix, &t)| t == goal_tile(ix, len))
    }

    /// The canonical encoding used for deduplication: the row-major tiles.
    pub fn encode(&self) -> Tiles {
        self.tiles.clone()
    }

    /// Returns a new board with the blank swapped into `target`.
    pub(crate) fn with_blank_at(&self, target: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Board {
            side: self.side,
            tiles,
            blank: target,
        }
    }

    /// Inversion-parity test. Boards failing it can never reach the goal.
    pub fn is_solvable(&self) -> bool {
        let inversions = self
            .tiles
            .iter()
            .filter(|&&t| t != BLANK)
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count();

        if self.side % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (blank_row, _) = self.blank_position();
            (inversions + blank_row) % 2 == 1
        }
    }
}

/// Tile value the goal holds at `index` on a board of `len` cells.
pub fn goal_tile(index: usize, len: usize) -> u8 {
    if index + 1 == len {
        BLANK
    } else {
        (index + 1) as u8
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.len() - 1).to_string().len();
        let mut first = true;
        for line in self.tiles.chunks(self.side) {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            write!(f, "{}", line.iter().map(|t| format!("{t:>width$}")).join(" "))?;
        }

        Ok(())
    }
}

impl FromStr for Board {
    type Err = SolveError;

    /// Parses integers separated by whitespace or commas, e.g. `"1 2 3 4 5 6 0 7 8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles: Vec<u8> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<u8>()
                    .map_err(|_| SolveError::malformed(format!("'{tok}' is not a tile number")))
            })
            .collect::<Result<_, _>>()?;

        Board::from_tiles(&tiles)
    }
}
