//! Node-ordering strategies and the admissible estimates behind them.
//!
//! The blank is never counted: a single slide moves one numbered tile, so
//! counting the blank as well would let one move lower the estimate by two
//! and break admissibility.

use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::{
    error::SolveError,
    state::{goal_tile, Board, BLANK},
};

/// Anything that can give a lower bound on the moves left to the goal.
pub trait Estimate {
    fn estimate(&self, board: &Board) -> u32;
}

/// The closed set of orderings the solver supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// h ≡ 0; plain uniform-cost search.
    UniformCost = 1,
    /// A* with the number of out-of-place tiles.
    MisplacedTile = 2,
    /// A* with the summed Manhattan distance of each tile to its goal cell.
    ManhattanDistance = 3,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::UniformCost,
        Strategy::MisplacedTile,
        Strategy::ManhattanDistance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::UniformCost => "uniform",
            Strategy::MisplacedTile => "misplaced",
            Strategy::ManhattanDistance => "manhattan",
        }
    }
}

impl Estimate for Strategy {
    fn estimate(&self, board: &Board) -> u32 {
        match self {
            Strategy::UniformCost => 0,
            Strategy::MisplacedTile => misplaced_tiles(board),
            Strategy::ManhattanDistance => manhattan_distance(board),
        }
    }
}

impl TryFrom<u8> for Strategy {
    type Error = SolveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Strategy::UniformCost),
            2 => Ok(Strategy::MisplacedTile),
            3 => Ok(Strategy::ManhattanDistance),
            _ => Err(SolveError::UnsupportedStrategy {
                selector: value.to_string(),
            }),
        }
    }
}

impl FromStr for Strategy {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "uniform" => Ok(Strategy::UniformCost),
            "2" | "misplaced" => Ok(Strategy::MisplacedTile),
            "3" | "manhattan" => Ok(Strategy::ManhattanDistance),
            _ => Err(SolveError::UnsupportedStrategy {
                selector: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Numbered tiles that are not on their goal cell.
pub fn misplaced_tiles(board: &Board) -> u32 {
    let len = board.len();
    board
        .tiles()
        .iter()
        .zip_eq((0..len).map(|ix| goal_tile(ix, len)))
        .filter(|&(&t, g)| t != BLANK && t != g)
        .count() as u32
}

/// Sum over numbered tiles of |Δrow| + |Δcol| to the goal cell.
pub fn manhattan_distance(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t != BLANK)
        .map(|(ix, &t)| {
            let (row, col) = board.position(ix);
            let (goal_row, goal_col) = board.position(t as usize - 1);
            (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
        })
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn goal_estimates_zero() {
        for side in 2..=5 {
            let goal = Board::goal(side).unwrap();
            for strategy in Strategy::ALL {
                assert_eq!(strategy.estimate(&goal), 0, "{strategy} on side {side}");
            }
        }
    }

    #[test]
    fn one_move_from_goal() {
        let b = board("1 2 3 4 5 6 7 0 8");
        assert_eq!(misplaced_tiles(&b), 1);
        assert_eq!(manhattan_distance(&b), 1);
        assert_eq!(Strategy::UniformCost.estimate(&b), 0);
    }

    #[test]
    fn known_values() {
        let b = board("0 7 2 4 6 1 3 5 8");
        // only 4 is home
        assert_eq!(misplaced_tiles(&b), 7);
        // 7:3 2:1 4:0 6:1 1:3 3:4 5:1 8:1
        assert_eq!(manhattan_distance(&b), 14);
    }

    #[test]
    fn manhattan_dominates_misplaced() {
        for s in ["1 2 3 5 0 6 4 7 8", "1 6 7 5 0 3 4 8 2", "7 1 2 4 8 5 6 3 0"] {
            let b = board(s);
            assert!(manhattan_distance(&b) >= misplaced_tiles(&b), "{s}");
        }
    }

    #[test]
    fn selector_values() {
        assert_eq!(Strategy::try_from(1u8), Ok(Strategy::UniformCost));
        assert_eq!(Strategy::try_from(2u8), Ok(Strategy::MisplacedTile));
        assert_eq!(Strategy::try_from(3u8), Ok(Strategy::ManhattanDistance));
        for bad in [0u8, 4, 255] {
            assert!(matches!(
                Strategy::try_from(bad),
                Err(SolveError::UnsupportedStrategy { .. })
            ));
        }

        assert_eq!("Manhattan".parse::<Strategy>(), Ok(Strategy::ManhattanDistance));
        assert_eq!("2".parse::<Strategy>(), Ok(Strategy::MisplacedTile));
        assert!(matches!(
            "greedy".parse::<Strategy>(),
            Err(SolveError::UnsupportedStrategy { selector }) if selector == "greedy"
        ));
    }
}
