use std::fmt;

use smallvec::SmallVec;

use crate::{heuristic::Estimate, state::Board};

/// The direction the blank travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Whether the blank can move this way without leaving the grid.
    pub fn is_legal(self, board: &Board) -> bool {
        let (row, col) = board.blank_position();
        let last = board.side() - 1;
        match self {
            Direction::Up => row > 0,
            Direction::Down => row < last,
            Direction::Left => col > 0,
            Direction::Right => col < last,
        }
    }

    // ±side vertically, ±1 horizontally; only valid once `is_legal` holds
    fn target(self, board: &Board) -> usize {
        let blank = board.blank();
        match self {
            Direction::Up => blank - board.side(),
            Direction::Down => blank + board.side(),
            Direction::Left => blank - 1,
            Direction::Right => blank + 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        f.write_str(s)
    }
}

/// A board reached during search.
///
/// `depth` is g(n), the number of moves from the start; `cost` is
/// f(n) = g(n) + h(n) under the strategy that created the node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub board: Board,
    pub depth: u32,
    pub cost: u32,
}

impl SearchNode {
    pub fn root(board: Board, estimator: &impl Estimate) -> SearchNode {
        let cost = estimator.estimate(&board);
        SearchNode {
            board,
            depth: 0,
            cost,
        }
    }

    /// h(n) as recorded at creation.
    pub fn heuristic(&self) -> u32 {
        self.cost - self.depth
    }
}

/// Slides the blank one step in `direction`.
///
/// The caller checks [`Direction::is_legal`] first.
pub fn expand(node: &SearchNode, direction: Direction, estimator: &impl Estimate) -> SearchNode {
    debug_assert!(
        direction.is_legal(&node.board),
        "{direction} is not legal from blank at {:?}",
        node.board.blank_position()
    );

    let board = node.board.with_blank_at(direction.target(&node.board));
    let depth = node.depth + 1;
    let cost = depth + estimator.estimate(&board);
    SearchNode { board, depth, cost }
}

/// Every child reachable by one legal move, in [`Direction::ALL`] order.
pub fn children(node: &SearchNode, estimator: &impl Estimate) -> SmallVec<[SearchNode; 4]> {
    Direction::ALL
        .into_iter()
        .filter(|d| d.is_legal(&node.board))
        .map(|d| expand(node, d, estimator))
        .collect()
}
