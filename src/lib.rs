//! Best-first solver for the N-tile sliding puzzle (8-, 15-, 24-puzzle, ...).
//!
//! A search pops the cheapest pending node from a [`frontier::Frontier`],
//! tests it against the goal, and pushes every unvisited child the
//! [`expand`] module produces. Node order comes from a [`Strategy`]:
//! uniform cost, or A* with misplaced-tile or Manhattan-distance estimates.
//!
//! ```
//! use tile_solver::{solve, Board, Strategy};
//!
//! let start: Board = "1 2 3 4 5 6 0 7 8".parse().unwrap();
//! let solution = solve(&start, Strategy::ManhattanDistance).unwrap();
//! assert_eq!(solution.depth, 2);
//! ```

pub mod error;
pub mod expand;
pub mod frontier;
pub mod heuristic;
pub mod samples;
pub mod search;
pub mod state;
pub mod visited;

pub use error::SolveError;
pub use heuristic::{Estimate, Strategy};
pub use search::{solve, solve_with, ExpansionPolicy, Search, Solution};
pub use state::Board;
