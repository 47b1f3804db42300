//! Best-first search driver.
//!
//! One [`Search`] owns its frontier and visited set for the duration of a
//! single solve. Memory grows with every board generated; there is no bound,
//! so boards much past the 8-puzzle need the Manhattan strategy to finish.

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::{
    error::SolveError,
    expand::{children, SearchNode},
    frontier::Frontier,
    heuristic::{Estimate, Strategy},
    state::Board,
    visited::VisitedSet,
};

/// How popped boards are deduplicated against the visited set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpansionPolicy {
    /// A popped board that was already visited is dropped unexpanded, so
    /// every board is expanded at most once.
    #[default]
    ExpandOnce,
    /// Mark on pop and never re-check: a board queued several times before
    /// its first pop is expanded each time it comes out.
    Reference,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Seeded with the start node, no pops yet.
    Initialized,
    Running,
    /// The goal was popped at this depth.
    Solved(u32),
    /// The frontier ran dry without reaching the goal.
    Exhausted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose children were generated.
    pub expanded: usize,
    /// Children produced by the expander.
    pub generated: usize,
    /// Children dropped because their board was already visited.
    pub duplicates_skipped: usize,
    /// Popped nodes dropped because their board was already expanded.
    pub stale_skipped: usize,
    pub frontier_high_water: usize,
    pub elapsed: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Number of moves on an optimal path.
    pub depth: u32,
    pub stats: SearchStats,
}

pub struct Search<E = Strategy> {
    estimator: E,
    policy: ExpansionPolicy,
    frontier: Frontier,
    visited: VisitedSet,
    phase: Phase,
    stats: SearchStats,
}

impl<E: Estimate> Search<E> {
    pub fn new(start: Board, estimator: E, policy: ExpansionPolicy) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(SearchNode::root(start, &estimator));
        let stats = SearchStats {
            frontier_high_water: frontier.high_water(),
            ..SearchStats::default()
        };

        Search {
            estimator,
            policy,
            frontier,
            visited: VisitedSet::new(),
            phase: Phase::Initialized,
            stats,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Runs one iteration: pop, mark visited, goal test, expand.
    ///
    /// Once the search is solved or exhausted, further calls return the same
    /// phase without doing anything.
    pub fn step(&mut self) -> Phase {
        if matches!(self.phase, Phase::Solved(_) | Phase::Exhausted) {
            return self.phase;
        }

        let node = match self.frontier.pop_min() {
            Some(node) => node,
            None => {
                debug!("frontier exhausted after {} expansions", self.stats.expanded);
                self.phase = Phase::Exhausted;
                return self.phase;
            }
        };

        let fresh = self.visited.insert(&node.board);
        if !fresh && self.policy == ExpansionPolicy::ExpandOnce {
            self.stats.stale_skipped += 1;
            self.phase = Phase::Running;
            return self.phase;
        }

        if node.board.is_goal() {
            self.phase = Phase::Solved(node.depth);
            return self.phase;
        }

        trace!(
            "expanding depth={} cost={} blank={:?}",
            node.depth,
            node.cost,
            node.board.blank_position()
        );
        self.stats.expanded += 1;

        // children are checked against the set as it stood after the pop above
        for child in children(&node, &self.estimator) {
            self.stats.generated += 1;
            if self.visited.contains(&child.board) {
                self.stats.duplicates_skipped += 1;
                continue;
            }
            self.frontier.push(child);
        }
        self.stats.frontier_high_water = self.frontier.high_water();

        self.phase = Phase::Running;
        self.phase
    }

    /// Steps until solved or exhausted.
    pub fn run(mut self) -> Result<Solution, SolveError> {
        let start = Instant::now();
        loop {
            match self.step() {
                Phase::Solved(depth) => {
                    self.stats.elapsed = start.elapsed();
                    debug!(
                        "solved at depth {depth}: expanded {}, generated {}, in {:?}",
                        self.stats.expanded, self.stats.generated, self.stats.elapsed
                    );
                    return Ok(Solution {
                        depth,
                        stats: self.stats,
                    });
                }
                Phase::Exhausted => {
                    return Err(SolveError::NoSolutionFound {
                        expanded: self.stats.expanded,
                    })
                }
                Phase::Initialized | Phase::Running => {}
            }
        }
    }
}

/// Finds the optimal move count from `start` to the goal.
pub fn solve(start: &Board, strategy: Strategy) -> Result<Solution, SolveError> {
    solve_with(start, strategy, ExpansionPolicy::default())
}

pub fn solve_with(
    start: &Board,
    estimator: impl Estimate,
    policy: ExpansionPolicy,
) -> Result<Solution, SolveError> {
    debug!("searching {}x{} board, policy {:?}", start.side(), start.side(), policy);
    Search::new(start.clone(), estimator, policy).run()
}
