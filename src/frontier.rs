//! Min-priority frontier of pending search nodes.
//!
//! Nodes come out by ascending `cost`; among equal costs, the node pushed
//! first comes out first. The same board may be queued more than once.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::expand::SearchNode;

/// `(cost, insertion sequence)`, compared lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    cost: u32,
    sequence: u64,
}

#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: SearchNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) {
        let key = FrontierKey {
            cost: node.cost,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Removes the cheapest node, oldest first on ties.
    pub fn pop_min(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|e| e.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::Board;

    fn node(cost: u32, tag: u8) -> SearchNode {
        // the tag swaps the blank into a distinct cell so nodes are tellable apart
        let goal = Board::goal(3).unwrap();
        let board = if tag == 0 {
            goal
        } else {
            Board::new(
                3,
                goal.tiles()
                    .iter()
                    .map(|&t| if t == 0 { tag } else if t == tag { 0 } else { t }),
            )
            .unwrap()
        };
        SearchNode {
            board,
            depth: 0,
            cost,
        }
    }

    #[test]
    fn pops_lowest_cost_first() {
        let mut frontier = Frontier::new();
        frontier.push(node(10, 1));
        frontier.push(node(5, 2));
        frontier.push(node(15, 3));

        let costs: Vec<_> = std::iter::from_fn(|| frontier.pop_min())
            .map(|n| n.cost)
            .collect();
        assert_eq!(costs, vec![5, 10, 15]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn equal_costs_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        frontier.push(node(3, 4));
        frontier.push(node(1, 7));
        frontier.push(node(3, 2));
        frontier.push(node(3, 8));
        frontier.push(node(1, 5));

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop_min())
            .map(|n| (n.cost, n.board.blank()))
            .collect();
        // tag t puts the blank where tile t used to be, at index t - 1
        assert_eq!(order, vec![(1, 6), (1, 4), (3, 3), (3, 1), (3, 7)]);
    }

    #[test]
    fn keeps_duplicates() {
        let mut frontier = Frontier::new();
        frontier.push(node(4, 1));
        frontier.push(node(2, 1));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop_min().map(|n| n.cost), Some(2));
        assert_eq!(frontier.pop_min().map(|n| n.cost), Some(4));
        assert_eq!(frontier.pop_min(), None);
    }

    #[test]
    fn high_water_survives_pops() {
        let mut frontier = Frontier::new();
        for tag in 1..=3 {
            frontier.push(node(u32::from(tag), tag));
        }
        assert_eq!(frontier.high_water(), 3);
        let _ = frontier.pop_min();
        let _ = frontier.pop_min();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.high_water(), 3);
    }
}
