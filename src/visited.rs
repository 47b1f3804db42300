use std::collections::HashSet;

use crate::state::{Board, Tiles};

/// Encodings of every board the search has expanded. Only grows.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<Tiles>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `board`; returns `false` if it was already present.
    pub fn insert(&mut self, board: &Board) -> bool {
        self.seen.insert(board.encode())
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.seen.contains(board.tiles())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut visited = VisitedSet::new();
        let goal = Board::goal(3).unwrap();
        let other: Board = "1 2 3 4 5 6 7 0 8".parse().unwrap();

        assert!(visited.is_empty());
        assert!(visited.insert(&goal));
        assert!(!visited.insert(&goal));
        assert!(visited.contains(&goal));
        assert!(!visited.contains(&other));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn same_tiles_same_entry() {
        let mut visited = VisitedSet::new();
        let a: Board = "1 2 3 0".parse().unwrap();
        let b = Board::new(2, [1, 2, 3, 0]).unwrap();
        visited.insert(&a);
        assert!(visited.contains(&b));
    }
}
