//! Search nodes and their frontier ordering.

use std::cmp::Ordering;

use crate::puzzle::Puzzle;

/// A generated state plus its search bookkeeping.
///
/// `heuristic_cost` is computed once when the node is created.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: Puzzle,
    /// Moves taken from the start state.
    pub depth: u32,
    pub heuristic_cost: f64,
    /// Set on the first pop; only that pop counts as an expansion.
    pub expanded: bool,
    /// Index into the engine's lineage arena, used to rebuild the move list.
    pub(crate) lineage: usize,
}

impl SearchNode {
    pub fn new(state: Puzzle, depth: u32, heuristic_cost: f64) -> Self {
        Self {
            state,
            depth,
            heuristic_cost,
            expanded: false,
            lineage: 0,
        }
    }

    pub(crate) fn with_lineage(mut self, lineage: usize) -> Self {
        self.lineage = lineage;
        self
    }

    /// `f(n) = g(n) + h(n)`.
    pub fn f_cost(&self) -> f64 {
        f64::from(self.depth) + self.heuristic_cost
    }
}

/// Frontier ordering key: `(f_cost, depth, insertion)`.
///
/// Lower `f_cost` first, then shallower depth, then earlier insertion.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub f_cost: f64,
    pub depth: u32,
    pub insertion: u64,
}

impl FrontierKey {
    pub fn new(node: &SearchNode, insertion: u64) -> Self {
        Self {
            f_cost: node.f_cost(),
            depth: node.depth,
            insertion,
        }
    }
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            .then(self.depth.cmp(&other.depth))
            .then(self.insertion.cmp(&other.insertion))
    }
}
