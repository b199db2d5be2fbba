//! Best-first graph search over puzzle states.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::frontier::Frontier;
use crate::heuristic::SearchMode;
use crate::node::SearchNode;
use crate::puzzle::{Move, Puzzle};

/// Figures reported for a solved puzzle.
///
/// `expanded_count` counts the first pop of every node, the goal included,
/// so a start state that is already solved reports 1. `max_frontier_size`
/// is sampled after each expansion and is 0 in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded_count: usize,
    pub max_frontier_size: usize,
    pub solution_depth: u32,
    /// Blank moves from the start to the goal.
    pub moves: Vec<Move>,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Goal!!!")?;
        writeln!(f)?;
        writeln!(
            f,
            "To solve this problem the search algorithm expanded a total of {} nodes.",
            self.expanded_count
        )?;
        writeln!(
            f,
            "The maximum number of nodes in the queue at any one time: {}.",
            self.max_frontier_size
        )?;
        write!(f, "The depth of the goal node was {}.", self.solution_depth)
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FailureReason {
    #[error("no solution found")]
    FrontierExhausted,
    #[error("search cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Success(SearchStats),
    Failure { reason: FailureReason },
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn stats(&self) -> Option<&SearchStats> {
        match self {
            SearchResult::Success(stats) => Some(stats),
            SearchResult::Failure { .. } => None,
        }
    }
}

/// Stops a running search at its next iteration.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Solves `start` with the strategy chosen by `mode`.
pub fn search(start: Puzzle, mode: SearchMode) -> SearchResult {
    let heuristic = mode.heuristic();
    search_with(start, |puzzle| heuristic.estimate(puzzle), None)
}

/// Runs the search loop with an arbitrary heuristic.
///
/// States are registered as visited when generated, not when expanded: a
/// state keeps the depth of the first path that reached it.
pub fn search_with<H>(start: Puzzle, heuristic: H, cancel: Option<&CancelToken>) -> SearchResult
where
    H: Fn(&Puzzle) -> f64,
{
    let mut frontier = Frontier::new();
    let mut visited: HashSet<Puzzle> = HashSet::new();
    // parent link and move for every generated node; the root has none
    let mut lineage: Vec<Option<(usize, Move)>> = vec![None];
    let mut expanded_count = 0;
    let mut max_frontier_size = 0;

    frontier.insert(SearchNode::new(start, 0, heuristic(&start)));
    visited.insert(start);

    while let Ok(mut node) = frontier.pop_min() {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            info!(expanded_count, "search cancelled");
            return SearchResult::Failure {
                reason: FailureReason::Cancelled,
            };
        }

        if !node.expanded {
            node.expanded = true;
            expanded_count += 1;
        }

        if node.state.is_goal() {
            let moves = trace_moves(&lineage, node.lineage);
            info!(
                expanded_count,
                max_frontier_size,
                high_water = frontier.high_water(),
                depth = node.depth,
                "goal reached"
            );
            return SearchResult::Success(SearchStats {
                expanded_count,
                max_frontier_size,
                solution_depth: node.depth,
                moves,
            });
        }

        debug!(
            g = node.depth,
            h = node.heuristic_cost,
            "expanding state\n{}",
            node.state
        );

        for (dir, next) in node.state.successors() {
            if !visited.insert(next) {
                continue;
            }
            trace!(%dir, "generated state\n{}", next);

            lineage.push(Some((node.lineage, dir)));
            let child = SearchNode::new(next, node.depth + 1, heuristic(&next))
                .with_lineage(lineage.len() - 1);
            frontier.insert(child);
        }

        max_frontier_size = max_frontier_size.max(frontier.len());
    }

    info!(
        expanded_count,
        visited = visited.len(),
        high_water = frontier.high_water(),
        "frontier exhausted"
    );
    SearchResult::Failure {
        reason: FailureReason::FrontierExhausted,
    }
}

fn trace_moves(lineage: &[Option<(usize, Move)>], mut at: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    while let Some(&Some((parent, dir))) = lineage.get(at) {
        moves.push(dir);
        at = parent;
    }
    moves.reverse();
    moves
}
