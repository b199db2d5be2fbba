//! 8-puzzle solver: uniform cost search and A* over the 3×3 sliding-tile
//! state space.

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod puzzle;
pub mod render;
pub mod search;

pub use error::{PuzzleError, SearchError};
pub use heuristic::{Heuristic, SearchMode};
pub use puzzle::{Move, Puzzle};
pub use search::{search, search_with, CancelToken, FailureReason, SearchResult, SearchStats};
