//! Cost estimates from a state to the goal.

use std::fmt;

use crate::puzzle::{Puzzle, SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Constant 0; turns A* into uniform cost search.
    Zero,
    MisplacedTile,
    Euclidean,
}

impl Heuristic {
    pub fn estimate(&self, puzzle: &Puzzle) -> f64 {
        match self {
            Heuristic::Zero => 0.0,
            Heuristic::MisplacedTile => misplaced_tiles(puzzle) as f64,
            Heuristic::Euclidean => euclidean_distance(puzzle),
        }
    }
}

/// Non-blank tiles not on their goal cell. Always in `0..=8`.
pub fn misplaced_tiles(puzzle: &Puzzle) -> usize {
    let goal = Puzzle::goal();
    let mut count = 0;
    for i in 0..SIZE {
        for j in 0..SIZE {
            let value = puzzle.tile(i, j);
            if value != 0 && value != goal.tile(i, j) {
                count += 1;
            }
        }
    }
    count
}

/// Sum of straight-line distances from each tile to its goal cell.
///
/// Terms are summed in tile order so equal-cost states round identically.
pub fn euclidean_distance(puzzle: &Puzzle) -> f64 {
    let mut positions = [(0, 0); SIZE * SIZE];
    for i in 0..SIZE {
        for j in 0..SIZE {
            positions[puzzle.tile(i, j) as usize] = (i, j);
        }
    }

    let mut distance = 0.0;
    for (tile, &(row, col)) in positions.iter().enumerate().skip(1) {
        let target_row = (tile - 1) / SIZE;
        let target_col = (tile - 1) % SIZE;
        let dr = row as f64 - target_row as f64;
        let dc = col as f64 - target_col as f64;
        distance += dr.hypot(dc);
    }
    distance
}

/// The three search strategies offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    UniformCost,
    AStarMisplaced,
    AStarEuclidean,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [
        SearchMode::UniformCost,
        SearchMode::AStarMisplaced,
        SearchMode::AStarEuclidean,
    ];

    pub fn heuristic(&self) -> Heuristic {
        match self {
            SearchMode::UniformCost => Heuristic::Zero,
            SearchMode::AStarMisplaced => Heuristic::MisplacedTile,
            SearchMode::AStarEuclidean => Heuristic::Euclidean,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            SearchMode::UniformCost => "Uniform Cost Search",
            SearchMode::AStarMisplaced => "A* with the Misplaced Tile heuristic",
            SearchMode::AStarEuclidean => "A* with the Euclidean distance heuristic",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn puzzle(s: &str) -> Puzzle {
        s.parse().unwrap()
    }

    #[test]
    fn goal_scores_zero() {
        let goal = Puzzle::goal();
        assert_eq!(misplaced_tiles(&goal), 0);
        assert_eq!(euclidean_distance(&goal), 0.0);
        for mode in SearchMode::ALL {
            assert_eq!(mode.heuristic().estimate(&goal), 0.0);
        }
    }

    #[test]
    fn misplaced_ignores_the_blank() {
        // 5 and 8 are out of place; the blank is too but does not count.
        assert_eq!(misplaced_tiles(&puzzle("1 2 3 4 0 6 7 5 8")), 2);
        assert_eq!(misplaced_tiles(&puzzle("1 2 3 4 5 6 7 0 8")), 1);
    }

    #[test]
    fn euclidean_uses_straight_lines() {
        // 8 is one column off.
        assert_eq!(euclidean_distance(&puzzle("1 2 3 4 5 6 7 0 8")), 1.0);
        // 1 and 8 swapped: each sits sqrt(5) from home.
        let h = euclidean_distance(&puzzle("8 2 3 4 5 6 7 1 0"));
        let expected = 5.0_f64.sqrt() * 2.0;
        assert!((h - expected).abs() < 1e-9, "got {h}");
    }

    #[test]
    fn zero_heuristic_is_always_zero() {
        assert_eq!(Heuristic::Zero.estimate(&puzzle("8 6 7 2 5 4 3 0 1")), 0.0);
    }

    #[test]
    fn estimates_stay_within_bounds() {
        let bound = 8.0 * 2.0 * 2.0_f64.sqrt();
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = Puzzle::goal();
        for _ in 0..200 {
            state.shuffle_with(&mut rng);
            let misplaced = misplaced_tiles(&state);
            let euclid = euclidean_distance(&state);
            assert!(misplaced <= 8);
            assert!((0.0..=bound).contains(&euclid));
            // each misplaced tile is at least one cell away
            assert!(euclid + 1e-9 >= misplaced as f64);
        }
    }
}
