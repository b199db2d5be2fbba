use rand::{seq::SliceRandom, thread_rng, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

pub const SIZE: usize = 3;

const GOAL: [[u8; SIZE]; SIZE] = [[1, 2, 3], [4, 5, 6], [7, 8, 0]];

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order used by the successor generator.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A 3×3 arrangement of tiles 1..=8 and the blank (0).
///
/// Equality and hashing follow the grid contents. The blank position is
/// derived from the grid, so it never disagrees with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Puzzle {
    board: [[u8; SIZE]; SIZE],
    blank_row: usize,
    blank_col: usize,
}

impl Puzzle {
    pub fn goal() -> Self {
        Self {
            board: GOAL,
            blank_row: SIZE - 1,
            blank_col: SIZE - 1,
        }
    }

    /// Builds a puzzle from row-major tiles.
    ///
    /// Every value must lie in `0..=8` and appear exactly once, which also
    /// guarantees a single blank.
    pub fn from_tiles(tiles: [u8; SIZE * SIZE]) -> Result<Self, PuzzleError> {
        let mut seen = [false; SIZE * SIZE];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(PuzzleError::TileOutOfRange(tile))?;
            if *slot {
                return Err(PuzzleError::DuplicateTile(tile));
            }
            *slot = true;
        }

        let mut board = [[0; SIZE]; SIZE];
        let mut blank = (0, 0);
        for (i, &tile) in tiles.iter().enumerate() {
            board[i / SIZE][i % SIZE] = tile;
            if tile == 0 {
                blank = (i / SIZE, i % SIZE);
            }
        }

        Ok(Self {
            board,
            blank_row: blank.0,
            blank_col: blank.1,
        })
    }

    /// Parses three rows of three whitespace-separated tile numbers.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, PuzzleError> {
        if rows.len() != SIZE {
            return Err(PuzzleError::WrongRowCount(rows.len()));
        }

        let mut tiles = [0; SIZE * SIZE];
        for (row, line) in rows.iter().enumerate() {
            let tokens: Vec<&str> = line.as_ref().split_whitespace().collect();
            if tokens.len() != SIZE {
                return Err(PuzzleError::WrongRowLength {
                    row,
                    len: tokens.len(),
                });
            }
            for (col, token) in tokens.into_iter().enumerate() {
                tiles[row * SIZE + col] = parse_tile(token)?;
            }
        }

        Self::from_tiles(tiles)
    }

    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.board[row][col]
    }

    pub fn blank(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    pub fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.board
    }

    pub fn apply_move(&mut self, movement: Move) -> bool {
        let (dr, dc) = movement.as_offset();

        let new_row = self.blank_row as isize + dr;
        let new_col = self.blank_col as isize + dc;

        if new_row >= 0 && new_row < SIZE as isize && new_col >= 0 && new_col < SIZE as isize {
            let new_row = new_row as usize;
            let new_col = new_col as usize;

            self.board[self.blank_row][self.blank_col] = self.board[new_row][new_col];
            self.board[new_row][new_col] = 0;

            self.blank_row = new_row;
            self.blank_col = new_col;
            true
        } else {
            false
        }
    }

    pub fn try_move(&self, dir: Move) -> Option<Self> {
        let mut new_puzzle = *self;
        if new_puzzle.apply_move(dir) {
            Some(new_puzzle)
        } else {
            None
        }
    }

    /// States one blank move away, in [`Move::ALL`] order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Puzzle)> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |dir| self.try_move(dir).map(|next| (dir, next)))
    }

    pub fn is_goal(&self) -> bool {
        self.board == GOAL
    }

    /// Replaces the board with a uniformly random solvable arrangement.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut thread_rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut flattened: Vec<u8> = self.board.iter().flatten().copied().collect();

        loop {
            flattened.shuffle(rng);

            for i in 0..SIZE {
                for j in 0..SIZE {
                    self.board[i][j] = flattened[i * SIZE + j];
                    if self.board[i][j] == 0 {
                        self.blank_row = i;
                        self.blank_col = j;
                    }
                }
            }

            if Self::is_solvable_flat(&flattened) {
                break;
            }
        }
    }

    /// Whether the goal is reachable from this arrangement.
    pub fn is_solvable(&self) -> bool {
        let flattened: Vec<u8> = self.board.iter().flatten().copied().collect();
        Self::is_solvable_flat(&flattened)
    }

    // Odd width: solvable iff the inversion count is even.
    fn is_solvable_flat(flattened: &[u8]) -> bool {
        Self::count_inversions(flattened) % 2 == 0
    }

    fn count_inversions(flattened: &[u8]) -> usize {
        flattened
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                flattened[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }
}

fn parse_tile(token: &str) -> Result<u8, PuzzleError> {
    token
        .parse::<u8>()
        .map_err(|_| PuzzleError::InvalidToken(token.to_string()))
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    /// Accepts either three non-empty lines or nine whitespace-separated tiles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.len() == SIZE {
            return Self::from_rows(&lines);
        }

        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != SIZE * SIZE {
            return Err(PuzzleError::WrongTileCount(tokens.len()));
        }
        let mut tiles = [0; SIZE * SIZE];
        for (slot, token) in tiles.iter_mut().zip(tokens) {
            *slot = parse_tile(token)?;
        }
        Self::from_tiles(tiles)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            let cells: Vec<String> = row
                .iter()
                .map(|&val| match val {
                    0 => "b".to_string(),
                    _ => val.to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
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
    fn goal_is_goal() {
        assert!(Puzzle::goal().is_goal());
        assert_eq!(puzzle("1 2 3 4 5 6 7 8 0"), Puzzle::goal());
        assert!(!puzzle("1 2 3 4 5 6 7 0 8").is_goal());
    }

    #[test]
    fn successor_count_follows_blank_position() {
        // corner, edge, center
        assert_eq!(puzzle("0 1 2 3 4 5 6 7 8").successors().count(), 2);
        assert_eq!(puzzle("1 0 2 3 4 5 6 7 8").successors().count(), 3);
        assert_eq!(puzzle("1 2 3 4 0 5 6 7 8").successors().count(), 4);
        assert_eq!(Puzzle::goal().successors().count(), 2);
    }

    #[test]
    fn successors_come_in_fixed_order() {
        let start = puzzle("1 2 3 4 0 6 7 5 8");
        let dirs: Vec<Move> = start.successors().map(|(dir, _)| dir).collect();
        assert_eq!(dirs, Move::ALL);

        let (_, up) = start.successors().next().unwrap();
        assert_eq!(up, puzzle("1 0 3 4 2 6 7 5 8"));

        let goal_dirs: Vec<Move> = Puzzle::goal().successors().map(|(dir, _)| dir).collect();
        assert_eq!(goal_dirs, vec![Move::Up, Move::Left]);
    }

    #[test]
    fn each_successor_is_one_adjacent_swap() {
        let start = puzzle("8 6 7 2 5 4 3 0 1");
        for (dir, next) in start.successors() {
            let differing: Vec<(usize, usize)> = (0..SIZE)
                .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
                .filter(|&(r, c)| start.tile(r, c) != next.tile(r, c))
                .collect();
            assert_eq!(differing.len(), 2, "{dir} should swap exactly two cells");

            let (r0, c0) = start.blank();
            let (r1, c1) = next.blank();
            assert_eq!(r0.abs_diff(r1) + c0.abs_diff(c1), 1);
            assert_eq!(next.tile(r0, c0), start.tile(r1, c1));
            assert_eq!(next.try_move(dir.opposite()), Some(start));
        }
    }

    #[test]
    fn moving_off_the_board_is_rejected() {
        let mut goal = Puzzle::goal();
        assert!(!goal.apply_move(Move::Down));
        assert!(!goal.apply_move(Move::Right));
        assert_eq!(goal, Puzzle::goal());
        assert!(Puzzle::goal().try_move(Move::Right).is_none());
    }

    #[test]
    fn try_move_leaves_original_untouched() {
        let start = Puzzle::goal();
        let moved = start.try_move(Move::Up).unwrap();
        assert_eq!(start, Puzzle::goal());
        assert_eq!(moved.blank(), (1, 2));
    }

    #[test]
    fn parses_rows_and_flat_input() {
        let rows = Puzzle::from_rows(&["1 2 3", "4\t0 6", "7 5 8"]).unwrap();
        assert_eq!(rows, puzzle("1 2 3 4 0 6 7 5 8"));
        assert_eq!(rows, puzzle("1 2 3\n4 0 6\n7 5 8\n"));
        assert_eq!(rows.blank(), (1, 1));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            Puzzle::from_rows(&["1 2 3", "4 5 6"]),
            Err(PuzzleError::WrongRowCount(2))
        );
        assert_eq!(
            Puzzle::from_rows(&["1 2 3", "4 5", "6 7 8 0"]),
            Err(PuzzleError::WrongRowLength { row: 1, len: 2 })
        );
        assert_eq!(
            "1 2 3 4 5 6 7 8".parse::<Puzzle>(),
            Err(PuzzleError::WrongTileCount(8))
        );
        assert_eq!(
            "1 2 3 4 x 6 7 8 0".parse::<Puzzle>(),
            Err(PuzzleError::InvalidToken("x".to_string()))
        );
        assert_eq!(
            "1 2 3 4 9 6 7 8 0".parse::<Puzzle>(),
            Err(PuzzleError::TileOutOfRange(9))
        );
        assert_eq!(
            "1 2 3 4 5 6 7 1 0".parse::<Puzzle>(),
            Err(PuzzleError::DuplicateTile(1))
        );
        assert_eq!(
            "1 2 3 4 5 6 7 8 8".parse::<Puzzle>(),
            Err(PuzzleError::DuplicateTile(8))
        );
    }

    #[test]
    fn solvability_follows_inversion_parity() {
        assert!(Puzzle::goal().is_solvable());
        assert!(puzzle("1 2 3 4 0 6 7 5 8").is_solvable());
        assert!(!puzzle("2 1 3 4 5 6 7 8 0").is_solvable());
    }

    #[test]
    fn shuffle_produces_solvable_states() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut puzzle = Puzzle::goal();
        for _ in 0..50 {
            puzzle.shuffle_with(&mut rng);
            assert!(puzzle.is_solvable());
            let (r, c) = puzzle.blank();
            assert_eq!(puzzle.tile(r, c), 0);
        }
    }

    #[test]
    fn display_marks_the_blank() {
        assert_eq!(Puzzle::goal().to_string(), "1 2 3\n4 5 6\n7 8 b\n");
    }
}
