//! Puzzle board representation and basic operations

use std::{fmt, str::FromStr};

use rand::{prelude::IndexedRandom, rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Smallest supported grid dimension.
pub const MIN_DIMENSION: usize = 2;

/// Largest supported grid dimension; keeps every tile value within `u16`.
pub const MAX_DIMENSION: usize = 255;

/// A direction the blank can slide in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order move generation uses them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction that undoes this one
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Direction {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "U" | "UP" => Ok(Direction::Up),
            "D" | "DOWN" => Ok(Direction::Down),
            "L" | "LEFT" => Ok(Direction::Left),
            "R" | "RIGHT" => Ok(Direction::Right),
            _ => Err(crate::Error::ParseDirection {
                input: s.to_string(),
            }),
        }
    }
}

/// Immutable n×n sliding-tile board.
///
/// `tiles` holds the row-major flattening with 0 as the blank; `zero` caches
/// the blank's index so move generation stays O(1) per direction. Every
/// transformation returns a new board, so a `Board` can safely serve as a
/// `HashMap`/`HashSet` key: two boards are equal exactly when their dimension
/// and tile sequence are equal (`zero` is determined by `tiles`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    n: usize,
    tiles: Vec<u16>,
    zero: usize,
}

impl Board {
    /// The solved n×n board `(1, 2, …, n²−1, 0)`.
    ///
    /// # Errors
    ///
    /// Returns error if `n` is outside [`MIN_DIMENSION`]..=[`MAX_DIMENSION`].
    pub fn goal(n: usize) -> crate::Result<Self> {
        Self::check_dimension(n)?;
        let size = n * n;
        let mut tiles: Vec<u16> = (1..size as u16).collect();
        tiles.push(0);
        Ok(Board {
            n,
            tiles,
            zero: size - 1,
        })
    }

    /// Build a board from a row-major flat sequence of length n².
    ///
    /// # Errors
    ///
    /// Returns error if the dimension is out of range, the sequence has the
    /// wrong length, or it is not exactly a permutation of `0..n²`.
    pub fn from_flat(n: usize, flat: &[u16]) -> crate::Result<Self> {
        Self::check_dimension(n)?;
        let size = n * n;
        if flat.len() != size {
            return Err(crate::Error::InvalidBoardLength {
                expected: size,
                got: flat.len(),
            });
        }

        let mut seen = vec![false; size];
        for &tile in flat {
            let tile = tile as usize;
            if tile >= size || seen[tile] {
                return Err(crate::Error::InvalidBoardTiles { n });
            }
            seen[tile] = true;
        }

        let zero = flat
            .iter()
            .position(|&tile| tile == 0)
            .ok_or(crate::Error::InvalidBoardTiles { n })?;

        Ok(Board {
            n,
            tiles: flat.to_vec(),
            zero,
        })
    }

    /// Build a board from a square list of rows. The dimension is the row
    /// count; ragged rows are rejected before the flat validation runs.
    ///
    /// # Errors
    ///
    /// Returns error on ragged rows or any condition [`Board::from_flat`]
    /// rejects.
    pub fn from_rows(rows: &[Vec<u16>]) -> crate::Result<Self> {
        let n = rows.len();
        Self::check_dimension(n)?;
        let mut flat = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(crate::Error::RaggedRow {
                    row,
                    expected: n,
                    got: values.len(),
                });
            }
            flat.extend_from_slice(values);
        }
        Self::from_flat(n, &flat)
    }

    fn check_dimension(n: usize) -> crate::Result<()> {
        if (MIN_DIMENSION..=MAX_DIMENSION).contains(&n) {
            Ok(())
        } else {
            Err(crate::Error::InvalidDimension { n })
        }
    }

    /// Grid dimension
    pub fn n(&self) -> usize {
        self.n
    }

    /// Row-major tile values with 0 as the blank
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Index of the blank within the tile sequence
    pub fn zero(&self) -> usize {
        self.zero
    }

    /// True if this board is the solved state
    pub fn is_goal(&self) -> bool {
        let size = self.n * self.n;
        self.tiles[size - 1] == 0
            && self.tiles[..size - 1]
                .iter()
                .enumerate()
                .all(|(i, &tile)| tile as usize == i + 1)
    }

    /// Whether the goal state is reachable from this position.
    ///
    /// Uses the inversion parity of the tile sequence with the blank removed:
    /// for odd n the position is solvable iff the inversion count is even;
    /// for even n it is solvable iff inversions plus the blank's row counted
    /// 1-based from the bottom edge is odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.n % 2 == 1 {
            inversions % 2 == 0
        } else {
            let row_from_bottom = self.n - self.zero / self.n;
            (inversions + row_from_bottom) % 2 == 1
        }
    }

    /// Pairs of non-blank tiles whose order is reversed relative to the goal.
    fn inversions(&self) -> usize {
        let tiles: Vec<u16> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        let mut count = 0;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[j] < tiles[i] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Blank-index offset for a move in `direction`, or None at the grid edge.
    fn blank_offset(&self, direction: Direction) -> Option<isize> {
        let n = self.n;
        let (row, col) = (self.zero / n, self.zero % n);
        match direction {
            Direction::Up if row > 0 => Some(-(n as isize)),
            Direction::Down if row < n - 1 => Some(n as isize),
            Direction::Left if col > 0 => Some(-1),
            Direction::Right if col < n - 1 => Some(1),
            _ => None,
        }
    }

    fn with_blank_at(&self, new_zero: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.zero, new_zero);
        Board {
            n: self.n,
            tiles,
            zero: new_zero,
        }
    }

    /// Legal successor boards, lazily, in the fixed order Up, Down, Left,
    /// Right. Each successor differs from this board by exactly one
    /// blank/tile transposition; the board itself is never modified.
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors {
            board: self,
            next_direction: 0,
        }
    }

    /// Slide the blank one step in `direction`.
    ///
    /// # Errors
    ///
    /// Returns error if the move would leave the grid.
    #[must_use = "slide returns a new board; the original is unchanged"]
    pub fn slide(&self, direction: Direction) -> crate::Result<Board> {
        let offset = self
            .blank_offset(direction)
            .ok_or(crate::Error::IllegalMove {
                direction,
                zero_row: self.zero / self.n,
                zero_col: self.zero % self.n,
            })?;
        Ok(self.with_blank_at((self.zero as isize + offset) as usize))
    }

    /// Walk `moves` random legal blank moves from a seeded generator.
    ///
    /// Same seed, same result. Solvability is invariant under legal moves, so
    /// the walk ends exactly as solvable as it started.
    #[must_use = "randomize returns a new board; the original is unchanged"]
    pub fn randomize(&self, moves: usize, seed: u64) -> Board {
        let mut rng = StdRng::seed_from_u64(seed);
        self.randomize_with(moves, &mut rng)
    }

    /// [`Board::randomize`] with a caller-supplied generator.
    ///
    /// Refuses to undo the move just made whenever another choice exists, so
    /// short shuffles do not collapse into two-cycles.
    #[must_use = "randomize_with returns a new board; the original is unchanged"]
    pub fn randomize_with(&self, moves: usize, rng: &mut impl Rng) -> Board {
        let mut board = self.clone();
        let mut previous: Option<Vec<u16>> = None;
        for _ in 0..moves {
            let mut children: Vec<Board> = board.neighbors().collect();
            if let Some(prev) = &previous {
                if children.len() > 1 {
                    children.retain(|child| child.tiles != *prev);
                }
            }
            previous = Some(board.tiles.clone());
            if let Some(next) = children.choose(rng) {
                board = next.clone();
            }
        }
        board
    }
}

impl fmt::Display for Board {
    /// ASCII grid, width-2 cells, blank shown as ` X`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.tiles.chunks(self.n).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &tile) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if tile == 0 {
                    write!(f, " X")?;
                } else {
                    write!(f, "{tile:2}")?;
                }
            }
        }
        Ok(())
    }
}

/// Lazy iterator over the legal successors of a [`Board`].
///
/// Restartable by calling [`Board::neighbors`] again; yields 2 (corner),
/// 3 (edge), or 4 (interior) boards.
#[derive(Clone)]
pub struct Neighbors<'a> {
    board: &'a Board,
    next_direction: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        while self.next_direction < Direction::ALL.len() {
            let direction = Direction::ALL[self.next_direction];
            self.next_direction += 1;
            if let Some(offset) = self.board.blank_offset(direction) {
                let new_zero = (self.board.zero as isize + offset) as usize;
                return Some(self.board.with_blank_at(new_zero));
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Neighbors<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_board() {
        let board = Board::goal(3).unwrap();
        assert_eq!(board.n(), 3);
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(board.zero(), 8);
        assert!(board.is_goal());
    }

    #[test]
    fn test_goal_rejects_bad_dimension() {
        assert!(Board::goal(0).is_err());
        assert!(Board::goal(1).is_err());
        assert!(Board::goal(256).is_err());
        assert!(Board::goal(2).is_ok());
    }

    #[test]
    fn test_from_flat_validates_length_and_contents() {
        // too short
        let result = Board::from_flat(3, &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(result.is_err());

        // duplicate blank
        let result = Board::from_flat(3, &[0, 0, 1, 2, 3, 4, 5, 6, 7]);
        assert!(result.is_err());

        // value out of range
        let result = Board::from_flat(3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(result.is_err());

        let board = Board::from_flat(3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("row 2"));
    }

    #[test]
    fn test_from_rows_builds_board() {
        let board = Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]).unwrap();
        assert_eq!(board.n(), 3);
        assert_eq!(board.zero(), 8);
        assert!(board.is_goal());
    }

    #[test]
    fn test_neighbors_corner_degree_and_immutability() {
        let board = Board::goal(3).unwrap();
        let children: Vec<Board> = board.neighbors().collect();
        assert_eq!(children.len(), 2);
        // the parent is untouched
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    }

    #[test]
    fn test_neighbors_order_is_up_down_left_right() {
        // blank in the center: all four directions, fixed order
        let board = Board::from_flat(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        let zeros: Vec<usize> = board.neighbors().map(|child| child.zero()).collect();
        assert_eq!(zeros, vec![1, 7, 3, 5]);
    }

    #[test]
    fn test_neighbors_are_single_transpositions() {
        let board = Board::goal(3).unwrap();
        for child in board.neighbors() {
            let diffs: Vec<usize> = (0..9)
                .filter(|&i| board.tiles()[i] != child.tiles()[i])
                .collect();
            assert_eq!(diffs.len(), 2);
            assert_eq!(board.tiles()[diffs[0]], child.tiles()[diffs[1]]);
            assert_eq!(board.tiles()[diffs[1]], child.tiles()[diffs[0]]);
        }
    }

    #[test]
    fn test_slide_and_illegal_move() {
        let board = Board::goal(3).unwrap();
        // blank is bottom-right: Down and Right leave the grid
        assert!(board.slide(Direction::Down).is_err());
        assert!(board.slide(Direction::Right).is_err());

        let up = board.slide(Direction::Up).unwrap();
        assert_eq!(up.zero(), 5);
        let back = up.slide(Direction::Up.opposite()).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("u".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("DOWN".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!(" l ".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("R".parse::<Direction>().unwrap(), Direction::Right);
        assert!("x".parse::<Direction>().is_err());
    }

    #[test]
    fn test_solvability_3x3() {
        let solvable = Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]).unwrap();
        assert!(solvable.is_solvable());

        // one adjacent tile swap flips the parity
        let unsolvable = Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]).unwrap();
        assert!(!unsolvable.is_solvable());
    }

    #[test]
    fn test_solvability_4x4() {
        let goal = Board::goal(4).unwrap();
        assert!(goal.is_solvable());

        let swapped = Board::from_flat(
            4,
            &[2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0],
        )
        .unwrap();
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn test_randomize_is_deterministic_and_solvable() {
        let goal = Board::goal(3).unwrap();
        let a = goal.randomize(25, 123);
        let b = goal.randomize(25, 123);
        let c = goal.randomize(25, 124);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.is_solvable() && c.is_solvable());
    }

    #[test]
    fn test_randomize_avoids_immediate_undo() {
        // a single-step shuffle never lands back on the start
        let goal = Board::goal(3).unwrap();
        for seed in 0..20 {
            let shuffled = goal.randomize(2, seed);
            assert_ne!(shuffled, goal, "seed {seed} undid its first move");
        }
    }

    #[test]
    fn test_display_blank_rendering() {
        let board = Board::goal(3).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().last().unwrap().ends_with(" X"));
    }
}
