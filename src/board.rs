use serde::{Deserialize, Serialize};
use std::fmt;

/// Row value of a column whose placement was abandoned.
pub const EMPTY: i32 = -1;

/// One row index per column. Values are not range-checked: callers may hand in
/// anything, and a column may hold [`EMPTY`] while backtracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<i32>,
}

impl Board {
    pub fn new(rows: Vec<i32>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[i32] {
        &self.rows
    }

    pub fn get(&self, col: usize) -> i32 {
        self.rows[col]
    }

    pub fn set(&mut self, col: usize, row: i32) {
        self.rows[col] = row;
    }

    /// True when every column holds a row in `[0, n)`.
    pub fn is_complete(&self) -> bool {
        let n = self.rows.len() as i64;
        self.rows.iter().all(|&r| (0..n).contains(&(r as i64)))
    }

    /// Number of attacking queen pairs (shared row or shared diagonal).
    pub fn conflicts(&self) -> usize {
        let n = self.rows.len();
        let mut conflicts = 0;
        for i in 0..n {
            for j in i + 1..n {
                let (a, b) = (self.rows[i] as i64, self.rows[j] as i64);
                if a == b || (a - b).abs() == (j - i) as i64 {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }

    /// Whether a queen at `(row, col)` is attacked by any of the columns left of `col`.
    /// Columns at or right of `col` are ignored.
    pub fn is_safe(&self, row: i32, col: usize) -> bool {
        let row = row as i64;
        for (c, &r) in self.rows[..col].iter().enumerate() {
            let r = r as i64;
            if r == row || (r - row).abs() == (col - c) as i64 {
                return false;
            }
        }
        true
    }

    /// Every board obtained by moving exactly one queen to another row of its column.
    pub fn neighbors(&self) -> Vec<Board> {
        let n = self.rows.len();
        let mut neighbors = Vec::with_capacity(n * n.saturating_sub(1));
        for col in 0..n {
            for row in 0..n as i32 {
                if row != self.rows[col] {
                    let mut next = self.clone();
                    next.rows[col] = row;
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }

    /// The eight images of the board under rotation and reflection. Only
    /// meaningful when every queen sits on its own row.
    pub fn variants(&self) -> Vec<Board> {
        let n = self.rows.len() as i32;
        let coords: Vec<(i32, i32)> = self
            .rows
            .iter()
            .enumerate()
            .map(|(x, &y)| (x as i32, y))
            .collect();

        let to_board = |pts: &[(i32, i32)]| -> Board {
            let mut rows = vec![EMPTY; n as usize];
            for &(x, y) in pts.iter().filter(|(x, _)| (0..n).contains(x)) {
                rows[x as usize] = y;
            }
            Board::new(rows)
        };

        let mut variants = Vec::with_capacity(8);
        let mut curr = coords;
        for _ in 0..4 {
            variants.push(to_board(&curr));
            let flipped: Vec<(i32, i32)> = curr.iter().map(|&(x, y)| (n - 1 - x, y)).collect();
            variants.push(to_board(&flipped));

            // rotate 90
            curr = curr.iter().map(|&(x, y)| (y, n - 1 - x)).collect();
        }
        variants
    }

    /// Algebraic placement list such as `a2, b4, c1, d3`. Columns without a
    /// queen on the board are skipped.
    pub fn notation(&self) -> String {
        let n = self.rows.len() as i32;
        let mut parts = Vec::new();
        for (c, &r) in self.rows.iter().enumerate() {
            if (0..n).contains(&r) {
                let file = (b'a' + (c % 26) as u8) as char;
                parts.push(format!("{}{}", file, r + 1));
            }
        }
        parts.join(", ")
    }

    /// Space-separated rows, the same format the CLI accepts.
    pub fn to_positions(&self) -> String {
        self.rows
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Vec<i32>> for Board {
    fn from(rows: Vec<i32>) -> Self {
        Self::new(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicts_of_known_solution_is_zero() {
        assert_eq!(Board::new(vec![1, 3, 0, 2]).conflicts(), 0);
        assert_eq!(Board::new(vec![2, 0, 3, 1]).conflicts(), 0);
    }

    #[test]
    fn test_conflicts_all_same_row() {
        // every pair shares row 0
        assert_eq!(Board::new(vec![0, 0, 0, 0]).conflicts(), 6);
    }

    #[test]
    fn test_conflicts_main_diagonal() {
        assert_eq!(Board::new(vec![0, 1, 2, 3]).conflicts(), 6);
        assert_eq!(Board::new(vec![0, 2]).conflicts(), 0);
    }

    #[test]
    fn test_conflicts_tolerates_extreme_values() {
        let board = Board::new(vec![i32::MIN, i32::MAX]);
        assert_eq!(board.conflicts(), 0);
    }

    #[test]
    fn test_is_safe_only_looks_left() {
        let board = Board::new(vec![1, EMPTY, 0, 0]);
        assert!(board.is_safe(3, 1));
        assert!(!board.is_safe(1, 1));
        assert!(!board.is_safe(0, 1));
        assert!(!board.is_safe(2, 1));
        // column 0 never has anything to its left
        assert!(Board::new(vec![0, 0]).is_safe(0, 0));
    }

    #[test]
    fn test_neighbors_of_small_board() {
        let board = Board::new(vec![0, 1]);
        let neighbors = board.neighbors();
        assert_eq!(
            neighbors,
            vec![Board::new(vec![1, 1]), Board::new(vec![0, 0])]
        );
    }

    #[test]
    fn test_neighbors_of_single_column_is_empty() {
        assert!(Board::new(vec![0]).neighbors().is_empty());
    }

    #[test]
    fn test_variants_keep_solutions_valid() {
        let board = Board::new(vec![1, 3, 0, 2]);
        let variants = board.variants();
        assert_eq!(variants.len(), 8);
        assert!(variants.contains(&Board::new(vec![2, 0, 3, 1])));
        for v in variants {
            assert!(v.is_complete());
            assert_eq!(v.conflicts(), 0);
        }
    }

    #[test]
    fn test_notation_skips_empty_columns() {
        assert_eq!(Board::new(vec![1, 3, 0, 2]).notation(), "a2, b4, c1, d3");
        assert_eq!(Board::new(vec![1, EMPTY, 0]).notation(), "a2, c1");
    }

    #[test]
    fn test_ordering_is_elementwise() {
        assert!(Board::new(vec![0, 3, 3]) < Board::new(vec![1, 0, 0]));
        assert!(Board::new(vec![1, 0, 2]) < Board::new(vec![1, 1, 0]));
    }

    #[test]
    fn test_display_and_positions() {
        let board = Board::new(vec![1, 3, 0, EMPTY]);
        assert_eq!(board.to_string(), "[1, 3, 0, -1]");
        assert_eq!(board.to_positions(), "1 3 0 -1");
    }
}
