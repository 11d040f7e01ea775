//! Reading and checking the initial placement before it reaches a solver.

use crate::board::Board;
use crate::error::InputError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parses space-separated, 0-based row indices, one per column.
pub fn parse_positions(s: &str) -> Result<Board, InputError> {
    s.split_whitespace()
        .map(|tok| {
            tok.parse::<i32>()
                .map_err(|_| InputError::Parse(tok.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Board::new)
}

pub fn parse_size(s: &str) -> Result<usize, InputError> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| InputError::Parse(s.trim().to_owned()))
}

/// Checks that `n` lies in `min..=max`.
pub fn check_size(n: usize, min: usize, max: usize) -> Result<(), InputError> {
    if n < min || n > max {
        return Err(InputError::SizeOutOfRange { n, min, max });
    }
    Ok(())
}

/// Checks that `board` has one row in `0..n` for each of the `n` columns.
pub fn check_board(board: &Board, n: usize) -> Result<(), InputError> {
    if board.len() != n {
        return Err(InputError::LengthMismatch {
            expected: n,
            actual: board.len(),
        });
    }
    for (col, &row) in board.rows().iter().enumerate() {
        if row < 0 || row as usize >= n {
            return Err(InputError::RowOutOfRange { col, row, n });
        }
    }
    Ok(())
}

/// A board with a uniformly random row in every column.
pub fn random_board(n: usize, seed: Option<u64>) -> Board {
    let rows = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            random_rows(&mut rng, n)
        }
        None => random_rows(&mut rand::thread_rng(), n),
    };
    Board::new(rows)
}

fn random_rows<R: Rng>(rng: &mut R, n: usize) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(0..n as i32)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positions() {
        assert_eq!(
            parse_positions(" 1 3  0 2 ").unwrap(),
            Board::new(vec![1, 3, 0, 2])
        );
        assert_eq!(parse_positions("").unwrap(), Board::new(Vec::new()));
        assert_eq!(
            parse_positions("1 x 2"),
            Err(InputError::Parse("x".to_owned()))
        );
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size(" 8 "), Ok(8));
        assert_eq!(parse_size("-3"), Err(InputError::Parse("-3".to_owned())));
    }

    #[test]
    fn test_check_size() {
        assert!(check_size(4, 4, 12).is_ok());
        assert!(check_size(12, 4, 12).is_ok());
        assert_eq!(
            check_size(3, 4, 12),
            Err(InputError::SizeOutOfRange {
                n: 3,
                min: 4,
                max: 12
            })
        );
        assert!(check_size(13, 4, 12).is_err());
    }

    #[test]
    fn test_check_board() {
        assert!(check_board(&Board::new(vec![1, 3, 0, 2]), 4).is_ok());
        assert_eq!(
            check_board(&Board::new(vec![1, 3, 0]), 4),
            Err(InputError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            check_board(&Board::new(vec![1, 4, 0, 2]), 4),
            Err(InputError::RowOutOfRange {
                col: 1,
                row: 4,
                n: 4
            })
        );
        assert!(check_board(&Board::new(vec![-1, 0, 0, 0]), 4).is_err());
    }

    #[test]
    fn test_random_board_is_in_range_and_seeded() {
        let a = random_board(8, Some(7));
        let b = random_board(8, Some(7));
        assert_eq!(a, b);
        assert!(check_board(&a, 8).is_ok());
        assert!(check_board(&random_board(5, None), 5).is_ok());
    }
}
