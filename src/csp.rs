//! Backtracking repair that keeps as much of the caller's placement as it can.
//!
//! Columns are filled left to right. Each column first tries the row the caller
//! put there; only if that row is unsafe, out of range, or leads to a dead end
//! are the other rows tried, in ascending order. An exhausted column is marked
//! with [`EMPTY`] and recorded before the search backs up.

use crate::board::{Board, EMPTY};
use crate::trace::Trace;
use std::time::{Duration, Instant};

/// Result of [`solve`].
#[derive(Debug, Clone)]
pub struct CspOutcome {
    pub success: bool,
    pub iterations: u64,
    pub elapsed: Duration,
    pub trace: Trace,
    /// The completed board, present only when `success` is true.
    pub board: Option<Board>,
}

struct Search {
    n: usize,
    iterations: u64,
    trace: Trace,
}

impl Search {
    fn place(&mut self, board: &mut Board, col: usize) -> bool {
        if col >= self.n {
            return true;
        }
        self.iterations += 1;
        self.trace.record(board);

        let user_row = board.get(col);
        if (0..self.n as i32).contains(&user_row)
            && board.is_safe(user_row, col)
            && self.place(board, col + 1)
        {
            return true;
        }

        for row in 0..self.n as i32 {
            if row == user_row {
                continue;
            }
            board.set(col, row);
            if board.is_safe(row, col) && self.place(board, col + 1) {
                return true;
            }
        }

        board.set(col, EMPTY);
        self.trace.record(board);
        false
    }
}

/// Runs the backtracking repair on a copy of `initial`.
///
/// Values of `initial` outside `0..n` are treated as "no preference" for that
/// column. The input itself is never modified.
pub fn solve(initial: &Board) -> CspOutcome {
    let mut board = initial.clone();
    let mut search = Search {
        n: board.len(),
        iterations: 0,
        trace: Trace::new(),
    };

    log::debug!("csp: starting from {}", board);
    let start = Instant::now();
    let success = search.place(&mut board, 0);
    let elapsed = start.elapsed();
    log::debug!(
        "csp: success={} after {} iterations in {:?}",
        success,
        search.iterations,
        elapsed
    );

    CspOutcome {
        success,
        iterations: search.iterations,
        elapsed,
        trace: search.trace,
        board: success.then_some(board),
    }
}
