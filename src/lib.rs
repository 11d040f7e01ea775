//! Repairing an N-Queens placement from a user-supplied starting point.
//!
//! Two independent solvers take the same initial board:
//!
//! * [`csp::solve`] fills columns left to right, keeping the caller's row for a
//!   column whenever it can still lead to a full solution;
//! * [`astar::solve`] runs a best-first search over complete boards, ordered by
//!   path length plus the number of attacking pairs.
//!
//! Both return a [`Trace`] of every board they visited so the search can be
//! replayed by a viewer.
//!
//! ```
//! use nqueens_repair::{astar, csp, Board};
//!
//! let initial = Board::new(vec![0, 0, 0, 0]);
//!
//! let repaired = csp::solve(&initial);
//! assert!(repaired.success);
//! assert_eq!(repaired.board.unwrap().conflicts(), 0);
//!
//! let searched = astar::solve(&initial);
//! assert_eq!(searched.trace.first(), Some(&initial));
//! ```

pub mod astar;
pub mod board;
pub mod config;
pub mod csp;
pub mod error;
pub mod input;
pub mod report;
pub mod run;
pub mod trace;

pub use board::{Board, EMPTY};
pub use error::{Error, Result};
pub use trace::Trace;
