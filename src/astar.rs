//! Best-first search over complete boards, guided by the number of attacking pairs.
//!
//! Every state in the frontier is a complete board. Expanding a state pushes
//! all of its single-queen moves, so the branching factor is `n * (n - 1)` and
//! the search only stays tractable for small boards.

use crate::board::Board;
use crate::trace::Trace;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::{Duration, Instant};

/// Added to the elapsed seconds before dividing, so near-instant solves stay finite.
pub const EFFICIENCY_EPSILON: f64 = 1e-9;

/// Result of [`solve`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub success: bool,
    pub iterations: u64,
    pub elapsed: Duration,
    pub trace: Trace,
    /// Iterations per second.
    pub efficiency: f64,
    pub solution: Option<Board>,
}

/// Frontier entry. Field order is the priority order: `f`, then `g`, then the
/// board compared element by element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Node {
    f: usize,
    g: usize,
    state: Board,
}

impl Node {
    fn new(g: usize, state: Board) -> Self {
        Self {
            f: g + state.conflicts(),
            g,
            state,
        }
    }
}

/// Searches for a conflict-free board reachable from `initial` by moving one
/// queen at a time.
///
/// `initial` should hold a row in `0..n` for every column; this is not checked.
pub fn solve(initial: &Board) -> SearchOutcome {
    let mut frontier = BinaryHeap::new();
    let mut visited: HashSet<Board> = HashSet::new();
    let mut trace = Trace::new();
    let mut iterations = 0u64;

    log::debug!("astar: starting from {}", initial);
    frontier.push(Reverse(Node::new(0, initial.clone())));

    let start = Instant::now();
    let mut solution = None;
    while let Some(Reverse(Node { g, state, .. })) = frontier.pop() {
        iterations += 1;
        trace.record(&state);

        if state.conflicts() == 0 {
            solution = Some(state);
            break;
        }

        // a board can sit in the frontier several times; only expansion marks it
        let children = state.neighbors();
        visited.insert(state);
        for child in children {
            if !visited.contains(&child) {
                frontier.push(Reverse(Node::new(g + 1, child)));
            }
        }
    }
    let elapsed = start.elapsed();
    let efficiency = iterations as f64 / (elapsed.as_secs_f64() + EFFICIENCY_EPSILON);

    let success = solution.is_some();
    log::debug!(
        "astar: success={} after {} iterations in {:?} ({:.2} it/s, {} visited, {} queued)",
        success,
        iterations,
        elapsed,
        efficiency,
        visited.len(),
        frontier.len()
    );

    SearchOutcome {
        success,
        iterations,
        elapsed,
        trace,
        efficiency,
        solution,
    }
}
