//! Runs the configured solvers on one board and writes their traces.

use crate::astar::{self, SearchOutcome};
use crate::board::Board;
use crate::config::RunConfig;
use crate::csp;
use crate::error::Result;
use crate::report::RunReport;
use crate::trace::Trace;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Runs the heuristic search, giving up after `limit`.
///
/// The search has no way to stop early, so on timeout its worker thread is
/// left to finish on its own and the result is dropped.
pub fn astar_with_timeout(initial: &Board, limit: Duration) -> Option<SearchOutcome> {
    let (tx, rx) = mpsc::channel();
    let board = initial.clone();
    thread::spawn(move || {
        let _ = tx.send(astar::solve(&board));
    });
    match rx.recv_timeout(limit) {
        Ok(outcome) => Some(outcome),
        Err(_) => {
            log::warn!("astar: no result within {:?}, discarding", limit);
            None
        }
    }
}

fn save_trace(dir: &Path, name: &str, n: usize, trace: &Trace) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    trace.save_csv(dir.join(format!("{}_trace_{}.csv", name, n)))
}

/// Solves `initial` with the solvers selected in `config`.
///
/// `initial` is expected to be validated already.
pub fn run(config: &RunConfig, initial: Board) -> Result<RunReport> {
    let n = initial.len();
    let mut report = RunReport::new(initial.clone());

    if config.solver.runs_csp() {
        let outcome = csp::solve(&initial);
        log::info!(
            "csp finished: success={} iterations={} steps={}",
            outcome.success,
            outcome.iterations,
            outcome.trace.len()
        );
        if let Some(dir) = &config.trace_dir {
            save_trace(dir, "csp", n, &outcome.trace)?;
        }
        report = report.with_csp(&outcome);
    }

    if config.solver.runs_astar() {
        let outcome = match config.astar_timeout() {
            Some(limit) => astar_with_timeout(&initial, limit),
            None => Some(astar::solve(&initial)),
        };
        match outcome {
            Some(outcome) => {
                log::info!(
                    "astar finished: success={} iterations={} steps={}",
                    outcome.success,
                    outcome.iterations,
                    outcome.trace.len()
                );
                if let Some(dir) = &config.trace_dir {
                    save_trace(dir, "astar", n, &outcome.trace)?;
                }
                report = report.with_astar(&outcome);
            }
            None => {
                if let Some(limit) = config.astar_timeout() {
                    report = report.with_astar_timeout(limit);
                }
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverChoice;
    use crate::report::AstarStatus;

    #[test]
    fn test_run_both_solvers() {
        let report = run(&RunConfig::new(), Board::new(vec![0, 0, 0, 0])).unwrap();
        assert_eq!(report.n, 4);
        assert!(report.csp.unwrap().success);
        match report.astar {
            Some(AstarStatus::Finished(astar)) => assert!(astar.success),
            other => panic!("unexpected astar status: {:?}", other),
        }
    }

    #[test]
    fn test_run_single_solver() {
        let config = RunConfig::new().with_solver(SolverChoice::Csp);
        let report = run(&config, Board::new(vec![1, 3, 0, 2])).unwrap();
        assert_eq!(report.csp.unwrap().steps, 4);
        assert!(report.astar.is_none());
    }

    #[test]
    fn test_run_writes_traces() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new().with_trace_dir(dir.path().join("traces"));
        run(&config, Board::new(vec![1, 3, 0, 2])).unwrap();

        let csp = std::fs::read_to_string(dir.path().join("traces/csp_trace_4.csv")).unwrap();
        assert_eq!(csp.lines().count(), 5);
        let astar = std::fs::read_to_string(dir.path().join("traces/astar_trace_4.csv")).unwrap();
        assert_eq!(astar.lines().count(), 2);
    }

    #[test]
    fn test_astar_with_generous_timeout() {
        let outcome = astar_with_timeout(&Board::new(vec![0, 0, 0, 0]), Duration::from_secs(30));
        assert!(outcome.unwrap().success);
    }
}
