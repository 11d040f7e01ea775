//! Results panel for a run of one or both solvers.

use crate::astar::SearchOutcome;
use crate::board::Board;
use crate::csp::CspOutcome;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolverReport {
    pub success: bool,
    pub iterations: u64,
    pub time_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
    pub solution: Option<Board>,
    pub steps: usize,
}

impl From<&CspOutcome> for SolverReport {
    fn from(outcome: &CspOutcome) -> Self {
        Self {
            success: outcome.success,
            iterations: outcome.iterations,
            time_secs: outcome.elapsed.as_secs_f64(),
            efficiency: None,
            solution: outcome.board.clone(),
            steps: outcome.trace.len(),
        }
    }
}

impl From<&SearchOutcome> for SolverReport {
    fn from(outcome: &SearchOutcome) -> Self {
        Self {
            success: outcome.success,
            iterations: outcome.iterations,
            time_secs: outcome.elapsed.as_secs_f64(),
            efficiency: Some(outcome.efficiency),
            solution: outcome.solution.clone(),
            steps: outcome.trace.len(),
        }
    }
}

/// What happened to the heuristic search in a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AstarStatus {
    Finished(SolverReport),
    TimedOut { limit_ms: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub n: usize,
    pub initial: Board,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csp: Option<SolverReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub astar: Option<AstarStatus>,
}

impl RunReport {
    pub fn new(initial: Board) -> Self {
        Self {
            n: initial.len(),
            initial,
            csp: None,
            astar: None,
        }
    }

    pub fn with_csp(mut self, outcome: &CspOutcome) -> Self {
        self.csp = Some(outcome.into());
        self
    }

    pub fn with_astar(mut self, outcome: &SearchOutcome) -> Self {
        self.astar = Some(AstarStatus::Finished(outcome.into()));
        self
    }

    pub fn with_astar_timeout(mut self, limit: Duration) -> Self {
        self.astar = Some(AstarStatus::TimedOut {
            limit_ms: limit.as_millis() as u64,
        });
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn write_solution(f: &mut fmt::Formatter<'_>, solution: &Option<Board>) -> fmt::Result {
    match solution {
        Some(board) => writeln!(f, "Solution: {}", board),
        None => writeln!(f, "Solution: None"),
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(csp) = &self.csp {
            writeln!(f, "==== CSP Results ====")?;
            writeln!(f, "Success: {}", csp.success)?;
            writeln!(f, "Iterations: {}", csp.iterations)?;
            writeln!(f, "Time: {:.5} s", csp.time_secs)?;
            write_solution(f, &csp.solution)?;
            writeln!(f)?;
        }
        match &self.astar {
            Some(AstarStatus::Finished(astar)) => {
                writeln!(f, "==== A* Results ====")?;
                writeln!(f, "Success: {}", astar.success)?;
                writeln!(f, "Iterations: {}", astar.iterations)?;
                writeln!(f, "Time: {:.5} s", astar.time_secs)?;
                writeln!(f, "Efficiency: {:.2}", astar.efficiency.unwrap_or_default())?;
                write_solution(f, &astar.solution)?;
                writeln!(f)?;
            }
            Some(AstarStatus::TimedOut { limit_ms }) => {
                writeln!(f, "==== A* Results ====")?;
                writeln!(f, "Timed out after {} ms", limit_ms)?;
                writeln!(f)?;
            }
            None => {}
        }
        Ok(())
    }
}
