//! Run configuration for the `nqueens` front end.
//!
//! Every key is optional; a missing file section falls back to the defaults
//! used by the interactive form: boards from 4 to 12 columns, both solvers,
//! no time limit.
//!
//! ```
//! use nqueens_repair::config::{RunConfig, SolverChoice};
//! use std::time::Duration;
//!
//! let config = RunConfig::from_toml_str(r#"
//!     max_size = 8
//!     solver = "astar"
//!     astar_timeout_ms = 250
//! "#).unwrap();
//!
//! assert_eq!(config.min_size, 4);
//! assert_eq!(config.solver, SolverChoice::Astar);
//! assert_eq!(config.astar_timeout(), Some(Duration::from_millis(250)));
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Which solvers a run invokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverChoice {
    Csp,
    Astar,
    #[default]
    Both,
}

impl SolverChoice {
    pub fn runs_csp(self) -> bool {
        matches!(self, SolverChoice::Csp | SolverChoice::Both)
    }

    pub fn runs_astar(self) -> bool {
        matches!(self, SolverChoice::Astar | SolverChoice::Both)
    }
}

impl std::str::FromStr for SolverChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csp" => Ok(SolverChoice::Csp),
            "astar" => Ok(SolverChoice::Astar),
            "both" => Ok(SolverChoice::Both),
            other => Err(ConfigError::Invalid(format!("unknown solver {other:?}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Smallest accepted board size.
    pub min_size: usize,
    /// Largest accepted board size.
    pub max_size: usize,
    pub solver: SolverChoice,
    /// Wall-clock limit for the heuristic search, in milliseconds.
    pub astar_timeout_ms: Option<u64>,
    /// Directory that receives one CSV trace per solver.
    pub trace_dir: Option<PathBuf>,
    /// Print the report as JSON instead of text.
    pub json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            min_size: 4,
            max_size: 12,
            solver: SolverChoice::Both,
            astar_timeout_ms: None,
            trace_dir: None,
            json: false,
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, is not valid TOML, or sets
    /// `min_size` above `max_size`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size == 0 {
            return Err(ConfigError::Invalid("min_size must be at least 1".into()));
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::Invalid(format!(
                "min_size ({}) is larger than max_size ({})",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }

    pub fn astar_timeout(&self) -> Option<Duration> {
        self.astar_timeout_ms.map(Duration::from_millis)
    }

    pub fn with_solver(mut self, solver: SolverChoice) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_astar_timeout_ms(mut self, ms: u64) -> Self {
        self.astar_timeout_ms = Some(ms);
        self
    }

    pub fn with_trace_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.trace_dir = Some(dir.into());
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(RunConfig::from_toml_str("").unwrap(), RunConfig::default());
    }

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            min_size = 1
            max_size = 6
            solver = "csp"
            trace_dir = "out"
            json = true
        "#;
        let config = RunConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.min_size, 1);
        assert_eq!(config.max_size, 6);
        assert_eq!(config.solver, SolverChoice::Csp);
        assert_eq!(config.trace_dir, Some(PathBuf::from("out")));
        assert!(config.json);
        assert_eq!(config.astar_timeout(), None);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let err = RunConfig::from_toml_str("min_size = 9\nmax_size = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = RunConfig::from_toml_str("min_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_solver_rejected() {
        assert!(matches!(
            RunConfig::from_toml_str("solver = \"greedy\""),
            Err(ConfigError::Toml(_))
        ));
        assert!("greedy".parse::<SolverChoice>().is_err());
        assert_eq!("both".parse::<SolverChoice>().unwrap(), SolverChoice::Both);
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::new()
            .with_solver(SolverChoice::Astar)
            .with_astar_timeout_ms(100)
            .with_trace_dir("traces")
            .with_json(true);
        assert!(!config.solver.runs_csp());
        assert!(config.solver.runs_astar());
        assert_eq!(config.astar_timeout(), Some(Duration::from_millis(100)));
        assert_eq!(config.trace_dir, Some(PathBuf::from("traces")));
        assert!(config.json);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nqueens.toml");
        std::fs::write(&path, "astar_timeout_ms = 5000\n").unwrap();
        let config = RunConfig::load(&path).unwrap();
        assert_eq!(config.astar_timeout_ms, Some(5000));

        assert!(matches!(
            RunConfig::load(dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
