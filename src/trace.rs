use crate::board::Board;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Boards visited by a solver, in visitation order.
///
/// Every entry is an owned copy, so later changes to a working board never
/// show up in steps that were already recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Board>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, board: &Board) {
        log::trace!("step {}: {}", self.steps.len() + 1, board);
        self.steps.push(board.clone());
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Board] {
        &self.steps
    }

    pub fn first(&self) -> Option<&Board> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Board> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<Board> {
        self.steps
    }

    /// Writes one CSV row per step: `Step #,Board,Queens`.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Step #", "Board", "Queens"])?;
        for (i, step) in self.steps.iter().enumerate() {
            wtr.write_record(&[(i + 1).to_string(), step.to_positions(), step.notation()])?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        log::info!("writing {} steps to {}", self.steps.len(), path.display());
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
