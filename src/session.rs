//! Per-run session state
//!
//! One [`Session`] is created per program run, after the user picks a chart
//! kind, and never mutated afterwards. The binary shares it with the preview
//! server behind an `Arc`, so the routes read the same dataset that was
//! printed and saved.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::ChartData;
use crate::errors::{ChartGenError, Result};
use crate::registry::ChartKind;

/// The chart kind chosen for this run together with its generated dataset
#[derive(Debug, Clone)]
pub struct Session {
    kind: ChartKind,
    dataset: ChartData,
}

impl Session {
    /// Generate the dataset for `kind` once and capture it
    pub fn generate(kind: ChartKind, count: Option<usize>) -> Self {
        Self {
            kind,
            dataset: kind.generate(count),
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn dataset(&self) -> &ChartData {
        &self.dataset
    }

    /// Pretty-printed JSON (2-space indent) of the dataset
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.dataset)?)
    }

    /// Output file name derived from the display name, e.g.
    /// `line_chart_data.json`
    pub fn file_name(&self) -> String {
        let stem = self.kind.display_name().to_lowercase().replace(' ', "_");
        format!("{stem}_data.json")
    }

    /// Write the pretty-printed dataset into `dir` and return the full path
    pub fn persist(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        let json = self.to_json_pretty()?;
        fs::write(&path, json).map_err(|source| ChartGenError::FileWrite {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
