// ⚠️ Pipeline errors
// Load failures and empty results are values, not panics

use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a pipeline failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// File missing/unreadable or a required column is absent
    Load,
    /// A filter or join produced zero rows
    EmptyResult,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {dataset}: {source}")]
    Csv {
        dataset: String,
        #[source]
        source: csv::Error,
    },

    #[error("Column '{column}' not found in {dataset}")]
    MissingColumn { dataset: String, column: String },

    #[error("{message}")]
    EmptyFilter { stage: String, message: String },

    #[error("No valid month columns found for plotting in job vacancy data.")]
    NoMonthColumns,

    #[error("{message}")]
    EmptyJoin { message: String },
}

impl PipelineError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PipelineError::Load { .. }
            | PipelineError::Csv { .. }
            | PipelineError::MissingColumn { .. } => FailureKind::Load,
            PipelineError::EmptyFilter { .. }
            | PipelineError::NoMonthColumns
            | PipelineError::EmptyJoin { .. } => FailureKind::EmptyResult,
        }
    }

    pub fn empty_filter(stage: &str, message: &str) -> Self {
        PipelineError::EmptyFilter {
            stage: stage.to_string(),
            message: message.to_string(),
        }
    }

    pub fn empty_join(message: &str) -> Self {
        PipelineError::EmptyJoin {
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
