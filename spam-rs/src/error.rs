use std::path::PathBuf;

use thiserror::Error;

use crate::bayes::Label;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("Degenerate corpus: no {class} training messages")]
    DegenerateCorpus { class: Label },

    #[error("Model has not been trained")]
    UntrainedModel,

    #[error("Storage error at {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot rank test file without digits in its name: {0}")]
    UnrankableFileName(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpamError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SpamError::Storage {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpamError>;
