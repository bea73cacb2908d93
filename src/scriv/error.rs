use crate::model::TextRange;
use thiserror::Error;

/// Failure reported by an external collaborator (clipboard, print
/// surface, soft keyboard). The message is surfaced verbatim; this
/// crate adds no semantics of its own on top of it.
#[derive(Error, Debug)]
#[error("{collaborator}: {message}")]
pub struct CollaboratorError {
    pub collaborator: &'static str,
    pub message: String,
}

impl CollaboratorError {
    pub fn new(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self {
            collaborator,
            message: message.into(),
        }
    }
}

/// Errors produced when applying an [`Action`](crate::action::Action)
/// to a document. A failed apply leaves the document unchanged.
#[derive(Error, Debug)]
pub enum ApplyError {
    #[error("Nothing is selected")]
    NoSelection,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,

    #[error("Range {0} is out of bounds for a document of length {1}")]
    RangeOutOfBounds(TextRange, usize),

    #[error("Step magnitude {0} is not representable as a signed step")]
    StepValueOutOfRange(u64),

    #[error("Collaborator failure: {0}")]
    Collaborator(#[from] CollaboratorError),
}

/// Errors from loading or saving editor configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApplyError>;
