use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("relative path '{path}' is not allowed to refer to a directory outside its parent directory")]
    PathTraversal { path: String },
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error payload handed back to the orchestrator alongside a failed step.
#[derive(Debug, Serialize)]
pub struct ErrorObj {
    pub code: String,
    pub message: String,
}

impl ActionError {
    pub fn code(&self) -> &'static str {
        match self {
            ActionError::InvalidInput(_) => "InvalidInput",
            ActionError::PathTraversal { .. } => "PathTraversal",
            ActionError::UnknownAction(_) => "UnknownAction",
            ActionError::Io(_) => "Io",
        }
    }

    pub fn to_object(&self) -> ErrorObj {
        ErrorObj { code: self.code().to_string(), message: self.to_string() }
    }
}

pub type ActionResult<T> = Result<T, ActionError>;
