use thiserror::Error;

use crate::domain::session::SessionError;
use crate::domain::workspace::models::DocumentId;
use crate::domain::workspace::models::WorkspaceId;

/// Error for WorkspaceId / DocumentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for WorkspaceName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkspaceNameError {
    #[error("Workspace name is empty")]
    Empty,

    #[error("Workspace name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for DocumentTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentTitleError {
    #[error("Document title is empty")]
    Empty,

    #[error("Document title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all workspace and document operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdError),

    #[error("Invalid workspace name: {0}")]
    InvalidWorkspaceName(#[from] WorkspaceNameError),

    #[error("Invalid document title: {0}")]
    InvalidDocumentTitle(#[from] DocumentTitleError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),

    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    // Infrastructure errors
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<SessionError> for WorkspaceError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Unauthorized => WorkspaceError::Unauthorized,
        }
    }
}
