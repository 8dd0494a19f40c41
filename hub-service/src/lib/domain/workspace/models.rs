use std::fmt;

use auth::Username;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::workspace::errors::DocumentTitleError;
use crate::domain::workspace::errors::IdError;
use crate::domain::workspace::errors::WorkspaceNameError;

/// Workspace unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkspaceId(pub Uuid);

impl WorkspaceId {
    /// Generate a new random workspace ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a workspace ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        Uuid::parse_str(s)
            .map(WorkspaceId)
            .map_err(|e| IdError::InvalidFormat(e.to_string()))
    }
}

impl Default for WorkspaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Document unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    /// Generate a new random document ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a document ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        Uuid::parse_str(s)
            .map(DocumentId)
            .map_err(|e| IdError::InvalidFormat(e.to_string()))
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Workspace name value type
///
/// Surrounding whitespace is trimmed; the rest must be 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceName(String);

impl WorkspaceName {
    const MAX_LENGTH: usize = 100;

    /// Create a new valid workspace name.
    ///
    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name exceeds 100 characters
    pub fn new(name: impl Into<String>) -> Result<Self, WorkspaceNameError> {
        let name = name.into().trim().to_string();
        let length = name.chars().count();

        if length == 0 {
            Err(WorkspaceNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(WorkspaceNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Document title value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTitle(String);

impl DocumentTitle {
    const MAX_LENGTH: usize = 200;

    /// Create a new valid document title.
    ///
    /// # Errors
    /// * `Empty` - Title is blank
    /// * `TooLong` - Title exceeds 200 characters
    pub fn new(title: impl Into<String>) -> Result<Self, DocumentTitleError> {
        let title = title.into().trim().to_string();
        let length = title.chars().count();

        if length == 0 {
            Err(DocumentTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(DocumentTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Workspace aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: WorkspaceName,
    /// `None` for workspaces seeded from configuration
    pub created_by: Option<Username>,
    pub created_at: DateTime<Utc>,
}

/// Document held in a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub workspace_id: WorkspaceId,
    pub title: DocumentTitle,
    pub content: String,
    pub created_by: Username,
    pub created_at: DateTime<Utc>,
}

/// Command to create a new document with domain types
#[derive(Debug)]
pub struct CreateDocumentCommand {
    pub workspace_id: WorkspaceId,
    pub title: DocumentTitle,
    pub content: String,
}

impl CreateDocumentCommand {
    pub fn new(workspace_id: WorkspaceId, title: DocumentTitle, content: String) -> Self {
        Self {
            workspace_id,
            title,
            content,
        }
    }
}
