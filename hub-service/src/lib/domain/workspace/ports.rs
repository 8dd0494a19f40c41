use async_trait::async_trait;

use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::models::CreateDocumentCommand;
use crate::domain::workspace::models::Document;
use crate::domain::workspace::models::DocumentId;
use crate::domain::workspace::models::Workspace;
use crate::domain::workspace::models::WorkspaceId;
use crate::domain::workspace::models::WorkspaceName;

/// Port for workspace domain service operations.
///
/// Every operation takes the caller's bearer token first and fails with
/// `Unauthorized` before touching storage if it does not verify.
#[async_trait]
pub trait WorkspaceServicePort: Send + Sync + 'static {
    /// List every workspace in creation order.
    ///
    /// # Errors
    /// * `Unauthorized` - Token did not verify
    async fn list_workspaces(&self, token: &str) -> Result<Vec<Workspace>, WorkspaceError>;

    /// Create a workspace owned by the caller.
    ///
    /// # Errors
    /// * `Unauthorized` - Token did not verify
    /// * `StorageError` - Storage operation failed
    async fn create_workspace(
        &self,
        token: &str,
        name: WorkspaceName,
    ) -> Result<Workspace, WorkspaceError>;

    /// List documents, optionally restricted to one workspace.
    ///
    /// # Errors
    /// * `Unauthorized` - Token did not verify
    /// * `WorkspaceNotFound` - Filter names an unknown workspace
    async fn list_documents(
        &self,
        token: &str,
        workspace_id: Option<WorkspaceId>,
    ) -> Result<Vec<Document>, WorkspaceError>;

    /// Create a document inside an existing workspace.
    ///
    /// # Errors
    /// * `Unauthorized` - Token did not verify
    /// * `WorkspaceNotFound` - Target workspace does not exist
    async fn create_document(
        &self,
        token: &str,
        command: CreateDocumentCommand,
    ) -> Result<Document, WorkspaceError>;

    /// Delete a document.
    ///
    /// # Errors
    /// * `Unauthorized` - Token did not verify
    /// * `DocumentNotFound` - Document does not exist
    async fn delete_document(&self, token: &str, id: &DocumentId) -> Result<(), WorkspaceError>;
}

/// Persistence operations for workspaces.
#[async_trait]
pub trait WorkspaceRepository: Send + Sync + 'static {
    /// Persist a new workspace.
    async fn create(&self, workspace: Workspace) -> Result<Workspace, WorkspaceError>;

    /// Retrieve workspace by identifier (None if not found).
    async fn find_by_id(&self, id: &WorkspaceId) -> Result<Option<Workspace>, WorkspaceError>;

    /// Retrieve all workspaces in creation order.
    async fn list_all(&self) -> Result<Vec<Workspace>, WorkspaceError>;
}

/// Persistence operations for documents.
#[async_trait]
pub trait DocumentRepository: Send + Sync + 'static {
    /// Persist a new document.
    async fn create(&self, document: Document) -> Result<Document, WorkspaceError>;

    /// Retrieve all documents in creation order.
    async fn list_all(&self) -> Result<Vec<Document>, WorkspaceError>;

    /// Retrieve documents belonging to one workspace, in creation order.
    async fn list_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Document>, WorkspaceError>;

    /// Remove a document.
    ///
    /// # Errors
    /// * `DocumentNotFound` - Document does not exist
    async fn delete(&self, id: &DocumentId) -> Result<(), WorkspaceError>;
}
