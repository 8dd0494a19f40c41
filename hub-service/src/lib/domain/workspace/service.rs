use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::session::AuthenticatedUser;
use crate::domain::session::SessionVerifier;
use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::models::CreateDocumentCommand;
use crate::domain::workspace::models::Document;
use crate::domain::workspace::models::DocumentId;
use crate::domain::workspace::models::Workspace;
use crate::domain::workspace::models::WorkspaceId;
use crate::domain::workspace::models::WorkspaceName;
use crate::domain::workspace::ports::DocumentRepository;
use crate::domain::workspace::ports::WorkspaceRepository;
use crate::domain::workspace::ports::WorkspaceServicePort;

/// Domain service implementation for workspace and document operations.
pub struct WorkspaceService<WR, DR, SV>
where
    WR: WorkspaceRepository,
    DR: DocumentRepository,
    SV: SessionVerifier,
{
    workspaces: Arc<WR>,
    documents: Arc<DR>,
    sessions: Arc<SV>,
}

impl<WR, DR, SV> WorkspaceService<WR, DR, SV>
where
    WR: WorkspaceRepository,
    DR: DocumentRepository,
    SV: SessionVerifier,
{
    /// Create a new workspace service with injected dependencies.
    ///
    /// # Arguments
    /// * `workspaces` - Workspace persistence implementation
    /// * `documents` - Document persistence implementation
    /// * `sessions` - Bearer token verification
    pub fn new(workspaces: Arc<WR>, documents: Arc<DR>, sessions: Arc<SV>) -> Self {
        Self {
            workspaces,
            documents,
            sessions,
        }
    }

    /// Create workspaces from configuration, bypassing authentication.
    ///
    /// Blank names are skipped with a warning.
    pub async fn seed(&self, names: &[String]) -> Result<Vec<Workspace>, WorkspaceError> {
        let mut seeded = Vec::with_capacity(names.len());

        for raw in names {
            let name = match WorkspaceName::new(raw.as_str()) {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!(name = %raw, error = %e, "Skipping seed workspace");
                    continue;
                }
            };

            let workspace = self
                .workspaces
                .create(Workspace {
                    id: WorkspaceId::new(),
                    name,
                    created_by: None,
                    created_at: Utc::now(),
                })
                .await?;

            tracing::info!(workspace_id = %workspace.id, name = %workspace.name, "Workspace seeded");
            seeded.push(workspace);
        }

        Ok(seeded)
    }

    fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, WorkspaceError> {
        self.sessions.verify(token).map_err(|e| {
            tracing::debug!("Request rejected: invalid session");
            WorkspaceError::from(e)
        })
    }

    async fn require_workspace(&self, id: &WorkspaceId) -> Result<Workspace, WorkspaceError> {
        self.workspaces
            .find_by_id(id)
            .await?
            .ok_or(WorkspaceError::WorkspaceNotFound(*id))
    }
}

#[async_trait]
impl<WR, DR, SV> WorkspaceServicePort for WorkspaceService<WR, DR, SV>
where
    WR: WorkspaceRepository,
    DR: DocumentRepository,
    SV: SessionVerifier,
{
    async fn list_workspaces(&self, token: &str) -> Result<Vec<Workspace>, WorkspaceError> {
        self.authenticate(token)?;
        self.workspaces.list_all().await
    }

    async fn create_workspace(
        &self,
        token: &str,
        name: WorkspaceName,
    ) -> Result<Workspace, WorkspaceError> {
        let caller = self.authenticate(token)?;

        let workspace = self
            .workspaces
            .create(Workspace {
                id: WorkspaceId::new(),
                name,
                created_by: Some(caller.username.clone()),
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            workspace_id = %workspace.id,
            username = %caller.username,
            "Workspace created"
        );
        Ok(workspace)
    }

    async fn list_documents(
        &self,
        token: &str,
        workspace_id: Option<WorkspaceId>,
    ) -> Result<Vec<Document>, WorkspaceError> {
        self.authenticate(token)?;

        match workspace_id {
            Some(id) => {
                self.require_workspace(&id).await?;
                self.documents.list_by_workspace(&id).await
            }
            None => self.documents.list_all().await,
        }
    }

    async fn create_document(
        &self,
        token: &str,
        command: CreateDocumentCommand,
    ) -> Result<Document, WorkspaceError> {
        let caller = self.authenticate(token)?;
        self.require_workspace(&command.workspace_id).await?;

        let document = self
            .documents
            .create(Document {
                id: DocumentId::new(),
                workspace_id: command.workspace_id,
                title: command.title,
                content: command.content,
                created_by: caller.username.clone(),
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            document_id = %document.id,
            workspace_id = %document.workspace_id,
            username = %caller.username,
            "Document created"
        );
        Ok(document)
    }

    async fn delete_document(&self, token: &str, id: &DocumentId) -> Result<(), WorkspaceError> {
        let caller = self.authenticate(token)?;

        self.documents.delete(id).await?;

        tracing::info!(document_id = %id, username = %caller.username, "Document deleted");
        Ok(())
    }
}
