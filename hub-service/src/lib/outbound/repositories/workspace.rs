use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::models::Workspace;
use crate::domain::workspace::models::WorkspaceId;
use crate::domain::workspace::ports::WorkspaceRepository;

/// Workspaces held in process memory, in creation order.
#[derive(Debug, Default)]
pub struct InMemoryWorkspaceRepository {
    workspaces: RwLock<Vec<Workspace>>,
}

impl InMemoryWorkspaceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
    async fn create(&self, workspace: Workspace) -> Result<Workspace, WorkspaceError> {
        self.workspaces.write().await.push(workspace.clone());
        Ok(workspace)
    }

    async fn find_by_id(&self, id: &WorkspaceId) -> Result<Option<Workspace>, WorkspaceError> {
        Ok(self
            .workspaces
            .read()
            .await
            .iter()
            .find(|workspace| workspace.id == *id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Workspace>, WorkspaceError> {
        Ok(self.workspaces.read().await.clone())
    }
}
