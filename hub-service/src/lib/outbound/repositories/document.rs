use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::models::Document;
use crate::domain::workspace::models::DocumentId;
use crate::domain::workspace::models::WorkspaceId;
use crate::domain::workspace::ports::DocumentRepository;

/// Documents held in process memory, in creation order.
#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn create(&self, document: Document) -> Result<Document, WorkspaceError> {
        self.documents.write().await.push(document.clone());
        Ok(document)
    }

    async fn list_all(&self) -> Result<Vec<Document>, WorkspaceError> {
        Ok(self.documents.read().await.clone())
    }

    async fn list_by_workspace(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Document>, WorkspaceError> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .filter(|document| document.workspace_id == *workspace_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), WorkspaceError> {
        let mut documents = self.documents.write().await;

        let position = documents
            .iter()
            .position(|document| document.id == *id)
            .ok_or(WorkspaceError::DocumentNotFound(*id))?;
        documents.remove(position);

        Ok(())
    }
}
