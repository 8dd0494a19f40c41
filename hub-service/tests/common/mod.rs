use std::sync::Arc;

use auth::AuthConfig;
use auth::AuthService;
use auth::HashingConfig;
use auth::InMemoryCredentialStore;
use hub_service::domain::workspace::service::WorkspaceService;
use hub_service::outbound::repositories::InMemoryDocumentRepository;
use hub_service::outbound::repositories::InMemoryWorkspaceRepository;
use hub_service::outbound::AuthSessionVerifier;

pub const SECRET: &str = "integration_secret_at_least_32_bytes";

pub type HubWorkspaceService = WorkspaceService<
    InMemoryWorkspaceRepository,
    InMemoryDocumentRepository,
    AuthSessionVerifier<InMemoryCredentialStore>,
>;

/// Fully wired hub backed by in-memory storage
pub struct TestHub {
    pub auth_service: Arc<AuthService>,
    pub workspace_service: Arc<HubWorkspaceService>,
}

impl TestHub {
    pub async fn spawn() -> Self {
        Self::spawn_with_secret(SECRET).await
    }

    /// Spawn a hub whose tokens are signed with `secret`
    pub async fn spawn_with_secret(secret: &str) -> Self {
        let config = AuthConfig::new(secret).with_hashing(HashingConfig {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        });
        let auth_service =
            Arc::new(AuthService::new(&config).expect("Failed to build auth service"));

        let workspace_service = Arc::new(WorkspaceService::new(
            Arc::new(InMemoryWorkspaceRepository::new()),
            Arc::new(InMemoryDocumentRepository::new()),
            Arc::new(AuthSessionVerifier::new(Arc::clone(&auth_service))),
        ));
        workspace_service
            .seed(&["Projekt Alpha".to_string(), "Projekt Beta".to_string()])
            .await
            .expect("Failed to seed workspaces");

        Self {
            auth_service,
            workspace_service,
        }
    }

    /// Register a user and return a fresh bearer token
    pub fn login_as(&self, username: &str, password: &str) -> String {
        self.auth_service
            .register(username, password)
            .expect("Failed to register");
        self.auth_service
            .login(username, password)
            .expect("Failed to login")
            .access_token
            .into_string()
    }
}
