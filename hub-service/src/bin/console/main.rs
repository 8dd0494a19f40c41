use std::sync::Arc;

use auth::AuthService;
use hub_service::config::Config;
use hub_service::domain::workspace::service::WorkspaceService;
use hub_service::inbound::console::Console;
use hub_service::outbound::repositories::InMemoryDocumentRepository;
use hub_service::outbound::repositories::InMemoryWorkspaceRepository;
use hub_service::outbound::AuthSessionVerifier;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // stdout carries console replies; logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hub_service=debug,auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        service = "hub-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        algorithm = %config.auth.algorithm,
        token_ttl_secs = config.auth.token_ttl_secs,
        hashing_memory_kib = config.auth.hashing.memory_kib,
        hashing_iterations = config.auth.hashing.iterations,
        seed_workspaces = config.hub.seed_workspaces.len(),
        "Configuration loaded"
    );

    let auth_service = Arc::new(AuthService::new(&config.auth)?);
    let session_verifier = Arc::new(AuthSessionVerifier::new(Arc::clone(&auth_service)));

    let workspace_service = Arc::new(WorkspaceService::new(
        Arc::new(InMemoryWorkspaceRepository::new()),
        Arc::new(InMemoryDocumentRepository::new()),
        session_verifier,
    ));
    workspace_service.seed(&config.hub.seed_workspaces).await?;

    let console = Console::new(auth_service, workspace_service);
    tracing::info!("Console ready, type `help` for commands");

    console.run(tokio::io::stdin(), tokio::io::stdout()).await?;

    tracing::info!("Console closed");

    Ok(())
}
