use std::fmt::Display;
use std::sync::Arc;

use auth::AuthService;
use auth::CredentialStore;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncRead;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;

use super::commands::Command;
use super::commands::HELP;
use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace::models::CreateDocumentCommand;
use crate::domain::workspace::models::DocumentId;
use crate::domain::workspace::models::DocumentTitle;
use crate::domain::workspace::models::WorkspaceId;
use crate::domain::workspace::models::WorkspaceName;
use crate::domain::workspace::ports::WorkspaceServicePort;

/// Line-oriented front end over the auth and workspace services.
///
/// Replies are single lines (or tab-separated rows); failures are reported
/// as `error: <category>`.
pub struct Console<S, WS>
where
    S: CredentialStore,
    WS: WorkspaceServicePort,
{
    auth_service: Arc<AuthService<S>>,
    workspace_service: Arc<WS>,
}

impl<S, WS> Console<S, WS>
where
    S: CredentialStore,
    WS: WorkspaceServicePort,
{
    pub fn new(auth_service: Arc<AuthService<S>>, workspace_service: Arc<WS>) -> Self {
        Self {
            auth_service,
            workspace_service,
        }
    }

    /// Read commands from `input` until EOF or `quit`, writing replies to `output`.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = BufReader::new(input).lines();

        while let Some(line) = lines.next_line().await? {
            let reply = match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command).await,
                Err(e) => error_reply(e),
            };

            output.write_all(reply.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }

        Ok(())
    }

    /// Execute one command and render its reply.
    pub async fn execute(&self, command: Command) -> String {
        match command {
            Command::Register { username, password } => self.register(username, password).await,
            Command::Login { username, password } => self.login(username, password).await,
            Command::WhoAmI { token } => match self.auth_service.authenticate(&token) {
                Ok(identity) => identity.username.to_string(),
                Err(e) => error_reply(e),
            },
            Command::Workspaces { token } => {
                match self.workspace_service.list_workspaces(&token).await {
                    Ok(workspaces) => rows(
                        workspaces
                            .iter()
                            .map(|workspace| format!("{}\t{}", workspace.id, workspace.name)),
                    ),
                    Err(e) => error_reply(e),
                }
            }
            Command::NewWorkspace { token, name } => {
                let result = match WorkspaceName::new(name) {
                    Ok(name) => self.workspace_service.create_workspace(&token, name).await,
                    Err(e) => Err(e.into()),
                };
                match result {
                    Ok(workspace) => format!("{}\t{}", workspace.id, workspace.name),
                    Err(e) => error_reply(e),
                }
            }
            Command::Documents {
                token,
                workspace_id,
            } => match self.documents(&token, workspace_id.as_deref()).await {
                Ok(reply) => reply,
                Err(e) => error_reply(e),
            },
            Command::NewDocument {
                token,
                workspace_id,
                title,
                content,
            } => match self
                .new_document(&token, &workspace_id, title, content)
                .await
            {
                Ok(reply) => reply,
                Err(e) => error_reply(e),
            },
            Command::DeleteDocument { token, document_id } => {
                let result = match DocumentId::from_string(&document_id) {
                    Ok(id) => self
                        .workspace_service
                        .delete_document(&token, &id)
                        .await
                        .map(|_| id),
                    Err(e) => Err(e.into()),
                };
                match result {
                    Ok(id) => format!("deleted {}", id),
                    Err(e) => error_reply(e),
                }
            }
            Command::Help => HELP.to_string(),
            Command::Quit => "bye".to_string(),
        }
    }

    async fn register(&self, username: String, password: String) -> String {
        // Hashing is CPU bound; keep it off the async workers.
        let auth_service = Arc::clone(&self.auth_service);
        let result = tokio::task::spawn_blocking(move || {
            auth_service
                .register(&username, &password)
                .map(|_| username)
        })
        .await;

        match result {
            Ok(Ok(username)) => format!("registered {}", username),
            Ok(Err(e)) => error_reply(e),
            Err(e) => {
                tracing::error!(error = %e, "Registration task failed");
                error_reply("internal error")
            }
        }
    }

    async fn login(&self, username: String, password: String) -> String {
        let auth_service = Arc::clone(&self.auth_service);
        let result =
            tokio::task::spawn_blocking(move || auth_service.login(&username, &password)).await;

        match result {
            Ok(Ok(issued)) => format!(
                "{} {}\nexpires_at {}",
                issued.token_type,
                issued.access_token,
                issued.expires_at.to_rfc3339()
            ),
            Ok(Err(e)) => error_reply(e),
            Err(e) => {
                tracing::error!(error = %e, "Login task failed");
                error_reply("internal error")
            }
        }
    }

    async fn documents(
        &self,
        token: &str,
        workspace_id: Option<&str>,
    ) -> Result<String, WorkspaceError> {
        let workspace_id = workspace_id.map(WorkspaceId::from_string).transpose()?;
        let documents = self
            .workspace_service
            .list_documents(token, workspace_id)
            .await?;

        Ok(rows(documents.iter().map(|document| {
            format!(
                "{}\t{}\t{}",
                document.id, document.workspace_id, document.title
            )
        })))
    }

    async fn new_document(
        &self,
        token: &str,
        workspace_id: &str,
        title: String,
        content: String,
    ) -> Result<String, WorkspaceError> {
        let command = CreateDocumentCommand::new(
            WorkspaceId::from_string(workspace_id)?,
            DocumentTitle::new(title)?,
            content,
        );
        let document = self.workspace_service.create_document(token, command).await?;

        Ok(format!("{}\t{}", document.id, document.title))
    }
}

fn error_reply(error: impl Display) -> String {
    format!("error: {}", error)
}

fn rows(lines: impl Iterator<Item = String>) -> String {
    let rendered: Vec<String> = lines.collect();
    if rendered.is_empty() {
        "(none)".to_string()
    } else {
        rendered.join("\n")
    }
}
