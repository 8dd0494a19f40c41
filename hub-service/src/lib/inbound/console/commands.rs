use thiserror::Error;

/// Console command parsing errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("Missing argument <{argument}> for `{command}`")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

/// One console line, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register { username: String, password: String },
    Login { username: String, password: String },
    WhoAmI { token: String },
    Workspaces { token: String },
    NewWorkspace { token: String, name: String },
    Documents { token: String, workspace_id: Option<String> },
    NewDocument {
        token: String,
        workspace_id: String,
        title: String,
        content: String,
    },
    DeleteDocument { token: String, document_id: String },
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  register <username> <password>
  login <username> <password>
  whoami <token>
  workspaces <token>
  new-workspace <token> <name...>
  documents <token> [workspace-id]
  new-document <token> <workspace-id> <title> <content...>
  delete-document <token> <document-id>
  help
  quit";

impl Command {
    /// Parse a console line. Blank lines parse to `None`.
    ///
    /// Arguments are whitespace separated; the last argument of
    /// `new-workspace` and `new-document` takes the rest of the line.
    ///
    /// # Errors
    /// * `UnknownCommand` - First word is not a command
    /// * `MissingArgument` - A required argument is absent
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = Words::new(line.trim());
        let Some(name) = words.next() else {
            return Ok(None);
        };

        let command = match name {
            "register" => Command::Register {
                username: words.required("register", "username")?,
                password: words.required("register", "password")?,
            },
            "login" => Command::Login {
                username: words.required("login", "username")?,
                password: words.required("login", "password")?,
            },
            "whoami" => Command::WhoAmI {
                token: words.required("whoami", "token")?,
            },
            "workspaces" => Command::Workspaces {
                token: words.required("workspaces", "token")?,
            },
            "new-workspace" => Command::NewWorkspace {
                token: words.required("new-workspace", "token")?,
                name: words.rest("new-workspace", "name")?,
            },
            "documents" => Command::Documents {
                token: words.required("documents", "token")?,
                workspace_id: words.next().map(str::to_string),
            },
            "new-document" => Command::NewDocument {
                token: words.required("new-document", "token")?,
                workspace_id: words.required("new-document", "workspace-id")?,
                title: words.required("new-document", "title")?,
                content: words.rest("new-document", "content")?,
            },
            "delete-document" => Command::DeleteDocument {
                token: words.required("delete-document", "token")?,
                document_id: words.required("delete-document", "document-id")?,
            },
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Whitespace tokenizer that can hand back the unconsumed remainder.
struct Words<'a> {
    rest: &'a str,
}

impl<'a> Words<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn next(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }

        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (word, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(word)
    }

    fn required(
        &mut self,
        command: &'static str,
        argument: &'static str,
    ) -> Result<String, ParseError> {
        self.next()
            .map(str::to_string)
            .ok_or(ParseError::MissingArgument { command, argument })
    }

    fn rest(&mut self, command: &'static str, argument: &'static str) -> Result<String, ParseError> {
        let rest = self.rest.trim();
        self.rest = "";
        if rest.is_empty() {
            return Err(ParseError::MissingArgument { command, argument });
        }
        Ok(rest.to_string())
    }
}
