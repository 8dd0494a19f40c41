pub mod document;
pub mod workspace;

pub use document::InMemoryDocumentRepository;
pub use workspace::InMemoryWorkspaceRepository;
