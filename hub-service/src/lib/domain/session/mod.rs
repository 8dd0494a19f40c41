pub mod models;
pub mod ports;

pub use models::AuthenticatedUser;
pub use models::SessionError;
pub use ports::SessionVerifier;
