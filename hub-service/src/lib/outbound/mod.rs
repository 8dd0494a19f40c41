pub mod repositories;
pub mod session;

pub use session::AuthSessionVerifier;
