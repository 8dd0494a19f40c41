pub mod argon2;
pub mod errors;
pub mod hash;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
pub use hash::PasswordHash;
