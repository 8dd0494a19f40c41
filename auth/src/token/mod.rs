pub mod claims;
pub mod errors;
pub mod issuer;
pub mod models;
pub mod validator;

pub use claims::TokenClaims;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
pub use models::IssuedToken;
pub use models::Token;
pub use validator::TokenValidator;
