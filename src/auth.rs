//! Auth-domain models: login credentials, the cached token bundle, and identity-token claims.

pub mod claims;
pub mod credentials;
pub mod token;

pub use claims::*;
pub use credentials::*;
pub use token::*;
