//! User-supplied login credentials validated at client construction.

// self
use crate::{_prelude::*, error::ConfigError};

/// Validated username/password pair supplied at client construction.
///
/// Both fields are required; blank (empty or whitespace-only) values fail immediately with a
/// configuration error, before any network activity. The pair is immutable for the lifetime
/// of the client that owns it.
#[derive(Clone)]
pub struct LoginCredentials {
	username: String,
	password: String,
}
impl LoginCredentials {
	/// Validates and wraps the provided username and password.
	pub fn new(
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let username = username.into();
		let password = password.into();

		if username.trim().is_empty() || password.trim().is_empty() {
			return Err(ConfigError::MissingLoginCredentials);
		}

		Ok(Self { username, password })
	}

	/// Returns the login username.
	pub fn username(&self) -> &str {
		&self.username
	}

	/// Returns the login password. Callers must avoid logging this string.
	pub fn password(&self) -> &str {
		&self.password
	}
}
impl Debug for LoginCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LoginCredentials")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}
