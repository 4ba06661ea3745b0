//! Token bundle produced by a successful login, plus the redacting secret wrapper.

// self
use crate::_prelude::*;

/// Redacted token secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// The set of tokens produced by a successful login, plus the resolved username.
///
/// Created once per login and cached on the client instance; while present it is reused
/// unconditionally; there is no expiry check and no invalidation path if the underlying
/// identity token expires or is revoked.
#[derive(Clone)]
pub struct TokenBundle {
	id_token: TokenSecret,
	access_token: Option<TokenSecret>,
	refresh_token: Option<TokenSecret>,
	username: String,
}
impl TokenBundle {
	/// Creates a bundle from the identity token and the directory-resolved username.
	pub fn new(id_token: impl Into<String>, username: impl Into<String>) -> Self {
		Self {
			id_token: TokenSecret::new(id_token),
			access_token: None,
			refresh_token: None,
			username: username.into(),
		}
	}

	/// Attaches the access token issued alongside the identity token.
	pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
		self.access_token = Some(TokenSecret::new(token));

		self
	}

	/// Attaches the refresh token issued alongside the identity token.
	pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
		self.refresh_token = Some(TokenSecret::new(token));

		self
	}

	/// Returns the signed identity token.
	pub fn id_token(&self) -> &TokenSecret {
		&self.id_token
	}

	/// Returns the access token, if the directory issued one.
	pub fn access_token(&self) -> Option<&TokenSecret> {
		self.access_token.as_ref()
	}

	/// Returns the refresh token, if the directory issued one.
	pub fn refresh_token(&self) -> Option<&TokenSecret> {
		self.refresh_token.as_ref()
	}

	/// Returns the username resolved from the identity token's claims.
	pub fn username(&self) -> &str {
		&self.username
	}
}
impl Debug for TokenBundle {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenBundle")
			.field("id_token", &"<redacted>")
			.field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
			.field("username", &self.username)
			.finish()
	}
}
