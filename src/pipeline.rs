//! Injectable stage capabilities that make up the dashboard pipeline.
//!
//! Each stage is an object-safe trait so tests can substitute fakes without reaching into
//! implementation internals. The pipeline is strictly linear: each stage's output is the
//! next stage's sole input, and no stage retries, caches, or runs concurrently with another.

// self
use crate::{
	_prelude::*,
	auth::{LoginCredentials, TokenBundle, TokenSecret},
};

/// Boxed future returned by pipeline stage implementations.
pub type StageFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Login capability: exchanges user credentials for a token bundle.
pub trait Authenticator
where
	Self: Send + Sync,
{
	/// Performs the challenge-response login against the user directory.
	///
	/// Implementations must map the directory's password-change demand to
	/// [`AuthError::NewPasswordRequired`](crate::error::AuthError::NewPasswordRequired) and
	/// pass every other directory rejection through verbatim.
	fn authenticate<'a>(
		&'a self,
		credentials: &'a LoginCredentials,
	) -> StageFuture<'a, TokenBundle>;
}

/// Federation capability: exchanges an identity token for short-lived session credentials.
pub trait CredentialExchanger
where
	Self: Send + Sync,
{
	/// Resolves an identity handle for the token, then fetches a credential set for it.
	///
	/// Implementations must fail with the explicit federation errors when either remote
	/// response omits its field, rather than surfacing a missing-value crash.
	fn exchange<'a>(&'a self, id_token: &'a str) -> StageFuture<'a, SessionCredentials>;
}

/// Invocation capability: calls the remote dashboard function.
pub trait FunctionInvoker
where
	Self: Send + Sync,
{
	/// Invokes the configured function with a JSON payload, returning the raw response
	/// bytes. An empty response payload is an error at this layer; decoding happens in the
	/// facade.
	fn invoke<'a>(
		&'a self,
		credentials: &'a SessionCredentials,
		payload: &'a [u8],
	) -> StageFuture<'a, Vec<u8>>;
}

/// Short-lived cloud credentials scoped to the identity pool.
///
/// Created fresh on every dashboard fetch and never cached or persisted; the caller's
/// cached token bundle outliving these is expected and unchecked.
#[derive(Clone)]
pub struct SessionCredentials {
	/// Access key identifier.
	pub access_key_id: String,
	/// Secret key paired with the access key.
	pub secret_access_key: TokenSecret,
	/// Session token bound to the credential set.
	pub session_token: TokenSecret,
	/// Expiration instant, when the federation service supplied one.
	pub expiration: Option<OffsetDateTime>,
}
impl SessionCredentials {
	/// Creates a credential set without an expiration instant.
	pub fn new(
		access_key_id: impl Into<String>,
		secret_access_key: impl Into<String>,
		session_token: impl Into<String>,
	) -> Self {
		Self {
			access_key_id: access_key_id.into(),
			secret_access_key: TokenSecret::new(secret_access_key),
			session_token: TokenSecret::new(session_token),
			expiration: None,
		}
	}

	/// Attaches the expiration instant reported by the federation service.
	pub fn with_expiration(mut self, expiration: OffsetDateTime) -> Self {
		self.expiration = Some(expiration);

		self
	}
}
impl Debug for SessionCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SessionCredentials")
			.field("access_key_id", &self.access_key_id)
			.field("secret_access_key", &"<redacted>")
			.field("session_token", &"<redacted>")
			.field("expiration", &self.expiration)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn session_credentials_redact_secret_material() {
		let credentials = SessionCredentials::new("akid", "secret-key", "session-token");
		let rendered = format!("{credentials:?}");

		assert!(rendered.contains("akid"));
		assert!(!rendered.contains("secret-key"));
		assert!(!rendered.contains("session-token"));
	}
}
