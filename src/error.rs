//! Pipeline-level error types shared across stages and the facade.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Every failure aborts the whole pipeline; nothing is caught or retried at this layer.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem raised before any network activity.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The user directory rejected or interrupted the login.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Identity-token claims could not be derived.
	#[error(transparent)]
	Claims(#[from] crate::auth::ClaimsError),
	/// The identity federation service failed to hand out session credentials.
	#[error(transparent)]
	Federation(#[from] FederationError),
	/// The remote function invocation failed.
	#[error(transparent)]
	Invoke(#[from] InvokeError),
	/// The response payload could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Username or password was blank at construction.
	#[error("WaterGuru username and password are required")]
	MissingLoginCredentials,
	/// Service descriptor failed validation.
	#[error(transparent)]
	InvalidDescriptor(#[from] crate::provider::ServiceDescriptorError),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Request body could not be encoded as JSON.
	#[error("Request body could not be encoded.")]
	EncodeBody {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Login failures surfaced by the user directory.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// The directory demanded a password change mid-login; this client does not support that
	/// flow and fails deterministically instead of attempting the change.
	#[error("User requires new password; cannot continue login here")]
	NewPasswordRequired,
	/// The directory issued a challenge this client does not implement.
	#[error("Login challenge `{challenge}` is not supported.")]
	UnsupportedChallenge {
		/// Challenge name returned by the directory.
		challenge: String,
	},
	/// The directory rejected the login; code and message are carried verbatim.
	#[error("{code}: {message}")]
	Rejected {
		/// Directory exception code.
		code: String,
		/// Directory-supplied message.
		message: String,
	},
	/// The login response carried neither tokens nor a challenge.
	#[error("Authentication result is missing from the login response.")]
	MissingAuthenticationResult,
}

/// Credential-exchange failures surfaced by the identity federation service.
#[derive(Debug, ThisError)]
pub enum FederationError {
	/// Handle resolution returned no identity handle.
	#[error("Failed to get IdentityId")]
	MissingIdentityId,
	/// The credential call returned no credential set.
	#[error("Failed to get credentials for identity")]
	MissingCredentials,
	/// The federation service rejected a call; code and message are carried verbatim.
	#[error("{code}: {message}")]
	Rejected {
		/// Service exception code.
		code: String,
		/// Service-supplied message.
		message: String,
	},
}

/// Remote-function invocation failures.
#[derive(Debug, ThisError)]
pub enum InvokeError {
	/// The function returned no payload at all.
	#[error("Lambda returned no payload")]
	EmptyPayload,
	/// The invocation service rejected the call; code and message are carried verbatim.
	#[error("{code}: {message}")]
	Rejected {
		/// Service exception code.
		code: String,
		/// Service-supplied message.
		message: String,
	},
}

/// Payload decoding failures, distinct from every transport class so callers and tests can
/// tell a malformed response from a failed call.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Payload bytes are not valid UTF-8.
	#[error("Response payload is not valid UTF-8.")]
	Utf8(#[from] std::string::FromUtf8Error),
	/// Payload text is not valid JSON.
	#[error("Response payload is not valid JSON.")]
	Json {
		/// Structured parsing failure retaining the failing path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the service endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
