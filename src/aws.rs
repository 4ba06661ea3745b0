//! Default AWS-backed implementations of the pipeline stages.
//!
//! The directory and federation services speak the target-header JSON protocol; the
//! invocation service takes a SigV4-signed REST call. Everything rides on the crate's
//! reqwest wrapper, so pointing a stage at a mock server is just an endpoint override.

#[cfg(feature = "reqwest")] pub mod federation;
#[cfg(feature = "reqwest")] pub mod idp;
#[cfg(feature = "reqwest")] pub mod lambda;
pub mod sigv4;

#[cfg(feature = "reqwest")] pub use federation::*;
#[cfg(feature = "reqwest")] pub use idp::*;
#[cfg(feature = "reqwest")] pub use lambda::*;

// self
#[cfg(feature = "reqwest")] use crate::{_prelude::*, error::ConfigError};

/// Service exception shape shared by the JSON-protocol services.
#[cfg(feature = "reqwest")]
#[derive(Debug, Default, Deserialize)]
struct ServiceException {
	#[serde(rename = "__type")]
	code: Option<String>,
	#[serde(alias = "Message")]
	message: Option<String>,
}

/// Extracts the exception code and message from an error response body.
///
/// The code sometimes arrives fully qualified (`com.amazonaws...#NotAuthorizedException`);
/// only the fragment after the last `#` is meaningful to callers.
#[cfg(feature = "reqwest")]
fn service_rejection(body: &[u8]) -> (String, String) {
	let exception: ServiceException = serde_json::from_slice(body).unwrap_or_default();
	let code = exception
		.code
		.as_deref()
		.and_then(|code| code.rsplit('#').next())
		.unwrap_or("UnknownError")
		.to_owned();
	let message = exception.message.unwrap_or_else(|| "no message provided".into());

	(code, message)
}

/// Encodes a wire request body, mapping the (unlikely) failure into the config class.
#[cfg(feature = "reqwest")]
fn encode_body<T>(body: &T) -> Result<Vec<u8>, ConfigError>
where
	T: Serialize,
{
	serde_json::to_vec(body).map_err(|source| ConfigError::EncodeBody { source })
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;

	#[test]
	fn rejection_strips_the_qualified_code_prefix() {
		let body = br#"{"__type":"com.amazonaws.cognito#NotAuthorizedException","message":"Incorrect username or password."}"#;
		let (code, message) = service_rejection(body);

		assert_eq!(code, "NotAuthorizedException");
		assert_eq!(message, "Incorrect username or password.");
	}

	#[test]
	fn rejection_tolerates_unparseable_bodies() {
		let (code, message) = service_rejection(b"<html>bad gateway</html>");

		assert_eq!(code, "UnknownError");
		assert_eq!(message, "no message provided");
	}

	#[test]
	fn rejection_accepts_capitalized_message_key() {
		let body = br#"{"__type":"TooManyRequestsException","Message":"Rate exceeded"}"#;
		let (_, message) = service_rejection(body);

		assert_eq!(message, "Rate exceeded");
	}
}
