//! Identity-token claim decoding.
//!
//! The identity token is a three-part dot-separated structure; the middle part is
//! base64-encoded JSON. Only decoding happens here; the signature is never verified, since
//! the token is handed straight back to the services that issued it.

// crates.io
use base64::{
	Engine,
	engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
// self
use crate::_prelude::*;

/// Claim key carrying the directory-resolved username.
pub const USERNAME_CLAIM: &str = "cognito:username";

/// Failures raised while deriving claims from an identity token.
#[derive(Debug, ThisError)]
pub enum ClaimsError {
	/// The token is not a three-segment dot-separated structure.
	#[error("Identity token is not a three-segment token.")]
	MalformedToken,
	/// The claims segment is not valid base64.
	#[error("Identity token claims segment is not valid base64.")]
	Base64(#[from] base64::DecodeError),
	/// The claims segment is not valid JSON.
	#[error("Identity token claims are not valid JSON.")]
	Json(#[source] serde_json::Error),
	/// The username claim is absent or not a string.
	#[error("Identity token claims are missing `cognito:username`.")]
	MissingUsernameClaim,
}

/// Decoded claim set from an identity token's middle segment.
#[derive(Clone, Debug)]
pub struct IdTokenClaims(JsonValue);
impl IdTokenClaims {
	/// Splits the token, base64-decodes the middle segment, and parses it as JSON.
	pub fn decode(id_token: &str) -> Result<Self, ClaimsError> {
		let mut segments = id_token.split('.');
		let claims_segment = match (segments.next(), segments.next(), segments.next(), segments.next()) {
			(Some(_), Some(claims), Some(_), None) => claims,
			_ => return Err(ClaimsError::MalformedToken),
		};
		let bytes = decode_segment(claims_segment)?;
		let value = serde_json::from_slice(&bytes).map_err(ClaimsError::Json)?;

		Ok(Self(value))
	}

	/// Returns the `cognito:username` claim.
	pub fn username(&self) -> Result<&str, ClaimsError> {
		self.0
			.get(USERNAME_CLAIM)
			.and_then(JsonValue::as_str)
			.ok_or(ClaimsError::MissingUsernameClaim)
	}

	/// Returns an arbitrary claim by name.
	pub fn get(&self, claim: &str) -> Option<&JsonValue> {
		self.0.get(claim)
	}
}

// Real directory tokens use the url-safe unpadded alphabet; tooling-produced fixtures tend
// to use the standard padded one. Accept both.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
	STANDARD.decode(segment).or_else(|_| URL_SAFE_NO_PAD.decode(segment))
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::_preludet::fake_identity_token;

	#[test]
	fn decodes_username_claim() {
		let token = fake_identity_token(&json!({ "cognito:username": "user-id" }));
		let claims = IdTokenClaims::decode(&token).expect("Claims fixture should decode.");

		assert_eq!(claims.username().expect("Username claim should be present."), "user-id");
	}

	#[test]
	fn decodes_url_safe_segments() {
		// {"cognito:username":"u?u"} encodes to a segment containing url-safe characters.
		let claims_json = json!({ "cognito:username": "u?u", "sub": "s" }).to_string();
		let segment = URL_SAFE_NO_PAD.encode(&claims_json);
		let token = format!("header.{segment}.signature");
		let claims = IdTokenClaims::decode(&token).expect("Url-safe segment should decode.");

		assert_eq!(claims.username().expect("Username claim should be present."), "u?u");
		assert_eq!(claims.get("sub").and_then(JsonValue::as_str), Some("s"));
	}

	#[test]
	fn rejects_tokens_without_three_segments() {
		for token in ["fake-id-token", "a.b", "a.b.c.d", ""] {
			let err =
				IdTokenClaims::decode(token).expect_err("Malformed tokens should be rejected.");

			assert!(matches!(err, ClaimsError::MalformedToken), "{token} should be malformed");
		}
	}

	#[test]
	fn rejects_non_json_claims() {
		let segment = STANDARD.encode("not-json");
		let token = format!("header.{segment}.signature");
		let err = IdTokenClaims::decode(&token).expect_err("Non-JSON claims should be rejected.");

		assert!(matches!(err, ClaimsError::Json(_)));
	}

	#[test]
	fn missing_username_claim_is_explicit() {
		let token = fake_identity_token(&json!({ "sub": "subject-only" }));
		let claims = IdTokenClaims::decode(&token).expect("Claims fixture should decode.");
		let err = claims.username().expect_err("Missing username claim should be an error.");

		assert!(matches!(err, ClaimsError::MissingUsernameClaim));
	}
}
