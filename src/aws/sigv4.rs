//! Request signing for the invocation stage (Signature Version 4).
//!
//! Only what a single signed POST needs: canonical request, string-to-sign, derived
//! signing key, authorization header. The signed header set is fixed to `host`,
//! `x-amz-date`, and (when present) `x-amz-security-token`; anything else the transport
//! adds rides along unsigned.

// crates.io
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
// self
use crate::_prelude::*;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const TERMINATOR: &str = "aws4_request";

type HmacSha256 = Hmac<Sha256>;

/// Inputs for signing one request.
#[derive(Clone, Debug)]
pub struct SigningParams<'a> {
	/// HTTP method, uppercase.
	pub method: &'a str,
	/// Full request URL; path and query feed the canonical request.
	pub url: &'a Url,
	/// Region scope component.
	pub region: &'a str,
	/// Service scope component.
	pub service: &'a str,
	/// Request body bytes.
	pub payload: &'a [u8],
	/// Access key identifier.
	pub access_key_id: &'a str,
	/// Secret key paired with the access key.
	pub secret_access_key: &'a str,
	/// Session token for temporary credentials, when present.
	pub session_token: Option<&'a str>,
	/// Signing instant; the same instant lands in `x-amz-date`.
	pub timestamp: OffsetDateTime,
}

/// Signs the request and returns the headers to attach: `x-amz-date`, the session token
/// header when present, and `authorization`.
///
/// The `host` header is signed but not returned: the transport derives it from the URL, and
/// the computed value matches what it will send (port included only when non-default).
pub fn sign(params: &SigningParams) -> Vec<(String, String)> {
	let amz_date = format_amz_date(params.timestamp);
	let date = &amz_date[..8];
	let host = host_value(params.url);
	let mut canonical_headers = format!("host:{host}\nx-amz-date:{amz_date}\n");
	let mut signed_headers = String::from("host;x-amz-date");

	if let Some(token) = params.session_token {
		canonical_headers.push_str(&format!("x-amz-security-token:{token}\n"));
		signed_headers.push_str(";x-amz-security-token");
	}

	let payload_hash = hex::encode(Sha256::digest(params.payload));
	let canonical_request = format!(
		"{}\n{}\n{}\n{}\n{}\n{}",
		params.method,
		canonical_path(params.url),
		params.url.query().unwrap_or(""),
		canonical_headers,
		signed_headers,
		payload_hash,
	);
	let scope = format!("{date}/{}/{}/{TERMINATOR}", params.region, params.service);
	let string_to_sign = format!(
		"{ALGORITHM}\n{amz_date}\n{scope}\n{}",
		hex::encode(Sha256::digest(canonical_request.as_bytes())),
	);
	let signing_key = derive_signing_key(params.secret_access_key, date, params.region, params.service);
	let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes()));
	let authorization = format!(
		"{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
		params.access_key_id,
	);
	let mut headers = vec![("x-amz-date".to_owned(), amz_date)];

	if let Some(token) = params.session_token {
		headers.push(("x-amz-security-token".to_owned(), token.to_owned()));
	}

	headers.push(("authorization".to_owned(), authorization));

	headers
}

fn derive_signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
	let mut key = hmac_sha256(format!("AWS4{secret}").as_bytes(), date.as_bytes());

	for component in [region, service, TERMINATOR] {
		key = hmac_sha256(&key, component.as_bytes());
	}

	key
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
	// HMAC-SHA256 accepts keys of any length.
	let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length.");

	mac.update(data);

	mac.finalize().into_bytes().to_vec()
}

fn host_value(url: &Url) -> String {
	let host = url.host_str().unwrap_or_default();

	match url.port() {
		Some(port) => format!("{host}:{port}"),
		None => host.to_owned(),
	}
}

fn canonical_path(url: &Url) -> &str {
	let path = url.path();

	if path.is_empty() { "/" } else { path }
}

fn format_amz_date(instant: OffsetDateTime) -> String {
	format!(
		"{:04}{:02}{:02}T{:02}{:02}{:02}Z",
		instant.year(),
		instant.month() as u8,
		instant.day(),
		instant.hour(),
		instant.minute(),
		instant.second(),
	)
}
