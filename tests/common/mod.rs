//! Shared fixtures for the integration tests.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use httpmock::MockServer;
use serde_json::Value as JsonValue;
// self
use waterguru_bridge::{http::AwsHttpClient, provider::ServiceDescriptor, reqwest, url::Url};

/// Builds a three-segment identity token whose claims segment encodes `claims`.
pub fn fake_identity_token(claims: &JsonValue) -> String {
	let encoded = STANDARD.encode(claims.to_string());

	format!("header.{encoded}.signature")
}

/// Builds an HTTP wrapper that accepts the self-signed certificates produced by `httpmock`.
pub fn test_http_client() -> AwsHttpClient {
	let client = reqwest::Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	AwsHttpClient::with_client(client)
}

/// Builds a descriptor whose three endpoints all point at the mock server.
pub fn mock_descriptor(server: &MockServer) -> ServiceDescriptor {
	let base = Url::parse(&server.url("/")).expect("Mock server URL should parse.");

	ServiceDescriptor::builder()
		.user_directory_endpoint(base.clone())
		.federation_endpoint(base.clone())
		.invocation_endpoint(base)
		.build()
		.expect("Mock descriptor should build.")
}
