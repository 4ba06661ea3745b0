mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use waterguru_bridge::{
	aws::CognitoFederation,
	error::{Error, FederationError},
	pipeline::CredentialExchanger,
};

const TARGET_HEADER: &str = "x-amz-target";
const GET_ID: &str = "AWSCognitoIdentityService.GetId";
const GET_CREDENTIALS: &str = "AWSCognitoIdentityService.GetCredentialsForIdentity";

#[tokio::test]
async fn exchange_resolves_a_handle_then_fetches_credentials() {
	let server = MockServer::start_async().await;
	let descriptor = common::mock_descriptor(&server);
	let login_key = descriptor.login_provider_key();
	let get_id = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/")
				.header(TARGET_HEADER, GET_ID)
				.json_body_includes(format!(r#"{{"Logins":{{"{login_key}":"fake-id-token"}}}}"#));
			then.status(200).json_body(json!({ "IdentityId": "us-west-2:identity-1" }));
		})
		.await;
	let get_credentials = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/")
				.header(TARGET_HEADER, GET_CREDENTIALS)
				.json_body_includes(r#"{"IdentityId":"us-west-2:identity-1"}"#);
			then.status(200).json_body(json!({
				"IdentityId": "us-west-2:identity-1",
				"Credentials": {
					"AccessKeyId": "ASIAEXAMPLE",
					"SecretKey": "secret-key",
					"SessionToken": "session-token",
					"Expiration": 1_700_000_000.0,
				},
			}));
		})
		.await;
	let federation = CognitoFederation::new(descriptor, common::test_http_client());
	let session = federation
		.exchange("fake-id-token")
		.await
		.expect("Exchange against the mock federation service should succeed.");

	assert_eq!(session.access_key_id, "ASIAEXAMPLE");
	assert_eq!(session.secret_access_key.expose(), "secret-key");
	assert_eq!(session.session_token.expose(), "session-token");
	assert_eq!(
		session.expiration.expect("Expiration should be present.").unix_timestamp(),
		1_700_000_000,
	);

	get_id.assert_async().await;
	get_credentials.assert_async().await;
}

#[tokio::test]
async fn missing_identity_handle_is_an_explicit_error() {
	let server = MockServer::start_async().await;
	let _get_id = server
		.mock_async(|when, then| {
			when.method(POST).path("/").header(TARGET_HEADER, GET_ID);
			then.status(200).json_body(json!({}));
		})
		.await;
	let federation =
		CognitoFederation::new(common::mock_descriptor(&server), common::test_http_client());
	let err = federation
		.exchange("fake-id-token")
		.await
		.expect_err("A handle-less response should abort the exchange.");

	assert!(matches!(err, Error::Federation(FederationError::MissingIdentityId)));
	assert_eq!(err.to_string(), "Failed to get IdentityId");
}

#[tokio::test]
async fn missing_credential_set_is_an_explicit_error() {
	let server = MockServer::start_async().await;
	let _get_id = server
		.mock_async(|when, then| {
			when.method(POST).path("/").header(TARGET_HEADER, GET_ID);
			then.status(200).json_body(json!({ "IdentityId": "us-west-2:identity-1" }));
		})
		.await;
	let _get_credentials = server
		.mock_async(|when, then| {
			when.method(POST).path("/").header(TARGET_HEADER, GET_CREDENTIALS);
			then.status(200).json_body(json!({ "IdentityId": "us-west-2:identity-1" }));
		})
		.await;
	let federation =
		CognitoFederation::new(common::mock_descriptor(&server), common::test_http_client());
	let err = federation
		.exchange("fake-id-token")
		.await
		.expect_err("A credential-less response should abort the exchange.");

	assert!(matches!(err, Error::Federation(FederationError::MissingCredentials)));
	assert_eq!(err.to_string(), "Failed to get credentials for identity");
}

#[tokio::test]
async fn federation_rejections_pass_through_verbatim() {
	let server = MockServer::start_async().await;
	let _get_id = server
		.mock_async(|when, then| {
			when.method(POST).path("/").header(TARGET_HEADER, GET_ID);
			then.status(400).json_body(json!({
				"__type": "ResourceNotFoundException",
				"message": "Identity pool not found.",
			}));
		})
		.await;
	let federation =
		CognitoFederation::new(common::mock_descriptor(&server), common::test_http_client());
	let err = federation
		.exchange("fake-id-token")
		.await
		.expect_err("Service rejections should surface to the caller.");

	assert!(matches!(err, Error::Federation(FederationError::Rejected { .. })));
	assert_eq!(err.to_string(), "ResourceNotFoundException: Identity pool not found.");
}
