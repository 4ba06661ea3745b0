mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use waterguru_bridge::{error::Error, flows::Bridge};

const TARGET_HEADER: &str = "x-amz-target";

/// Wires every stage endpoint to one mock server and runs the whole pipeline:
/// login → handle resolution → credential fetch → signed invocation → decode.
#[tokio::test]
async fn full_pipeline_returns_the_dashboard_payload() {
	let server = MockServer::start_async().await;
	let id_token = common::fake_identity_token(&json!({ "cognito:username": "user-id" }));
	let dashboard = json!({ "dashboardData": { "status": "GREEN", "waterBodies": [] } });
	let login = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/")
				.header(TARGET_HEADER, "AWSCognitoIdentityProviderService.InitiateAuth");
			then.status(200).json_body(json!({
				"AuthenticationResult": {
					"IdToken": id_token,
					"AccessToken": "fake-access-token",
					"RefreshToken": "fake-refresh-token",
				},
			}));
		})
		.await;
	let _get_id = server
		.mock_async(|when, then| {
			when.method(POST).path("/").header(TARGET_HEADER, "AWSCognitoIdentityService.GetId");
			then.status(200).json_body(json!({ "IdentityId": "us-west-2:identity-1" }));
		})
		.await;
	let _get_credentials = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/")
				.header(TARGET_HEADER, "AWSCognitoIdentityService.GetCredentialsForIdentity");
			then.status(200).json_body(json!({
				"Credentials": {
					"AccessKeyId": "ASIAEXAMPLE",
					"SecretKey": "secret-key",
					"SessionToken": "session-token",
					"Expiration": 1_700_000_000.0,
				},
			}));
		})
		.await;
	let invoke = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/2015-03-31/functions/prod-getDashboardView/invocations")
				.json_body_includes(
					r#"{"userId":"user-id","clientType":"WEB_APP","clientVersion":"0.2.3"}"#,
				);
			then.status(200).json_body(dashboard.clone());
		})
		.await;
	let bridge = Bridge::with_http_client(
		common::mock_descriptor(&server),
		"test-user",
		"test-pass",
		common::test_http_client(),
	)
	.expect("Bridge fixture should construct.");
	let first = bridge.get_dashboard().await.expect("First fetch should succeed.");

	assert_eq!(first, dashboard);

	// The alias returns the identical payload and must not log in again.
	let pools = bridge.get_pools().await.expect("Alias fetch should succeed.");

	assert_eq!(pools, first);

	login.assert_async().await;
	invoke.assert_calls_async(2).await;
}

#[tokio::test]
async fn a_failed_login_aborts_the_pipeline_before_any_exchange() {
	let server = MockServer::start_async().await;
	let login = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/")
				.header(TARGET_HEADER, "AWSCognitoIdentityProviderService.InitiateAuth");
			then.status(400).json_body(json!({
				"__type": "NotAuthorizedException",
				"message": "Incorrect username or password.",
			}));
		})
		.await;
	let federation = server
		.mock_async(|when, then| {
			when.method(POST).path("/").header(TARGET_HEADER, "AWSCognitoIdentityService.GetId");
			then.status(200).json_body(json!({ "IdentityId": "never-reached" }));
		})
		.await;
	let bridge = Bridge::with_http_client(
		common::mock_descriptor(&server),
		"test-user",
		"bad-pass",
		common::test_http_client(),
	)
	.expect("Bridge fixture should construct.");
	let err = bridge.get_dashboard().await.expect_err("A rejected login should abort the fetch.");

	assert!(matches!(err, Error::Auth(_)));

	login.assert_async().await;
	federation.assert_calls_async(0).await;
}
