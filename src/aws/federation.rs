//! Default credential exchanger speaking the identity-federation protocol.

// std
use std::collections::BTreeMap;
// crates.io
use time::Duration;
// self
use crate::{
	_prelude::*,
	aws,
	error::FederationError,
	http::AwsHttpClient,
	pipeline::{CredentialExchanger, SessionCredentials, StageFuture},
	provider::ServiceDescriptor,
};

const TARGET_GET_ID: &str = "AWSCognitoIdentityService.GetId";
const TARGET_GET_CREDENTIALS: &str = "AWSCognitoIdentityService.GetCredentialsForIdentity";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct GetIdRequest<'a> {
	identity_pool_id: &'a str,
	logins: BTreeMap<String, &'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetIdResponse {
	identity_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct GetCredentialsRequest<'a> {
	identity_id: &'a str,
	logins: BTreeMap<String, &'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetCredentialsResponse {
	credentials: Option<WireCredentials>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireCredentials {
	access_key_id: Option<String>,
	secret_key: Option<String>,
	session_token: Option<String>,
	// Unix epoch seconds, fractional.
	expiration: Option<f64>,
}

/// Exchanger that resolves an identity handle and fetches session credentials for it.
///
/// Both calls bind the identity token under the descriptor's login-provider key; the
/// credential set is fetched fresh on every exchange and never cached.
#[derive(Clone)]
pub struct CognitoFederation {
	descriptor: ServiceDescriptor,
	http: AwsHttpClient,
}
impl CognitoFederation {
	/// Creates an exchanger for the provided descriptor and transport.
	pub fn new(descriptor: ServiceDescriptor, http: AwsHttpClient) -> Self {
		Self { descriptor, http }
	}

	fn logins<'a>(&self, id_token: &'a str) -> BTreeMap<String, &'a str> {
		BTreeMap::from_iter([(self.descriptor.login_provider_key(), id_token)])
	}

	async fn call<T>(&self, target: &str, body: Vec<u8>) -> Result<T>
	where
		T: for<'de> Deserialize<'de>,
	{
		let response = self
			.http
			.post_target(&self.descriptor.endpoints.federation, target, body)
			.await
			.map_err(Error::from)?;

		if !response.is_success() {
			let (code, message) = aws::service_rejection(&response.body);

			return Err(FederationError::Rejected { code, message }.into());
		}

		serde_json::from_slice(&response.body).map_err(|_| {
			let (code, message) = aws::service_rejection(&response.body);

			FederationError::Rejected { code, message }.into()
		})
	}
}
impl CredentialExchanger for CognitoFederation {
	fn exchange<'a>(&'a self, id_token: &'a str) -> StageFuture<'a, SessionCredentials> {
		Box::pin(async move {
			let get_id = GetIdRequest {
				identity_pool_id: &self.descriptor.identity_pool_id,
				logins: self.logins(id_token),
			};
			let response: GetIdResponse =
				self.call(TARGET_GET_ID, aws::encode_body(&get_id)?).await?;
			let identity_id = response.identity_id.ok_or(FederationError::MissingIdentityId)?;
			let get_credentials =
				GetCredentialsRequest { identity_id: &identity_id, logins: self.logins(id_token) };
			let response: GetCredentialsResponse =
				self.call(TARGET_GET_CREDENTIALS, aws::encode_body(&get_credentials)?).await?;
			let credentials =
				response.credentials.ok_or(FederationError::MissingCredentials)?;
			let mut session = SessionCredentials::new(
				credentials.access_key_id.unwrap_or_default(),
				credentials.secret_key.unwrap_or_default(),
				credentials.session_token.unwrap_or_default(),
			);

			if let Some(epoch_seconds) = credentials.expiration {
				session = session
					.with_expiration(OffsetDateTime::UNIX_EPOCH + Duration::seconds_f64(epoch_seconds));
			}

			Ok(session)
		})
	}
}
