//! Default authenticator speaking the user-directory login protocol.

// self
use crate::{
	_prelude::*,
	auth::{IdTokenClaims, LoginCredentials, TokenBundle},
	aws,
	error::AuthError,
	http::AwsHttpClient,
	pipeline::{Authenticator, StageFuture},
	provider::ServiceDescriptor,
};

const TARGET_INITIATE_AUTH: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
const AUTH_FLOW_USER_PASSWORD: &str = "USER_PASSWORD_AUTH";
const CHALLENGE_NEW_PASSWORD: &str = "NEW_PASSWORD_REQUIRED";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthRequest<'a> {
	auth_flow: &'static str,
	client_id: &'a str,
	auth_parameters: AuthParameters<'a>,
}

#[derive(Debug, Serialize)]
struct AuthParameters<'a> {
	#[serde(rename = "USERNAME")]
	username: &'a str,
	#[serde(rename = "PASSWORD")]
	password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
	authentication_result: Option<AuthenticationResult>,
	challenge_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
	id_token: Option<String>,
	access_token: Option<String>,
	refresh_token: Option<String>,
}

/// Authenticator that performs a single-round `USER_PASSWORD_AUTH` login against the
/// configured user directory.
///
/// Three outcomes exist: success (a token bundle), rejection (the directory's error code
/// and message, verbatim), and a challenge. The password-change challenge maps to the fixed
/// unsupported-flow error; any other challenge is surfaced by name.
#[derive(Clone)]
pub struct CognitoAuthenticator {
	descriptor: ServiceDescriptor,
	http: AwsHttpClient,
}
impl CognitoAuthenticator {
	/// Creates an authenticator for the provided descriptor and transport.
	pub fn new(descriptor: ServiceDescriptor, http: AwsHttpClient) -> Self {
		Self { descriptor, http }
	}
}
impl Authenticator for CognitoAuthenticator {
	fn authenticate<'a>(
		&'a self,
		credentials: &'a LoginCredentials,
	) -> StageFuture<'a, TokenBundle> {
		Box::pin(async move {
			let request = InitiateAuthRequest {
				auth_flow: AUTH_FLOW_USER_PASSWORD,
				client_id: &self.descriptor.client_id,
				auth_parameters: AuthParameters {
					username: credentials.username(),
					password: credentials.password(),
				},
			};
			let body = aws::encode_body(&request)?;
			let response = self
				.http
				.post_target(&self.descriptor.endpoints.user_directory, TARGET_INITIATE_AUTH, body)
				.await
				.map_err(Error::from)?;

			if !response.is_success() {
				let (code, message) = aws::service_rejection(&response.body);

				return Err(AuthError::Rejected { code, message }.into());
			}

			let response: InitiateAuthResponse = serde_json::from_slice(&response.body)
				.map_err(|_| AuthError::MissingAuthenticationResult)?;

			if let Some(challenge) = response.challenge_name {
				return Err(match challenge.as_str() {
					CHALLENGE_NEW_PASSWORD => AuthError::NewPasswordRequired,
					_ => AuthError::UnsupportedChallenge { challenge },
				}
				.into());
			}

			let result = response
				.authentication_result
				.ok_or(AuthError::MissingAuthenticationResult)?;
			let id_token = result.id_token.ok_or(AuthError::MissingAuthenticationResult)?;
			let username = resolved_username(&id_token, credentials.username());
			let mut bundle = TokenBundle::new(id_token, username);

			if let Some(token) = result.access_token {
				bundle = bundle.with_access_token(token);
			}
			if let Some(token) = result.refresh_token {
				bundle = bundle.with_refresh_token(token);
			}

			Ok(bundle)
		})
	}
}

// The directory-resolved name comes from the identity token's claims; the login username
// is the fallback when the claim set cannot be read.
fn resolved_username(id_token: &str, fallback: &str) -> String {
	IdTokenClaims::decode(id_token)
		.ok()
		.and_then(|claims| claims.username().map(str::to_owned).ok())
		.unwrap_or_else(|| fallback.to_owned())
}
