//! Dashboard pipeline: authenticate if needed, exchange credentials, invoke, decode.

// self
use crate::{
	_prelude::*,
	auth::{IdTokenClaims, TokenBundle},
	error::{ConfigError, DecodeError},
	flows::Bridge,
	obs::{StageKind, StageSpan},
};

const CLIENT_TYPE: &str = "WEB_APP";
const CLIENT_VERSION: &str = "0.2.3";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InvokeRequestBody<'a> {
	user_id: &'a str,
	client_type: &'static str,
	client_version: &'static str,
}

impl Bridge {
	/// Runs the full pipeline and returns the decoded dashboard payload.
	///
	/// The payload is returned as an untyped JSON value; the client does not validate it
	/// against the dashboard schema. See [`crate::dashboard`] for the documented shape.
	pub async fn get_dashboard(&self) -> Result<JsonValue> {
		let tokens = self.login().await?;

		self.invoke_dashboard(tokens.id_token().expose()).await
	}

	/// Returns the identical dashboard payload.
	///
	/// Despite the name, no pool-specific filtering exists; this is a straight alias of
	/// [`Bridge::get_dashboard`] and is kept that way deliberately.
	pub async fn get_pools(&self) -> Result<JsonValue> {
		self.get_dashboard().await
	}

	/// Resolves the cached token bundle, logging in on first use.
	///
	/// The short-circuit is unconditional: while a bundle is present it is reused for the
	/// lifetime of this instance, with no expiration or revocation check.
	async fn login(&self) -> Result<TokenBundle> {
		if let Some(tokens) = self.tokens.lock().clone() {
			return Ok(tokens);
		}

		let span = StageSpan::new(StageKind::Login);
		let tokens = span.instrument(self.authenticator.authenticate(&self.credentials)).await?;

		*self.tokens.lock() = Some(tokens.clone());

		Ok(tokens)
	}

	async fn invoke_dashboard(&self, id_token: &str) -> Result<JsonValue> {
		let span = StageSpan::new(StageKind::Exchange);
		let session = span.instrument(self.exchanger.exchange(id_token)).await?;
		let user_id = self.derived_user_id(id_token)?;
		let body = InvokeRequestBody {
			user_id: &user_id,
			client_type: CLIENT_TYPE,
			client_version: CLIENT_VERSION,
		};
		let payload =
			serde_json::to_vec(&body).map_err(|source| ConfigError::EncodeBody { source })?;
		let span = StageSpan::new(StageKind::Invoke);
		let response = span.instrument(self.invoker.invoke(&session, &payload)).await?;

		decode_payload(response)
	}

	/// Derives the caller identifier from the identity token's claims.
	///
	/// Claims are decoded on every invocation, but the derived identifier is cached
	/// sticky: once set it is reused even when a later call presents a different token.
	/// Preserved observable behavior; do not "fix" without changing the caching contract.
	fn derived_user_id(&self, id_token: &str) -> Result<String> {
		let claims = IdTokenClaims::decode(id_token)?;
		let user_id = claims.username()?;
		let user_id = self.cached_user_id.lock().get_or_insert_with(|| user_id.to_owned()).clone();

		Ok(user_id)
	}
}

fn decode_payload(response: Vec<u8>) -> Result<JsonValue> {
	let text = String::from_utf8(response).map_err(DecodeError::from)?;
	let mut deserializer = serde_json::Deserializer::from_str(&text);
	let value = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| DecodeError::Json { source })?;

	Ok(value)
}
