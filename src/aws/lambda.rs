//! Default invoker for the remote dashboard function.

// self
use crate::{
	_prelude::*,
	aws::{self, sigv4},
	error::InvokeError,
	http::AwsHttpClient,
	pipeline::{FunctionInvoker, SessionCredentials, StageFuture},
	provider::{ServiceDescriptor, ServiceDescriptorError},
};

const SERVICE: &str = "lambda";
const CONTENT_TYPE_JSON: &str = "application/json";

/// Invoker that posts a SigV4-signed request to the configured function's invocation path.
///
/// The response body is the function's payload, returned raw; decoding belongs to the
/// facade. An empty body is an explicit error distinct from a decode failure.
#[derive(Clone)]
pub struct LambdaInvoker {
	descriptor: ServiceDescriptor,
	http: AwsHttpClient,
}
impl LambdaInvoker {
	/// Creates an invoker for the provided descriptor and transport.
	pub fn new(descriptor: ServiceDescriptor, http: AwsHttpClient) -> Self {
		Self { descriptor, http }
	}

	fn invocation_url(&self) -> Result<Url, ServiceDescriptorError> {
		self.descriptor
			.endpoints
			.invocation
			.join(&format!("2015-03-31/functions/{}/invocations", self.descriptor.function_name))
			.map_err(|source| ServiceDescriptorError::InvalidEndpoint {
				endpoint: "invocation",
				source,
			})
	}
}
impl FunctionInvoker for LambdaInvoker {
	fn invoke<'a>(
		&'a self,
		credentials: &'a SessionCredentials,
		payload: &'a [u8],
	) -> StageFuture<'a, Vec<u8>> {
		Box::pin(async move {
			let url = self.invocation_url().map_err(crate::error::ConfigError::from)?;
			let session_token = credentials.session_token.expose();
			let mut headers = sigv4::sign(&sigv4::SigningParams {
				method: "POST",
				url: &url,
				region: &self.descriptor.region,
				service: SERVICE,
				payload,
				access_key_id: &credentials.access_key_id,
				secret_access_key: credentials.secret_access_key.expose(),
				session_token: (!session_token.is_empty()).then_some(session_token),
				timestamp: OffsetDateTime::now_utc(),
			});

			headers.push(("content-type".to_owned(), CONTENT_TYPE_JSON.to_owned()));

			let response =
				self.http.post_signed(url, headers, payload.to_vec()).await.map_err(Error::from)?;

			if !response.is_success() {
				let (code, message) = aws::service_rejection(&response.body);

				return Err(InvokeError::Rejected { code, message }.into());
			}
			if response.body.is_empty() {
				return Err(InvokeError::EmptyPayload.into());
			}

			Ok(response.body)
		})
	}
}
