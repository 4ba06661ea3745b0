//! Thin reqwest wrapper shared by the default AWS-backed stages.
//!
//! The wrapper keeps the crate's HTTP behavior in one place: target-header JSON calls for
//! the directory and federation services, and pre-signed posts for the invocation service.
//! No redirects are followed and no retries happen here; a hung call hangs the pipeline
//! until the caller imposes its own timeout.

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

const HEADER_CONTENT_TYPE: &str = "content-type";
const HEADER_TARGET: &str = "x-amz-target";
const CONTENT_TYPE_AMZ_JSON: &str = "application/x-amz-json-1.1";

/// Raw response surface handed back to the stages: HTTP status plus body bytes.
///
/// The stages own all status interpretation; the wrapper never turns a non-2xx status into
/// an error on its own.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Default)]
pub struct AwsHttpClient(pub ReqwestClient);
impl AwsHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Issues a target-header JSON call against a service endpoint.
	pub(crate) async fn post_target(
		&self,
		endpoint: &Url,
		target: &str,
		body: Vec<u8>,
	) -> Result<RawResponse, TransportError> {
		let response = self
			.0
			.post(endpoint.clone())
			.header(HEADER_CONTENT_TYPE, CONTENT_TYPE_AMZ_JSON)
			.header(HEADER_TARGET, target)
			.body(body)
			.send()
			.await?;

		Self::collect(response).await
	}

	/// Sends a pre-signed POST with explicit headers (used by the invocation stage).
	pub(crate) async fn post_signed(
		&self,
		url: Url,
		headers: Vec<(String, String)>,
		body: Vec<u8>,
	) -> Result<RawResponse, TransportError> {
		let mut request = self.0.post(url);

		for (name, value) in headers {
			request = request.header(name, value);
		}

		let response = request.body(body).send().await?;

		Self::collect(response).await
	}

	async fn collect(response: reqwest::Response) -> Result<RawResponse, TransportError> {
		let status = response.status().as_u16();
		let body = response.bytes().await?.to_vec();

		Ok(RawResponse { status, body })
	}
}
impl AsRef<ReqwestClient> for AwsHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for AwsHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
