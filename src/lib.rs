//! Credential-bridging client for the WaterGuru pool monitoring service—Cognito login,
//! identity-pool federation, and Lambda invocation in one linear pipeline.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod aws;
pub mod dashboard;
pub mod error;
pub mod flows;
#[cfg(feature = "reqwest")] pub mod http;
pub mod obs;
pub mod pipeline;
pub mod provider;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience fixtures and stage stubs for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// crates.io
	use base64::{Engine, engine::general_purpose::STANDARD};
	// self
	use crate::{
		auth::{LoginCredentials, TokenBundle},
		pipeline::{Authenticator, CredentialExchanger, FunctionInvoker, SessionCredentials},
	};
	#[cfg(feature = "reqwest")] use crate::http::AwsHttpClient;

	/// Builds a three-segment identity token whose claims segment encodes `claims` the way the
	/// hosted directory does (base64 JSON between two opaque segments).
	pub fn fake_identity_token(claims: &JsonValue) -> String {
		let encoded = STANDARD.encode(claims.to_string());

		format!("header.{encoded}.signature")
	}

	/// Builds an HTTP wrapper that accepts the self-signed certificates produced by `httpmock`
	/// during tests.
	#[cfg(feature = "reqwest")]
	pub fn test_http_client() -> AwsHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		AwsHttpClient::with_client(client)
	}

	/// Authenticator stub that resolves a fixed token bundle and counts login attempts.
	pub struct StubAuthenticator {
		bundle: TokenBundle,
		/// Number of times `authenticate` has been called.
		pub calls: AtomicUsize,
	}
	impl StubAuthenticator {
		/// Wraps the bundle every login will resolve to.
		pub fn new(bundle: TokenBundle) -> Self {
			Self { bundle, calls: AtomicUsize::new(0) }
		}

		/// Returns how many logins the stub has served.
		pub fn login_count(&self) -> usize {
			self.calls.load(Ordering::SeqCst)
		}
	}
	impl Authenticator for StubAuthenticator {
		fn authenticate<'a>(
			&'a self,
			_credentials: &'a LoginCredentials,
		) -> crate::pipeline::StageFuture<'a, TokenBundle> {
			self.calls.fetch_add(1, Ordering::SeqCst);

			let bundle = self.bundle.clone();

			Box::pin(async move { Ok(bundle) })
		}
	}

	/// Exchanger stub that hands out placeholder session credentials without any remote calls.
	#[derive(Debug, Default)]
	pub struct StubExchanger;
	impl CredentialExchanger for StubExchanger {
		fn exchange<'a>(
			&'a self,
			_id_token: &'a str,
		) -> crate::pipeline::StageFuture<'a, SessionCredentials> {
			Box::pin(async move {
				Ok(SessionCredentials::new("stub-access-key", "stub-secret-key", "stub-session"))
			})
		}
	}

	/// Invoker stub that returns canned bytes and records every payload it receives.
	pub struct StubInvoker {
		response: Vec<u8>,
		/// Payloads captured across invocations, oldest first.
		pub payloads: Mutex<Vec<Vec<u8>>>,
	}
	impl StubInvoker {
		/// Wraps the raw bytes every invocation will return.
		pub fn new(response: impl Into<Vec<u8>>) -> Self {
			Self { response: response.into(), payloads: Mutex::new(Vec::new()) }
		}

		/// Returns a copy of the captured payloads.
		pub fn captured(&self) -> Vec<Vec<u8>> {
			self.payloads.lock().clone()
		}
	}
	impl FunctionInvoker for StubInvoker {
		fn invoke<'a>(
			&'a self,
			_credentials: &'a SessionCredentials,
			payload: &'a [u8],
		) -> crate::pipeline::StageFuture<'a, Vec<u8>> {
			self.payloads.lock().push(payload.to_vec());

			let response = self.response.clone();

			Box::pin(async move { Ok(response) })
		}
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value as JsonValue;
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {httpmock as _, tokio as _};
