//! The public facade that runs the three-stage pipeline.

pub mod dashboard;

// self
use crate::{
	_prelude::*,
	auth::{LoginCredentials, TokenBundle},
	pipeline::{Authenticator, CredentialExchanger, FunctionInvoker},
	provider::ServiceDescriptor,
};
#[cfg(feature = "reqwest")]
use crate::{
	aws::{CognitoAuthenticator, CognitoFederation, LambdaInvoker},
	http::AwsHttpClient,
};

/// Coordinates the login → credential-exchange → invocation pipeline for one user.
///
/// The bridge owns the service descriptor, the validated login credentials, and the three
/// stage capabilities, so the flow implementation can stay focused on sequencing and the
/// two cached fields: the token bundle (reused unconditionally once present) and the
/// derived user identifier (sticky across tokens). Instances are fully independent; there
/// is no process-wide shared state.
pub struct Bridge {
	/// Service descriptor shared by every stage.
	pub descriptor: ServiceDescriptor,
	credentials: LoginCredentials,
	authenticator: Arc<dyn Authenticator>,
	exchanger: Arc<dyn CredentialExchanger>,
	invoker: Arc<dyn FunctionInvoker>,
	tokens: Mutex<Option<TokenBundle>>,
	cached_user_id: Mutex<Option<String>>,
}
impl Bridge {
	/// Creates a bridge that runs caller-provided stage implementations.
	///
	/// This is the seam tests use to substitute fakes; production callers normally go
	/// through [`Bridge::new`].
	pub fn with_stages(
		descriptor: ServiceDescriptor,
		username: impl Into<String>,
		password: impl Into<String>,
		authenticator: Arc<dyn Authenticator>,
		exchanger: Arc<dyn CredentialExchanger>,
		invoker: Arc<dyn FunctionInvoker>,
	) -> Result<Self> {
		let credentials = LoginCredentials::new(username, password)?;

		Ok(Self {
			descriptor,
			credentials,
			authenticator,
			exchanger,
			invoker,
			tokens: Mutex::new(None),
			cached_user_id: Mutex::new(None),
		})
	}

	/// Returns the login credentials the bridge was constructed with.
	pub fn credentials(&self) -> &LoginCredentials {
		&self.credentials
	}
}
#[cfg(feature = "reqwest")]
impl Bridge {
	/// Creates a bridge wired to the default reqwest-backed stages.
	///
	/// The bridge provisions its own transport; use [`Bridge::with_http_client`] to share a
	/// preconfigured client across stages instead.
	pub fn new(
		descriptor: ServiceDescriptor,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Result<Self> {
		Self::with_http_client(descriptor, username, password, AwsHttpClient::default())
	}

	/// Creates a bridge whose default stages all ride the provided transport.
	pub fn with_http_client(
		descriptor: ServiceDescriptor,
		username: impl Into<String>,
		password: impl Into<String>,
		http: AwsHttpClient,
	) -> Result<Self> {
		let authenticator =
			Arc::new(CognitoAuthenticator::new(descriptor.clone(), http.clone()));
		let exchanger = Arc::new(CognitoFederation::new(descriptor.clone(), http.clone()));
		let invoker = Arc::new(LambdaInvoker::new(descriptor.clone(), http));

		Self::with_stages(descriptor, username, password, authenticator, exchanger, invoker)
	}
}
impl Debug for Bridge {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Bridge")
			.field("descriptor", &self.descriptor)
			.field("credentials", &self.credentials)
			.field("tokens_cached", &self.tokens.lock().is_some())
			.field("cached_user_id", &*self.cached_user_id.lock())
			.finish()
	}
}
