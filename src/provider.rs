//! Service descriptor consumed by every pipeline stage.
//!
//! The original deployment compiled its identifiers in as constants; the descriptor keeps
//! the same values as defaults while letting callers override any of them, endpoints
//! included, at construction time.

/// Builder API for assembling service descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::_prelude::*;

/// Endpoint set the pipeline stages talk to.
///
/// Each URL is a base endpoint derived from the region by default; overriding them is how
/// the default stages get pointed at a local mock server in tests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoints {
	/// User-directory endpoint that performs the challenge-response login.
	pub user_directory: Url,
	/// Identity-federation endpoint that exchanges identity tokens for session credentials.
	pub federation: Url,
	/// Function-invocation endpoint that serves the dashboard payload.
	pub invocation: Url,
}

/// Immutable service descriptor consumed by the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
	/// Provider region the directory and pools live in.
	pub region: String,
	/// User-directory (user pool) identifier.
	pub user_pool_id: String,
	/// Directory app-client identifier used during login.
	pub client_id: String,
	/// Identity-pool identifier the credential exchange is scoped to.
	pub identity_pool_id: String,
	/// Name of the remote function serving the dashboard payload.
	pub function_name: String,
	/// Endpoint definitions the stages call.
	pub endpoints: ServiceEndpoints,
}
impl ServiceDescriptor {
	/// Creates a new builder seeded with the production WaterGuru defaults.
	pub fn builder() -> ServiceDescriptorBuilder {
		ServiceDescriptorBuilder::default()
	}

	/// Returns the login-provider key the federation service expects the identity token to
	/// be bound under. The format must match the directory's issuer exactly.
	pub fn login_provider_key(&self) -> String {
		format!("cognito-idp.{}.amazonaws.com/{}", self.region, self.user_pool_id)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn login_provider_key_combines_region_and_pool() {
		let descriptor =
			ServiceDescriptor::builder().build().expect("Default descriptor should build.");

		assert_eq!(
			descriptor.login_provider_key(),
			"cognito-idp.us-west-2.amazonaws.com/us-west-2_icsnuWQWw",
		);
	}
}
