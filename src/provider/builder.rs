// self
use crate::{
	_prelude::*,
	provider::{ServiceDescriptor, ServiceEndpoints},
};

const DEFAULT_REGION: &str = "us-west-2";
const DEFAULT_USER_POOL_ID: &str = "us-west-2_icsnuWQWw";
const DEFAULT_CLIENT_ID: &str = "7pk5du7fitqb419oabb3r92lni";
const DEFAULT_IDENTITY_POOL_ID: &str = "us-west-2:691e3287-5776-40f2-a502-759de65a8f1c";
const DEFAULT_FUNCTION_NAME: &str = "prod-getDashboardView";

/// Errors raised while constructing or validating descriptors.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ServiceDescriptorError {
	/// A required identifier field was left blank.
	#[error("Descriptor field `{field}` must not be blank.")]
	BlankField {
		/// Which field failed validation.
		field: &'static str,
	},
	/// A derived endpoint URL could not be parsed from the region.
	#[error("The {endpoint} endpoint could not be derived from the region.")]
	InvalidEndpoint {
		/// Which endpoint failed to parse.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Builder for [`ServiceDescriptor`] values.
///
/// Every field starts out at the production WaterGuru value, so
/// `ServiceDescriptor::builder().build()` yields the stock configuration and tests only
/// override what they need.
#[derive(Clone, Debug)]
pub struct ServiceDescriptorBuilder {
	/// Provider region.
	pub region: String,
	/// User-directory identifier.
	pub user_pool_id: String,
	/// Directory app-client identifier.
	pub client_id: String,
	/// Identity-pool identifier.
	pub identity_pool_id: String,
	/// Remote function name.
	pub function_name: String,
	/// Optional user-directory endpoint override.
	pub user_directory_endpoint: Option<Url>,
	/// Optional federation endpoint override.
	pub federation_endpoint: Option<Url>,
	/// Optional invocation endpoint override.
	pub invocation_endpoint: Option<Url>,
}
impl ServiceDescriptorBuilder {
	/// Overrides the provider region.
	pub fn region(mut self, region: impl Into<String>) -> Self {
		self.region = region.into();

		self
	}

	/// Overrides the user-directory identifier.
	pub fn user_pool_id(mut self, user_pool_id: impl Into<String>) -> Self {
		self.user_pool_id = user_pool_id.into();

		self
	}

	/// Overrides the directory app-client identifier.
	pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = client_id.into();

		self
	}

	/// Overrides the identity-pool identifier.
	pub fn identity_pool_id(mut self, identity_pool_id: impl Into<String>) -> Self {
		self.identity_pool_id = identity_pool_id.into();

		self
	}

	/// Overrides the remote function name.
	pub fn function_name(mut self, function_name: impl Into<String>) -> Self {
		self.function_name = function_name.into();

		self
	}

	/// Overrides the user-directory endpoint instead of deriving it from the region.
	pub fn user_directory_endpoint(mut self, url: Url) -> Self {
		self.user_directory_endpoint = Some(url);

		self
	}

	/// Overrides the federation endpoint instead of deriving it from the region.
	pub fn federation_endpoint(mut self, url: Url) -> Self {
		self.federation_endpoint = Some(url);

		self
	}

	/// Overrides the invocation endpoint instead of deriving it from the region.
	pub fn invocation_endpoint(mut self, url: Url) -> Self {
		self.invocation_endpoint = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ServiceDescriptor, ServiceDescriptorError> {
		validate_field("region", &self.region)?;
		validate_field("user_pool_id", &self.user_pool_id)?;
		validate_field("client_id", &self.client_id)?;
		validate_field("identity_pool_id", &self.identity_pool_id)?;
		validate_field("function_name", &self.function_name)?;

		let user_directory = resolve_endpoint(
			"user-directory",
			self.user_directory_endpoint,
			&format!("https://cognito-idp.{}.amazonaws.com/", self.region),
		)?;
		let federation = resolve_endpoint(
			"federation",
			self.federation_endpoint,
			&format!("https://cognito-identity.{}.amazonaws.com/", self.region),
		)?;
		let invocation = resolve_endpoint(
			"invocation",
			self.invocation_endpoint,
			&format!("https://lambda.{}.amazonaws.com/", self.region),
		)?;

		Ok(ServiceDescriptor {
			region: self.region,
			user_pool_id: self.user_pool_id,
			client_id: self.client_id,
			identity_pool_id: self.identity_pool_id,
			function_name: self.function_name,
			endpoints: ServiceEndpoints { user_directory, federation, invocation },
		})
	}
}
impl Default for ServiceDescriptorBuilder {
	fn default() -> Self {
		Self {
			region: DEFAULT_REGION.into(),
			user_pool_id: DEFAULT_USER_POOL_ID.into(),
			client_id: DEFAULT_CLIENT_ID.into(),
			identity_pool_id: DEFAULT_IDENTITY_POOL_ID.into(),
			function_name: DEFAULT_FUNCTION_NAME.into(),
			user_directory_endpoint: None,
			federation_endpoint: None,
			invocation_endpoint: None,
		}
	}
}

fn validate_field(field: &'static str, value: &str) -> Result<(), ServiceDescriptorError> {
	if value.trim().is_empty() {
		Err(ServiceDescriptorError::BlankField { field })
	} else {
		Ok(())
	}
}

fn resolve_endpoint(
	name: &'static str,
	supplied: Option<Url>,
	derived: &str,
) -> Result<Url, ServiceDescriptorError> {
	let url = match supplied {
		Some(url) => url,
		None => Url::parse(derived)
			.map_err(|source| ServiceDescriptorError::InvalidEndpoint { endpoint: name, source })?,
	};

	if url.scheme() != "https" {
		return Err(ServiceDescriptorError::InsecureEndpoint { endpoint: name, url: url.into() });
	}

	Ok(url)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_match_the_production_deployment() {
		let descriptor =
			ServiceDescriptor::builder().build().expect("Default descriptor should build.");

		assert_eq!(descriptor.region, "us-west-2");
		assert_eq!(descriptor.user_pool_id, "us-west-2_icsnuWQWw");
		assert_eq!(descriptor.client_id, "7pk5du7fitqb419oabb3r92lni");
		assert_eq!(descriptor.identity_pool_id, "us-west-2:691e3287-5776-40f2-a502-759de65a8f1c");
		assert_eq!(descriptor.function_name, "prod-getDashboardView");
		assert_eq!(
			descriptor.endpoints.user_directory.as_str(),
			"https://cognito-idp.us-west-2.amazonaws.com/",
		);
		assert_eq!(
			descriptor.endpoints.federation.as_str(),
			"https://cognito-identity.us-west-2.amazonaws.com/",
		);
		assert_eq!(
			descriptor.endpoints.invocation.as_str(),
			"https://lambda.us-west-2.amazonaws.com/",
		);
	}

	#[test]
	fn blank_fields_are_rejected() {
		let err = ServiceDescriptor::builder()
			.function_name("  ")
			.build()
			.expect_err("Blank function name should be rejected.");

		assert!(matches!(err, ServiceDescriptorError::BlankField { field: "function_name" }));
	}

	#[test]
	fn insecure_endpoint_overrides_are_rejected() {
		let url = Url::parse("http://localhost:9999/").expect("Test URL should parse.");
		let err = ServiceDescriptor::builder()
			.federation_endpoint(url)
			.build()
			.expect_err("Plain-HTTP endpoints should be rejected.");

		assert!(matches!(err, ServiceDescriptorError::InsecureEndpoint { endpoint: "federation", .. }));
	}

	#[test]
	fn region_override_rederives_endpoints() {
		let descriptor = ServiceDescriptor::builder()
			.region("eu-central-1")
			.build()
			.expect("Region override should build.");

		assert_eq!(
			descriptor.endpoints.invocation.as_str(),
			"https://lambda.eu-central-1.amazonaws.com/",
		);
		assert!(descriptor.login_provider_key().starts_with("cognito-idp.eu-central-1."));
	}
}
