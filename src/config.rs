use aws_config::{BehaviorVersion, Region, SdkConfig};
use std::env;

/// Client construction parameters.
///
/// Every field is optional: anything left unset is resolved by the SDK's default provider
/// chain (environment, shared config files, instance metadata). Credentials always come from
/// that chain.
///
/// ```rust
/// use dynamodb_paginate::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_region("us-west-2")
///     .with_endpoint_url("http://localhost:8000");
/// assert_eq!(config.target_display(), "local endpoint http://localhost:8000 (region us-west-2)");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClientConfig {
    /// Custom endpoint URL, e.g. a local DynamoDB.
    pub endpoint_url: Option<String>,
    /// Named profile from the shared config files.
    pub profile: Option<String>,
    /// AWS region.
    pub region: Option<String>,
}

impl ClientConfig {
    /// Read `AWS_ENDPOINT_URL`, `AWS_PROFILE` and `AWS_REGION`.
    pub fn from_env() -> Self {
        Self {
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            profile: env::var("AWS_PROFILE").ok(),
            region: env::var("AWS_REGION").ok(),
        }
    }

    /// Override the endpoint.
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Override the profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Override the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Human readable description of where requests will go.
    pub fn target_display(&self) -> String {
        let region = self.region.as_deref().unwrap_or("default");
        match &self.endpoint_url {
            Some(url) => format!("local endpoint {url} (region {region})"),
            None => format!("AWS DynamoDB (region {region})"),
        }
    }

    /// Resolve the SDK configuration with the overrides applied.
    pub async fn load(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        loader.load().await
    }
}
