use log::warn;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::identity::{
    parse_base_url, IdentityEndpoints, DEFAULT_IDENTITY_BASE_URL,
};

/// Settings for talking to the identity provider.
///
/// Loaded from YAML; every key is optional:
///
/// ```yaml
/// api_key: "AIza..."
/// identity_base_url: "https://identitytoolkit.googleapis.com/v1/"
/// oauth_continue_url: "https://app.example.com/login"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    api_key: String,
    identity_base_url: String,
    oauth_continue_url: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            identity_base_url: DEFAULT_IDENTITY_BASE_URL.to_string(),
            oauth_continue_url: None,
        }
    }
}

impl AuthConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // an empty document is valid and means defaults
        let config = if content.trim().is_empty() {
            AuthConfig::default()
        } else {
            serde_yaml::from_str::<AuthConfig>(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Applies values that take precedence over the file, typically baked in
    /// at build time. Empty strings count as unset.
    pub fn with_overrides(
        mut self,
        api_key: Option<&str>,
        identity_base_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(api_key) = api_key.filter(|s| !s.is_empty()) {
            self.api_key = api_key.to_string();
        }
        if let Some(url) = identity_base_url.filter(|s| !s.is_empty()) {
            self.identity_base_url = url.to_string();
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        parse_base_url(&self.identity_base_url)?;
        if let Some(url) = &self.oauth_continue_url {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(ConfigError::Invalid {
                    key: "oauth_continue_url".to_string(),
                    details: "must be an absolute http(s) URL".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn identity_base_url(&self) -> &str {
        &self.identity_base_url
    }

    pub fn oauth_continue_url(&self) -> Option<&str> {
        self.oauth_continue_url.as_deref()
    }

    pub fn endpoints(&self) -> Result<IdentityEndpoints, ConfigError> {
        if self.api_key.is_empty() {
            warn!("No api_key configured, sign-in requests will fail");
        }
        IdentityEndpoints::new(&self.identity_base_url, &self.api_key)
    }
}
