use std::fmt;

use url::Url;

use crate::error::{AuthError, ConfigError};

pub const DEFAULT_IDENTITY_BASE_URL: &str =
    "https://identitytoolkit.googleapis.com/v1/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    SignInWithPassword,
    SignUp,
    CreateAuthUri,
    SignInWithIdp,
}

impl Method {
    fn path(&self) -> &'static str {
        match self {
            Method::SignInWithPassword => "accounts:signInWithPassword",
            Method::SignUp => "accounts:signUp",
            Method::CreateAuthUri => "accounts:createAuthUri",
            Method::SignInWithIdp => "accounts:signInWithIdp",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[derive(Debug, Clone)]
pub struct IdentityEndpoints {
    base_url: Url,
    api_key: String,
}

impl IdentityEndpoints {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
        })
    }

    pub fn url(&self, method: Method) -> Result<String, AuthError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::Invalid {
                key: "api_key".to_string(),
                details: "missing".to_string(),
            }
            .into());
        }
        // "./" keeps "accounts:" from being read as a URL scheme
        let mut url = self
            .base_url
            .join(&format!("./{}", method.path()))
            .map_err(|e| AuthError::Config(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url.to_string())
    }
}

pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, ConfigError> {
    let invalid = |details: String| ConfigError::Invalid {
        key: "identity_base_url".to_string(),
        details,
    };
    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
