use authgate::{AuthConfig, ConfigError};

pub const PENDING_OAUTH_KEY: &str = "authgate:oauth-pending";

const AUTH_CONFIG: &str = include_str!("../authgate.yaml");

pub fn auth_config() -> Result<AuthConfig, ConfigError> {
    AuthConfig::from_yaml(AUTH_CONFIG)?.with_overrides(
        option_env!("AUTHGATE_API_KEY"),
        option_env!("AUTHGATE_IDENTITY_BASE_URL"),
    )
}
