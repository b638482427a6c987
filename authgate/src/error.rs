use std::error::Error;
use std::fmt;

/// Failure of a sign-in, sign-up or sign-out call.
///
/// Every variant carries the human readable text that ends up in front of
/// the user. The variant only exists so logs can tell the cause apart; the
/// form renders [`AuthError::message`] for all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    Provider(String),
    Transport(String),
    Redirect(String),
    Config(String),
}

impl AuthError {
    pub fn message(&self) -> &str {
        match self {
            AuthError::Provider(s)
            | AuthError::Transport(s)
            | AuthError::Redirect(s)
            | AuthError::Config(s) => s,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Provider(s) => write!(f, "ProviderError: {}", s),
            AuthError::Transport(s) => write!(f, "TransportError: {}", s),
            AuthError::Redirect(s) => write!(f, "RedirectError: {}", s),
            AuthError::Config(s) => write!(f, "ConfigError: {}", s),
        }
    }
}

impl Error for AuthError {}

impl From<ConfigError> for AuthError {
    fn from(error: ConfigError) -> Self {
        AuthError::Config(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Required { field: String },
    Mismatch { field: String },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Required { field } => {
                write!(f, "{} is required", field)
            }
            FormError::Mismatch { field } => {
                write!(f, "{} does not match", field)
            }
        }
    }
}

impl Error for FormError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid { key: String, details: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(s) => write!(f, "Invalid configuration: {}", s),
            ConfigError::Invalid { key, details } => {
                write!(f, "Invalid configuration: {} - {}", key, details)
            }
        }
    }
}

impl Error for ConfigError {}

impl From<serde_yaml::Error> for ConfigError {
    fn from(error: serde_yaml::Error) -> Self {
        ConfigError::Parse(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_verbatim_for_every_variant() {
        let errors = vec![
            AuthError::Provider("INVALID_CREDENTIALS".to_string()),
            AuthError::Transport("INVALID_CREDENTIALS".to_string()),
            AuthError::Redirect("INVALID_CREDENTIALS".to_string()),
            AuthError::Config("INVALID_CREDENTIALS".to_string()),
        ];
        for error in errors {
            assert_eq!(error.message(), "INVALID_CREDENTIALS");
        }
    }

    #[test]
    fn test_display_carries_kind() {
        let error = AuthError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "TransportError: connection refused");
    }
}
