use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// OAuth sign-in that left the page and still has to be completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOAuth {
    provider_id: String,
    session_id: String,
}

impl PendingOAuth {
    pub fn new(provider_id: &str, session_id: &str) -> Self {
        Self {
            provider_id: provider_id.to_string(),
            session_id: session_id.to_string(),
        }
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

/// Page-level facilities needed by redirect based OAuth.
pub trait RedirectHost {
    /// Scheme, host and port of the current page.
    fn origin(&self) -> Result<String, AuthError>;

    /// Full URL of the current page, including the provider's response.
    fn current_url(&self) -> Result<String, AuthError>;

    /// Leaves the page for `url`.
    fn redirect_to(&self, url: &str) -> Result<(), AuthError>;

    fn save_pending(&self, pending: &PendingOAuth) -> Result<(), AuthError>;

    fn has_pending(&self) -> bool;

    /// Removes and returns the pending record.
    fn take_pending(&self) -> Option<PendingOAuth>;
}
