use std::fmt;

use futures::future::LocalBoxFuture;

use crate::error::AuthError;

pub type AuthResult<'a> = LocalBoxFuture<'a, Result<(), AuthError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
}

impl OAuthProvider {
    /// Provider id as understood by the identity provider.
    pub fn provider_id(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google.com",
        }
    }

    pub fn from_provider_id(provider_id: &str) -> Option<Self> {
        match provider_id {
            "google.com" => Some(OAuthProvider::Google),
            _ => None,
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OAuthProvider::Google => write!(f, "Google"),
        }
    }
}

/// Identity provider surface used by the sign-in forms.
///
/// Calls are single-shot: no retries happen behind them. A successful call
/// returns nothing to the caller; the new session state is published to the
/// client's [`SessionSink`](crate::SessionSink) instead, and whoever observes
/// that state reacts to it.
pub trait AuthClient {
    fn sign_in_with_password<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthResult<'a>;

    /// Starts an OAuth sign-in. For redirect based providers, success means
    /// the browser is leaving the page.
    fn sign_in_with_oauth(&self, provider: OAuthProvider) -> AuthResult<'_>;

    /// Finishes an OAuth sign-in after the provider redirected back.
    /// Resolves to `Ok(())` without doing anything when none is pending.
    fn complete_oauth_redirect(&self) -> AuthResult<'_>;

    /// True when an OAuth sign-in was started and awaits completion.
    fn has_pending_oauth(&self) -> bool;

    fn sign_up_with_password<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthResult<'a>;

    fn sign_out(&self);
}

/// Stand-in used when no working client could be built. Every call fails
/// with the error that prevented it.
pub struct MisconfiguredClient {
    error: AuthError,
}

impl MisconfiguredClient {
    pub fn new(error: AuthError) -> Self {
        Self { error }
    }

    fn fail(&self) -> AuthResult<'_> {
        let error = self.error.clone();
        Box::pin(async move { Err(error) })
    }
}

impl AuthClient for MisconfiguredClient {
    fn sign_in_with_password<'a>(
        &'a self,
        _email: &'a str,
        _password: &'a str,
    ) -> AuthResult<'a> {
        self.fail()
    }

    fn sign_in_with_oauth(&self, _provider: OAuthProvider) -> AuthResult<'_> {
        self.fail()
    }

    fn complete_oauth_redirect(&self) -> AuthResult<'_> {
        Box::pin(async { Ok(()) })
    }

    fn has_pending_oauth(&self) -> bool {
        false
    }

    fn sign_up_with_password<'a>(
        &'a self,
        _email: &'a str,
        _password: &'a str,
    ) -> AuthResult<'a> {
        self.fail()
    }

    fn sign_out(&self) {}
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn test_provider_id_round_trip() {
        let provider = OAuthProvider::Google;
        assert_eq!(
            OAuthProvider::from_provider_id(provider.provider_id()),
            Some(provider)
        );
        assert_eq!(OAuthProvider::from_provider_id("github.com"), None);
    }

    #[test]
    fn test_misconfigured_client_reports_its_error() {
        let client = MisconfiguredClient::new(AuthError::Config(
            "Invalid configuration: api_key - missing".to_string(),
        ));
        let err = block_on(client.sign_in_with_password("a@b.c", "pw"))
            .unwrap_err();
        assert_eq!(err.message(), "Invalid configuration: api_key - missing");
        assert!(block_on(client.complete_oauth_redirect()).is_ok());
    }
}
