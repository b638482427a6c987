use std::rc::Rc;

use authgate::identity::IdentityToolkitClient;
use authgate::{
    AuthClient, AuthConfig, AuthError, ConfigError, MisconfiguredClient,
    Session, SessionObserver, SessionSink,
};
use leptos::logging::error;
use leptos::*;

use crate::api::{BrowserHost, FetchTransport};
use crate::vars;

/// Reactive session holder. Reading the flag inside a view or effect
/// subscribes to it.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            session: create_rw_signal(None::<Session>),
        }
    }

    pub fn session(&self) -> Signal<Option<Session>> {
        self.session.into()
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for AuthContext {
    fn is_authenticated(&self) -> bool {
        self.session.with(|session| session.is_some())
    }
}

impl SessionSink for AuthContext {
    fn publish(&self, session: Option<Session>) {
        self.session.set(session);
    }
}

#[derive(Clone)]
pub struct GlobalState {
    auth: AuthContext,
    client: Rc<dyn AuthClient>,
}

impl GlobalState {
    pub fn new() -> Self {
        let auth = AuthContext::new();
        let client: Rc<dyn AuthClient> = match vars::auth_config()
            .and_then(|config| build_client(&config, auth))
        {
            Ok(client) => Rc::new(client),
            Err(err) => {
                error!("Error loading auth configuration: {}", err);
                Rc::new(MisconfiguredClient::new(AuthError::from(err)))
            }
        };
        Self { auth, client }
    }

    pub fn with_client(auth: AuthContext, client: Rc<dyn AuthClient>) -> Self {
        Self { auth, client }
    }

    pub fn auth(&self) -> AuthContext {
        self.auth
    }

    pub fn client(&self) -> Rc<dyn AuthClient> {
        Rc::clone(&self.client)
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

fn build_client(
    config: &AuthConfig,
    auth: AuthContext,
) -> Result<IdentityToolkitClient, ConfigError> {
    let client = IdentityToolkitClient::new(
        config.endpoints()?,
        Rc::new(FetchTransport),
        Rc::new(BrowserHost::default()),
        Rc::new(auth),
    )
    .with_continue_url(config.oauth_continue_url().map(String::from));
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            "uid-1".to_string(),
            Some("ada@example.com".to_string()),
            "id-token".to_string(),
            "refresh-token".to_string(),
            3600,
            "password".to_string(),
        )
    }

    #[test]
    fn test_publish_flips_flag() {
        let runtime = create_runtime();
        let auth = AuthContext::new();
        assert!(!auth.is_authenticated());

        auth.publish(Some(session()));
        assert!(auth.is_authenticated());
        assert_eq!(
            auth.session().get_untracked().map(|s| s.user_id().to_string()),
            Some("uid-1".to_string())
        );

        auth.publish(None);
        assert!(!auth.is_authenticated());
        runtime.dispose();
    }

    #[test]
    fn test_flag_is_reactive() {
        let runtime = create_runtime();
        let auth = AuthContext::new();
        let is_authenticated = create_memo(move |_| auth.is_authenticated());
        assert!(!is_authenticated.get_untracked());

        auth.publish(Some(session()));
        assert!(is_authenticated.get_untracked());

        auth.publish(None);
        assert!(!is_authenticated.get_untracked());
        runtime.dispose();
    }
}
