use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Authenticated identity as issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user_id: String,
    email: Option<String>,
    id_token: String,
    refresh_token: String,
    // seconds, as reported by the provider
    expires_in: u64,
    provider_id: String,
}

impl Session {
    pub fn new(
        user_id: String,
        email: Option<String>,
        id_token: String,
        refresh_token: String,
        expires_in: u64,
        provider_id: String,
    ) -> Self {
        Self {
            user_id,
            email,
            id_token,
            refresh_token,
            expires_in,
            provider_id,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn id_token(&self) -> &str {
        &self.id_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }
}

/// Read side of the session state, consulted for a single flag.
pub trait SessionObserver {
    fn is_authenticated(&self) -> bool;
}

/// Write side of the session state. The auth client publishes here after
/// every successful sign-in, sign-up or sign-out.
pub trait SessionSink {
    fn publish(&self, session: Option<Session>);
}

/// Plain in-memory session holder for non-reactive hosts.
#[derive(Debug, Clone, Default)]
pub struct SessionCell {
    inner: Rc<RefCell<Option<Session>>>,
}

impl SessionCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.borrow().clone()
    }
}

impl SessionObserver for SessionCell {
    fn is_authenticated(&self) -> bool {
        self.inner.borrow().is_some()
    }
}

impl SessionSink for SessionCell {
    fn publish(&self, session: Option<Session>) {
        *self.inner.borrow_mut() = session;
    }
}
