//! Sign-in flow for browser login forms.
//!
//! The form talks to an [`AuthClient`] through a [`SignInController`], which
//! keeps at most one request in flight and maps every result onto a
//! [`SignInPhase`]. Session state is published by the client and observed by
//! the surrounding application; the form only reads a single flag.

pub(crate) mod client;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod flow;
pub(crate) mod session;

pub mod identity;
pub mod routes;

pub use client::{
    AuthClient, AuthResult, MisconfiguredClient, OAuthProvider,
};
pub use config::AuthConfig;
pub use error::{AuthError, ConfigError, FormError};
pub use flow::{
    Credentials, Liveness, PhaseStore, SignInController, SignInPhase,
    SubmitOutcome, CONFIRM_PASSWORD_FIELD, EMAIL_FIELD, PASSWORD_FIELD,
};
pub use session::{Session, SessionCell, SessionObserver, SessionSink};
