use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};

use super::credentials::Credentials;
use super::liveness::Liveness;
use super::phase::{PhaseStore, SignInPhase};
use crate::client::{AuthClient, OAuthProvider};
use crate::error::{AuthError, FormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another request was in flight, nothing was sent.
    Skipped,
    Succeeded,
    Failed,
    /// The request resolved after the owning view went away, or after a
    /// newer attempt took over. The result was dropped.
    Discarded,
}

/// Guards an [`AuthClient`] so a form never has more than one request in
/// flight, and turns every result into a [`SignInPhase`] transition.
pub struct SignInController<S> {
    client: Rc<dyn AuthClient>,
    phase: S,
    liveness: Liveness,
    attempts: Rc<Cell<u64>>,
}

impl<S: Clone> Clone for SignInController<S> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
            phase: self.phase.clone(),
            liveness: self.liveness.clone(),
            attempts: Rc::clone(&self.attempts),
        }
    }
}

impl<S: PhaseStore> SignInController<S> {
    pub fn new(
        client: Rc<dyn AuthClient>,
        phase: S,
        liveness: Liveness,
    ) -> Self {
        Self {
            client,
            phase,
            liveness,
            attempts: Rc::new(Cell::new(0)),
        }
    }

    pub fn phase(&self) -> SignInPhase {
        self.phase.load()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.load().is_submitting()
    }

    pub fn error_message(&self) -> Option<String> {
        self.phase.load().error_message().map(String::from)
    }

    pub fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    pub fn client(&self) -> Rc<dyn AuthClient> {
        Rc::clone(&self.client)
    }

    /// Shows a form validation error. Ignored while a request is in flight.
    pub fn reject(&self, error: &FormError) {
        if !self.liveness.is_alive() || self.is_submitting() {
            return;
        }
        self.phase.store(SignInPhase::Failed {
            message: error.to_string(),
        });
    }

    pub async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> SubmitOutcome {
        let Some(attempt) = self.begin() else {
            return SubmitOutcome::Skipped;
        };
        let result = self
            .client
            .sign_in_with_password(credentials.email(), credentials.password())
            .await;
        self.finish(attempt, result)
    }

    pub async fn sign_in_with_oauth(
        &self,
        provider: OAuthProvider,
    ) -> SubmitOutcome {
        let Some(attempt) = self.begin() else {
            return SubmitOutcome::Skipped;
        };
        let result = self.client.sign_in_with_oauth(provider).await;
        self.finish(attempt, result)
    }

    pub async fn complete_oauth_redirect(&self) -> SubmitOutcome {
        let Some(attempt) = self.begin() else {
            return SubmitOutcome::Skipped;
        };
        let result = self.client.complete_oauth_redirect().await;
        self.finish(attempt, result)
    }

    pub async fn sign_up_with_password(
        &self,
        credentials: &Credentials,
    ) -> SubmitOutcome {
        let Some(attempt) = self.begin() else {
            return SubmitOutcome::Skipped;
        };
        let result = self
            .client
            .sign_up_with_password(credentials.email(), credentials.password())
            .await;
        self.finish(attempt, result)
    }

    fn begin(&self) -> Option<u64> {
        if !self.liveness.is_alive() {
            return None;
        }
        let attempt = self.attempts.get() + 1;
        match self.phase.load().begin(attempt) {
            Some(next) => {
                self.attempts.set(attempt);
                self.phase.store(next);
                Some(attempt)
            }
            None => {
                debug!("Sign-in already in flight, ignoring submit");
                None
            }
        }
    }

    fn finish(
        &self,
        attempt: u64,
        result: Result<(), AuthError>,
    ) -> SubmitOutcome {
        if !self.liveness.is_alive() {
            debug!("Dropping sign-in result {}: view was torn down", attempt);
            return SubmitOutcome::Discarded;
        }
        let Some(next) = self.phase.load().resolve(attempt, &result) else {
            debug!("Dropping sign-in result {}: attempt is stale", attempt);
            return SubmitOutcome::Discarded;
        };
        self.phase.store(next);
        match result {
            Ok(()) => SubmitOutcome::Succeeded,
            Err(err) => {
                warn!("Sign-in failed: {}", err);
                SubmitOutcome::Failed
            }
        }
    }
}
