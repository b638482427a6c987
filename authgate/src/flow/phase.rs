use std::cell::RefCell;
use std::rc::Rc;

use crate::error::AuthError;

/// Submission state of a single form instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SignInPhase {
    #[default]
    Idle,
    Submitting {
        attempt: u64,
    },
    /// The last attempt succeeded. The form stays locked until it unmounts,
    /// since success means the page is about to leave it.
    Completed,
    Failed {
        message: String,
    },
}

impl SignInPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            SignInPhase::Submitting { .. } | SignInPhase::Completed
        )
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SignInPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Next phase when a submit is requested, `None` while one is in flight
    /// or after one succeeded. Starting a new attempt drops any previous
    /// error message.
    pub fn begin(&self, attempt: u64) -> Option<SignInPhase> {
        match self {
            SignInPhase::Submitting { .. } | SignInPhase::Completed => None,
            SignInPhase::Idle | SignInPhase::Failed { .. } => {
                Some(SignInPhase::Submitting { attempt })
            }
        }
    }

    /// Next phase once `attempt` resolved, `None` if that attempt is no
    /// longer the one in flight.
    pub fn resolve(
        &self,
        attempt: u64,
        result: &Result<(), AuthError>,
    ) -> Option<SignInPhase> {
        match self {
            SignInPhase::Submitting { attempt: current }
                if *current == attempt =>
            {
                Some(match result {
                    Ok(()) => SignInPhase::Completed,
                    Err(err) => SignInPhase::Failed {
                        message: err.message().to_string(),
                    },
                })
            }
            _ => None,
        }
    }
}

/// Where a controller keeps its phase. UI hosts back this with their own
/// reactive primitive so views re-render on every transition.
pub trait PhaseStore {
    fn load(&self) -> SignInPhase;
    fn store(&self, phase: SignInPhase);
}

impl PhaseStore for Rc<RefCell<SignInPhase>> {
    fn load(&self) -> SignInPhase {
        self.borrow().clone()
    }

    fn store(&self, phase: SignInPhase) {
        *self.borrow_mut() = phase;
    }
}
