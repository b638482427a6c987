mod controller;
mod credentials;
mod liveness;
mod phase;

pub use controller::{SignInController, SubmitOutcome};
pub use credentials::{
    Credentials, CONFIRM_PASSWORD_FIELD, EMAIL_FIELD, PASSWORD_FIELD,
};
pub use liveness::Liveness;
pub use phase::{PhaseStore, SignInPhase};
