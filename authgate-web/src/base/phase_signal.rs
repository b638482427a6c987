use authgate::{PhaseStore, SignInPhase};
use leptos::*;

/// Keeps a form's [`SignInPhase`] in a signal so buttons and the error line
/// re-render on every transition.
#[derive(Clone, Copy)]
pub struct PhaseSignal(RwSignal<SignInPhase>);

impl PhaseSignal {
    pub fn new() -> Self {
        Self(create_rw_signal(SignInPhase::Idle))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let phase = self.0;
        Signal::derive(move || phase.with(|p| p.is_submitting()))
    }

    pub fn error_message(&self) -> Signal<Option<String>> {
        let phase = self.0;
        Signal::derive(move || {
            phase.with(|p| p.error_message().map(String::from))
        })
    }
}

impl Default for PhaseSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseStore for PhaseSignal {
    fn load(&self) -> SignInPhase {
        self.0.get_untracked()
    }

    fn store(&self, phase: SignInPhase) {
        self.0.set(phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_signals_follow_phase() {
        let runtime = create_runtime();
        let phase = PhaseSignal::new();
        let is_submitting = phase.is_submitting();
        let error_message = phase.error_message();

        phase.store(SignInPhase::Submitting { attempt: 1 });
        assert!(is_submitting.get_untracked());
        assert_eq!(error_message.get_untracked(), None);

        phase.store(SignInPhase::Completed);
        assert!(is_submitting.get_untracked());
        assert_eq!(error_message.get_untracked(), None);

        phase.store(SignInPhase::Failed {
            message: "INVALID_CREDENTIALS".to_string(),
        });
        assert!(!is_submitting.get_untracked());
        assert_eq!(
            error_message.get_untracked().as_deref(),
            Some("INVALID_CREDENTIALS")
        );
        runtime.dispose();
    }
}
