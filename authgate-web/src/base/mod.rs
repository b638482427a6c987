mod phase_signal;
pub mod state;

pub use phase_signal::PhaseSignal;
