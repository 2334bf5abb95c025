use crate::config::SynthConfig;

/// Shared gateway state.
///
/// Read-only after startup: every request computes its records from the
/// seed alone, so there is nothing to lock or mutate here.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Generator knobs (dir span, owner pool, defaults, sample cap)
    pub synth: SynthConfig,
}

impl AppState {
    pub fn new(synth: SynthConfig) -> Self {
        Self { synth }
    }
}
