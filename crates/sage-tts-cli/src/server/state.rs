use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sage_tts::engine::SharedEngine;

/// Shared server state: the engine handle plus the fixed identity every
/// request is synthesized with.
///
/// The engine is injected once at startup and only ever read afterwards;
/// handlers cannot construct or replace it.
#[derive(Clone)]
pub struct AppState {
    pub engine: SharedEngine,
    pub speaker: Arc<str>,
    pub language: Arc<str>,
    ready: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(engine: SharedEngine) -> Self {
        let voice = engine.voice().clone();
        Self {
            engine,
            speaker: voice.speaker.into(),
            language: voice.language.into(),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flip the liveness probe to ready, once warm-up is done.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sage_tts::MockEngine;

    #[test]
    fn test_state_carries_voice_identity() {
        let state = AppState::new(Arc::new(MockEngine::with_canned_audio()));
        assert_eq!(&*state.speaker, "lessac");
        assert_eq!(&*state.language, "en_US");
    }

    #[test]
    fn test_readiness_is_shared_across_clones() {
        let state = AppState::new(Arc::new(MockEngine::with_canned_audio()));
        let clone = state.clone();
        assert!(!clone.is_ready());

        state.mark_ready();
        assert!(clone.is_ready());
    }
}
