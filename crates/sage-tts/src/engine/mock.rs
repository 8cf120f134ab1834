//! Canned engine for tests and offline development.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{defaults, SpeechEngine, VoiceSpec};
use crate::audio::AudioClip;
use crate::error::{EngineError, EngineResult};

/// An engine that serves a canned clip (or a canned failure) and counts
/// synthesis calls, so the HTTP layer can be exercised without model
/// weights.
pub struct MockEngine {
    voice: VoiceSpec,
    clip: AudioClip,
    fail_message: Option<String>,
    failures_remaining: AtomicUsize,
    synth_calls: AtomicUsize,
}

impl MockEngine {
    /// A working engine producing `clip` for every request.
    pub fn new(clip: AudioClip) -> Self {
        Self {
            voice: VoiceSpec::parse(defaults::VOICE).expect("default voice id is well-formed"),
            clip,
            fail_message: None,
            failures_remaining: AtomicUsize::new(0),
            synth_calls: AtomicUsize::new(0),
        }
    }

    /// A working engine with a short sine clip, enough for a valid WAV.
    pub fn with_canned_audio() -> Self {
        let samples = (0..160)
            .map(|i| (i as f32 / 160.0 * std::f32::consts::TAU).sin() * 0.1)
            .collect();
        Self::new(AudioClip::new(samples, 16_000))
    }

    /// An engine whose synthesis always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        let mut engine = Self::with_canned_audio();
        engine.fail_message = Some(message.into());
        engine.failures_remaining = AtomicUsize::new(usize::MAX);
        engine
    }

    /// An engine that fails the first `count` calls, then recovers.
    pub fn failing_times(message: impl Into<String>, count: usize) -> Self {
        let mut engine = Self::failing(message);
        engine.failures_remaining = AtomicUsize::new(count);
        engine
    }

    /// Number of synthesis calls served so far.
    pub fn synth_calls(&self) -> usize {
        self.synth_calls.load(Ordering::Relaxed)
    }

    fn take_failure(&self) -> bool {
        self.failures_remaining
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl SpeechEngine for MockEngine {
    fn synthesize(&self, _text: &str, _speaker: &str, _language: &str) -> EngineResult<AudioClip> {
        self.synth_calls.fetch_add(1, Ordering::Relaxed);

        if self.take_failure() {
            let message = self.fail_message.as_deref().unwrap_or("mock failure");
            return Err(EngineError::synthesis(message));
        }

        Ok(self.clip.clone())
    }

    fn voice(&self) -> &VoiceSpec {
        &self.voice
    }
}
