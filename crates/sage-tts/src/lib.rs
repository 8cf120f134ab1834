//! sage-tts — engine wrapper around a pretrained Piper voice.
//!
//! The synthesis itself (acoustic model, vocoder) lives inside the
//! imported `piper-rs` library. This crate owns the seam around it: a
//! process-lifetime [`SpeechEngine`] handle, voice asset resolution
//! against the Hugging Face hub, and WAV encoding of the resulting
//! sample buffers.

pub mod audio;
pub mod engine;
pub mod error;

pub use audio::AudioClip;
pub use engine::mock::MockEngine;
pub use engine::piper::PiperEngine;
pub use engine::{EngineConfig, SharedEngine, SpeechEngine, VoiceSpec};
pub use error::{EngineError, EngineResult};
