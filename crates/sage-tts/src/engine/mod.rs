//! The engine seam: a process-lifetime handle to a loaded synthesis model.
//!
//! The HTTP layer only ever sees [`SpeechEngine`]; the production
//! implementation ([`piper::PiperEngine`]) wraps the imported model
//! library, and [`mock::MockEngine`] stands in for it in tests.

pub mod mock;
pub mod piper;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::audio::AudioClip;
use crate::error::{EngineError, EngineResult};

/// Fixed identifiers for the served model.
pub mod defaults {
    /// Hub repository holding the pretrained voices.
    pub const MODEL_REPO: &str = "rhasspy/piper-voices";

    /// Voice served when none is configured.
    pub const VOICE: &str = "en_US-lessac-medium";
}

/// Location of the pretrained voice assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Hub repository id, e.g. `rhasspy/piper-voices`.
    pub repo_id: String,
    /// Voice identifier, e.g. `en_US-lessac-medium`.
    pub voice: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            repo_id: defaults::MODEL_REPO.to_string(),
            voice: defaults::VOICE.to_string(),
        }
    }
}

/// Parsed form of a Piper voice identifier.
///
/// Identifiers follow `<lang>-<speaker>-<quality>` and double as the leaf
/// of the repository path the assets live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSpec {
    /// Full identifier, e.g. `en_US-lessac-medium`.
    pub id: String,
    /// Language code, e.g. `en_US`.
    pub language: String,
    /// Speaker name, e.g. `lessac`.
    pub speaker: String,
    /// Quality tier, e.g. `medium`.
    pub quality: String,
}

impl VoiceSpec {
    /// Parse an identifier of the form `<lang>-<speaker>-<quality>`.
    pub fn parse(id: &str) -> EngineResult<Self> {
        let mut parts = id.split('-');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(language), Some(speaker), Some(quality), None)
                if !language.is_empty() && !speaker.is_empty() && !quality.is_empty() =>
            {
                Ok(Self {
                    id: id.to_string(),
                    language: language.to_string(),
                    speaker: speaker.to_string(),
                    quality: quality.to_string(),
                })
            }
            _ => Err(EngineError::load(format!(
                "invalid voice identifier '{id}', expected <lang>-<speaker>-<quality>"
            ))),
        }
    }

    /// Language family prefix, e.g. `en` for `en_US`.
    pub fn family(&self) -> &str {
        self.language.split('_').next().unwrap_or(&self.language)
    }

    /// Repository path of the ONNX weights.
    pub fn onnx_path(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}.onnx",
            self.family(),
            self.language,
            self.speaker,
            self.quality,
            self.id
        )
    }

    /// Repository path of the voice config.
    pub fn config_path(&self) -> String {
        format!("{}.json", self.onnx_path())
    }
}

/// A loaded, process-lifetime synthesis model.
///
/// Implementations are read-only after construction: synthesis borrows
/// the handle shared and may run on any thread.
pub trait SpeechEngine: Send + Sync {
    /// Synthesize `text` into a full audio buffer.
    ///
    /// `speaker` and `language` must match the loaded voice.
    fn synthesize(&self, text: &str, speaker: &str, language: &str) -> EngineResult<AudioClip>;

    /// The voice this engine was loaded with.
    fn voice(&self) -> &VoiceSpec;
}

/// Shared handle used by the HTTP layer.
pub type SharedEngine = Arc<dyn SpeechEngine>;
