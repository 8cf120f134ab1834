//! Piper-backed production engine.
//!
//! The model library is treated as a black box: assets in, synthesizer
//! handle out, sample buffers per call. Execution-device selection
//! happens inside its ONNX runtime (CPU fallback included).

use std::path::{Path, PathBuf};

use piper_rs::synth::PiperSpeechSynthesizer;
use tracing::info;

use super::{EngineConfig, SpeechEngine, VoiceSpec};
use crate::audio::AudioClip;
use crate::error::{EngineError, EngineResult};

/// A pretrained Piper voice, loaded once per process.
pub struct PiperEngine {
    synth: PiperSpeechSynthesizer,
    voice: VoiceSpec,
    sample_rate: u32,
}

impl PiperEngine {
    /// Load the voice named by `config`, fetching assets on first use.
    ///
    /// Resolution is cache-first; a cold cache downloads the ONNX weights
    /// and voice config from the hub, so the first load of a voice can
    /// take substantially longer than later ones.
    pub async fn load(config: &EngineConfig) -> EngineResult<Self> {
        let voice = VoiceSpec::parse(&config.voice)?;

        let fetcher = AssetFetcher::new()?;
        // The synthesizer resolves the weights relative to the config
        // file, so both must land in the same snapshot directory.
        fetcher.fetch(&config.repo_id, &voice.onnx_path()).await?;
        let config_path = fetcher.fetch(&config.repo_id, &voice.config_path()).await?;

        let sample_rate = read_sample_rate(&config_path)?;

        let model = piper_rs::from_config_path(&config_path)
            .map_err(|e| EngineError::load(format!("piper load error: {e}")))?;
        let synth = PiperSpeechSynthesizer::new(model)
            .map_err(|e| EngineError::load(format!("piper synthesizer error: {e}")))?;

        info!(voice = %voice.id, sample_rate, "speech engine loaded");

        Ok(Self {
            synth,
            voice,
            sample_rate,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl SpeechEngine for PiperEngine {
    fn synthesize(&self, text: &str, speaker: &str, language: &str) -> EngineResult<AudioClip> {
        if language != self.voice.language {
            return Err(EngineError::UnsupportedLanguage {
                requested: language.to_string(),
                supported: self.voice.language.clone(),
            });
        }
        if speaker != self.voice.speaker {
            return Err(EngineError::UnknownSpeaker {
                requested: speaker.to_string(),
                supported: self.voice.speaker.clone(),
            });
        }

        let stream = self
            .synth
            .synthesize_parallel(text.to_string(), None)
            .map_err(|e| EngineError::synthesis(format!("piper synth error: {e}")))?;

        let mut samples: Vec<f32> = Vec::new();
        for part in stream {
            samples.extend(
                part.map_err(|e| EngineError::synthesis(format!("chunk error: {e}")))?
                    .into_vec(),
            );
        }

        Ok(AudioClip::new(samples, self.sample_rate))
    }

    fn voice(&self) -> &VoiceSpec {
        &self.voice
    }
}

/// Cache-first asset resolution against the Hugging Face hub.
struct AssetFetcher {
    cache: hf_hub::Cache,
    api: hf_hub::api::tokio::Api,
}

impl AssetFetcher {
    fn new() -> EngineResult<Self> {
        let cache = hf_hub::Cache::from_env();
        let api = hf_hub::api::tokio::Api::new()
            .map_err(|e| EngineError::download(e.to_string()))?;

        Ok(Self { cache, api })
    }

    async fn fetch(&self, repo_id: &str, filename: &str) -> EngineResult<PathBuf> {
        let path = match self.cache.model(repo_id.to_string()).get(filename) {
            Some(path) => path,
            None => self
                .api
                .model(repo_id.to_string())
                .get(filename)
                .await
                .map_err(|e| EngineError::download(format!("{repo_id}/{filename}: {e}")))?,
        };

        Ok(path)
    }
}

fn read_sample_rate(config_path: &Path) -> EngineResult<u32> {
    let raw = std::fs::read_to_string(config_path)?;
    parse_sample_rate(&raw)
}

fn parse_sample_rate(raw: &str) -> EngineResult<u32> {
    let json: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| EngineError::load(format!("voice config parse error: {e}")))?;

    json.get("audio")
        .and_then(|audio| audio.get("sample_rate"))
        .and_then(|rate| rate.as_u64())
        .map(|rate| rate as u32)
        .ok_or_else(|| EngineError::load("voice config is missing audio.sample_rate".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_rate() {
        let raw = r#"{"audio": {"sample_rate": 22050, "quality": "medium"}}"#;
        assert_eq!(parse_sample_rate(raw).unwrap(), 22050);
    }

    #[test]
    fn test_parse_sample_rate_missing_field() {
        let raw = r#"{"audio": {"quality": "medium"}}"#;
        assert!(matches!(
            parse_sample_rate(raw),
            Err(EngineError::Load(_))
        ));
    }

    #[test]
    fn test_parse_sample_rate_invalid_json() {
        assert!(parse_sample_rate("not json").is_err());
    }
}
