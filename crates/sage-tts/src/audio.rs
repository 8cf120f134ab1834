//! Audio buffer type and WAV encoding.

use std::io::Cursor;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{EngineError, EngineResult};

/// A fully synthesized mono audio buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    /// Samples in [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl AudioClip {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback duration in milliseconds.
    pub fn duration_ms(&self) -> f32 {
        self.samples.len() as f32 * 1000.0 / self.sample_rate as f32
    }
}

/// Encode a clip as a 16-bit PCM WAV file in memory.
pub fn encode_wav(clip: &AudioClip) -> EngineResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_wav_to_writer(&mut cursor, clip)?;
    Ok(cursor.into_inner())
}

/// Write a clip to a 16-bit PCM WAV file on disk.
pub fn write_wav<P: AsRef<Path>>(path: P, clip: &AudioClip) -> EngineResult<()> {
    let mut file = std::fs::File::create(path)?;
    write_wav_to_writer(&mut file, clip)
}

fn write_wav_to_writer<W: std::io::Write + std::io::Seek>(
    writer: &mut W,
    clip: &AudioClip,
) -> EngineResult<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: clip.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut wav_writer =
        WavWriter::new(writer, spec).map_err(|e| EngineError::encode(e.to_string()))?;

    for &sample in &clip.samples {
        // Hard clamp, the model can overshoot slightly
        let value = (sample.clamp(-1.0, 1.0) * 32767.0) as i16;
        wav_writer
            .write_sample(value)
            .map_err(|e| EngineError::encode(e.to_string()))?;
    }

    wav_writer
        .finalize()
        .map_err(|e| EngineError::encode(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::WavReader;

    #[test]
    fn test_duration() {
        let clip = AudioClip::new(vec![0.0; 16_000], 16_000);
        assert_eq!(clip.duration_ms(), 1000.0);
        assert_eq!(clip.num_samples(), 16_000);
        assert!(!clip.is_empty());
    }

    #[test]
    fn test_encode_wav_header() {
        let clip = AudioClip::new(vec![0.0, 0.5, -0.5, 1.0], 22_050);
        let bytes = encode_wav(&clip).unwrap();

        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        // 44-byte header + 2 bytes per sample
        assert_eq!(bytes.len(), 44 + clip.num_samples() * 2);
    }

    #[test]
    fn test_encode_wav_round_trip_clamps() {
        let clip = AudioClip::new(vec![0.0, 2.0, -2.0], 16_000);
        let bytes = encode_wav(&clip).unwrap();

        let reader = WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.spec().sample_rate, 16_000);
        assert_eq!(reader.spec().channels, 1);

        let samples: Vec<i16> = reader.into_samples().map(Result::unwrap).collect();
        assert_eq!(samples, vec![0, 32767, -32767]);
    }

    #[test]
    fn test_encode_empty_clip() {
        let clip = AudioClip::new(Vec::new(), 16_000);
        let bytes = encode_wav(&clip).unwrap();
        // Header only
        assert_eq!(bytes.len(), 44);
    }
}
