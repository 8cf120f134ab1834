//! Error types for engine loading and synthesis.

/// Main error type for engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Fetching voice assets from the hub failed.
    #[error("model download failed: {0}")]
    Download(String),

    /// Constructing the synthesizer failed.
    #[error("model load failed: {0}")]
    Load(String),

    /// The model rejected or failed the synthesis call.
    #[error("synthesis failed: {0}")]
    Synthesis(String),

    /// Encoding the sample buffer to a container format failed.
    #[error("audio encode failed: {0}")]
    Encode(String),

    /// Requested language does not match the loaded voice.
    #[error("unsupported language '{requested}' (loaded voice speaks '{supported}')")]
    UnsupportedLanguage { requested: String, supported: String },

    /// Requested speaker does not match the loaded voice.
    #[error("unknown speaker '{requested}' (loaded voice is '{supported}')")]
    UnknownSpeaker { requested: String, supported: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Create a download error with message.
    pub fn download(msg: impl Into<String>) -> Self {
        Self::Download(msg.into())
    }

    /// Create a load error with message.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Create a synthesis error with message.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::Synthesis(msg.into())
    }

    /// Create an encode error with message.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::synthesis("session dropped");
        assert_eq!(err.to_string(), "synthesis failed: session dropped");

        let err = EngineError::UnsupportedLanguage {
            requested: "id".to_string(),
            supported: "en_US".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported language 'id' (loaded voice speaks 'en_US')"
        );
    }

    #[test]
    fn test_error_constructors() {
        let err = EngineError::download("connection reset");
        assert!(matches!(err, EngineError::Download(_)));

        let err = EngineError::load("missing weights");
        assert!(matches!(err, EngineError::Load(_)));
    }
}
