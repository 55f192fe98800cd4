use crate::domain::model::AudioFeatures;
use crate::utils::error::AnalyzerError;

pub const DISABLED_MESSAGE: &str =
    "Audio analysis is currently disabled. No audio feature extractor is configured for this service.";

/// Audio feature extraction is not available in this service.
///
/// Callers always get the disabled error together with placeholder features
/// so clients can still render something.
#[derive(Debug, Clone)]
pub struct AudioAnalyzer {
    message: String,
}

impl AudioAnalyzer {
    pub fn disabled(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn analyze(&self) -> (AnalyzerError, AudioFeatures) {
        (
            AnalyzerError::FeatureDisabledError {
                message: self.message.clone(),
            },
            AudioFeatures::placeholder(),
        )
    }
}

impl Default for AudioAnalyzer {
    fn default() -> Self {
        Self::disabled(DISABLED_MESSAGE)
    }
}
