use crate::adapters::HttpImageSource;
use crate::config::AnalyzerSettings;
use crate::core::{AudioAnalyzer, ImageAnalyzer, ImageSource, LexiconSentiment, SentimentModel, TextAnalyzer};
use crate::utils::error::Result;
use std::sync::Arc;

/// Read-only state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub text: Arc<TextAnalyzer>,
    pub image: Arc<ImageAnalyzer>,
    pub audio: Arc<AudioAnalyzer>,
    pub settings: Arc<AnalyzerSettings>,
}

impl AppState {
    pub fn new(
        settings: AnalyzerSettings,
        model: Arc<dyn SentimentModel>,
        source: Arc<dyn ImageSource>,
    ) -> Self {
        Self {
            text: Arc::new(TextAnalyzer::new(model, settings.text.top_n)),
            image: Arc::new(ImageAnalyzer::new(source, settings.image.resize)),
            audio: Arc::new(AudioAnalyzer::disabled(settings.audio.disabled_message.clone())),
            settings: Arc::new(settings),
        }
    }

    /// Wires the bundled lexicon model and the HTTP image downloader.
    pub fn from_settings(settings: AnalyzerSettings) -> Result<Self> {
        let source = HttpImageSource::new(
            settings.image.fetch_timeout(),
            settings.image.max_image_bytes,
        )?;
        Ok(Self::new(
            settings,
            Arc::new(LexiconSentiment::new()),
            Arc::new(source),
        ))
    }
}
