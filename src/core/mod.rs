pub mod audio_analysis;
pub mod image_analysis;
pub mod sentiment;
pub mod stopwords;
pub mod text_analysis;

pub use crate::domain::model::{AudioFeatures, ColorPalette, SentimentScores, TextAnalysis, WordFrequency};
pub use crate::domain::ports::{ImageSource, SentimentModel};
pub use crate::utils::error::Result;
pub use audio_analysis::AudioAnalyzer;
pub use image_analysis::ImageAnalyzer;
pub use sentiment::LexiconSentiment;
pub use text_analysis::TextAnalyzer;
