use crate::utils::error::Result;
use async_trait::async_trait;

/// Scores text on a polarity axis in `[-1, 1]` and a subjectivity axis in `[0, 1]`.
pub trait SentimentModel: Send + Sync {
    fn polarity(&self, text: &str) -> (f64, f64);
}

/// Fetches raw image bytes from a location.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
