use crate::domain::model::AudioFeatures;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub n: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub sentences: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DominantColorsResponse {
    pub dominant_colors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct AudioDisabledResponse {
    pub error: String,
    #[serde(flatten)]
    pub features: AudioFeatures,
}
