//! Route handlers.
//!
//! Bodies are taken as raw bytes and parsed here so that malformed JSON is
//! answered with the same `{"error": ...}` shape as every other failure.

use crate::core::text_analysis::{extract_keywords, summarize};
use crate::domain::model::{ColorPalette, HealthStatus, TextAnalysis};
use crate::server::dto::{
    AudioDisabledResponse, DominantColorsResponse, ImageRequest, KeywordsRequest, KeywordsResponse,
    SummaryRequest, SummaryResponse, TextRequest,
};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::utils::error::AnalyzerError;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::de::DeserializeOwned;

pub const SERVICE_NAME: &str = "Lynalyze Analysis Microservices";

fn parse_body<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, ApiError> {
    let body = body?;
    serde_json::from_slice(&body).map_err(|e| ApiError::from(AnalyzerError::from(e)))
}

fn require_text(text: Option<String>) -> Result<String, ApiError> {
    match text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(AnalyzerError::missing_field("text", "Text is required").into()),
    }
}

fn require_image_url(url: Option<String>) -> Result<String, ApiError> {
    match url {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(AnalyzerError::missing_field("image_url", "Image URL is required").into()),
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn analyze_text(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TextAnalysis>, ApiError> {
    let request: TextRequest = parse_body(body)?;
    let text = require_text(request.text)?;

    tracing::info!("📝 Analyzing text ({} chars)", text.chars().count());
    Ok(Json(state.text.analyze(&text)))
}

pub async fn text_keywords(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<KeywordsResponse>, ApiError> {
    let request: KeywordsRequest = parse_body(body)?;
    let text = require_text(request.text)?;
    let n = request.n.unwrap_or(state.settings.text.keywords);

    Ok(Json(KeywordsResponse {
        keywords: extract_keywords(&text, n),
    }))
}

pub async fn text_summary(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let request: SummaryRequest = parse_body(body)?;
    let text = require_text(request.text)?;
    let sentences = request
        .sentences
        .unwrap_or(state.settings.text.summary_sentences);

    Ok(Json(SummaryResponse {
        summary: summarize(&text, sentences),
    }))
}

/// Always 501. The request body is ignored.
pub async fn analyze_audio(State(state): State<AppState>) -> impl IntoResponse {
    let (err, features) = state.audio.analyze();
    tracing::warn!("Audio analysis requested while disabled");

    (
        StatusCode::NOT_IMPLEMENTED,
        Json(AudioDisabledResponse {
            error: err.to_string(),
            features,
        }),
    )
}

pub async fn analyze_image(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<DominantColorsResponse>, ApiError> {
    let request: ImageRequest = parse_body(body)?;
    let image_url = require_image_url(request.image_url)?;

    tracing::info!("🎨 Analyzing image colors: {}", image_url);
    let dominant_colors = state
        .image
        .analyze_colors(&image_url, state.settings.image.num_colors)
        .await?;

    Ok(Json(DominantColorsResponse { dominant_colors }))
}

pub async fn image_palette(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ColorPalette>, ApiError> {
    let request: ImageRequest = parse_body(body)?;
    let image_url = require_image_url(request.image_url)?;

    tracing::info!("🎨 Building color palette: {}", image_url);
    Ok(Json(state.image.palette(&image_url).await?))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text(None).is_err());
        assert!(require_text(Some(String::new())).is_err());
        assert_eq!(require_text(Some("hi".to_string())).unwrap(), "hi");
    }

    #[test]
    fn test_parse_body_rejects_malformed_json() {
        let err = parse_body::<TextRequest>(Ok(Bytes::from_static(b"{not json"))).unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_body_allows_missing_fields() {
        let request: TextRequest = parse_body(Ok(Bytes::from_static(b"{}"))).unwrap();
        assert!(request.text.is_none());
    }
}
