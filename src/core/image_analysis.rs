use crate::domain::model::ColorPalette;
use crate::domain::ports::ImageSource;
use crate::utils::error::{AnalyzerError, Result};
use image::imageops::FilterType;
use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_NUM_COLORS: usize = 5;
pub const DEFAULT_RESIZE: u32 = 150;
pub const PALETTE_SIZE: usize = 5;

const BUCKET_WIDTH: f32 = 32.0;

pub type Rgb = [u8; 3];

pub struct ImageAnalyzer {
    source: Arc<dyn ImageSource>,
    resize: u32,
}

impl ImageAnalyzer {
    pub fn new(source: Arc<dyn ImageSource>, resize: u32) -> Self {
        Self { source, resize }
    }

    /// Downloads the image and returns its `num_colors` most frequent colors as `#rrggbb`.
    pub async fn analyze_colors(&self, url: &str, num_colors: usize) -> Result<Vec<String>> {
        tracing::debug!("Fetching image from: {}", url);
        let bytes = self.source.fetch(url).await.map_err(wrap_failure)?;
        tracing::debug!("Fetched {} bytes, decoding", bytes.len());

        let resize = self.resize;
        let colors = tokio::task::spawn_blocking(move || decode_and_rank(&bytes, resize, num_colors))
            .await
            .map_err(|e| AnalyzerError::ProcessingError {
                message: format!("Image analysis failed: worker task aborted: {}", e),
            })?
            .map_err(wrap_failure)?;

        Ok(colors.into_iter().map(rgb_to_hex).collect())
    }

    pub async fn palette(&self, url: &str) -> Result<ColorPalette> {
        let colors = self.analyze_colors(url, PALETTE_SIZE).await?;
        Ok(build_palette(colors))
    }
}

fn wrap_failure(err: AnalyzerError) -> AnalyzerError {
    if err.is_client_error() {
        return err;
    }
    AnalyzerError::ProcessingError {
        message: format!("Image analysis failed: {}", err),
    }
}

fn decode_and_rank(bytes: &[u8], resize: u32, num_colors: usize) -> Result<Vec<Rgb>> {
    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    let resized = image::imageops::resize(&rgb, resize, resize, FilterType::CatmullRom);
    let pixels = resized.pixels().map(|p| [p[0], p[1], p[2]]);
    Ok(dominant_colors(pixels, num_colors))
}

/// Snaps a channel value to the nearest multiple of 32, ties to even, capped at 255.
pub fn quantize_channel(value: u8) -> u8 {
    let snapped = (value as f32 / BUCKET_WIDTH).round_ties_even() * BUCKET_WIDTH;
    snapped.min(255.0) as u8
}

/// Buckets pixels into 32-unit bins and returns the `n` most common buckets.
///
/// Equal counts keep the order in which the buckets were first seen.
pub fn dominant_colors<I>(pixels: I, n: usize) -> Vec<Rgb>
where
    I: IntoIterator<Item = Rgb>,
{
    // color -> (count, first position)
    let mut counts: HashMap<Rgb, (usize, usize)> = HashMap::new();

    for (position, [r, g, b]) in pixels.into_iter().enumerate() {
        let bucket = [quantize_channel(r), quantize_channel(g), quantize_channel(b)];
        counts.entry(bucket).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(Rgb, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.into_iter().take(n).map(|(color, _)| color).collect()
}

pub fn rgb_to_hex([r, g, b]: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

pub fn build_palette(colors: Vec<String>) -> ColorPalette {
    let pick = |i: usize, fallback: &str| {
        colors
            .get(i)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };

    ColorPalette {
        primary: pick(0, "#000000"),
        secondary: pick(1, "#ffffff"),
        accent: pick(2, "#808080"),
        dominant_colors: colors,
    }
}
