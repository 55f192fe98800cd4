use crate::adapters::http::{DEFAULT_FETCH_TIMEOUT_SECONDS, DEFAULT_MAX_IMAGE_BYTES};
use crate::core::audio_analysis::DISABLED_MESSAGE;
use crate::core::image_analysis::{DEFAULT_NUM_COLORS, DEFAULT_RESIZE};
use crate::core::text_analysis::{DEFAULT_KEYWORDS, DEFAULT_SUMMARY_SENTENCES, DEFAULT_TOP_N};
use crate::utils::error::{AnalyzerError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

static ENV_VAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Analyzer tuning loaded from an optional TOML file. Every field has a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerSettings {
    pub request: RequestSettings,
    pub text: TextSettings,
    pub image: ImageSettings,
    pub audio: AudioSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestSettings {
    pub max_body_bytes: usize,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    pub top_n: usize,
    pub keywords: usize,
    pub summary_sentences: usize,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            keywords: DEFAULT_KEYWORDS,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub num_colors: usize,
    pub resize: u32,
    pub fetch_timeout_seconds: u64,
    pub max_image_bytes: usize,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            num_colors: DEFAULT_NUM_COLORS,
            resize: DEFAULT_RESIZE,
            fetch_timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECONDS,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl ImageSettings {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub disabled_message: String,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            disabled_message: DISABLED_MESSAGE.to_string(),
        }
    }
}

impl AnalyzerSettings {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AnalyzerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_IMAGE_BYTES})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for AnalyzerSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("request.max_body_bytes", self.request.max_body_bytes, 1)?;
        validate_positive_number("text.top_n", self.text.top_n, 1)?;
        validate_positive_number("text.keywords", self.text.keywords, 1)?;
        validate_positive_number("text.summary_sentences", self.text.summary_sentences, 1)?;

        validate_range("image.num_colors", self.image.num_colors, 1, 64)?;
        validate_range("image.resize", self.image.resize, 1, 2048)?;
        validate_range("image.fetch_timeout_seconds", self.image.fetch_timeout_seconds, 1, 300)?;
        validate_positive_number("image.max_image_bytes", self.image.max_image_bytes, 1)?;

        if self.audio.disabled_message.trim().is_empty() {
            return Err(AnalyzerError::InvalidConfigValueError {
                field: "audio.disabled_message".to_string(),
                value: self.audio.disabled_message.clone(),
                reason: "Value cannot be empty or whitespace-only".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = AnalyzerSettings::from_toml_str("").unwrap();
        assert_eq!(settings.text.top_n, 50);
        assert_eq!(settings.text.keywords, 10);
        assert_eq!(settings.text.summary_sentences, 3);
        assert_eq!(settings.image.num_colors, 5);
        assert_eq!(settings.image.resize, 150);
        assert_eq!(settings.image.fetch_timeout(), Duration::from_secs(10));
        assert_eq!(settings.request.max_body_bytes, 64 * 1024 * 1024);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let toml_content = r#"
[text]
top_n = 20

[image]
num_colors = 8
"#;

        let settings = AnalyzerSettings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.text.top_n, 20);
        assert_eq!(settings.text.keywords, 10);
        assert_eq!(settings.image.num_colors, 8);
        assert_eq!(settings.image.resize, 150);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LYNALYZE_TEST_TIMEOUT", "42");

        let toml_content = r#"
[image]
fetch_timeout_seconds = ${LYNALYZE_TEST_TIMEOUT}
"#;

        let settings = AnalyzerSettings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.image.fetch_timeout_seconds, 42);

        std::env::remove_var("LYNALYZE_TEST_TIMEOUT");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AnalyzerSettings::from_toml_str("[text\ntop_n = ").unwrap_err();
        assert!(matches!(err, AnalyzerError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let settings = AnalyzerSettings::from_toml_str("[text]\ntop_n = 0\n").unwrap();
        assert!(settings.validate().is_err());

        let settings = AnalyzerSettings::from_toml_str("[image]\nresize = 0\n").unwrap();
        assert!(settings.validate().is_err());

        let settings = AnalyzerSettings::from_toml_str("[request]\nmax_body_bytes = 0\n").unwrap();
        assert!(settings.validate().is_err());

        let settings = AnalyzerSettings::from_toml_str("[audio]\ndisabled_message = \" \"\n").unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[text]\nsummary_sentences = 5\n")
            .unwrap();

        let settings = AnalyzerSettings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.text.summary_sentences, 5);
    }
}
