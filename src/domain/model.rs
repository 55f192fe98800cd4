use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentScores {
    pub score: f64,
    pub label: SentimentLabel,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Word counts ordered by frequency, then by first appearance in the text.
///
/// Serialized as a JSON object whose key order follows the ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    entries: Vec<(String, usize)>,
}

impl WordFrequency {
    pub fn from_ranked(entries: Vec<(String, usize)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, count)| *count)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(w, _)| w.as_str())
    }

    pub fn into_words(self) -> Vec<String> {
        self.entries.into_iter().map(|(w, _)| w).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for WordFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    pub word_count: usize,
    pub word_frequency: WordFrequency,
    pub sentiment: SentimentScores,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AudioFeatures {
    pub tempo: f64,
    pub energy: f64,
    pub danceability: f64,
    pub valence: f64,
}

impl AudioFeatures {
    /// Values reported while audio analysis is unavailable.
    pub fn placeholder() -> Self {
        Self {
            tempo: 120.0,
            energy: 0.5,
            danceability: 0.5,
            valence: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub dominant_colors: Vec<String>,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_frequency_serializes_in_rank_order() {
        let freq = WordFrequency::from_ranked(vec![
            ("music".to_string(), 3),
            ("album".to_string(), 2),
            ("track".to_string(), 2),
        ]);

        let json = serde_json::to_string(&freq).unwrap();
        assert_eq!(json, r#"{"music":3,"album":2,"track":2}"#);
        assert_eq!(freq.get("album"), Some(2));
        assert_eq!(freq.get("missing"), None);
    }

    #[test]
    fn test_text_analysis_uses_camel_case_keys() {
        let analysis = TextAnalysis {
            word_count: 2,
            word_frequency: WordFrequency::default(),
            sentiment: SentimentScores {
                score: 0.0,
                label: SentimentLabel::Neutral,
                positive: 0.0,
                negative: 0.0,
                neutral: 1.0,
                subjectivity: 0.0,
            },
        };

        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["wordCount"], 2);
        assert!(value["wordFrequency"].is_object());
        assert_eq!(value["sentiment"]["label"], "Neutral");
    }
}
