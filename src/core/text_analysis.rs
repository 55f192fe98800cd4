use crate::core::stopwords::is_stopword;
use crate::domain::model::{SentimentLabel, SentimentScores, TextAnalysis, WordFrequency};
use crate::domain::ports::SentimentModel;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_TOP_N: usize = 50;
pub const DEFAULT_KEYWORDS: usize = 10;
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

const LABEL_THRESHOLD: f64 = 0.1;
const MIN_WORD_CHARS: usize = 3;

// Fused forms word_tokenize splits in two: (form, split index)
const FUSED_FORMS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

pub struct TextAnalyzer {
    model: Arc<dyn SentimentModel>,
    top_n: usize,
}

impl TextAnalyzer {
    pub fn new(model: Arc<dyn SentimentModel>, top_n: usize) -> Self {
        Self { model, top_n }
    }

    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let sentiment = self.sentiment(text);
        let word_frequency = word_frequency(text, self.top_n);
        let word_count = word_count(text);

        tracing::debug!(
            "Analyzed text: {} words, {} distinct terms, label {:?}",
            word_count,
            word_frequency.len(),
            sentiment.label
        );

        TextAnalysis {
            word_count,
            word_frequency,
            sentiment,
        }
    }

    pub fn sentiment(&self, text: &str) -> SentimentScores {
        let (polarity, subjectivity) = self.model.polarity(text);
        normalize_sentiment(polarity, subjectivity)
    }
}

/// Number of whitespace-separated tokens in the raw text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Counts content words, ignoring punctuation, stopwords and words shorter than three characters.
///
/// Returns at most `top_n` entries. Equal counts keep first-appearance order.
pub fn word_frequency(text: &str, top_n: usize) -> WordFrequency {
    let lowered = text.to_lowercase();
    let cleaned = PUNCTUATION_RE.replace_all(&lowered, "");

    // word -> (count, first position)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let words = cleaned
        .split_whitespace()
        .flat_map(|w| {
            let (head, tail) = split_fused(w);
            std::iter::once(head).chain(tail)
        })
        .filter(|w| !is_stopword(w) && w.chars().count() >= MIN_WORD_CHARS);

    for (position, word) in words.enumerate() {
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

    WordFrequency::from_ranked(
        ranked
            .into_iter()
            .take(top_n)
            .map(|(word, (count, _))| (word.to_string(), count))
            .collect(),
    )
}

fn split_fused(word: &str) -> (&str, Option<&str>) {
    match FUSED_FORMS.iter().find(|(form, _)| *form == word) {
        Some(&(_, at)) => {
            let (head, tail) = word.split_at(at);
            (head, Some(tail))
        }
        None => (word, None),
    }
}

pub fn extract_keywords(text: &str, n: usize) -> Vec<String> {
    word_frequency(text, n).into_words()
}

/// Joins the first `sentences` sentences of the text with single spaces.
pub fn summarize(text: &str, sentences: usize) -> String {
    split_sentences(text)
        .into_iter()
        .take(sentences)
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END_RE.find_iter(text) {
        let end = m.start() + m.as_str().trim_end().len();
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            result.push(sentence);
        }
        start = m.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        result.push(tail);
    }

    result
}

/// Spreads a polarity score over positive/negative/neutral fractions that sum to one.
pub fn normalize_sentiment(polarity: f64, subjectivity: f64) -> SentimentScores {
    let label = if polarity > LABEL_THRESHOLD {
        SentimentLabel::Positive
    } else if polarity < -LABEL_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    let (positive, negative, neutral) = if polarity > 0.0 {
        (polarity, 0.0, 1.0 - polarity)
    } else if polarity < 0.0 {
        (0.0, polarity.abs(), 1.0 - polarity.abs())
    } else {
        (0.0, 0.0, 1.0)
    };

    SentimentScores {
        score: round3(polarity),
        label,
        positive: round3(positive),
        negative: round3(negative),
        neutral: round3(neutral),
        subjectivity: round3(subjectivity),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
