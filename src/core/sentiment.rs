//! Lexicon-based sentiment scoring.
//!
//! Every word found in the lexicon contributes a `(polarity, subjectivity)`
//! assessment. An intensifier directly in front of a lexicon word scales that
//! assessment, and a pending negation flips it at half strength. The final
//! score is the mean of all assessments.

use crate::domain::ports::SentimentModel;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?|[.!?;]").unwrap());

const NEGATION_FACTOR: f64 = -0.5;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nothing", "without", "cannot", "hardly",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("absolutely", 1.3),
    ("totally", 1.2),
    ("truly", 1.2),
    ("highly", 1.2),
    ("super", 1.3),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("barely", 0.5),
];

// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("brilliant", 0.9, 1.0),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("beautiful", 0.85, 1.0),
    ("lovely", 0.5, 0.75),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("fun", 0.3, 0.2),
    ("enjoy", 0.4, 0.5),
    ("enjoyable", 0.4, 0.5),
    ("favorite", 0.5, 1.0),
    ("cool", 0.35, 0.65),
    ("catchy", 0.5, 0.8),
    ("fresh", 0.3, 0.5),
    ("interesting", 0.5, 0.5),
    ("impressive", 1.0, 1.0),
    ("pleasant", 0.73, 0.97),
    ("positive", 0.23, 0.55),
    ("strong", 0.43, 0.73),
    ("incredible", 0.9, 0.9),
    ("outstanding", 0.5, 0.5),
    ("superb", 1.0, 1.0),
    ("delightful", 1.0, 1.0),
    ("exciting", 0.3, 0.8),
    ("smooth", 0.4, 0.7),
    ("calm", 0.3, 0.75),
    ("sweet", 0.35, 0.65),
    ("powerful", 0.3, 1.0),
    ("easy", 0.43, 0.83),
    ("clean", 0.37, 0.69),
    ("bright", 0.7, 0.9),
    ("warm", 0.6, 0.6),
    ("rich", 0.375, 0.625),
    ("new", 0.136, 0.455),
    ("real", 0.2, 0.3),
    ("loud", 0.1, 0.4),
    ("old", 0.1, 0.2),
    ("long", -0.05, 0.4),
    ("dark", -0.15, 0.4),
    ("slow", -0.3, 0.4),
    ("noisy", -0.1, 0.2),
    ("harsh", -0.25, 0.6),
    ("dull", -0.3, 0.6),
    ("lonely", -0.3, 0.7),
    ("negative", -0.3, 0.4),
    ("weak", -0.375, 0.625),
    ("broken", -0.4, 0.4),
    ("poor", -0.4, 0.6),
    ("worse", -0.4, 0.6),
    ("mediocre", -0.5, 0.5),
    ("messy", -0.5, 0.6),
    ("wrong", -0.5, 0.9),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("fake", -0.5, 1.0),
    ("disappointing", -0.6, 0.7),
    ("depressing", -0.6, 0.9),
    ("bad", -0.7, 0.667),
    ("ugly", -0.7, 1.0),
    ("painful", -0.7, 0.9),
    ("disappointed", -0.75, 0.75),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("annoying", -0.8, 0.9),
    ("stupid", -0.8, 1.0),
    ("boring", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("pathetic", -1.0, 1.0),
];

#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    lexicon: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
}

impl LexiconSentiment {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().map(|&(w, p, s)| (w, (p, s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn is_negation(token: &str) -> bool {
        NEGATIONS.contains(&token) || token.ends_with("n't")
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for LexiconSentiment {
    fn polarity(&self, text: &str) -> (f64, f64) {
        let lowered = text.to_lowercase();
        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut negated = false;
        let mut intensity: Option<f64> = None;

        for token in TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()) {
            if matches!(token, "." | "!" | "?" | ";") {
                negated = false;
                intensity = None;
                continue;
            }

            if Self::is_negation(token) {
                negated = true;
                intensity = None;
                continue;
            }

            if let Some(&factor) = self.intensifiers.get(token) {
                intensity = Some(factor);
                continue;
            }

            match self.lexicon.get(token) {
                Some(&(polarity, subjectivity)) => {
                    let factor = intensity.take().unwrap_or(1.0);
                    let mut polarity = (polarity * factor).clamp(-1.0, 1.0);
                    let subjectivity = (subjectivity * factor).clamp(0.0, 1.0);
                    if negated {
                        polarity *= NEGATION_FACTOR;
                        negated = false;
                    }
                    assessments.push((polarity, subjectivity));
                }
                // 修飾詞只作用於緊接的詞
                None => intensity = None,
            }
        }

        if assessments.is_empty() {
            return (0.0, 0.0);
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|(_, s)| s).sum::<f64>() / n;
        (polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_no_opinion_words_is_neutral() {
        let model = LexiconSentiment::new();
        assert_eq!(model.polarity("The album was released on Friday"), (0.0, 0.0));
        assert_eq!(model.polarity(""), (0.0, 0.0));
    }

    #[test]
    fn test_mean_of_assessments() {
        let model = LexiconSentiment::new();
        let (p, s) = model.polarity("Good songs, bad mixing");
        assert!(approx(p, 0.0));
        assert!(approx(s, (0.6 + 0.667) / 2.0));
    }

    #[test]
    fn test_intensifier_scales_next_word_only() {
        let model = LexiconSentiment::new();
        let (p, _) = model.polarity("very good");
        assert!(approx(p, 0.91));

        let (p, _) = model.polarity("very catchy good");
        assert!(approx(p, (0.65 + 0.7) / 2.0));
    }

    #[test]
    fn test_negation_flips_at_half_strength() {
        let model = LexiconSentiment::new();
        let (p, _) = model.polarity("This is not good");
        assert!(approx(p, -0.35));

        let (p, _) = model.polarity("It isn't bad at all");
        assert!(approx(p, 0.35));
    }

    #[test]
    fn test_negation_stops_at_sentence_boundary() {
        let model = LexiconSentiment::new();
        let (p, _) = model.polarity("I did not sleep. Great record");
        assert!(approx(p, 0.8));
    }

    #[test]
    fn test_scores_are_clamped() {
        let model = LexiconSentiment::new();
        let (p, s) = model.polarity("extremely perfect");
        assert!(approx(p, 1.0));
        assert!(approx(s, 1.0));
    }
}
