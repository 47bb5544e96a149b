//! Seams to the external linguistic services.
//!
//! Part-of-speech tagging and language identification happen outside this
//! crate. The pipeline only sees them through [`Annotator`] and
//! [`LanguageDetector`]; the implementations here cover callers that
//! already hold tagged tokens, plain-text fallback, and CoNLL-U files.

mod conllu;

pub use conllu::parse_conllu;

use serde::{Deserialize, Serialize};

use crate::features::FeatureSet;
use crate::pos::PartOfSpeech;
use crate::settings::LanguageSettings;

#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// One token as delivered by an annotation engine. Read-only input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: PartOfSpeech,
    /// Language-specific tag (XPOS), empty if unknown.
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub lemma: String,
    /// Dependency relation, empty if unknown.
    #[serde(default)]
    pub dep: String,
    #[serde(default)]
    pub features: FeatureSet,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        let text = text.into();
        Token {
            lemma: text.to_lowercase(),
            text,
            pos,
            ..Default::default()
        }
    }

    pub fn with_features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }
}

pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str, language: &str) -> Result<Vec<Token>, AnnotationError>;
}

pub trait LanguageDetector: Send + Sync {
    /// ISO 639-1 code, or `None` when the text is too short or ambiguous.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Tokens the caller already has; `annotate` ignores its input.
#[derive(Debug, Clone, Default)]
pub struct Pretagged(pub Vec<Token>);

impl Annotator for Pretagged {
    fn annotate(&self, _text: &str, _language: &str) -> Result<Vec<Token>, AnnotationError> {
        Ok(self.0.clone())
    }
}

/// Whitespace tokenizer with no tagging: every word is `X`, the lemma is
/// the lower-cased word, and edge punctuation becomes separate `PUNCT`
/// tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceAnnotator;

fn is_edge_punct(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '“' | '”' | '‘' | '’' | '«' | '»' | '¿' | '¡' | '…' | '—' | '–')
}

impl Annotator for WhitespaceAnnotator {
    fn annotate(&self, text: &str, _language: &str) -> Result<Vec<Token>, AnnotationError> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            let core = chunk.trim_matches(is_edge_punct);
            if core.is_empty() {
                tokens.extend(chunk.chars().map(|c| Token::new(c, PartOfSpeech::Punct)));
                continue;
            }
            let start = chunk.len() - chunk.trim_start_matches(is_edge_punct).len();
            let end = start + core.len();
            tokens.extend(chunk[..start].chars().map(|c| Token::new(c, PartOfSpeech::Punct)));
            tokens.push(Token::new(core, PartOfSpeech::X));
            tokens.extend(chunk[end..].chars().map(|c| Token::new(c, PartOfSpeech::Punct)));
        }
        Ok(tokens)
    }
}

/// Detector that always reports the same language.
#[derive(Debug, Clone)]
pub struct FixedLanguage(pub String);

impl LanguageDetector for FixedLanguage {
    fn detect(&self, _text: &str) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Detected language if supported, otherwise the configured fallback.
pub fn resolve_language(
    detector: &dyn LanguageDetector,
    text: &str,
    languages: &LanguageSettings,
) -> String {
    match detector.detect(text) {
        Some(code) if languages.is_supported(&code.to_lowercase()) => code.to_lowercase(),
        _ => languages.fallback.clone(),
    }
}
