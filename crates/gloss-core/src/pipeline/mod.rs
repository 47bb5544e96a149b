//! Request-level entry points.
//!
//! `segment_text` runs annotation, dictionary parsing, segmentation,
//! feature resolution and formatting for one request. `manual_gloss`
//! glosses from a caller-supplied breakdown without any annotation.


use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::abbrev::{parse_overrides, AbbreviationTable};
use crate::annotate::{resolve_language, AnnotationError, Annotator, LanguageDetector, Token};
use crate::dict::MorphemeDictionary;
use crate::features::FeatureSet;
use crate::function_words::{function_word_gloss, is_function_word};
use crate::gloss::{manual, pseudo_translation, segmented_form, with_abbreviations};
use crate::pos::PartOfSpeech;
use crate::resolver::{pos_features, relevant_features};
use crate::segmenter::segment;
use crate::settings::settings;

#[derive(Debug, thiserror::Error)]
pub enum GlossError {
    #[error("{field} is required")]
    EmptyInput { field: &'static str },
    #[error("annotation failed: {0}")]
    Annotation(#[from] AnnotationError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentRequest {
    pub text: String,
    pub morpheme_spec: String,
    #[serde(default)]
    pub include_translation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResponse {
    pub original: String,
    pub segmented: String,
    pub detected_language: String,
    pub feature_analysis: FeatureAnalysis,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pseudo_translation: Option<String>,
}

/// What the annotator reported, for display next to the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureAnalysis {
    /// Keyed by lower-cased token text; a later occurrence replaces an
    /// earlier one.
    pub features: BTreeMap<String, TokenFeatures>,
    /// Spec lines containing `:`.
    pub morpheme_count: usize,
    pub word_count: usize,
    pub tokens: Vec<TokenSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenFeatures {
    pub pos: PartOfSpeech,
    pub tag: String,
    pub lemma: String,
    pub dep: String,
    pub morphology: FeatureSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSummary {
    pub text: String,
    pub pos: PartOfSpeech,
    pub lemma: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualGlossRequest {
    pub text: String,
    pub word_breakdown: String,
    /// `key=value` lines merged over the built-in abbreviations.
    #[serde(default)]
    pub abbreviation_overrides: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualGlossResponse {
    pub original: String,
    pub morpheme_breakdown: String,
    pub glossed: String,
}

fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, GlossError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GlossError::EmptyInput { field });
    }
    Ok(trimmed)
}

impl FeatureAnalysis {
    pub fn build(tokens: &[Token], dict: &MorphemeDictionary) -> Self {
        let mut features = BTreeMap::new();
        for token in tokens {
            features.insert(
                token.text.to_lowercase(),
                TokenFeatures {
                    pos: token.pos,
                    tag: token.tag.clone(),
                    lemma: token.lemma.clone(),
                    dep: token.dep.clone(),
                    morphology: token.features.clone(),
                },
            );
        }
        let words: Vec<TokenSummary> = tokens
            .iter()
            .filter(|t| t.pos.is_word())
            .map(|t| TokenSummary {
                text: t.text.clone(),
                pos: t.pos,
                lemma: t.lemma.clone(),
            })
            .collect();
        FeatureAnalysis {
            features,
            morpheme_count: dict.declared_lines(),
            word_count: words.len(),
            tokens: words,
        }
    }
}

/// Surface and translation output for one token.
struct WordGloss {
    segmented: String,
    translation: String,
}

fn gloss_token(
    token: &Token,
    language: &str,
    dict: &MorphemeDictionary,
    abbrevs: &AbbreviationTable,
) -> WordGloss {
    let word = token.text.as_str();

    if token.pos == PartOfSpeech::Punct {
        return WordGloss {
            segmented: word.to_string(),
            translation: word.to_string(),
        };
    }

    if is_function_word(word, language) {
        return WordGloss {
            segmented: word.to_string(),
            translation: function_word_gloss(dict, word),
        };
    }

    let segments = segment(word, dict);
    if segments.is_empty() {
        let tags = pos_features(token.pos, &token.features, abbrevs);
        return WordGloss {
            segmented: with_abbreviations(word, &tags),
            translation: with_abbreviations(&word.to_lowercase(), &tags),
        };
    }

    let mut morpheme_features = FeatureSet::new();
    for seg in &segments {
        morpheme_features.merge(&seg.features);
    }
    let tags = relevant_features(token.pos, &token.features, &morpheme_features, abbrevs);
    WordGloss {
        segmented: segmented_form(word, &segments, &tags),
        translation: pseudo_translation(&segments, token.pos, &token.features, abbrevs),
    }
}

/// Segment and gloss `request.text` against its morpheme spec.
pub fn segment_text(
    request: &SegmentRequest,
    annotator: &dyn Annotator,
    detector: &dyn LanguageDetector,
    abbrevs: &AbbreviationTable,
) -> Result<SegmentResponse, GlossError> {
    require(&request.text, "text")?;
    require(&request.morpheme_spec, "morpheme spec")?;
    let dict = MorphemeDictionary::parse(&request.morpheme_spec);
    segment_with_dictionary(request, &dict, annotator, detector, abbrevs)
}

/// As [`segment_text`], with a dictionary the caller already parsed from
/// `request.morpheme_spec`.
pub fn segment_with_dictionary(
    request: &SegmentRequest,
    dict: &MorphemeDictionary,
    annotator: &dyn Annotator,
    detector: &dyn LanguageDetector,
    abbrevs: &AbbreviationTable,
) -> Result<SegmentResponse, GlossError> {
    let text = require(&request.text, "text")?;
    require(&request.morpheme_spec, "morpheme spec")?;

    let language = resolve_language(detector, text, &settings().language);
    let _span = debug_span!("segment_text", language = %language, chars = text.len()).entered();

    let tokens = annotator.annotate(text, &language)?;
    let feature_analysis = FeatureAnalysis::build(&tokens, dict);

    let mut segmented = Vec::with_capacity(tokens.len());
    let mut translated = Vec::with_capacity(tokens.len());
    for token in tokens.iter().filter(|t| t.pos != PartOfSpeech::Space) {
        let gloss = gloss_token(token, &language, dict, abbrevs);
        segmented.push(gloss.segmented);
        translated.push(gloss.translation);
    }
    debug!(tokens = tokens.len(), words = feature_analysis.word_count, "segmented");

    Ok(SegmentResponse {
        original: text.to_string(),
        segmented: segmented.join(" "),
        detected_language: language,
        feature_analysis,
        pseudo_translation: request.include_translation.then(|| translated.join(" ")),
    })
}

/// Gloss `request.text` from its explicit word breakdown.
pub fn manual_gloss(
    request: &ManualGlossRequest,
    abbrevs: &AbbreviationTable,
) -> Result<ManualGlossResponse, GlossError> {
    let text = require(&request.text, "text")?;
    let breakdown_text = require(&request.word_breakdown, "word breakdown")?;
    let _span = debug_span!("manual_gloss", chars = text.len()).entered();

    let overrides = parse_overrides(&request.abbreviation_overrides);
    let table = if overrides.is_empty() {
        Cow::Borrowed(abbrevs)
    } else {
        Cow::Owned(abbrevs.with_overrides(&overrides))
    };

    let breakdown = manual::parse_breakdown(breakdown_text);
    let (morpheme_breakdown, glossed) = manual::gloss_text(text, &breakdown, &table);
    debug!(entries = breakdown.len(), overrides = overrides.len());

    Ok(ManualGlossResponse {
        original: text.to_string(),
        morpheme_breakdown,
        glossed,
    })
}
