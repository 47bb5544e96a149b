use gloss_core::annotate::Token;
use gloss_core::dict::DictionarySummary;
use gloss_core::features::FeatureSet;
use gloss_core::pipeline::{GlossError, ManualGlossResponse, SegmentResponse};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum GlossEngineError {
    #[error("missing input: {msg}")]
    EmptyInput { msg: String },
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

impl From<GlossError> for GlossEngineError {
    fn from(e: GlossError) -> Self {
        let msg = e.to_string();
        match e {
            GlossError::EmptyInput { .. } => GlossEngineError::EmptyInput { msg },
            GlossError::Annotation(_) => GlossEngineError::InvalidData { msg },
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

/// A token tagged by the host's annotation engine.
#[derive(Clone, uniffi::Record)]
pub struct GlossToken {
    pub text: String,
    /// Universal Dependencies tag; unknown tags become `X`.
    pub pos: String,
    pub tag: String,
    pub lemma: String,
    pub dep: String,
    /// UD FEATS string, e.g. `Case=Nom|Number=Sing`.
    pub feats: String,
}

impl From<GlossToken> for Token {
    fn from(t: GlossToken) -> Self {
        Token {
            pos: t.pos.parse().unwrap_or_default(),
            features: FeatureSet::parse_ud(&t.feats),
            text: t.text,
            tag: t.tag,
            lemma: t.lemma,
            dep: t.dep,
        }
    }
}

#[derive(uniffi::Record)]
pub struct GlossSegmentRequest {
    pub text: String,
    pub morpheme_spec: String,
    pub include_translation: bool,
    /// Pre-tagged tokens; plain whitespace tokenization when absent.
    pub tokens: Option<Vec<GlossToken>>,
    /// Language detected by the host; the settings fallback when absent.
    pub language: Option<String>,
}

#[derive(Clone, uniffi::Record)]
pub struct GlossTokenSummary {
    pub text: String,
    pub pos: String,
    pub lemma: String,
}

#[derive(uniffi::Record)]
pub struct GlossSegmentResponse {
    pub original: String,
    pub segmented: String,
    pub detected_language: String,
    pub pseudo_translation: Option<String>,
    pub word_count: u32,
    pub morpheme_count: u32,
    pub tokens: Vec<GlossTokenSummary>,
    /// Full feature analysis, serialized as JSON.
    pub feature_analysis_json: String,
}

impl GlossSegmentResponse {
    pub(crate) fn from_core(resp: SegmentResponse) -> Result<Self, GlossEngineError> {
        let feature_analysis_json = serde_json::to_string(&resp.feature_analysis)
            .map_err(|e| GlossEngineError::Internal { msg: e.to_string() })?;
        let analysis = resp.feature_analysis;
        Ok(Self {
            original: resp.original,
            segmented: resp.segmented,
            detected_language: resp.detected_language,
            pseudo_translation: resp.pseudo_translation,
            word_count: analysis.word_count as u32,
            morpheme_count: analysis.morpheme_count as u32,
            tokens: analysis
                .tokens
                .into_iter()
                .map(|t| GlossTokenSummary {
                    text: t.text,
                    pos: t.pos.tag().to_string(),
                    lemma: t.lemma,
                })
                .collect(),
            feature_analysis_json,
        })
    }
}

#[derive(uniffi::Record)]
pub struct GlossManualRequest {
    pub text: String,
    pub word_breakdown: String,
    /// `key=value` lines; empty for none.
    pub abbreviation_overrides: String,
}

#[derive(uniffi::Record)]
pub struct GlossManualResponse {
    pub original: String,
    pub morpheme_breakdown: String,
    pub glossed: String,
}

impl From<ManualGlossResponse> for GlossManualResponse {
    fn from(r: ManualGlossResponse) -> Self {
        Self {
            original: r.original,
            morpheme_breakdown: r.morpheme_breakdown,
            glossed: r.glossed,
        }
    }
}

#[derive(uniffi::Record)]
pub struct GlossDictionarySummary {
    pub prefixes: u32,
    pub suffixes: u32,
    pub roots: u32,
    pub infixes: u32,
    pub declared_lines: u32,
}

impl From<DictionarySummary> for GlossDictionarySummary {
    fn from(s: DictionarySummary) -> Self {
        Self {
            prefixes: s.prefixes as u32,
            suffixes: s.suffixes as u32,
            roots: s.roots as u32,
            infixes: s.infixes as u32,
            declared_lines: s.declared_lines as u32,
        }
    }
}
