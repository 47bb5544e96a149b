use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use gloss_core::abbrev::AbbreviationTable;
use gloss_core::annotate::{Annotator, FixedLanguage, Pretagged, Token, WhitespaceAnnotator};
use gloss_core::dict::MorphemeDictionary;
use gloss_core::pipeline::{manual_gloss, segment_with_dictionary, ManualGlossRequest, SegmentRequest};
use gloss_core::settings::settings;
use tracing::debug;

use super::{
    GlossEngineError, GlossManualRequest, GlossManualResponse, GlossSegmentRequest,
    GlossSegmentResponse,
};

/// Parsed dictionaries kept per engine, keyed by spec text.
const MAX_CACHED_DICTIONARIES: usize = 32;

#[derive(uniffi::Object)]
pub struct GlossEngine {
    dictionaries: RwLock<HashMap<String, Arc<MorphemeDictionary>>>,
}

impl GlossEngine {
    fn dictionary(&self, spec: &str) -> Result<Arc<MorphemeDictionary>, GlossEngineError> {
        {
            let cache = self
                .dictionaries
                .read()
                .map_err(|e| GlossEngineError::Internal { msg: e.to_string() })?;
            if let Some(dict) = cache.get(spec) {
                return Ok(Arc::clone(dict));
            }
        }

        let dict = Arc::new(MorphemeDictionary::parse(spec));
        let mut cache = self
            .dictionaries
            .write()
            .map_err(|e| GlossEngineError::Internal { msg: e.to_string() })?;
        if cache.len() >= MAX_CACHED_DICTIONARIES {
            debug!(evicted = cache.len(), "dictionary cache full");
            cache.clear();
        }
        cache.insert(spec.to_string(), Arc::clone(&dict));
        Ok(dict)
    }
}

#[uniffi::export]
impl GlossEngine {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            dictionaries: RwLock::new(HashMap::new()),
        })
    }

    pub fn segment(
        &self,
        request: GlossSegmentRequest,
    ) -> Result<GlossSegmentResponse, GlossEngineError> {
        let core_request = SegmentRequest {
            text: request.text,
            morpheme_spec: request.morpheme_spec,
            include_translation: request.include_translation,
        };
        let blank = core_request.text.trim().is_empty()
            || core_request.morpheme_spec.trim().is_empty();
        let dict = if blank {
            // Rejected by the pipeline; not worth a cache slot.
            Arc::new(MorphemeDictionary::new())
        } else {
            self.dictionary(&core_request.morpheme_spec)?
        };
        let annotator: Box<dyn Annotator> = match request.tokens {
            Some(tokens) => Box::new(Pretagged(tokens.into_iter().map(Token::from).collect())),
            None => Box::new(WhitespaceAnnotator),
        };
        let detector = FixedLanguage(
            request
                .language
                .unwrap_or_else(|| settings().language.fallback.clone()),
        );

        let resp = segment_with_dictionary(
            &core_request,
            &dict,
            annotator.as_ref(),
            &detector,
            AbbreviationTable::global(),
        )?;
        GlossSegmentResponse::from_core(resp)
    }

    pub fn manual_gloss(
        &self,
        request: GlossManualRequest,
    ) -> Result<GlossManualResponse, GlossEngineError> {
        let core_request = ManualGlossRequest {
            text: request.text,
            word_breakdown: request.word_breakdown,
            abbreviation_overrides: request.abbreviation_overrides,
        };
        let resp = manual_gloss(&core_request, AbbreviationTable::global())?;
        Ok(resp.into())
    }

    /// Number of parsed dictionaries currently cached.
    pub fn cached_dictionaries(&self) -> Result<u32, GlossEngineError> {
        let cache = self
            .dictionaries
            .read()
            .map_err(|e| GlossEngineError::Internal { msg: e.to_string() })?;
        Ok(cache.len() as u32)
    }

    pub fn clear_cache(&self) -> Result<(), GlossEngineError> {
        let mut cache = self
            .dictionaries
            .write()
            .map_err(|e| GlossEngineError::Internal { msg: e.to_string() })?;
        cache.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poisoned_cache_reports_internal() {
        let engine = GlossEngine::new();
        let holder = Arc::clone(&engine);
        let _ = std::thread::spawn(move || {
            let _guard = holder.dictionaries.write().unwrap();
            panic!("poison the dictionary cache");
        })
        .join();

        assert!(matches!(
            engine.cached_dictionaries(),
            Err(GlossEngineError::Internal { .. })
        ));
        assert!(matches!(
            engine.clear_cache(),
            Err(GlossEngineError::Internal { .. })
        ));
        let result = engine.segment(GlossSegmentRequest {
            text: "unheated".into(),
            morpheme_spec: "un: type=prefix".into(),
            include_translation: false,
            tokens: None,
            language: None,
        });
        assert!(matches!(result, Err(GlossEngineError::Internal { .. })));
    }
}
