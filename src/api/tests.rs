use super::*;

const SPEC: &str = "un: type=prefix\nheat: meaning=warm\ned: type=suffix, tense=past";

fn segment_request(text: &str) -> GlossSegmentRequest {
    GlossSegmentRequest {
        text: text.to_string(),
        morpheme_spec: SPEC.to_string(),
        include_translation: true,
        tokens: None,
        language: None,
    }
}

#[test]
fn segment_caches_dictionary() {
    let engine = GlossEngine::new();
    let resp = engine.segment(segment_request("The unheated soup")).unwrap();
    assert_eq!(resp.segmented, "The un-heat-ed.PAST soup");
    assert_eq!(resp.pseudo_translation.as_deref(), Some("the warm.PAST soup"));
    assert_eq!(resp.detected_language, "en");
    assert_eq!(resp.word_count, 3);
    assert_eq!(resp.morpheme_count, 3);
    assert_eq!(engine.cached_dictionaries().unwrap(), 1);

    engine.segment(segment_request("unheated")).unwrap();
    assert_eq!(engine.cached_dictionaries().unwrap(), 1);

    engine.clear_cache().unwrap();
    assert_eq!(engine.cached_dictionaries().unwrap(), 0);
}

#[test]
fn segment_with_host_tokens() {
    let engine = GlossEngine::new();
    let mut req = segment_request("Dogs");
    req.morpheme_spec = "-s: type=suffix\ndog: meaning=canine".into();
    req.language = Some("nl".into());
    req.tokens = Some(vec![GlossToken {
        text: "Dogs".into(),
        pos: "NOUN".into(),
        tag: "NNS".into(),
        lemma: "dog".into(),
        dep: "ROOT".into(),
        feats: "Number=Plur".into(),
    }]);
    let resp = engine.segment(req).unwrap();
    assert_eq!(resp.segmented, "Dog-s.PL");
    assert_eq!(resp.detected_language, "nl");
    assert_eq!(resp.tokens[0].pos, "NOUN");
    let analysis: serde_json::Value = serde_json::from_str(&resp.feature_analysis_json).unwrap();
    assert_eq!(analysis["features"]["dogs"]["morphology"]["number"], "plur");
}

#[test]
fn empty_inputs_map_to_empty_input() {
    let engine = GlossEngine::new();
    let Err(err) = engine.segment(segment_request(" ")) else {
        panic!("blank text was accepted");
    };
    assert!(matches!(err, GlossEngineError::EmptyInput { .. }));

    let mut req = segment_request("unheated");
    req.morpheme_spec = String::new();
    let Err(err) = engine.segment(req) else {
        panic!("blank morpheme spec was accepted");
    };
    assert!(matches!(err, GlossEngineError::EmptyInput { .. }));
    assert_eq!(engine.cached_dictionaries().unwrap(), 0);
}

#[test]
fn manual_gloss_roundtrip() {
    let engine = GlossEngine::new();
    let resp = engine
        .manual_gloss(GlossManualRequest {
            text: "runs".into(),
            word_breakdown: "runs: root=run, suffix=s, tense=present, number=singular".into(),
            abbreviation_overrides: String::new(),
        })
        .unwrap();
    assert_eq!(resp.morpheme_breakdown, "run-s");
    assert_eq!(resp.glossed, "RUN.PRES.SG-S");
}

#[test]
fn summary_counts_categories() {
    let s = summarize_morpheme_spec(SPEC.to_string());
    assert_eq!((s.prefixes, s.suffixes, s.roots, s.infixes), (1, 1, 1, 0));
    assert_eq!(s.declared_lines, 3);
}

#[test]
fn settings_load_missing_file() {
    let err = settings_load_config("/nonexistent/gloss.toml".into()).unwrap_err();
    assert!(matches!(err, GlossEngineError::Io { .. }));
}

#[test]
fn default_config_parses() {
    let toml = settings_default_config();
    assert!(gloss_core::settings::parse_settings_toml(&toml).is_ok());
    assert!(!engine_version().is_empty());
}
