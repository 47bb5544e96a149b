use tracing::{debug, debug_span};

use super::{Marker, MorphemeDictionary, MorphemeEntry, MorphemeKind};
use crate::features::FeatureSet;

/// Parse `morpheme: key=value, flag, ...` lines into a dictionary.
///
/// Blank lines and lines without `:` are skipped, as are morphemes that are
/// nothing but hyphens. Keys and values are lower-cased; a bare token with
/// no `=` is recorded as `token=true`.
pub fn parse_morpheme_spec(text: &str) -> MorphemeDictionary {
    let _span = debug_span!("parse_morpheme_spec", bytes = text.len()).entered();

    let mut dict = MorphemeDictionary::new();
    let mut declared = 0usize;
    let mut skipped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((written, info)) = line.split_once(':') else {
            skipped += 1;
            continue;
        };
        declared += 1;

        let written = written.trim();
        let clean = written.trim_matches('-');
        if clean.is_empty() {
            skipped += 1;
            continue;
        }

        let mut declared_kind = None;
        let mut meaning = None;
        let mut features = FeatureSet::new();
        for part in info.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (key, value) = match part.split_once('=') {
                Some((k, v)) => (k.trim().to_lowercase(), v.trim().to_lowercase()),
                None => (part.to_lowercase(), "true".to_string()),
            };
            match key.as_str() {
                "type" => declared_kind = MorphemeKind::from_declared(&value),
                "meaning" => meaning = Some(value),
                _ => features.insert_raw(&key, &value),
            }
        }

        let kind = MorphemeKind::classify(declared_kind, Marker::of(written));
        dict.insert(MorphemeEntry {
            text: clean.to_string(),
            kind,
            meaning: meaning.filter(|m| !m.is_empty()),
            features,
        });
    }

    dict.set_declared_lines(declared);
    debug!(entries = dict.len(), declared, skipped_lines = skipped);
    dict
}
