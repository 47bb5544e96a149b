//! Part-of-speech driven feature selection.

use crate::abbrev::AbbreviationTable;
use crate::features::{is_placeholder, FeatureKey, FeatureSet};
use crate::pos::PartOfSpeech;

fn push_unique(out: &mut Vec<String>, abbrev: &str) {
    if !out.iter().any(|a| a == abbrev) {
        out.push(abbrev.to_string());
    }
}

/// Abbreviations worth attaching to a word.
///
/// Token features override morpheme features of the same key. The dimensions
/// relevant to `pos` come first, in policy order; then every morpheme-level
/// value with a known abbreviation. Values without an abbreviation are
/// dropped. The result never holds the same abbreviation twice.
pub fn relevant_features(
    pos: PartOfSpeech,
    token_features: &FeatureSet,
    morpheme_features: &FeatureSet,
    abbrevs: &AbbreviationTable,
) -> Vec<String> {
    let mut merged = morpheme_features.clone();
    merged.merge(token_features);

    let mut out = Vec::new();
    for &dim in pos.relevant_dimensions() {
        let Some(value) = merged.get(dim) else {
            continue;
        };
        if is_placeholder(value) {
            continue;
        }
        if let Some(abbrev) = abbrevs.get(value) {
            push_unique(&mut out, abbrev);
        }
    }

    for (key, value) in morpheme_features.iter() {
        if matches!(key, FeatureKey::Other(k) if k == "type" || k == "meaning") {
            continue;
        }
        if is_placeholder(value) {
            continue;
        }
        if let Some(abbrev) = abbrevs.get(value) {
            push_unique(&mut out, abbrev);
        }
    }
    out
}

/// Abbreviations for the POS-relevant dimensions of `features` alone.
pub fn pos_features(
    pos: PartOfSpeech,
    features: &FeatureSet,
    abbrevs: &AbbreviationTable,
) -> Vec<String> {
    relevant_features(pos, features, &FeatureSet::new(), abbrevs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&str, &str)]) -> FeatureSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn verb_policy_order() {
        let token = set(&[("number", "sing"), ("person", "3"), ("tense", "pres")]);
        let out = relevant_features(
            PartOfSpeech::Verb,
            &token,
            &FeatureSet::new(),
            AbbreviationTable::global(),
        );
        assert_eq!(out, vec!["PRES", "3", "SG"]);
    }

    #[test]
    fn irrelevant_dimensions_are_ignored() {
        let token = set(&[("case", "nom"), ("tense", "past")]);
        let out = pos_features(PartOfSpeech::Adv, &token, AbbreviationTable::global());
        assert!(out.is_empty());
        let out = pos_features(PartOfSpeech::Intj, &token, AbbreviationTable::global());
        assert!(out.is_empty());
    }

    #[test]
    fn token_overrides_morpheme() {
        let morph = set(&[("tense", "present")]);
        let token = set(&[("tense", "past")]);
        let out = relevant_features(PartOfSpeech::Verb, &token, &morph, AbbreviationTable::global());
        // The morpheme's own value is still listed afterwards.
        assert_eq!(out, vec!["PAST", "PRES"]);
    }

    #[test]
    fn morpheme_features_are_appended_without_duplicates() {
        let morph = set(&[("number", "plur"), ("colour", "red"), ("flag", "true")]);
        let token = set(&[("number", "plural")]);
        let out = relevant_features(PartOfSpeech::Noun, &token, &morph, AbbreviationTable::global());
        assert_eq!(out, vec!["PL"]);
    }

    #[test]
    fn placeholders_and_unknown_values_are_dropped() {
        let token = set(&[("case", "true"), ("number", "paucal")]);
        let out = pos_features(PartOfSpeech::Noun, &token, AbbreviationTable::global());
        assert!(out.is_empty());
    }

    #[test]
    fn ud_aliases_reach_their_dimension() {
        let token = FeatureSet::parse_ud("Definite=Def|VerbForm=Fin");
        let det = pos_features(PartOfSpeech::Det, &token, AbbreviationTable::global());
        assert_eq!(det, vec!["DEF"]);
        let verb = pos_features(PartOfSpeech::Verb, &token, AbbreviationTable::global());
        assert_eq!(verb, vec!["FIN"]);
    }
}
