//! Property-based tests for parsing, segmentation and formatting.

use proptest::prelude::*;

use super::make_test_dict;
use crate::abbrev::AbbreviationTable;
use crate::dict::{MorphemeDictionary, MorphemeKind};
use crate::features::FeatureSet;
use crate::gloss::{collapse_hyphens, segmented_form};
use crate::pos::PartOfSpeech;
use crate::resolver::relevant_features;
use crate::segmenter::segment;

fn arb_feature_value() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "past", "pres", "present", "sing", "singular", "plur", "plural", "nom",
        "nominative", "3", "third", "true", "", "fin", "finite", "def", "xyz",
    ])
    .prop_map(str::to_string)
}

fn arb_feature_key() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "tense", "number", "case", "person", "verbform", "finiteness", "definite",
        "definiteness", "colour", "type",
    ])
    .prop_map(str::to_string)
}

fn arb_feature_set() -> impl Strategy<Value = FeatureSet> {
    prop::collection::vec((arb_feature_key(), arb_feature_value()), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn arb_pos() -> impl Strategy<Value = PartOfSpeech> {
    prop::sample::select(vec![
        PartOfSpeech::Noun,
        PartOfSpeech::Pron,
        PartOfSpeech::Adj,
        PartOfSpeech::Verb,
        PartOfSpeech::Aux,
        PartOfSpeech::Det,
        PartOfSpeech::Adp,
        PartOfSpeech::Adv,
        PartOfSpeech::Part,
        PartOfSpeech::X,
    ])
}

fn arb_word() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        "un", "re", "pre", "over", "heat", "cook", "load", "ed", "ing", "s", "er", "est",
        "ness", "x", "Q", "é", "-",
    ]);
    prop::collection::vec(pieces, 1..6).prop_map(|p| p.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn parsing_is_total(text in "\\PC*") {
        let dict = MorphemeDictionary::parse(&text);
        for entry in dict.iter() {
            prop_assert!(!entry.text.is_empty());
        }
        prop_assert!(dict.declared_lines() <= text.lines().count());
    }

    #[test]
    fn parsing_is_total_on_spec_like_lines(
        lines in prop::collection::vec("-?[a-z]{0,4}-?(: ?([a-z]{1,3}(=[a-z]{0,3})?, ?){0,3})?", 0..12)
    ) {
        let text = lines.join("\n");
        let dict = MorphemeDictionary::parse(&text);
        prop_assert!(dict.len() <= lines.len());
    }

    #[test]
    fn collapse_is_idempotent(s in "[a-z\\-]{0,24}") {
        let once = collapse_hyphens(&s);
        prop_assert!(!once.contains("--"));
        prop_assert_eq!(collapse_hyphens(&once), once.clone());
    }

    #[test]
    fn segments_rebuild_the_word(word in arb_word()) {
        let dict = make_test_dict();
        let segs = segment(&word, &dict);
        if !segs.is_empty() {
            let rebuilt: String = segs.iter().map(|s| s.text.as_str()).collect();
            prop_assert_eq!(rebuilt, word.clone());
            let roots = segs.iter().filter(|s| s.kind == MorphemeKind::Root).count();
            prop_assert_eq!(roots, 1);
            prop_assert!(segs.iter().all(|s| !s.text.is_empty()));
        }
    }

    #[test]
    fn segmented_form_has_no_hyphen_runs(word in "[a-z]{1,12}") {
        // Hyphen-free words can only gain single boundary hyphens.
        let dict = make_test_dict();
        let segs = segment(&word, &dict);
        let form = segmented_form(&word, &segs, &[]);
        prop_assert!(!form.contains("--"));
        prop_assert_eq!(form.replace('-', ""), word);
    }

    #[test]
    fn segmented_form_is_stable(
        word in arb_word().prop_filter("hyphen-free", |w: &String| !w.contains('-'))
    ) {
        let dict = make_test_dict();
        let form = segmented_form(&word, &segment(&word, &dict), &[]);
        let again = segmented_form(&form, &segment(&form, &dict), &[]);
        prop_assert_eq!(again, form);
    }

    #[test]
    fn abbreviations_never_repeat(
        pos in arb_pos(),
        token in arb_feature_set(),
        morpheme in arb_feature_set(),
    ) {
        let out = relevant_features(pos, &token, &morpheme, AbbreviationTable::global());
        let mut seen = std::collections::HashSet::new();
        for abbrev in &out {
            prop_assert!(seen.insert(abbrev.clone()), "duplicate {}", abbrev);
        }
    }
}
