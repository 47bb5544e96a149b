//! Rendering segments as gloss strings.
//!
//! - `segmented_form`: `un-heat-ed.PAST`
//! - `pseudo_translation`: `warm.PAST`
//! - `manual`: gloss from an explicit per-word breakdown
//! - `interlinear`: column alignment of finished lines

pub mod interlinear;
pub mod manual;

use crate::abbrev::AbbreviationTable;
use crate::dict::MorphemeKind;
use crate::features::{is_placeholder, FeatureSet};
use crate::pos::PartOfSpeech;
use crate::resolver::pos_features;
use crate::segmenter::Segment;

/// Placeholder translation for a word with no segments at all.
pub const UNKNOWN: &str = "UNKNOWN";

/// Replace every run of two or more `-` with a single `-`.
pub fn collapse_hyphens(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_hyphen = false;
    for c in s.chars() {
        if c == '-' {
            if !prev_hyphen {
                out.push(c);
            }
            prev_hyphen = true;
        } else {
            out.push(c);
            prev_hyphen = false;
        }
    }
    out
}

/// `base` followed by `.ABBR` for each abbreviation.
pub fn with_abbreviations(base: &str, abbrevs: &[String]) -> String {
    let mut out = base.to_string();
    for abbrev in abbrevs {
        out.push('.');
        out.push_str(abbrev);
    }
    out
}

/// Hyphen-marked surface form with the resolved abbreviations appended.
///
/// Prefixes render as `pre-`, suffixes as `-suf`; hyphen runs produced by
/// the concatenation are collapsed. Zero segments yields `word` itself.
pub fn segmented_form(word: &str, segments: &[Segment], abbrevs: &[String]) -> String {
    let surface = match segments {
        [] => word.to_string(),
        [only] => only.text.clone(),
        _ => {
            let joined: String = segments
                .iter()
                .map(|seg| match seg.kind {
                    MorphemeKind::Prefix => format!("{}-", seg.text),
                    MorphemeKind::Suffix => format!("-{}", seg.text),
                    MorphemeKind::Root | MorphemeKind::Infix => seg.text.clone(),
                })
                .collect();
            collapse_hyphens(&joined)
        }
    };
    with_abbreviations(&surface, abbrevs)
}

/// Templated word-by-word rendering: root meaning plus affix abbreviations,
/// then the abbreviations of the token's own POS-relevant features.
pub fn pseudo_translation(
    segments: &[Segment],
    pos: PartOfSpeech,
    token_features: &FeatureSet,
    abbrevs: &AbbreviationTable,
) -> String {
    let root = segments.iter().find(|s| s.kind == MorphemeKind::Root);
    let head = match root {
        Some(root) => root
            .meaning
            .clone()
            .unwrap_or_else(|| root.text.to_lowercase()),
        None => segments
            .first()
            .map(|s| s.text.to_lowercase())
            .unwrap_or_else(|| UNKNOWN.to_string()),
    };

    let mut tags: Vec<String> = Vec::new();
    let affix_values = segments
        .iter()
        .filter(|s| s.kind != MorphemeKind::Root)
        .flat_map(|s| s.features.iter().map(|(_, v)| v))
        .filter(|v| !is_placeholder(v));
    for value in affix_values {
        if let Some(abbrev) = abbrevs.get(value) {
            if !tags.iter().any(|t| t == abbrev) {
                tags.push(abbrev.to_string());
            }
        }
    }
    for abbrev in pos_features(pos, token_features, abbrevs) {
        if !tags.contains(&abbrev) {
            tags.push(abbrev);
        }
    }

    with_abbreviations(&head, &tags)
}
