//! Greedy longest-match boundary segmentation.
//!
//! Prefixes are stripped left to right, then suffixes right to left, and
//! whatever is left is the root. A candidate must be strictly shorter than
//! the remainder it is stripped from, so the root is never empty.

use serde::Serialize;
use tracing::debug;

use crate::dict::{MorphemeDictionary, MorphemeEntry, MorphemeKind};
use crate::features::FeatureSet;

/// One piece of a segmented word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Slice of the surface word, original casing.
    pub text: String,
    pub kind: MorphemeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    pub features: FeatureSet,
}

impl Segment {
    fn from_entry(text: &str, kind: MorphemeKind, entry: Option<&MorphemeEntry>) -> Self {
        Segment {
            text: text.to_string(),
            kind,
            meaning: entry.and_then(|e| e.meaning.clone()),
            features: entry.map(|e| e.features.clone()).unwrap_or_default(),
        }
    }
}

/// Candidates for one affix pass: longest first, lexicographic among
/// equal lengths (the map's own order, kept by the stable sort).
fn ranked(kind: MorphemeKind, dict: &MorphemeDictionary) -> Vec<(&str, usize, &MorphemeEntry)> {
    let mut candidates: Vec<(&str, usize, &MorphemeEntry)> = dict
        .category(kind)
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, entry)| (key.as_str(), key.chars().count(), entry))
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates
}

/// Byte offset of the `n`th char of `s` (or `s.len()`).
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

fn strip_prefix<'a, 'd>(
    rest: &'a str,
    candidates: &[(&str, usize, &'d MorphemeEntry)],
) -> Option<(&'a str, &'a str, &'d MorphemeEntry)> {
    let rest_len = rest.chars().count();
    candidates.iter().find_map(|&(key, len, entry)| {
        if len >= rest_len {
            return None;
        }
        let split = char_offset(rest, len);
        let (head, tail) = rest.split_at(split);
        (head.to_lowercase() == key).then_some((head, tail, entry))
    })
}

fn strip_suffix<'a, 'd>(
    rest: &'a str,
    candidates: &[(&str, usize, &'d MorphemeEntry)],
) -> Option<(&'a str, &'a str, &'d MorphemeEntry)> {
    let rest_len = rest.chars().count();
    candidates.iter().find_map(|&(key, len, entry)| {
        if len >= rest_len {
            return None;
        }
        let split = char_offset(rest, rest_len - len);
        let (head, tail) = rest.split_at(split);
        (tail.to_lowercase() == key).then_some((head, tail, entry))
    })
}

/// Segment `word` against `dict`.
///
/// Returns `[prefixes..] [root] [suffixes..]` in surface order, or an empty
/// vector when nothing in the word is known to the dictionary.
pub fn segment(word: &str, dict: &MorphemeDictionary) -> Vec<Segment> {
    if word.is_empty() {
        return Vec::new();
    }

    let prefix_candidates = ranked(MorphemeKind::Prefix, dict);
    let suffix_candidates = ranked(MorphemeKind::Suffix, dict);

    let mut prefixes = Vec::new();
    let mut rest = word;
    while let Some((head, tail, entry)) = strip_prefix(rest, &prefix_candidates) {
        prefixes.push(Segment::from_entry(head, MorphemeKind::Prefix, Some(entry)));
        rest = tail;
    }

    let mut suffixes = Vec::new();
    while let Some((head, tail, entry)) = strip_suffix(rest, &suffix_candidates) {
        suffixes.push(Segment::from_entry(tail, MorphemeKind::Suffix, Some(entry)));
        rest = head;
    }
    suffixes.reverse();

    let root_entry = dict.lookup(MorphemeKind::Root, rest);
    if prefixes.is_empty() && suffixes.is_empty() && root_entry.is_none() {
        debug!(word, "no morphemes matched");
        return Vec::new();
    }

    let mut segments = prefixes;
    segments.push(Segment::from_entry(rest, MorphemeKind::Root, root_entry));
    segments.extend(suffixes);
    debug!(word, segments = segments.len());
    segments
}
