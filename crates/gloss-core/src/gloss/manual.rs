//! Manual glossing from an explicit per-word breakdown.
//!
//! Breakdown lines look like `runs: root=run, suffix=s, tense=present`.
//! Up to two extra affix slots are recognised (`prefix1`, `prefix2`,
//! `suffix1`, `suffix2`); every other key is a grammatical feature whose
//! value is abbreviated onto the root.

use std::collections::HashMap;

use serde::Serialize;

use crate::abbrev::AbbreviationTable;

const PREFIX_SLOTS: [&str; 3] = ["prefix", "prefix1", "prefix2"];
const SUFFIX_SLOTS: [&str; 3] = ["suffix", "suffix1", "suffix2"];

/// Parsed breakdown for one word. Values are lower-case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordBreakdown {
    pub root: Option<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    /// Remaining `key=value` pairs, in first-seen key order.
    pub features: Vec<(String, String)>,
}

impl WordBreakdown {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut out = WordBreakdown::default();
        for (key, value) in pairs {
            if key == "root" {
                out.root = Some(value);
            } else if PREFIX_SLOTS.contains(&key.as_str()) {
                out.prefixes.push(value);
            } else if SUFFIX_SLOTS.contains(&key.as_str()) {
                out.suffixes.push(value);
            } else {
                out.features.push((key, value));
            }
        }
        out
    }

    /// Surface form, `pre-root-suf`.
    pub fn surface(&self, word: &str) -> String {
        let mut out = String::new();
        for prefix in &self.prefixes {
            out.push_str(prefix);
            out.push('-');
        }
        out.push_str(&self.root_or(word));
        for suffix in &self.suffixes {
            out.push('-');
            out.push_str(suffix);
        }
        out
    }

    /// Gloss, `PRE-ROOT.FEAT.FEAT-SUF`.
    pub fn gloss(&self, word: &str, abbrevs: &AbbreviationTable) -> String {
        let mut root = self.root_or(word).to_uppercase();
        for (_, value) in &self.features {
            root.push('.');
            root.push_str(&abbrevs.abbreviate_or_upper(value));
        }

        let mut parts: Vec<String> = self.prefixes.iter().map(|p| p.to_uppercase()).collect();
        parts.push(root);
        parts.extend(self.suffixes.iter().map(|s| s.to_uppercase()));
        parts.join("-")
    }

    fn root_or(&self, word: &str) -> String {
        self.root.clone().unwrap_or_else(|| word.to_lowercase())
    }
}

/// Parse breakdown text into a map keyed by lower-cased word.
///
/// Lines without `:` and parts without `=` are ignored. A repeated key on
/// one line keeps its first position but takes the last value; a repeated
/// word replaces the earlier line.
pub fn parse_breakdown(text: &str) -> HashMap<String, WordBreakdown> {
    let mut words = HashMap::new();
    for line in text.lines() {
        let Some((word, rest)) = line.split_once(':') else {
            continue;
        };
        let mut pairs: Vec<(String, String)> = Vec::new();
        for part in rest.split(',') {
            let Some((key, value)) = part.trim().split_once('=') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            let value = value.trim().to_lowercase();
            match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some((_, v)) => *v = value,
                None => pairs.push((key, value)),
            }
        }
        words.insert(word.trim().to_lowercase(), WordBreakdown::from_pairs(pairs));
    }
    words
}

/// Gloss whitespace-separated `text` against `breakdown`.
///
/// Returns `(surface line, gloss line)`. Words without a breakdown pass
/// through unchanged in the surface line and upper-cased in the gloss line.
pub fn gloss_text(
    text: &str,
    breakdown: &HashMap<String, WordBreakdown>,
    abbrevs: &AbbreviationTable,
) -> (String, String) {
    let mut surfaces = Vec::new();
    let mut glosses = Vec::new();
    for word in text.split_whitespace() {
        match breakdown.get(&word.to_lowercase()) {
            Some(entry) => {
                surfaces.push(entry.surface(word));
                glosses.push(entry.gloss(word, abbrevs));
            }
            None => {
                surfaces.push(word.to_string());
                glosses.push(word.to_uppercase());
            }
        }
    }
    (surfaces.join(" "), glosses.join(" "))
}
