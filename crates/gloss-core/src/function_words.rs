//! Closed-class words that are never segmented.
//!
//! Articles and determiners are short enough that greedy matching keeps
//! mistaking them for affix-plus-root (`a-n`, `un-a`), so they are listed
//! per language and bypass the segmenter.

use crate::dict::{MorphemeDictionary, MorphemeKind};

fn articles(language: &str) -> &'static [&'static str] {
    match language {
        "en" => &["the", "a", "an"],
        "es" => &["el", "la", "los", "las", "un", "una", "unos", "unas"],
        "fr" => &["le", "la", "les", "un", "une", "des", "du", "de"],
        "it" => &[
            "il", "lo", "la", "i", "gli", "le", "un", "una", "uno", "del", "della", "dei",
            "delle",
        ],
        "de" => &[
            "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem", "einer",
        ],
        "pt" => &["o", "a", "os", "as", "um", "uma", "uns", "umas", "do", "da", "dos", "das"],
        "nl" => &["de", "het", "een"],
        _ => &[],
    }
}

/// Whether `word` is a listed function word for `language` (case-insensitive).
pub fn is_function_word(word: &str, language: &str) -> bool {
    let word = word.to_lowercase();
    articles(language).contains(&word.as_str())
}

/// Gloss for a function word: the `meaning` of the first dictionary entry
/// found among roots, prefixes and suffixes (in that order), otherwise the
/// lower-cased word.
pub fn function_word_gloss(dict: &MorphemeDictionary, word: &str) -> String {
    let lower = word.to_lowercase();
    [MorphemeKind::Root, MorphemeKind::Prefix, MorphemeKind::Suffix]
        .into_iter()
        .find_map(|kind| dict.lookup(kind, &lower))
        .and_then(|entry| entry.meaning.clone())
        .unwrap_or(lower)
}
