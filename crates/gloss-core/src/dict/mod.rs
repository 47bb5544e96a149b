//! Morpheme dictionary built from a line-oriented spec.
//!
//! `MorphemeDictionary` keeps prefixes, suffixes, roots and infixes in four
//! separate maps keyed by the lower-cased, hyphen-stripped morpheme. The
//! same text may appear in more than one map.

mod entry;
mod parser;

pub use entry::{Marker, MorphemeEntry, MorphemeKind};
pub use parser::parse_morpheme_spec;

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MorphemeDictionary {
    prefixes: BTreeMap<String, MorphemeEntry>,
    suffixes: BTreeMap<String, MorphemeEntry>,
    roots: BTreeMap<String, MorphemeEntry>,
    infixes: BTreeMap<String, MorphemeEntry>,
    declared_lines: usize,
}

/// Per-category entry counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DictionarySummary {
    pub prefixes: usize,
    pub suffixes: usize,
    pub roots: usize,
    pub infixes: usize,
    /// Spec lines carrying a `:` separator, including ones that were
    /// later discarded.
    pub declared_lines: usize,
}

impl MorphemeDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a morpheme spec. Never fails; malformed lines are skipped.
    pub fn parse(text: &str) -> Self {
        parse_morpheme_spec(text)
    }

    /// Insert under the entry's kind. A later entry with the same text
    /// replaces the earlier one.
    pub fn insert(&mut self, entry: MorphemeEntry) {
        let key = entry.text.to_lowercase();
        self.category_mut(entry.kind).insert(key, entry);
    }

    pub fn category(&self, kind: MorphemeKind) -> &BTreeMap<String, MorphemeEntry> {
        match kind {
            MorphemeKind::Prefix => &self.prefixes,
            MorphemeKind::Suffix => &self.suffixes,
            MorphemeKind::Root => &self.roots,
            MorphemeKind::Infix => &self.infixes,
        }
    }

    fn category_mut(&mut self, kind: MorphemeKind) -> &mut BTreeMap<String, MorphemeEntry> {
        match kind {
            MorphemeKind::Prefix => &mut self.prefixes,
            MorphemeKind::Suffix => &mut self.suffixes,
            MorphemeKind::Root => &mut self.roots,
            MorphemeKind::Infix => &mut self.infixes,
        }
    }

    /// Case-insensitive lookup in one category.
    pub fn lookup(&self, kind: MorphemeKind, text: &str) -> Option<&MorphemeEntry> {
        self.category(kind).get(&text.to_lowercase())
    }

    pub fn prefixes(&self) -> &BTreeMap<String, MorphemeEntry> {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &BTreeMap<String, MorphemeEntry> {
        &self.suffixes
    }

    pub fn roots(&self) -> &BTreeMap<String, MorphemeEntry> {
        &self.roots
    }

    pub fn infixes(&self) -> &BTreeMap<String, MorphemeEntry> {
        &self.infixes
    }

    pub(crate) fn set_declared_lines(&mut self, n: usize) {
        self.declared_lines = n;
    }

    pub fn declared_lines(&self) -> usize {
        self.declared_lines
    }

    pub fn len(&self) -> usize {
        self.prefixes.len() + self.suffixes.len() + self.roots.len() + self.infixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> DictionarySummary {
        DictionarySummary {
            prefixes: self.prefixes.len(),
            suffixes: self.suffixes.len(),
            roots: self.roots.len(),
            infixes: self.infixes.len(),
            declared_lines: self.declared_lines,
        }
    }

    /// All entries, category by category (prefixes, suffixes, roots, infixes).
    pub fn iter(&self) -> impl Iterator<Item = &MorphemeEntry> {
        self.prefixes
            .values()
            .chain(self.suffixes.values())
            .chain(self.roots.values())
            .chain(self.infixes.values())
    }
}
