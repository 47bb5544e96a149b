//! Feature value → interlinear gloss abbreviation (`nominative` → `NOM`).
//!
//! The built-in table is read once from settings and shared; requests that
//! bring their own abbreviations get a private overlay via
//! [`AbbreviationTable::with_overrides`].

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use crate::settings::settings;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationTable {
    map: HashMap<String, String>,
}

impl AbbreviationTable {
    pub fn new(map: HashMap<String, String>) -> Self {
        let map = map
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self { map }
    }

    /// The built-in table from the global settings.
    pub fn global() -> &'static AbbreviationTable {
        static INSTANCE: OnceLock<AbbreviationTable> = OnceLock::new();
        INSTANCE.get_or_init(|| AbbreviationTable::new(settings().abbreviations.clone()))
    }

    /// Look up a feature value, case-insensitively.
    pub fn get(&self, value: &str) -> Option<&str> {
        self.map.get(&value.trim().to_lowercase()).map(|s| s.as_str())
    }

    /// Abbreviation if known, otherwise the upper-cased value itself.
    pub fn abbreviate_or_upper(&self, value: &str) -> String {
        match self.get(value) {
            Some(abbrev) => abbrev.to_string(),
            None => value.trim().to_uppercase(),
        }
    }

    /// Copy of this table with `overrides` applied on top.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, String>) -> AbbreviationTable {
        let mut map = self.map.clone();
        for (key, value) in overrides {
            map.insert(key.to_lowercase(), value.clone());
        }
        AbbreviationTable { map }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Parse caller overrides: one `key=value` per line, key lower-cased,
/// value upper-cased. Lines without `=` are ignored.
pub fn parse_overrides(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .filter(|(key, _)| !key.trim().is_empty())
        .map(|(key, value)| (key.trim().to_lowercase(), value.trim().to_uppercase()))
        .collect()
}
