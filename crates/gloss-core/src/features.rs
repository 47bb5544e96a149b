//! Typed morphological feature maps.
//!
//! Annotation engines and morpheme specs both describe features as loose
//! `key=value` pairs. Keys naming one of the recognised grammatical
//! dimensions become [`FeatureKey::Dimension`]; everything else is kept in
//! the [`FeatureKey::Other`] bag so unknown features still pass through.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Grammatical dimensions the resolver knows how to select per part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureDimension {
    Case,
    Number,
    Gender,
    Tense,
    Aspect,
    Mood,
    Voice,
    Person,
    Degree,
    Animacy,
    Definiteness,
    Polarity,
    Finiteness,
}

impl FeatureDimension {
    pub const ALL: [FeatureDimension; 13] = [
        FeatureDimension::Case,
        FeatureDimension::Number,
        FeatureDimension::Gender,
        FeatureDimension::Tense,
        FeatureDimension::Aspect,
        FeatureDimension::Mood,
        FeatureDimension::Voice,
        FeatureDimension::Person,
        FeatureDimension::Degree,
        FeatureDimension::Animacy,
        FeatureDimension::Definiteness,
        FeatureDimension::Polarity,
        FeatureDimension::Finiteness,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureDimension::Case => "case",
            FeatureDimension::Number => "number",
            FeatureDimension::Gender => "gender",
            FeatureDimension::Tense => "tense",
            FeatureDimension::Aspect => "aspect",
            FeatureDimension::Mood => "mood",
            FeatureDimension::Voice => "voice",
            FeatureDimension::Person => "person",
            FeatureDimension::Degree => "degree",
            FeatureDimension::Animacy => "animacy",
            FeatureDimension::Definiteness => "definiteness",
            FeatureDimension::Polarity => "polarity",
            FeatureDimension::Finiteness => "finiteness",
        }
    }

    /// Case-insensitive key lookup. Also accepts the Universal Dependencies
    /// spellings `Definite` and `VerbForm`.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        match key.as_str() {
            "definite" => return Some(FeatureDimension::Definiteness),
            "verbform" => return Some(FeatureDimension::Finiteness),
            _ => {}
        }
        Self::ALL.into_iter().find(|d| d.as_str() == key)
    }
}

impl fmt::Display for FeatureDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    Dimension(FeatureDimension),
    Other(String),
}

impl FeatureKey {
    /// Classify a raw key. Unrecognised keys are lower-cased into `Other`.
    pub fn parse(key: &str) -> Self {
        match FeatureDimension::from_key(key) {
            Some(dim) => FeatureKey::Dimension(dim),
            None => FeatureKey::Other(key.trim().to_lowercase()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FeatureKey::Dimension(dim) => dim.as_str(),
            FeatureKey::Other(key) => key,
        }
    }
}

impl From<FeatureDimension> for FeatureKey {
    fn from(dim: FeatureDimension) -> Self {
        FeatureKey::Dimension(dim)
    }
}

/// `true`, `false` and the empty string mark flags rather than feature values.
pub fn is_placeholder(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("false")
}

/// Insertion-ordered feature map.
///
/// Re-inserting an existing key replaces the value in place, so merging a
/// later map over an earlier one keeps the earlier key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    entries: Vec<(FeatureKey, String)>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Values are stored lower-cased.
    pub fn insert(&mut self, key: FeatureKey, value: &str) {
        let value = value.trim().to_lowercase();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.insert(FeatureKey::parse(key), value);
    }

    pub fn get(&self, dim: FeatureDimension) -> Option<&str> {
        self.get_key(&FeatureKey::Dimension(dim))
    }

    pub fn get_key(&self, key: &FeatureKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Merge `other` over `self`: overlapping keys take `other`'s value.
    pub fn merge(&mut self, other: &FeatureSet) {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FeatureKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a Universal Dependencies FEATS string (`Case=Nom|Number=Sing`).
    /// `_` and malformed pairs yield nothing.
    pub fn parse_ud(feats: &str) -> Self {
        let mut set = FeatureSet::new();
        let feats = feats.trim();
        if feats.is_empty() || feats == "_" {
            return set;
        }
        for pair in feats.split('|') {
            if let Some((key, value)) = pair.split_once('=') {
                if !key.trim().is_empty() {
                    set.insert_raw(key, value);
                }
            }
        }
        set
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = FeatureSet::new();
        for (k, v) in iter {
            set.insert_raw(k.as_ref(), v.as_ref());
        }
        set
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = std::collections::BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(map.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_aliases() {
        assert_eq!(FeatureDimension::from_key("Case"), Some(FeatureDimension::Case));
        assert_eq!(
            FeatureDimension::from_key("Definite"),
            Some(FeatureDimension::Definiteness)
        );
        assert_eq!(
            FeatureDimension::from_key("VerbForm"),
            Some(FeatureDimension::Finiteness)
        );
        assert_eq!(FeatureDimension::from_key("meaning"), None);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut set = FeatureSet::new();
        set.insert_raw("tense", "past");
        set.insert_raw("colour", "red");
        set.insert_raw("Tense", "Present");
        let keys: Vec<&str> = set.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["tense", "colour"]);
        assert_eq!(set.get(FeatureDimension::Tense), Some("present"));
    }

    #[test]
    fn merge_overrides_values() {
        let mut base: FeatureSet = [("number", "sing"), ("case", "nom")].into_iter().collect();
        let over: FeatureSet = [("case", "acc"), ("gender", "fem")].into_iter().collect();
        base.merge(&over);
        let pairs: Vec<(&str, &str)> = base.iter().map(|(k, v)| (k.as_str(), v)).collect();
        assert_eq!(pairs, vec![("number", "sing"), ("case", "acc"), ("gender", "fem")]);
    }

    #[test]
    fn parse_ud_feats() {
        let set = FeatureSet::parse_ud("Case=Nom|Number=Sing|PronType=Prs");
        assert_eq!(set.get(FeatureDimension::Case), Some("nom"));
        assert_eq!(set.get(FeatureDimension::Number), Some("sing"));
        assert_eq!(
            set.get_key(&FeatureKey::Other("prontype".into())),
            Some("prs")
        );
        assert!(FeatureSet::parse_ud("_").is_empty());
        assert!(FeatureSet::parse_ud("garbage").is_empty());
    }

    #[test]
    fn placeholders() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("TRUE"));
        assert!(is_placeholder("false"));
        assert!(!is_placeholder("past"));
    }

    #[test]
    fn serializes_in_insertion_order() {
        let set: FeatureSet = [("tense", "past"), ("aspect", "prog")].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"tense":"past","aspect":"prog"}"#);
    }
}
