use serde::{Deserialize, Serialize};

use crate::features::FeatureSet;

/// Position a morpheme occupies relative to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphemeKind {
    Prefix,
    Suffix,
    Root,
    Infix,
}

/// Hyphen hint on a written morpheme: `un-` is prefix-like, `-ed` suffix-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    None,
    Leading,
    Trailing,
    Both,
}

impl Marker {
    pub fn of(written: &str) -> Self {
        match (written.starts_with('-'), written.ends_with('-')) {
            (true, true) => Marker::Both,
            (true, false) => Marker::Leading,
            (false, true) => Marker::Trailing,
            (false, false) => Marker::None,
        }
    }
}

impl MorphemeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MorphemeKind::Prefix => "prefix",
            MorphemeKind::Suffix => "suffix",
            MorphemeKind::Root => "root",
            MorphemeKind::Infix => "infix",
        }
    }

    /// Parse a declared `type=` value. Anything unrecognised is `None`.
    pub fn from_declared(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "prefix" => Some(MorphemeKind::Prefix),
            "suffix" => Some(MorphemeKind::Suffix),
            "root" => Some(MorphemeKind::Root),
            "infix" => Some(MorphemeKind::Infix),
            _ => None,
        }
    }

    /// A declared type always wins; otherwise a trailing hyphen means prefix
    /// and a leading one suffix. Unmarked morphemes are roots.
    pub fn classify(declared: Option<MorphemeKind>, marker: Marker) -> Self {
        if let Some(kind) = declared {
            return kind;
        }
        match marker {
            Marker::Trailing | Marker::Both => MorphemeKind::Prefix,
            Marker::Leading => MorphemeKind::Suffix,
            Marker::None => MorphemeKind::Root,
        }
    }
}

/// One morpheme declared in a spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MorphemeEntry {
    /// Written form with hyphen markers removed, original casing.
    pub text: String,
    pub kind: MorphemeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    /// Declared features minus `type` and `meaning`.
    pub features: FeatureSet,
}
