use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::features::FeatureDimension;

/// Universal Dependencies part-of-speech tags, as delivered by the
/// annotation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "ADJ")]
    Adj, // adjective
    #[serde(rename = "ADP")]
    Adp, // adposition
    #[serde(rename = "ADV")]
    Adv, // adverb
    #[serde(rename = "AUX")]
    Aux, // auxiliary
    #[serde(rename = "CCONJ")]
    Cconj, // coordinating conjunction
    #[serde(rename = "DET")]
    Det, // determiner
    #[serde(rename = "INTJ")]
    Intj, // interjection
    #[serde(rename = "NOUN")]
    Noun, // noun
    #[serde(rename = "NUM")]
    Num, // numeral
    #[serde(rename = "PART")]
    Part, // particle
    #[serde(rename = "PRON")]
    Pron, // pronoun
    #[serde(rename = "PROPN")]
    Propn, // proper noun
    #[serde(rename = "PUNCT")]
    Punct, // punctuation
    #[serde(rename = "SCONJ")]
    Sconj, // subordinating conjunction
    #[serde(rename = "SYM")]
    Sym, // symbol
    #[serde(rename = "VERB")]
    Verb, // verb
    #[serde(rename = "SPACE")]
    Space, // space
    #[default]
    #[serde(rename = "X")]
    X, // other
}

use FeatureDimension::*;

const NOUN_FEATURES: &[FeatureDimension] = &[Case, Number, Gender, Animacy, Definiteness];
const PRON_FEATURES: &[FeatureDimension] = &[Case, Number, Gender, Person];
const ADJ_FEATURES: &[FeatureDimension] = &[Case, Number, Gender, Degree];
const VERB_FEATURES: &[FeatureDimension] =
    &[Tense, Aspect, Mood, Voice, Person, Number, Finiteness];
const AUX_FEATURES: &[FeatureDimension] = &[Tense, Aspect, Mood, Person, Number];
const DET_FEATURES: &[FeatureDimension] = &[Case, Number, Gender, Definiteness];
const ADP_FEATURES: &[FeatureDimension] = &[Case];
const ADV_FEATURES: &[FeatureDimension] = &[Degree];
const PART_FEATURES: &[FeatureDimension] = &[Polarity];

impl PartOfSpeech {
    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Space => "SPACE",
            PartOfSpeech::X => "X",
        }
    }

    /// Feature dimensions worth glossing for this word class, in gloss order.
    /// Classes without inflectional features get an empty list.
    pub fn relevant_dimensions(self) -> &'static [FeatureDimension] {
        match self {
            PartOfSpeech::Noun => NOUN_FEATURES,
            PartOfSpeech::Pron => PRON_FEATURES,
            PartOfSpeech::Adj => ADJ_FEATURES,
            PartOfSpeech::Verb => VERB_FEATURES,
            PartOfSpeech::Aux => AUX_FEATURES,
            PartOfSpeech::Det => DET_FEATURES,
            PartOfSpeech::Adp => ADP_FEATURES,
            PartOfSpeech::Adv => ADV_FEATURES,
            PartOfSpeech::Part => PART_FEATURES,
            _ => &[],
        }
    }

    /// Punctuation and whitespace tokens are not words.
    pub fn is_word(self) -> bool {
        !matches!(self, PartOfSpeech::Punct | PartOfSpeech::Space)
    }
}

impl FromStr for PartOfSpeech {
    type Err = std::convert::Infallible;

    /// Case-insensitive; unknown tags become `X`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pos = match s.trim().to_ascii_uppercase().as_str() {
            "ADJ" => PartOfSpeech::Adj,
            "ADP" => PartOfSpeech::Adp,
            "ADV" => PartOfSpeech::Adv,
            "AUX" => PartOfSpeech::Aux,
            "CCONJ" | "CONJ" => PartOfSpeech::Cconj,
            "DET" => PartOfSpeech::Det,
            "INTJ" => PartOfSpeech::Intj,
            "NOUN" => PartOfSpeech::Noun,
            "NUM" => PartOfSpeech::Num,
            "PART" => PartOfSpeech::Part,
            "PRON" => PartOfSpeech::Pron,
            "PROPN" => PartOfSpeech::Propn,
            "PUNCT" => PartOfSpeech::Punct,
            "SCONJ" => PartOfSpeech::Sconj,
            "SYM" => PartOfSpeech::Sym,
            "VERB" => PartOfSpeech::Verb,
            "SPACE" => PartOfSpeech::Space,
            _ => PartOfSpeech::X,
        };
        Ok(pos)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
