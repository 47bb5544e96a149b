use tracing::debug;

use super::{AnnotationError, Token};
use crate::features::FeatureSet;
use crate::pos::PartOfSpeech;

fn field(value: &str) -> String {
    if value == "_" {
        String::new()
    } else {
        value.to_string()
    }
}

/// Read tokens from CoNLL-U text.
///
/// Uses FORM, LEMMA, UPOS, XPOS, FEATS and DEPREL. Comments, blank lines,
/// multi-word ranges (`1-2`) and empty nodes (`1.1`) are skipped.
pub fn parse_conllu(text: &str) -> Result<Vec<Token>, AnnotationError> {
    let mut tokens = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() < 8 {
            return Err(AnnotationError::Parse {
                line: idx + 1,
                reason: format!("expected at least 8 tab-separated columns, got {}", cols.len()),
            });
        }
        let id = cols[0];
        if id.contains('-') || id.contains('.') {
            continue;
        }
        if id.parse::<u32>().is_err() {
            return Err(AnnotationError::Parse {
                line: idx + 1,
                reason: format!("invalid token id {id:?}"),
            });
        }

        let pos = cols[3].parse::<PartOfSpeech>().unwrap_or_default();
        tokens.push(Token {
            text: cols[1].to_string(),
            pos,
            tag: field(cols[4]),
            lemma: field(cols[2]),
            dep: field(cols[7]),
            features: FeatureSet::parse_ud(cols[5]),
        });
    }
    debug!(tokens = tokens.len(), "parsed conllu");
    Ok(tokens)
}
