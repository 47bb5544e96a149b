use gloss_core::abbrev::AbbreviationTable;
use gloss_core::annotate::{parse_conllu, Annotator, FixedLanguage, Pretagged, WhitespaceAnnotator};
use gloss_core::gloss::interlinear;
use gloss_core::pipeline::{segment_text, SegmentRequest};
use gloss_core::settings::settings;

use super::{die, read_file, CliError};

#[derive(Debug, Clone, Default)]
pub struct SegmentOptions {
    /// Morpheme spec file.
    pub dict: String,
    /// Pre-tagged tokens in CoNLL-U; whitespace tokenization otherwise.
    pub conllu: Option<String>,
    /// Language code; the configured fallback otherwise.
    pub lang: Option<String>,
    pub translate: bool,
    pub interlinear: bool,
    pub json: bool,
}

pub fn render_segment(text: &str, opts: &SegmentOptions) -> Result<String, CliError> {
    let request = SegmentRequest {
        text: text.to_string(),
        morpheme_spec: read_file(&opts.dict)?,
        include_translation: opts.translate || opts.interlinear,
    };

    let annotator: Box<dyn Annotator> = match &opts.conllu {
        Some(path) => Box::new(Pretagged(parse_conllu(&read_file(path)?)?)),
        None => Box::new(WhitespaceAnnotator),
    };
    let detector = FixedLanguage(
        opts.lang
            .clone()
            .unwrap_or_else(|| settings().language.fallback.clone()),
    );

    let resp = segment_text(&request, annotator.as_ref(), &detector, AbbreviationTable::global())?;

    if opts.json {
        return Ok(serde_json::to_string_pretty(&resp)?);
    }
    let mut rows = vec![resp.segmented];
    if let Some(translation) = resp.pseudo_translation {
        rows.push(translation);
    }
    if opts.interlinear {
        rows = interlinear::align(&rows);
    }
    Ok(rows.join("\n"))
}

pub fn segment_cmd(text: &str, opts: &SegmentOptions) {
    let out = die!(render_segment(text, opts), "Error: {}");
    println!("{out}");
}
