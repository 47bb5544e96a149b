use gloss_core::abbrev::AbbreviationTable;
use gloss_core::gloss::interlinear;
use gloss_core::pipeline::{manual_gloss, ManualGlossRequest};

use super::{die, read_file, CliError};

#[derive(Debug, Clone, Default)]
pub struct ManualOptions {
    /// Word breakdown file.
    pub breakdown: String,
    /// Optional `key=value` abbreviation overrides.
    pub abbrevs: Option<String>,
    pub interlinear: bool,
    pub json: bool,
}

pub fn render_manual(text: &str, opts: &ManualOptions) -> Result<String, CliError> {
    let request = ManualGlossRequest {
        text: text.to_string(),
        word_breakdown: read_file(&opts.breakdown)?,
        abbreviation_overrides: match &opts.abbrevs {
            Some(path) => read_file(path)?,
            None => String::new(),
        },
    };
    let resp = manual_gloss(&request, AbbreviationTable::global())?;

    if opts.json {
        return Ok(serde_json::to_string_pretty(&resp)?);
    }
    let rows = vec![resp.morpheme_breakdown, resp.glossed];
    let rows = if opts.interlinear {
        interlinear::align(&rows)
    } else {
        rows
    };
    Ok(rows.join("\n"))
}

pub fn manual_cmd(text: &str, opts: &ManualOptions) {
    let out = die!(render_manual(text, opts), "Error: {}");
    println!("{out}");
}
