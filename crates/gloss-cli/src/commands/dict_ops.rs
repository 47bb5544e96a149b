use std::fmt::Write as _;

use gloss_core::abbrev::AbbreviationTable;
use gloss_core::dict::MorphemeDictionary;

use super::{die, read_file, CliError};

pub fn render_info(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let dict = MorphemeDictionary::parse(&content);
    let s = dict.summary();

    let mut out = String::new();
    let _ = writeln!(out, "File: {file}");
    let _ = writeln!(
        out,
        "Entries: {} (prefixes={}, suffixes={}, roots={}, infixes={})",
        dict.len(),
        s.prefixes,
        s.suffixes,
        s.roots,
        s.infixes
    );
    let _ = writeln!(out, "Declared lines: {}", s.declared_lines);
    for entry in dict.iter() {
        let features: Vec<String> = entry
            .features
            .iter()
            .map(|(k, v)| format!("{}={v}", k.as_str()))
            .collect();
        let _ = writeln!(
            out,
            "  {:<7} {:<12} {:<12} {}",
            entry.kind.as_str(),
            entry.text,
            entry.meaning.as_deref().unwrap_or("-"),
            features.join(",")
        );
    }
    Ok(out.trim_end().to_string())
}

pub fn info(file: &str) {
    let out = die!(render_info(file), "Error: {}");
    println!("{out}");
}

pub fn render_abbrev(value: &str) -> Result<String, CliError> {
    AbbreviationTable::global()
        .get(value)
        .map(str::to_string)
        .ok_or_else(|| CliError::UnknownAbbreviation(value.to_string()))
}

pub fn abbrev(value: &str) {
    let out = die!(render_abbrev(value), "Error: {}");
    println!("{out}");
}
