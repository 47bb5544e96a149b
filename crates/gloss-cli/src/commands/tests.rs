use std::fs;
use std::path::Path;

use super::config_ops::render_settings_validate;
use super::dict_ops::{render_abbrev, render_info};
use super::manual_ops::{render_manual, ManualOptions};
use super::segment_ops::{render_segment, SegmentOptions};
use super::CliError;

const SPEC: &str = "un: type=prefix\nheat: meaning=warm\ned: type=suffix, tense=past\n";

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn segment_plain_and_translated() {
    let dir = tempfile::tempdir().unwrap();
    let dict = write(dir.path(), "spec.txt", SPEC);

    let mut opts = SegmentOptions {
        dict,
        ..Default::default()
    };
    assert_eq!(render_segment("The unheated soup", &opts).unwrap(), "The un-heat-ed.PAST soup");

    opts.translate = true;
    assert_eq!(
        render_segment("The unheated soup", &opts).unwrap(),
        "The un-heat-ed.PAST soup\nthe warm.PAST soup"
    );

    opts.interlinear = true;
    assert_eq!(
        render_segment("The unheated soup", &opts).unwrap(),
        "The un-heat-ed.PAST soup\nthe warm.PAST       soup"
    );
}

#[test]
fn segment_with_conllu() {
    let dir = tempfile::tempdir().unwrap();
    let dict = write(dir.path(), "spec.txt", "-s: type=suffix\ndog: meaning=canine\n");
    let conllu = write(
        dir.path(),
        "tokens.conllu",
        "1\tDogs\tdog\tNOUN\tNNS\tNumber=Plur\t2\tnsubj\t_\t_\n2\tbark\tbark\tVERB\tVBP\tTense=Pres\t0\troot\t_\t_\n",
    );
    let opts = SegmentOptions {
        dict,
        conllu: Some(conllu),
        translate: true,
        ..Default::default()
    };
    assert_eq!(
        render_segment("Dogs bark", &opts).unwrap(),
        "Dog-s.PL bark.PRES\ncanine.PL bark.PRES"
    );
}

#[test]
fn segment_json_and_language() {
    let dir = tempfile::tempdir().unwrap();
    let dict = write(dir.path(), "spec.txt", SPEC);
    let opts = SegmentOptions {
        dict,
        lang: Some("de".into()),
        json: true,
        ..Default::default()
    };
    let out = render_segment("unheated", &opts).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["detected_language"], "de");
    assert_eq!(json["segmented"], "un-heat-ed.PAST");
    assert_eq!(json["feature_analysis"]["morpheme_count"], 3);
}

#[test]
fn segment_missing_dict_file() {
    let dir = tempfile::tempdir().unwrap();
    let opts = SegmentOptions {
        dict: dir.path().join("nope.txt").to_string_lossy().into_owned(),
        ..Default::default()
    };
    let err = render_segment("unheated", &opts).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn segment_empty_text() {
    let dir = tempfile::tempdir().unwrap();
    let dict = write(dir.path(), "spec.txt", SPEC);
    let opts = SegmentOptions {
        dict,
        ..Default::default()
    };
    let err = render_segment("  ", &opts).unwrap_err();
    assert_eq!(err.to_string(), "text is required");
}

#[test]
fn manual_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let breakdown = write(
        dir.path(),
        "breakdown.txt",
        "runs: root=run, suffix=s, tense=present, number=singular\n",
    );
    let abbrevs = write(dir.path(), "abbrevs.txt", "singular=sing\n");

    let mut opts = ManualOptions {
        breakdown,
        ..Default::default()
    };
    assert_eq!(render_manual("He runs", &opts).unwrap(), "He run-s\nHE RUN.PRES.SG-S");

    opts.abbrevs = Some(abbrevs);
    opts.interlinear = true;
    assert_eq!(
        render_manual("He runs", &opts).unwrap(),
        "He run-s\nHE RUN.PRES.SING-S"
    );
}

#[test]
fn dict_info_lists_entries() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "spec.txt", SPEC);
    let out = render_info(&file).unwrap();
    assert!(out.contains("Entries: 3 (prefixes=1, suffixes=1, roots=1, infixes=0)"));
    assert!(out.contains("Declared lines: 3"));
    assert!(out.lines().any(|l| l.trim_start().starts_with("suffix") && l.ends_with("tense=past")));
}

#[test]
fn abbrev_lookup() {
    assert_eq!(render_abbrev("Nominative").unwrap(), "NOM");
    assert!(matches!(
        render_abbrev("blorp"),
        Err(CliError::UnknownAbbreviation(_))
    ));
}

#[test]
fn settings_validate_default_and_broken() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(dir.path(), "good.toml", gloss_core::settings::default_toml());
    let out = render_settings_validate(&good).unwrap();
    assert!(out.starts_with("OK: language.fallback=en, language.supported=11"));

    let bad = write(
        dir.path(),
        "bad.toml",
        "[language]\nfallback = \"xx\"\nsupported = [\"en\"]\n[abbreviations]\n",
    );
    let err = render_settings_validate(&bad).unwrap_err();
    assert!(err.to_string().contains("language.fallback"));
}
