use super::{die, read_file, CliError};

pub fn settings_export() {
    print!("{}", gloss_core::settings::default_toml());
}

pub fn render_settings_validate(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let s = gloss_core::settings::parse_settings_toml(&content)?;
    Ok(format!(
        "OK: language.fallback={}, language.supported={}, abbreviations={}",
        s.language.fallback,
        s.language.supported.len(),
        s.abbreviations.len()
    ))
}

pub fn settings_validate(file: &str) {
    let out = die!(render_settings_validate(file), "Error: {}");
    println!("{out}");
}
