//! UniFFI export layer: bindings for a host web service.
//!
//! Each public type here maps to a generated foreign class, record, or enum.

mod engine;
mod types;
#[cfg(test)]
mod tests;

pub use engine::GlossEngine;
pub use types::{
    GlossDictionarySummary, GlossEngineError, GlossManualRequest, GlossManualResponse,
    GlossSegmentRequest, GlossSegmentResponse, GlossToken, GlossTokenSummary,
};

use std::path::Path;

use gloss_core::dict::MorphemeDictionary;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), GlossEngineError> {
    let content = std::fs::read_to_string(&path).map_err(|e| GlossEngineError::Io {
        msg: format!("{path}: {e}"),
    })?;
    gloss_core::settings::init_custom(content)
        .map_err(|e| GlossEngineError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    gloss_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn summarize_morpheme_spec(text: String) -> GlossDictionarySummary {
    MorphemeDictionary::parse(&text).summary().into()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
