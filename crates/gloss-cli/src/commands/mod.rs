//! `glosstool` subcommands.
//!
//! Each command has a `render_*` function returning its output text, and a
//! thin `*_cmd` wrapper that prints it or exits with status 1.

pub mod config_ops;
pub mod dict_ops;
pub mod manual_ops;
pub mod segment_ops;

#[cfg(test)]
mod tests;

use std::fs;

use tracing::debug;

use gloss_core::annotate::AnnotationError;
use gloss_core::pipeline::GlossError;
use gloss_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Gloss(#[from] GlossError),
    #[error("{0}")]
    Annotation(#[from] AnnotationError),
    #[error("{0}")]
    Settings(#[from] SettingsError),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no abbreviation for {0:?}")]
    UnknownAbbreviation(String),
}

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })?;
    debug!(path, bytes = content.len(), "read input");
    Ok(content)
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;
