//! Parameter-file loader.
//!
//! Reads [`ParamsInput`] from a TOML or JSON file, picked by extension.
//!
//! # Accepted shapes
//!
//! ```toml
//! # params.toml
//! project_name = "My Project"
//! app_version  = "0.1.0"
//! ```
//!
//! ```json
//! { "cookiecutter": { "project_name": "My Project", "author_name": "A" } }
//! ```
//!
//! A JSON file may either hold the fields at top level or nest them under a
//! `cookiecutter` key (a replayed template context). Unknown keys are
//! ignored; missing keys stay `None`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, instrument};

use pregate_core::domain::ParamsInput;

/// Errors raised while loading a parameter file.
#[derive(Debug, Error)]
pub enum ParamsFileError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported parameter file format '{extension}' for {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ParamsFileError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::UnsupportedFormat { path, .. }
            | Self::Toml { path, .. }
            | Self::Json { path, .. } => path,
        }
    }
}

/// Load parameters from `path`.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_params(path: &Path) -> Result<ParamsInput, ParamsFileError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let raw = fs::read_to_string(path).map_err(|source| ParamsFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let params = match extension.as_str() {
        "toml" => toml::from_str(&raw).map_err(|source| ParamsFileError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
        "json" => parse_json(&raw).map_err(|source| ParamsFileError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => {
            return Err(ParamsFileError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            });
        }
    };

    debug!("Parameter file loaded");
    Ok(params)
}

fn parse_json(raw: &str) -> Result<ParamsInput, serde_json::Error> {
    let mut value: serde_json::Value = serde_json::from_str(raw)?;

    if let Some(context) = value.get_mut("cookiecutter").map(serde_json::Value::take) {
        return serde_json::from_value(context);
    }
    serde_json::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_top_level_fields() {
        let params = parse_json(r#"{"project_name": "Demo", "app_version": "1.0.0"}"#).unwrap();
        assert_eq!(params.project_name.as_deref(), Some("Demo"));
        assert_eq!(params.app_version.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn json_cookiecutter_context() {
        let params = parse_json(
            r#"{"cookiecutter": {"project_name": "Demo", "author_email": "a@b.com", "_template": "x"}}"#,
        )
        .unwrap();
        assert_eq!(params.project_name.as_deref(), Some("Demo"));
        assert_eq!(params.author_emails.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn json_with_wrong_types_is_rejected() {
        assert!(parse_json(r#"{"project_name": 42}"#).is_err());
    }
}
