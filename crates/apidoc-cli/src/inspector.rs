//! Symbol model loading
//!
//! Models are produced by an external source inspector and stored as JSON.
//! A package identifier resolves to the first existing candidate:
//! the identifier itself as a `.json` path, `<model dir>/<id>.json`, then
//! `<id>/apidoc.json`.

use std::path::{Path, PathBuf};

use apidoc_core::{Package, SourceInspector};
use thiserror::Error;

/// File name looked up inside a package directory
pub const MODEL_FILE: &str = "apidoc.json";

/// Errors that can occur when loading a symbol model
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("no symbol model found (tried {})", format_candidates(.0))]
    NotFound(Vec<PathBuf>),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid symbol model in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn format_candidates(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Inspector reading pre-extracted JSON symbol models
#[derive(Debug, Clone)]
pub struct ModelFileInspector {
    model_dir: PathBuf,
}

impl ModelFileInspector {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
        }
    }

    /// Candidate model paths for a package identifier, in lookup order
    pub fn candidates(&self, package: &str) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        let direct = Path::new(package);
        if direct.extension().is_some_and(|ext| ext == "json") {
            candidates.push(direct.to_path_buf());
        }
        candidates.push(self.model_dir.join(format!("{}.json", package)));
        candidates.push(direct.join(MODEL_FILE));
        candidates
    }

    /// Load the model for `package`
    pub fn load(&self, package: &str) -> Result<Package, InspectError> {
        let candidates = self.candidates(package);
        let Some(path) = candidates.iter().find(|p| p.is_file()) else {
            return Err(InspectError::NotFound(candidates));
        };

        tracing::debug!(path = %path.display(), "loading symbol model");
        let source = std::fs::read_to_string(path).map_err(|source| InspectError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&source).map_err(|source| InspectError::Json {
            path: path.clone(),
            source,
        })
    }
}

impl SourceInspector for ModelFileInspector {
    fn inspect(
        &self,
        package: &str,
    ) -> Result<Package, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.load(package)?)
    }
}
