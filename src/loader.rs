//! The abstract "load a directory of features" interface and its minimal
//! filesystem implementation (§4.7).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoFailure, LoaderError};
use crate::model::Feature;
use crate::parser;

/// Loads the parsed features found under a directory.
pub trait FeatureLoader {
    fn load(&self, dir: &Path) -> Result<Vec<Feature>, LoaderError>;
}

/// Walks a directory non-recursively for files with a configurable
/// extension (default `.feature`), reading and parsing each one. Stops at
/// "load a directory of features" — no glob filtering, no `.gitignore`
/// exclusion, no parallel walking (§4.7, those are out of scope).
#[derive(Clone, Debug)]
pub struct FilesystemFeatureLoader {
    extension: String,
}

impl Default for FilesystemFeatureLoader {
    fn default() -> Self {
        Self { extension: "feature".to_string() }
    }
}

impl FilesystemFeatureLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the file extension matched (without the leading dot).
    #[must_use]
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self { extension: extension.into() }
    }
}

impl FeatureLoader for FilesystemFeatureLoader {
    fn load(&self, dir: &Path) -> Result<Vec<Feature>, LoaderError> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| IoFailure::new(dir.to_path_buf(), e))? {
            let entry = entry.map_err(|e| IoFailure::new(dir.to_path_buf(), e))?;
            let path = entry.path();
            let matches_extension = path
                .extension()
                .map(|ext| ext == self.extension.as_str())
                .unwrap_or(false);
            if path.is_file() && matches_extension {
                paths.push(path);
            }
        }
        paths.sort();

        let mut features = Vec::with_capacity(paths.len());
        for path in paths {
            let text = fs::read_to_string(&path).map_err(|e| IoFailure::new(path.clone(), e))?;
            tracing::debug!(path = %path.display(), "loading feature file");
            features.push(parser::parse_with_path(&text, Some(path))?);
        }
        Ok(features)
    }
}
