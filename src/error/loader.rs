//! Errors raised while loading a directory of feature files (§4.7, §7).

use std::fmt;
use std::io;
use std::path::PathBuf;

use derive_more::{Error, From};

use super::parse::SyntaxError;

/// A failure encountered by a [`FeatureLoader`](crate::loader::FeatureLoader)
/// while reading a directory of feature files.
#[derive(Debug, Error, From)]
pub enum LoaderError {
    /// The directory (or one of the files under it) couldn't be read.
    Io(IoFailure),
    /// A feature file failed to parse.
    Parse(SyntaxError),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
        }
    }
}

/// An I/O failure tagged with the path that caused it.
#[derive(Debug, Error)]
pub struct IoFailure {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for IoFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read {}: {}", self.path.display(), self.source)
    }
}

impl IoFailure {
    #[must_use]
    pub fn new(path: PathBuf, source: io::Error) -> Self {
        Self { path, source }
    }
}
