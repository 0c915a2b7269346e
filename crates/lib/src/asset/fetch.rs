//! Storage access for loading assets.
//!
//! A missing file is not an error: fetchers return `Ok(None)` so the caller can
//! fall back to generating the asset.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::AssetFile;

#[derive(Debug, Error)]
pub enum FetchError {
  #[error("failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The logical name is absolute or escapes the asset directory.
  #[error("invalid asset file name: {0}")]
  InvalidName(String),
}

/// Fetches asset files by their logical name.
pub trait FileFetcher {
  fn fetch_by_name(&self, name: &str) -> Result<Option<AssetFile>, FetchError>;
}

/// Fetches files from an asset directory on disk.
#[derive(Debug, Clone)]
pub struct DirFetcher {
  root: PathBuf,
}

impl DirFetcher {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  fn resolve(&self, name: &str) -> Result<PathBuf, FetchError> {
    let relative = Path::new(name);
    let confined = !name.is_empty()
      && relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !confined {
      return Err(FetchError::InvalidName(name.to_string()));
    }
    Ok(self.root.join(relative))
  }
}

impl FileFetcher for DirFetcher {
  fn fetch_by_name(&self, name: &str) -> Result<Option<AssetFile>, FetchError> {
    let path = self.resolve(name)?;
    debug!(path = ?path, "fetching asset file");

    match fs::read(&path) {
      Ok(data) => Ok(Some(AssetFile::new(name, data))),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(source) => Err(FetchError::Read { path, source }),
    }
  }
}

/// In-memory fetcher, keyed by logical name.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
  files: BTreeMap<String, Vec<u8>>,
}

impl MemoryFetcher {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_file(mut self, name: &str, data: impl Into<Vec<u8>>) -> Self {
    self.files.insert(name.to_string(), data.into());
    self
  }
}

impl FileFetcher for MemoryFetcher {
  fn fetch_by_name(&self, name: &str) -> Result<Option<AssetFile>, FetchError> {
    Ok(self.files.get(name).map(|data| AssetFile::new(name, data.clone())))
  }
}
