use std::fmt;

use thiserror::Error;

use super::fetch::FetchError;
use crate::codec::CodecError;

/// Stable identity of an asset kind within the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId(pub &'static str);

impl fmt::Display for AssetId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A file produced by an asset, or read back from storage.
///
/// `filename` is a logical, `/`-separated path relative to the asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
  pub filename: String,
  pub data: Vec<u8>,
}

impl AssetFile {
  pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
    Self {
      filename: filename.into(),
      data,
    }
  }
}

/// The content held by an asset node.
///
/// `Unset` and `Absent` are deliberately separate: `Absent` is the recognized
/// outcome of an applicability check, `Unset` means nothing ever populated the
/// node and is rejected on finalize.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Artifact<T> {
  #[default]
  Unset,
  Absent,
  Present { value: T, file: AssetFile },
}

impl<T> Artifact<T> {
  pub fn value(&self) -> Option<&T> {
    match self {
      Artifact::Present { value, .. } => Some(value),
      _ => None,
    }
  }

  pub fn file(&self) -> Option<&AssetFile> {
    match self {
      Artifact::Present { file, .. } => Some(file),
      _ => None,
    }
  }

  pub fn is_absent(&self) -> bool {
    matches!(self, Artifact::Absent)
  }
}

/// Lifecycle of an asset node.
///
/// ```text
/// Empty -> Generating -> Finalized
///       -> Loading    -> Failed
/// ```
///
/// `Finalized` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetState {
  #[default]
  Empty,
  Generating,
  Loading,
  Finalized,
  Failed,
}

impl fmt::Display for AssetState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      AssetState::Empty => "empty",
      AssetState::Generating => "generating",
      AssetState::Loading => "loading",
      AssetState::Finalized => "finalized",
      AssetState::Failed => "failed",
    };
    f.write_str(s)
  }
}

/// Which path populated an asset node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
  Generated,
  Loaded,
}

impl fmt::Display for Origin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Origin::Generated => f.write_str("generated"),
      Origin::Loaded => f.write_str("loaded"),
    }
  }
}

/// Errors raised while generating, loading or finalizing an asset.
#[derive(Debug, Error)]
pub enum AssetError {
  /// Storage failed for a reason other than the file being missing.
  #[error("failed to load {filename} file")]
  Fetch {
    filename: String,
    #[source]
    source: FetchError,
  },

  /// The stored file is malformed or carries fields the schema does not know.
  #[error("failed to unmarshal {filename}")]
  Parse {
    filename: String,
    #[source]
    source: CodecError,
  },

  /// The generated value could not be serialized.
  #[error("failed to marshal {name}")]
  Serialize {
    name: &'static str,
    #[source]
    source: CodecError,
  },

  /// Finalize rejected the node.
  #[error("invalid {name}: {reason}")]
  Invariant { name: &'static str, reason: String },

  #[error("{name}: cannot {action} while {state}")]
  InvalidTransition {
    name: &'static str,
    action: &'static str,
    state: AssetState,
  },

  #[error("dependency {dependency} has not been resolved")]
  MissingDependency { dependency: AssetId },

  #[error("{name} has not been finalized")]
  NotFinalized { name: &'static str },
}
