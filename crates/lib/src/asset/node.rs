//! Generate/load/finalize lifecycle shared by every manifest-backed asset.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::fetch::FileFetcher;
use super::types::{Artifact, AssetError, AssetFile, AssetState, Origin};
use crate::codec::{self, CodecMode};

/// Invariants a manifest value must satisfy before it is exposed.
pub trait Validate {
  fn validate(&self) -> Result<(), String>;
}

/// A single manifest asset: its typed value, its persisted file and its lifecycle.
///
/// Content is only reachable through [`ManifestNode::value`] and
/// [`ManifestNode::files`] once the node is finalized.
#[derive(Debug, Clone)]
pub struct ManifestNode<T> {
  name: &'static str,
  filename: &'static str,
  mode: CodecMode,
  state: AssetState,
  origin: Option<Origin>,
  artifact: Artifact<T>,
}

impl<T> ManifestNode<T>
where
  T: Serialize + DeserializeOwned + Validate,
{
  pub fn new(name: &'static str, filename: &'static str) -> Self {
    Self {
      name,
      filename,
      mode: CodecMode::Strict,
      state: AssetState::Empty,
      origin: None,
      artifact: Artifact::Unset,
    }
  }

  pub fn with_codec_mode(mut self, mode: CodecMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn filename(&self) -> &'static str {
    self.filename
  }

  pub fn state(&self) -> AssetState {
    self.state
  }

  pub fn origin(&self) -> Option<Origin> {
    self.origin
  }

  /// The finalized value, `None` when absent or not finalized.
  pub fn value(&self) -> Option<&T> {
    self.finalized().and_then(Artifact::value)
  }

  /// Whether the node finalized as intentionally absent.
  pub fn is_absent(&self) -> bool {
    self.finalized().is_some_and(Artifact::is_absent)
  }

  /// Zero or one files; empty unless the node is finalized with a value.
  pub fn files(&self) -> &[AssetFile] {
    match self.finalized() {
      Some(Artifact::Present { file, .. }) => std::slice::from_ref(file),
      _ => &[],
    }
  }

  fn finalized(&self) -> Option<&Artifact<T>> {
    (self.state == AssetState::Finalized).then_some(&self.artifact)
  }

  /// Populate the node from a derived value and finalize it.
  ///
  /// `None` means the asset does not apply and finalizes as absent.
  pub fn generate(&mut self, value: Option<T>) -> Result<(), AssetError> {
    self.begin(AssetState::Generating, "generate")?;
    self.origin = Some(Origin::Generated);

    let result = self.populate(value).and_then(|()| self.check());
    self.settle(result)
  }

  fn populate(&mut self, value: Option<T>) -> Result<(), AssetError> {
    let Some(value) = value else {
      debug!(asset = self.name, "not applicable, skipping");
      self.artifact = Artifact::Absent;
      return Ok(());
    };

    let data = codec::encode(&value).map_err(|source| AssetError::Serialize {
      name: self.name,
      source,
    })?;
    self.artifact = Artifact::Present {
      value,
      file: AssetFile::new(self.filename, data),
    };
    Ok(())
  }

  /// Hydrate the node from storage and finalize it.
  ///
  /// Returns `Ok(false)` and leaves the node empty when the file does not exist.
  pub fn load(&mut self, fetcher: &dyn FileFetcher) -> Result<bool, AssetError> {
    if self.state != AssetState::Empty {
      return Err(self.invalid_transition("load"));
    }

    let file = match fetcher.fetch_by_name(self.filename) {
      Ok(Some(file)) => file,
      Ok(None) => {
        debug!(asset = self.name, file = self.filename, "no file on disk");
        return Ok(false);
      }
      Err(source) => {
        self.state = AssetState::Failed;
        return Err(AssetError::Fetch {
          filename: self.filename.to_string(),
          source,
        });
      }
    };

    self.begin(AssetState::Loading, "load")?;
    self.origin = Some(Origin::Loaded);

    let result = codec::decode::<T>(&file.data, self.mode)
      .map_err(|source| AssetError::Parse {
        filename: self.filename.to_string(),
        source,
      })
      .and_then(|value| {
        self.artifact = Artifact::Present { value, file };
        self.check()
      });
    self.settle(result).map(|()| true)
  }

  /// Validate the node and mark it finalized.
  ///
  /// Safe to call again on a finalized node. A node that was never generated or
  /// loaded always fails here.
  pub fn finalize(&mut self) -> Result<(), AssetError> {
    match self.state {
      AssetState::Failed => Err(self.invalid_transition("finalize")),
      _ => {
        let result = self.check();
        self.settle(result)
      }
    }
  }

  fn check(&self) -> Result<(), AssetError> {
    match (&self.artifact, self.origin) {
      (Artifact::Unset, _) => Err(self.invariant("missing configuration or manifest file")),
      (_, None) => Err(self.invariant("artifact was neither generated nor loaded")),
      (Artifact::Absent, Some(Origin::Loaded)) => Err(self.invariant("a loaded artifact cannot be absent")),
      (Artifact::Absent, Some(Origin::Generated)) => Ok(()),
      (Artifact::Present { value, file }, Some(_)) => {
        if file.filename != self.filename {
          return Err(self.invariant(format!(
            "file {} does not match expected {}",
            file.filename, self.filename
          )));
        }
        if file.data.is_empty() {
          return Err(self.invariant(format!("file {} is empty", file.filename)));
        }
        value.validate().map_err(|reason| self.invariant(reason))
      }
    }
  }

  fn begin(&mut self, next: AssetState, action: &'static str) -> Result<(), AssetError> {
    if self.state != AssetState::Empty {
      return Err(self.invalid_transition(action));
    }
    self.state = next;
    Ok(())
  }

  fn settle(&mut self, result: Result<(), AssetError>) -> Result<(), AssetError> {
    match result {
      Ok(()) => {
        self.state = AssetState::Finalized;
        info!(
          asset = self.name,
          origin = ?self.origin,
          absent = self.artifact.is_absent(),
          "asset finalized"
        );
        Ok(())
      }
      Err(e) => {
        self.state = AssetState::Failed;
        self.artifact = Artifact::Unset;
        Err(e)
      }
    }
  }

  fn invariant(&self, reason: impl Into<String>) -> AssetError {
    AssetError::Invariant {
      name: self.name,
      reason: reason.into(),
    }
  }

  fn invalid_transition(&self, action: &'static str) -> AssetError {
    AssetError::InvalidTransition {
      name: self.name,
      action,
      state: self.state,
    }
  }
}
