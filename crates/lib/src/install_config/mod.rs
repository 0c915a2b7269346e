//! The optional user-provided install configuration.
//!
//! When `install-config.yaml` is present it is loaded strictly; when it is not,
//! the asset finalizes as absent and every manifest derived from it is skipped.

mod types;

pub use types::*;

use std::any::Any;

use crate::asset::{
  Asset, AssetError, AssetId, AssetKind, AssetState, FileFetcher, ManifestNode, Origin, Parents,
};
use crate::consts::{DEFAULT_CLUSTER_NAMESPACE, INSTALL_CONFIG_FILENAME};

#[derive(Debug, Clone)]
pub struct OptionalInstallConfig {
  node: ManifestNode<InstallConfig>,
}

impl Default for OptionalInstallConfig {
  fn default() -> Self {
    Self::new()
  }
}

impl OptionalInstallConfig {
  pub fn new() -> Self {
    Self {
      node: ManifestNode::new("Optional Install Config", INSTALL_CONFIG_FILENAME),
    }
  }

  /// The loaded install config, `None` when it was not provided.
  pub fn config(&self) -> Option<&InstallConfig> {
    self.node.value()
  }

  pub fn cluster_name(&self) -> Option<&str> {
    self.config().map(|c| c.metadata.name.as_str())
  }

  /// Namespace for cluster manifests, defaulting when the config leaves it empty.
  pub fn cluster_namespace(&self) -> Option<&str> {
    self.config().map(|c| {
      if c.metadata.namespace.is_empty() {
        DEFAULT_CLUSTER_NAMESPACE
      } else {
        c.metadata.namespace.as_str()
      }
    })
  }

  pub fn base_domain(&self) -> Option<&str> {
    self.config().map(|c| c.base_domain.as_str())
  }

  pub fn finalize(&mut self) -> Result<(), AssetError> {
    self.node.finalize()
  }
}

impl AssetKind for OptionalInstallConfig {
  const ID: AssetId = AssetId("install-config");
}

impl Asset for OptionalInstallConfig {
  fn id(&self) -> AssetId {
    Self::ID
  }

  fn name(&self) -> &'static str {
    self.node.name()
  }

  fn dependencies(&self) -> Vec<AssetId> {
    Vec::new()
  }

  /// There is nothing to derive an install config from, so generating always
  /// yields the absent state.
  fn generate(&mut self, _parents: &Parents) -> Result<(), AssetError> {
    self.node.generate(None)
  }

  fn load(&mut self, fetcher: &dyn FileFetcher) -> Result<bool, AssetError> {
    self.node.load(fetcher)
  }

  fn state(&self) -> AssetState {
    self.node.state()
  }

  fn origin(&self) -> Option<Origin> {
    self.node.origin()
  }

  fn as_any(&self) -> &dyn Any {
    self
  }
}
