//! Asset store: resolves the asset graph and persists the results.
//!
//! Assets are registered up front. Resolution orders them topologically by
//! their declared dependencies, then for each asset tries to load it from the
//! asset directory and falls back to generating it from its finalized parents.
//!
//! # Layout
//!
//! ```text
//! <asset dir>/
//! ├── install-config.yaml                    # user input, never written
//! └── cluster-manifests/
//!     └── cluster-deployment.yaml
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use thiserror::Error;
use tracing::{debug, info};

use crate::asset::{Asset, AssetError, AssetId, AssetKind, FileFetcher, Origin, Parents};
use crate::consts::TMP_SUFFIX;
use crate::install_config::OptionalInstallConfig;
use crate::manifests::ClusterDeployment;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("asset {0} is already registered")]
  Duplicate(AssetId),

  #[error("asset {asset} depends on unregistered asset {dependency}")]
  UnknownDependency { asset: AssetId, dependency: AssetId },

  #[error("dependency cycle detected")]
  CycleDetected,

  #[error("failed to resolve {id}: {source}")]
  Asset {
    id: AssetId,
    #[source]
    source: AssetError,
  },

  #[error("failed to write {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Outcome of resolving one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
  pub id: AssetId,
  pub origin: Origin,
}

/// Registry and resolver for asset nodes.
#[derive(Default)]
pub struct AssetStore {
  pending: BTreeMap<AssetId, Box<dyn Asset>>,
  resolved: Parents,
}

impl AssetStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// A store with every asset the installer knows about.
  pub fn with_defaults() -> Self {
    let mut store = Self::new();
    store.pending.insert(OptionalInstallConfig::ID, Box::new(OptionalInstallConfig::new()));
    store.pending.insert(ClusterDeployment::ID, Box::new(ClusterDeployment::new()));
    store
  }

  pub fn register(&mut self, asset: Box<dyn Asset>) -> Result<(), StoreError> {
    let id = asset.id();
    if self.pending.contains_key(&id) || self.resolved.contains(id) {
      return Err(StoreError::Duplicate(id));
    }
    self.pending.insert(id, asset);
    Ok(())
  }

  /// Pending assets in an order where dependencies come first.
  pub fn resolution_order(&self) -> Result<Vec<AssetId>, StoreError> {
    let mut graph: DiGraph<AssetId, ()> = DiGraph::new();
    let mut nodes: HashMap<AssetId, NodeIndex> = HashMap::new();

    for id in self.pending.keys() {
      nodes.insert(*id, graph.add_node(*id));
    }

    for (id, asset) in &self.pending {
      let dependent = nodes[id];
      for dependency in asset.dependencies() {
        match nodes.get(&dependency) {
          // Edge from dependency to dependent
          Some(&dep_idx) => {
            graph.add_edge(dep_idx, dependent, ());
          }
          None if self.resolved.contains(dependency) => {}
          None => {
            return Err(StoreError::UnknownDependency {
              asset: *id,
              dependency,
            });
          }
        }
      }
    }

    let sorted = toposort(&graph, None).map_err(|_| StoreError::CycleDetected)?;
    Ok(sorted.into_iter().map(|idx| graph[idx]).collect())
  }

  /// Load or generate every pending asset.
  ///
  /// Stops at the first failure; assets resolved before it stay resolved.
  pub fn resolve_all(&mut self, fetcher: &dyn FileFetcher) -> Result<Vec<Resolution>, StoreError> {
    let order = self.resolution_order()?;
    info!(asset_count = order.len(), "resolving assets");

    let mut resolutions = Vec::with_capacity(order.len());
    for id in order {
      let Some(mut asset) = self.pending.remove(&id) else {
        continue;
      };

      let wrap = |source| StoreError::Asset { id, source };
      let loaded = asset.load(fetcher).map_err(wrap)?;
      if !loaded {
        debug!(asset = %id, "nothing on disk, generating");
        asset.generate(&self.resolved).map_err(wrap)?;
      }

      let origin = if loaded { Origin::Loaded } else { Origin::Generated };
      info!(asset = %id, name = asset.name(), %origin, "resolved asset");
      self.resolved.insert(asset).map_err(wrap)?;
      resolutions.push(Resolution { id, origin });
    }

    Ok(resolutions)
  }

  /// Finalized assets.
  pub fn parents(&self) -> &Parents {
    &self.resolved
  }

  pub fn get<T: AssetKind>(&self) -> Option<&T> {
    self.resolved.get::<T>().ok()
  }

  /// Write the files of every resolved asset under `dir`.
  ///
  /// Each file is written to a temporary sibling and renamed into place.
  pub fn persist(&self, dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
    let mut written = Vec::new();

    for asset in self.resolved.iter() {
      for file in asset.files() {
        let path = dir.join(&file.filename);
        let write_err = |source| StoreError::Write {
          path: path.clone(),
          source,
        };

        if let Some(parent) = path.parent() {
          fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(TMP_SUFFIX);
        let temp_path = PathBuf::from(temp_name);

        fs::write(&temp_path, &file.data).map_err(write_err)?;
        fs::rename(&temp_path, &path).map_err(write_err)?;

        debug!(path = ?path, size = file.data.len(), "persisted asset file");
        written.push(path);
      }
    }

    Ok(written)
  }
}
