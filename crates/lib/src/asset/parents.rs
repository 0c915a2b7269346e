use std::collections::BTreeMap;

use super::types::{AssetError, AssetId, AssetState};
use super::{Asset, AssetKind};

/// Finalized assets, keyed by id, handed read-only to dependents.
///
/// Only finalized assets can be inserted, so anything reachable from here has
/// passed its finalize checks.
#[derive(Default)]
pub struct Parents {
  assets: BTreeMap<AssetId, Box<dyn Asset>>,
}

impl Parents {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, asset: Box<dyn Asset>) -> Result<(), AssetError> {
    if asset.state() != AssetState::Finalized {
      return Err(AssetError::NotFinalized { name: asset.name() });
    }
    self.assets.insert(asset.id(), asset);
    Ok(())
  }

  /// Typed lookup of a resolved dependency.
  pub fn get<T: AssetKind>(&self) -> Result<&T, AssetError> {
    self
      .assets
      .get(&T::ID)
      .and_then(|asset| asset.as_any().downcast_ref::<T>())
      .ok_or(AssetError::MissingDependency { dependency: T::ID })
  }

  pub fn get_by_id(&self, id: AssetId) -> Option<&dyn Asset> {
    self.assets.get(&id).map(|asset| asset.as_ref())
  }

  pub fn contains(&self, id: AssetId) -> bool {
    self.assets.contains_key(&id)
  }

  /// Assets in id order.
  pub fn iter(&self) -> impl Iterator<Item = &dyn Asset> {
    self.assets.values().map(|asset| asset.as_ref())
  }

  pub fn len(&self) -> usize {
    self.assets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::install_config::OptionalInstallConfig;
  use crate::manifests::ClusterDeployment;

  #[test]
  fn rejects_unfinalized_asset() {
    let mut parents = Parents::new();
    let err = parents.insert(Box::new(OptionalInstallConfig::new())).unwrap_err();
    assert!(matches!(err, AssetError::NotFinalized { .. }));
    assert!(parents.is_empty());
  }

  #[test]
  fn typed_lookup_returns_inserted_asset() {
    let mut install_config = OptionalInstallConfig::new();
    install_config.generate(&Parents::new()).unwrap();

    let mut parents = Parents::new();
    parents.insert(Box::new(install_config)).unwrap();

    let found = parents.get::<OptionalInstallConfig>().unwrap();
    assert!(found.config().is_none());
    assert!(parents.contains(OptionalInstallConfig::ID));
  }

  #[test]
  fn missing_dependency_names_the_id() {
    let parents = Parents::new();
    let err = parents.get::<ClusterDeployment>().err().unwrap();
    assert!(matches!(
      err,
      AssetError::MissingDependency { dependency } if dependency == ClusterDeployment::ID
    ));
  }
}
