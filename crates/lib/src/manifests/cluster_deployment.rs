use std::any::Any;

use crate::asset::{
  Asset, AssetError, AssetFile, AssetId, AssetKind, AssetState, FileFetcher, ManifestNode, Origin, Parents,
};
use crate::consts::{
  AGENT_CLUSTER_INSTALL_GROUP, AGENT_CLUSTER_INSTALL_KIND, AGENT_CLUSTER_INSTALL_VERSION, CLUSTER_DEPLOYMENT_FILENAME,
  CLUSTER_DEPLOYMENT_KIND, HIVE_API_VERSION,
};
use crate::install_config::OptionalInstallConfig;

use super::hive::{self, ClusterDeploymentSpec, ClusterInstallLocalReference, LocalObjectReference, ObjectMeta};
use super::naming::ClusterIdentity;

/// Generates `cluster-manifests/cluster-deployment.yaml`.
#[derive(Debug, Clone)]
pub struct ClusterDeployment {
  node: ManifestNode<hive::ClusterDeployment>,
}

impl Default for ClusterDeployment {
  fn default() -> Self {
    Self::new()
  }
}

impl ClusterDeployment {
  pub fn new() -> Self {
    Self {
      node: ManifestNode::new("ClusterDeployment Config", CLUSTER_DEPLOYMENT_FILENAME),
    }
  }

  /// The finalized manifest, `None` when absent or not yet finalized.
  pub fn config(&self) -> Option<&hive::ClusterDeployment> {
    self.node.value()
  }

  pub fn is_absent(&self) -> bool {
    self.node.is_absent()
  }

  /// Generate from already-derived identity fields; `None` skips the manifest.
  pub fn generate_from(&mut self, identity: Option<&ClusterIdentity>) -> Result<(), AssetError> {
    self.node.generate(identity.map(build))
  }

  pub fn finalize(&mut self) -> Result<(), AssetError> {
    self.node.finalize()
  }
}

/// Build the manifest for a cluster identity.
pub fn build(identity: &ClusterIdentity) -> hive::ClusterDeployment {
  hive::ClusterDeployment {
    api_version: HIVE_API_VERSION.to_string(),
    kind: CLUSTER_DEPLOYMENT_KIND.to_string(),
    metadata: ObjectMeta {
      name: identity.cluster_name.clone(),
      namespace: identity.namespace.clone(),
    },
    spec: ClusterDeploymentSpec {
      cluster_name: identity.cluster_name.clone(),
      base_domain: identity.base_domain.clone(),
      pull_secret_ref: Some(LocalObjectReference {
        name: identity.pull_secret_name.clone(),
      }),
      cluster_install_ref: Some(ClusterInstallLocalReference {
        group: AGENT_CLUSTER_INSTALL_GROUP.to_string(),
        version: AGENT_CLUSTER_INSTALL_VERSION.to_string(),
        kind: AGENT_CLUSTER_INSTALL_KIND.to_string(),
        name: identity.agent_cluster_install_name.clone(),
      }),
    },
  }
}

impl AssetKind for ClusterDeployment {
  const ID: AssetId = AssetId("cluster-deployment");
}

impl Asset for ClusterDeployment {
  fn id(&self) -> AssetId {
    Self::ID
  }

  fn name(&self) -> &'static str {
    self.node.name()
  }

  fn dependencies(&self) -> Vec<AssetId> {
    vec![OptionalInstallConfig::ID]
  }

  fn generate(&mut self, parents: &Parents) -> Result<(), AssetError> {
    let install_config = parents.get::<OptionalInstallConfig>()?;
    let identity = ClusterIdentity::from_install_config(install_config);
    self.generate_from(identity.as_ref())
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

  fn files(&self) -> &[AssetFile] {
    self.node.files()
  }

  fn as_any(&self) -> &dyn Any {
    self
  }
}
