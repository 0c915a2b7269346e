//! Names the cluster manifests derive from the install config.
//!
//! All derivations are pure: identical install configs give identical names.

use crate::consts::PULL_SECRET_NAME;
use crate::install_config::OptionalInstallConfig;

/// Identity fields shared by the cluster manifests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterIdentity {
  pub cluster_name: String,
  pub namespace: String,
  pub base_domain: String,
  pub pull_secret_name: String,
  pub agent_cluster_install_name: String,
}

impl ClusterIdentity {
  /// `None` when no install config was provided.
  pub fn from_install_config(install_config: &OptionalInstallConfig) -> Option<Self> {
    let cluster_name = install_config.cluster_name()?;
    Some(Self {
      cluster_name: cluster_name.to_string(),
      namespace: install_config.cluster_namespace()?.to_string(),
      base_domain: install_config.base_domain()?.to_string(),
      pull_secret_name: PULL_SECRET_NAME.to_string(),
      agent_cluster_install_name: cluster_name.to_string(),
    })
  }
}
