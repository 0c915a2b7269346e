//! Hive resource types used by the cluster manifests.
//!
//! Only the fields the agent installer writes are modelled. Field order here is
//! the field order on disk. Every type rejects fields it does not model.

use serde::{Deserialize, Serialize};

use crate::asset::Validate;
use crate::consts::CLUSTER_DEPLOYMENT_KIND;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ObjectMeta {
  pub name: String,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClusterDeployment {
  pub api_version: String,
  pub kind: String,
  pub metadata: ObjectMeta,
  pub spec: ClusterDeploymentSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClusterDeploymentSpec {
  pub cluster_name: String,
  pub base_domain: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pull_secret_ref: Option<LocalObjectReference>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cluster_install_ref: Option<ClusterInstallLocalReference>,
}

/// Reference to an object in the same namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalObjectReference {
  pub name: String,
}

/// Reference to the install resource driving the deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterInstallLocalReference {
  pub group: String,
  pub version: String,
  pub kind: String,
  pub name: String,
}

impl Validate for ClusterDeployment {
  fn validate(&self) -> Result<(), String> {
    if self.kind != CLUSTER_DEPLOYMENT_KIND {
      return Err(format!("kind must be {}, got {:?}", CLUSTER_DEPLOYMENT_KIND, self.kind));
    }
    if self.metadata.name.is_empty() {
      return Err("metadata.name is required".to_string());
    }
    if self.spec.cluster_name.is_empty() {
      return Err("spec.clusterName is required".to_string());
    }
    if self.spec.base_domain.is_empty() {
      return Err("spec.baseDomain is required".to_string());
    }
    if let Some(install_ref) = &self.spec.cluster_install_ref
      && install_ref.name.is_empty()
    {
      return Err("spec.clusterInstallRef.name is required".to_string());
    }
    Ok(())
  }
}
