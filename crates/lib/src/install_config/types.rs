use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::asset::Validate;
use crate::manifests::ObjectMeta;

/// The subset of `install-config.yaml` the agent manifests derive from.
///
/// Sections the manifests never read are kept as opaque YAML so a complete
/// install config still decodes strictly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InstallConfig {
  pub api_version: String,
  pub metadata: ObjectMeta,
  pub base_domain: String,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub pull_secret: String,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub ssh_key: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub networking: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub compute: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub control_plane: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub platform: Option<Value>,
}

impl Validate for InstallConfig {
  fn validate(&self) -> Result<(), String> {
    if self.metadata.name.is_empty() {
      return Err("metadata.name is required".to_string());
    }
    if self.base_domain.is_empty() {
      return Err("baseDomain is required".to_string());
    }
    Ok(())
  }
}
