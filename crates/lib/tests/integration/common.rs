//! Shared test helpers for library integration tests.

use std::path::Path;

use aim_lib::consts::INSTALL_CONFIG_FILENAME;
use aim_lib::manifests::ClusterIdentity;

/// Install config for `test-cluster` on `example.com`.
pub const INSTALL_CONFIG: &str = r#"apiVersion: v1
metadata:
  name: test-cluster
baseDomain: example.com
pullSecret: '{"auths": {}}'
platform:
  none: {}
"#;

pub fn identity() -> ClusterIdentity {
  ClusterIdentity {
    cluster_name: "test-cluster".to_string(),
    namespace: "cluster0".to_string(),
    base_domain: "example.com".to_string(),
    pull_secret_name: "pull-secret".to_string(),
    agent_cluster_install_name: "test-cluster".to_string(),
  }
}

/// Write a file relative to `dir`, creating parents.
pub fn write_file(dir: &Path, relative_path: &str, content: &str) {
  let path = dir.join(relative_path);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).unwrap();
  }
  std::fs::write(&path, content).unwrap();
}

pub fn write_install_config(dir: &Path) {
  write_file(dir, INSTALL_CONFIG_FILENAME, INSTALL_CONFIG);
}
