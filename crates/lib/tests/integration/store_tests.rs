use std::fs;

use aim_lib::asset::{Asset, DirFetcher, Origin};
use aim_lib::consts::{CLUSTER_DEPLOYMENT_FILENAME, INSTALL_CONFIG_FILENAME};
use aim_lib::manifests::ClusterDeployment;
use aim_lib::store::{AssetStore, StoreError};
use tempfile::TempDir;
use tracing_test::traced_test;

use super::common::{write_file, write_install_config};

fn resolve(dir: &std::path::Path) -> Result<AssetStore, StoreError> {
  let mut store = AssetStore::with_defaults();
  store.resolve_all(&DirFetcher::new(dir))?;
  Ok(store)
}

#[test]
fn persisted_manifest_is_loaded_on_next_run() {
  let temp = TempDir::new().unwrap();
  write_install_config(temp.path());

  let first = resolve(temp.path()).unwrap();
  first.persist(temp.path()).unwrap();
  let first_config = first.get::<ClusterDeployment>().unwrap().config().cloned();

  let second = resolve(temp.path()).unwrap();
  let deployment = second.get::<ClusterDeployment>().unwrap();
  assert_eq!(deployment.origin(), Some(Origin::Loaded));
  assert_eq!(deployment.config().cloned(), first_config);
}

#[test]
fn loaded_file_round_trips_byte_for_byte() {
  let temp = TempDir::new().unwrap();
  write_install_config(temp.path());
  let hand_edited = "# edited by operator\napiVersion: hive.openshift.io/v1\nkind: ClusterDeployment\nmetadata:\n  name: edited\nspec:\n  clusterName:   edited\n  baseDomain: example.org\n";
  write_file(temp.path(), CLUSTER_DEPLOYMENT_FILENAME, hand_edited);

  let store = resolve(temp.path()).unwrap();
  store.persist(temp.path()).unwrap();

  let on_disk = fs::read_to_string(temp.path().join(CLUSTER_DEPLOYMENT_FILENAME)).unwrap();
  assert_eq!(on_disk, hand_edited);
  let config = store.get::<ClusterDeployment>().unwrap().config().unwrap();
  assert_eq!(config.metadata.name, "edited");
}

#[test]
fn install_config_is_never_written_back() {
  let temp = TempDir::new().unwrap();
  write_install_config(temp.path());

  let store = resolve(temp.path()).unwrap();
  let written = store.persist(temp.path()).unwrap();

  assert_eq!(written, vec![temp.path().join(CLUSTER_DEPLOYMENT_FILENAME)]);
  assert!(!written.iter().any(|p| p.ends_with(INSTALL_CONFIG_FILENAME)));
}

#[test]
fn stale_schema_on_disk_fails_loudly() {
  let temp = TempDir::new().unwrap();
  write_file(
    temp.path(),
    INSTALL_CONFIG_FILENAME,
    "apiVersion: v1\nmetadata:\n  name: c\nbaseDomain: d\nlegacyField: 1\n",
  );

  let err = resolve(temp.path()).err().unwrap();
  assert!(err.to_string().contains("install-config"));
}

#[test]
#[traced_test]
fn resolution_is_logged() {
  let temp = TempDir::new().unwrap();
  write_install_config(temp.path());
  resolve(temp.path()).unwrap();

  assert!(logs_contain("resolved asset"));
  assert!(logs_contain("cluster-deployment"));
}
