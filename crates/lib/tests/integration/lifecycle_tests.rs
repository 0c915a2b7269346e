use aim_lib::asset::{Asset, AssetError, AssetState, MemoryFetcher, Origin, Parents};
use aim_lib::codec::{self, CodecMode};
use aim_lib::consts::{CLUSTER_DEPLOYMENT_FILENAME, INSTALL_CONFIG_FILENAME};
use aim_lib::install_config::OptionalInstallConfig;
use aim_lib::manifests::{ClusterDeployment, hive};

use super::common::{INSTALL_CONFIG, identity};

fn resolved_install_config(content: Option<&str>) -> Parents {
  let mut install_config = OptionalInstallConfig::new();
  let fetcher = match content {
    Some(content) => MemoryFetcher::new().with_file(INSTALL_CONFIG_FILENAME, content),
    None => MemoryFetcher::new(),
  };
  if !install_config.load(&fetcher).unwrap() {
    install_config.generate(&Parents::new()).unwrap();
  }

  let mut parents = Parents::new();
  parents.insert(Box::new(install_config)).unwrap();
  parents
}

#[test]
fn scenario_generates_single_cluster_deployment() {
  let mut asset = ClusterDeployment::new();
  asset.generate_from(Some(&identity())).unwrap();

  let config = asset.config().unwrap();
  assert_eq!(config.metadata.name, "test-cluster");
  assert_eq!(config.spec.base_domain, "example.com");
  assert_eq!(
    config.spec.cluster_install_ref.as_ref().unwrap().name,
    "test-cluster"
  );
  assert_eq!(asset.files().len(), 1);
  assert!(!asset.files()[0].data.is_empty());
}

#[test]
fn generate_from_parents_matches_scenario() {
  let parents = resolved_install_config(Some(INSTALL_CONFIG));
  let mut from_parents = ClusterDeployment::new();
  from_parents.generate(&parents).unwrap();

  let mut from_identity = ClusterDeployment::new();
  from_identity.generate_from(Some(&identity())).unwrap();

  assert_eq!(from_parents.files(), from_identity.files());
}

#[test]
fn unset_install_config_yields_no_files() {
  let parents = resolved_install_config(None);
  let mut asset = ClusterDeployment::new();
  asset.generate(&parents).unwrap();

  assert_eq!(asset.state(), AssetState::Finalized);
  assert!(asset.config().is_none());
  assert!(asset.files().is_empty());
  asset.finalize().unwrap();
}

#[test]
fn round_trip_preserves_value() {
  let mut asset = ClusterDeployment::new();
  asset.generate_from(Some(&identity())).unwrap();

  let value = asset.config().unwrap();
  let bytes = codec::encode(value).unwrap();
  let decoded: hive::ClusterDeployment = codec::decode(&bytes, CodecMode::Strict).unwrap();
  assert_eq!(&decoded, value);
}

#[test]
fn independent_generations_are_byte_identical() {
  let parents = resolved_install_config(Some(INSTALL_CONFIG));

  let mut first = ClusterDeployment::new();
  first.generate(&parents).unwrap();
  let mut second = ClusterDeployment::new();
  second.generate(&parents).unwrap();

  assert_eq!(first.files()[0].data, second.files()[0].data);
}

#[test]
fn load_rejects_one_extra_field() {
  let mut generated = ClusterDeployment::new();
  generated.generate_from(Some(&identity())).unwrap();
  let mut content = String::from_utf8(generated.files()[0].data.clone()).unwrap();
  content = content.replace("  baseDomain: example.com\n", "  baseDomain: example.com\n  region: mars\n");

  let mut asset = ClusterDeployment::new();
  let fetcher = MemoryFetcher::new().with_file(CLUSTER_DEPLOYMENT_FILENAME, content);
  let err = asset.load(&fetcher).unwrap_err();

  assert!(matches!(err, AssetError::Parse { .. }));
  assert!(asset.files().is_empty());
}

#[test]
fn load_of_missing_file_is_not_an_error() {
  let mut asset = ClusterDeployment::new();
  assert!(!asset.load(&MemoryFetcher::new()).unwrap());
}

#[test]
fn finalize_without_generate_or_load_fails() {
  let mut asset = ClusterDeployment::new();
  assert!(matches!(asset.finalize(), Err(AssetError::Invariant { .. })));
  assert_eq!(asset.state(), AssetState::Failed);
}

#[test]
fn loaded_and_generated_converge() {
  let mut generated = ClusterDeployment::new();
  generated.generate_from(Some(&identity())).unwrap();

  let mut loaded = ClusterDeployment::new();
  let fetcher = MemoryFetcher::new().with_file(CLUSTER_DEPLOYMENT_FILENAME, generated.files()[0].data.clone());
  assert!(loaded.load(&fetcher).unwrap());

  assert_eq!(generated.origin(), Some(Origin::Generated));
  assert_eq!(loaded.origin(), Some(Origin::Loaded));
  assert_eq!(generated.config(), loaded.config());
  assert_eq!(generated.files(), loaded.files());
}

#[test]
fn finalized_asset_is_shareable_across_threads() {
  let mut asset = ClusterDeployment::new();
  asset.generate_from(Some(&identity())).unwrap();
  let asset = std::sync::Arc::new(asset);

  let handles: Vec<_> = (0..4)
    .map(|_| {
      let asset = std::sync::Arc::clone(&asset);
      std::thread::spawn(move || asset.files()[0].data.clone())
    })
    .collect();

  for handle in handles {
    assert_eq!(handle.join().unwrap(), asset.files()[0].data);
  }
}
