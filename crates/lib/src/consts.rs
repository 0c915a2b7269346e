//! Process-wide constants.
//!
//! Filenames are fixed per asset kind and never change for the lifetime of a
//! process; loaders and generators must agree on them.

/// Environment variable overriding the asset directory.
pub const ASSET_DIR_ENV: &str = "AIM_ASSET_DIR";

/// User-provided install configuration, relative to the asset directory.
pub const INSTALL_CONFIG_FILENAME: &str = "install-config.yaml";

/// Logical path of the persisted ClusterDeployment manifest.
pub const CLUSTER_DEPLOYMENT_FILENAME: &str = "cluster-manifests/cluster-deployment.yaml";

/// Namespace used for cluster manifests when the install config sets none.
pub const DEFAULT_CLUSTER_NAMESPACE: &str = "cluster0";

/// Name of the secret holding the pull secret, referenced from cluster manifests.
pub const PULL_SECRET_NAME: &str = "pull-secret";

pub const HIVE_API_VERSION: &str = "hive.openshift.io/v1";
pub const CLUSTER_DEPLOYMENT_KIND: &str = "ClusterDeployment";

pub const AGENT_CLUSTER_INSTALL_GROUP: &str = "extensions.hive.openshift.io";
pub const AGENT_CLUSTER_INSTALL_VERSION: &str = "v1beta1";
pub const AGENT_CLUSTER_INSTALL_KIND: &str = "AgentClusterInstall";

/// Suffix appended to a file name while it is being written atomically.
pub const TMP_SUFFIX: &str = ".tmp";
