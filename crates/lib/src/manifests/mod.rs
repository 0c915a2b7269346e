//! Cluster manifests generated for the agent-based installer.
//!
//! Each manifest is an asset whose value derives from the optional install
//! config and whose file lives under the cluster manifest directory.

mod cluster_deployment;
pub mod hive;
mod naming;

pub use cluster_deployment::{ClusterDeployment, build as build_cluster_deployment};
pub use hive::ObjectMeta;
pub use naming::ClusterIdentity;
