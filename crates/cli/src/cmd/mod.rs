mod create;
mod inspect;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use aim_lib::asset::DirFetcher;
use aim_lib::paths::asset_dir;
use aim_lib::store::{AssetStore, Resolution};

pub use create::cmd_create_cluster_manifests;
pub use inspect::cmd_inspect;

/// Resolve every known asset against `dir`.
fn resolve_assets(dir: &Path) -> Result<(AssetStore, Vec<Resolution>)> {
  debug!(dir = ?dir, "resolving assets");
  let mut store = AssetStore::with_defaults();
  let resolutions = store
    .resolve_all(&DirFetcher::new(dir))
    .with_context(|| format!("Failed to resolve assets in {}", dir.display()))?;
  Ok((store, resolutions))
}

fn dir_or_default(dir: Option<PathBuf>) -> PathBuf {
  dir.unwrap_or_else(asset_dir)
}
