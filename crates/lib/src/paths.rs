//! Filesystem locations.

use std::path::PathBuf;

use crate::consts::ASSET_DIR_ENV;

/// Returns the asset directory: `$AIM_ASSET_DIR` when set, else the current directory.
pub fn asset_dir() -> PathBuf {
  std::env::var_os(ASSET_DIR_ENV)
    .filter(|dir| !dir.is_empty())
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from("."))
}
