//! Implementation of the `aim create cluster-manifests` command.
//!
//! Resolves the asset graph from the asset directory and writes every
//! generated manifest back into it.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::output::{print_file, print_success, print_warning};

use super::{dir_or_default, resolve_assets};

pub fn cmd_create_cluster_manifests(dir: Option<PathBuf>) -> Result<()> {
  let dir = dir_or_default(dir);
  let (store, _) = resolve_assets(&dir)?;

  let written = store
    .persist(&dir)
    .with_context(|| format!("Failed to write manifests to {}", dir.display()))?;

  if written.is_empty() {
    print_warning("No install-config.yaml found, no cluster manifests generated");
    return Ok(());
  }

  print_success(&format!("Wrote {} file(s)", written.len()));
  for asset in store.parents().iter() {
    for file in asset.files() {
      print_file(file);
    }
  }

  Ok(())
}
