//! Implementation of the `aim inspect` command.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::output::{AssetReport, OutputFormat, print_asset, print_file, print_info, print_json};

use super::{dir_or_default, resolve_assets};

#[derive(Serialize)]
struct InspectReport {
  dir: String,
  assets: Vec<AssetReport>,
}

pub fn cmd_inspect(dir: Option<PathBuf>, format: OutputFormat) -> Result<()> {
  let dir = dir_or_default(dir);
  let (store, resolutions) = resolve_assets(&dir)?;

  let resolved = resolutions
    .iter()
    .filter_map(|r| store.parents().get_by_id(r.id).map(|asset| (asset, r.origin)));

  if format.is_json() {
    let report = InspectReport {
      dir: dir.display().to_string(),
      assets: resolved.map(|(asset, origin)| AssetReport::new(asset, origin)).collect(),
    };
    return print_json(&report);
  }

  print_info(&format!("Assets in {}", dir.display()));
  for (asset, origin) in resolved {
    print_asset(asset.name(), origin);
    if asset.files().is_empty() {
      println!("      no files");
    }
    for file in asset.files() {
      print_file(file);
    }
  }

  Ok(())
}
