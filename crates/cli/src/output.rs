//! Terminal and JSON rendering of resolved assets.
//!
//! Status lines go through the `print_*` helpers so colors are only emitted
//! when the stream supports them.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use aim_lib::asset::{Asset, AssetFile, Origin};
use aim_lib::util::hash::hash_bytes;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
}

/// JSON view of one resolved asset.
#[derive(Debug, Serialize)]
pub struct AssetReport {
  pub id: &'static str,
  pub name: &'static str,
  pub origin: String,
  pub files: Vec<FileReport>,
}

#[derive(Debug, Serialize)]
pub struct FileReport {
  pub path: String,
  pub size: usize,
  pub sha256: String,
}

impl AssetReport {
  pub fn new(asset: &dyn Asset, origin: Origin) -> Self {
    Self {
      id: asset.id().0,
      name: asset.name(),
      origin: origin.to_string(),
      files: asset.files().iter().map(FileReport::new).collect(),
    }
  }
}

impl FileReport {
  fn new(file: &AssetFile) -> Self {
    Self {
      path: file.filename.clone(),
      size: file.data.len(),
      sha256: hash_bytes(&file.data).0,
    }
  }
}

fn format_bytes(bytes: usize) -> String {
  const KB: usize = 1024;

  if bytes >= KB {
    format!("{:.1} KB", bytes as f64 / KB as f64)
  } else {
    format!("{} B", bytes)
  }
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

/// `→ ClusterDeployment Config (generated)`
pub fn print_asset(name: &str, origin: Origin) {
  let label = origin.to_string();
  let label = match origin {
    Origin::Generated => label.if_supports_color(Stream::Stdout, |s| s.green()).to_string(),
    Origin::Loaded => label.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string(),
  };
  println!("  {} {} ({})", symbols::ARROW, name, label);
}

/// One persisted file, with its size and a short content hash.
pub fn print_file(file: &AssetFile) {
  let hash = hash_bytes(&file.data);
  println!(
    "      {} {} {}",
    file.filename,
    format_bytes(file.data.len()),
    hash.short(12).if_supports_color(Stream::Stdout, |s| s.dimmed())
  );
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
