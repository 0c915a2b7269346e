mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// aim - generate and load agent installer manifests
#[derive(Parser)]
#[command(name = "aim")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate assets and write them to the asset directory
  Create {
    #[command(subcommand)]
    target: CreateTarget,
  },

  /// Resolve assets and show where each one came from, without writing
  Inspect {
    /// Asset directory (default: $AIM_ASSET_DIR or the current directory)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },
}

#[derive(Subcommand)]
enum CreateTarget {
  /// Cluster manifests derived from install-config.yaml
  ClusterManifests {
    /// Asset directory (default: $AIM_ASSET_DIR or the current directory)
    #[arg(long)]
    dir: Option<PathBuf>,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Create {
      target: CreateTarget::ClusterManifests { dir },
    } => cmd::cmd_create_cluster_manifests(dir),
    Commands::Inspect { dir, output } => cmd::cmd_inspect(dir, output),
  }
}
