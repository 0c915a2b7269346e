//! Asset nodes of the installation dependency graph.
//!
//! Every asset follows the same lifecycle:
//!
//! 1. declare its dependencies ([`Asset::dependencies`]);
//! 2. get populated by exactly one of [`Asset::generate`] (from resolved
//!    [`Parents`]) or [`Asset::load`] (from a [`FileFetcher`]);
//! 3. pass finalize, after which its state is read-only.
//!
//! Both population paths converge on the same validation in
//! [`ManifestNode`], so consumers cannot tell whether a finalized asset was
//! generated or loaded except by asking for its [`Origin`].

use std::any::Any;

mod fetch;
mod node;
mod parents;
mod types;

pub use fetch::*;
pub use node::*;
pub use parents::*;
pub use types::*;

/// A node of the asset graph.
pub trait Asset: Any + Send + Sync {
  fn id(&self) -> AssetId;

  /// Human friendly name, used in errors and logs.
  fn name(&self) -> &'static str;

  /// Assets that must be finalized before this one is generated.
  ///
  /// Must return the same list on every call.
  fn dependencies(&self) -> Vec<AssetId>;

  fn generate(&mut self, parents: &Parents) -> Result<(), AssetError>;

  /// Returns `Ok(false)` when there is nothing on disk to load.
  fn load(&mut self, fetcher: &dyn FileFetcher) -> Result<bool, AssetError>;

  fn state(&self) -> AssetState;

  fn origin(&self) -> Option<Origin>;

  /// Files to persist for this asset.
  fn files(&self) -> &[AssetFile] {
    &[]
  }

  fn as_any(&self) -> &dyn Any;
}

/// An asset type with a compile-time id, usable for typed lookups.
pub trait AssetKind: Asset + Sized {
  const ID: AssetId;
}
