//! aim-lib: asset generation and hydration for agent installer manifests.
//!
//! This crate provides:
//! - `asset`: the asset node lifecycle (declare, generate or load, finalize, expose)
//! - `codec`: canonical YAML encoding with strict decoding
//! - `install_config`: the optional user-provided install config asset
//! - `manifests`: cluster manifests derived from the install config
//! - `store`: dependency-ordered resolution and persistence of assets

pub mod asset;
pub mod codec;
pub mod consts;
pub mod install_config;
pub mod manifests;
pub mod paths;
pub mod store;
pub mod util;
