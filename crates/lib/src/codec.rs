//! YAML codec for manifests.
//!
//! Encoding is canonical: the same value always produces the same bytes, since
//! field order follows the struct definitions and maps are ordered.
//!
//! Decoding takes an explicit [`CodecMode`]. In [`CodecMode::Strict`] any key
//! present in the document but unknown to the target type is an error, so a
//! manifest written by a newer or older schema fails loudly instead of being
//! silently truncated.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How tolerant decoding is of fields the target schema does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodecMode {
  /// Reject unknown fields.
  #[default]
  Strict,
  /// Drop unknown fields.
  Lenient,
}

#[derive(Debug, Error)]
pub enum CodecError {
  #[error("failed to encode yaml: {0}")]
  Encode(#[source] serde_yaml::Error),

  #[error("failed to decode yaml: {0}")]
  Decode(#[source] serde_yaml::Error),

  #[error("unknown field `{path}`")]
  UnknownField { path: String },
}

/// Serialize a value to canonical YAML bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
  serde_yaml::to_string(value)
    .map(String::into_bytes)
    .map_err(CodecError::Encode)
}

/// Deserialize YAML bytes into `T`.
///
/// Strict mode records every key the target type skips while parsing and
/// reports the first one by its dotted path.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], mode: CodecMode) -> Result<T, CodecError> {
  let deserializer = serde_yaml::Deserializer::from_slice(bytes);

  match mode {
    CodecMode::Lenient => T::deserialize(deserializer).map_err(CodecError::Decode),
    CodecMode::Strict => {
      let mut unknown = Vec::new();
      let value: T = serde_ignored::deserialize(deserializer, |path| unknown.push(path.to_string()))
        .map_err(CodecError::Decode)?;
      match unknown.into_iter().next() {
        Some(path) => Err(CodecError::UnknownField { path }),
        None => Ok(value),
      }
    }
  }
}
