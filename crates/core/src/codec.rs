//! Structured field codec.
//!
//! Catalog rows store the free-form video metadata blob and the storyboard
//! file-id list as JSON text. [`encode`] and [`decode`] are the only paths
//! in and out of that representation. A decode failure on a stored row
//! means the row is corrupt, not absent.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A structured value could not be serialized to its stored text form.
#[derive(Debug, thiserror::Error)]
#[error("structured field could not be encoded: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// Stored text could not be parsed back into a structured value.
#[derive(Debug, thiserror::Error)]
#[error("structured field could not be decoded: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Encode a structured value to its stored text form.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(value)?)
}

/// Decode stored text back into a structured value.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(text)?)
}
