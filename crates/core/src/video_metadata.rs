//! Helpers over the free-form video metadata blob.
//!
//! The blob is caller-supplied JSON. Two pieces of it carry catalog
//! meaning: the `hash` attribute (the dedup key) and the `extractor`/`id`
//! pair the metadata identity key is derived from. Everything else passes
//! through untouched.

use serde_json::Value;

/// Attribute holding the content hash.
pub const HASH_FIELD: &str = "hash";

/// Attribute naming the source site/extractor.
pub const EXTRACTOR_FIELD: &str = "extractor";

/// Attribute holding the source-side item id.
pub const SOURCE_ID_FIELD: &str = "id";

/// Extract the content hash from a metadata blob.
///
/// Returns `None` when the attribute is absent, not a string, or empty;
/// creation rejects such blobs.
pub fn content_hash(metadata: &Value) -> Option<&str> {
    nonempty_str(metadata, HASH_FIELD)
}

/// Derive the composite identity key (`{extractor}:{id}`) used to resolve
/// the linked metadata entry.
///
/// Returns `None` when either attribute is missing or empty; linkage then
/// fails and no record is created.
pub fn identity_key(metadata: &Value) -> Option<String> {
    let extractor = nonempty_str(metadata, EXTRACTOR_FIELD)?;
    let source_id = nonempty_str(metadata, SOURCE_ID_FIELD)?;
    Some(format!("{extractor}:{source_id}"))
}

fn nonempty_str<'a>(metadata: &'a Value, field: &str) -> Option<&'a str> {
    metadata
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_hash_extraction() {
        let blob = json!({ "hash": "deadbeef", "title": "x" });
        assert_eq!(content_hash(&blob), Some("deadbeef"));
    }

    #[test]
    fn missing_or_invalid_hash_yields_none() {
        assert_eq!(content_hash(&json!({ "title": "x" })), None);
        assert_eq!(content_hash(&json!({ "hash": "" })), None);
        assert_eq!(content_hash(&json!({ "hash": 42 })), None);
        assert_eq!(content_hash(&json!(null)), None);
    }

    #[test]
    fn identity_key_composes_extractor_and_id() {
        let blob = json!({ "extractor": "youtube", "id": "abc123" });
        assert_eq!(identity_key(&blob), Some("youtube:abc123".to_string()));
    }

    #[test]
    fn identity_key_requires_both_attributes() {
        assert_eq!(identity_key(&json!({ "extractor": "youtube" })), None);
        assert_eq!(identity_key(&json!({ "id": "abc123" })), None);
        assert_eq!(identity_key(&json!({ "extractor": "", "id": "abc123" })), None);
        assert_eq!(identity_key(&json!({})), None);
    }
}
