//! Key/value metadata attached to Saleor objects.

use serde::{Deserialize, Serialize};

/// A single metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataItem {
    /// Metadata key.
    pub key: String,
    /// Metadata value.
    pub value: String,
}

impl MetadataItem {
    /// Create a new metadata entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered metadata as returned by the API.
///
/// The API keeps insertion order, so this is a list rather than a map;
/// lookups are linear, which is fine for the handful of keys an object carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataMap(Vec<MetadataItem>);

impl MetadataMap {
    /// Value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.value.as_str())
    }

    /// Iterate entries in API order.
    pub fn iter(&self) -> impl Iterator<Item = &MetadataItem> {
        self.0.iter()
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<MetadataItem>> for MetadataMap {
    fn from(items: Vec<MetadataItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<MetadataItem> for MetadataMap {
    fn from_iter<I: IntoIterator<Item = MetadataItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_keeps_api_order() {
        let map: MetadataMap = serde_json::from_value(serde_json::json!([
            {"key": "erp.sku", "value": "A-1"},
            {"key": "color", "value": "red"}
        ]))
        .expect("deserialize");

        let keys: Vec<_> = map.iter().map(|item| item.key.as_str()).collect();
        assert_eq!(keys, ["erp.sku", "color"]);
        assert_eq!(map.get("color"), Some("red"));
        assert_eq!(map.get("missing"), None);
        assert_eq!(map.len(), 2);
    }
}
