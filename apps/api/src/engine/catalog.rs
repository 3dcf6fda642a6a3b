use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::engine::skill_space::SkillSpace;
use crate::engine::EngineError;

/// A single recommendable item with its relevance vector in skill space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,
    /// Content kind, e.g. "Book" / "Video" / "Course". Serialized as `type`,
    /// the dataset's column name.
    #[serde(rename = "type")]
    pub category: String,
    pub description: String,
    pub url: String,
    /// Relevance per skill dimension, aligned to the engine's `SkillSpace`.
    /// Components are non-negative and carry no normalization invariant.
    pub vector: Vec<f64>,
}

/// Immutable, order-preserving collection of content items.
///
/// Insertion order is the ranking tie-break key, so the catalog is never
/// re-sorted after construction.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    items: Vec<ContentItem>,
}

impl ContentCatalog {
    /// Validates every item against the skill space and freezes the catalog.
    /// Vectors must have exactly D finite, non-negative components.
    pub fn new(items: Vec<ContentItem>, space: &SkillSpace) -> Result<Self, EngineError> {
        for item in &items {
            if item.vector.len() != space.len() {
                return Err(EngineError::DimensionMismatch {
                    title: item.title.clone(),
                    expected: space.len(),
                    got: item.vector.len(),
                });
            }
            if let Some(value) = item
                .vector
                .iter()
                .copied()
                .find(|v| !v.is_finite() || *v < 0.0)
            {
                return Err(EngineError::MalformedVector {
                    title: item.title.clone(),
                    value,
                });
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Source of catalog items. The engine does not care where the dataset comes
/// from; implementations are swapped at startup (built-in literals, a JSON
/// file, eventually a remote service).
pub trait CatalogSource {
    fn load(&self) -> anyhow::Result<Vec<ContentItem>>;
}

/// Loads the catalog from a JSON file containing an array of content items.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> anyhow::Result<Vec<ContentItem>> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read catalog file {}", self.path.display()))?;
        let items: Vec<ContentItem> = serde_json::from_str(&raw).with_context(|| {
            format!(
                "catalog file {} is not a valid content item array",
                self.path.display()
            )
        })?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn space() -> SkillSpace {
        SkillSpace::new(vec!["A".to_string(), "B".to_string()]).unwrap()
    }

    fn item(title: &str, vector: Vec<f64>) -> ContentItem {
        ContentItem {
            title: title.to_string(),
            category: "Book".to_string(),
            description: "desc".to_string(),
            url: "https://example.com".to_string(),
            vector,
        }
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let result = ContentCatalog::new(vec![item("short", vec![0.5])], &space());
        assert!(matches!(
            result,
            Err(EngineError::DimensionMismatch {
                expected: 2,
                got: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_negative_component_rejected() {
        let result = ContentCatalog::new(vec![item("neg", vec![0.5, -0.1])], &space());
        assert!(matches!(result, Err(EngineError::MalformedVector { .. })));
    }

    #[test]
    fn test_nan_component_rejected() {
        let result = ContentCatalog::new(vec![item("nan", vec![f64::NAN, 0.1])], &space());
        assert!(matches!(result, Err(EngineError::MalformedVector { .. })));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = ContentCatalog::new(vec![], &space()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let catalog = ContentCatalog::new(
            vec![item("first", vec![0.1, 0.2]), item("second", vec![0.3, 0.4])],
            &space(),
        )
        .unwrap();
        assert_eq!(catalog.items()[0].title, "first");
        assert_eq!(catalog.items()[1].title, "second");
    }

    #[test]
    fn test_item_deserializes_type_column() {
        // The JSON shape uses "type" for what the struct calls category.
        let json = r#"{
            "title": "Atomic Habits",
            "type": "Book",
            "description": "Build good habits and break bad ones using tiny changes.",
            "url": "https://example.com/atomic-habits",
            "vector": [0.0, 0.1]
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, "Book");
        assert_eq!(item.vector.len(), 2);
    }

    #[test]
    fn test_json_file_catalog_loads_item_array() {
        let dir = std::env::temp_dir();
        let path = dir.join("catalog_source_test.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            br#"[{"title": "t", "type": "Video", "description": "d", "url": "u", "vector": [1.0, 0.0]}]"#,
        )
        .unwrap();

        let items = JsonFileCatalog::new(&path).load().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, "Video");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_json_file_catalog_missing_file_errors() {
        let result = JsonFileCatalog::new("/nonexistent/catalog.json").load();
        assert!(result.is_err());
    }
}
