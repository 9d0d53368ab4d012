use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Category;
use crate::config::CatalogConfig;
use crate::errors::Result;
use crate::modifier::{Breakpoint, StateVariant, SEPARATOR};
use crate::TAILWIND_VERSION;

/// Metadata for the exported manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Version of the manifest format
    pub version: String,

    /// Timestamp when the manifest was generated
    pub generated_at: DateTime<Utc>,

    /// Tailwind CSS version the catalog was transcribed from
    pub tailwind_version: String,

    /// Number of utilities in the manifest
    pub total_utilities: usize,

    /// Crate version
    pub generator_version: String,
}

/// Modifier prefixes available for the exported utilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestModifiers {
    /// Breakpoint prefix -> minimum width
    pub breakpoints: IndexMap<String, String>,

    /// State variant prefixes
    pub states: Vec<String>,

    /// Separator between prefix and utility
    pub separator: String,
}

/// Complete manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub metadata: ManifestMetadata,

    /// Category path -> (constant name -> class), in catalog order
    pub categories: IndexMap<String, IndexMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<ManifestModifiers>,
}

impl CatalogManifest {
    /// Manifest of the whole catalog with default breakpoints
    pub fn new() -> Self {
        ManifestBuilder::new().build()
    }

    /// Manifest shaped by a configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let mut builder = ManifestBuilder::new()
            .with_categories(config.selected_categories()?)
            .with_breakpoints(config.breakpoints.clone());
        if !config.manifest.include_modifiers {
            builder = builder.without_modifiers();
        }
        Ok(builder.build())
    }

    /// Class of `name` within the category at `path`
    pub fn class_of(&self, path: &str, name: &str) -> Option<&str> {
        self.categories
            .get(path)
            .and_then(|entries| entries.get(name))
            .map(String::as_str)
    }

    /// Convert manifest to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Convert manifest to pretty JSON string
    pub fn to_pretty_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert manifest to compact JSON string
    pub fn to_compact_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for CatalogManifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating manifests
pub struct ManifestBuilder {
    categories: Vec<Category>,
    breakpoints: IndexMap<String, String>,
    include_modifiers: bool,
}

impl ManifestBuilder {
    /// All categories, default breakpoints, modifiers included
    pub fn new() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
            breakpoints: Breakpoint::ALL
                .iter()
                .map(|bp| (bp.prefix().to_string(), bp.min_width().to_string()))
                .collect(),
            include_modifiers: true,
        }
    }

    /// Restrict the manifest to the given categories
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Override the breakpoint widths
    pub fn with_breakpoints(mut self, breakpoints: IndexMap<String, String>) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Leave out the modifier listing
    pub fn without_modifiers(mut self) -> Self {
        self.include_modifiers = false;
        self
    }

    /// Build the final manifest
    pub fn build(self) -> CatalogManifest {
        let mut categories = IndexMap::new();
        let mut total_utilities = 0;

        for category in &self.categories {
            let entries: IndexMap<String, String> = category
                .table()
                .iter()
                .map(|(name, class_name)| (name.to_string(), class_name.to_string()))
                .collect();
            total_utilities += entries.len();
            categories.insert(category.path().to_string(), entries);
        }

        tracing::debug!(
            categories = categories.len(),
            utilities = total_utilities,
            "built catalog manifest"
        );

        let modifiers = self.include_modifiers.then(|| ManifestModifiers {
            breakpoints: self.breakpoints,
            states: StateVariant::ALL.iter().map(|v| v.prefix().to_string()).collect(),
            separator: SEPARATOR.to_string(),
        });

        CatalogManifest {
            metadata: ManifestMetadata {
                version: "1.0.0".to_string(),
                generated_at: Utc::now(),
                tailwind_version: TAILWIND_VERSION.to_string(),
                total_utilities,
                generator_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            categories,
            modifiers,
        }
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
