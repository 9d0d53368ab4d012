use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::Category;
use crate::errors::{CatalogError, Result};
use crate::modifier::Breakpoint;

/// Catalog export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Breakpoint prefix -> minimum width
    pub breakpoints: IndexMap<String, String>,

    /// Which categories to export
    pub categories: CategoryFilter,

    /// Manifest output options
    pub manifest: ManifestOptions,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoint::ALL
                .iter()
                .map(|bp| (bp.prefix().to_string(), bp.min_width().to_string()))
                .collect(),
            categories: CategoryFilter::default(),
            manifest: ManifestOptions::default(),
        }
    }
}

/// Category selection by path (`"Spacing.Gap"`, `"layout"`, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryFilter {
    /// Categories to include; empty means all
    pub include: Vec<String>,

    /// Categories to drop after `include` is applied
    pub exclude: Vec<String>,
}

/// Options for the JSON manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestOptions {
    /// Pretty-print the JSON
    pub pretty: bool,

    /// Include breakpoint and state variant listings
    pub include_modifiers: bool,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            include_modifiers: true,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_yaml::from_str(&content)
            .map_err(|e| CatalogError::ConfigError {
                message: format!("Failed to parse YAML config: {}", e),
            })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_json::from_str(&content)
            .map_err(|e| CatalogError::ConfigError {
                message: format!("Failed to parse JSON config: {}", e),
            })
    }

    /// Load configuration from a file (auto-detect format) and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            Some("json") => Self::from_json_file(path)?,
            _ => {
                return Err(CatalogError::ConfigError {
                    message: format!(
                        "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                        path.display()
                    ),
                })
            }
        };

        tracing::debug!(path = %path.display(), "loaded catalog config");
        config.validate()?;
        Ok(config)
    }

    /// Check breakpoint keys and category paths
    pub fn validate(&self) -> Result<()> {
        // Keys are exported verbatim as prefixes, so aliases like "xxl" are rejected
        for prefix in self.breakpoints.keys() {
            match prefix.parse::<Breakpoint>() {
                Ok(breakpoint) if breakpoint.prefix() == prefix.as_str() => {}
                Ok(breakpoint) => {
                    return Err(CatalogError::ConfigError {
                        message: format!(
                            "Breakpoint '{}' must be written as '{}'",
                            prefix,
                            breakpoint.prefix()
                        ),
                    })
                }
                Err(_) => {
                    return Err(CatalogError::ConfigError {
                        message: format!("Unknown breakpoint '{}' in breakpoints", prefix),
                    })
                }
            }
        }

        for path in self.categories.include.iter().chain(&self.categories.exclude) {
            path.parse::<Category>().map_err(|_| CatalogError::ConfigError {
                message: format!("Unknown category '{}' in category filter", path),
            })?;
        }

        Ok(())
    }

    /// Categories selected by the filter, in catalog order
    pub fn selected_categories(&self) -> Result<Vec<Category>> {
        let include = parse_categories(&self.categories.include)?;
        let exclude = parse_categories(&self.categories.exclude)?;

        Ok(Category::ALL
            .iter()
            .copied()
            .filter(|c| include.is_empty() || include.contains(c))
            .filter(|c| !exclude.contains(c))
            .collect())
    }

    /// Merge with another configuration
    pub fn merge(mut self, other: Self) -> Self {
        // Later breakpoint widths win
        self.breakpoints.extend(other.breakpoints);

        for path in other.categories.include {
            if !self.categories.include.contains(&path) {
                self.categories.include.push(path);
            }
        }
        for path in other.categories.exclude {
            if !self.categories.exclude.contains(&path) {
                self.categories.exclude.push(path);
            }
        }

        self.manifest = other.manifest;
        self
    }
}

fn parse_categories(paths: &[String]) -> Result<Vec<Category>> {
    paths.iter().map(|p| p.parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.breakpoints.len(), 5);
        assert_eq!(config.breakpoints.get("2xl"), Some(&"1536px".to_string()));
        assert!(config.manifest.pretty);
        assert_eq!(config.selected_categories().unwrap().len(), Category::ALL.len());
    }

    #[test]
    fn test_yaml_config_loading() {
        let yaml_content = r##"
breakpoints:
  sm: "600px"
categories:
  include:
    - "Spacing.Padding"
    - "layout"
  exclude:
    - "Layout"
manifest:
  pretty: false
"##;

        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(yaml_content.as_bytes()).unwrap();

        let config = CatalogConfig::from_file(file.path()).unwrap();
        assert_eq!(config.breakpoints.len(), 1);
        assert_eq!(config.breakpoints.get("sm"), Some(&"600px".to_string()));
        assert!(!config.manifest.pretty);
        assert!(config.manifest.include_modifiers);
        assert_eq!(config.selected_categories().unwrap(), vec![Category::SpacingPadding]);
    }

    #[test]
    fn test_json_config_loading() {
        let json_content = r##"{
  "categories": { "include": ["Typography.FontSize"] }
}"##;

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json_content.as_bytes()).unwrap();

        let config = CatalogConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.breakpoints.len(), 5);
        assert_eq!(config.selected_categories().unwrap(), vec![Category::TypographyFontSize]);
    }

    #[test]
    fn test_unknown_breakpoint_rejected() {
        let mut file = NamedTempFile::with_suffix(".yml").unwrap();
        file.write_all(b"breakpoints:\n  3xl: \"1920px\"\n").unwrap();

        let err = CatalogConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("3xl"), "unexpected error: {}", err);
    }

    #[test]
    fn test_breakpoint_aliases_rejected() {
        for key in ["xxl", " md"] {
            let mut config = CatalogConfig::default();
            config.breakpoints.insert(key.to_string(), "1px".to_string());

            match config.validate() {
                Err(CatalogError::ConfigError { message }) => {
                    assert!(message.contains(key), "unexpected message: {}", message)
                }
                other => panic!("expected ConfigError for {:?}, got {:?}", key, other),
            }
        }

        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(b"breakpoints:\n  xxl: \"1536px\"\n").unwrap();
        let err = CatalogConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("'2xl'"), "unexpected error: {}", err);
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(b"breakpoints: [unclosed\n").unwrap();

        match CatalogConfig::from_file(file.path()) {
            Err(CatalogError::ConfigError { message }) => {
                assert!(message.contains("Failed to parse YAML config"), "{}", message)
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut config = CatalogConfig::default();
        config.categories.exclude.push("Colors".to_string());
        assert!(matches!(config.validate(), Err(CatalogError::ConfigError { .. })));
        assert!(matches!(
            config.selected_categories(),
            Err(CatalogError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = NamedTempFile::with_suffix(".toml").unwrap();
        let err = CatalogConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported config file format"));
    }

    #[test]
    fn test_config_merge() {
        let mut base = CatalogConfig::default();
        base.categories.include.push("Layout".to_string());

        let mut other = CatalogConfig::default();
        other.breakpoints.insert("md".to_string(), "800px".to_string());
        other.categories.include.push("Grid".to_string());
        other.manifest.pretty = false;

        let merged = base.merge(other);
        assert_eq!(merged.breakpoints.get("md"), Some(&"800px".to_string()));
        assert_eq!(merged.categories.include, vec!["Layout".to_string(), "Grid".to_string()]);
        assert!(!merged.manifest.pretty);
        assert_eq!(
            merged.selected_categories().unwrap(),
            vec![Category::Layout, Category::Grid]
        );
    }
}
