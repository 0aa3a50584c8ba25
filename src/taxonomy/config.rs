//! Serializable taxonomy definitions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Taxonomy, TaxonomyBuilder};
use crate::error::{Error, Result};

/// JSON shape of a taxonomy: `{"categories": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Categories in priority order
    pub categories: Vec<CategoryConfig>,
}

/// JSON shape of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Category name
    pub name: String,

    /// Keyword variants (matched case- and diacritic-insensitively)
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Header regex patterns for content scanning
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Whether pieces of this category start out selected
    #[serde(default)]
    pub preselected: bool,
}

impl TaxonomyConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidTaxonomy(format!("JSON parse error: {}", e)))
    }

    /// Serialize the configuration as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }

    /// Compile into a [`Taxonomy`].
    pub fn build(self) -> Result<Taxonomy> {
        self.categories
            .into_iter()
            .fold(TaxonomyBuilder::default(), TaxonomyBuilder::with_config)
            .build()
    }
}

impl Taxonomy {
    /// Build a taxonomy from a JSON definition.
    ///
    /// # Example
    ///
    /// ```
    /// use pecas::Taxonomy;
    ///
    /// let taxonomy = Taxonomy::from_json_str(
    ///     r#"{"categories": [{"name": "Laudo", "keywords": ["laudo"], "preselected": true}]}"#,
    /// ).unwrap();
    /// assert!(taxonomy.is_preselected("Laudo"));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        TaxonomyConfig::from_json_str(json)?.build()
    }

    /// Build a taxonomy from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
