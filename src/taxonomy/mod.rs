//! Keyword taxonomy for legal-piece categories.
//!
//! A [`Taxonomy`] is an ordered list of categories. Order matters: both the
//! scanner and the classifier take the first category that matches, so more
//! specific categories must be declared before broader ones.

mod builtin;
mod config;

pub use config::{CategoryConfig, TaxonomyConfig};

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::text::normalize;

/// One category of the taxonomy.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    keywords: Vec<String>,
    patterns: Vec<Regex>,
    preselected: bool,
}

impl Category {
    /// Category name as shown to users.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized keyword variants, in declaration order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Header patterns used by the content scanner.
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Whether pieces of this category start out selected.
    pub fn is_preselected(&self) -> bool {
        self.preselected
    }

    /// Whether any header pattern matches `header`.
    pub fn matches_header(&self, header: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(header))
    }

    /// First keyword contained in an already-normalized `text`.
    pub fn keyword_in<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.keywords
            .iter()
            .find(|k| text.contains(k.as_str()))
            .map(String::as_str)
    }
}

/// Ordered set of categories with keyword and header-pattern rules.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    /// Start building a custom taxonomy.
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::default()
    }

    /// Built-in taxonomy of Brazilian court filings.
    pub fn legal_default() -> Self {
        builtin::legal_default()
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look a category up by its exact name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Position of a category in declaration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    /// Whether pieces of the named category start out selected.
    pub fn is_preselected(&self, name: &str) -> bool {
        self.get(name).is_some_and(Category::is_preselected)
    }

    /// Names of the pre-selected categories, in declaration order.
    pub fn preselected(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .filter(|c| c.preselected)
            .map(|c| c.name.as_str())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the taxonomy has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::legal_default()
    }
}

/// Builder for [`Taxonomy`].
///
/// Keywords are normalized on insertion; patterns are compiled
/// case-insensitive and multi-line when [`TaxonomyBuilder::build`] runs.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyBuilder {
    categories: Vec<CategoryConfig>,
}

impl TaxonomyBuilder {
    /// Append a category with its keyword variants.
    pub fn category<I, T>(mut self, name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.categories.push(CategoryConfig {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            patterns: Vec::new(),
            preselected: false,
        });
        self
    }

    /// Add header patterns to the most recently added category.
    pub fn patterns<I, T>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        if let Some(last) = self.categories.last_mut() {
            last.patterns.extend(patterns.into_iter().map(Into::into));
        }
        self
    }

    /// Mark the most recently added category as pre-selected.
    pub fn preselected(mut self) -> Self {
        if let Some(last) = self.categories.last_mut() {
            last.preselected = true;
        }
        self
    }

    /// Append a category described by configuration.
    pub fn with_config(mut self, config: CategoryConfig) -> Self {
        self.categories.push(config);
        self
    }

    /// Validate names and compile patterns.
    pub fn build(self) -> Result<Taxonomy> {
        let mut categories: Vec<Category> = Vec::with_capacity(self.categories.len());

        for config in self.categories {
            let name = config.name.trim().to_string();
            if name.is_empty() {
                return Err(Error::InvalidTaxonomy("category name is empty".to_string()));
            }
            if categories.iter().any(|c| c.name == name) {
                return Err(Error::InvalidTaxonomy(format!(
                    "category '{}' is declared twice",
                    name
                )));
            }

            let mut keywords: Vec<String> = Vec::new();
            for keyword in config.keywords.iter().map(|k| normalize(k)) {
                if !keyword.is_empty() && !keywords.contains(&keyword) {
                    keywords.push(keyword);
                }
            }

            let patterns = config
                .patterns
                .iter()
                .map(|p| {
                    RegexBuilder::new(p)
                        .case_insensitive(true)
                        .multi_line(true)
                        .build()
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;

            categories.push(Category {
                name,
                keywords,
                patterns,
                preselected: config.preselected,
            });
        }

        Ok(Taxonomy { categories })
    }
}
