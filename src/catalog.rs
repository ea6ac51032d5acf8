//! Option catalog module
//!
//! Defines the selectable configuration types offered per assignment category,
//! and the selection model built from them when a category is loaded.

use serde::{Deserialize, Serialize};

use crate::error::{AssignError, Result};

/// One selectable configuration type within a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOption {
    /// Identifier, unique within its category
    pub id: String,
    /// Display label shown next to the checkbox
    pub label: String,
    /// Whether the option is currently enabled in the persisted settings
    pub selected: bool,
}

impl TypeOption {
    /// Create a new unselected option
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            selected: false,
        }
    }
}

/// Ordered set of options offered for one category.
///
/// Insertion order is presentation order; ids are unique within the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    /// Category this selection belongs to
    pub category: String,
    /// Options in presentation order
    pub options: Vec<TypeOption>,
}

impl SelectionSet {
    /// Ids of the currently selected options, in presentation order
    pub fn enabled_ids(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|opt| opt.selected)
            .map(|opt| opt.id.as_str())
            .collect()
    }

    /// Whether the set contains an option with the given id
    pub fn contains(&self, id: &str) -> bool {
        self.options.iter().any(|opt| opt.id == id)
    }
}

/// Option catalog for one assignment category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCatalog {
    /// Category name (e.g. "core")
    pub name: String,
    /// Options offered for this category, in presentation order
    pub options: Vec<TypeOption>,
}

/// Catalog of all known assignment categories and their options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Categories in presentation order
    pub categories: Vec<CategoryCatalog>,
}

impl Catalog {
    /// Look up the option catalog for a category
    pub fn category(&self, name: &str) -> Option<&CategoryCatalog> {
        self.categories.iter().find(|cat| cat.name == name)
    }

    /// Names of all known categories, in presentation order
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|cat| cat.name.as_str()).collect()
    }

    /// Validate catalog invariants: non-empty category names, non-empty
    /// option ids, and id uniqueness within each category
    pub fn validate(&self) -> Result<()> {
        for cat in &self.categories {
            if cat.name.trim().is_empty() {
                return Err(AssignError::catalog("category name cannot be empty"));
            }
            for (index, opt) in cat.options.iter().enumerate() {
                if opt.id.trim().is_empty() {
                    return Err(AssignError::catalog(format!(
                        "category '{}' has an option with an empty id",
                        cat.name
                    )));
                }
                if cat.options[..index].iter().any(|prev| prev.id == opt.id) {
                    return Err(AssignError::catalog(format!(
                        "duplicate option id '{}' in category '{}'",
                        opt.id, cat.name
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let config_types = || {
            vec![
                TypeOption::new("node", "Content types"),
                TypeOption::new("block", "Blocks"),
                TypeOption::new("views", "Views"),
                TypeOption::new("field", "Fields"),
                TypeOption::new("taxonomy", "Taxonomy vocabularies"),
                TypeOption::new("menu", "Menus"),
                TypeOption::new("user_role", "User roles"),
                TypeOption::new("image_style", "Image styles"),
                TypeOption::new("filter_format", "Text formats"),
            ]
        };

        Self {
            categories: vec![
                CategoryCatalog {
                    name: "core".to_string(),
                    options: config_types(),
                },
                CategoryCatalog {
                    name: "exclude".to_string(),
                    options: config_types(),
                },
                CategoryCatalog {
                    name: "optional".to_string(),
                    options: config_types(),
                },
            ],
        }
    }
}
