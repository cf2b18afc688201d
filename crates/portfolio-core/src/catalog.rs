//! Catalog
//!
//! Read-only categories and artworks, loaded once at startup from a JSON
//! manifest and never mutated afterwards.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

/// Category id meaning "no category filter"
pub const ALL_CATEGORY: &str = "all";

/// Glyph shown for items whose category is unknown
pub const FALLBACK_ICON: &str = "📦";

pub type ItemId = u32;

/// Errors raised while loading a catalog manifest
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog manifest: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate category id `{0}`")]
    DuplicateCategory(String),
    #[error("duplicate item id {0}")]
    DuplicateItem(ItemId),
    #[error("catalog has no `all` category")]
    MissingAllCategory,
}

/// Sidebar category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub label: String,
    pub color_token: String,
    pub icon: String,
    /// Header blurb shown while this category is active
    #[serde(default)]
    pub description: String,
}

/// A single artwork
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub category_id: String,
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub description: String,
    pub likes: u32,
    pub color_token: String,
}

/// Branding strings for the page chrome
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub title: String,
    pub tagline: String,
    /// Title used in the compact mobile header
    pub short_title: String,
    pub contact_prompt: String,
    pub contact_label: String,
    #[serde(default)]
    pub contact_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    site: SiteInfo,
    categories: Vec<Category>,
    items: Vec<Item>,
}

impl Catalog {
    /// Parse and validate a catalog manifest.
    ///
    /// Duplicate ids and a missing `all` category are rejected. Items that
    /// point at an unknown category are kept; they only get logged, the
    /// filter simply never matches them against a concrete category.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in eight-piece sample portfolio
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(include_str!("../data/sample_catalog.json"))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }
        if !category_ids.contains(ALL_CATEGORY) {
            return Err(CatalogError::MissingAllCategory);
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(item.id) {
                return Err(CatalogError::DuplicateItem(item.id));
            }
            if item.category_id == ALL_CATEGORY || !category_ids.contains(item.category_id.as_str()) {
                tracing::warn!(
                    item = item.id,
                    category = %item.category_id,
                    "item references an unknown category"
                );
            }
        }
        Ok(())
    }

    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    /// Categories in sidebar order, `all` included
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Items in catalog order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn category_of(&self, item: &Item) -> Option<&Category> {
        self.category(&item.category_id)
    }

    /// Category label, or the raw id when the category is unknown
    pub fn label_for<'a>(&'a self, category_id: &'a str) -> &'a str {
        self.category(category_id)
            .map(|c| c.label.as_str())
            .unwrap_or(category_id)
    }

    /// Header blurb for a category, falling back to the `all` blurb
    pub fn description_for(&self, category_id: &str) -> &str {
        self.category(category_id)
            .filter(|c| !c.description.is_empty())
            .or_else(|| self.category(ALL_CATEGORY))
            .map(|c| c.description.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(categories: &str, items: &str) -> String {
        format!(
            r#"{{
                "site": {{
                    "title": "T", "tagline": "t", "shortTitle": "s",
                    "contactPrompt": "p", "contactLabel": "l"
                }},
                "categories": [{categories}],
                "items": [{items}]
            }}"#
        )
    }

    const ALL: &str = r#"{"id": "all", "label": "All Items", "colorToken": "stone", "icon": "*", "description": "Everything."}"#;
    const DRAWING: &str = r#"{"id": "drawing", "label": "Drawings", "colorToken": "rose", "icon": "~"}"#;

    fn item_json(id: u32, category: &str) -> String {
        format!(
            r#"{{"id": {id}, "title": "Piece {id}", "categoryId": "{category}", "tags": [],
                "date": "2024-01-05", "description": "", "likes": 0, "colorToken": "rose"}}"#
        )
    }

    #[test]
    fn test_sample_catalog_loads() {
        let catalog = Catalog::sample().expect("sample catalog should load");
        assert_eq!(catalog.categories().len(), 5);
        assert_eq!(catalog.items().len(), 8);
        assert_eq!(catalog.categories()[0].id, ALL_CATEGORY);
        assert_eq!(catalog.site().title, "Art Portfolio");
        assert!(catalog.site().contact_url.is_none());

        let fox = catalog.item(1).unwrap();
        assert_eq!(fox.title, "Low Poly Fox");
        assert_eq!(fox.date, NaiveDate::from_ymd_opt(2023, 10, 15).unwrap());
        assert_eq!(catalog.category_of(fox).unwrap().label, "Blockbench");
    }

    #[test]
    fn test_sample_items_reference_real_categories() {
        let catalog = Catalog::sample().unwrap();
        for item in catalog.items() {
            let category = catalog.category_of(item).expect("category should exist");
            assert_ne!(category.id, ALL_CATEGORY);
        }
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let text = manifest(&format!("{ALL}, {DRAWING}, {DRAWING}"), "");
        let err = Catalog::from_json(&text).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory(id) if id == "drawing"));
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let items = format!("{}, {}", item_json(3, "drawing"), item_json(3, "drawing"));
        let text = manifest(&format!("{ALL}, {DRAWING}"), &items);
        let err = Catalog::from_json(&text).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItem(3)));
    }

    #[test]
    fn test_missing_all_category_rejected() {
        let text = manifest(DRAWING, "");
        assert!(matches!(
            Catalog::from_json(&text),
            Err(CatalogError::MissingAllCategory)
        ));
    }

    #[test]
    fn test_bad_date_is_malformed() {
        let items = item_json(1, "drawing").replace("2024-01-05", "Jan 5th");
        let text = manifest(&format!("{ALL}, {DRAWING}"), &items);
        assert!(matches!(
            Catalog::from_json(&text),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_unknown_category_is_kept() {
        let text = manifest(&format!("{ALL}, {DRAWING}"), &item_json(9, "sculpture"));
        let catalog = Catalog::from_json(&text).expect("dangling category is not fatal");
        let item = catalog.item(9).unwrap();
        assert!(catalog.category_of(item).is_none());
        assert_eq!(catalog.label_for("sculpture"), "sculpture");
    }

    #[test]
    fn test_item_filed_under_all_is_kept() {
        let text = manifest(&format!("{ALL}, {DRAWING}"), &item_json(4, "all"));
        let catalog = Catalog::from_json(&text).expect("`all` as item category is not fatal");
        let item = catalog.item(4).unwrap();
        assert_eq!(item.category_id, ALL_CATEGORY);
        assert!(crate::filter_items(catalog.items(), "drawing", "").is_empty());
        assert_eq!(crate::filter_items(catalog.items(), ALL_CATEGORY, "").len(), 1);
    }

    #[test]
    fn test_description_falls_back_to_all() {
        let text = manifest(&format!("{ALL}, {DRAWING}"), "");
        let catalog = Catalog::from_json(&text).unwrap();
        // drawing has no blurb of its own
        assert_eq!(catalog.description_for("drawing"), "Everything.");
        assert_eq!(catalog.description_for("nope"), "Everything.");
        assert_eq!(catalog.label_for("drawing"), "Drawings");
    }
}
