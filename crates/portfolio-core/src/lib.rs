//! Portfolio Core
//!
//! Browser-independent logic behind the art portfolio gallery:
//! - catalog: categories, items and site branding loaded from a JSON manifest
//! - filter: category + search predicates over the catalog
//! - selection: the item currently open in the detail view
//! - preference / theme: persisted light/dark/system preference

mod catalog;
mod filter;
mod preference;
mod selection;
mod theme;

pub use catalog::{Catalog, CatalogError, Category, Item, ItemId, SiteInfo, ALL_CATEGORY, FALLBACK_ICON};
pub use filter::{filter_items, matches_category, matches_query};
pub use preference::{MemoryStore, PreferenceStore, StorageError};
pub use selection::Selection;
pub use theme::{Appearance, ParseThemeError, ThemePreference, ThemeState, THEME_KEY};
