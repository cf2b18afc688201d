//! Selection State
//!
//! The artwork currently open in the detail view, if any.

use crate::catalog::{Catalog, Item, ItemId};

/// At most one inspected item; selecting again replaces it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    Inspecting(ItemId),
}

impl Selection {
    pub fn select(&mut self, id: ItemId) {
        *self = Selection::Inspecting(id);
    }

    pub fn clear(&mut self) {
        *self = Selection::Empty;
    }

    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            Selection::Empty => None,
            Selection::Inspecting(id) => Some(*id),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// Look the selected item up in `catalog`; ids that vanished read as empty
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a Item> {
        self.item_id().and_then(|id| catalog.item(id))
    }
}
