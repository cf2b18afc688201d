//! UI Components
//!
//! Leptos components for the gallery page.

mod art_card;
mod badge;
mod detail_modal;
mod empty_state;
mod gallery_grid;
mod gallery_header;
mod mobile_header;
mod sidebar;
mod theme_toggle;

pub use art_card::ArtCard;
pub use badge::Badge;
pub use detail_modal::DetailModal;
pub use empty_state::EmptyState;
pub use gallery_grid::GalleryGrid;
pub use gallery_header::GalleryHeader;
pub use mobile_header::MobileHeader;
pub use sidebar::Sidebar;
pub use theme_toggle::ThemeToggle;
