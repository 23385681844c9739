//! Read side of the weapons catalog: folder listings, detail lookup, search.

pub mod folder;
pub mod models;
pub mod names;
pub mod store;

pub use folder::{scan_category, Category, CategoryEntry, IMAGE_EXTENSION};
pub use models::*;
pub use names::{detail_path, display_name_from_slug, display_name_from_stem, slug_from_display_name};
pub use store::{normalize_query, search_weapons, weapon_detail, FetchStrategy, WeaponStore};
