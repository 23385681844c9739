//! Page view models returned as JSON response bodies.

use serde::Serialize;

use crate::catalog::{Category, CategoryEntry, SearchHit, WeaponDetail};

#[derive(Debug, Serialize)]
pub struct CategoryLink {
    pub category: Category,
    pub title: &'static str,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub title: &'static str,
    pub categories: Vec<CategoryLink>,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            title: "HOME",
            categories: Category::ALL
                .iter()
                .map(|&category| CategoryLink {
                    category,
                    title: category.title(),
                    path: category.path(),
                })
                .collect(),
        }
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryPage {
    pub title: &'static str,
    pub category: Category,
    pub weapons: Vec<CategoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct WeaponPage {
    pub title: String,
    pub weapon_name: String,
    #[serde(flatten)]
    pub detail: WeaponDetail,
}

#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub title: &'static str,
    pub query: String,
    pub results: Vec<SearchHit>,
}
