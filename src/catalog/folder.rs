use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::names::{detail_path, display_name_from_stem};
use crate::error::AppError;

/// Only images with this extension are listed
pub const IMAGE_EXTENSION: &str = "webp";

/// Weapon categories, each backed by `<static_root>/images/<slug>/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Magic,
    Melee,
    Ranged,
    Hybrid,
    Unique,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Magic,
        Category::Melee,
        Category::Ranged,
        Category::Hybrid,
        Category::Unique,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Magic => "magic",
            Category::Melee => "melee",
            Category::Ranged => "ranged",
            Category::Hybrid => "hybrid",
            Category::Unique => "unique",
        }
    }

    /// Page title
    pub fn title(self) -> &'static str {
        match self {
            Category::Magic => "MAGIC",
            Category::Melee => "MELEE",
            Category::Ranged => "RANGED",
            Category::Hybrid => "HYBRID",
            Category::Unique => "UNIQUE",
        }
    }

    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }

    pub fn folder(self, static_root: &Path) -> PathBuf {
        static_root.join("images").join(self.slug())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// One weapon image in a category folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub filename: String,
    pub display_name: String,
    pub image_path: String,
    pub detail_path: String,
}

/// List every image in a category folder, sorted by display name.
pub fn scan_category(static_root: &Path, category: Category) -> Result<Vec<CategoryEntry>, AppError> {
    let folder = category.folder(static_root);
    let read_dir = fs::read_dir(&folder).map_err(|e| folder_error(&folder, category, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| folder_error(&folder, category, e))?;
        let path = entry.path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(IMAGE_EXTENSION) {
            continue;
        }
        let (Some(filename), Some(stem)) = (
            path.file_name().and_then(|n| n.to_str()),
            path.file_stem().and_then(|s| s.to_str()),
        ) else {
            continue;
        };

        let display_name = display_name_from_stem(stem);
        entries.push(CategoryEntry {
            filename: filename.to_string(),
            image_path: format!("/static/images/{}/{}", category.slug(), filename),
            detail_path: detail_path(&display_name),
            display_name,
        });
    }

    entries.sort_by(|a, b| {
        a.display_name
            .cmp(&b.display_name)
            .then_with(|| a.filename.cmp(&b.filename))
    });

    Ok(entries)
}

fn folder_error(folder: &Path, category: Category, err: io::Error) -> AppError {
    if err.kind() == io::ErrorKind::NotFound {
        AppError::CategoryNotFound(category.slug().to_string())
    } else {
        AppError::Filesystem {
            path: folder.to_path_buf(),
            source: err,
        }
    }
}
