//! Shared test utilities.
//!
//! Provides fixture setup, record builders and lookup helpers for the
//! loader, index and generator tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let hc = fixture_help_center();
//! let index = SiteIndex::build(&hc);
//! assert_eq!(find_article(&hc, 100).title, "Creating your first study");
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::load::{self, ARTICLES_FILE, CATEGORIES_FILE, HelpCenter, SECTIONS_FILE};
use crate::types::{Article, Category, Section};

// =========================================================================
// Fixture setup
// =========================================================================

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Copy `fixtures/export/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for entry in fs::read_dir(fixtures_dir().join("export")).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// The checked-in sample video directory.
pub fn fixture_videos_dir() -> PathBuf {
    fixtures_dir().join("videos")
}

/// Load the fixture export straight from the source tree.
pub fn fixture_help_center() -> HelpCenter {
    load::load(&fixtures_dir().join("export")).unwrap()
}

/// Write the three export files with raw JSON contents.
pub fn write_export(dir: &Path, categories: &str, sections: &str, articles: &str) {
    fs::write(dir.join(CATEGORIES_FILE), categories).unwrap();
    fs::write(dir.join(SECTIONS_FILE), sections).unwrap();
    fs::write(dir.join(ARTICLES_FILE), articles).unwrap();
}

// =========================================================================
// Record builders
// =========================================================================

pub fn category(id: u64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: None,
    }
}

pub fn section(id: u64, name: &str, category_id: u64) -> Section {
    Section {
        id,
        name: name.to_string(),
        description: None,
        category_id,
    }
}

pub fn article(id: u64, title: &str, section_id: u64, updated_at: &str) -> Article {
    Article {
        id,
        title: title.to_string(),
        body: None,
        section_id,
        updated_at: updated_at.to_string(),
    }
}

pub fn help_center(
    categories: Vec<Category>,
    sections: Vec<Section>,
    articles: Vec<Article>,
) -> HelpCenter {
    HelpCenter {
        categories,
        sections,
        articles,
    }
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

pub fn find_article(hc: &HelpCenter, id: u64) -> &Article {
    hc.articles.iter().find(|a| a.id == id).unwrap_or_else(|| {
        let ids: Vec<u64> = hc.articles.iter().map(|a| a.id).collect();
        panic!("article {id} not found. Available: {ids:?}")
    })
}

pub fn find_section(hc: &HelpCenter, id: u64) -> &Section {
    hc.sections.iter().find(|s| s.id == id).unwrap_or_else(|| {
        let ids: Vec<u64> = hc.sections.iter().map(|s| s.id).collect();
        panic!("section {id} not found. Available: {ids:?}")
    })
}

pub fn find_category(hc: &HelpCenter, id: u64) -> &Category {
    hc.categories.iter().find(|c| c.id == id).unwrap_or_else(|| {
        let ids: Vec<u64> = hc.categories.iter().map(|c| c.id).collect();
        panic!("category {id} not found. Available: {ids:?}")
    })
}

pub fn category_names(hc: &HelpCenter) -> Vec<&str> {
    hc.categories.iter().map(|c| c.name.as_str()).collect()
}

pub fn section_names(hc: &HelpCenter) -> Vec<&str> {
    hc.sections.iter().map(|s| s.name.as_str()).collect()
}

/// Assert that `needles` occur in `haystack` in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("'{needle}' not found after byte {from}"),
        }
    }
}
