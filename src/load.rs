//! Export loading.
//!
//! Stage 1 of the build. Reads the three record collections written by the
//! help-center export:
//!
//! ```text
//! zendesk_export_userology/
//! ├── config.toml        # Site configuration (optional, see `config`)
//! ├── categories.json    # [{ "id": 1, "name": "...", "description": "..." }, ...]
//! ├── sections.json      # [{ "id": 10, "name": "...", "category_id": 1 }, ...]
//! └── articles.json      # [{ "id": 100, "title": "...", "body": "<p>...</p>",
//!                        #    "section_id": 10, "updated_at": "2024-01-02T..." }, ...]
//! ```
//!
//! Every file must be present and well-formed. There is no partial load: the
//! first unreadable or malformed file aborts the run.

use crate::types::{Article, Category, Section};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CATEGORIES_FILE: &str = "categories.json";
pub const SECTIONS_FILE: &str = "sections.json";
pub const ARTICLES_FILE: &str = "articles.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Everything read from the export, in file order.
#[derive(Debug, Clone, Default)]
pub struct HelpCenter {
    pub categories: Vec<Category>,
    pub sections: Vec<Section>,
    pub articles: Vec<Article>,
}

pub fn load(export_dir: &Path) -> Result<HelpCenter, LoadError> {
    let categories = load_records(&export_dir.join(CATEGORIES_FILE))?;
    let sections = load_records(&export_dir.join(SECTIONS_FILE))?;
    let articles = load_records(&export_dir.join(ARTICLES_FILE))?;

    tracing::debug!(
        categories = categories.len(),
        sections = sections.len(),
        articles = articles.len(),
        "loaded export from {}",
        export_dir.display()
    );

    Ok(HelpCenter {
        categories,
        sections,
        articles,
    })
}

/// Parse one JSON array of records.
fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn loads_fixture_export_in_file_order() {
        let tmp = setup_fixtures();
        let hc = load(tmp.path()).unwrap();

        assert_eq!(category_names(&hc), vec!["Getting Started", "Account", "Archive"]);
        assert_eq!(
            section_names(&hc),
            vec!["Study Setup", "Launch", "Settings and Admin", "Troubleshooting"]
        );
        assert_eq!(hc.articles.len(), 8);
        assert_eq!(hc.articles[0].title, "Creating your first study");
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        write_export(tmp.path(), "[]", "[]", "[]");
        fs::remove_file(tmp.path().join(SECTIONS_FILE)).unwrap();

        let err = load(tmp.path()).unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert!(path.ends_with(SECTIONS_FILE)),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_file_is_json_error() {
        let tmp = TempDir::new().unwrap();
        write_export(tmp.path(), "[]", "[]", "[{\"id\": 1,");

        let err = load(tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Json { ref path, .. } if path.ends_with(ARTICLES_FILE)));
        assert!(err.to_string().contains(ARTICLES_FILE));
    }

    #[test]
    fn record_missing_required_field_is_error() {
        let tmp = TempDir::new().unwrap();
        write_export(tmp.path(), r#"[{"id": 1}]"#, "[]", "[]");

        assert!(matches!(load(tmp.path()), Err(LoadError::Json { .. })));
    }

    #[test]
    fn empty_collections_load() {
        let tmp = TempDir::new().unwrap();
        write_export(tmp.path(), "[]", "[]", "[]");

        let hc = load(tmp.path()).unwrap();
        assert!(hc.categories.is_empty());
        assert!(hc.sections.is_empty());
        assert!(hc.articles.is_empty());
    }
}
