//! Help-center records as they appear in the export.
//!
//! The export producer writes far more fields than the site needs (locales,
//! vote counts, author ids, ...). Only the fields below are deserialized;
//! everything else is ignored so exports from newer producers keep loading.

use serde::Deserialize;

/// Top-level grouping of sections.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A topic inside a category. Owns articles via `Article::section_id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Foreign key into the categories collection. Not guaranteed to resolve.
    pub category_id: u64,
}

/// A single help article.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    /// Pre-rendered HTML fragment. Trusted, injected without escaping.
    #[serde(default)]
    pub body: Option<String>,
    /// Foreign key into the sections collection. Not guaranteed to resolve.
    pub section_id: u64,
    /// ISO-8601 timestamp, e.g. `2024-02-01T09:30:00Z`.
    pub updated_at: String,
}

impl Category {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

impl Section {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

impl Article {
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    /// Calendar date part of `updated_at`: its first 10 characters.
    ///
    /// Shorter timestamps are returned whole.
    pub fn updated_date(&self) -> &str {
        match self.updated_at.char_indices().nth(10) {
            Some((end, _)) => &self.updated_at[..end],
            None => &self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(updated_at: &str) -> Article {
        Article {
            id: 1,
            title: "T".to_string(),
            body: None,
            section_id: 1,
            updated_at: updated_at.to_string(),
        }
    }

    #[test]
    fn updated_date_takes_first_ten_chars() {
        assert_eq!(article("2024-02-01T09:30:00Z").updated_date(), "2024-02-01");
    }

    #[test]
    fn updated_date_short_timestamp_is_whole() {
        assert_eq!(article("2024-02").updated_date(), "2024-02");
        assert_eq!(article("").updated_date(), "");
    }

    #[test]
    fn missing_optional_fields_deserialize() {
        let json = r#"{"id": 7, "title": "Hello", "section_id": 3, "updated_at": "2024-01-01"}"#;
        let a: Article = serde_json::from_str(json).unwrap();
        assert_eq!(a.body(), "");

        let json = r#"{"id": 3, "name": "Basics", "category_id": 1, "description": null}"#;
        let s: Section = serde_json::from_str(json).unwrap();
        assert_eq!(s.description(), "");
    }

    #[test]
    fn unknown_export_fields_are_ignored() {
        let json = r#"{"id": 1, "name": "Setup", "locale": "en-us", "position": 0, "outdated": false}"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.name, "Setup");
        assert_eq!(c.description(), "");
    }
}
