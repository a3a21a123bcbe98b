//! Derived lookups over the loaded export.
//!
//! Built once after loading and never mutated. All lists preserve input
//! order, so every page that walks them renders in export order.
//!
//! Foreign keys are not validated here. Two behaviors matter to callers:
//!
//! - An article whose `section_id` matches no section is dropped from
//!   [`SiteIndex::articles_in`] results entirely. It still exists in
//!   [`HelpCenter::articles`] and shows up on the global article listings.
//! - A category with no sections has no entry; [`SiteIndex::sections_in`]
//!   returns an empty slice for it.

use crate::load::HelpCenter;
use crate::types::{Article, Category, Section};
use std::collections::BTreeMap;

/// Placeholder rendered wherever a foreign key does not resolve.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug)]
pub struct SiteIndex<'a> {
    sections_by_category: BTreeMap<u64, Vec<&'a Section>>,
    articles_by_section: BTreeMap<u64, Vec<&'a Article>>,
    categories_by_id: BTreeMap<u64, &'a Category>,
    sections_by_id: BTreeMap<u64, &'a Section>,
}

impl<'a> SiteIndex<'a> {
    pub fn build(hc: &'a HelpCenter) -> Self {
        let mut sections_by_category: BTreeMap<u64, Vec<&Section>> = BTreeMap::new();
        let mut articles_by_section: BTreeMap<u64, Vec<&Article>> = BTreeMap::new();
        let mut sections_by_id = BTreeMap::new();

        for section in &hc.sections {
            sections_by_category
                .entry(section.category_id)
                .or_default()
                .push(section);
            articles_by_section.insert(section.id, Vec::new());
            // First occurrence wins for duplicate ids.
            sections_by_id.entry(section.id).or_insert(section);
        }

        for article in &hc.articles {
            match articles_by_section.get_mut(&article.section_id) {
                Some(list) => list.push(article),
                None => tracing::debug!(
                    article = article.id,
                    section = article.section_id,
                    "article references unknown section, left out of section listings"
                ),
            }
        }

        let mut categories_by_id = BTreeMap::new();
        for category in &hc.categories {
            categories_by_id.entry(category.id).or_insert(category);
        }

        Self {
            sections_by_category,
            articles_by_section,
            categories_by_id,
            sections_by_id,
        }
    }

    /// Sections owned by a category, in input order.
    pub fn sections_in(&self, category_id: u64) -> &[&'a Section] {
        self.sections_by_category
            .get(&category_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Articles owned by a section, in input order.
    pub fn articles_in(&self, section_id: u64) -> &[&'a Article] {
        self.articles_by_section
            .get(&section_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn category(&self, id: u64) -> Option<&'a Category> {
        self.categories_by_id.get(&id).copied()
    }

    pub fn section(&self, id: u64) -> Option<&'a Section> {
        self.sections_by_id.get(&id).copied()
    }

    /// Owning section and category of an article, either of which may be
    /// missing when a foreign key dangles.
    pub fn lineage(&self, article: &Article) -> (Option<&'a Category>, Option<&'a Section>) {
        let section = self.section(article.section_id);
        let category = section.and_then(|s| self.category(s.category_id));
        (category, section)
    }

    /// `"Category → Section"` label with [`UNKNOWN`] for unresolved slots.
    pub fn breadcrumb(&self, article: &Article) -> String {
        let (category, section) = self.lineage(article);
        format!(
            "{} \u{2192} {}",
            category.map_or(UNKNOWN, |c| c.name.as_str()),
            section.map_or(UNKNOWN, |s| s.name.as_str()),
        )
    }

    /// Sections whose `category_id` resolves to no loaded category.
    pub fn orphan_sections(&self, hc: &'a HelpCenter) -> Vec<&'a Section> {
        hc.sections
            .iter()
            .filter(|s| self.category(s.category_id).is_none())
            .collect()
    }

    /// Articles whose `section_id` resolves to no loaded section.
    pub fn orphan_articles(&self, hc: &'a HelpCenter) -> Vec<&'a Article> {
        hc.articles
            .iter()
            .filter(|a| self.section(a.section_id).is_none())
            .collect()
    }
}

/// The `count` most recently updated articles, newest first.
///
/// Ties keep input order (the sort is stable).
pub fn recent_articles(articles: &[Article], count: usize) -> Vec<&Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted.truncate(count);
    sorted
}

/// All articles ordered by title (code-point order, stable).
pub fn articles_by_title(articles: &[Article]) -> Vec<&Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by(|a, b| a.title.cmp(&b.title));
    sorted
}
