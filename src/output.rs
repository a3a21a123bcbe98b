//! CLI output formatting for the load and generate stages.
//!
//! Output is information-first: every entity leads with its positional
//! index and name, with counts or output paths as secondary context.
//!
//! # Output Format
//!
//! ## Load
//!
//! ```text
//! Categories
//! 001 Getting Started (2 sections)
//!     001 Study Setup (3 articles)
//!     002 Launch (2 articles)
//! 002 Archive (0 sections)
//!
//! Dangling references
//!     Section 30 Troubleshooting → category 99 (labelled Unknown)
//!     Article 999 Orphaned article → section 777 (left out of section pages)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Assets
//!     css/style.css
//!     js/main.js
//! Home → index.html
//! Categories
//!     001 Getting Started → categories/category_1.html
//! ...
//! Generated 3 category pages, 4 section pages, 8 article pages, 4 index pages
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::{PageKind, SiteReport};
use crate::index::SiteIndex;
use crate::load::HelpCenter;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `"1 section"` / `"N sections"`.
fn plural(n: usize, noun: &str) -> String {
    match (n, noun) {
        (1, _) => format!("1 {noun}"),
        (_, "category") => format!("{n} categories"),
        _ => format!("{n} {noun}s"),
    }
}

/// Positional index + name + parenthesized count.
fn entity_header(index: usize, name: &str, count: usize, noun: &str) -> String {
    format!("{} {} ({})", format_index(index), name, plural(count, noun))
}

// ============================================================================
// Load output
// ============================================================================

/// Format the loaded content tree and every dangling foreign key.
pub fn format_load_output(hc: &HelpCenter, index: &SiteIndex) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];

    for (i, category) in hc.categories.iter().enumerate() {
        let sections = index.sections_in(category.id);
        lines.push(entity_header(i + 1, &category.name, sections.len(), "section"));
        for (j, section) in sections.iter().enumerate() {
            let articles = index.articles_in(section.id).len();
            lines.push(format!(
                "    {}",
                entity_header(j + 1, &section.name, articles, "article")
            ));
        }
    }

    let orphan_sections = index.orphan_sections(hc);
    let orphan_articles = index.orphan_articles(hc);
    if !orphan_sections.is_empty() || !orphan_articles.is_empty() {
        lines.push(String::new());
        lines.push("Dangling references".to_string());
        for section in orphan_sections {
            lines.push(format!(
                "    Section {} {} \u{2192} category {} (labelled Unknown)",
                section.id, section.name, section.category_id
            ));
        }
        for article in orphan_articles {
            lines.push(format!(
                "    Article {} {} \u{2192} section {} (left out of section pages)",
                article.id, article.title, article.section_id
            ));
        }
    }

    lines.push(format!(
        "Loaded {}, {}, {}",
        plural(hc.categories.len(), "category"),
        plural(hc.sections.len(), "section"),
        plural(hc.articles.len(), "article"),
    ));

    lines
}

/// Print load output to stdout.
pub fn print_load_output(hc: &HelpCenter, index: &SiteIndex) {
    for line in format_load_output(hc, index) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format the generated files, grouped by page kind, in write order.
pub fn format_generate_output(report: &SiteReport) -> Vec<String> {
    let mut lines = vec!["Assets".to_string()];
    for asset in &report.assets {
        lines.push(format!("    {}", asset));
    }

    let groups = [
        (PageKind::Category, "Categories"),
        (PageKind::Section, "Sections"),
        (PageKind::Article, "Articles"),
    ];

    for page in report.pages.iter().filter(|p| p.kind == PageKind::Home) {
        lines.push(format!("{} \u{2192} {}", page.title, page.path));
    }

    for (kind, heading) in groups {
        let pages: Vec<_> = report.pages.iter().filter(|p| p.kind == kind).collect();
        if pages.is_empty() {
            continue;
        }
        lines.push(heading.to_string());
        for (i, page) in pages.iter().enumerate() {
            lines.push(format!(
                "    {} {} \u{2192} {}",
                format_index(i + 1),
                page.title,
                page.path
            ));
        }
    }

    lines.push("Indexes".to_string());
    for page in &report.pages {
        match page.kind {
            PageKind::TopicsIndex | PageKind::ArticlesIndex => {
                lines.push(format!("    {} \u{2192} {}", page.title, page.path));
            }
            PageKind::VideosIndex => {
                lines.push(format!(
                    "    {} \u{2192} {} ({})",
                    page.title,
                    page.path,
                    plural(report.video_count, "video")
                ));
            }
            _ => {}
        }
    }

    let index_pages = report.count(PageKind::Home)
        + report.count(PageKind::TopicsIndex)
        + report.count(PageKind::ArticlesIndex)
        + report.count(PageKind::VideosIndex);
    lines.push(format!(
        "Generated {} category pages, {} section pages, {} article pages, {} index pages",
        report.count(PageKind::Category),
        report.count(PageKind::Section),
        report.count(PageKind::Article),
        index_pages
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &SiteReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::GeneratedPage;
    use crate::test_helpers::*;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(0, "article"), "0 articles");
        assert_eq!(plural(1, "article"), "1 article");
        assert_eq!(plural(5, "video"), "5 videos");
        assert_eq!(plural(2, "category"), "2 categories");
    }

    #[test]
    fn entity_header_with_count() {
        assert_eq!(
            entity_header(2, "Launch", 1, "article"),
            "002 Launch (1 article)"
        );
    }

    #[test]
    fn load_output_tree() {
        let hc = fixture_help_center();
        let index = SiteIndex::build(&hc);
        let lines = format_load_output(&hc, &index);

        assert_eq!(lines[0], "Categories");
        assert_eq!(lines[1], "001 Getting Started (2 sections)");
        assert_eq!(lines[2], "    001 Study Setup (3 articles)");
        assert_eq!(lines[3], "    002 Launch (2 articles)");
        assert_eq!(lines[4], "002 Account (1 section)");
        assert_eq!(lines[5], "    001 Settings and Admin (1 article)");
        assert_eq!(lines[6], "003 Archive (0 sections)");
    }

    #[test]
    fn load_output_lists_dangling_references() {
        let hc = fixture_help_center();
        let index = SiteIndex::build(&hc);
        let lines = format_load_output(&hc, &index);

        assert!(lines.contains(&"Dangling references".to_string()));
        assert!(lines.contains(
            &"    Section 30 Troubleshooting \u{2192} category 99 (labelled Unknown)".to_string()
        ));
        assert!(lines.contains(
            &"    Article 999 Orphaned article \u{2192} section 777 (left out of section pages)"
                .to_string()
        ));
        assert_eq!(
            lines.last().unwrap(),
            "Loaded 3 categories, 4 sections, 8 articles"
        );
    }

    #[test]
    fn load_output_without_dangling_references() {
        let hc = help_center(
            vec![category(1, "Setup")],
            vec![section(10, "Basics", 1)],
            vec![article(100, "A", 10, "2024-01-01")],
        );
        let index = SiteIndex::build(&hc);
        let lines = format_load_output(&hc, &index);

        assert!(!lines.contains(&"Dangling references".to_string()));
        assert_eq!(lines.last().unwrap(), "Loaded 1 category, 1 section, 1 article");
    }

    fn page(kind: PageKind, title: &str, path: &str) -> GeneratedPage {
        GeneratedPage {
            kind,
            title: title.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn generate_output_groups_pages() {
        let report = SiteReport {
            assets: vec!["css/style.css".to_string(), "js/main.js".to_string()],
            pages: vec![
                page(PageKind::Home, "Home", "index.html"),
                page(PageKind::Category, "Setup", "categories/category_1.html"),
                page(PageKind::Section, "Basics", "sections/section_10.html"),
                page(PageKind::Article, "A Article", "articles/article_101.html"),
                page(PageKind::Article, "B Article", "articles/article_100.html"),
                page(PageKind::TopicsIndex, "Browse Topics", "categories.html"),
                page(PageKind::ArticlesIndex, "All Articles", "articles.html"),
                page(PageKind::VideosIndex, "Video Tutorials", "videos.html"),
            ],
            video_count: 1,
        };
        let lines = format_generate_output(&report);

        assert_eq!(
            lines,
            vec![
                "Assets",
                "    css/style.css",
                "    js/main.js",
                "Home \u{2192} index.html",
                "Categories",
                "    001 Setup \u{2192} categories/category_1.html",
                "Sections",
                "    001 Basics \u{2192} sections/section_10.html",
                "Articles",
                "    001 A Article \u{2192} articles/article_101.html",
                "    002 B Article \u{2192} articles/article_100.html",
                "Indexes",
                "    Browse Topics \u{2192} categories.html",
                "    All Articles \u{2192} articles.html",
                "    Video Tutorials \u{2192} videos.html (1 video)",
                "Generated 1 category pages, 1 section pages, 2 article pages, 4 index pages",
            ]
        );
    }

    #[test]
    fn generate_output_skips_empty_groups() {
        let report = SiteReport {
            assets: vec![],
            pages: vec![page(PageKind::Home, "Home", "index.html")],
            video_count: 0,
        };
        let lines = format_generate_output(&report);
        assert!(!lines.contains(&"Categories".to_string()));
        assert!(!lines.contains(&"Articles".to_string()));
    }
}
