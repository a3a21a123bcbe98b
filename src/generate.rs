//! HTML site generation.
//!
//! Stage 3 of the build. Takes the loaded export plus its index and writes
//! the final static site.
//!
//! ## Generated Pages
//!
//! - **Homepage** (`index.html`): topic cards for every section, then the
//!   most recently updated articles
//! - **Topics index** (`categories.html`): the homepage topic grid on its own
//! - **Articles index** (`articles.html`): every article, sorted by title
//! - **Videos index** (`videos.html`): one card per local video file
//! - **Category pages** (`categories/category_<id>.html`): sections with counts
//! - **Section pages** (`sections/section_<id>.html`): articles with dates
//! - **Article pages** (`articles/article_<id>.html`): title, breadcrumb, body
//!
//! ## Output Structure
//!
//! ```text
//! offline_help_center/
//! ├── index.html
//! ├── categories.html
//! ├── articles.html
//! ├── videos.html
//! ├── css/style.css
//! ├── js/main.js
//! ├── categories/category_1.html
//! ├── sections/section_10.html
//! └── articles/article_100.html
//! ```
//!
//! ## Page Shell
//!
//! Every page shares one layout: head, branded header (optional search box),
//! nav bar, optional sidebar, content, footer (optional script tag). Pages at
//! the output root link assets and other pages directly; pages one directory
//! down prefix every link with `../`. See [`Shell`] and [`Depth`].
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every interpolated value is escaped, except article bodies: those are
//! pre-rendered HTML from the help-center export and are injected with
//! `PreEscaped` as-is. That is an injection risk if the export source is
//! ever untrusted.

use crate::assets::{self, SCRIPT_PATH, STYLESHEET_PATH};
use crate::config::{SiteConfig, SiteInfo};
use crate::index::{self, SiteIndex, UNKNOWN};
use crate::load::HelpCenter;
use crate::types::{Article, Category, Section};
use crate::videos::{self, Video};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Video directory error: {0}")]
    Videos(#[from] walkdir::Error),
}

/// Where a page lives relative to the output root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Written at the output root.
    Root,
    /// Written one directory below the root (`categories/`, `sections/`, `articles/`).
    Nested,
}

impl Depth {
    /// Prefix for links to root-relative targets.
    pub fn prefix(self) -> &'static str {
        match self {
            Depth::Root => "",
            Depth::Nested => "../",
        }
    }
}

/// Structural parameters of the shared page shell.
#[derive(Debug, Clone)]
pub struct Shell<'a> {
    /// Page title; `<title>` becomes `"{title} - {site title}"`.
    pub title: &'a str,
    /// Line under the site heading.
    pub description: String,
    pub depth: Depth,
    pub search: bool,
    pub script: bool,
}

/// Kind of a generated page, used for progress output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Category,
    Section,
    Article,
    TopicsIndex,
    ArticlesIndex,
    VideosIndex,
}

/// One written page.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub kind: PageKind,
    pub title: String,
    /// Path relative to the output root.
    pub path: String,
}

/// Everything written by [`generate`], in write order.
#[derive(Debug, Clone, Default)]
pub struct SiteReport {
    pub assets: Vec<String>,
    pub pages: Vec<GeneratedPage>,
    pub video_count: usize,
}

impl SiteReport {
    pub fn count(&self, kind: PageKind) -> usize {
        self.pages.iter().filter(|p| p.kind == kind).count()
    }
}

/// Loaded content plus the lookups every renderer needs.
pub struct Site<'a> {
    pub hc: &'a HelpCenter,
    pub index: SiteIndex<'a>,
    pub config: &'a SiteConfig,
}

impl<'a> Site<'a> {
    pub fn new(hc: &'a HelpCenter, config: &'a SiteConfig) -> Self {
        Self {
            hc,
            index: SiteIndex::build(hc),
            config,
        }
    }

    fn info(&self) -> &SiteInfo {
        &self.config.site
    }
}

// ============================================================================
// Output paths
// ============================================================================

pub const HOME_PAGE: &str = "index.html";
pub const TOPICS_PAGE: &str = "categories.html";
pub const ARTICLES_PAGE: &str = "articles.html";
pub const VIDEOS_PAGE: &str = "videos.html";

pub fn category_page_path(id: u64) -> String {
    format!("categories/category_{id}.html")
}

pub fn section_page_path(id: u64) -> String {
    format!("sections/section_{id}.html")
}

pub fn article_page_path(id: u64) -> String {
    format!("articles/article_{id}.html")
}

// ============================================================================
// Build
// ============================================================================

/// Write the whole site under `output_dir`.
///
/// Existing files are overwritten in place; nothing is deleted. Given the
/// same export, config and video directory the output is byte-identical.
pub fn generate(
    site: &Site,
    output_dir: &Path,
    videos_dir: &Path,
) -> Result<SiteReport, GenerateError> {
    let hc = site.hc;
    let mut report = SiteReport::default();

    for dir in ["categories", "sections", "articles"] {
        fs::create_dir_all(output_dir.join(dir))?;
    }

    report.assets = assets::write_assets(output_dir)?
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut write = |kind: PageKind, title: &str, path: String, markup: Markup| {
        let file = output_dir.join(&path);
        fs::write(&file, markup.into_string())?;
        tracing::debug!("wrote {}", file.display());
        report.pages.push(GeneratedPage {
            kind,
            title: title.to_string(),
            path,
        });
        Ok::<(), std::io::Error>(())
    };

    write(PageKind::Home, "Home", HOME_PAGE.to_string(), render_homepage(site))?;

    for category in &hc.categories {
        write(
            PageKind::Category,
            &category.name,
            category_page_path(category.id),
            render_category_page(site, category),
        )?;
    }

    for section in &hc.sections {
        write(
            PageKind::Section,
            &section.name,
            section_page_path(section.id),
            render_section_page(site, section),
        )?;
    }

    for article in &hc.articles {
        write(
            PageKind::Article,
            &article.title,
            article_page_path(article.id),
            render_article_page(site, article),
        )?;
    }

    write(
        PageKind::TopicsIndex,
        "Browse Topics",
        TOPICS_PAGE.to_string(),
        render_topics_index(site),
    )?;
    write(
        PageKind::ArticlesIndex,
        "All Articles",
        ARTICLES_PAGE.to_string(),
        render_articles_index(site),
    )?;

    let videos = videos::scan_videos(videos_dir, site.config)?;
    write(
        PageKind::VideosIndex,
        "Video Tutorials",
        VIDEOS_PAGE.to_string(),
        render_videos_index(site, &videos),
    )?;
    report.video_count = videos.len();

    Ok(report)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Header, search box and nav bar.
fn site_header(site: &SiteInfo, shell: &Shell) -> Markup {
    let p = shell.depth.prefix();
    html! {
        header.header {
            div.container {
                div.header-content {
                    div.header-branding {
                        img.header-logo src={ (p) (site.logo) } alt={ (site.organization) " Logo" };
                        div.header-text {
                            h1 { (site.title) }
                            p { (shell.description) }
                        }
                    }
                    @if shell.search {
                        div.search-container {
                            input.search-input type="search" placeholder="Search articles..." id="searchInput";
                        }
                    }
                }
            }
        }
        nav.nav {
            div.container {
                ul {
                    li { a href={ (p) (HOME_PAGE) } { "Home" } }
                    li { a href={ (p) (TOPICS_PAGE) } { "Browse Topics" } }
                    li { a href={ (p) (ARTICLES_PAGE) } { "All Articles" } }
                    li { a href={ (p) (VIDEOS_PAGE) } { "Videos" } }
                }
            }
        }
    }
}

/// Copyright footer and optional script tag.
fn site_footer(site: &SiteInfo, shell: &Shell) -> Markup {
    html! {
        footer.footer {
            div.container {
                p { "© " (site.copyright_year) " " (site.organization) ". All rights reserved." }
            }
        }
        @if shell.script {
            script src={ (shell.depth.prefix()) (SCRIPT_PATH) } {}
        }
    }
}

/// Renders the full document: shell around an optional sidebar and the content.
fn base_document(
    site: &SiteInfo,
    shell: &Shell,
    sidebar: Option<Markup>,
    content: Markup,
) -> Markup {
    let p = shell.depth.prefix();
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (shell.title) " - " (site.title) }
                link rel="stylesheet" href={ (p) (STYLESHEET_PATH) };
                link rel="icon" type="image/png" href={ (p) (site.logo) };
            }
            body {
                (site_header(site, shell))
                div.container {
                    main.main {
                        @if let Some(sidebar) = sidebar {
                            aside.sidebar { (sidebar) }
                        }
                        div.content { (content) }
                    }
                }
                (site_footer(site, shell))
            }
        }
    }
}

/// "1 article" / "N articles".
fn article_count(n: usize) -> String {
    if n == 1 {
        "1 article".to_string()
    } else {
        format!("{n} articles")
    }
}

/// Topic cards for every section, in export order.
fn topic_grid(site: &Site, depth: Depth) -> Markup {
    html! {
        div.topic-grid {
            @for section in &site.hc.sections {
                a.topic-card href={ (depth.prefix()) (section_page_path(section.id)) } {
                    div.topic-icon { (site.config.topic_icon(&section.name)) }
                    h3 { (section.name) }
                    p.topic-description { (site.config.topic_description(section)) }
                    div.topic-meta { (article_count(site.index.articles_in(section.id).len())) }
                }
            }
        }
    }
}

/// Clickable article card with a one-line meta label.
fn article_card(article: &Article, meta: &str, depth: Depth) -> Markup {
    html! {
        a.article-card href={ (depth.prefix()) (article_page_path(article.id)) } {
            h3 { (article.title) }
            div.article-meta { (meta) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Homepage: topic grid, then the most recently updated articles.
pub fn render_homepage(site: &Site) -> Markup {
    let info = site.info();
    let shell = Shell {
        title: "Home",
        description: format!("Get help with {}", info.organization),
        depth: Depth::Root,
        search: true,
        script: true,
    };
    let recent = index::recent_articles(&site.hc.articles, info.popular_count);

    let content = html! {
        h1 { "Welcome to " (info.title) }
        p {
            "Find comprehensive guides, tutorials, and answers to help you get the most out of "
            (info.organization) "."
        }
        h2 { "Browse by Topic" }
        (topic_grid(site, shell.depth))
        h2 { "Popular Articles" }
        div.article-grid {
            @for article in recent {
                @let section = site.index.section(article.section_id);
                (article_card(article, section.map_or(UNKNOWN, |s| s.name.as_str()), shell.depth))
            }
        }
    };

    base_document(info, &shell, None, content)
}

/// Category page: its sections, each with an article count.
pub fn render_category_page(site: &Site, category: &Category) -> Markup {
    let info = site.info();
    let shell = Shell {
        title: &category.name,
        description: "Browse help topics organized by category".to_string(),
        depth: Depth::Nested,
        search: true,
        script: true,
    };
    let p = shell.depth.prefix();
    let sections = site.index.sections_in(category.id);

    let sidebar = html! {
        h3 { "Sections in " (category.name) }
        ul {
            @for section in sections {
                li { a href={ (p) (section_page_path(section.id)) } { (section.name) } }
            }
        }
    };

    let content = html! {
        h1 { (category.name) }
        p { (category.description()) }
        h2 { "Sections" }
        div.article-list {
            @for section in sections {
                div.article-item {
                    h3 { a href={ (p) (section_page_path(section.id)) } { (section.name) } }
                    div.article-meta { (article_count(site.index.articles_in(section.id).len())) }
                }
            }
        }
    };

    base_document(info, &shell, Some(sidebar), content)
}

/// Section page: its articles with their last-updated dates.
pub fn render_section_page(site: &Site, section: &Section) -> Markup {
    let info = site.info();
    let shell = Shell {
        title: &section.name,
        description: format!("Your complete guide to using {}", info.organization),
        depth: Depth::Nested,
        search: false,
        script: false,
    };
    let p = shell.depth.prefix();
    let articles = site.index.articles_in(section.id);

    let sidebar = html! {
        h3 { "Articles in " (section.name) }
        ul {
            @for article in articles {
                li { a href={ (p) (article_page_path(article.id)) } { (article.title) } }
            }
        }
    };

    let content = html! {
        h1 { (section.name) }
        h2 { "Articles" }
        div.article-list {
            @for article in articles {
                div.article-item {
                    h3 { a href={ (p) (article_page_path(article.id)) } { (article.title) } }
                    div.article-meta { "Updated: " (article.updated_date()) }
                }
            }
        }
    };

    base_document(info, &shell, Some(sidebar), content)
}

/// Article page: back-links, breadcrumb meta line and the raw body.
pub fn render_article_page(site: &Site, article: &Article) -> Markup {
    let info = site.info();
    let shell = Shell {
        title: &article.title,
        description: format!("Your complete guide to using {}", info.organization),
        depth: Depth::Nested,
        search: false,
        script: false,
    };
    let p = shell.depth.prefix();
    let (category, section) = site.index.lineage(article);

    let sidebar = html! {
        h3 { "Navigation" }
        ul {
            li { a href={ (p) (HOME_PAGE) } { "← Back to Home" } }
            @if let Some(category) = category {
                li { a href={ (p) (category_page_path(category.id)) } { "← " (category.name) } }
            }
            @if let Some(section) = section {
                li { a href={ (p) (section_page_path(section.id)) } { "← " (section.name) } }
            }
        }
    };

    let content = html! {
        h1 { (article.title) }
        div.article-meta {
            (site.index.breadcrumb(article)) " | Updated: " (article.updated_date())
        }
        div.article-content {
            (PreEscaped(article.body()))
        }
    };

    base_document(info, &shell, Some(sidebar), content)
}

/// Browse Topics: the homepage topic grid on its own page.
pub fn render_topics_index(site: &Site) -> Markup {
    let shell = Shell {
        title: "Browse Topics",
        description: "Browse help topics organized by category".to_string(),
        depth: Depth::Root,
        search: true,
        script: true,
    };

    let content = html! {
        h1 { "Browse Topics" }
        p { "Find articles organized by topic to help you get started quickly." }
        (topic_grid(site, shell.depth))
    };

    base_document(site.info(), &shell, None, content)
}

/// All Articles: every article by title with its category → section label.
pub fn render_articles_index(site: &Site) -> Markup {
    let shell = Shell {
        title: "All Articles",
        description: "Browse all help articles".to_string(),
        depth: Depth::Root,
        search: true,
        script: true,
    };

    let content = html! {
        h1 { "All Articles" }
        div.article-grid {
            @for article in index::articles_by_title(&site.hc.articles) {
                (article_card(article, &site.index.breadcrumb(article), shell.depth))
            }
        }
    };

    base_document(site.info(), &shell, None, content)
}

/// Video Tutorials: one player card per video file.
pub fn render_videos_index(site: &Site, videos: &[Video]) -> Markup {
    let info = site.info();
    let shell = Shell {
        title: "Video Tutorials",
        description: format!("Watch video tutorials to learn how to use {}", info.organization),
        depth: Depth::Root,
        search: true,
        script: true,
    };

    let content = html! {
        h1 { "Video Tutorials" }
        p {
            "Watch step-by-step video guides to help you master " (info.organization)
            " features. Click on any video to watch."
        }
        div.video-grid {
            @for video in videos {
                div.video-card {
                    div.video-thumbnail {
                        video controls preload="metadata" {
                            source src={ "videos/" (video.filename) } type={ "video/" (site.config.videos.extension) };
                            "Your browser does not support the video tag."
                        }
                    }
                    div.video-info {
                        h3 { (video.title) }
                        p.video-description { (video.description) }
                    }
                }
            }
        }
    };

    base_document(info, &shell, None, content)
}

// ============================================================================
// Tests
// ============================================================================
