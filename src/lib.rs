//! # Helpdesk Site
//!
//! Turns a help-center export (three JSON files) into a static website that
//! can be browsed straight from disk. No server, no database, no network:
//! open `index.html` in a browser and everything works.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Load      export/  →  HelpCenter    (JSON files → records, in file order)
//! 2. Index     HelpCenter → SiteIndex    (category → sections → articles)
//! 3. Generate  SiteIndex  →  output/     (HTML pages, stylesheet, script)
//! ```
//!
//! Loading and indexing are pure data transforms, so almost everything can be
//! tested without touching the filesystem. Only [`generate::generate`] writes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`load`] | Stage 1: reads `categories.json`, `sections.json`, `articles.json` |
//! | [`index`] | Stage 2: groups records by parent id, resolves breadcrumbs |
//! | [`generate`] | Stage 3: renders every page with Maud and writes the site |
//! | [`config`] | `config.toml` loading: branding, topic icons, video descriptions |
//! | [`types`] | Export record types (`Category`, `Section`, `Article`) |
//! | [`assets`] | Embedded stylesheet and client script |
//! | [`videos`] | Local video directory scan for the videos page |
//! | [`output`] | CLI output formatting for load and generate results |
//!
//! # Design Decisions
//!
//! ## Tolerant of Broken References
//!
//! Exports are rarely clean. A section pointing at a missing category is
//! still rendered, with "Unknown" in its breadcrumb. An article pointing at a
//! missing section still gets its own page and shows up in the site-wide
//! listings, it just never appears on a section page. Neither is an error;
//! `check` lists them.
//!
//! ## Deterministic Output
//!
//! Ordering comes from the export's file order, stable sorts and ordered
//! maps. No timestamps are written. Two builds of the same export produce
//! byte-identical sites.
//!
//! ## Relative Links Only
//!
//! Every link is relative to the page it sits on, so the output directory
//! can be moved, zipped, or opened over `file://` without breaking.

pub mod assets;
pub mod config;
pub mod generate;
pub mod index;
pub mod load;
pub mod output;
pub mod types;
pub mod videos;

#[cfg(test)]
pub(crate) mod test_helpers;
