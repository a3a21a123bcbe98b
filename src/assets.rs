//! Static stylesheet and client script.
//!
//! Both payloads are embedded at compile time and written verbatim; nothing
//! in them depends on the export. The script is progressive enhancement
//! only: every behavior checks for its DOM nodes first, so pages work (minus
//! the search filter) without it.
//!
//! - `static/style.css`: layout, cards, topic/video grids, responsive rules
//! - `static/main.js`: search filter over `.article-card`/`.article-item`
//!   (queries of 2+ characters), active nav link, smooth in-page scrolling,
//!   image fade-in

use std::fs;
use std::path::Path;

pub const STYLESHEET: &str = include_str!("../static/style.css");
pub const SCRIPT: &str = include_str!("../static/main.js");

/// Stylesheet location relative to the output root.
pub const STYLESHEET_PATH: &str = "css/style.css";
/// Script location relative to the output root.
pub const SCRIPT_PATH: &str = "js/main.js";

/// Write both assets under `output_dir`, creating their directories.
///
/// Returns the relative paths written, in write order.
pub fn write_assets(output_dir: &Path) -> std::io::Result<Vec<&'static str>> {
    let mut written = Vec::new();
    for (rel, payload) in [(STYLESHEET_PATH, STYLESHEET), (SCRIPT_PATH, SCRIPT)] {
        let path = output_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, payload)?;
        tracing::debug!("wrote {}", path.display());
        written.push(rel);
    }
    Ok(written)
}
