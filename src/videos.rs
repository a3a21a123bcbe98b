//! Video directory scanning for the videos index page.
//!
//! Independent of the export: the page lists whatever video files sit in a
//! local directory. A missing directory is an empty list, not an error.

use crate::config::SiteConfig;
use std::path::Path;
use walkdir::WalkDir;

/// One card on the videos page.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    /// File name, used for the `<source>` path and the description lookup.
    pub filename: String,
    /// File stem shown as the card heading.
    pub title: String,
    pub description: String,
}

/// List video files directly inside `dir`, sorted by file name.
///
/// Only files with the configured extension (case-sensitive) are listed;
/// subdirectories are not descended into.
pub fn scan_videos(dir: &Path, config: &SiteConfig) -> Result<Vec<Video>, walkdir::Error> {
    if !dir.is_dir() {
        tracing::debug!("no video directory at {}", dir.display());
        return Ok(Vec::new());
    }

    let mut videos = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        // `Path::is_file` follows symlinks; broken links are skipped.
        let is_video = path.is_file()
            && path
                .extension()
                .is_some_and(|e| e.to_string_lossy() == config.videos.extension);
        if !is_video {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let description = config.video_description(&filename).to_string();
        videos.push(Video {
            filename,
            title,
            description,
        });
    }
    Ok(videos)
}
