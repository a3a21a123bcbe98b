//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives
//! next to the export JSON files and is optional: stock defaults reproduce
//! the Userology help center, and a user file only needs the keys it wants
//! to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! [site]
//! title = "Userology Help Center"
//! organization = "Userology"    # Used in page descriptions and the footer
//! copyright_year = 2025
//! logo = "logo.png"             # Relative to the output root
//! popular_count = 6             # Articles in the homepage "Popular" grid
//!
//! # Topic cards, keyed by section name
//! [topics."Study Setup"]
//! icon = "📝"
//! description = "Learn how to create and configure your research studies"
//!
//! [videos]
//! extension = "mp4"
//!
//! # Video card descriptions, keyed by file name
//! [videos.descriptions]
//! "Preview Session.mp4" = "Preview how your study will appear ..."
//! ```
//!
//! ## Lookup Fallbacks
//!
//! - Section without a topic entry (or an entry without `icon`): `📄`.
//! - Section without a topic `description`: the section's own description.
//! - Video file without a description entry: empty string.
//!
//! User `[topics]` and `[videos.descriptions]` entries are merged over the
//! stock tables key by key. Unknown keys are rejected to catch typos early.

use crate::types::Section;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

/// Icon shown on a topic card when the section has no configured icon.
pub const FALLBACK_ICON: &str = "📄";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Branding and homepage settings.
    pub site: SiteInfo,
    /// Topic card icon/description by section name.
    pub topics: BTreeMap<String, Topic>,
    /// Video index settings.
    pub videos: VideosConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo::default(),
            topics: default_topics(),
            videos: VideosConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.site.popular_count == 0 {
            return Err(ConfigError::Validation(
                "site.popular_count must be at least 1".into(),
            ));
        }
        if self.videos.extension.is_empty() || self.videos.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "videos.extension must be a bare extension like \"mp4\"".into(),
            ));
        }
        Ok(())
    }

    /// Topic card icon for a section name.
    pub fn topic_icon(&self, section_name: &str) -> &str {
        self.topics
            .get(section_name)
            .and_then(|t| t.icon.as_deref())
            .unwrap_or(FALLBACK_ICON)
    }

    /// Topic card description, falling back to the section's own description.
    pub fn topic_description<'a>(&'a self, section: &'a Section) -> &'a str {
        self.topics
            .get(&section.name)
            .and_then(|t| t.description.as_deref())
            .unwrap_or_else(|| section.description())
    }

    /// Video card description for a file name; empty when unknown.
    pub fn video_description(&self, filename: &str) -> &str {
        self.videos
            .descriptions
            .get(filename)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Branding shared by every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Header heading and `<title>` suffix.
    pub title: String,
    /// Product name used in page descriptions and the footer.
    pub organization: String,
    pub copyright_year: u32,
    /// Logo/favicon path relative to the output root.
    pub logo: String,
    /// Number of articles in the homepage "Popular Articles" grid.
    pub popular_count: usize,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Userology Help Center".to_string(),
            organization: "Userology".to_string(),
            copyright_year: 2025,
            logo: "logo.png".to_string(),
            popular_count: 6,
        }
    }
}

/// One topic card lookup entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Topic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Topic {
    fn new(icon: &str, description: &str) -> Self {
        Self {
            icon: Some(icon.to_string()),
            description: Some(description.to_string()),
        }
    }
}

/// Video index settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideosConfig {
    /// File extension (without the dot) of files listed on the videos page.
    pub extension: String,
    /// Card description by file name.
    pub descriptions: BTreeMap<String, String>,
}

impl Default for VideosConfig {
    fn default() -> Self {
        Self {
            extension: "mp4".to_string(),
            descriptions: default_video_descriptions(),
        }
    }
}

fn default_topics() -> BTreeMap<String, Topic> {
    [
        ("Study Setup", "📝", "Learn how to create and configure your research studies"),
        ("Interview Plan", "💬", "Set up discussion guides and interview sections"),
        ("Study Settings", "⚙️", "Configure AI moderator, devices, permissions, and more"),
        ("Launch", "🚀", "Recruit participants and preview your study"),
        ("Responses and Recordings", "🎥", "Manage recordings, clips, and participant responses"),
        ("Settings and Admin", "👥", "Manage your team and organization settings"),
        ("Results and Reports", "📊", "Analyze qualitative and quantitative research data"),
    ]
    .into_iter()
    .map(|(name, icon, desc)| (name.to_string(), Topic::new(icon, desc)))
    .collect()
}

fn default_video_descriptions() -> BTreeMap<String, String> {
    [
        ("Creating your study on Userology.mp4", "Learn how to create and set up a new study on the Userology platform."),
        ("AI Discussion Guides.mp4", "Understand how AI-powered discussion guides enhance your usability testing."),
        ("AI Moderator Configuration.mp4", "Configure the AI moderator settings for your research sessions."),
        ("AI Transcript.mp4", "Learn how to access and utilize AI-generated transcripts from your sessions."),
        ("Ask AI Feature.mp4", "Discover how to use the Ask AI feature to get insights from your research data."),
        ("Configuring Devices and Browsers.mp4", "Set up device and browser requirements for your study participants."),
        ("Downloading and Creating Clips.mp4", "Learn how to download recordings and create clips from your research sessions."),
        ("Duplicating a study on userology.mp4", "Quickly duplicate an existing study to save time on setup."),
        ("External Recruitment.mp4", "Learn how to recruit participants from external sources for your studies."),
        ("Launching Your Study and Recruiting Participants.mp4", "Complete guide to launching your study and recruiting participants."),
        ("Live Product Section.mp4", "Set up and configure the live product testing section in your study."),
        ("Managing Team and Inviting Members.mp4", "Add and manage team members in your Userology organization."),
        ("Organization settings.mp4", "Configure your organization settings and preferences."),
        ("Personalizing Your Study.mp4", "Customize your study with branding and personalization options."),
        ("Preview Session.mp4", "Preview how your study will appear to participants before launching."),
        ("Prototype Section.mp4", "Set up prototype testing sections for your design research."),
        ("QnA results.mp4", "Analyze and interpret Q&A results from your research sessions."),
        ("Recording permission settings.mp4", "Configure recording permissions and privacy settings for your studies."),
        ("Recordings page.mp4", "Navigate and manage all your session recordings in one place."),
        ("Recruit Participant Yourself.mp4", "Learn how to recruit and invite your own participants to studies."),
        ("Sign In Feature.mp4", "Set up sign-in requirements for your study participants."),
        ("Time estimation feature.mp4", "Use the time estimation feature to plan your study duration."),
        ("Types of responses .mp4", "Understand the different types of responses you can collect in your studies."),
        ("Understanding Quantitative Results .mp4", "Learn how to analyze and interpret quantitative data from your research."),
        ("Uploading a Legal Document to Your Study.mp4", "Add consent forms and legal documents to your study setup."),
        ("Usability score.mp4", "Understand and interpret usability scores from your testing sessions."),
        ("Voice Interview Section.mp4", "Set up and conduct voice interviews as part of your research studies."),
    ]
    .into_iter()
    .map(|(file, desc)| (file.to_string(), desc.to_string()))
    .collect()
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Used as the base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the export directory.
pub fn load_config(export_dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(export_dir)?;
    resolve_config(base, overlay)
}

/// Returns a commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command. Only a sample of the stock lookup
/// tables is listed; the remaining entries stay active unless overridden.
pub fn stock_config_toml() -> &'static str {
    r##"# Help center site configuration
# ==============================
# Place this file next to categories.json / sections.json / articles.json.
# All settings are optional; values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Branding
# ---------------------------------------------------------------------------
[site]
# Shown in the page header and appended to every <title>.
title = "Userology Help Center"

# Product name used in page descriptions and the footer copyright line.
organization = "Userology"
copyright_year = 2025

# Logo and favicon, relative to the output root. Copy it there yourself.
logo = "logo.png"

# How many recently updated articles the homepage lists.
popular_count = 6

# ---------------------------------------------------------------------------
# Topic cards (homepage and Browse Topics), keyed by section name.
# Sections without an entry get the 📄 icon and their own description.
# ---------------------------------------------------------------------------
[topics."Study Setup"]
icon = "📝"
description = "Learn how to create and configure your research studies"

[topics."Launch"]
icon = "🚀"
description = "Recruit participants and preview your study"

# ---------------------------------------------------------------------------
# Videos page
# ---------------------------------------------------------------------------
[videos]
# Files in the videos directory with this extension get a card.
extension = "mp4"

# Card descriptions keyed by file name. Unlisted files get no description.
[videos.descriptions]
"Preview Session.mp4" = "Preview how your study will appear to participants before launching."
"##
}
