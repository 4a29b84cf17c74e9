//! Site configuration: asset layout and user-facing strings.
//!
//! Every field has a default, so an absent or partial configuration is always usable. The browser
//! binding reads an optional `siteConfig` global; headless callers may load a JSON file.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::types::{ChapterId, SECTION_LIBRARY, VolumeId};

pub type Result<T> = crate::Result<T>;

const DEFAULT_ASSET_ROOT: &str = "assets/manga";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Directory holding `vol<N>/ch<M>/<page>` trees, relative to the page.
    pub asset_root: String,
    /// Section shown once the controller has initialised.
    pub initial_section: String,
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub no_manga_data: String,
    pub no_materials: String,
    /// Appended to the chapter count on volume cards.
    pub chapters_suffix: String,
    /// Prefix of the text placeholder shown instead of a missing cover.
    pub volume_placeholder: String,
    pub volume_not_found: String,
    /// Label of the button leading from the volume-not-found notice back to the library.
    pub back_to_library: String,
    pub gallery_alt: String,
    pub header_open_label: String,
    pub header_collapsed_label: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            asset_root: DEFAULT_ASSET_ROOT.to_string(),
            initial_section: SECTION_LIBRARY.to_string(),
            messages: Messages::default(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_manga_data: "Manga data not found. Please run generate_config.ps1.".to_string(),
            no_materials: "No materials yet (add images to assets/materials and run the generator)"
                .to_string(),
            chapters_suffix: "chapters".to_string(),
            volume_placeholder: "Vol".to_string(),
            volume_not_found: "Volume not found".to_string(),
            back_to_library: "←".to_string(),
            gallery_alt: "Artwork".to_string(),
            header_open_label: "👁️".to_string(),
            header_collapsed_label: "✖️".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing site configuration")
    }

    /// Load from a JSON file, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json_str(&text)
                .with_context(|| format!("in configuration file {}", path.display())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => {
                Err(err).with_context(|| format!("reading configuration at {}", path.display()))
            }
        }
    }

    /// Source path of a page image: `<asset_root>/vol<volume>/ch<chapter>/<page>`.
    pub fn page_src(&self, volume: VolumeId, chapter: ChapterId, page: &str) -> String {
        let root = self.asset_root.trim_end_matches('/');
        if root.is_empty() {
            format!("vol{volume}/ch{chapter}/{page}")
        } else {
            format!("{root}/vol{volume}/ch{chapter}/{page}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_src_follows_asset_convention() {
        let config = SiteConfig::default();
        assert_eq!(
            config.page_src(VolumeId(1), ChapterId(2), "p1.jpg"),
            "assets/manga/vol1/ch2/p1.jpg"
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SiteConfig::from_json_str(r#"{"assetRoot": "cdn/manga/", "messages": {"galleryAlt": "Art"}}"#)
                .unwrap();
        assert_eq!(config.page_src(VolumeId(3), ChapterId(4), "a.png"), "cdn/manga/vol3/ch4/a.png");
        assert_eq!(config.messages.gallery_alt, "Art");
        assert_eq!(config.messages.chapters_suffix, "chapters");
        assert_eq!(config.initial_section, "manga");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(&dir.path().join("site.json")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        fs::write(&path, "{ not json").unwrap();
        let err = SiteConfig::load(&path).expect_err("invalid json");
        assert!(format!("{err:#}").contains("site.json"));
    }
}
