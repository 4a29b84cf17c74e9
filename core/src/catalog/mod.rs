//! Read-only manga catalog and gallery references supplied by the data generator.

pub mod load;

use std::collections::BTreeMap;
use std::path::Path;

use crate::types::{ChapterId, VolumeId};

pub type Result<T> = crate::Result<T>;

/// A single chapter and its pages in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    /// `None` when the generator supplied no usable page list.
    pub pages: Option<Vec<String>>,
}

impl Chapter {
    pub fn new(title: impl Into<String>, pages: Vec<String>) -> Self {
        Self { title: title.into(), pages: Some(pages) }
    }

    pub fn pages(&self) -> &[String] {
        self.pages.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    pub title: String,
    pub cover: Option<String>,
    pub chapters: BTreeMap<ChapterId, Chapter>,
}

impl Volume {
    pub fn chapter(&self, id: ChapterId) -> Option<&Chapter> {
        self.chapters.get(&id)
    }

    pub fn first_chapter(&self) -> Option<ChapterId> {
        self.chapters.keys().next().copied()
    }
}

/// Standalone artwork shown in the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub src: String,
}

/// Volumes ordered by numeric id plus the flat gallery list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    volumes: BTreeMap<VolumeId, Volume>,
    gallery: Vec<GalleryItem>,
}

impl Catalog {
    pub fn new(volumes: BTreeMap<VolumeId, Volume>, gallery: Vec<GalleryItem>) -> Self {
        Self { volumes, gallery }
    }

    /// Parse the generator output. `None` stands for a global that was never defined.
    pub fn from_json(manga: Option<&str>, materials: Option<&str>) -> Result<Self> {
        let volumes = match manga {
            Some(text) => load::parse_volumes(text)?,
            None => BTreeMap::new(),
        };
        let gallery = match materials {
            Some(text) => load::parse_gallery(text)?,
            None => Vec::new(),
        };
        Ok(Self { volumes, gallery })
    }

    /// Read generator output files. A missing file is treated like an undefined global.
    pub fn load(manga_path: &Path, materials_path: &Path) -> Result<Self> {
        let manga = load::read_optional(manga_path)?;
        let materials = load::read_optional(materials_path)?;
        Self::from_json(manga.as_deref(), materials.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn volumes(&self) -> &BTreeMap<VolumeId, Volume> {
        &self.volumes
    }

    pub fn volume(&self, id: VolumeId) -> Option<&Volume> {
        self.volumes.get(&id)
    }

    pub fn first_volume(&self) -> Option<VolumeId> {
        self.volumes.keys().next().copied()
    }

    pub fn gallery(&self) -> &[GalleryItem] {
        &self.gallery
    }
}
