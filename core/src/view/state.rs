//! What the reader is currently looking at.

use crate::types::{ChapterId, Section, VolumeId};

/// Mutated only by controller navigation; nothing here survives a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub current_volume: Option<VolumeId>,
    pub current_chapter: Option<ChapterId>,
    pub current_section: Section,
    /// Source of the image enlarged in the gallery modal, while it is open.
    pub modal: Option<String>,
    pub header_collapsed: bool,
}

impl ViewState {
    pub fn is_reading(&self, volume: VolumeId, chapter: ChapterId) -> bool {
        self.current_section == Section::Viewer
            && self.current_volume == Some(volume)
            && self.current_chapter == Some(chapter)
    }
}
