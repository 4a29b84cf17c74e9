//! Navigation failures the embedding layer may want to react to.

use thiserror::Error;

use crate::types::{ChapterId, VolumeId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("volume {0} not found")]
    VolumeNotFound(VolumeId),
    #[error("chapter {chapter} not found in volume {volume}")]
    ChapterNotFound { volume: VolumeId, chapter: ChapterId },
    #[error("volume {0} has no chapters")]
    EmptyVolume(VolumeId),
    #[error("no volume selected")]
    NoVolumeSelected,
}
