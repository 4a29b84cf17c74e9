//! Page images of the open chapter and the viewer's selectors.

use crate::catalog::{Catalog, Chapter, Volume};
use crate::config::SiteConfig;
use crate::dom::{Node, SelectOption};
use crate::types::{ChapterId, VolumeId};

/// One lazily loaded image per page, in the order the generator listed them.
pub fn render_pages(
    volume: VolumeId,
    chapter_id: ChapterId,
    chapter: &Chapter,
    config: &SiteConfig,
) -> Vec<Node> {
    chapter
        .pages()
        .iter()
        .map(|page| {
            Node::new("img")
                .class("manga-page-img")
                .attr("src", config.page_src(volume, chapter_id, page))
                .attr("loading", "lazy")
                .attr("alt", "")
        })
        .collect()
}

/// Every volume, with only `current` selected.
pub fn volume_options(catalog: &Catalog, current: VolumeId) -> Vec<SelectOption> {
    catalog
        .volumes()
        .iter()
        .map(|(id, volume)| SelectOption {
            value: id.to_string(),
            label: volume.title.clone(),
            selected: *id == current,
        })
        .collect()
}

/// Chapters of one volume, with only `current` selected.
pub fn chapter_options(volume: &Volume, current: ChapterId) -> Vec<SelectOption> {
    volume
        .chapters
        .iter()
        .map(|(id, chapter)| SelectOption {
            value: id.to_string(),
            label: chapter.title.clone(),
            selected: *id == current,
        })
        .collect()
}
