//! Chapter rows of the open volume.

use crate::catalog::Volume;
use crate::config::SiteConfig;
use crate::dom::Node;
use crate::types::{Action, SECTION_LIBRARY, VolumeId};

use super::notice;

pub fn render(volume_id: VolumeId, volume: &Volume) -> Vec<Node> {
    volume
        .chapters
        .iter()
        .map(|(chapter_id, chapter)| {
            Node::new("div")
                .class("chapter-item")
                .text(&chapter.title)
                .on_click(Action::LoadChapter(volume_id, *chapter_id))
        })
        .collect()
}

/// Shown instead of the chapter list when a volume id does not resolve.
pub fn not_found(volume_id: VolumeId, config: &SiteConfig) -> Vec<Node> {
    let messages = &config.messages;
    let detail =
        format!("{} ({} {volume_id})", messages.volume_not_found, messages.volume_placeholder);

    vec![
        notice(&detail),
        Node::new("button")
            .class("back-to-library")
            .text(&messages.back_to_library)
            .on_click(Action::Navigate(SECTION_LIBRARY.to_string())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_configured_labels() {
        let mut config = SiteConfig::default();
        config.messages.volume_not_found = "Missing".into();
        config.messages.back_to_library = "Back".into();

        let nodes = not_found(VolumeId(9), &config);

        assert_eq!(nodes[0].text.as_deref(), Some("Missing (Vol 9)"));
        assert_eq!(nodes[1].text.as_deref(), Some("Back"));
        assert_eq!(nodes[1].action, Some(Action::Navigate(SECTION_LIBRARY.to_string())));
    }
}
