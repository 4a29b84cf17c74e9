//! Volume cards for the library grid.

use crate::catalog::{Catalog, Volume};
use crate::config::SiteConfig;
use crate::dom::Node;
use crate::types::{Action, VolumeId};

use super::notice;

/// One card per volume in id order, or a single notice when the catalog is empty.
pub fn render(catalog: &Catalog, config: &SiteConfig) -> Vec<Node> {
    if catalog.is_empty() {
        return vec![notice(&config.messages.no_manga_data)];
    }

    catalog.volumes().iter().map(|(id, volume)| card(*id, volume, config)).collect()
}

fn card(id: VolumeId, volume: &Volume, config: &SiteConfig) -> Node {
    let placeholder = format!("{} {id}", config.messages.volume_placeholder);
    let cover = match &volume.cover {
        Some(src) => {
            Node::new("img").class("volume-cover").attr("src", src).attr("alt", placeholder)
        }
        None => Node::new("div").class("volume-cover").text(placeholder),
    };

    Node::new("div")
        .class("volume-card")
        .on_click(Action::OpenVolume(id))
        .child(cover)
        .child(Node::new("div").class("volume-title").text(&volume.title))
        .child(
            Node::new("div")
                .class("volume-info")
                .text(format!("{} {}", volume.chapters.len(), config.messages.chapters_suffix)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cover_falls_back_to_placeholder() {
        let catalog = Catalog::from_json(
            Some(r#"{"4": {"title": "Four", "chapters": {"1": {"title": "a", "pages": []}}}}"#),
            None,
        )
        .unwrap();
        let nodes = render(&catalog, &SiteConfig::default());

        assert_eq!(nodes.len(), 1);
        let cover = &nodes[0].children[0];
        assert_eq!(cover.tag, "div");
        assert_eq!(cover.text.as_deref(), Some("Vol 4"));
        assert_eq!(nodes[0].children[2].text.as_deref(), Some("1 chapters"));
    }
}
