//! Artwork grid; each entry opens the enlargement modal.

use crate::catalog::GalleryItem;
use crate::config::SiteConfig;
use crate::dom::Node;
use crate::types::Action;

use super::notice;

pub fn render(items: &[GalleryItem], config: &SiteConfig) -> Vec<Node> {
    if items.is_empty() {
        return vec![notice(&config.messages.no_materials).class("gallery-empty")];
    }

    items
        .iter()
        .map(|item| {
            let image = Node::new("img")
                .attr("src", &item.src)
                .attr("loading", "lazy")
                .attr("alt", &config.messages.gallery_alt);
            Node::new("div")
                .class("gallery-item")
                .on_click(Action::OpenModal(item.src.clone()))
                .child(image)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_shows_notice() {
        let nodes = render(&[], &SiteConfig::default());
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].has_class("gallery-empty"));
    }

    #[test]
    fn entries_open_their_own_image() {
        let items = vec![GalleryItem { src: "assets/materials/a.png".into() }];
        let nodes = render(&items, &SiteConfig::default());
        assert_eq!(nodes[0].action, Some(Action::OpenModal("assets/materials/a.png".into())));
        assert_eq!(nodes[0].children[0].get_attr("alt"), Some("Artwork"));
    }
}
