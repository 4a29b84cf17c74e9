//! Pure projections of the catalog and view state into element trees.

pub mod chapters;
pub mod gallery;
pub mod library;
pub mod viewer;

use crate::dom::Node;

/// Informational paragraph shown in place of empty content.
pub(crate) fn notice(message: &str) -> Node {
    Node::new("p").class("notice").text(message)
}
