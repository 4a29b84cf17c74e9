//! Shows exactly one section at a time.

use tracing::debug;

use crate::dom::Dom;
use crate::types::Section;

use super::ViewState;

/// Hide every section, then reveal `id` if the document has it.
///
/// An id without a matching element leaves every section hidden; the state still records the
/// request. The viewport is scrolled back to the top either way.
pub fn select_section<D: Dom + ?Sized>(dom: &mut D, state: &mut ViewState, id: &str) {
    for section in dom.section_ids() {
        dom.set_section_hidden(&section, true);
    }

    if dom.has_element(id) {
        dom.set_section_hidden(id, false);
    } else {
        debug!(section = id, "no element for section");
    }

    state.current_section = Section::from_id(id);
    dom.scroll_to_top();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;

    #[test]
    fn repeated_selection_keeps_one_section_visible() {
        let mut dom = MemoryDom::standard();
        let mut state = ViewState::default();

        select_section(&mut dom, &mut state, "author");
        select_section(&mut dom, &mut state, "author");

        assert_eq!(dom.visible_sections(), vec!["author"]);
        assert_eq!(state.current_section, Section::Static("author".into()));
        assert_eq!(dom.scroll_resets(), 2);
    }

    #[test]
    fn unknown_section_hides_everything() {
        let mut dom = MemoryDom::standard();
        let mut state = ViewState::default();

        select_section(&mut dom, &mut state, "viewer");
        select_section(&mut dom, &mut state, "shop");

        assert!(dom.visible_sections().is_empty());
        assert_eq!(state.current_section, Section::Static("shop".into()));
    }
}
