//! In-memory document used for tests and headless rendering.

use std::collections::{HashMap, HashSet};

use anyhow::anyhow;

use crate::types::Action;

use super::{Control, Dom, Node, Region, Result, SelectOption};

/// Section ids of the stock page layout.
pub const STANDARD_SECTIONS: &[&str] =
    &["manga", "chapters-list", "viewer", "author", "assets", "news"];

#[derive(Debug, Clone)]
struct SectionState {
    id: String,
    hidden: bool,
}

/// Records everything the controller writes so it can be inspected afterwards.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    sections: Vec<SectionState>,
    regions: HashMap<Region, Vec<Node>>,
    texts: HashMap<Region, String>,
    options: HashMap<Control, Vec<SelectOption>>,
    missing: HashSet<Region>,
    nav_links: Vec<String>,
    nav_active: Option<String>,
    modal_open: bool,
    modal_src: Option<String>,
    header_collapsed: bool,
    header_toggle_label: String,
    scroll_resets: usize,
}

impl MemoryDom {
    /// Document with the given sections, all initially visible, and every region present.
    pub fn new<I, S>(section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<SectionState> = section_ids
            .into_iter()
            .map(|id| SectionState { id: id.into(), hidden: false })
            .collect();
        let nav_links = sections.iter().map(|section| section.id.clone()).collect();

        Self {
            sections,
            regions: Region::ALL.iter().map(|region| (*region, Vec::new())).collect(),
            texts: HashMap::new(),
            options: HashMap::new(),
            missing: HashSet::new(),
            nav_links,
            nav_active: None,
            modal_open: false,
            modal_src: None,
            header_collapsed: false,
            header_toggle_label: String::new(),
            scroll_resets: 0,
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_SECTIONS.iter().copied())
    }

    /// Drop a region from the document, as if the page did not provide it.
    pub fn without_region(mut self, region: Region) -> Self {
        self.regions.remove(&region);
        self.missing.insert(region);
        self
    }

    pub fn visible_sections(&self) -> Vec<&str> {
        self.sections.iter().filter(|s| !s.hidden).map(|s| s.id.as_str()).collect()
    }

    pub fn children(&self, region: Region) -> &[Node] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every node carrying `class` inside `region`, in document order.
    pub fn find(&self, region: Region, class: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        for node in self.children(region) {
            node.find_all(class, &mut found);
        }
        found
    }

    /// The action a click on the `index`-th `class` element of `region` would dispatch.
    pub fn click(&self, region: Region, class: &str, index: usize) -> Option<Action> {
        self.find(region, class).get(index).and_then(|node| node.action.clone())
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.texts.get(&region).map(String::as_str)
    }

    pub fn options(&self, control: Control) -> &[SelectOption] {
        self.options.get(&control).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn selected(&self, control: Control) -> Vec<&str> {
        self.options(control)
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.value.as_str())
            .collect()
    }

    pub fn nav_active(&self) -> Option<&str> {
        self.nav_active.as_deref()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn modal_src(&self) -> Option<&str> {
        self.modal_src.as_deref()
    }

    pub fn header_collapsed(&self) -> bool {
        self.header_collapsed
    }

    pub fn header_toggle_label(&self) -> &str {
        &self.header_toggle_label
    }

    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }

    fn region_mut(&mut self, region: Region) -> Result<&mut Vec<Node>> {
        self.regions.get_mut(&region).ok_or_else(|| anyhow!("missing element #{}", region.id()))
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::standard()
    }
}

impl Dom for MemoryDom {
    fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|section| section.id.clone()).collect()
    }

    fn has_element(&self, id: &str) -> bool {
        self.sections.iter().any(|section| section.id == id)
            || Region::ALL.iter().any(|region| region.id() == id && !self.missing.contains(region))
    }

    fn set_section_hidden(&mut self, id: &str, hidden: bool) {
        if let Some(section) = self.sections.iter_mut().find(|section| section.id == id) {
            section.hidden = hidden;
        }
    }

    fn replace_children(&mut self, region: Region, nodes: Vec<Node>) -> Result<()> {
        *self.region_mut(region)? = nodes;
        Ok(())
    }

    fn set_text(&mut self, region: Region, text: &str) -> Result<()> {
        self.region_mut(region)?.clear();
        self.texts.insert(region, text.to_string());
        Ok(())
    }

    fn set_options(&mut self, control: Control, options: Vec<SelectOption>) -> Result<()> {
        self.options.insert(control, options);
        Ok(())
    }

    fn open_modal(&mut self, src: &str) -> Result<()> {
        self.modal_open = true;
        self.modal_src = Some(src.to_string());
        Ok(())
    }

    fn close_modal(&mut self) -> Result<()> {
        self.modal_open = false;
        Ok(())
    }

    fn set_nav_active(&mut self, target: &str) {
        self.nav_active = self.nav_links.iter().find(|link| link.as_str() == target).cloned();
    }

    fn set_header_collapsed(&mut self, collapsed: bool, toggle_label: &str) {
        self.header_collapsed = collapsed;
        self.header_toggle_label = toggle_label.to_string();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_resets += 1;
    }
}
