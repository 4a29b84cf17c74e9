//! [`Dom`] over the live browser document.

use anyhow::{Context, Result, anyhow};
use manga_core::dom::node::{self, Node as ViewNode};
use manga_core::dom::{
    Control, Dom, HEADER_TOGGLE_ID, MODAL_ID, MODAL_IMAGE_ID, Region, SECTION_CLASS, SelectOption,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlSelectElement, Window};

const HIDDEN_CLASS: &str = "hidden";
const ACTIVE_CLASS: &str = "active";
const HEADER_COLLAPSED_CLASS: &str = "header-collapsed";
const NAV_LINK_SELECTOR: &str = ".nav-links li";
const STICKY_HEADER_SELECTOR: &str = ".sticky-header";

pub(crate) fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!("{err:?}")
}

#[derive(Debug)]
pub struct BrowserDom {
    window: Window,
    document: Document,
}

impl BrowserDom {
    pub fn new(window: Window) -> Result<Self> {
        let document = window.document().context("window has no document")?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Result<Element> {
        self.document.get_element_by_id(id).with_context(|| format!("missing element #{id}"))
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl Dom for BrowserDom {
    fn section_ids(&self) -> Vec<String> {
        self.query_all(&format!(".{SECTION_CLASS}"))
            .into_iter()
            .map(|element| element.id())
            .filter(|id| !id.is_empty())
            .collect()
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_section_hidden(&mut self, id: &str, hidden: bool) {
        let Ok(element) = self.element(id) else {
            return;
        };
        let classes = element.class_list();
        if hidden {
            let _ = classes.add_1(HIDDEN_CLASS);
            let _ = classes.remove_1(ACTIVE_CLASS);
        } else {
            let _ = classes.remove_1(HIDDEN_CLASS);
        }
    }

    fn replace_children(&mut self, region: Region, nodes: Vec<ViewNode>) -> Result<()> {
        self.element(region.id())?.set_inner_html(&node::to_html(&nodes));
        Ok(())
    }

    fn set_text(&mut self, region: Region, text: &str) -> Result<()> {
        self.element(region.id())?.set_text_content(Some(text));
        Ok(())
    }

    fn set_options(&mut self, control: Control, options: Vec<SelectOption>) -> Result<()> {
        let select = self
            .element(control.id())?
            .dyn_into::<HtmlSelectElement>()
            .map_err(|_| anyhow!("#{} is not a <select>", control.id()))?;

        let selected = options.iter().find(|option| option.selected).map(|o| o.value.clone());
        let html: String = options
            .into_iter()
            .map(|option| {
                let node = ViewNode::new("option").attr("value", option.value).text(option.label);
                if option.selected { node.attr("selected", "selected") } else { node }
            })
            .map(|node| node.to_html())
            .collect();

        select.set_inner_html(&html);
        if let Some(value) = selected {
            select.set_value(&value);
        }
        Ok(())
    }

    fn open_modal(&mut self, src: &str) -> Result<()> {
        self.element(MODAL_IMAGE_ID)?.set_attribute("src", src).map_err(js_error)?;
        self.element(MODAL_ID)?.class_list().add_1(ACTIVE_CLASS).map_err(js_error)
    }

    fn close_modal(&mut self) -> Result<()> {
        self.element(MODAL_ID)?.class_list().remove_1(ACTIVE_CLASS).map_err(js_error)
    }

    fn set_nav_active(&mut self, target: &str) {
        for link in self.query_all(NAV_LINK_SELECTOR) {
            let is_target = link.get_attribute("data-target").as_deref() == Some(target);
            let _ = link.class_list().toggle_with_force(ACTIVE_CLASS, is_target);
        }
    }

    fn set_header_collapsed(&mut self, collapsed: bool, toggle_label: &str) {
        if let Ok(Some(header)) = self.document.query_selector(STICKY_HEADER_SELECTOR) {
            let _ = header.class_list().toggle_with_force(HEADER_COLLAPSED_CLASS, collapsed);
        }
        if let Ok(toggle) = self.element(HEADER_TOGGLE_ID) {
            toggle.set_text_content(Some(toggle_label));
        }
    }

    fn scroll_to_top(&mut self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
