//! Delegated event listeners feeding the controller.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use manga_core::dom::{Control, HEADER_TOGGLE_ID, MODAL_ID};
use manga_core::{Action, ChapterId, Controller, VolumeId};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlSelectElement};

use crate::dom::{BrowserDom, js_error};

type SharedController = Rc<RefCell<Controller<BrowserDom>>>;

const CLOSE_MODAL_SELECTOR: &str = ".close-modal";
const NAV_LINK_SELECTOR: &str = ".nav-links li";
const ACTION_SELECTOR: &str = "[data-action]";

/// Install one click and one change listener on the document. They live for the page lifetime.
pub fn install(controller: &SharedController, document: &Document) -> Result<()> {
    let app = Rc::clone(controller);
    let click_listener =
        Closure::<dyn FnMut(Event)>::new(move |event: Event| on_click(&app, &event));
    document
        .add_event_listener_with_callback("click", click_listener.as_ref().unchecked_ref())
        .map_err(js_error)?;
    click_listener.forget();

    let app = Rc::clone(controller);
    let change_listener =
        Closure::<dyn FnMut(Event)>::new(move |event: Event| on_change(&app, &event));
    document
        .add_event_listener_with_callback("change", change_listener.as_ref().unchecked_ref())
        .map_err(js_error)?;
    change_listener.forget();

    Ok(())
}

fn on_click(app: &SharedController, event: &Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };

    if target.id() == MODAL_ID {
        with_controller(app, |controller| controller.backdrop_click(true));
        return;
    }
    if closest(&target, CLOSE_MODAL_SELECTOR).is_some() {
        with_controller(app, |controller| controller.close_modal());
        return;
    }
    if closest(&target, &format!("#{HEADER_TOGGLE_ID}")).is_some() {
        dispatch(app, Action::ToggleHeader);
        return;
    }
    if let Some(link) = closest(&target, NAV_LINK_SELECTOR) {
        if let Some(section) = link.get_attribute("data-target") {
            dispatch(app, Action::Navigate(section));
        }
        return;
    }

    let Some(element) = closest(&target, ACTION_SELECTOR) else {
        return;
    };
    match Action::from_attrs(|name| element.get_attribute(name)) {
        Some(action) => dispatch(app, action),
        None => debug!(tag = %element.tag_name(), "ignoring element with unknown action"),
    }
}

fn on_change(app: &SharedController, event: &Event) {
    let Some(select) = event.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
        return;
    };

    let value = select.value();
    let action = if select.id() == Control::VolumeSelect.id() {
        value.parse::<VolumeId>().ok().map(Action::SelectVolume)
    } else if select.id() == Control::ChapterSelect.id() {
        value.parse::<ChapterId>().ok().map(Action::SelectChapter)
    } else {
        return;
    };

    match action {
        Some(action) => dispatch(app, action),
        None => warn!(control = %select.id(), value = %value, "selector value is not an id"),
    }
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

fn dispatch(app: &SharedController, action: Action) {
    with_controller(app, move |controller| {
        if let Err(err) = controller.dispatch(action) {
            debug!(error = %err, "navigation did not complete");
        }
    });
}

fn with_controller<F>(app: &SharedController, f: F)
where
    F: FnOnce(&mut Controller<BrowserDom>),
{
    match app.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => warn!("controller busy; dropping event"),
    }
}
