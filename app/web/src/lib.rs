//! Browser binding for the manga reader.
//!
//! Reads the generator's globals, mounts the core controller onto the live document and routes
//! DOM events into it.

mod console;
mod dom;
mod events;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use manga_core::log::LogConfig;
use manga_core::{Catalog, Controller, SiteConfig};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::dom::BrowserDom;

const MANGA_GLOBAL: &str = "generatedMangaData";
const MATERIALS_GLOBAL: &str = "generatedMaterialsData";
const CONFIG_GLOBAL: &str = "siteConfig";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let logging = LogConfig::browser();
    if let Err(err) = manga_core::log::init_with_writer(logging, console::ConsoleMakeWriter) {
        web_sys::console::error_1(&format!("failed to initialise logging: {err:#}").into());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let deferred = Closure::once_into_js(move || report(run(window)));
        document.add_event_listener_with_callback("DOMContentLoaded", deferred.unchecked_ref())?;
    } else {
        report(run(window));
    }
    Ok(())
}

fn run(window: Window) -> anyhow::Result<()> {
    let catalog = load_catalog();
    let config = load_config();

    let dom = BrowserDom::new(window)?;
    let document = dom.document().clone();
    let controller = Rc::new(RefCell::new(Controller::new(catalog, config, dom)));

    events::install(&controller, &document)?;
    controller.borrow_mut().init();
    Ok(())
}

/// Generator data, or an empty catalog when it cannot be read. The library then shows its
/// "no data" notice instead of the page failing to start.
fn load_catalog() -> Catalog {
    let manga = global_or_none(MANGA_GLOBAL);
    let materials = global_or_none(MATERIALS_GLOBAL);
    Catalog::from_json(manga.as_deref(), materials.as_deref()).unwrap_or_else(|err| {
        warn!(error = ?err, "catalog unreadable; starting empty");
        Catalog::default()
    })
}

fn load_config() -> SiteConfig {
    let Some(text) = global_or_none(CONFIG_GLOBAL) else {
        return SiteConfig::default();
    };
    SiteConfig::from_json_str(&text).unwrap_or_else(|err| {
        warn!(error = ?err, "site configuration unreadable; using defaults");
        SiteConfig::default()
    })
}

fn global_or_none(name: &str) -> Option<String> {
    read_global(name).unwrap_or_else(|err| {
        warn!(global = name, error = ?err, "treating unreadable global as undefined");
        None
    })
}

/// JSON text of a global defined by an earlier script, or `None` when it is undefined.
///
/// Top-level `const` bindings are not properties of `window`, so the lookup goes through a
/// global-scope `eval` guarded by `typeof`.
fn read_global(name: &str) -> anyhow::Result<Option<String>> {
    let probe = format!("typeof {name} !== 'undefined' ? {name} : undefined");
    let value =
        js_sys::eval(&probe).map_err(dom::js_error).with_context(|| format!("reading {name}"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let text = js_sys::JSON::stringify(&value)
        .map_err(dom::js_error)
        .with_context(|| format!("serialising {name}"))?;
    text.as_string().map(Some).ok_or_else(|| anyhow!("{name} is not serialisable"))
}

fn report(result: anyhow::Result<()>) {
    if let Err(err) = result {
        tracing::error!(error = ?err, "manga reader failed to start");
    }
}
