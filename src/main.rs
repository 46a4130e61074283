//! NovaMart Storefront Entry Point
//!
//! Loads configuration, builds the storefront controller over the live
//! document and binds its behaviors once the page is ready.

mod bindings;
mod browser;
mod web_dom;

use std::cell::RefCell;
use std::rc::Rc;

use storefront_behaviors::{selectors, ConfigError, Storefront, StorefrontConfig};
use web_sys::Document;

use browser::{BrowserTimers, LocalStore};
use web_dom::WebDom;

fn main() {
    console_error_panic_hook::set_once();
    bindings::when_ready(start);
}

fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let config = read_config(&document);
    let level = config.as_ref().map_or(log::Level::Info, StorefrontConfig::level);
    let _ = console_log::init_with_level(level);
    let config = config.unwrap_or_else(|err| {
        log::warn!("{err}; using default storefront config");
        StorefrontConfig::default()
    });

    let dom = WebDom::new(document);
    let year = js_sys::Date::new_0().get_full_year() as i32;
    let mut shop = Storefront::new(
        dom.clone(),
        LocalStore::new(),
        BrowserTimers::default(),
        config,
        Box::new(js_sys::Math::random),
    );
    let fade_targets = shop.init(year);

    let shop = Rc::new(RefCell::new(shop));
    bindings::bind_all(&shop, &dom, &fade_targets);
    log::info!("storefront behaviors bound to {:?}", dom.document().url().ok());
}

/// Optional `<script type="application/json" id="storefront-config">`
/// overrides; absent or empty means defaults
fn read_config(document: &Document) -> Result<StorefrontConfig, ConfigError> {
    let raw = document
        .query_selector(selectors::CONFIG_BLOCK)
        .ok()
        .flatten()
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) if !raw.trim().is_empty() => StorefrontConfig::from_json(&raw),
        _ => Ok(StorefrontConfig::default()),
    }
}
