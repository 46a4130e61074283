//! Event Bindings
//!
//! Wires DOM events to the storefront controller. Listeners live for the
//! whole page, so their closures are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use storefront_behaviors::storefront::search;
use storefront_behaviors::{selectors, Dom, Storefront};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, HtmlInputElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::browser::{BrowserTimers, LocalStore};
use crate::web_dom::WebDom;

pub type SharedStorefront = Rc<RefCell<Storefront<WebDom, LocalStore, BrowserTimers>>>;

/// Run `start` once the document has been parsed
pub fn when_ready<F>(start: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if is_parsed(&document.ready_state()) {
        start();
        return;
    }
    let callback = Closure::once_into_js(start);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
}

/// `document.readyState` past `"loading"` means the DOM is available
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Attach a page-lifetime listener
fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Bind every behavior. `fade_targets` are the elements staged by `init`.
pub fn bind_all(shop: &SharedStorefront, dom: &WebDom, fade_targets: &[Element]) {
    bind_theme_toggle(shop, dom);
    bind_counters(shop, dom);
    bind_search(dom);
    bind_anchors(shop, dom);
    bind_hover(shop, dom);
    bind_parallax(shop);

    let threshold = shop.borrow().config().fade_threshold;
    if let Err(err) = observe_fade_in(shop, fade_targets, threshold) {
        log::warn!("fade-in disabled: {err}");
    }

    shop.borrow().start_ambient_sparkles();
}

fn bind_theme_toggle(shop: &SharedStorefront, dom: &WebDom) {
    let Some(toggle) = dom.query(selectors::THEME_TOGGLE) else {
        return;
    };
    let shop = shop.clone();
    listen(&toggle, "click", move |_| {
        shop.borrow_mut().toggle_theme();
    });
}

fn bind_counters(shop: &SharedStorefront, dom: &WebDom) {
    for button in dom.query_all(selectors::ADD_TO_CART) {
        let shop = shop.clone();
        let control = button.clone();
        listen(&button, "click", move |_| {
            shop.borrow_mut().add_to_cart(&control);
        });
    }
    for button in dom.query_all(selectors::WISHLIST) {
        let shop = shop.clone();
        let control = button.clone();
        listen(&button, "click", move |_| {
            shop.borrow_mut().toggle_wishlist(&control);
        });
    }
}

fn bind_search(dom: &WebDom) {
    let input = dom
        .query(selectors::SEARCH_INPUT)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

    if let Some(form) = dom.query(selectors::SEARCH_FORM) {
        let input = input.clone();
        listen(&form, "submit", move |ev| {
            ev.prevent_default();
            let Some(input) = &input else { return };
            let Some(message) = search::submission_message(&input.value()) else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
        });
    }

    if let Some(input) = input {
        listen(&input, "input", |ev| {
            if let Some(field) = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                search::suggestion(&field.value());
            }
        });
    }
}

fn bind_anchors(shop: &SharedStorefront, dom: &WebDom) {
    for link in dom.query_all(selectors::ANCHOR) {
        let shop = shop.clone();
        let anchor = link.clone();
        listen(&link, "click", move |ev| {
            if shop.borrow().follow_anchor(&anchor) {
                ev.prevent_default();
            }
        });
    }
}

fn bind_hover(shop: &SharedStorefront, dom: &WebDom) {
    for card in dom.query_all(selectors::PRODUCT_CARD) {
        let enter_shop = shop.clone();
        let enter_card = card.clone();
        listen(&card, "mouseenter", move |_| {
            enter_shop.borrow().card_enter(&enter_card);
        });

        let leave_shop = shop.clone();
        let leave_card = card.clone();
        listen(&card, "mouseleave", move |_| {
            leave_shop.borrow().card_leave(&leave_card);
        });
    }
}

fn bind_parallax(shop: &SharedStorefront) {
    if !shop.borrow().has_parallax() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let shop = shop.clone();
    let win = window.clone();
    listen(&window, "scroll", move |_| {
        if let Ok(scroll_y) = win.scroll_y() {
            shop.borrow().scroll(scroll_y);
        }
    });
}

fn observe_fade_in(
    shop: &SharedStorefront,
    targets: &[Element],
    threshold: f64,
) -> Result<(), String> {
    let shop = shop.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if shop.borrow_mut().intersection(&target, entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| format!("{e:?}"))?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(())
}
