//! Test fixtures: a storefront page built in `FakeDom` and helpers to
//! drive a controller over it.

use crate::config::StorefrontConfig;
use crate::dom::fake::{FakeDom, NodeId};
use crate::scheduler::VirtualClock;
use crate::storage::MemoryStore;
use crate::storefront::Storefront;

pub type TestStorefront = Storefront<FakeDom, MemoryStore, VirtualClock>;

pub struct Page {
    pub dom: FakeDom,
    pub toggle: NodeId,
    pub search_input: NodeId,
    pub cart_badge: NodeId,
    pub wish_badge: NodeId,
    pub deals_link: NodeId,
    pub top_link: NodeId,
    pub missing_link: NodeId,
    pub hero: NodeId,
    pub hero_left: NodeId,
    pub hero_image: NodeId,
    pub deals: NodeId,
    pub cards: Vec<NodeId>,
    pub add_buttons: Vec<NodeId>,
    pub wish_buttons: Vec<NodeId>,
    pub year: NodeId,
}

/// Header with theme toggle, search and badges, a hero, two product cards
/// (the second without a title) and a footer.
pub fn page() -> Page {
    let dom = FakeDom::new();
    let body = dom.root();

    let header = dom.add(body, "header", &[], "");
    let toggle = dom.add(header, "button", &[("id", "themeToggle")], "");
    let form = dom.add(header, "form", &[("id", "searchForm")], "");
    let search_input = dom.add(form, "input", &[("id", "searchInput")], "");
    let cart = dom.add(header, "button", &[("data-action", "open-cart")], "");
    let cart_badge = dom.add(cart, "span", &[("class", "badge")], "3");
    let wish = dom.add(header, "button", &[("data-action", "open-wishlist")], "");
    let wish_badge = dom.add(wish, "span", &[("class", "badge")], "0");
    let nav = dom.add(header, "nav", &[], "");
    let deals_link = dom.add(nav, "a", &[("href", "#deals")], "Deals");
    let top_link = dom.add(nav, "a", &[("href", "#")], "Top");
    let missing_link = dom.add(nav, "a", &[("href", "#missing")], "Gone");

    let hero = dom.add(body, "section", &[("class", "hero")], "");
    let hero_left = dom.add(hero, "div", &[("class", "hero-left")], "");
    let hero_right = dom.add(hero, "div", &[("class", "hero-right")], "");
    let hero_image = dom.add(hero_right, "img", &[("src", "hero.png")], "");

    let deals = dom.add(body, "section", &[("id", "deals")], "");
    let mut cards = Vec::new();
    let mut add_buttons = Vec::new();
    let mut wish_buttons = Vec::new();
    for title in ["Aurora Headphones", ""] {
        let card = dom.add(deals, "article", &[("class", "product-card")], "");
        dom.add(card, "h3", &[("class", "product-title")], title);
        add_buttons.push(dom.add(card, "button", &[("data-action", "add-to-cart")], "Add"));
        wish_buttons.push(dom.add(card, "button", &[("data-action", "wishlist")], "♡"));
        cards.push(card);
    }

    let footer = dom.add(body, "footer", &[], "");
    let year = dom.add(footer, "span", &[("id", "year")], "");

    Page {
        dom,
        toggle,
        search_input,
        cart_badge,
        wish_badge,
        deals_link,
        top_link,
        missing_link,
        hero,
        hero_left,
        hero_image,
        deals,
        cards,
        add_buttons,
        wish_buttons,
        year,
    }
}

/// Cycle through `values` forever
pub fn sequence(values: Vec<f64>) -> Box<dyn FnMut() -> f64> {
    let mut index = 0;
    Box::new(move || {
        let value = values[index % values.len()];
        index += 1;
        value
    })
}

pub fn storefront(dom: &FakeDom, store: &MemoryStore, clock: &VirtualClock) -> TestStorefront {
    Storefront::new(
        dom.clone(),
        store.clone(),
        clock.clone(),
        StorefrontConfig::default(),
        sequence(vec![0.5]),
    )
}
