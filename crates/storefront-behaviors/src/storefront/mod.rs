//! Storefront Controller
//!
//! Owns the page's transient state (theme, counters, fade-in latches) and
//! applies every behavior through the `Dom`, `PreferenceStore` and
//! `Scheduler` seams. The host binds events and forwards them here.

mod counters;
mod effects;
mod fade_in;
mod navigation;
pub mod search;
mod sparkle;
mod theme;

pub use effects::{HOVER_SHADOW, HOVER_TRANSFORM};
pub use sparkle::Sparkler;

use counters::BadgeCounter;
use fade_in::FadeTarget;

use crate::config::StorefrontConfig;
use crate::dom::{selectors, Dom};
use crate::models::Theme;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::storage::{PreferenceStore, THEME_KEY};

pub struct Storefront<D: Dom, S: PreferenceStore, T: Scheduler> {
    dom: D,
    store: S,
    timers: T,
    config: StorefrontConfig,
    theme: Theme,
    toggle: Option<D::Node>,
    cart: BadgeCounter<D::Node>,
    wishlist: BadgeCounter<D::Node>,
    fade_targets: Vec<FadeTarget<D::Node>>,
    hero_image: Option<D::Node>,
    sparkler: Sparkler<D, T>,
}

impl<D: Dom, S: PreferenceStore, T: Scheduler> Storefront<D, S, T> {
    /// Locate the page regions and read initial state. Nothing is mutated
    /// until `init`.
    pub fn new(
        dom: D,
        store: S,
        timers: T,
        config: StorefrontConfig,
        random: Box<dyn FnMut() -> f64>,
    ) -> Self {
        let toggle = dom.query(selectors::THEME_TOGGLE);
        let cart = BadgeCounter::locate(&dom, selectors::OPEN_CART);
        let wishlist = BadgeCounter::locate(&dom, selectors::OPEN_WISHLIST);
        let hero_image = dom.query(selectors::HERO_IMAGE);
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        let sparkler = Sparkler::new(dom.clone(), timers.clone(), random);

        log::debug!(
            "storefront located: toggle={}, cart badge={}, wishlist badge={}, hero image={}",
            toggle.is_some(),
            cart.is_bound(),
            wishlist.is_bound(),
            hero_image.is_some()
        );

        Self {
            dom,
            store,
            timers,
            config,
            theme,
            toggle,
            cart,
            wishlist,
            fade_targets: Vec::new(),
            hero_image,
            sparkler,
        }
    }

    /// Apply startup state: persisted theme, footer year, fade-in staging
    /// and product tooltips. Returns the elements to watch for fade-in.
    pub fn init(&mut self, year: i32) -> Vec<D::Node> {
        self.set_theme(self.theme);
        self.stamp_year(year);
        let targets = self.prepare_fade_in();
        self.apply_tooltips();
        targets
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn cart_count(&self) -> i64 {
        self.cart.count()
    }

    pub fn wishlist_count(&self) -> i64 {
        self.wishlist.count()
    }

    pub fn has_parallax(&self) -> bool {
        self.hero_image.is_some()
    }

    /// Remove `class` from `node` once `delay_ms` has passed
    fn clear_class_later(&self, node: &D::Node, class: &'static str, delay_ms: u32) -> TaskHandle {
        let dom = self.dom.clone();
        let node = node.clone();
        self.timers
            .after(delay_ms, Box::new(move || dom.remove_class(&node, class)))
    }
}
