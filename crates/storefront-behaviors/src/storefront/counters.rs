//! Cart and wishlist badge counters.
//!
//! Counters are decorative: they start from whatever the badge shows and
//! are never persisted or reconciled with a real cart.

use super::Storefront;
use crate::dom::{selectors, Dom};
use crate::models::{parse_badge, wishlist_glyph, Placement};
use crate::scheduler::Scheduler;
use crate::storage::PreferenceStore;

/// Running count shown in a header badge
pub(crate) struct BadgeCounter<N> {
    badge: Option<N>,
    count: i64,
}

impl<N> BadgeCounter<N> {
    /// Find the badge nested in the link matched by `link_selector` and
    /// seed the count from its text
    pub(crate) fn locate<D: Dom<Node = N>>(dom: &D, link_selector: &str) -> Self {
        let badge = dom
            .query(link_selector)
            .and_then(|link| dom.query_in(&link, selectors::BADGE));
        let text = badge.as_ref().and_then(|node| dom.text(node));
        Self {
            count: parse_badge(text.as_deref()),
            badge,
        }
    }

    pub(crate) fn count(&self) -> i64 {
        self.count
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.badge.is_some()
    }
}

impl<D: Dom, S: PreferenceStore, T: Scheduler> Storefront<D, S, T> {
    /// Add-to-cart activation. Returns the new cart count.
    pub fn add_to_cart(&mut self, control: &D::Node) -> i64 {
        self.cart.count += 1;
        self.refresh_badge(&self.cart);

        if let Some(card) = self.dom.closest(control, selectors::PRODUCT_CARD) {
            self.dom.add_class(&card, selectors::ADDED_TO_CART);
            self.clear_class_later(&card, selectors::ADDED_TO_CART, self.config.added_to_cart_ms);
        }
        self.cart.count
    }

    /// Wishlist activation. Flips the control's `active` class and returns
    /// the new state.
    pub fn toggle_wishlist(&mut self, control: &D::Node) -> bool {
        let active = self.dom.toggle_class(control, selectors::ACTIVE);
        self.dom.set_text(control, wishlist_glyph(active));
        self.wishlist.count += if active { 1 } else { -1 };
        self.refresh_badge(&self.wishlist);

        if active {
            self.sparkler
                .spawn(control, Placement::Bounded, self.config.sparkle_ms);
        }
        active
    }

    fn refresh_badge(&self, counter: &BadgeCounter<D::Node>) {
        let Some(badge) = &counter.badge else { return };
        self.dom.set_text(badge, &counter.count.to_string());
        self.dom.add_class(badge, selectors::BOUNCE);
        self.clear_class_later(badge, selectors::BOUNCE, self.config.bounce_ms);
    }
}
