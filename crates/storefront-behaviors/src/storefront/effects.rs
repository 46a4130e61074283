//! Product card hover lift, tooltips and hero parallax.

use super::Storefront;
use crate::dom::{selectors, Dom};
use crate::scheduler::Scheduler;
use crate::storage::PreferenceStore;

pub const HOVER_TRANSFORM: &str = "translateY(-6px) scale(1.03)";
pub const HOVER_SHADOW: &str = "0 14px 28px rgba(0,0,0,0.18)";

impl<D: Dom, S: PreferenceStore, T: Scheduler> Storefront<D, S, T> {
    pub fn card_enter(&self, card: &D::Node) {
        self.dom.set_style(card, "transform", HOVER_TRANSFORM);
        self.dom.set_style(card, "box-shadow", HOVER_SHADOW);
    }

    /// Clear the lift; the stylesheet transition animates the return
    pub fn card_leave(&self, card: &D::Node) {
        self.dom.set_style(card, "transform", "");
        self.dom.set_style(card, "box-shadow", "");
    }

    /// Give every product card a native tooltip from its title
    pub fn apply_tooltips(&self) {
        for card in self.dom.query_all(selectors::PRODUCT_CARD) {
            let title = self
                .dom
                .query_in(&card, selectors::PRODUCT_TITLE)
                .and_then(|node| self.dom.text(&node))
                .filter(|title| !title.is_empty());
            if let Some(title) = title {
                self.dom.set_attribute(&card, "title", &title);
            }
        }
    }

    pub fn parallax_offset(&self, scroll_y: f64) -> f64 {
        scroll_y * self.config.parallax_factor
    }

    /// Scroll handler: drift the hero image with the page
    pub fn scroll(&self, scroll_y: f64) {
        let Some(image) = &self.hero_image else { return };
        let transform = format!(
            "translateY({}px) scale({})",
            self.parallax_offset(scroll_y),
            self.config.parallax_scale
        );
        self.dom.set_style(image, "transform", &transform);
    }
}
