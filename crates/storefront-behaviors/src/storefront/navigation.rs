//! In-page anchor scrolling and the footer year.

use super::Storefront;
use crate::dom::{selectors, Dom};
use crate::scheduler::Scheduler;
use crate::storage::PreferenceStore;

impl<D: Dom, S: PreferenceStore, T: Scheduler> Storefront<D, S, T> {
    /// Anchor activation. Smooth-scrolls to the fragment target and returns
    /// `true` when the host should suppress the default jump; an unresolved
    /// fragment leaves navigation alone.
    pub fn follow_anchor(&self, link: &D::Node) -> bool {
        let Some(href) = self.dom.attribute(link, "href") else {
            return false;
        };
        match self.dom.query(&href) {
            Some(target) => {
                self.dom.scroll_into_view(&target);
                true
            }
            None => {
                log::debug!("anchor {href} has no target");
                false
            }
        }
    }

    pub fn stamp_year(&self, year: i32) {
        if let Some(node) = self.dom.query(selectors::YEAR) {
            self.dom.set_text(&node, &year.to_string());
        }
    }
}
