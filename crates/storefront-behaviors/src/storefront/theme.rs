//! Theme toggle and persistence.

use super::Storefront;
use crate::dom::{selectors, Dom};
use crate::models::Theme;
use crate::scheduler::Scheduler;
use crate::storage::{PreferenceStore, THEME_KEY};

impl<D: Dom, S: PreferenceStore, T: Scheduler> Storefront<D, S, T> {
    /// Present and persist `theme`. The transition marker class lets the
    /// stylesheet animate the change and is dropped after a short delay.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Some(body) = self.dom.body() {
            self.dom.add_class(&body, selectors::THEME_TRANSITION);
            self.dom.set_attribute(&body, "data-theme", theme.as_str());
            self.clear_class_later(
                &body,
                selectors::THEME_TRANSITION,
                self.config.theme_transition_ms,
            );
        }
        if let Some(toggle) = &self.toggle {
            let pressed = if theme.is_dark() { "true" } else { "false" };
            self.dom.set_attribute(toggle, "aria-pressed", pressed);
        }
        self.store.set(THEME_KEY, theme.as_str());
        log::info!("theme set to {}", theme.as_str());
    }

    /// Switch to the complementary theme
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }
}
