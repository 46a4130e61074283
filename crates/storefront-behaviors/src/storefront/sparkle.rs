//! Sparkle decorations: short-lived, randomly placed and coloured spans.

use std::cell::RefCell;
use std::rc::Rc;

use super::Storefront;
use crate::dom::{selectors, Dom};
use crate::models::Placement;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::storage::PreferenceStore;

/// Spawns sparkles; cheap to clone into timer callbacks
#[derive(Clone)]
pub struct Sparkler<D: Dom, T: Scheduler> {
    dom: D,
    timers: T,
    /// Uniform source over `[0, 1)`
    random: Rc<RefCell<Box<dyn FnMut() -> f64>>>,
}

impl<D: Dom, T: Scheduler> Sparkler<D, T> {
    pub fn new(dom: D, timers: T, random: Box<dyn FnMut() -> f64>) -> Self {
        Self {
            dom,
            timers,
            random: Rc::new(RefCell::new(random)),
        }
    }

    fn unit(&self) -> f64 {
        let mut random = self.random.borrow_mut();
        (&mut **random)()
    }

    /// Append a sparkle to `anchor` and schedule its removal
    pub fn spawn(&self, anchor: &D::Node, placement: Placement, lifetime_ms: u32) -> Option<D::Node> {
        let sparkle = self.dom.create_element("span")?;
        self.dom.add_class(&sparkle, selectors::SPARKLE);
        self.dom
            .set_style(&sparkle, "left", &format!("{}%", placement.percent(self.unit())));
        self.dom
            .set_style(&sparkle, "top", &format!("{}%", placement.percent(self.unit())));
        self.dom.set_style(
            &sparkle,
            "background",
            &format!("hsl({}, 80%, 60%)", self.unit() * 360.0),
        );
        self.dom.append_child(anchor, &sparkle);

        let dom = self.dom.clone();
        let node = sparkle.clone();
        self.timers.after(lifetime_ms, Box::new(move || dom.remove(&node)));
        Some(sparkle)
    }

    /// One ambient tick: sparkle somewhere in the hero, if there is one.
    /// The hero is looked up on every tick.
    pub fn ambient(&self, lifetime_ms: u32) -> Option<D::Node> {
        let hero = self.dom.query(selectors::HERO)?;
        self.spawn(&hero, Placement::Full, lifetime_ms)
    }
}

impl<D: Dom, S: PreferenceStore, T: Scheduler> Storefront<D, S, T> {
    /// Start the page-lifetime ambient sparkle loop over the hero region
    pub fn start_ambient_sparkles(&self) -> TaskHandle {
        let sparkler = self.sparkler.clone();
        let lifetime = self.config.ambient_sparkle_ms;
        self.timers.every(
            self.config.ambient_period_ms,
            Box::new(move || {
                sparkler.ambient(lifetime);
            }),
        )
    }
}
