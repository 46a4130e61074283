//! Staggered fade-in as elements scroll into view.

use super::Storefront;
use crate::dom::{selectors, Dom};
use crate::models::Visibility;
use crate::scheduler::Scheduler;
use crate::storage::PreferenceStore;

pub(crate) struct FadeTarget<N> {
    node: N,
    state: Visibility,
}

impl<D: Dom, S: PreferenceStore, T: Scheduler> Storefront<D, S, T> {
    /// Stagger the transition delay of every fade-in element and mark them
    /// observed. Returns the elements the host should watch.
    pub fn prepare_fade_in(&mut self) -> Vec<D::Node> {
        let nodes = self.dom.query_all(selectors::FADE_IN);
        for (index, node) in nodes.iter().enumerate() {
            let delay = index as u64 * u64::from(self.config.stagger_ms);
            self.dom
                .set_style(node, "transition-delay", &format!("{delay}ms"));
        }
        self.fade_targets = nodes
            .iter()
            .map(|node| FadeTarget {
                node: node.clone(),
                state: Visibility::Observed,
            })
            .collect();
        nodes
    }

    pub fn visibility(&self, node: &D::Node) -> Visibility {
        self.fade_targets
            .iter()
            .find(|target| &target.node == node)
            .map_or(Visibility::Unobserved, |target| target.state)
    }

    /// Intersection report for `node`. The first report that finds it in
    /// view reveals it for good; returns `true` exactly then, so the host
    /// can stop watching it.
    pub fn intersection(&mut self, node: &D::Node, intersecting: bool) -> bool {
        let Some(target) = self.fade_targets.iter_mut().find(|target| &target.node == node) else {
            return false;
        };
        if !intersecting || target.state != Visibility::Observed {
            return false;
        }
        self.dom.add_class(node, selectors::IN_VIEW);
        target.state = Visibility::Revealed;
        true
    }
}
