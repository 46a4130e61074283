//! Storefront Behaviors
//!
//! Cosmetic page behaviors for the NovaMart storefront, written against
//! small seams (`Dom`, `PreferenceStore`, `Scheduler`) so they run the same
//! in the browser and under test.

pub mod config;
pub mod dom;
pub mod models;
pub mod scheduler;
pub mod storage;
pub mod storefront;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, StorefrontConfig};
pub use dom::{selectors, Dom};
pub use models::{Placement, Theme, Visibility};
pub use scheduler::{Scheduler, TaskHandle};
pub use storage::PreferenceStore;
pub use storefront::{Sparkler, Storefront};
