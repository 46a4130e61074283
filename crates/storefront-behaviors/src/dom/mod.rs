//! Document Seam
//!
//! The page regions the behaviors bind to, expressed as a trait so the
//! browser document and the in-memory test document are interchangeable.


/// Selectors and class names shared with the page markup and stylesheet
pub mod selectors {
    pub const THEME_TOGGLE: &str = "#themeToggle";
    pub const OPEN_CART: &str = r#"[data-action="open-cart"]"#;
    pub const ADD_TO_CART: &str = r#"[data-action="add-to-cart"]"#;
    pub const OPEN_WISHLIST: &str = r#"[data-action="open-wishlist"]"#;
    pub const WISHLIST: &str = r#"[data-action="wishlist"]"#;
    pub const BADGE: &str = ".badge";
    pub const SEARCH_FORM: &str = "#searchForm";
    pub const SEARCH_INPUT: &str = "#searchInput";
    pub const YEAR: &str = "#year";
    pub const PRODUCT_CARD: &str = ".product-card";
    pub const PRODUCT_TITLE: &str = ".product-title";
    pub const FADE_IN: &str = ".product-card, .hero-left";
    pub const HERO: &str = ".hero";
    pub const HERO_IMAGE: &str = ".hero-right img";
    pub const ANCHOR: &str = r##"a[href^="#"]"##;
    pub const CONFIG_BLOCK: &str = "#storefront-config";

    pub const THEME_TRANSITION: &str = "theme-transition";
    pub const BOUNCE: &str = "bounce";
    pub const ADDED_TO_CART: &str = "added-to-cart";
    pub const ACTIVE: &str = "active";
    pub const IN_VIEW: &str = "in-view";
    pub const SPARKLE: &str = "sparkle";
}

/// Bindable UI regions.
///
/// Every lookup returns `Option`/`Vec`: an absent element or an invalid
/// selector is never an error, the dependent behavior just does nothing.
/// Mutations on detached or missing nodes are silently ignored.
pub trait Dom: Clone + 'static {
    type Node: Clone + PartialEq + 'static;

    /// Element that carries the theme attributes
    fn body(&self) -> Option<Self::Node>;
    fn query(&self, selector: &str) -> Option<Self::Node>;
    /// All matches in document order
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// First match among the descendants of `scope`
    fn query_in(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;
    /// `node` itself or its nearest ancestor matching `selector`
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn text(&self, node: &Self::Node) -> Option<String>;
    fn set_text(&self, node: &Self::Node, text: &str);

    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    /// Flip `class`, returning whether it is now present
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    /// Set an inline style property (CSS name); an empty value clears it
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    fn create_element(&self, tag: &str) -> Option<Self::Node>;
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);
    fn remove(&self, node: &Self::Node);
    fn scroll_into_view(&self, node: &Self::Node);
}
