//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use cmsnav_tree::{NavigationEngine, PageResolver, PageTree};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Maps request paths to the current page.
    pub(crate) resolver: Arc<dyn PageResolver>,
    /// Renders menus.
    pub(crate) engine: Arc<dyn NavigationEngine>,
    /// Mount point of the API, used for the root listing.
    pub(crate) prefix: String,
    /// Default `extra_active` of the full menu endpoint.
    pub(crate) show_menu_extra_active: u32,
}

impl AppState {
    /// State backed by a loaded page tree.
    pub(crate) fn from_tree(tree: PageTree, prefix: String, show_menu_extra_active: u32) -> Self {
        let tree = Arc::new(tree);
        let resolver: Arc<dyn PageResolver> = Arc::<PageTree>::clone(&tree);
        Self {
            resolver,
            engine: tree,
            prefix,
            show_menu_extra_active,
        }
    }
}
