//! Contract between the REST layer and a navigation engine.
//!
//! The REST layer never walks the page hierarchy itself. It asks a
//! [`PageResolver`] which page is current, builds a [`RenderContext`] and
//! calls one [`NavigationEngine`] operation with typed arguments.

use crate::node::NavigationNode;
use crate::page::PageId;

/// Resolves request paths to pages.
pub trait PageResolver: Send + Sync {
    /// Page treated as current for `path`, or `None` if nothing matches.
    fn resolve(&self, path: &str) -> Option<PageId>;
}

/// Renders menus relative to a current page.
///
/// Every call builds a fresh node tree; implementations must not keep
/// per-request state.
pub trait NavigationEngine: Send + Sync {
    /// Full menu (`show_menu`), or the menu below a node when
    /// [`MenuArgs::root_id`] is set (`show_menu_below_id`).
    fn show_menu(
        &self,
        ctx: &RenderContext,
        args: &MenuArgs,
    ) -> Result<Vec<NavigationNode>, EngineError>;

    /// Sub menu below the current page or one of its ancestors.
    fn show_sub_menu(
        &self,
        ctx: &RenderContext,
        args: &SubMenuArgs,
    ) -> Result<Vec<NavigationNode>, EngineError>;

    /// Ancestor chain from the root down to the current page.
    ///
    /// Returned nodes may still carry their children.
    fn show_breadcrumb(
        &self,
        ctx: &RenderContext,
        args: &BreadcrumbArgs,
    ) -> Result<Vec<NavigationNode>, EngineError>;
}

/// Immutable per-request rendering context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderContext {
    path: String,
    current_page: Option<PageId>,
}

impl RenderContext {
    /// Create a context for `path` with an already resolved current page.
    pub fn new(path: impl Into<String>, current_page: Option<PageId>) -> Self {
        Self {
            path: path.into(),
            current_page,
        }
    }

    /// Path the context was resolved from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Current page, if the path resolved to one.
    pub fn current_page(&self) -> Option<PageId> {
        self.current_page
    }
}

/// Arguments of `show_menu` / `show_menu_below_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuArgs {
    /// Level rendered as the top of the menu.
    pub start_level: u32,
    /// Deepest level rendered.
    pub end_level: u32,
    /// Levels of children kept below nodes outside the active branch.
    pub extra_inactive: u32,
    /// Levels of descendants kept below the selected node.
    pub extra_active: u32,
    /// Only render nodes of this namespace.
    pub namespace: Option<String>,
    /// Render the children of the node with this `reverse_id`.
    pub root_id: Option<String>,
}

impl Default for MenuArgs {
    fn default() -> Self {
        Self {
            start_level: 0,
            end_level: 100,
            extra_inactive: 0,
            extra_active: 1000,
            namespace: None,
            root_id: None,
        }
    }
}

/// Arguments of `show_sub_menu`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubMenuArgs {
    /// Levels rendered below the sub menu root.
    pub levels: u32,
    /// Level of the sub menu root. `None` uses the current page's level.
    pub root_level: Option<u32>,
    /// Levels rendered below siblings of the current page.
    pub nephews: u32,
}

impl Default for SubMenuArgs {
    fn default() -> Self {
        Self {
            levels: 100,
            root_level: None,
            nephews: 100,
        }
    }
}

/// Arguments of `show_breadcrumb`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbArgs {
    /// Number of leading entries to skip (`0` starts at home).
    pub start_level: u32,
    /// Skip pages hidden from menus.
    pub only_visible: bool,
}

impl Default for BreadcrumbArgs {
    fn default() -> Self {
        Self {
            start_level: 0,
            only_visible: true,
        }
    }
}

/// Error returned when a menu cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The context names a page the engine doesn't know.
    #[error("Current page {0} is not part of the page tree")]
    UnknownPage(PageId),
}
