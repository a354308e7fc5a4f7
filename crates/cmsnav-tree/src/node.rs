//! Navigation nodes produced by the engine.

use crate::page::{Page, PageId};

/// A rendered menu entry with its status relative to the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationNode {
    /// Page id.
    pub id: PageId,
    /// Menu title.
    pub title: String,
    /// Page URL.
    pub url: String,
    /// Menu namespace.
    pub namespace: String,
    /// Id of the parent page in the site hierarchy.
    pub parent_id: Option<PageId>,
    /// URL of the parent node this node is still attached to in the
    /// rendered menu. `None` for nodes the engine detached.
    pub parent_url: Option<String>,
    /// Namespace of the parent page in the site hierarchy.
    pub parent_namespace: Option<String>,
    /// Depth below the menu root (soft roots count as roots).
    pub level: u32,
    /// Depth below the top of the rendered menu. `None` for breadcrumbs.
    pub menu_level: Option<u32>,
    /// This node is the current page.
    pub selected: bool,
    /// This node is an ancestor of the current page.
    pub ancestor: bool,
    /// This node is a descendant of the current page.
    pub descendant: bool,
    /// This node is a sibling of the current page.
    pub sibling: bool,
    /// Shown in menus.
    pub visible: bool,
    /// Page attributes.
    pub attributes: NodeAttributes,
    /// Child nodes in menu order.
    pub children: Vec<NavigationNode>,
}

impl NavigationNode {
    /// Whether the node has no rendered children.
    pub fn is_leaf_node(&self) -> bool {
        self.children.is_empty()
    }
}

/// Page attributes carried on each node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeAttributes {
    pub auth_required: bool,
    pub is_home: bool,
    pub redirect_url: Option<String>,
    pub reverse_id: Option<String>,
    pub soft_root: bool,
    pub visible_for_anonymous: bool,
    pub visible_for_authenticated: bool,
}

impl From<&Page> for NodeAttributes {
    fn from(page: &Page) -> Self {
        Self {
            auth_required: page.login_required,
            is_home: page.is_home,
            redirect_url: page.redirect_url.clone(),
            reverse_id: page.reverse_id.clone(),
            soft_root: page.soft_root,
            visible_for_anonymous: page.visible_for_anonymous(),
            visible_for_authenticated: page.visible_for_authenticated(),
        }
    }
}
