//! Per-request working copy of the page tree.
//!
//! Node `i` of the arena is page `i` of the [`PageTree`]. Parent and
//! children links start as a copy of the hierarchy and are then rewired by
//! the modifiers and cutters; the tree itself is never touched.

use crate::node::{NavigationNode, NodeAttributes};
use crate::page::Page;
use crate::tree::PageTree;

/// Mutable menu state of one page.
#[derive(Clone, Debug)]
pub(super) struct WorkNode {
    pub(super) parent: Option<usize>,
    pub(super) children: Vec<usize>,
    pub(super) selected: bool,
    pub(super) ancestor: bool,
    pub(super) descendant: bool,
    pub(super) sibling: bool,
    pub(super) level: Option<u32>,
    pub(super) menu_level: Option<u32>,
}

pub(super) struct Arena<'t> {
    tree: &'t PageTree,
    nodes: Vec<WorkNode>,
}

impl<'t> Arena<'t> {
    /// Copy the hierarchy and mark `current` as selected.
    pub(super) fn build(tree: &'t PageTree, current: Option<usize>) -> Self {
        let nodes = (0..tree.len())
            .map(|idx| WorkNode {
                parent: tree.parent_index(idx),
                children: tree.children_indices(idx).to_vec(),
                selected: Some(idx) == current,
                ancestor: false,
                descendant: false,
                sibling: false,
                level: None,
                menu_level: None,
            })
            .collect();
        Self { tree, nodes }
    }

    /// Every node in pre-order.
    pub(super) fn all(&self) -> Vec<usize> {
        (0..self.nodes.len()).collect()
    }

    pub(super) fn node(&self, idx: usize) -> &WorkNode {
        &self.nodes[idx]
    }

    pub(super) fn node_mut(&mut self, idx: usize) -> &mut WorkNode {
        &mut self.nodes[idx]
    }

    pub(super) fn page(&self, idx: usize) -> &'t Page {
        self.tree.page_at(idx)
    }

    /// Shown in menus.
    pub(super) fn visible(&self, idx: usize) -> bool {
        self.page(idx).in_navigation
    }

    pub(super) fn soft_root(&self, idx: usize) -> bool {
        self.page(idx).soft_root
    }

    /// Current children of `idx` as an owned list, for loops that rewire links.
    pub(super) fn children_of(&self, idx: usize) -> Vec<usize> {
        self.nodes[idx].children.clone()
    }

    /// Unlink `child` from `parent`'s children, if present.
    pub(super) fn remove_child(&mut self, parent: usize, child: usize) {
        self.nodes[parent].children.retain(|&c| c != child);
    }

    /// Descendants of `idx` in pre-order, following current links.
    pub(super) fn descendants(&self, idx: usize) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_descendants(idx, &mut out);
        out
    }

    fn collect_descendants(&self, idx: usize, out: &mut Vec<usize>) {
        for &child in &self.nodes[idx].children {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    /// `nodes` followed by their descendants, each subtree in pre-order.
    pub(super) fn flatten(&self, nodes: &[usize]) -> Vec<usize> {
        let mut out = Vec::new();
        for &idx in nodes {
            out.push(idx);
            self.collect_descendants(idx, &mut out);
        }
        out
    }

    /// Assign `level` starting at 0 from every parentless node in `nodes`.
    ///
    /// Nodes whose parent was dropped keep `level = None`.
    pub(super) fn assign_levels(&mut self, nodes: &[usize]) {
        for &idx in nodes {
            if self.nodes[idx].parent.is_none() {
                self.set_level(idx, 0, false);
            }
        }
    }

    /// Assign `menu_level` starting at 0 from each of `roots`.
    pub(super) fn assign_menu_levels(&mut self, roots: &[usize]) {
        for &idx in roots {
            self.set_level(idx, 0, true);
        }
    }

    fn set_level(&mut self, idx: usize, level: u32, menu: bool) {
        if menu {
            self.nodes[idx].menu_level = Some(level);
        } else {
            self.nodes[idx].level = Some(level);
        }
        for child in self.children_of(idx) {
            self.set_level(child, level + 1, menu);
        }
    }

    /// Build the output node for `idx` with its current subtree.
    pub(super) fn to_navigation(&self, idx: usize) -> NavigationNode {
        let mut out = self.to_navigation_flat(idx);
        out.children = self.nodes[idx]
            .children
            .iter()
            .map(|&child| self.to_navigation(child))
            .collect();
        out
    }

    /// Build the output node for `idx` without children.
    pub(super) fn to_navigation_flat(&self, idx: usize) -> NavigationNode {
        let node = &self.nodes[idx];
        let page = self.page(idx);
        let parent_page = self.tree.parent_index(idx).map(|p| self.tree.page_at(p));

        NavigationNode {
            id: page.id,
            title: page.title.clone(),
            url: page.url.clone(),
            namespace: page.namespace.clone(),
            parent_id: parent_page.map(|p| p.id),
            parent_url: node.parent.map(|p| self.page(p).url.clone()),
            parent_namespace: parent_page.map(|p| p.namespace.clone()),
            level: node.level.unwrap_or_default(),
            menu_level: node.menu_level,
            selected: node.selected,
            ancestor: node.ancestor,
            descendant: node.descendant,
            sibling: node.sibling,
            visible: page.in_navigation,
            attributes: NodeAttributes::from(page),
            children: Vec::new(),
        }
    }
}
