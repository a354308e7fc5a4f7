//! Pre-cut node modifiers.
//!
//! Each modifier takes the current flat node list (pre-order) and returns
//! the list that survives it, rewiring arena links as it goes.

use std::collections::HashSet;

use super::arena::Arena;

/// Keep only nodes of `namespace`.
///
/// Kept nodes whose parent was dropped become roots.
pub(super) fn filter_namespace(
    arena: &mut Arena<'_>,
    nodes: Vec<usize>,
    namespace: &str,
) -> Vec<usize> {
    let kept: HashSet<usize> = nodes
        .iter()
        .copied()
        .filter(|&idx| arena.page(idx).namespace == namespace)
        .collect();

    for &idx in &nodes {
        let parent = arena.node(idx).parent;
        if kept.contains(&idx) {
            if parent.is_some_and(|p| !kept.contains(&p)) {
                arena.node_mut(idx).parent = None;
            }
        } else if let Some(p) = parent {
            arena.remove_child(p, idx);
        }
    }

    nodes.into_iter().filter(|idx| kept.contains(idx)).collect()
}

/// Re-root the menu at the nearest soft root of the selected node.
///
/// When the selected node is a soft root, or has a soft-root ancestor, that
/// node becomes the only root and loses its parent link. Otherwise soft
/// roots off the active branch are collapsed.
pub(super) fn cut_soft_roots(arena: &mut Arena<'_>, nodes: Vec<usize>) -> Vec<usize> {
    let Some(selected) = nodes.iter().copied().find(|&idx| arena.node(idx).selected) else {
        return nodes;
    };

    if arena.soft_root(selected) {
        let mut rerooted = vec![selected];
        rerooted.extend(arena.descendants(selected));
        arena.node_mut(selected).parent = None;
        rerooted
    } else {
        reroot_at_ancestor(arena, selected, nodes)
    }
}

fn reroot_at_ancestor(arena: &mut Arena<'_>, idx: usize, mut nodes: Vec<usize>) -> Vec<usize> {
    if let Some(parent) = arena.node(idx).parent {
        if arena.soft_root(parent) {
            nodes = vec![parent];
            nodes.extend(arena.descendants(parent));
            arena.node_mut(parent).parent = None;
        } else {
            nodes = reroot_at_ancestor(arena, parent, nodes);
        }
    } else {
        let other_roots: Vec<usize> = nodes
            .iter()
            .copied()
            .filter(|&n| n != idx && arena.node(n).parent.is_none())
            .collect();
        for root in other_roots {
            collapse_soft_root_children(arena, root, &mut nodes);
        }
    }

    for child in arena.children_of(idx) {
        collapse_soft_root_children(arena, child, &mut nodes);
    }
    nodes
}

/// Remove the subtrees of every soft-root child of `idx`.
fn collapse_soft_root_children(arena: &mut Arena<'_>, idx: usize, nodes: &mut Vec<usize>) {
    for child in arena.children_of(idx) {
        if arena.soft_root(child) {
            remove_subtree(arena, child, nodes);
        }
    }
}

fn remove_subtree(arena: &mut Arena<'_>, idx: usize, nodes: &mut Vec<usize>) {
    for child in std::mem::take(&mut arena.node_mut(idx).children) {
        nodes.retain(|&n| n != child);
        remove_subtree(arena, child, nodes);
    }
}

/// Mark ancestors, descendants and siblings of the selected node.
pub(super) fn mark(arena: &mut Arena<'_>, nodes: &[usize]) {
    let mut selected: Option<usize> = None;
    let mut roots = Vec::new();

    for &idx in nodes {
        if arena.node(idx).parent.is_none() {
            if let Some(sel) = selected
                && arena.node(sel).parent.is_none()
            {
                arena.node_mut(idx).sibling = true;
            }
            roots.push(idx);
        }

        if !arena.node(idx).selected {
            continue;
        }

        if let Some(parent) = arena.node(idx).parent {
            let mut up = Some(parent);
            while let Some(ancestor) = up {
                arena.node_mut(ancestor).ancestor = true;
                up = arena.node(ancestor).parent;
            }
            for sibling in arena.children_of(parent) {
                if !arena.node(sibling).selected {
                    arena.node_mut(sibling).sibling = true;
                }
            }
        } else {
            for &root in &roots {
                if !arena.node(root).selected {
                    arena.node_mut(root).sibling = true;
                }
            }
        }

        mark_descendants(arena, idx);
        selected = Some(idx);
    }
}

fn mark_descendants(arena: &mut Arena<'_>, idx: usize) {
    for child in arena.children_of(idx) {
        arena.node_mut(child).descendant = true;
        mark_descendants(arena, child);
    }
}

/// Drop nodes hidden from anonymous visitors.
pub(super) fn hide_from_anonymous(arena: &mut Arena<'_>, nodes: Vec<usize>) -> Vec<usize> {
    let mut kept = Vec::with_capacity(nodes.len());
    for idx in nodes {
        if arena.page(idx).visible_for_anonymous() {
            kept.push(idx);
        } else if let Some(parent) = arena.node(idx).parent {
            arena.remove_child(parent, idx);
        }
    }
    kept
}
