//! Level cutting for rendered menus.

use std::collections::HashSet;

use super::arena::Arena;

/// Level window and depth limits of a `show_menu` call.
#[derive(Clone, Copy, Debug)]
pub(super) struct LevelCut {
    pub(super) from_level: u32,
    pub(super) to_level: u32,
    pub(super) extra_inactive: u32,
    pub(super) extra_active: u32,
}

/// Cut `nodes` down to the requested level window and return the new roots.
///
/// Nodes at `from_level` become roots. They stay listed in their former
/// parent's children, so an inactive parent collapsing its children also
/// drops them from the result.
pub(super) fn cut_levels(arena: &mut Arena<'_>, nodes: &[usize], cut: LevelCut) -> Vec<usize> {
    let mut roots = Vec::new();
    let mut removed = HashSet::new();
    let mut selected = None;

    for &idx in nodes {
        let Some(level) = arena.node(idx).level else {
            remove(arena, idx, &mut removed);
            continue;
        };

        if level == cut.from_level {
            roots.push(idx);
            arena.node_mut(idx).parent = None;
        }

        let node = arena.node(idx);
        if !node.ancestor && !node.selected && !node.descendant {
            cut_after(arena, idx, cut.extra_inactive, &mut removed);
        }
        if level > cut.to_level && arena.node(idx).parent.is_some() {
            remove(arena, idx, &mut removed);
        }
        if arena.node(idx).selected {
            selected = Some(idx);
        }
        if !arena.visible(idx) {
            remove(arena, idx, &mut removed);
        }
    }

    if let Some(idx) = selected {
        cut_after(arena, idx, cut.extra_active, &mut removed);
    }

    roots.retain(|idx| !removed.contains(idx));
    roots
}

/// Keep `levels` levels of visible descendants below `idx`.
pub(super) fn cut_after(
    arena: &mut Arena<'_>,
    idx: usize,
    levels: u32,
    removed: &mut HashSet<usize>,
) {
    if levels == 0 {
        removed.extend(std::mem::take(&mut arena.node_mut(idx).children));
        return;
    }

    let mut kept = Vec::new();
    for child in arena.children_of(idx) {
        if arena.visible(child) {
            cut_after(arena, child, levels - 1, removed);
            kept.push(child);
        } else {
            removed.insert(child);
        }
    }
    arena.node_mut(idx).children = kept;
}

fn remove(arena: &mut Arena<'_>, idx: usize, removed: &mut HashSet<usize>) {
    removed.insert(idx);
    if let Some(parent) = arena.node(idx).parent {
        arena.remove_child(parent, idx);
    }
}
