//! Menu rendering for [`PageTree`].
//!
//! Every call builds an [`Arena`] from the tree, runs the pre-cut
//! modifiers over it and then applies the cut of the requested operation.

mod arena;
mod cut;
mod modifiers;

use std::collections::HashSet;

use crate::engine::{
    BreadcrumbArgs, EngineError, MenuArgs, NavigationEngine, RenderContext, SubMenuArgs,
};
use crate::node::NavigationNode;
use crate::tree::PageTree;

use arena::Arena;
use cut::LevelCut;

/// Which modifiers a render pass runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pass {
    Menu,
    BelowId,
    Breadcrumb,
}

impl PageTree {
    /// Build the arena for `ctx` and run the pre-cut modifiers.
    fn prepare(
        &self,
        ctx: &RenderContext,
        namespace: Option<&str>,
        pass: Pass,
    ) -> Result<(Arena<'_>, Vec<usize>), EngineError> {
        let current = ctx
            .current_page()
            .map(|id| self.index_of(id).ok_or(EngineError::UnknownPage(id)))
            .transpose()?;
        let current = match current {
            Some(idx) if pass != Pass::Breadcrumb => self.public_selection(idx),
            other => other,
        };

        let mut arena = Arena::build(self, current);
        let mut nodes = arena.all();

        if let Some(namespace) = namespace {
            nodes = modifiers::filter_namespace(&mut arena, nodes, namespace);
        }
        if pass != Pass::BelowId {
            nodes = modifiers::cut_soft_roots(&mut arena, nodes);
        }
        if pass != Pass::Breadcrumb {
            modifiers::mark(&mut arena, &nodes);
            nodes = modifiers::hide_from_anonymous(&mut arena, nodes);
        }
        arena.assign_levels(&nodes);

        Ok((arena, nodes))
    }

    /// The page anonymous visitors see as current when `idx` is requested.
    ///
    /// That is the deepest page on the path from the root to `idx` which,
    /// with every page above it, is visible to anonymous visitors. The home
    /// page stands in when the top-level page is hidden.
    fn public_selection(&self, idx: usize) -> Option<usize> {
        let mut path = vec![idx];
        while let Some(parent) = path.last().and_then(|&i| self.parent_index(i)) {
            path.push(parent);
        }
        let home = self
            .home_index()
            .filter(|&home| self.page_at(home).visible_for_anonymous());

        let public = path
            .into_iter()
            .rev()
            .take_while(|&i| self.page_at(i).visible_for_anonymous())
            .last();
        public.or(home)
    }
}

impl NavigationEngine for PageTree {
    fn show_menu(
        &self,
        ctx: &RenderContext,
        args: &MenuArgs,
    ) -> Result<Vec<NavigationNode>, EngineError> {
        let namespace = args.namespace.as_deref().filter(|ns| !ns.is_empty());
        let root_id = args.root_id.as_deref().filter(|id| !id.is_empty());
        let pass = if root_id.is_some() {
            Pass::BelowId
        } else {
            Pass::Menu
        };
        let (mut arena, mut nodes) = self.prepare(ctx, namespace, pass)?;

        let mut cut = LevelCut {
            from_level: args.start_level,
            to_level: args.end_level,
            extra_inactive: args.extra_inactive,
            extra_active: args.extra_active,
        };

        if let Some(root_id) = root_id {
            let anchor = nodes
                .iter()
                .copied()
                .find(|&idx| arena.page(idx).reverse_id.as_deref() == Some(root_id));
            let Some(anchor) = anchor else {
                tracing::debug!(root_id, "No page with this reverse id");
                return Ok(Vec::new());
            };

            let children = arena.children_of(anchor);
            for &child in &children {
                arena.node_mut(child).parent = None;
            }
            let shift = arena.node(anchor).level.unwrap_or_default().saturating_add(1);
            cut.from_level = cut.from_level.saturating_add(shift);
            cut.to_level = cut.to_level.saturating_add(shift);
            nodes = arena.flatten(&children);
        }

        let roots = cut::cut_levels(&mut arena, &nodes, cut);
        arena.assign_menu_levels(&roots);
        Ok(roots.iter().map(|&idx| arena.to_navigation(idx)).collect())
    }

    fn show_sub_menu(
        &self,
        ctx: &RenderContext,
        args: &SubMenuArgs,
    ) -> Result<Vec<NavigationNode>, EngineError> {
        let (mut arena, nodes) = self.prepare(ctx, None, Pass::Menu)?;

        let include_root = args.root_level == Some(0);
        let mut root_level = args.root_level.map(|level| level.saturating_sub(1));

        let mut root = None;
        for &idx in &nodes {
            let node = arena.node(idx);
            if root_level.is_none() && node.selected {
                root_level = node.level;
            }
            if node.level.is_some() && node.level == root_level && (node.ancestor || node.selected)
            {
                root = Some(idx);
                break;
            }
        }
        let Some(root) = root else {
            return Ok(Vec::new());
        };

        let mut discarded = HashSet::new();
        cut::cut_after(&mut arena, root, args.levels, &mut discarded);
        for child in arena.children_of(root) {
            if arena.node(child).sibling {
                cut::cut_after(&mut arena, child, args.nephews, &mut discarded);
            }
        }

        let out = if include_root {
            vec![root]
        } else {
            arena.children_of(root)
        };
        arena.assign_menu_levels(&out);
        Ok(out.iter().map(|&idx| arena.to_navigation(idx)).collect())
    }

    fn show_breadcrumb(
        &self,
        ctx: &RenderContext,
        args: &BreadcrumbArgs,
    ) -> Result<Vec<NavigationNode>, EngineError> {
        let (arena, nodes) = self.prepare(ctx, None, Pass::Breadcrumb)?;

        let home = nodes.iter().copied().find(|&idx| arena.page(idx).url == "/");
        let selected = nodes.iter().copied().find(|&idx| arena.node(idx).selected);

        let mut chain = Vec::new();
        if let Some(selected) = selected
            && Some(selected) != home
        {
            let mut current = Some(selected);
            while let Some(idx) = current {
                if arena.visible(idx) || !args.only_visible {
                    chain.push(idx);
                }
                current = arena.node(idx).parent;
            }
        }
        if let Some(home) = home
            && chain.last() != Some(&home)
        {
            chain.push(home);
        }
        chain.reverse();

        let start = usize::try_from(args.start_level).unwrap_or(usize::MAX);
        let chain = chain.get(start..).unwrap_or_default();
        Ok(chain.iter().map(|&idx| arena.to_navigation_flat(idx)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PageResolver;
    use crate::fixtures;
    use crate::page::PageId;
    use pretty_assertions::assert_eq;

    fn context(tree: &PageTree, path: &str) -> RenderContext {
        RenderContext::new(path, tree.resolve(path))
    }

    fn titles(nodes: &[NavigationNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.title.as_str()).collect()
    }

    fn menu(start_level: u32, end_level: u32, extra_inactive: u32, extra_active: u32) -> MenuArgs {
        MenuArgs {
            start_level,
            end_level,
            extra_inactive,
            extra_active,
            ..MenuArgs::default()
        }
    }

    fn assert_leaf_flags(nodes: &[NavigationNode]) {
        for node in nodes {
            assert_eq!(node.is_leaf_node(), node.children.is_empty());
            assert_leaf_flags(&node.children);
        }
    }

    #[test]
    fn test_show_menu_defaults() {
        let tree = fixtures::extended_menus();
        let ctx = context(&tree, "/cms-api/show-menu/");

        let nodes = tree.show_menu(&ctx, &MenuArgs::default()).unwrap();

        assert_eq!(titles(&nodes), vec!["P1", "P4"]);
        let p1 = &nodes[0];
        assert!(p1.selected);
        assert!(!p1.sibling);
        assert!(!p1.descendant);
        assert!(p1.attributes.is_home);
        assert_eq!(p1.url, "/");
        assert_eq!(p1.attributes.reverse_id, None);
        assert_eq!(titles(&p1.children), vec!["P2", "P9"]);
        assert!(p1.children[0].descendant);
        assert!(p1.children[0].children[0].descendant);
        assert!(p1.children[0].children[0].is_leaf_node());

        let p4 = &nodes[1];
        assert!(p4.sibling);
        assert_eq!(p4.url, "/p4/");
        assert!(p4.children.is_empty());
        assert_leaf_flags(&nodes);
    }

    #[test]
    fn test_show_menu_selected_path() {
        let tree = fixtures::extended_menus();
        let ctx = context(&tree, "/p2/");

        let nodes = tree.show_menu(&ctx, &MenuArgs::default()).unwrap();

        let p2 = &nodes[0].children[0];
        assert!(p2.selected);
        assert!(nodes[0].ancestor);
        assert!(nodes[0].children[1].sibling);
        assert!(p2.children[0].descendant);
    }

    #[test]
    fn test_show_menu_only_active_tree() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_menu(&context(&tree, "/"), &menu(0, 100, 0, 100))
            .unwrap();
        assert_eq!(nodes[1].children.len(), 0);
        assert_eq!(nodes[0].children.len(), 2);
        assert_eq!(nodes[0].children[0].children.len(), 1);

        let nodes = tree
            .show_menu(&context(&tree, "/p4/"), &menu(0, 100, 0, 100))
            .unwrap();
        assert_eq!(nodes[1].children.len(), 1);
        assert_eq!(nodes[0].children.len(), 0);
    }

    #[test]
    fn test_show_menu_one_active_level() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_menu(&context(&tree, "/"), &menu(0, 100, 0, 1))
            .unwrap();

        assert_eq!(nodes[1].children.len(), 0);
        assert_eq!(nodes[0].children.len(), 2);
        assert_eq!(nodes[0].children[0].children.len(), 0);
    }

    #[test]
    fn test_show_menu_end_level_bounds_levels() {
        fn max_level(nodes: &[NavigationNode]) -> u32 {
            nodes
                .iter()
                .map(|n| max_level(&n.children).max(n.level))
                .max()
                .unwrap_or_default()
        }

        let tree = fixtures::extended_menus();
        let ctx = context(&tree, "/p9/p10/p11/");

        for end_level in 0..=3 {
            let nodes = tree
                .show_menu(&ctx, &menu(0, end_level, 100, 100))
                .unwrap();
            assert_eq!(max_level(&nodes), end_level);
        }
    }

    #[test]
    fn test_show_menu_extra_active_only_cuts_active_branch() {
        let tree = fixtures::extended_menus();
        let ctx = context(&tree, "/p2/");

        let narrow = tree.show_menu(&ctx, &menu(0, 100, 1, 0)).unwrap();
        let wide = tree.show_menu(&ctx, &menu(0, 100, 1, 100)).unwrap();

        assert!(narrow[0].children[0].children.is_empty());
        assert_eq!(titles(&wide[0].children[0].children), vec!["P3"]);
        assert_eq!(narrow[0].children[1], wide[0].children[1]);
        assert_eq!(narrow[1], wide[1]);
        assert_eq!(titles(&wide[0].children[1].children), vec!["P10"]);
    }

    #[test]
    fn test_show_menu_level_zero_only() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_menu(&context(&tree, "/"), &menu(0, 0, 0, 0))
            .unwrap();

        assert_eq!(titles(&nodes), vec!["P1", "P4"]);
        assert!(nodes.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_show_menu_level_one_only() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_menu(&context(&tree, "/"), &menu(1, 1, 100, 100))
            .unwrap();
        assert!(nodes.iter().all(|n| n.children.is_empty()));
        assert!(nodes.iter().all(|n| n.level == 1));
        assert!(nodes.iter().all(|n| n.parent_url.is_none()));

        let nodes = tree
            .show_menu(&context(&tree, "/"), &menu(1, 1, 0, 100))
            .unwrap();
        assert_eq!(titles(&nodes), vec!["P2", "P9"]);
        assert!(nodes[0].descendant);
        assert!(nodes[0].children.is_empty());
        assert_eq!(nodes[0].menu_level, Some(0));
    }

    #[test]
    fn test_show_menu_levels_zero_and_one() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_menu(&context(&tree, "/"), &menu(0, 1, 100, 100))
            .unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].children.len(), 2);
        assert!(nodes[0].children.iter().all(|n| n.children.is_empty()));
        assert_eq!(titles(&nodes[1].children), vec!["P5"]);
        assert!(nodes[1].children[0].children.is_empty());
    }

    #[test]
    fn test_show_menu_hides_pages_outside_navigation() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_menu(&context(&tree, "/p6/p7/"), &MenuArgs::default())
            .unwrap();

        assert_eq!(titles(&nodes), vec!["P1", "P4"]);
    }

    #[test]
    fn test_show_menu_levels_and_parent_links() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_menu(&context(&tree, "/p9/p10/"), &MenuArgs::default())
            .unwrap();

        let p9 = &nodes[0].children[1];
        let p10 = &p9.children[0];
        assert_eq!((nodes[0].level, p9.level, p10.level), (0, 1, 2));
        assert_eq!(p10.menu_level, Some(2));
        assert_eq!(p10.parent_id, Some(PageId(9)));
        assert_eq!(p10.parent_url.as_deref(), Some("/p9/"));
        assert_eq!(nodes[0].parent_url, None);
        assert!(p10.selected);
        assert!(p9.ancestor && nodes[0].ancestor);
        assert!(p10.children[0].descendant);
    }

    #[test]
    fn test_show_menu_without_current_page() {
        let tree = fixtures::extended_menus();
        let ctx = RenderContext::new("/elsewhere/", None);

        let nodes = tree.show_menu(&ctx, &MenuArgs::default()).unwrap();

        assert_eq!(titles(&nodes), vec!["P1", "P4"]);
        assert!(nodes.iter().all(|n| !n.selected && !n.ancestor && !n.sibling));
        assert!(nodes.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_show_menu_unknown_page() {
        let tree = fixtures::extended_menus();
        let ctx = RenderContext::new("/", Some(PageId(99)));

        let err = tree.show_menu(&ctx, &MenuArgs::default()).unwrap_err();

        assert!(matches!(err, EngineError::UnknownPage(PageId(99))));
    }

    #[test]
    fn test_show_menu_below_id() {
        let tree = fixtures::extended_menus();
        let args = MenuArgs {
            root_id: Some("p9".to_owned()),
            ..MenuArgs::default()
        };

        let nodes = tree.show_menu(&context(&tree, "/"), &args).unwrap();

        assert_eq!(titles(&nodes), vec!["P10"]);
        assert_eq!(nodes[0].parent_url, None);
        assert_eq!(nodes[0].parent_id, Some(PageId(9)));
        assert_eq!(nodes[0].level, 2);
        assert_eq!(nodes[0].menu_level, Some(0));
        assert_eq!(titles(&nodes[0].children), vec!["P11"]);
        assert_eq!(nodes[0].children[0].menu_level, Some(1));
    }

    #[test]
    fn test_show_menu_below_unknown_id() {
        let tree = fixtures::extended_menus();
        let args = MenuArgs {
            root_id: Some("missing".to_owned()),
            ..MenuArgs::default()
        };

        let nodes = tree.show_menu(&context(&tree, "/"), &args).unwrap();

        assert!(nodes.is_empty());
    }

    #[test]
    fn test_show_menu_empty_constraints_are_ignored() {
        let tree = fixtures::extended_menus();
        let args = MenuArgs {
            namespace: Some(String::new()),
            root_id: Some(String::new()),
            ..MenuArgs::default()
        };

        let nodes = tree.show_menu(&context(&tree, "/"), &args).unwrap();

        assert_eq!(titles(&nodes), vec!["P1", "P4"]);
    }

    #[test]
    fn test_show_menu_namespace_filter() {
        let tree = PageTree::from_yaml_str(
            "\
pages:
  - title: Home
    children:
      - title: Blog
        namespace: Blog
      - title: About
  - title: News
    namespace: Blog
",
        )
        .unwrap();
        let args = MenuArgs {
            namespace: Some("Blog".to_owned()),
            ..MenuArgs::default()
        };

        let nodes = tree.show_menu(&context(&tree, "/"), &args).unwrap();

        assert_eq!(titles(&nodes), vec!["Blog", "News"]);
        assert_eq!(nodes[0].parent_url, None);
        assert_eq!(nodes[0].parent_namespace.as_deref(), Some("CMSMenu"));
        assert_eq!(nodes[0].namespace, "Blog");
    }

    #[test]
    fn test_show_menu_hides_members_only_pages() {
        let tree = PageTree::from_yaml_str(
            "\
pages:
  - title: Home
    children:
      - title: Members
        limit_visibility: users
        children:
          - title: Lounge
      - title: Guests
        limit_visibility: anonymous
",
        )
        .unwrap();

        let nodes = tree
            .show_menu(&context(&tree, "/"), &MenuArgs::default())
            .unwrap();

        assert_eq!(titles(&nodes[0].children), vec!["Guests"]);
        assert!(!nodes[0].children[0].attributes.visible_for_authenticated);
    }

    #[test]
    fn test_members_only_current_page_selects_public_ancestor() {
        let tree = PageTree::from_yaml_str(
            "\
pages:
  - title: Home
    children:
      - title: Members
        limit_visibility: users
        children:
          - title: Lounge
      - title: About
",
        )
        .unwrap();

        for path in ["/members/", "/members/lounge/"] {
            let nodes = tree
                .show_menu(&context(&tree, path), &MenuArgs::default())
                .unwrap();

            let home = &nodes[0];
            assert!(home.selected);
            assert!(!home.ancestor);
            assert_eq!(titles(&home.children), vec!["About"]);
            assert!(home.children[0].descendant);
            assert!(!home.children[0].sibling);
        }

        let nodes = tree
            .show_sub_menu(&context(&tree, "/members/"), &SubMenuArgs::default())
            .unwrap();
        assert_eq!(titles(&nodes), vec!["About"]);
    }

    #[test]
    fn test_members_only_top_level_page_falls_back_to_home() {
        let tree = PageTree::from_yaml_str(
            "\
pages:
  - title: Home
  - title: Staff
    limit_visibility: users
    children:
      - title: Rota
",
        )
        .unwrap();

        let nodes = tree
            .show_menu(&context(&tree, "/staff/rota/"), &MenuArgs::default())
            .unwrap();

        assert_eq!(titles(&nodes), vec!["Home"]);
        assert!(nodes[0].selected);
    }

    #[test]
    fn test_soft_root_selected() {
        let tree = fixtures::soft_root();

        let nodes = tree
            .show_menu(&context(&tree, "/projects/"), &MenuArgs::default())
            .unwrap();

        assert_eq!(titles(&nodes), vec!["Projects"]);
        assert!(nodes[0].selected);
        assert_eq!(nodes[0].level, 0);
        assert_eq!(nodes[0].parent_url, None);
        assert_eq!(titles(&nodes[0].children), vec!["django CMS", "django Shop"]);
    }

    #[test]
    fn test_soft_root_ancestor() {
        let tree = fixtures::soft_root();

        let nodes = tree
            .show_menu(&context(&tree, "/projects/django-cms/"), &MenuArgs::default())
            .unwrap();

        assert_eq!(titles(&nodes), vec!["Projects"]);
        assert!(nodes[0].ancestor);
        assert!(nodes[0].attributes.soft_root);
        assert!(nodes[0].children[0].selected);
        assert!(nodes[0].children[1].sibling);
        assert_eq!(nodes[0].children[0].level, 1);
    }

    #[test]
    fn test_soft_root_outside_active_branch() {
        let tree = fixtures::soft_root();

        let nodes = tree
            .show_menu(&context(&tree, "/people/"), &MenuArgs::default())
            .unwrap();
        assert_eq!(titles(&nodes), vec!["Home"]);
        assert_eq!(titles(&nodes[0].children), vec!["Projects", "People"]);
        assert!(nodes[0].children[0].children.is_empty());

        let nodes = tree
            .show_menu(&context(&tree, "/"), &menu(0, 100, 100, 100))
            .unwrap();
        assert_eq!(nodes[0].children[0].children.len(), 2);
    }

    #[test]
    fn test_soft_root_ignored_below_id() {
        let tree = fixtures::soft_root();
        let args = MenuArgs {
            root_id: Some("projects".to_owned()),
            ..MenuArgs::default()
        };

        let nodes = tree
            .show_menu(&context(&tree, "/projects/django-cms/"), &args)
            .unwrap();

        assert_eq!(titles(&nodes), vec!["django CMS", "django Shop"]);
        assert!(nodes[0].selected);
        assert_eq!(nodes[0].level, 2);
    }

    #[test]
    fn test_show_sub_menu_defaults() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_sub_menu(&context(&tree, "/"), &SubMenuArgs::default())
            .unwrap();

        assert_eq!(titles(&nodes), vec!["P2", "P9"]);
        assert!(nodes[0].descendant);
        assert_eq!(nodes[0].children.len(), 1);
        assert_eq!(nodes[1].children.len(), 1);
        assert_eq!(nodes[1].children[0].children.len(), 1);
        assert_eq!(nodes[0].parent_url.as_deref(), Some("/"));
    }

    #[test]
    fn test_show_sub_menu_one_level() {
        let tree = fixtures::extended_menus();
        let args = SubMenuArgs {
            levels: 1,
            ..SubMenuArgs::default()
        };

        let nodes = tree.show_sub_menu(&context(&tree, "/"), &args).unwrap();

        assert_eq!(nodes.len(), 2);
        assert!(nodes.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_show_sub_menu_current_page() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_sub_menu(&context(&tree, "/p9/"), &SubMenuArgs::default())
            .unwrap();

        assert_eq!(titles(&nodes), vec!["P10"]);
        assert_eq!(nodes[0].url, "/p9/p10/");
        assert_eq!(nodes[0].children[0].url, "/p9/p10/p11/");
        assert_eq!(nodes[0].children[0].parent_id, Some(nodes[0].id));
    }

    #[test]
    fn test_show_sub_menu_root_level_one() {
        let tree = fixtures::extended_menus();
        let args = SubMenuArgs {
            levels: 2,
            root_level: Some(1),
            ..SubMenuArgs::default()
        };

        let nodes = tree.show_sub_menu(&context(&tree, "/p9/"), &args).unwrap();

        assert_eq!(titles(&nodes), vec!["P2", "P9"]);
        assert!(nodes.iter().all(|n| n.children.len() == 1));
        assert_eq!(nodes[1].url, "/p9/");
        assert!(nodes[1].selected);
        assert_eq!(nodes[1].parent_url.as_deref(), Some("/"));
    }

    #[test]
    fn test_show_sub_menu_include_root() {
        let tree = fixtures::extended_menus();
        let args = SubMenuArgs {
            root_level: Some(0),
            ..SubMenuArgs::default()
        };

        let nodes = tree.show_sub_menu(&context(&tree, "/p2/p3/"), &args).unwrap();

        assert_eq!(titles(&nodes), vec!["P1"]);
        assert!(nodes[0].ancestor);
        assert_eq!(nodes[0].menu_level, Some(0));
        assert_eq!(titles(&nodes[0].children), vec!["P2", "P9"]);
    }

    #[test]
    fn test_show_sub_menu_nephews() {
        let tree = fixtures::extended_menus();
        let args = SubMenuArgs {
            root_level: Some(1),
            nephews: 0,
            ..SubMenuArgs::default()
        };

        let nodes = tree.show_sub_menu(&context(&tree, "/p9/"), &args).unwrap();

        assert_eq!(titles(&nodes), vec!["P2", "P9"]);
        assert!(nodes[0].sibling);
        assert!(nodes[0].children.is_empty());
        assert_eq!(nodes[1].children.len(), 1);
    }

    #[test]
    fn test_show_sub_menu_without_current_page() {
        let tree = fixtures::extended_menus();
        let ctx = RenderContext::new("/", None);

        let nodes = tree.show_sub_menu(&ctx, &SubMenuArgs::default()).unwrap();

        assert!(nodes.is_empty());
    }

    #[test]
    fn test_show_breadcrumb() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_breadcrumb(&context(&tree, "/p2/p3/"), &BreadcrumbArgs::default())
            .unwrap();

        assert_eq!(titles(&nodes), vec!["P1", "P2", "P3"]);
        assert_eq!(nodes[0].parent_url, None);
        assert_eq!(nodes[1].parent_url.as_deref(), Some("/"));
        assert_eq!(nodes[2].parent_url.as_deref(), Some("/p2/"));
        assert!(nodes[2].selected);
        assert!(nodes.iter().all(|n| n.menu_level.is_none()));
        assert_eq!(nodes[2].level, 2);
    }

    #[test]
    fn test_show_breadcrumb_nodes_have_no_children() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_breadcrumb(&context(&tree, "/p9/"), &BreadcrumbArgs::default())
            .unwrap();

        assert_eq!(titles(&nodes), vec!["P1", "P9"]);
        assert!(nodes.iter().all(NavigationNode::is_leaf_node));
    }

    #[test]
    fn test_show_breadcrumb_start_level() {
        let tree = fixtures::extended_menus();
        let ctx = context(&tree, "/p2/p3/");

        let args = BreadcrumbArgs {
            start_level: 1,
            ..BreadcrumbArgs::default()
        };
        let nodes = tree.show_breadcrumb(&ctx, &args).unwrap();
        assert_eq!(titles(&nodes), vec!["P2", "P3"]);

        let args = BreadcrumbArgs {
            start_level: 4,
            ..BreadcrumbArgs::default()
        };
        assert!(tree.show_breadcrumb(&ctx, &args).unwrap().is_empty());
    }

    #[test]
    fn test_show_breadcrumb_only_visible() {
        let tree = fixtures::extended_menus();
        let ctx = context(&tree, "/p6/p7/");

        let nodes = tree.show_breadcrumb(&ctx, &BreadcrumbArgs::default()).unwrap();
        assert_eq!(titles(&nodes), vec!["P1", "P7"]);

        let args = BreadcrumbArgs {
            only_visible: false,
            ..BreadcrumbArgs::default()
        };
        let nodes = tree.show_breadcrumb(&ctx, &args).unwrap();
        assert_eq!(titles(&nodes), vec!["P1", "P6", "P7"]);
    }

    #[test]
    fn test_show_breadcrumb_home() {
        let tree = fixtures::extended_menus();

        let nodes = tree
            .show_breadcrumb(&context(&tree, "/"), &BreadcrumbArgs::default())
            .unwrap();
        assert_eq!(titles(&nodes), vec!["P1"]);

        let nodes = tree
            .show_breadcrumb(&RenderContext::new("/", None), &BreadcrumbArgs::default())
            .unwrap();
        assert_eq!(titles(&nodes), vec!["P1"]);
    }

    #[test]
    fn test_show_breadcrumb_below_soft_root() {
        let tree = fixtures::soft_root();

        let nodes = tree
            .show_breadcrumb(
                &context(&tree, "/projects/django-shop/"),
                &BreadcrumbArgs::default(),
            )
            .unwrap();

        assert_eq!(titles(&nodes), vec!["Projects", "django Shop"]);
    }
}
