//! Render context resolution.

use cmsnav_tree::{PageResolver, RenderContext};
use percent_encoding::percent_decode_str;

/// Build the render context for a request.
///
/// `current_page` overrides the request path when present and non-empty.
/// The chosen path always goes through the resolver; a path that matches
/// no page yields a context without a current page.
pub(crate) fn resolve_context(
    resolver: &dyn PageResolver,
    request_path: &str,
    current_page: Option<&str>,
) -> RenderContext {
    let overridden = current_page.filter(|p| !p.is_empty());
    let path = match overridden {
        Some(path) => path.to_owned(),
        None => percent_decode_str(request_path)
            .decode_utf8_lossy()
            .into_owned(),
    };

    let page = resolver.resolve(&path);
    match page {
        Some(page) => tracing::debug!(path = %path, page = %page, "Resolved current page"),
        None if overridden.is_some() => {
            tracing::debug!(path = %path, "current_page override matches no page");
        }
        None => tracing::debug!(path = %path, "Request path matches no page"),
    }

    RenderContext::new(path, page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmsnav_tree::{PageId, PageTree, fixtures};

    #[test]
    fn test_request_path_is_resolved() {
        let tree = fixtures::extended_menus();
        let ctx = resolve_context(&tree, "/cms-api/show-menu/", None);
        assert_eq!(ctx.path(), "/cms-api/show-menu/");
        assert_eq!(ctx.current_page(), Some(PageId(1)));
    }

    #[test]
    fn test_override_replaces_request_path() {
        let tree = fixtures::extended_menus();
        let ctx = resolve_context(&tree, "/cms-api/show-menu/", Some("/p9/p10/"));
        assert_eq!(ctx.path(), "/p9/p10/");
        assert_eq!(ctx.current_page(), Some(PageId(10)));
    }

    #[test]
    fn test_empty_override_is_absent() {
        let tree = fixtures::extended_menus();
        let ctx = resolve_context(&tree, "/p4/", Some(""));
        assert_eq!(ctx.path(), "/p4/");
        assert_eq!(ctx.current_page(), Some(PageId(4)));
    }

    #[test]
    fn test_request_path_is_percent_decoded() {
        let tree = PageTree::from_yaml_str(
            "pages:\n  - title: Home\n    children:\n      - title: Über uns\n",
        )
        .unwrap();
        let ctx = resolve_context(&tree, "/%C3%BCber-uns/", None);
        assert_eq!(ctx.path(), "/über-uns/");
        assert_eq!(ctx.current_page(), Some(PageId(2)));
    }

    #[test]
    fn test_unresolved_path_has_no_current_page() {
        let empty = PageTree::from_yaml_str("pages: []\n").unwrap();
        let ctx = resolve_context(&empty, "/anything/", Some("/missing/"));
        assert_eq!(ctx.path(), "/missing/");
        assert_eq!(ctx.current_page(), None);
    }
}
