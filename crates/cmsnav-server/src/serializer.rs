//! JSON representation of navigation nodes.

use cmsnav_tree::{MAX_TREE_DEPTH, NavigationNode, NodeAttributes, PageId};
use serde::Serialize;

use crate::error::ServerError;

/// Serialized navigation node.
#[derive(Debug, Serialize)]
pub(crate) struct NodeResponse {
    id: PageId,
    title: String,
    url: String,
    selected: bool,
    namespace: String,
    visible: bool,
    ancestor: bool,
    descendant: bool,
    sibling: bool,
    is_leaf_node: bool,
    level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    menu_level: Option<u32>,
    parent_id: Option<PageId>,
    parent_url: Option<String>,
    parent_namespace: Option<String>,
    attrs: AttrsResponse,
    children: Vec<NodeResponse>,
}

/// Serialized attribute bag.
#[derive(Debug, Serialize)]
struct AttrsResponse {
    auth_required: bool,
    is_home: bool,
    redirect_url: Option<String>,
    reverse_id: Option<String>,
    soft_root: bool,
    visible_for_anonymous: bool,
    visible_for_authenticated: bool,
}

impl From<NodeAttributes> for AttrsResponse {
    fn from(attrs: NodeAttributes) -> Self {
        Self {
            auth_required: attrs.auth_required,
            is_home: attrs.is_home,
            redirect_url: attrs.redirect_url,
            reverse_id: attrs.reverse_id,
            soft_root: attrs.soft_root,
            visible_for_anonymous: attrs.visible_for_anonymous,
            visible_for_authenticated: attrs.visible_for_authenticated,
        }
    }
}

/// Serialize engine output.
///
/// With `flatten`, children are dropped instead of serialized.
pub(crate) fn serialize_nodes(
    nodes: Vec<NavigationNode>,
    flatten: bool,
) -> Result<Vec<NodeResponse>, ServerError> {
    nodes
        .into_iter()
        .map(|node| serialize_node(node, flatten, 0))
        .collect()
}

fn serialize_node(
    node: NavigationNode,
    flatten: bool,
    depth: usize,
) -> Result<NodeResponse, ServerError> {
    if depth >= MAX_TREE_DEPTH {
        return Err(ServerError::TooDeep(MAX_TREE_DEPTH));
    }

    let children = if flatten {
        Vec::new()
    } else {
        node.children
            .into_iter()
            .map(|child| serialize_node(child, false, depth + 1))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(NodeResponse {
        id: node.id,
        title: node.title,
        url: node.url,
        selected: node.selected,
        namespace: node.namespace,
        visible: node.visible,
        ancestor: node.ancestor,
        descendant: node.descendant,
        sibling: node.sibling,
        is_leaf_node: children.is_empty(),
        level: node.level,
        menu_level: node.menu_level,
        parent_id: node.parent_id,
        parent_url: node.parent_url,
        parent_namespace: node.parent_namespace,
        attrs: node.attributes.into(),
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn node(id: u64, children: Vec<NavigationNode>) -> NavigationNode {
        NavigationNode {
            id: PageId(id),
            title: format!("P{id}"),
            url: format!("/p{id}/"),
            namespace: "CMSMenu".to_owned(),
            parent_id: None,
            parent_url: None,
            parent_namespace: None,
            level: 0,
            menu_level: Some(0),
            selected: false,
            ancestor: false,
            descendant: false,
            sibling: false,
            visible: true,
            attributes: NodeAttributes {
                auth_required: false,
                is_home: false,
                redirect_url: None,
                reverse_id: None,
                soft_root: false,
                visible_for_anonymous: true,
                visible_for_authenticated: true,
            },
            children,
        }
    }

    #[test]
    fn test_node_serialization() {
        let nodes = serialize_nodes(vec![node(1, vec![node(2, vec![])])], false).unwrap();

        let value = serde_json::to_value(&nodes).unwrap();

        assert_eq!(
            value[0],
            json!({
                "id": 1,
                "title": "P1",
                "url": "/p1/",
                "selected": false,
                "namespace": "CMSMenu",
                "visible": true,
                "ancestor": false,
                "descendant": false,
                "sibling": false,
                "is_leaf_node": false,
                "level": 0,
                "menu_level": 0,
                "parent_id": null,
                "parent_url": null,
                "parent_namespace": null,
                "attrs": {
                    "auth_required": false,
                    "is_home": false,
                    "redirect_url": null,
                    "reverse_id": null,
                    "soft_root": false,
                    "visible_for_anonymous": true,
                    "visible_for_authenticated": true
                },
                "children": [value[0]["children"][0].clone()]
            })
        );
        assert_eq!(value[0]["children"][0]["is_leaf_node"], true);
    }

    #[test]
    fn test_menu_level_omitted_when_absent() {
        let mut crumb = node(1, vec![]);
        crumb.menu_level = None;

        let value = serde_json::to_value(serialize_nodes(vec![crumb], true).unwrap()).unwrap();

        assert!(value[0].get("menu_level").is_none());
    }

    #[test]
    fn test_flatten_drops_children() {
        let nodes = serialize_nodes(vec![node(1, vec![node(2, vec![])])], true).unwrap();

        let value = serde_json::to_value(&nodes).unwrap();

        assert_eq!(value[0]["children"], json!([]));
        assert_eq!(value[0]["is_leaf_node"], true);
    }

    #[test]
    fn test_depth_limit() {
        let mut deep = node(0, vec![]);
        for id in 1..=300 {
            deep = node(id, vec![deep]);
        }

        let err = serialize_nodes(vec![deep], false).unwrap_err();

        assert!(matches!(err, ServerError::TooDeep(256)));
    }
}
