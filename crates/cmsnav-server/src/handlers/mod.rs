//! HTTP request handlers.

pub(crate) mod root;

use std::collections::HashMap;

use crate::context::resolve_context;
use crate::error::ServerError;
use crate::params::MenuRequest;
use crate::serializer::{NodeResponse, serialize_nodes};
use crate::state::AppState;
use crate::variant::VariantSpec;

/// Handle a GET on a menu endpoint.
///
/// Resolves the render context, translates the query, calls the engine
/// and serializes the result.
pub(crate) fn render_menu(
    spec: &VariantSpec,
    state: &AppState,
    request_path: &str,
    query: &HashMap<String, String>,
) -> Result<Vec<NodeResponse>, ServerError> {
    let request = MenuRequest::translate(spec, query, state.show_menu_extra_active)?;
    let ctx = resolve_context(
        state.resolver.as_ref(),
        request_path,
        query.get("current_page").map(String::as_str),
    );

    tracing::debug!(
        tag = request.tag(),
        arguments = %request.arguments().join(" "),
        path = ctx.path(),
        "Rendering menu"
    );
    let nodes = request.render(state.engine.as_ref(), &ctx)?;
    serialize_nodes(nodes, spec.flatten)
}
