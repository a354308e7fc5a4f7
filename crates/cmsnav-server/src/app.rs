//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{OriginalUri, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::variant::VARIANTS;

/// Create the application router.
///
/// Menu endpoints and the root listing are mounted under `state.prefix`.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let prefix = state.prefix.clone();

    let mut router = Router::new().route(&format!("{prefix}/"), get(handlers::root::get_root));
    if !prefix.is_empty() {
        router = router.route(&prefix, get(handlers::root::get_root));
    }

    for spec in &VARIANTS {
        let handler = move |State(state): State<Arc<AppState>>,
                            OriginalUri(uri): OriginalUri,
                            Query(query): Query<HashMap<String, String>>| async move {
            handlers::render_menu(spec, &state, uri.path(), &query).map(Json)
        };
        router = router.route(&format!("{prefix}{}", spec.route), get(handler));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
