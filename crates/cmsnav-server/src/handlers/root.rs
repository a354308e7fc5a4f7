//! API root listing.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use serde_json::{Map, Value};

use crate::state::AppState;
use crate::variant::VARIANTS;

/// Handle GET on the API root: map each endpoint name to its URL.
///
/// URLs are absolute when the request carries a `Host` header.
pub(crate) async fn get_root(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Map<String, Value>> {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok());
    Json(listing(host, &state.prefix))
}

fn listing(host: Option<&str>, prefix: &str) -> Map<String, Value> {
    let base = match host {
        Some(host) => format!("http://{host}{prefix}"),
        None => prefix.to_owned(),
    };
    VARIANTS
        .iter()
        .map(|spec| (spec.name.to_owned(), Value::String(format!("{base}{}", spec.route))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_listing_with_host() {
        let value = Value::Object(listing(Some("localhost:7979"), "/cms-api"));
        assert_eq!(
            value,
            json!({
                "show-menu": "http://localhost:7979/cms-api/show-menu/",
                "show-menu-below-id": "http://localhost:7979/cms-api/show-menu-below-id/",
                "show-submenu": "http://localhost:7979/cms-api/show-submenu/",
                "show-breadcrumb": "http://localhost:7979/cms-api/show-breadcrumb/"
            })
        );
    }

    #[test]
    fn test_listing_without_host() {
        let listing = listing(None, "");
        assert_eq!(listing["show-menu"], "/show-menu/");
        assert_eq!(listing.len(), 4);
    }
}
