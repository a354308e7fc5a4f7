//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A query parameter could not be parsed.
    #[error("Invalid query parameter {parameter}: {value:?}")]
    InvalidParameter {
        /// Parameter name.
        parameter: &'static str,
        /// Raw value from the query string.
        value: String,
    },

    /// The navigation engine failed to render the menu.
    #[error("Menu rendering failed: {0}")]
    Engine(#[from] cmsnav_tree::EngineError),

    /// The node tree is deeper than the serializer accepts.
    #[error("Menu is nested deeper than {0} levels")]
    TooDeep(usize),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidParameter { parameter, value } => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Invalid query parameter", "parameter": parameter, "value": value}),
            ),
            Self::Engine(_) | Self::TooDeep(_) => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": self.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
