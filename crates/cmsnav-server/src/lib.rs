//! HTTP server exposing cmsnav menus as a REST API.
//!
//! Each endpoint renders one menu operation of a [`NavigationEngine`]
//! relative to the current page and returns the node tree as JSON:
//!
//! | Route | Operation |
//! |---|---|
//! | `{prefix}/show-menu/` | full menu |
//! | `{prefix}/show-menu-below-id/` | menu below a `reverse_id` |
//! | `{prefix}/show-submenu/` | sub menu |
//! | `{prefix}/show-breadcrumb/` | breadcrumb (flat) |
//! | `{prefix}/` | API root listing |
//!
//! The current page is the request path, or the `current_page` query
//! parameter when given, resolved through a [`PageResolver`].
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use cmsnav_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         pages_file: PathBuf::from("pages.yaml"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! [`NavigationEngine`]: cmsnav_tree::NavigationEngine
//! [`PageResolver`]: cmsnav_tree::PageResolver

mod app;
mod context;
mod error;
mod handlers;
mod middleware;
mod params;
mod serializer;
mod state;
mod variant;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use cmsnav_tree::PageTree;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Page tree file.
    pub pages_file: PathBuf,
    /// Mount point of the API (empty or starting with `/`).
    pub prefix: String,
    /// Default `extra_active` of the full menu endpoint.
    pub show_menu_extra_active: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            pages_file: PathBuf::from("pages.yaml"),
            prefix: "/cms-api".to_owned(),
            show_menu_extra_active: cmsnav_config::DEFAULT_SHOW_MENU_EXTRA_ACTIVE,
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the page tree cannot be loaded or the server fails
/// to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let tree = PageTree::load(&config.pages_file)?;
    let state = Arc::new(AppState::from_tree(
        tree,
        config.prefix.clone(),
        config.show_menu_extra_active,
    ));

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, prefix = %config.prefix, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from cmsnav config.
#[must_use]
pub fn server_config_from_config(config: &cmsnav_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        pages_file: config.pages_resolved.file.clone(),
        prefix: config.api.prefix.clone(),
        show_menu_extra_active: config.menu.show_menu_extra_active,
    }
}
