//! HTTP server for the FutureHouse agent gateway
//!
//! Wires the ask/batch routes, the embedded root page, and the ambient
//! health/version endpoints into one Axum router and serves it with graceful
//! shutdown.

pub mod routes;
pub mod state;
mod static_files;

pub use state::AppState;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue,
    },
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Version information for the server
#[derive(serde::Serialize)]
struct VersionInfo {
    version: String,
}

/// Run the HTTP server
pub async fn run_server(
    port: u16,
    bind: &str,
    state: AppState,
    cors_origins: Option<Vec<String>>,
) -> Result<(), String> {
    // Build CORS layer
    // Must be the outermost layer so preflight OPTIONS requests are handled
    // before the route handlers
    let cors = match &cors_origins {
        Some(origins) if !origins.is_empty() => {
            // Restricted CORS: only allow specified origins
            let allowed_origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods(Any)
                .allow_headers([CONTENT_TYPE, ACCEPT])
        }
        _ => {
            // Permissive CORS: allow any origin (default for development)
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers([CONTENT_TYPE, ACCEPT])
        }
    };

    // Build the router
    let app = Router::new()
        .route("/", get(static_files::serve_index))
        .route("/ask_crow", post(routes::ask_routes::ask_crow))
        .route("/ask_falcon", post(routes::ask_routes::ask_falcon))
        .route("/ask_phoenix", post(routes::ask_routes::ask_phoenix))
        .route("/ask_owl", post(routes::ask_routes::ask_owl))
        .route("/ask_multi", post(routes::batch_routes::ask_multi))
        .route("/health", get(health_handler))
        .route("/api/version", get(version_handler))
        .layer(cors)
        .with_state(state.clone());

    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    let cors_display = match &cors_origins {
        Some(origins) if !origins.is_empty() => origins.join(", "),
        _ => "*".to_string(),
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 FutureHouse Agent Gateway                     ║");
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║                                                               ║");
    println!("║  Server URL: http://{}:{:<24}  ║", bind, port);
    println!("║  CORS Origins: {:<45}║", cors_display);
    println!("║                                                               ║");
    println!("║  Endpoints:                                                   ║");
    println!("║    GET  /               - Web UI                              ║");
    println!("║    POST /ask_crow       - Concise literature search           ║");
    println!("║    POST /ask_falcon     - Deep literature review              ║");
    println!("║    POST /ask_phoenix    - Chemistry tasks                     ║");
    println!("║    POST /ask_owl        - Precedent search                    ║");
    println!("║    POST /ask_multi      - Sequential batch of tasks           ║");
    println!("║    GET  /health         - Health check                        ║");
    println!("║    GET  /api/version    - Server version info                 ║");
    println!("║                                                               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server listening on http://{}", addr);

    // Create shutdown signal that waits for the shutdown state flag
    let shutdown_state = state.shutdown_state.clone();
    let shutdown_signal = async move {
        loop {
            if shutdown_state.is_shutdown_requested() {
                log::info!("Shutdown signal received, stopping server...");
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))
}

/// Health check endpoint
async fn health_handler() -> &'static str {
    "OK"
}

/// Version endpoint - returns the crate version
async fn version_handler() -> Json<VersionInfo> {
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
