//! Server application state shared across handlers

use crate::futurehouse::FutureHouseClient;
use crate::shutdown::ShutdownState;
use std::sync::Arc;

/// Shared state for the server.
///
/// Everything here is initialized once at startup and read-only for the
/// process lifetime.
#[derive(Clone)]
pub struct AppState {
    /// Authenticated FutureHouse client shared by all requests
    pub client: Arc<FutureHouseClient>,

    /// Shutdown state polled by the serve loop
    pub shutdown_state: ShutdownState,
}

impl AppState {
    /// Create the application state around an authenticated client
    pub fn new(client: FutureHouseClient, shutdown_state: ShutdownState) -> Self {
        Self {
            client: Arc::new(client),
            shutdown_state,
        }
    }
}
