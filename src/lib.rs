// Module declarations
pub mod futurehouse;
pub mod sanitize;
pub mod shutdown;

// Server module (HTTP API)
pub mod server;
