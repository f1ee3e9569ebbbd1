use clap::Parser;

use fh_gateway_lib::futurehouse::FutureHouseClient;
use fh_gateway_lib::server::{self, AppState};
use fh_gateway_lib::shutdown;

/// FutureHouse Agent Gateway - HTTP front-end for FutureHouse research agents
#[derive(Parser, Debug)]
#[command(name = "fh-gateway")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to bind the server to
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Address to bind the server to
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// FutureHouse API key (or set FUTUREHOUSE_API_KEY)
    #[arg(long, env = "FUTUREHOUSE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL of the FutureHouse API
    #[arg(long, env = "FUTUREHOUSE_BASE_URL")]
    base_url: Option<String>,

    /// Allowed CORS origin (repeatable). Any origin is allowed when unset
    #[arg(long = "cors-origin")]
    cors_origin: Option<Vec<String>>,
}

fn main() {
    // Parse before logger init so a missing API key fails fast with clap's
    // usage message
    let cli = Cli::parse();

    env_logger::init();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    rt.block_on(async {
        // Initialize shutdown state
        let shutdown_state = shutdown::ShutdownState::new();
        if let Err(e) = shutdown::register_signal_handlers(shutdown_state.clone()) {
            log::warn!("Failed to register signal handlers: {}", e);
        }

        // One authenticated client for the process lifetime
        let mut client = FutureHouseClient::new(cli.api_key);
        if let Some(base_url) = cli.base_url {
            client = client.with_base_url(base_url);
        }

        let state = AppState::new(client, shutdown_state);

        // Run the server
        if let Err(e) = server::run_server(cli.port, &cli.bind, state, cli.cors_origin).await {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        }
    });
}
