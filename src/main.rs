use amex_mock::application::gateway::CardGateway;
use amex_mock::config::{DEFAULT_CARDS_FILE, DEFAULT_PORT, GatewayConfig};
use amex_mock::interfaces::http::server::serve;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Mock American Express card gateway", long_about = None)]
struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// JSON file holding tokenized cards
    #[arg(long, env = "CARDS_FILE", default_value = DEFAULT_CARDS_FILE)]
    cards_file: PathBuf,

    /// Keep tokenized cards in memory only
    #[arg(long, conflicts_with = "cards_file")]
    in_memory: bool,

    /// Log at debug level, including incoming request bodies
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    let config = GatewayConfig {
        host: cli.host,
        port: cli.port,
        cards_file: (!cli.in_memory).then_some(cli.cards_file),
    };

    // A corrupt snapshot stops startup here, before anything is served.
    let store = config.open_store().into_diagnostic()?;
    let gateway = Arc::new(CardGateway::new(store));

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .into_diagnostic()?;
    serve(listener, gateway).await.into_diagnostic()?;

    Ok(())
}
