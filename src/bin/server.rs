//! Meteo Server Binary
//!
//! Starts the UDP weather server.

use clap::Parser;
use meteo::network::Server;
use meteo::{Config, Handler, RandomSource};
use tracing_subscriber::{fmt, EnvFilter};

/// Meteo Server
#[derive(Parser, Debug)]
#[command(name = "meteo-server")]
#[command(about = "UDP weather lookup server")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:56700")]
    listen: String,
}

fn main() {
    // Initialize tracing/logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,meteo=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("Meteo Server v{}", meteo::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder().listen_addr(&args.listen).build();

    let handler = Handler::new(RandomSource::new());
    let mut server = match Server::new(&config, handler) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
