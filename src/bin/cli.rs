//! Meteo CLI Client
//!
//! Sends one weather lookup and prints the result.

use clap::Parser;
use meteo::network::{format_result, parse_request_line, Client};
use meteo::protocol::DEFAULT_PORT;
use tracing_subscriber::{fmt, EnvFilter};

/// Meteo CLI
#[derive(Parser, Debug)]
#[command(name = "meteo-cli")]
#[command(about = "CLI client for the Meteo weather service")]
#[command(version)]
struct Args {
    /// Server hostname or IP
    #[arg(short, long, default_value = "localhost")]
    server: String,

    /// Server UDP port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Request line: "<type> <city>", e.g. "t roma"
    /// (t=temperature, h=humidity, w=wind, p=pressure)
    #[arg(short, long)]
    request: String,
}

fn main() {
    // Quiet by default; RUST_LOG opens it up
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> meteo::Result<()> {
    let request = parse_request_line(&args.request)?;

    let client = Client::connect((args.server.as_str(), args.port))?;
    let response = client.lookup(&request)?;

    println!(
        "Answer from {}. {}",
        client.server_addr(),
        format_result(&response, &request.city_text())
    );

    Ok(())
}
