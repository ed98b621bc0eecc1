//! geocache CLI
//!
//! Runs the caching geocoding API, or performs one-off lookups against the
//! configured provider.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use geocache_api::{ApiConfig, ApiServer};
use geocache_core::constants::{
    DEFAULT_FORWARD_URL, DEFAULT_PROVIDER_TIMEOUT_SECONDS, DEFAULT_REVERSE_URL,
};
use geocache_resolver::GeocodingResolver;

/// geocache - caching facade for forward and reverse geocoding
#[derive(Parser)]
#[command(name = "geocache")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    provider: ProviderArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Provider settings; flags win over the environment and `.env`.
#[derive(Args)]
struct ProviderArgs {
    /// Forward geocoding endpoint
    #[arg(long, global = true, env = "GEOCODING_URL", default_value = DEFAULT_FORWARD_URL)]
    forward_url: String,
    /// Reverse geocoding endpoint
    #[arg(long, global = true, env = "REVERSE_GEOCODING_URL", default_value = DEFAULT_REVERSE_URL)]
    reverse_url: String,
    /// Provider access key
    #[arg(long, global = true, env = "GEOCODING_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,
    /// Provider timeout in seconds
    #[arg(long, global = true, env = "PROVIDER_TIMEOUT_SECONDS", default_value_t = DEFAULT_PROVIDER_TIMEOUT_SECONDS)]
    timeout: u64,
}

impl ProviderArgs {
    fn into_config(self) -> ApiConfig {
        ApiConfig {
            forward_url: self.forward_url,
            reverse_url: self.reverse_url,
            access_key: self.api_key,
            timeout_seconds: self.timeout,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Look up the coordinates of an address
    Forward {
        /// Address to geocode
        address: String,
    },

    /// Look up the address at a coordinate
    Reverse {
        /// Latitude in degrees
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        /// Longitude in degrees
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env fallbacks
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "geocache=debug,info"
    } else {
        "geocache=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cli.provider.into_config();

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(config, port, &bind).await,
        Commands::Forward { address } => cmd_forward(config, &address).await,
        Commands::Reverse { latitude, longitude } => cmd_reverse(config, latitude, longitude).await,
    }
}

/// Run the API server
async fn cmd_serve(config: ApiConfig, port: u16, bind: &str) -> Result<()> {
    println!("{}", "🚀 Starting geocache API server...".cyan().bold());
    println!("   {} http://{}:{}", "Listening on:".green(), bind, port);
    println!("   {} http://{}:{}/health", "Health check:".dimmed(), bind, port);
    println!("   {} {}", "Provider:".dimmed(), config.forward_url);
    println!("\n   Press Ctrl+C to stop.\n");

    let server = ApiServer::new(config).context("Failed to build API server")?;

    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .context("Invalid bind address")?;
    server.run(addr).await?;

    Ok(())
}

/// Geocode a single address
async fn cmd_forward(config: ApiConfig, address: &str) -> Result<()> {
    println!("{} {}", "🔍 Geocoding:".cyan().bold(), address);

    let resolver = GeocodingResolver::with_config(config.provider_config())
        .context("Failed to create provider client")?;

    let coordinate = resolver
        .resolve_forward(address)
        .await
        .context("Forward lookup failed")?;

    println!("\n{}", "✅ Resolved coordinates:".green().bold());
    println!("   {} {}", "Latitude:".dimmed(), coordinate.latitude);
    println!("   {} {}", "Longitude:".dimmed(), coordinate.longitude);
    println!("\n{}", serde_json::to_string_pretty(&coordinate)?);

    Ok(())
}

/// Reverse-geocode a single coordinate
async fn cmd_reverse(config: ApiConfig, latitude: f64, longitude: f64) -> Result<()> {
    println!(
        "{} {}, {}",
        "🔍 Reverse geocoding:".cyan().bold(),
        latitude,
        longitude
    );

    let resolver = GeocodingResolver::with_config(config.provider_config())
        .context("Failed to create provider client")?;

    let address = resolver
        .resolve_reverse(latitude, longitude)
        .await
        .context("Reverse lookup failed")?;

    println!("\n{} {}", "✅ Address:".green().bold(), address);

    Ok(())
}
