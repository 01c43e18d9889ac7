//! price-scout - Cross-retailer product price comparison CLI and HTTP service.

use anyhow::Result;
use clap::{Parser, Subcommand};
use price_scout::commands::{CompareCommand, SearchCommand};
use price_scout::config::{Config, OutputFormat};
use price_scout::country::Country;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "price-scout",
    version,
    about = "Compare product prices across major retailers",
    long_about = "Finds product pages for a query on a country's major retailers, scrapes their \
                  displayed prices and lists the offers cheapest first."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "SCOUT_PROXY")]
    proxy: Option<String>,

    /// Delay between search API calls in milliseconds
    #[arg(long, global = true, env = "SCOUT_DELAY")]
    delay: Option<u64>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Product pages fetched at once
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search retailers for a product and compare prices
    #[command(alias = "s")]
    Search {
        /// Search query
        query: String,

        /// Country to search (US, IN, UK, CA, AU)
        #[arg(short = 'C', long)]
        country: Option<Country>,
    },

    /// Compare prices of specific product links
    #[command(alias = "c")]
    Compare {
        /// Product page URLs
        #[arg(required = true)]
        links: Vec<String>,

        /// Country used to infer currency for non-Amazon links
        #[arg(short = 'C', long)]
        country: Option<Country>,
    },

    /// Run the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// List supported countries
    Countries,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(delay) = cli.delay {
        config.search_delay_ms = delay;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(concurrency) = cli.concurrency {
        config.concurrency = concurrency;
    }

    match cli.command {
        Commands::Search { query, country } => {
            if let Some(country) = country {
                config.country = country.code().to_string();
            }

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&query).await?;
            println!("{}", output);
        }

        Commands::Compare { links, country } => {
            if let Some(country) = country {
                config.country = country.code().to_string();
            }

            let cmd = CompareCommand::new(config);
            let output = cmd.execute(&links).await?;
            println!("{}", output);
        }

        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }

            price_scout::server::run(&config).await?;
        }

        Commands::Countries => {
            println!("Supported countries:\n");
            println!("{:<6} {:<10} {}", "Code", "Currency", "Retailers");
            println!("{:-<6} {:-<10} {:-<40}", "", "", "");

            for country in Country::all() {
                println!(
                    "{:<6} {:<10} {}",
                    country.code(),
                    country.currency().as_str(),
                    country.retailers().join(", ")
                );
            }
        }
    }

    Ok(())
}
