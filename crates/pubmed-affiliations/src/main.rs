//! PubMed Affiliation Exporter - Entry Point

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_affiliations::config::{Config, api};
use pubmed_affiliations::{PubMedClient, formatters, pipeline};

#[derive(Parser, Debug)]
#[command(name = "pubmed-affiliations")]
#[command(about = "Fetch research papers from PubMed based on a query.")]
#[command(version)]
struct Cli {
    /// PubMed query string
    query: String,

    /// Enable debug mode (prints raw API responses)
    #[arg(short, long)]
    debug: bool,

    /// Specify output CSV file name
    #[arg(short, long, default_value = api::DEFAULT_OUTPUT_FILE)]
    file: String,

    /// Maximum number of papers to fetch
    #[arg(long, default_value_t = api::DEFAULT_MAX_RESULTS)]
    max_results: u32,

    /// NCBI API key (optional, enables higher rate limits)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Retries for transient HTTP failures
    #[arg(long, default_value_t = 0)]
    retries: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { cli.log_level.as_str() };
    init_tracing(log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        query = %cli.query,
        max_results = cli.max_results,
        "Starting PubMed search"
    );

    let config = Config::new(cli.api_key.filter(|k| !k.trim().is_empty()))
        .with_max_retries(cli.retries);
    tracing::debug!(
        api_key = config.has_api_key(),
        retries = config.max_retries,
        request_timeout_secs = config.request_timeout.as_secs(),
        "Client configured"
    );
    let client = PubMedClient::new(config)?;

    let papers = pipeline::fetch_research_papers(&client, &cli.query, cli.max_results, cli.debug)
        .await;

    formatters::save_to_csv(&papers, &cli.file)?;

    if cli.debug {
        println!("Successfully saved {} papers to {}", papers.len(), cli.file);
    }
    println!("CSV file has been successfully generated.");

    Ok(())
}
