use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feed_assembly::{assemble, config::FeedConfig, feed::FeedClient, render, stub};

#[derive(Parser)]
#[command(name = "feedasm")]
#[command(about = "Fetch posts with their authors and comments")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the feed and print every post with its author and comments
    Fetch {
        /// Base URL of the feed service (overrides FEED_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,

        /// Per-request timeout in seconds (overrides FEED_REQUEST_TIMEOUT_SECS)
        #[arg(long)]
        timeout: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Serve a stub feed for local development
    Serve {
        /// Port for the stub server
        #[arg(short, long, default_value = "9999")]
        port: u16,

        /// JSON fixture with posts, authors and comments (built-in sample if omitted)
        #[arg(short, long)]
        fixture: Option<PathBuf>,

        /// Artificial latency added to every response, in milliseconds
        #[arg(long, default_value = "0")]
        delay_ms: u64,
    },
}

/// Initialize tracing with output to stderr (fetch mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "feed_assembly=info,tower_http=info".into()),
    );

    if use_stderr {
        // Fetch mode: stdout carries the rendered feed
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn fetch(base_url: Option<String>, timeout: Option<u64>, json: bool) -> anyhow::Result<()> {
    let config = FeedConfig::from_env().with_overrides(base_url, timeout);
    let client = Arc::new(FeedClient::new(&config)?);
    tracing::info!("Fetching feed from {}", client.base_url());
    let records = assemble::fetch_feed(client).await?;

    let output = if json {
        render::render_json(&records)?
    } else {
        render::render_text(&records)
    };
    println!("{}", output.trim_end());
    Ok(())
}

async fn serve(port: u16, fixture: Option<PathBuf>, delay_ms: u64) -> anyhow::Result<()> {
    let fixture = match fixture {
        Some(path) => stub::FeedFixture::from_file(path)?,
        None => stub::FeedFixture::sample(),
    };
    let app = stub::create_router(fixture, Duration::from_millis(delay_ms));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!(
        "Stub feed listening on http://127.0.0.1:{}{}/",
        port,
        stub::BASE_PATH
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Fetch {
            base_url,
            timeout,
            json,
        }) => fetch(base_url, timeout, json).await,
        Some(Commands::Serve {
            port,
            fixture,
            delay_ms,
        }) => serve(port, fixture, delay_ms).await,
        None => fetch(None, None, false).await,
    }
}
