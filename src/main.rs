use anyhow::Context;
use clap::Parser;

use debate_evidence::api::{AppState, create_router};
use debate_evidence::config::CONFIG;

#[derive(Parser, Debug)]
#[command(version, about = "Finds citable evidence for a debate stance")]
struct Args {
    /// Address to listen on, overrides BIND_ADDR
    #[arg(long)]
    addr: Option<String>,

    /// Directory with the web UI, overrides STATIC_DIR
    #[arg(long)]
    static_dir: Option<String>,

    /// Return only extracted citations, never placeholders
    #[arg(long)]
    no_padding: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(true)
        .init();

    let mut config = (*CONFIG).clone();
    if let Some(addr) = args.addr {
        config.bind_addr = addr;
    }
    if let Some(dir) = args.static_dir {
        config.static_dir = dir;
    }
    if args.no_padding {
        config.pad_placeholders = false;
    }

    if config.api_key().is_none() {
        tracing::warn!("PERPLEXITY_API_KEY is not set, searches will fail until it is configured");
    }

    let addr = config.bind_addr.clone();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
