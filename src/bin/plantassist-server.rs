//! PlantAssist HTTP service
//! Local API for the browser client; catalog-only when no API key is set

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use plantassist_lib::gemini::{GeminiClient, GeminiRequestConfig, DEFAULT_API_URL};
use plantassist_lib::server::{app, ApiState};

#[derive(Debug, Parser)]
#[command(name = "plantassist-server")]
#[command(about = "Local HTTP service for the PlantAssist web client")]
struct Args {
    #[arg(long, default_value = "127.0.0.1:4020")]
    bind: SocketAddr,
    /// Generative-language API key; falls back to the GEMINI_API_KEY env var
    #[arg(long)]
    api_key: Option<String>,
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let api_key = args.api_key.or_else(|| std::env::var("GEMINI_API_KEY").ok());
    let gemini = match api_key {
        Some(key) => {
            let config = GeminiRequestConfig {
                timeout_secs: args.timeout_secs,
                ..GeminiRequestConfig::default()
            };
            Some(Arc::new(GeminiClient::with_config(&args.api_url, &key, config)))
        }
        None => {
            tracing::warn!("no API key configured; serving catalog-only answers");
            None
        }
    };

    let state = ApiState { gemini };
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!("listening on {}", args.bind);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
