mod config;

use anyhow::Result;
use axum::{routing::get, Json, Router};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use lensbot_channels::{ChannelAdapter, LineAdapter, LineConfig};

use config::Config;

#[derive(Parser)]
#[command(name = "lensbot")]
#[command(about = "Lensbot — LINE bot that recommends an eyewear lens type")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show current server status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    lensbot_logging::init_logger(&config.log_dir, &config.log_level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("lensbot is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    let (channel_secret, channel_access_token) = config.require_line()?;

    let adapter = LineAdapter::new(LineConfig {
        channel_secret,
        channel_access_token,
        webhook_path: config.line_webhook_path.clone(),
    });
    info!("[{}] Adapter ready at {}", adapter.name(), config.line_webhook_path);

    let app = Router::new()
        .route("/api/health", get(health))
        .merge(adapter.build_router())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.bind_address, config.port);
    info!("Lensbot webhook server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "lensbot" }))
}
